//! Support operations for closure period calculation.

/// Greatest common divisor via the Euclidean algorithm.
///
/// `gcd(0, 0)` is defined as `0`.
pub const fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Least common multiple, `|a*b| / gcd(a, b)`.
///
/// Returns `0` when either argument is zero. Division happens before
/// multiplication so the intermediate never exceeds the result.
pub const fn lcm(a: u128, b: u128) -> u128 {
    if a == 0 || b == 0 {
        return 0;
    }
    a / gcd(a, b) * b
}

/// Least common multiple of three frequencies.
///
/// Three `u32` inputs are bounded by `2^96`, so this cannot overflow.
pub fn lcm3(a: u32, b: u32, c: u32) -> u128 {
    lcm(lcm(a.into(), b.into()), c.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_basics() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(18, 12), 6);
        assert_eq!(gcd(7, 13), 1);
        assert_eq!(gcd(5, 0), 5);
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(0, 0), 0);
    }

    #[test]
    fn lcm_basics() {
        assert_eq!(lcm(4, 6), 12);
        assert_eq!(lcm(3, 5), 15);
        assert_eq!(lcm(1, 1), 1);
        assert_eq!(lcm(8, 4), 8);
        assert_eq!(lcm(0, 4), 0);
    }

    #[test]
    fn lcm3_matches_nested() {
        assert_eq!(lcm3(3, 4, 5), 60);
        assert_eq!(lcm3(1, 2, 3), 6);
        assert_eq!(lcm3(2, 4, 8), 8);
        assert_eq!(lcm3(1, 1, 1), 1);
    }

    #[test]
    fn lcm3_large_coprimes_do_not_overflow() {
        // Consecutive integers with odd ends are pairwise coprime.
        let p = u32::MAX;
        let q = u32::MAX - 1;
        let r = u32::MAX - 2;
        assert_eq!(lcm3(p, q, r), u128::from(p) * u128::from(q) * u128::from(r));
    }
}
