use crate::point::{Point3, PointSequence};

/// A lazy, restartable stream of curve points.
pub type Points<'a> = Box<dyn Iterator<Item = Point3> + 'a>;

/// Common interface implemented by all parametric curve generators.
///
/// Implementations are validated at construction, so generation itself
/// cannot fail.
pub trait ParametricCurve {
    /// A human readable name for the curve.
    fn name(&self) -> &'static str;
    /// A longer description of the curve.
    fn info(&self) -> &'static str;
    /// Number of points the curve emits.
    fn steps(&self) -> usize;
    /// Stream the points in emission order.
    ///
    /// Each call starts from the beginning and yields exactly
    /// [`steps`](Self::steps) points.
    fn points(&self) -> Points<'_>;
    /// Materialize every point into a sequence.
    fn generate(&self) -> PointSequence {
        let mut out = Vec::with_capacity(self.steps());
        out.extend(self.points());
        PointSequence::new(out)
    }
}
