/// Iteration event emitted by the Newton solver.
///
/// One event is emitted per iteration, after the update has been computed
/// and checked for divergence but before the convergence test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter, starting at 1.
    pub iter: usize,

    /// The iterate the residual and slope were evaluated at.
    pub y: f64,

    /// Residual `f(y, t)`.
    pub residual: f64,

    /// Finite-difference estimate of `∂f/∂y`.
    pub slope: f64,

    /// The updated iterate `y - residual / slope`.
    pub y_next: f64,
}

impl Event {
    /// Returns the magnitude of this iteration's update.
    #[must_use]
    pub fn change(&self) -> f64 {
        (self.y_next - self.y).abs()
    }
}
