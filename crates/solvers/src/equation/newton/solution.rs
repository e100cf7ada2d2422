/// Indicates how the solver finished successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The update magnitude fell below the configured tolerance.
    Converged,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a Newton solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// How the solver finished.
    pub status: Status,

    /// Root estimate.
    pub y: f64,

    /// Residual at the root estimate, always finite.
    pub residual: f64,

    /// Iteration count when the solver finished.
    pub iters: usize,
}
