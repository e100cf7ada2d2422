use crate::{Derivative, State};

/// The outcome of one step attempt.
///
/// Fixed-step methods always accept and propose the same step size again.
/// Adaptive methods may reject a step, in which case `y` is the input `y`
/// unchanged and the caller should retry with `h_next`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepResult {
    /// The value of `y` after the step (or the input `y` if rejected).
    pub y: f64,

    /// The step size to use for the next attempt.
    pub h_next: f64,

    /// Whether the step was accepted.
    pub accepted: bool,
}

impl StepResult {
    /// Creates an accepted result that keeps the step size unchanged.
    #[must_use]
    pub fn fixed(y: f64, h: f64) -> Self {
        Self {
            y,
            h_next: h,
            accepted: true,
        }
    }
}

/// A method that advances a scalar ODE state by one step.
///
/// This is the uniform contract shared by explicit, adaptive, and implicit
/// methods, which lets a single driver loop integrate with any of them.
/// Implementations hold only read-only configuration, so a stepper can be
/// shared freely between trajectories.
pub trait Stepper {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Attempts one step of size `h` from `state`.
    ///
    /// The returned [`StepResult`] describes the new `y` (the new time is
    /// `state.t + h` when the step is accepted) and the proposed next step.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the step cannot be computed, for example
    /// when `f` produces a non-finite value.
    fn step<F: Derivative>(
        &self,
        state: State,
        h: f64,
        f: &F,
    ) -> Result<StepResult, Self::Error>;
}
