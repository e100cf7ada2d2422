use thiserror::Error;

use crate::Divergence;

/// Errors that can occur during an embedded step.
///
/// A rejected step is not an error; see [`StepResult::accepted`].
///
/// [`StepResult::accepted`]: odestep_core::StepResult::accepted
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    #[error("step size must be finite, got {h}")]
    NonFiniteStep { h: f64 },

    #[error("numerical divergence: {0}")]
    NumericalDivergence(#[from] Divergence),
}
