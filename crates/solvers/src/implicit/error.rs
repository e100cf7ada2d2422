use thiserror::Error;

use crate::equation::newton;

/// Errors that can occur during an implicit step.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    #[error("step size must be finite, got {h}")]
    NonFiniteStep { h: f64 },

    /// The explicit predictor used as the initial guess was not finite.
    #[error("numerical divergence in predictor: f({y}, {t}) = {value}")]
    NumericalDivergence { y: f64, t: f64, value: f64 },

    #[error("implicit solve failed: {0}")]
    Solve(#[from] newton::Error),
}
