use thiserror::Error;

/// Errors that can occur during Newton iteration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    #[error("initial guess must be finite, got {y}")]
    NonFiniteGuess { y: f64 },

    /// The residual or its slope was not usable at an iterate.
    ///
    /// This covers a non-finite residual, a zero or non-finite slope (a flat
    /// residual), and an update that overflowed.
    #[error(
        "numerical divergence at iteration {iter}: y = {y}, residual = {residual}, slope = {slope}"
    )]
    NumericalDivergence {
        iter: usize,
        y: f64,
        residual: f64,
        slope: f64,
    },

    /// The iteration budget ran out before the update fell below tolerance.
    #[error("did not converge after {iters} iterations, last iterate y = {y}")]
    DidNotConverge { y: f64, iters: usize },
}
