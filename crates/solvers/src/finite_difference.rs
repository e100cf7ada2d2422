//! Finite-difference approximations of first derivatives.
//!
//! The Newton solver uses these to estimate the slope of a residual with
//! respect to `y` without requiring an analytic derivative.
//!
//! ```text
//! forward:  (g(x + h) - g(x)) / h
//! backward: (g(x) - g(x - h)) / h
//! central:  (g(x + h/2) - g(x - h/2)) / h
//! ```
//!
//! Forward and backward differences are first-order accurate in `h`, the
//! central difference is second-order accurate.

use odestep_core::Derivative;

/// The default step width used by [`partial_y`].
pub const DEFAULT_STEP: f64 = 1e-3;

/// A finite-difference stencil.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scheme {
    /// Evaluates at `x` and `x + h`.
    #[default]
    Forward,

    /// Evaluates at `x - h` and `x`.
    Backward,

    /// Evaluates at `x - h/2` and `x + h/2`, so `h` is the total width.
    Central,
}

impl Scheme {
    /// Approximates `dg/dx` at `x` using a step width of `h`.
    pub fn apply(self, g: impl Fn(f64) -> f64, x: f64, h: f64) -> f64 {
        match self {
            Self::Forward => (g(x + h) - g(x)) / h,
            Self::Backward => (g(x) - g(x - h)) / h,
            Self::Central => (g(x + 0.5 * h) - g(x - 0.5 * h)) / h,
        }
    }

    /// Approximates `∂f/∂y` at `(y, t)`, holding `t` fixed.
    pub fn partial_y<F: Derivative>(self, f: &F, y: f64, t: f64, h: f64) -> f64 {
        self.apply(|y| f.eval(y, t), y, h)
    }
}

/// Approximates `∂f/∂y` at `(y, t)` with a forward difference.
///
/// This is the estimate used by the Newton solver's default configuration.
/// Pass [`DEFAULT_STEP`] for `h` unless the residual calls for another width.
pub fn partial_y<F: Derivative>(f: &F, y: f64, t: f64, h: f64) -> f64 {
    Scheme::Forward.partial_y(f, y, t, h)
}
