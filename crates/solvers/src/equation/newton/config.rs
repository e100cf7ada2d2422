use thiserror::Error;

use crate::finite_difference::{self, Scheme};

/// Configuration for the Newton solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    y_abs_tol: f64,
    fd_step: f64,
    scheme: Scheme,
}

/// Errors that can occur when validating a Newton solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("y_abs_tol must be finite and positive")]
    YAbs,

    #[error("fd_step must be finite and positive")]
    FdStep,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(100, 1e-6).unwrap()
    }
}

impl Config {
    /// Creates a config using a forward difference with the default width.
    ///
    /// # Errors
    ///
    /// Returns an error if `y_abs_tol` is not finite and positive.
    pub fn new(max_iters: usize, y_abs_tol: f64) -> Result<Self, ConfigError> {
        Self::with_finite_difference(
            max_iters,
            y_abs_tol,
            Scheme::Forward,
            finite_difference::DEFAULT_STEP,
        )
    }

    /// Creates a config with an explicit finite-difference scheme and width.
    ///
    /// # Errors
    ///
    /// Returns an error if `y_abs_tol` or `fd_step` is not finite and positive.
    pub fn with_finite_difference(
        max_iters: usize,
        y_abs_tol: f64,
        scheme: Scheme,
        fd_step: f64,
    ) -> Result<Self, ConfigError> {
        if !y_abs_tol.is_finite() || y_abs_tol <= 0.0 {
            return Err(ConfigError::YAbs);
        }
        if !fd_step.is_finite() || fd_step <= 0.0 {
            return Err(ConfigError::FdStep);
        }

        Ok(Self {
            max_iters,
            y_abs_tol,
            fd_step,
            scheme,
        })
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the absolute tolerance on the update magnitude.
    #[must_use]
    pub fn y_abs_tol(&self) -> f64 {
        self.y_abs_tol
    }

    /// Returns the finite-difference step width.
    #[must_use]
    pub fn fd_step(&self) -> f64 {
        self.fd_step
    }

    /// Returns the finite-difference scheme.
    #[must_use]
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }
}
