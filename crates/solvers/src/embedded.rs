//! Adaptive-step embedded Runge-Kutta pairs.
//!
//! # Algorithm
//!
//! An [`Embedded`] stepper evaluates the stages of a [`Tableau`] once and
//! combines them with two weight vectors, giving two estimates of the next
//! value whose orders differ by one:
//!
//! ```text
//! y_high = y + h * Σ b_high_i * k_i
//! y_low  = y + h * Σ b_low_i  * k_i
//! e      = |y_high - y_low|
//! ```
//!
//! The step is accepted when `e <= eps`, in which case `y_high` advances the
//! solution. Otherwise the input `y` is returned unchanged. Either way, the
//! next step size is `h * factor` from the [`Control`] law, so a rejected step
//! always proposes a smaller `h` and an accurate step may propose a larger one.
//!
//! # Caller Contract
//!
//! The stepper never refuses a step for being too small. A caller that loops
//! on rejections must stop once `h_next` falls below a usable floor, or it may
//! retry forever. The [`integrate`](crate::integrate) driver enforces such a
//! floor.
//!
//! # Example
//!
//! ```
//! use odestep_solvers::embedded::{Config, Embedded, Tableau};
//!
//! let tableau = Tableau::dormand_prince54();
//! let stepper = Embedded::new(&tableau, Config::new(1e-8)?);
//!
//! let result = stepper.advance(1.0, 0.0, 0.1, &|y: f64, _t: f64| -y)?;
//! assert!(result.accepted);
//! assert!(result.h_next > 0.1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod error;
mod tableau;

pub use config::{Config, ConfigError, Control};
pub use error::Error;
pub use tableau::Tableau;

use odestep_core::{Derivative, State, StepResult, Stepper};

use crate::{divergence::check_update, stages};

/// Both solutions of an embedded pair and their difference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// The higher-order solution, used to advance.
    pub y_high: f64,

    /// The lower-order solution, used only for the error estimate.
    pub y_low: f64,

    /// The local error estimate `|y_high - y_low|`.
    pub error: f64,
}

/// An adaptive stepper built on an embedded Runge-Kutta pair.
#[derive(Debug, Clone, Copy)]
pub struct Embedded<'a, const S: usize> {
    tableau: &'a Tableau<S>,
    config: Config,
}

impl<'a, const S: usize> Embedded<'a, S> {
    /// Creates a stepper from a tableau and config.
    #[must_use]
    pub fn new(tableau: &'a Tableau<S>, config: Config) -> Self {
        Self { tableau, config }
    }

    /// Returns the tableau this stepper uses.
    #[must_use]
    pub fn tableau(&self) -> &'a Tableau<S> {
        self.tableau
    }

    /// Returns the stepper's config.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Computes both solutions of the pair for a step of size `h`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteStep`] if `h` is NaN or infinite, and
    /// [`Error::NumericalDivergence`] if a stage derivative or either
    /// solution is not finite.
    pub fn estimate<F: Derivative>(
        &self,
        y: f64,
        t: f64,
        h: f64,
        f: &F,
    ) -> Result<Estimate, Error> {
        if !h.is_finite() {
            return Err(Error::NonFiniteStep { h });
        }

        let tableau = self.tableau;
        let k = stages::evaluate(&tableau.a, &tableau.c, f, y, t, h)?;

        let y_high = check_update(y + h * stages::weighted_sum(&tableau.b_high, &k))?;
        let y_low = check_update(y + h * stages::weighted_sum(&tableau.b_low, &k))?;

        Ok(Estimate {
            y_high,
            y_low,
            error: (y_high - y_low).abs(),
        })
    }

    /// Attempts one adaptive step from `(y, t)` with step size `h`.
    ///
    /// Errors exactly equal to the tolerance are accepted.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`Embedded::estimate`].
    pub fn advance<F: Derivative>(
        &self,
        y: f64,
        t: f64,
        h: f64,
        f: &F,
    ) -> Result<StepResult, Error> {
        let estimate = self.estimate(y, t, h, f)?;
        let tolerance = self.config.tolerance();

        let accepted = estimate.error <= tolerance;
        let h_next = h * self.config.control().factor(estimate.error, tolerance);

        Ok(StepResult {
            y: if accepted { estimate.y_high } else { y },
            h_next,
            accepted,
        })
    }
}

impl<const S: usize> Stepper for Embedded<'_, S> {
    type Error = Error;

    fn step<F: Derivative>(&self, state: State, h: f64, f: &F) -> Result<StepResult, Error> {
        self.advance(state.y, state.t, h, f)
    }
}
