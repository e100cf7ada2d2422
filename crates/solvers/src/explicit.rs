//! Explicit fixed-step Runge-Kutta methods.
//!
//! An [`Explicit`] stepper advances a state by exactly one step of the size
//! it is given, using the coefficients of a [`Tableau`]:
//!
//! ```text
//! k_i    = f(y + h * Σ_{j<i} a_ij * k_j, t + c_i * h)
//! y_next = y + h * Σ b_i * k_i
//! ```
//!
//! Forward Euler ([`Tableau::euler`]) has a local truncation error of O(h²).
//! The classical Runge-Kutta method ([`Tableau::rk4`]) has a local error of
//! O(h⁵) and a global error of O(h⁴). Neither provides an error estimate;
//! use the [`embedded`](crate::embedded) steppers when one is needed.
//!
//! # Example
//!
//! ```
//! use odestep_solvers::explicit::{Explicit, Tableau};
//!
//! let tableau = Tableau::rk4();
//! let rk4 = Explicit::new(&tableau);
//!
//! let y_next = rk4.advance(1.0, 0.0, 0.1, &|y: f64, _t: f64| -y)?;
//! assert!((y_next - (-0.1_f64).exp()).abs() < 1e-6);
//! # Ok::<(), odestep_solvers::explicit::Error>(())
//! ```

mod error;
mod tableau;

pub use error::Error;
pub use tableau::Tableau;

use odestep_core::{Derivative, State, StepResult, Stepper};

use crate::{divergence::check_update, stages};

/// A fixed-step explicit Runge-Kutta stepper.
#[derive(Debug, Clone, Copy)]
pub struct Explicit<'a, const S: usize> {
    tableau: &'a Tableau<S>,
}

impl<'a, const S: usize> Explicit<'a, S> {
    /// Creates a stepper that uses the given tableau.
    #[must_use]
    pub fn new(tableau: &'a Tableau<S>) -> Self {
        Self { tableau }
    }

    /// Returns the tableau this stepper uses.
    #[must_use]
    pub fn tableau(&self) -> &'a Tableau<S> {
        self.tableau
    }

    /// Advances `y` from `t` to `t + h`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteStep`] if `h` is NaN or infinite, and
    /// [`Error::NumericalDivergence`] if a stage derivative or the updated
    /// value is not finite.
    pub fn advance<F: Derivative>(&self, y: f64, t: f64, h: f64, f: &F) -> Result<f64, Error> {
        if !h.is_finite() {
            return Err(Error::NonFiniteStep { h });
        }

        let tableau = self.tableau;
        let k = stages::evaluate(&tableau.a, &tableau.c, f, y, t, h)?;
        let y_next = check_update(y + h * stages::weighted_sum(&tableau.b, &k))?;

        Ok(y_next)
    }
}

impl<const S: usize> Stepper for Explicit<'_, S> {
    type Error = Error;

    fn step<F: Derivative>(&self, state: State, h: f64, f: &F) -> Result<StepResult, Error> {
        let y = self.advance(state.y, state.t, h, f)?;
        Ok(StepResult::fixed(y, h))
    }
}
