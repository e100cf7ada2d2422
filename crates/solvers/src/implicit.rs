//! Implicit steppers.
//!
//! [`BackwardEuler`] finds the next value by solving
//!
//! ```text
//! G(y_next) = y_next - y - h * f(y_next, t + h) = 0
//! ```
//!
//! with [`newton`]. Each step costs a nonlinear solve, but the method stays
//! stable on stiff problems where explicit methods need tiny steps.
//!
//! Every failure mode of the Newton solver is passed through as
//! [`Error::Solve`].

mod error;

pub use error::Error;

use odestep_core::{Derivative, State, StepResult, Stepper};

use crate::equation::newton;

/// The initial guess handed to the Newton solver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Guess {
    /// Start from the current value `y`.
    #[default]
    Previous,

    /// Start from the forward Euler prediction `y + h * f(y, t)`.
    ///
    /// This costs one extra derivative evaluation and usually saves Newton
    /// iterations.
    ExplicitEuler,
}

/// The backward (implicit) Euler method.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BackwardEuler {
    config: newton::Config,
    guess: Guess,
}

impl BackwardEuler {
    /// Creates a stepper that solves each step with the given Newton config.
    #[must_use]
    pub fn new(config: newton::Config) -> Self {
        Self {
            config,
            guess: Guess::default(),
        }
    }

    /// Returns this stepper with a different initial guess strategy.
    #[must_use]
    pub fn with_guess(self, guess: Guess) -> Self {
        Self { guess, ..self }
    }

    /// Returns the Newton config used for each step.
    #[must_use]
    pub fn config(&self) -> &newton::Config {
        &self.config
    }

    /// Returns the initial guess strategy.
    #[must_use]
    pub fn guess(&self) -> Guess {
        self.guess
    }

    /// Advances `y` from `t` to `t + h`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteStep`] if `h` is not finite,
    /// [`Error::NumericalDivergence`] if the explicit predictor is not finite,
    /// and [`Error::Solve`] if the Newton solve fails.
    pub fn advance<F: Derivative>(&self, y: f64, t: f64, h: f64, f: &F) -> Result<f64, Error> {
        if !h.is_finite() {
            return Err(Error::NonFiniteStep { h });
        }

        let y0 = match self.guess {
            Guess::Previous => y,
            Guess::ExplicitEuler => {
                let value = f.eval(y, t);
                if !value.is_finite() {
                    return Err(Error::NumericalDivergence { y, t, value });
                }
                y + h * value
            }
        };

        let residual = |y_next: f64, t_next: f64| y_next - y - h * f.eval(y_next, t_next);
        let solution = newton::solve_unobserved(&residual, t + h, y0, &self.config)?;

        Ok(solution.y)
    }
}

impl Stepper for BackwardEuler {
    type Error = Error;

    fn step<F: Derivative>(&self, state: State, h: f64, f: &F) -> Result<StepResult, Error> {
        let y = self.advance(state.y, state.t, h, f)?;
        Ok(StepResult::fixed(y, h))
    }
}
