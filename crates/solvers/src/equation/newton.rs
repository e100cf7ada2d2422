//! Newton's method for scalar equations.
//!
//! # Algorithm
//!
//! Starting from an initial guess `y`, each iteration evaluates the residual
//! `r = f(y, t)`, estimates the slope `∂f/∂y` with a finite difference, and
//! updates
//!
//! ```text
//! y_next = y - r / slope
//! ```
//!
//! The solver converges when `|y_next - y| < y_abs_tol` and returns `y_next`.
//! An exact root (`r == 0`) converges immediately. Reporting the residual at
//! `y_next` costs one evaluation of `f` beyond the iterations, except at an
//! exact root.
//!
//! # Failure Modes
//!
//! Failures are reported explicitly rather than returned as a best guess:
//!
//! - [`Error::NumericalDivergence`]: the residual is not finite, the slope is
//!   zero or not finite, the update overflows, or the residual at the
//!   returned root is not finite
//! - [`Error::DidNotConverge`]: `max_iters` iterations ran without meeting the
//!   tolerance; carries the last iterate
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration. Observers can return
//! [`Action::StopEarly`] to halt with the latest iterate.

mod action;
mod config;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use odestep_core::{Derivative, Observer};

/// Finds `y` such that `f(y, t) ≈ 0` using Newton's method.
///
/// # Errors
///
/// Returns an error if the initial guess is not finite, if the iteration
/// diverges, or if it does not converge within `max_iters` iterations.
pub fn solve<F, Obs>(
    f: &F,
    t: f64,
    y0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Derivative,
    Obs: Observer<Event, Action>,
{
    if !y0.is_finite() {
        return Err(Error::NonFiniteGuess { y: y0 });
    }

    let mut y = y0;

    for iter in 1..=config.max_iters() {
        let residual = f.eval(y, t);
        let slope = config.scheme().partial_y(f, y, t, config.fd_step());

        let diverged = |residual: f64, slope: f64| Error::NumericalDivergence {
            iter,
            y,
            residual,
            slope,
        };

        if !residual.is_finite() {
            return Err(diverged(residual, slope));
        }

        #[allow(clippy::float_cmp)]
        let y_next = if residual == 0.0 {
            y
        } else {
            if slope == 0.0 || !slope.is_finite() {
                return Err(diverged(residual, slope));
            }
            y - residual / slope
        };

        if !y_next.is_finite() {
            return Err(diverged(residual, slope));
        }

        let event = Event {
            iter,
            y,
            residual,
            slope,
            y_next,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return finish(f, t, &event, Status::StoppedByObserver);
        }

        if event.change() < config.y_abs_tol() {
            return finish(f, t, &event, Status::Converged);
        }

        y = y_next;
    }

    Err(Error::DidNotConverge {
        y,
        iters: config.max_iters(),
    })
}

/// Runs Newton's method without observation.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<F: Derivative>(
    f: &F,
    t: f64,
    y0: f64,
    config: &Config,
) -> Result<Solution, Error> {
    solve(f, t, y0, config, ())
}

/// Returns the root of `f(·, t)` nearest the iteration from `y0`.
///
/// This is a convenience wrapper around [`solve_unobserved`] for callers that
/// only need the root.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn find_zero<F: Derivative>(f: &F, t: f64, y0: f64, config: &Config) -> Result<f64, Error> {
    solve_unobserved(f, t, y0, config).map(|solution| solution.y)
}

/// Builds the solution at `event.y_next`.
///
/// An exact root reuses its zero residual. Any other iterate costs one more
/// evaluation of `f`, which must be finite.
fn finish<F: Derivative>(
    f: &F,
    t: f64,
    event: &Event,
    status: Status,
) -> Result<Solution, Error> {
    #[allow(clippy::float_cmp)]
    let residual = if event.residual == 0.0 {
        0.0
    } else {
        f.eval(event.y_next, t)
    };

    if !residual.is_finite() {
        return Err(Error::NumericalDivergence {
            iter: event.iter,
            y: event.y_next,
            residual,
            slope: event.slope,
        });
    }

    Ok(Solution {
        status,
        y: event.y_next,
        residual,
        iters: event.iter,
    })
}
