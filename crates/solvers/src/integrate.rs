//! Fixed-horizon integration driver.
//!
//! The driver repeatedly asks a [`Stepper`] for one step, retrying rejected
//! attempts with the proposed smaller step, until the trajectory reaches
//! `t_end`. The final step is stretched or clipped so the last recorded state
//! lands exactly on the horizon.
//!
//! # Example
//!
//! ```
//! use odestep_core::State;
//! use odestep_solvers::{
//!     embedded::{self, Embedded, Tableau},
//!     integrate::{self, Status},
//! };
//!
//! let tableau = Tableau::dormand_prince54();
//! let stepper = Embedded::new(&tableau, embedded::Config::new(1e-8)?);
//!
//! let f = |y: f64, _t: f64| -y;
//! let solution = integrate::solve_unobserved(
//!     &stepper,
//!     &f,
//!     State::new(1.0, 0.0),
//!     1.0,
//!     0.1,
//!     &integrate::Config::default(),
//! )?;
//!
//! assert_eq!(solution.status, Status::Complete);
//! let last = solution.last().ok_or("empty history")?;
//! assert!((last.y - (-1.0_f64).exp()).abs() < 1e-6);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod action;
mod config;
mod error;
mod event;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use odestep_core::{Derivative, Observer, State, Stepper};

/// Relative slack for treating a step as the last one.
///
/// A step within this fraction of the remaining span is stretched onto
/// `t_end` so rounding never leaves a sliver of a step behind.
const HORIZON_SLACK: f64 = 1e-9;

/// Integrates `f` from `initial` to `t_end` with the given stepper.
///
/// # Algorithm
///
/// 1. Record the initial state.
/// 2. Until the horizon is reached:
///    - Try a step of size `h`, clipped or stretched to end on `t_end` when
///      it would reach it.
///    - On acceptance, record the new state and emit [`Event::Accepted`].
///    - On rejection, emit [`Event::Rejected`] and keep the current state.
///    - If the stepper shrinks the next step below [`Config::min_step`], or
///      an accepted step is too small to change `t`, stop with
///      [`Status::StepSizeCollapsed`].
/// 3. Return the solution with the full history.
///
/// Integration only runs forward in time. A horizon at or before
/// `initial.t` returns immediately with the initial state as the only
/// history entry.
///
/// # Observer
///
/// The observer receives an [`Event`] after every step attempt and may
/// return [`Action::StopEarly`] to terminate integration.
///
/// # Errors
///
/// Returns an error if the initial state, horizon or initial step are
/// invalid, or if the stepper fails.
pub fn solve<S, F, Obs>(
    stepper: &S,
    f: &F,
    initial: State,
    t_end: f64,
    h0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    S: Stepper,
    F: Derivative,
    Obs: Observer<Event, Action>,
{
    if !initial.is_finite() {
        return Err(Error::NonFiniteInitial {
            y: initial.y,
            t: initial.t,
        });
    }
    if !t_end.is_finite() {
        return Err(Error::NonFiniteHorizon { t_end });
    }
    if !h0.is_finite() || h0 <= 0.0 {
        return Err(Error::InvalidStep { h: h0 });
    }

    let mut solution = Solution {
        status: Status::Complete,
        history: vec![initial],
        steps: 0,
        rejected: 0,
    };

    if t_end <= initial.t {
        return Ok(solution);
    }

    let mut state = initial;
    let mut h = h0;

    for attempt in 1..=config.max_attempts() {
        let remaining = t_end - state.t;
        let is_last = h >= remaining * (1.0 - HORIZON_SLACK);
        let h_try = if is_last { remaining } else { h };

        let result = stepper
            .step(state, h_try, f)
            .map_err(|err| Error::step(state.t, err))?;

        let event = if result.accepted {
            let t = if is_last { t_end } else { state.t + h_try };

            // At large `t` a small step can round away entirely.
            if t <= state.t {
                solution.status = Status::StepSizeCollapsed {
                    t: state.t,
                    h: h_try,
                };
                return Ok(solution);
            }

            state = State::new(result.y, t);
            solution.history.push(state);
            solution.steps += 1;

            Event::Accepted {
                step: solution.steps,
                state,
                h: h_try,
                h_next: result.h_next,
            }
        } else {
            solution.rejected += 1;

            Event::Rejected {
                attempt,
                state,
                h: h_try,
                h_next: result.h_next,
            }
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            solution.status = Status::StoppedByObserver;
            return Ok(solution);
        }

        if result.accepted && is_last {
            return Ok(solution);
        }

        // Negated so a NaN proposal also stops. A stepper that keeps its step
        // size has not collapsed, even below the floor.
        let shrank = !(result.h_next >= h_try);
        if shrank && !(result.h_next >= config.min_step()) {
            solution.status = Status::StepSizeCollapsed {
                t: state.t,
                h: result.h_next,
            };
            return Ok(solution);
        }

        h = result.h_next;
    }

    solution.status = Status::MaxAttempts;
    Ok(solution)
}

/// Integrates `f` from `initial` to `t_end` without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error if the initial state, horizon or initial step are
/// invalid, or if the stepper fails.
pub fn solve_unobserved<S, F>(
    stepper: &S,
    f: &F,
    initial: State,
    t_end: f64,
    h0: f64,
    config: &Config,
) -> Result<Solution, Error>
where
    S: Stepper,
    F: Derivative,
{
    solve(stepper, f, initial, t_end, h0, config, ())
}
