//! Core traits and types for scalar ODE time-steppers.
//!
//! This crate defines the shared abstractions that steppers, drivers, and
//! observers build on:
//!
//! - [`Derivative`]: the right-hand side `f(y, t)` of `dy/dt = f(y, t)`
//! - [`State`]: a point `(y, t)` on a trajectory
//! - [`Stepper`]: advances a state by one step of size `h`
//! - [`StepResult`]: the outcome of one step attempt
//! - [`Observer`]: receives solver events and optionally returns control actions

mod derivative;
mod observer;
mod state;
mod stepper;

pub use derivative::Derivative;
pub use observer::Observer;
pub use state::State;
pub use stepper::{StepResult, Stepper};
