//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasResidual`]: events that carry a residual value
//! - [`HasStepSize`]: events that carry an attempted step size
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use odestep_core::Observer;
//! use odestep_observers::traits::{CanStopEarly, HasStepSize};
//!
//! /// Stops once the solver starts taking tiny steps.
//! struct StepFloor {
//!     min_h: f64,
//! }
//!
//! impl<E: HasStepSize, A: CanStopEarly> Observer<E, A> for StepFloor {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.step_size() < self.min_h).then(A::stop_early)
//!     }
//! }
//! ```

use odestep_solvers::{equation::newton, integrate};

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    fn residual(&self) -> f64;
}

/// An event that carries a step size.
pub trait HasStepSize {
    /// Returns the step size that was attempted.
    fn step_size(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- HasResidual for newton::Event ---

impl HasResidual for newton::Event {
    fn residual(&self) -> f64 {
        self.residual
    }
}

// --- HasStepSize for integrate::Event ---

impl HasStepSize for integrate::Event {
    fn step_size(&self) -> f64 {
        self.h()
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for newton::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for integrate::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
