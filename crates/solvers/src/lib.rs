//! Time-steppers and solvers for scalar ODEs `dy/dt = f(y, t)`.
//!
//! # Modules
//!
//! - [`explicit`]: fixed-step explicit Runge-Kutta methods (Euler, RK4)
//! - [`embedded`]: adaptive embedded pairs (Fehlberg 4(5), Dormand-Prince 5(4))
//! - [`implicit`]: backward Euler, solved with Newton iteration
//! - [`equation`]: scalar root finding
//! - [`finite_difference`]: derivative approximations used by Newton
//! - [`integrate`]: a driver that runs any stepper to a fixed horizon
//!
//! Every stepper implements [`Stepper`](odestep_core::Stepper), so the
//! driver and any caller-written loop work with all of them.

mod divergence;
mod stages;

pub mod embedded;
pub mod equation;
pub mod explicit;
pub mod finite_difference;
pub mod implicit;
pub mod integrate;

pub use divergence::Divergence;
