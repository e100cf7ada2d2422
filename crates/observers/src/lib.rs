//! Reusable observers for odestep solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the Newton solver and the integration driver.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasResidual`], [`HasStepSize`], [`CanStopEarly`])
//! - [`recorder`]: [`Recorder`], which collects named traces during a solve
//!
//! [`Observer`]: odestep_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`HasStepSize`]: traits::HasStepSize
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod recorder;
pub mod traits;

pub use recorder::{Recorder, Traceable};
