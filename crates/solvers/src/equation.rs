//! Solvers for scalar equations, finding `y` such that `f(y, t) = 0`.
//!
//! The residual is any `(y, t) -> f64` function, so a [`Derivative`] can be
//! handed to these solvers directly. The time `t` is held fixed while `y` is
//! adjusted.
//!
//! # Solvers
//!
//! - [`newton`]: Newton iteration with a finite-difference slope
//!
//! [`Derivative`]: odestep_core::Derivative

pub mod newton;
