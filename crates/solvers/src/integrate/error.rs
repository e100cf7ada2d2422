use std::error::Error as StdError;

/// Errors that can occur during integration.
///
/// Running out of step size is not an error; see
/// [`Status::StepSizeCollapsed`](super::Status::StepSizeCollapsed).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("initial state must be finite, got y = {y}, t = {t}")]
    NonFiniteInitial { y: f64, t: f64 },

    #[error("horizon must be finite, got {t_end}")]
    NonFiniteHorizon { t_end: f64 },

    #[error("initial step size must be finite and positive, got {h}")]
    InvalidStep { h: f64 },

    #[error("stepper failed at t = {t}: {source}")]
    Step {
        t: f64,
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl Error {
    pub(crate) fn step<E: StdError + Send + Sync + 'static>(t: f64, err: E) -> Self {
        Self::Step {
            t,
            source: Box::new(err),
        }
    }
}
