use thiserror::Error;

/// Where a non-finite value appeared while computing a Runge-Kutta step.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Divergence {
    /// A stage derivative `f(y, t)` was NaN or infinite.
    ///
    /// Stages are numbered from 1.
    #[error("stage {stage} evaluated f({y}, {t}) = {value}")]
    Stage {
        stage: usize,
        y: f64,
        t: f64,
        value: f64,
    },

    /// Every stage was finite, but combining them overflowed.
    #[error("step update produced {value}")]
    Update { value: f64 },
}

/// Returns `value`, or an update divergence if it is not finite.
pub(crate) fn check_update(value: f64) -> Result<f64, Divergence> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Divergence::Update { value })
    }
}
