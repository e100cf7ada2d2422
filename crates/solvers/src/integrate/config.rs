use thiserror::Error;

/// Configuration for the integration driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    min_step: f64,
    max_attempts: usize,
}

/// Errors that can occur when validating a driver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("min_step must be finite and positive")]
    MinStep,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1e-6, 1_000_000).unwrap()
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// `min_step` is the usable step-size floor: integration stops once a
    /// stepper proposes a smaller step. `max_attempts` bounds the number of
    /// step attempts, accepted or rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if `min_step` is not finite and positive.
    pub fn new(min_step: f64, max_attempts: usize) -> Result<Self, ConfigError> {
        if !min_step.is_finite() || min_step <= 0.0 {
            return Err(ConfigError::MinStep);
        }

        Ok(Self {
            min_step,
            max_attempts,
        })
    }

    /// Returns the step-size floor.
    #[must_use]
    pub fn min_step(&self) -> f64 {
        self.min_step
    }

    /// Returns the maximum number of step attempts.
    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }
}
