use thiserror::Error;

/// Step-size control law for the embedded steppers.
///
/// Given a local error estimate `e` and a tolerance `eps`, the proposed step
/// size is scaled by
///
/// ```text
/// clamp(safety * (eps / (e + error_guard))^exponent, min_factor, max_factor)
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Control {
    safety: f64,
    exponent: f64,
    min_factor: f64,
    max_factor: f64,
    error_guard: f64,
}

/// Configuration for the embedded steppers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: f64,
    control: Control,
}

/// Errors that can occur when validating an embedded stepper config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,

    /// Even a zero error estimate would shrink the step at this tolerance.
    #[error(
        "tolerance {tolerance} is too small for the control law, whose largest factor is {factor}"
    )]
    ToleranceBelowGuard { tolerance: f64, factor: f64 },

    #[error("safety must be in (0, 1]")]
    Safety,

    #[error("exponent must be finite and positive")]
    Exponent,

    #[error("factor bounds must satisfy 0 < min_factor < 1 <= max_factor < inf")]
    FactorBounds,

    #[error("error_guard must be finite and non-negative")]
    ErrorGuard,
}

impl Default for Control {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(0.84, 0.25, 0.1, 5.0, 1e-10).unwrap()
    }
}

impl Control {
    /// Creates a new control law with validated parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter is out of range. The bounds guarantee
    /// that a rejected step always proposes a strictly smaller step size.
    pub fn new(
        safety: f64,
        exponent: f64,
        min_factor: f64,
        max_factor: f64,
        error_guard: f64,
    ) -> Result<Self, ConfigError> {
        if !(safety > 0.0 && safety <= 1.0) {
            return Err(ConfigError::Safety);
        }
        if !exponent.is_finite() || exponent <= 0.0 {
            return Err(ConfigError::Exponent);
        }
        if !(min_factor > 0.0 && min_factor < 1.0 && max_factor >= 1.0 && max_factor.is_finite()) {
            return Err(ConfigError::FactorBounds);
        }
        if !error_guard.is_finite() || error_guard < 0.0 {
            return Err(ConfigError::ErrorGuard);
        }

        Ok(Self {
            safety,
            exponent,
            min_factor,
            max_factor,
            error_guard,
        })
    }

    /// Returns the multiplier to apply to the current step size.
    ///
    /// An error of zero saturates at `max_factor` rather than dividing by
    /// zero. A NaN error yields `min_factor`.
    #[must_use]
    pub fn factor(&self, error: f64, tolerance: f64) -> f64 {
        let raw = self.safety * (tolerance / (error + self.error_guard)).powf(self.exponent);
        if raw.is_nan() {
            return self.min_factor;
        }
        raw.clamp(self.min_factor, self.max_factor)
    }

    /// Returns the safety factor.
    #[must_use]
    pub fn safety(&self) -> f64 {
        self.safety
    }

    /// Returns the exponent applied to the tolerance ratio.
    #[must_use]
    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    /// Returns the smallest allowed step-size multiplier.
    #[must_use]
    pub fn min_factor(&self) -> f64 {
        self.min_factor
    }

    /// Returns the largest allowed step-size multiplier.
    #[must_use]
    pub fn max_factor(&self) -> f64 {
        self.max_factor
    }

    /// Returns the constant added to the error estimate.
    #[must_use]
    pub fn error_guard(&self) -> f64 {
        self.error_guard
    }
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(0.005).unwrap()
    }
}

impl Config {
    /// Creates a config with the given tolerance and the default control law.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite and positive.
    pub fn new(tolerance: f64) -> Result<Self, ConfigError> {
        Self::with_control(tolerance, Control::default())
    }

    /// Creates a config with the given tolerance and control law.
    ///
    /// The tolerance must leave the control law room to grow a step, that is
    /// `control.factor(0.0, tolerance) >= 1`. With the default control this
    /// means `tolerance >= error_guard / safety^4`, about `2e-10`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Tolerance`] if `tolerance` is not finite and
    /// positive, and [`ConfigError::ToleranceBelowGuard`] if the step could
    /// only ever shrink.
    pub fn with_control(tolerance: f64, control: Control) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }

        let factor = control.factor(0.0, tolerance);
        if factor < 1.0 {
            return Err(ConfigError::ToleranceBelowGuard { tolerance, factor });
        }

        Ok(Self { tolerance, control })
    }

    /// Returns the local error tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the step-size control law.
    #[must_use]
    pub fn control(&self) -> Control {
        self.control
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn zero_error_saturates_at_max_factor() {
        let control = Control::default();
        assert_relative_eq!(control.factor(0.0, 0.005), 5.0);
    }

    #[test]
    fn huge_error_saturates_at_min_factor() {
        let control = Control::default();
        assert_relative_eq!(control.factor(1e12, 0.005), 0.1);
    }

    #[test]
    fn error_at_tolerance_applies_safety() {
        let control = Control::default();
        let tolerance = 1e-3;

        // The guard is negligible next to the tolerance.
        assert_relative_eq!(control.factor(tolerance, tolerance), 0.84, epsilon = 1e-6);
    }

    #[test]
    fn nan_error_shrinks() {
        let control = Control::default();
        assert_relative_eq!(control.factor(f64::NAN, 0.005), 0.1);
    }

    #[test]
    fn factor_grows_with_tolerance() {
        let control = Control::default();
        let error = 1e-4;

        let mut previous = 0.0;
        for tolerance in [1e-6, 1e-5, 1e-4, 1e-3, 1e-2] {
            let factor = control.factor(error, tolerance);
            assert!(factor >= previous);
            previous = factor;
        }
    }

    #[test]
    fn rejects_invalid_tolerance() {
        assert_eq!(Config::new(0.0), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(-1e-3), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(f64::NAN), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(f64::INFINITY), Err(ConfigError::Tolerance));
    }

    #[test]
    fn rejects_tolerance_the_step_cannot_grow_from() {
        assert!(matches!(
            Config::new(1e-10),
            Err(ConfigError::ToleranceBelowGuard { factor, .. }) if factor < 1.0
        ));

        // The smallest workable tolerance for the default control sits just
        // above error_guard / safety^4.
        let bound = 1e-10 / 0.84_f64.powi(4);
        assert!(Config::new(bound * 1.01).is_ok());
        assert!(Config::new(bound * 0.99).is_err());

        let control = Config::new(1e-9).unwrap().control();
        assert!(control.factor(0.0, 1e-9) > 1.0);
    }

    #[test]
    fn zero_guard_accepts_any_positive_tolerance() {
        let control = Control::new(0.84, 0.25, 0.1, 5.0, 0.0).unwrap();
        assert!(Config::with_control(1e-300, control).is_ok());
    }

    #[test]
    fn rejects_invalid_control() {
        assert_eq!(
            Control::new(1.2, 0.25, 0.1, 5.0, 1e-10),
            Err(ConfigError::Safety)
        );
        assert_eq!(
            Control::new(0.9, 0.0, 0.1, 5.0, 1e-10),
            Err(ConfigError::Exponent)
        );
        assert_eq!(
            Control::new(0.9, 0.2, 1.0, 5.0, 1e-10),
            Err(ConfigError::FactorBounds)
        );
        assert_eq!(
            Control::new(0.9, 0.2, 0.2, 0.5, 1e-10),
            Err(ConfigError::FactorBounds)
        );
        assert_eq!(
            Control::new(0.9, 0.2, 0.2, 5.0, -1.0),
            Err(ConfigError::ErrorGuard)
        );
    }

    #[test]
    fn default_matches_documented_constants() {
        let config = Config::default();
        let control = config.control();

        assert_relative_eq!(config.tolerance(), 0.005);
        assert_relative_eq!(control.safety(), 0.84);
        assert_relative_eq!(control.exponent(), 0.25);
        assert_relative_eq!(control.min_factor(), 0.1);
        assert_relative_eq!(control.max_factor(), 5.0);
        assert_relative_eq!(control.error_guard(), 1e-10);
    }
}
