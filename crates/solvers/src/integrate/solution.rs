use std::io;

use odestep_core::State;

/// Indicates how the driver terminated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Status {
    /// Reached the horizon.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,

    /// The stepper shrank its step below the configured floor, or an
    /// accepted step was too small to advance `t` in floating point.
    ///
    /// `t` is the time of the last accepted state and `h` the offending
    /// step size.
    StepSizeCollapsed { t: f64, h: f64 },

    /// Ran out of step attempts before reaching the horizon.
    MaxAttempts,
}

/// The result of an integration.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the driver terminated.
    pub status: Status,

    /// Accepted states, starting with the initial state.
    pub history: Vec<State>,

    /// Number of accepted steps.
    pub steps: usize,

    /// Number of rejected step attempts.
    pub rejected: usize,
}

impl Solution {
    /// Returns the last accepted state.
    #[must_use]
    pub fn last(&self) -> Option<&State> {
        self.history.last()
    }

    /// Writes the history as newline-delimited `t,y` records.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn write_records<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        for state in &self.history {
            writeln!(writer, "{},{}", state.t, state.y)?;
        }
        Ok(())
    }
}
