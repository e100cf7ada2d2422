use odestep_core::State;

/// Event emitted by the integration driver after each step attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A step was accepted and `state` was appended to the history.
    Accepted {
        /// Accepted step count, starting at 1.
        step: usize,

        /// The new state.
        state: State,

        /// The step size that was taken.
        h: f64,

        /// The step size proposed for the next attempt.
        h_next: f64,
    },

    /// A step was rejected and will be retried from `state`.
    Rejected {
        /// Attempt count (accepted and rejected), starting at 1.
        attempt: usize,

        /// The state the step was attempted from.
        state: State,

        /// The step size that was rejected.
        h: f64,

        /// The smaller step size to retry with.
        h_next: f64,
    },
}

impl Event {
    /// Returns the state carried by this event.
    #[must_use]
    pub fn state(&self) -> State {
        match self {
            Self::Accepted { state, .. } | Self::Rejected { state, .. } => *state,
        }
    }

    /// Returns the step size that was attempted.
    #[must_use]
    pub fn h(&self) -> f64 {
        match self {
            Self::Accepted { h, .. } | Self::Rejected { h, .. } => *h,
        }
    }

    /// Returns the step size proposed for the next attempt.
    #[must_use]
    pub fn h_next(&self) -> f64 {
        match self {
            Self::Accepted { h_next, .. } | Self::Rejected { h_next, .. } => *h_next,
        }
    }

    /// Returns `true` for an accepted step.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}
