/// A point on a trajectory: the dependent variable `y` at time `t`.
///
/// States are small `Copy` values. Steppers take a state by value and hand
/// back a fresh one, so the caller always owns the trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub y: f64,
    pub t: f64,
}

impl State {
    /// Creates a new state.
    #[must_use]
    pub fn new(y: f64, t: f64) -> Self {
        Self { y, t }
    }

    /// Returns `true` if both `y` and `t` are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.y.is_finite() && self.t.is_finite()
    }
}
