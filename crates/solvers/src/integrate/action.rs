/// Control actions supported by the integration driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the driver early and return the trajectory so far.
    StopEarly,
}
