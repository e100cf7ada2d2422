/// Watches a solver as it runs and may steer it.
///
/// The Newton solver emits one event per iteration and the integration driver
/// one per step attempt. After each event the solver asks its observer
/// whether to act: `None` continues, `Some(action)` requests a
/// solver-specific action such as stopping early.
///
/// Observers are how progress gets logged or recorded, since the solvers
/// themselves never print.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is the
/// observer that never acts.
pub trait Observer<E, A> {
    /// Handles one solver event and returns the action to take, if any.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
