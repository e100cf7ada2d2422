//! Trace recording for solver events.
//!
//! See [`Recorder`] and [`Traceable`] for usage.

use std::io;

use odestep_core::Observer;
use odestep_solvers::{equation::newton, integrate};

/// Extracts traceable data from a solver event.
///
/// Return `None` from [`x`][Traceable::x] to skip the event entirely, or
/// `None` in a trace slot to skip only that trace for the event.
pub trait Traceable<const N: usize> {
    /// The x-axis value for this event, or `None` to skip recording entirely.
    fn x(&self) -> Option<f64>;

    /// The y-axis values for each trace.
    fn traces(&self) -> [Option<f64>; N];
}

/// Traces Newton iterations as `[residual, |y_next - y|]` against the
/// iteration number.
impl Traceable<2> for newton::Event {
    #[allow(clippy::cast_precision_loss)]
    fn x(&self) -> Option<f64> {
        Some(self.iter as f64)
    }

    fn traces(&self) -> [Option<f64>; 2] {
        [Some(self.residual), Some(self.change())]
    }
}

/// Traces an integration as `[y, h]` against time.
///
/// Accepted steps record the new `y` at the new time along with the step
/// that produced it. Rejected steps record only the rejected step size, at
/// the time the attempt started from.
impl Traceable<2> for integrate::Event {
    fn x(&self) -> Option<f64> {
        Some(self.state().t)
    }

    fn traces(&self) -> [Option<f64>; 2] {
        match self {
            integrate::Event::Accepted { state, h, .. } => [Some(state.y), Some(*h)],
            integrate::Event::Rejected { h, .. } => [None, Some(*h)],
        }
    }
}

/// An observer that collects named traces during solving.
///
/// The const generic `N` is the number of traces. Create with
/// [`Recorder::new`], passing the trace names, then either pass
/// `&mut Recorder` as the observer for an event type that implements
/// [`Traceable<N>`][Traceable], or call [`record`][Recorder::record] from a
/// closure observer.
///
/// # Example
///
/// ```
/// use odestep_core::State;
/// use odestep_observers::Recorder;
/// use odestep_solvers::{
///     explicit::{Explicit, Tableau},
///     integrate,
/// };
///
/// let tableau = Tableau::rk4();
/// let stepper = Explicit::new(&tableau);
/// let f = |y: f64, _t: f64| -y;
///
/// let mut recorder = Recorder::<2>::new(["y", "h"]);
/// integrate::solve(
///     &stepper,
///     &f,
///     State::new(1.0, 0.0),
///     1.0,
///     0.25,
///     &integrate::Config::default(),
///     &mut recorder,
/// )?;
///
/// assert_eq!(recorder.trace(0).len(), 4);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Recorder<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> Recorder<N> {
    /// Creates a new `Recorder` with the given trace names.
    #[must_use]
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Records a single data point across all traces.
    ///
    /// For each trace slot, `None` skips recording for that trace while
    /// leaving other traces unaffected.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (i, y) in traces.into_iter().enumerate() {
            if let Some(y) = y {
                self.data[i].push([x, y]);
            }
        }
    }

    /// Returns the trace names.
    #[must_use]
    pub fn names(&self) -> &[String; N] {
        &self.names
    }

    /// Returns the `[x, y]` points recorded for trace `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[must_use]
    pub fn trace(&self, index: usize) -> &[[f64; 2]] {
        &self.data[index]
    }

    /// Writes every trace as `name,x,y` records, one point per line.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn write_records<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        for (name, points) in self.names.iter().zip(&self.data) {
            for [x, y] in points {
                writeln!(writer, "{name},{x},{y}")?;
            }
        }
        Ok(())
    }
}

impl<const N: usize, E, A> Observer<E, A> for Recorder<N>
where
    E: Traceable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

/// Allows `&mut Recorder<N>` to be passed to solvers that take an observer by
/// value, so the traces can be read after the solve completes.
impl<const N: usize, E, A> Observer<E, A> for &mut Recorder<N>
where
    E: Traceable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}
