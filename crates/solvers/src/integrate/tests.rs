use std::convert::Infallible;

use approx::assert_relative_eq;

use odestep_core::{Derivative, State, StepResult, Stepper};

use super::{Action, Config, ConfigError, Error, Event, Solution, Status, solve, solve_unobserved};
use crate::{
    Divergence,
    embedded::{self, Embedded},
    equation::newton,
    explicit::{self, Explicit},
    implicit::BackwardEuler,
};

/// Forward Euler that rejects any step larger than `max_h` and proposes half
/// the attempted step instead.
struct Halving {
    max_h: f64,
}

impl Stepper for Halving {
    type Error = Infallible;

    fn step<F: Derivative>(
        &self,
        state: State,
        h: f64,
        f: &F,
    ) -> Result<StepResult, Self::Error> {
        if h > self.max_h {
            return Ok(StepResult {
                y: state.y,
                h_next: h / 2.0,
                accepted: false,
            });
        }
        Ok(StepResult::fixed(state.y + h * f.eval(state.y, state.t), h))
    }
}

/// Rejects every step and proposes a quarter of the attempted step.
struct Shrinking;

impl Stepper for Shrinking {
    type Error = Infallible;

    fn step<F: Derivative>(
        &self,
        state: State,
        h: f64,
        _f: &F,
    ) -> Result<StepResult, Self::Error> {
        Ok(StepResult {
            y: state.y,
            h_next: h / 4.0,
            accepted: false,
        })
    }
}

fn decay(y: f64, _t: f64) -> f64 {
    -y
}

#[test]
fn default_config() {
    let config = Config::default();

    assert_relative_eq!(config.min_step(), 1e-6);
    assert_eq!(config.max_attempts(), 1_000_000);
}

#[test]
fn rejects_invalid_min_step() {
    for min_step in [0.0, -1e-6, f64::NAN, f64::INFINITY] {
        assert_eq!(Config::new(min_step, 10), Err(ConfigError::MinStep));
    }
}

#[test]
fn constant_derivative_lands_on_horizon() {
    let tableau = explicit::Tableau::euler();
    let stepper = Explicit::new(&tableau);
    let f = |_y: f64, _t: f64| 2.0;

    let solution = solve_unobserved(
        &stepper,
        &f,
        State::new(0.0, 0.0),
        1.0,
        0.1,
        &Config::default(),
    )
    .expect("should integrate");

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(solution.steps, 10);
    assert_eq!(solution.rejected, 0);
    assert_eq!(solution.history.len(), 11); // initial + 10 steps

    let last = solution.last().expect("history is never empty");
    assert_eq!(last.t, 1.0);
    assert_relative_eq!(last.y, 2.0, epsilon = 1e-12);
}

#[test]
fn clips_final_step() {
    let tableau = explicit::Tableau::euler();
    let stepper = Explicit::new(&tableau);
    let f = |_y: f64, _t: f64| 1.0;

    let solution = solve_unobserved(
        &stepper,
        &f,
        State::new(0.0, 0.0),
        1.0,
        0.3,
        &Config::default(),
    )
    .expect("should integrate");

    let times: Vec<f64> = solution.history.iter().map(|state| state.t).collect();
    assert_eq!(times.len(), 5);
    assert_relative_eq!(times[3], 0.9, epsilon = 1e-12);
    assert_eq!(times[4], 1.0);
    assert_relative_eq!(solution.history[4].y, 1.0, epsilon = 1e-12);
}

#[test]
fn rk4_tracks_exponential_decay() {
    let tableau = explicit::Tableau::rk4();
    let stepper = Explicit::new(&tableau);

    let solution = solve_unobserved(
        &stepper,
        &decay,
        State::new(1.0, 0.0),
        1.0,
        0.1,
        &Config::default(),
    )
    .expect("should integrate");

    let last = solution.last().expect("history is never empty");
    assert_relative_eq!(last.y, (-1.0_f64).exp(), epsilon = 1e-6);
}

#[test]
fn adaptive_stepper_recovers_from_rejection() {
    let tableau = embedded::Tableau::fehlberg45();
    let config = embedded::Config::new(1e-9).expect("valid tolerance");
    let stepper = Embedded::new(&tableau, config);

    let solution = solve_unobserved(
        &stepper,
        &decay,
        State::new(1.0, 0.0),
        2.0,
        1.0,
        &Config::default(),
    )
    .expect("should integrate");

    assert_eq!(solution.status, Status::Complete);
    assert!(solution.rejected >= 1);
    assert_eq!(solution.history.len(), solution.steps + 1);

    let last = solution.last().expect("history is never empty");
    assert_eq!(last.t, 2.0);
    assert_relative_eq!(last.y, (-2.0_f64).exp(), epsilon = 1e-6);
}

#[test]
fn implicit_stepper_handles_stiff_problem() {
    let stepper = BackwardEuler::new(newton::Config::default());
    let f = |y: f64, t: f64| -1000.0 * (y - t.cos());

    let solution = solve_unobserved(
        &stepper,
        &f,
        State::new(1.0, 0.0),
        1.0,
        0.1,
        &Config::default(),
    )
    .expect("should integrate");

    assert_eq!(solution.status, Status::Complete);
    let last = solution.last().expect("history is never empty");
    assert_relative_eq!(last.y, 1.0_f64.cos(), epsilon = 1e-2);
}

#[test]
fn emits_rejected_and_accepted_events() {
    let stepper = Halving { max_h: 0.3 };
    let f = |_y: f64, _t: f64| 1.0;

    let mut events = Vec::new();
    let solution = solve(
        &stepper,
        &f,
        State::new(0.0, 0.0),
        0.5,
        1.0,
        &Config::default(),
        |event: &Event| {
            events.push(*event);
            None
        },
    )
    .expect("should integrate");

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(solution.steps, 2);
    assert_eq!(solution.rejected, 1);

    assert_eq!(events.len(), 3);
    assert!(matches!(events[0], Event::Rejected { attempt: 1, .. }));
    assert_relative_eq!(events[0].h(), 0.5);
    assert_relative_eq!(events[0].h_next(), 0.25);
    assert!(matches!(events[1], Event::Accepted { step: 1, .. }));
    assert!(matches!(events[2], Event::Accepted { step: 2, .. }));
    assert_eq!(events[2].state().t, 0.5);
}

#[test]
fn collapsed_step_size_keeps_history() {
    let config = Config::new(1e-6, 100).expect("valid config");

    let solution = solve_unobserved(
        &Shrinking,
        &decay,
        State::new(1.0, 0.0),
        1.0,
        0.1,
        &config,
    )
    .expect("collapse is not an error");

    let Status::StepSizeCollapsed { t, h } = solution.status else {
        panic!("expected collapse, got {:?}", solution.status);
    };
    assert_relative_eq!(t, 0.0);
    assert_relative_eq!(h, 0.1 / 4.0_f64.powi(9));
    assert!(h < config.min_step());
    assert_eq!(solution.rejected, 9);
    assert_eq!(solution.history, vec![State::new(1.0, 0.0)]);
}

#[test]
fn fixed_step_below_floor_runs_to_horizon() {
    let tableau = explicit::Tableau::euler();
    let explicit = Explicit::new(&tableau);
    let implicit = BackwardEuler::new(newton::Config::default());
    let f = |_y: f64, _t: f64| 1.0;
    let config = Config::default();
    let h0 = 5e-7;
    assert!(h0 < config.min_step());

    for solution in [
        solve_unobserved(&explicit, &f, State::new(0.0, 0.0), 1e-5, h0, &config),
        solve_unobserved(&implicit, &f, State::new(0.0, 0.0), 1e-5, h0, &config),
    ] {
        let solution = solution.expect("should integrate");

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.steps, 20);

        let last = solution.last().expect("history is never empty");
        assert_eq!(last.t, 1e-5);
        assert_relative_eq!(last.y, 1e-5, epsilon = 1e-12);
    }
}

#[test]
fn step_lost_to_rounding_stops() {
    let tableau = explicit::Tableau::euler();
    let stepper = Explicit::new(&tableau);
    let f = |_y: f64, _t: f64| 1.0;
    let t0 = 1e12;

    // 1e-5 is below half an ulp of 1e12, so t0 + h == t0.
    let solution = solve_unobserved(
        &stepper,
        &f,
        State::new(0.0, t0),
        t0 + 1.0,
        1e-5,
        &Config::default(),
    )
    .expect("stalling is not an error");

    assert_eq!(
        solution.status,
        Status::StepSizeCollapsed { t: t0, h: 1e-5 }
    );
    assert_eq!(solution.steps, 0);
    assert_eq!(solution.history, vec![State::new(0.0, t0)]);
}

#[test]
fn stops_after_max_attempts() {
    let tableau = explicit::Tableau::euler();
    let stepper = Explicit::new(&tableau);
    let config = Config::new(1e-6, 5).expect("valid config");

    let solution = solve_unobserved(
        &stepper,
        &decay,
        State::new(1.0, 0.0),
        1.0,
        1e-3,
        &config,
    )
    .expect("should return partial solution");

    assert_eq!(solution.status, Status::MaxAttempts);
    assert_eq!(solution.steps, 5);
    assert_eq!(solution.history.len(), 6);
}

#[test]
fn observer_can_stop_early() {
    let tableau = explicit::Tableau::rk4();
    let stepper = Explicit::new(&tableau);

    let observer = |event: &Event| match event {
        Event::Accepted { step: 3, .. } => Some(Action::StopEarly),
        _ => None,
    };

    let solution = solve(
        &stepper,
        &decay,
        State::new(1.0, 0.0),
        10.0,
        0.1,
        &Config::default(),
        observer,
    )
    .expect("should stop early");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.steps, 3);
    assert_eq!(solution.history.len(), 4); // initial + 3 steps
}

#[test]
fn horizon_before_start_returns_initial() {
    let tableau = explicit::Tableau::euler();
    let stepper = Explicit::new(&tableau);

    let solution = solve_unobserved(
        &stepper,
        &decay,
        State::new(5.0, 2.0),
        1.0,
        0.1,
        &Config::default(),
    )
    .expect("should return initial");

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(solution.steps, 0);
    assert_eq!(solution.history, vec![State::new(5.0, 2.0)]);
}

#[test]
fn stepper_error_is_wrapped() {
    let tableau = explicit::Tableau::euler();
    let stepper = Explicit::new(&tableau);
    let f = |_y: f64, t: f64| 1.0 / (1.0 - t);

    let error = solve_unobserved(
        &stepper,
        &f,
        State::new(0.0, 0.0),
        2.0,
        0.25,
        &Config::default(),
    )
    .expect_err("should hit the singularity at t = 1");

    let Error::Step { t, source } = &error else {
        panic!("expected a stepper error, got {error:?}");
    };
    assert_relative_eq!(*t, 1.0);
    assert!(matches!(
        source.downcast_ref::<explicit::Error>(),
        Some(explicit::Error::NumericalDivergence(Divergence::Stage { stage: 1, .. }))
    ));
}

#[test]
fn rejects_invalid_inputs() {
    let tableau = explicit::Tableau::euler();
    let stepper = Explicit::new(&tableau);
    let config = Config::default();

    for h0 in [0.0, -0.1, f64::NAN, f64::INFINITY] {
        let result = solve_unobserved(&stepper, &decay, State::new(1.0, 0.0), 1.0, h0, &config);
        assert!(matches!(result, Err(Error::InvalidStep { .. })));
    }

    let nan = State::new(f64::NAN, 0.0);
    let result = solve_unobserved(&stepper, &decay, nan, 1.0, 0.1, &config);
    assert!(matches!(result, Err(Error::NonFiniteInitial { .. })));

    let result = solve_unobserved(
        &stepper,
        &decay,
        State::new(1.0, 0.0),
        f64::INFINITY,
        0.1,
        &config,
    );
    assert!(matches!(result, Err(Error::NonFiniteHorizon { .. })));
}

#[test]
fn writes_time_value_records() {
    let solution = Solution {
        status: Status::Complete,
        history: vec![State::new(1.0, 0.0), State::new(2.0, 0.5)],
        steps: 1,
        rejected: 0,
    };

    let mut buffer = Vec::new();
    solution
        .write_records(&mut buffer)
        .expect("writing to a Vec cannot fail");

    assert_eq!(String::from_utf8(buffer).expect("utf-8"), "0,1\n0.5,2\n");
}
