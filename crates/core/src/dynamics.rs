//! The experiment lifecycle.

use crate::DynamicsError;
use contagion_types::{result, Parameters, Results};
use tracing::info;

/// What one scheduling unit produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepReport {
    /// Events applied during this unit.
    pub events: u64,
    /// Simulated time consumed: 1.0 for a synchronous tick, the drawn
    /// inter-event interval for a stochastic event.
    pub elapsed: f64,
    /// True when the process can make no further progress (e.g. the total
    /// transition rate is zero) and the run loop must stop regardless of
    /// the equilibrium check.
    pub exhausted: bool,
}

impl StepReport {
    /// A unit that applied `events` events over `elapsed` time.
    pub fn advanced(events: u64, elapsed: f64) -> Self {
        Self {
            events,
            elapsed,
            exhausted: false,
        }
    }

    /// A unit that found nothing left to fire.
    pub fn exhausted() -> Self {
        Self {
            events: 0,
            elapsed: 0.0,
            exhausted: true,
        }
    }
}

/// A scheduling strategy bound to a process model: the experiment
/// lifecycle.
///
/// Implementors supply the primitives (`setup`, `advance`,
/// `at_equilibrium`, `teardown`, `report`) and the trait derives the
/// [`run`](Dynamics::run) orchestration from them. One run is strictly
/// sequential: events apply one scheduling unit at a time with no
/// observable intermediate state between units.
pub trait Dynamics {
    /// Initialize run state from the parameters.
    ///
    /// Fails fast with a configuration error before any state mutation if
    /// a required parameter is missing or out of range.
    fn setup(&mut self, params: &Parameters) -> Result<(), DynamicsError>;

    /// Advance one scheduling unit.
    ///
    /// Fails with [`DynamicsError::NotSetUp`] if called before a
    /// completed [`setup`](Dynamics::setup).
    fn advance(&mut self) -> Result<StepReport, DynamicsError>;

    /// Should the run terminate at simulated time `t`?
    ///
    /// Combines the process-specific stopping rule with the scheduling
    /// ceiling, whichever occurs first.
    fn at_equilibrium(&self, t: f64) -> bool;

    /// Release run-scoped state.
    fn teardown(&mut self);

    /// Merge scheduler- and process-specific keys into the record.
    fn report(&self, results: &mut Results);

    /// Orchestrate a complete run: setup, advance until equilibrium or
    /// exhaustion, teardown, assemble the result record.
    ///
    /// The record always carries the total event count and the elapsed
    /// simulated time; everything else comes from
    /// [`report`](Dynamics::report). Hitting the scheduling ceiling is
    /// not an error: the caller distinguishes a converged from a
    /// non-converged run by inspecting the record.
    fn run(&mut self, params: &Parameters) -> Result<Results, DynamicsError> {
        self.setup(params)?;

        let mut time = 0.0_f64;
        let mut events = 0_u64;
        while !self.at_equilibrium(time) {
            let step = self.advance()?;
            events += step.events;
            time += step.elapsed;
            if step.exhausted {
                break;
            }
        }

        self.teardown();

        let mut results = Results::new();
        results.set_int(result::EVENTS, events);
        results.set_float(result::TIME, time);
        self.report(&mut results);

        info!(events, time, "run complete");
        Ok(results)
    }
}
