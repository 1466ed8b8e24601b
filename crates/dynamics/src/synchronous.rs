//! Discrete synchronous scheduling.

use crate::DEFAULT_SEED;
use contagion_core::{Dynamics, DynamicsError, Process, StepReport, SynchronousProcess};
use contagion_types::{result, Parameters, Results};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Advances simulated time in fixed unit ticks.
///
/// Each tick the process evaluates its dynamics once per node that was
/// active when the tick began; time increments by exactly 1.0 per tick
/// regardless of how many events fired. The scheduler owns the network,
/// the process, and a seeded RNG, so a run is exclusive and reproducible:
/// equal seeds, networks, and parameters give identical result records.
pub struct SynchronousDynamics<G, P> {
    network: G,
    process: P,
    seed: u64,
    rng: ChaCha8Rng,
    max_time: f64,
    ticks: u64,
    ticks_with_events: u64,
    ready: bool,
}

impl<G, P> SynchronousDynamics<G, P> {
    /// Bind a process model to a network.
    pub fn new(network: G, process: P) -> Self {
        Self {
            network,
            process,
            seed: DEFAULT_SEED,
            rng: ChaCha8Rng::seed_from_u64(DEFAULT_SEED),
            max_time: 0.0,
            ticks: 0,
            ticks_with_events: 0,
            ready: false,
        }
    }

    /// Set the RNG seed for subsequent runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// The network the dynamics run over.
    pub fn network(&self) -> &G {
        &self.network
    }

    /// The bound process model.
    pub fn process(&self) -> &P {
        &self.process
    }
}

impl<G, P: SynchronousProcess<G>> Dynamics for SynchronousDynamics<G, P> {
    fn setup(&mut self, params: &Parameters) -> Result<(), DynamicsError> {
        // Fresh RNG stream per run so re-used instances replay exactly.
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
        self.max_time = params.max_time();
        self.ticks = 0;
        self.ticks_with_events = 0;

        self.process.seed(&mut self.network, params, &mut self.rng)?;
        self.ready = true;

        debug!(seeded = self.process.active(), "synchronous setup complete");
        Ok(())
    }

    fn advance(&mut self) -> Result<StepReport, DynamicsError> {
        if !self.ready {
            return Err(DynamicsError::NotSetUp);
        }

        let events = self.process.tick(&mut self.network, &mut self.rng) as u64;
        self.ticks += 1;
        if events > 0 {
            self.ticks_with_events += 1;
        }
        Ok(StepReport::advanced(events, 1.0))
    }

    fn at_equilibrium(&self, t: f64) -> bool {
        self.process.settled() || t >= self.max_time
    }

    fn teardown(&mut self) {
        self.ready = false;
    }

    fn report(&self, results: &mut Results) {
        results.set_int(result::TIMESTEPS, self.ticks);
        results.set_int(result::TIMESTEP_EVENTS, self.ticks_with_events);
        self.process.report(&self.network, results);
    }
}
