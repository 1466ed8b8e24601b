//! Continuous-time stochastic (Gillespie) scheduling.

use crate::DEFAULT_SEED;
use contagion_core::{Dynamics, DynamicsError, Process, StepReport, StochasticProcess};
use contagion_types::{Parameters, Results};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Advances simulated time by competing exponential clocks.
///
/// One scheduling unit is one atomic event: the process reports its
/// transition classes with aggregate rates, the scheduler draws the
/// inter-event interval from the total rate, selects a class
/// proportionally to its rate, and the process fires exactly one
/// transition of that class. Simulated time is continuous; the run stops
/// when the total rate reaches zero, the process settles, or the time
/// ceiling is hit.
pub struct StochasticDynamics<G, P> {
    network: G,
    process: P,
    seed: u64,
    rng: ChaCha8Rng,
    max_time: f64,
    ready: bool,
}

impl<G, P> StochasticDynamics<G, P> {
    /// Bind a process model to a network.
    pub fn new(network: G, process: P) -> Self {
        Self {
            network,
            process,
            seed: DEFAULT_SEED,
            rng: ChaCha8Rng::seed_from_u64(DEFAULT_SEED),
            max_time: 0.0,
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

impl<G, P: StochasticProcess<G>> Dynamics for StochasticDynamics<G, P> {
    fn setup(&mut self, params: &Parameters) -> Result<(), DynamicsError> {
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
        self.max_time = params.max_time();

        self.process.seed(&mut self.network, params, &mut self.rng)?;
        self.ready = true;

        debug!(seeded = self.process.active(), "stochastic setup complete");
        Ok(())
    }

    fn advance(&mut self) -> Result<StepReport, DynamicsError> {
        if !self.ready {
            return Err(DynamicsError::NotSetUp);
        }

        let table = self.process.transitions(&self.network);
        let total: f64 = table.iter().map(|(rate, _)| rate).sum();
        if total <= 0.0 {
            return Ok(StepReport::exhausted());
        }

        // Inter-event interval of the merged exponential clock; the draw
        // is mapped into (0, 1] so ln never sees zero.
        let u: f64 = 1.0 - self.rng.gen::<f64>();
        let elapsed = -u.ln() / total;

        // Select a class with probability proportional to its rate.
        let mut target = self.rng.gen::<f64>() * total;
        let mut chosen = None;
        for &(rate, event) in &table {
            if rate <= 0.0 {
                continue;
            }
            if target < rate {
                chosen = Some(event);
                break;
            }
            target -= rate;
        }
        let event = chosen.unwrap_or_else(|| {
            // Floating-point slack walked past the end; the total is
            // positive, so a positive-rate class exists.
            table
                .iter()
                .rev()
                .find(|(rate, _)| *rate > 0.0)
                .map(|&(_, event)| event)
                .expect("positive total rate implies a positive-rate class")
        });

        let events = self.process.fire(&mut self.network, event, &mut self.rng) as u64;
        Ok(StepReport::advanced(events, elapsed))
    }

    fn at_equilibrium(&self, t: f64) -> bool {
        self.process.settled() || t >= self.max_time
    }

    fn teardown(&mut self) {
        self.ready = false;
    }

    fn report(&self, results: &mut Results) {
        self.process.report(&self.network, results);
    }
}
