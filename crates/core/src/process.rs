//! The process-model seam.

use contagion_types::{ParamError, Parameters, Results};
use rand::Rng;

/// A process model running over a contact network.
///
/// A process owns the state the dynamics originate from (for SIR, the
/// active set of infected nodes) while the network owns the per-node and
/// per-edge attributes. Implementations are:
///
/// - **Synchronous**: no async, no I/O
/// - **Deterministic**: the same network, parameters, and RNG stream
///   always produce the same trajectory
///
/// Scheduling strategies drive a process through one of the two
/// sub-traits, [`SynchronousProcess`] or [`StochasticProcess`].
pub trait Process<G> {
    /// Initialize the network and internal state for a fresh run.
    ///
    /// Validates every parameter the process needs *before* mutating any
    /// state, then seeds node and edge attributes and rebuilds the active
    /// set from scratch. Called on every run, so a dirty prior run cannot
    /// leak state into a new one.
    fn seed<R: Rng>(
        &mut self,
        network: &mut G,
        params: &Parameters,
        rng: &mut R,
    ) -> Result<(), ParamError>;

    /// Number of currently active nodes.
    fn active(&self) -> usize;

    /// True when no further transitions can originate.
    ///
    /// This is the process-specific half of the equilibrium condition;
    /// the scheduler combines it with its own ceiling.
    fn settled(&self) -> bool {
        self.active() == 0
    }

    /// Merge process-specific statistics into the result record after the
    /// run loop has terminated.
    fn report(&self, network: &G, results: &mut Results);
}

/// A process steppable in discrete synchronous ticks.
pub trait SynchronousProcess<G>: Process<G> {
    /// Run one full tick: evaluate the dynamics at every node that was
    /// active when the tick began, then restore active-set consistency.
    ///
    /// Returns the number of events applied this tick.
    fn tick<R: Rng>(&mut self, network: &mut G, rng: &mut R) -> usize;
}

/// A process steppable one atomic transition at a time.
///
/// The process exposes its elementary transitions grouped into classes
/// with aggregate rates; the scheduler picks a class proportionally to its
/// rate and the process fires one uniformly-chosen instance of it.
pub trait StochasticProcess<G>: Process<G> {
    /// A transition class.
    type Event: Copy;

    /// The currently-enabled transition classes as `(rate, event)` pairs.
    ///
    /// A class with rate zero may be omitted; the scheduler treats an
    /// empty table (or an all-zero one) as exhaustion.
    fn transitions(&self, network: &G) -> Vec<(f64, Self::Event)>;

    /// Apply exactly one transition of the given class, chosen uniformly
    /// among its instances. Returns the number of events applied (one,
    /// or zero if the class raced empty).
    fn fire<R: Rng>(&mut self, network: &mut G, event: Self::Event, rng: &mut R) -> usize;
}
