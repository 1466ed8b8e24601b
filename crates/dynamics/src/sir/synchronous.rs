//! SIR under synchronous dynamics.

use crate::sir::{report_sir, seed_compartments, SirNetwork, SirRates};
use contagion_core::{Process, SynchronousProcess};
use contagion_types::{Compartment, ContactNetwork, NodeId, ParamError, Parameters, Results};
use indexmap::IndexSet;
use rand::Rng;

/// Per-timestep SIR: infection and recovery are probabilities evaluated
/// once per tick.
///
/// The model only ever evaluates its rules at infected nodes, since they
/// are the only places state changes originate. The active set is
/// re-filtered at the end of each tick.
#[derive(Debug, Clone, Default)]
pub struct SirSynchronous {
    rates: SirRates,
    infected: IndexSet<NodeId>,
}

impl SirSynchronous {
    /// Create an unseeded model.
    pub fn new() -> Self {
        Self::default()
    }

    /// The nodes currently infected, in insertion order.
    pub fn infected(&self) -> &IndexSet<NodeId> {
        &self.infected
    }

    /// Evaluate the dynamics at one infected node: try to infect each
    /// susceptible neighbour, then draw the node's own recovery.
    ///
    /// Returns the number of events applied.
    fn evaluate<G: SirNetwork, R: Rng>(&mut self, network: &mut G, n: NodeId, rng: &mut R) -> usize {
        let mut events = 0;

        let incident = network.incident(n).to_vec();
        for inc in incident {
            if *network.node_attr(inc.peer) == Compartment::Susceptible
                && rng.gen::<f64>() < self.rates.p_infect
            {
                *network.node_attr_mut(inc.peer) = Compartment::Infected;
                self.infected.insert(inc.peer);
                // The traversed edge joins the transmission tree.
                *network.edge_attr_mut(inc.edge) = true;
                events += 1;
            }
        }

        if rng.gen::<f64>() < self.rates.p_recover {
            *network.node_attr_mut(n) = Compartment::Recovered;
            events += 1;
        }

        events
    }
}

impl<G: SirNetwork> Process<G> for SirSynchronous {
    fn seed<R: Rng>(
        &mut self,
        network: &mut G,
        params: &Parameters,
        rng: &mut R,
    ) -> Result<(), ParamError> {
        self.rates = SirRates::from_params(params)?;
        seed_compartments(network, &mut self.infected, self.rates.p_infected, rng);
        Ok(())
    }

    fn active(&self) -> usize {
        self.infected.len()
    }

    fn report(&self, network: &G, results: &mut Results) {
        report_sir(self.infected.len(), network, results);
    }
}

impl<G: SirNetwork> SynchronousProcess<G> for SirSynchronous {
    fn tick<R: Rng>(&mut self, network: &mut G, rng: &mut R) -> usize {
        let mut events = 0;

        // Sweep the nodes that were infected when the tick began; nodes
        // infected during the sweep are evaluated from the next tick on.
        let sweep: Vec<NodeId> = self.infected.iter().copied().collect();
        for n in sweep {
            events += self.evaluate(network, n, rng);
        }

        // Drop recovered nodes, restoring active-set consistency.
        let network = &*network;
        self.infected
            .retain(|&n| *network.node_attr(n) == Compartment::Infected);

        events
    }
}
