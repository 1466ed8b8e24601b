//! SIR under continuous-time stochastic dynamics.

use crate::sir::{report_sir, seed_compartments, SirNetwork, SirRates};
use contagion_core::{Process, StochasticProcess};
use contagion_types::{
    Compartment, ContactNetwork, EdgeId, NodeId, ParamError, Parameters, Results,
};
use indexmap::IndexSet;
use rand::Rng;

/// The two SIR transition classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SirEvent {
    /// One susceptible node is infected over one SI edge.
    Infect,
    /// One infected node recovers.
    Recover,
}

/// An edge whose endpoints are currently an (infected, susceptible) pair:
/// the unit of infection pressure.
#[derive(Debug, Clone, Copy)]
struct SiPair {
    edge: EdgeId,
    infected: NodeId,
    susceptible: NodeId,
}

/// Event-driven SIR: infection runs at aggregate rate `|SI| * pInfect`,
/// recovery at `|infected| * pRecover`.
///
/// Alongside the active set, the model maintains the list of SI pairs
/// incrementally: pairs are dropped when their susceptible endpoint is
/// infected or their infected endpoint recovers, and added when a fresh
/// infection exposes new susceptible neighbours.
#[derive(Debug, Clone, Default)]
pub struct SirStochastic {
    rates: SirRates,
    infected: IndexSet<NodeId>,
    si: Vec<SiPair>,
}

impl SirStochastic {
    /// Create an unseeded model.
    pub fn new() -> Self {
        Self::default()
    }

    /// The nodes currently infected, in insertion order.
    pub fn infected(&self) -> &IndexSet<NodeId> {
        &self.infected
    }

    /// Number of SI pairs currently under infection pressure.
    pub fn si_pairs(&self) -> usize {
        self.si.len()
    }

    /// Register the pairs a newly-infected node exerts pressure over.
    fn expose_neighbours<G: SirNetwork>(&mut self, network: &G, n: NodeId) {
        for inc in network.incident(n) {
            if *network.node_attr(inc.peer) == Compartment::Susceptible {
                self.si.push(SiPair {
                    edge: inc.edge,
                    infected: n,
                    susceptible: inc.peer,
                });
            }
        }
    }

    /// Infect the susceptible endpoint of one uniformly-chosen SI pair.
    fn infect<G: SirNetwork, R: Rng>(&mut self, network: &mut G, rng: &mut R) -> usize {
        if self.si.is_empty() {
            return 0;
        }

        let pair = self.si[rng.gen_range(0..self.si.len())];
        let node = pair.susceptible;

        *network.node_attr_mut(node) = Compartment::Infected;
        self.infected.insert(node);
        // The traversed edge joins the transmission tree.
        *network.edge_attr_mut(pair.edge) = true;

        // The node is no longer a susceptible endpoint anywhere; it now
        // exerts pressure on its own susceptible neighbours.
        self.si.retain(|p| p.susceptible != node);
        self.expose_neighbours(network, node);

        1
    }

    /// Recover one uniformly-chosen infected node.
    fn recover<G: SirNetwork, R: Rng>(&mut self, network: &mut G, rng: &mut R) -> usize {
        if self.infected.is_empty() {
            return 0;
        }

        let pick = rng.gen_range(0..self.infected.len());
        let Some(&node) = self.infected.get_index(pick) else {
            return 0;
        };
        self.infected.swap_remove_index(pick);

        *network.node_attr_mut(node) = Compartment::Recovered;

        // Its infection pressure disappears with it.
        self.si.retain(|p| p.infected != node);

        1
    }
}

impl<G: SirNetwork> Process<G> for SirStochastic {
    fn seed<R: Rng>(
        &mut self,
        network: &mut G,
        params: &Parameters,
        rng: &mut R,
    ) -> Result<(), ParamError> {
        self.rates = SirRates::from_params(params)?;
        seed_compartments(network, &mut self.infected, self.rates.p_infected, rng);

        // Build the initial SI pair list from the seeded active set.
        self.si.clear();
        for i in 0..self.infected.len() {
            let n = self.infected[i];
            self.expose_neighbours(network, n);
        }

        Ok(())
    }

    fn active(&self) -> usize {
        self.infected.len()
    }

    fn report(&self, network: &G, results: &mut Results) {
        report_sir(self.infected.len(), network, results);
    }
}

impl<G: SirNetwork> StochasticProcess<G> for SirStochastic {
    type Event = SirEvent;

    fn transitions(&self, _network: &G) -> Vec<(f64, SirEvent)> {
        vec![
            (self.si.len() as f64 * self.rates.p_infect, SirEvent::Infect),
            (
                self.infected.len() as f64 * self.rates.p_recover,
                SirEvent::Recover,
            ),
        ]
    }

    fn fire<R: Rng>(&mut self, network: &mut G, event: SirEvent, rng: &mut R) -> usize {
        match event {
            SirEvent::Infect => self.infect(network, rng),
            SirEvent::Recover => self.recover(network, rng),
        }
    }
}
