//! The SIR process model.
//!
//! Susceptible nodes are infected over edges from infected neighbours;
//! infected nodes recover independently. Both scheduling variants share
//! the seeding rule, the validated rate set, and the post-run reporting;
//! they differ in how transitions are drawn.

mod stochastic;
mod synchronous;

pub use stochastic::{SirEvent, SirStochastic};
pub use synchronous::SirSynchronous;

use crate::outbreak_statistics;
use contagion_types::{
    param, result, Compartment, ContactNetwork, NodeId, ParamError, Parameters, Results,
};
use indexmap::IndexSet;
use rand::Rng;

/// Shorthand for networks carrying SIR attributes: a [`Compartment`] per
/// node and the occupied flag per edge.
pub trait SirNetwork: ContactNetwork<NodeAttr = Compartment, EdgeAttr = bool> {}

impl<G: ContactNetwork<NodeAttr = Compartment, EdgeAttr = bool>> SirNetwork for G {}

/// The validated SIR rate set, cached at seed time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct SirRates {
    /// Seeding probability.
    pub p_infected: f64,
    /// Per-edge transmission probability/rate.
    pub p_infect: f64,
    /// Per-node recovery probability/rate.
    pub p_recover: f64,
}

impl SirRates {
    /// Read and range-check all three probabilities.
    ///
    /// Validation happens before any network mutation, so a configuration
    /// error leaves no partial state behind.
    pub fn from_params(params: &Parameters) -> Result<Self, ParamError> {
        Ok(Self {
            p_infected: params.probability(param::P_INFECTED)?,
            p_infect: params.probability(param::P_INFECT)?,
            p_recover: params.probability(param::P_RECOVER)?,
        })
    }
}

/// Seed the network: each node is independently infected with probability
/// `p_infected`, everything else starts susceptible, every occupied flag
/// is cleared, and the active set is rebuilt from scratch.
///
/// The rebuild is unconditional so a dirty prior run cannot leak state
/// into a fresh one. Draws use strict `<`, so 0.0 never seeds and 1.0
/// always does.
pub(crate) fn seed_compartments<G: SirNetwork, R: Rng>(
    network: &mut G,
    infected: &mut IndexSet<NodeId>,
    p_infected: f64,
    rng: &mut R,
) {
    infected.clear();

    for n in network.node_ids() {
        if rng.gen::<f64>() < p_infected {
            *network.node_attr_mut(n) = Compartment::Infected;
            infected.insert(n);
        } else {
            *network.node_attr_mut(n) = Compartment::Susceptible;
        }
    }

    for e in network.edge_ids() {
        *network.edge_attr_mut(e) = false;
    }
}

/// Result keys common to both SIR variants: the final active-set size and
/// the outbreak statistics.
pub(crate) fn report_sir<G: SirNetwork>(
    remaining_infected: usize,
    network: &G,
    results: &mut Results,
) {
    results.set_int(result::REMAINING_INFECTED, remaining_infected as u64);
    outbreak_statistics(network, results);
}
