//! Post-run outbreak statistics.

use crate::sir::SirNetwork;
use contagion_types::{result, ContactNetwork, Results};

/// Compute outbreak statistics over the residual graph and merge them
/// into the result record.
///
/// An outbreak is a maximal connected cluster of nodes that left the
/// susceptible compartment: the residual graph keeps every node and
/// exactly the edges whose both endpoints were infected at some point.
/// Every transmission chain lies inside one such cluster (an occupied
/// edge always has two ever-infected endpoints), and adjacent nodes that
/// were seeded together belong to one outbreak. Untouched nodes appear
/// as size-1 components and are included in the mean.
pub fn outbreak_statistics<G: SirNetwork>(network: &G, results: &mut Results) {
    let components = network.components_where(|e| {
        let (a, b) = network.endpoints(e);
        network.node_attr(a).was_infected() && network.node_attr(b).was_infected()
    });

    let occupied = network
        .edge_ids()
        .into_iter()
        .filter(|&e| *network.edge_attr(e))
        .count();

    let order = network.order();
    let max_size = components.first().map_or(0, |c| c.len());
    let mean_size = if components.is_empty() {
        0.0
    } else {
        let total: usize = components.iter().map(|c| c.len()).sum();
        total as f64 / components.len() as f64
    };
    let proportion = if order == 0 {
        0.0
    } else {
        max_size as f64 / order as f64
    };

    results.set_int(result::OCCUPIED_EDGES, occupied as u64);
    results.set_float(result::MEAN_OUTBREAK_SIZE, mean_size);
    results.set_int(result::MAX_OUTBREAK_SIZE, max_size as u64);
    results.set_float(result::MAX_OUTBREAK_PROPORTION, proportion);
}
