//! Deterministic network fixtures for tests.
//!
//! Each fixture returns a network carrying SIR attributes with every node
//! susceptible and every occupied flag cleared, ready to seed.

use contagion_types::{AdjacencyNetwork, Compartment, NodeId};

/// A network carrying SIR attributes.
pub type SirTestNetwork = AdjacencyNetwork<Compartment, bool>;

/// `n` nodes, no edges.
pub fn isolated(n: usize) -> SirTestNetwork {
    AdjacencyNetwork::with_nodes(n, Compartment::Susceptible)
}

/// The complete graph on `n` nodes.
pub fn complete(n: usize) -> SirTestNetwork {
    let mut network = isolated(n);
    for a in 0..n {
        for b in (a + 1)..n {
            network
                .add_edge(NodeId(a as u32), NodeId(b as u32), false)
                .expect("fixture nodes exist");
        }
    }
    network
}

/// A path of `n` nodes: 0 - 1 - … - (n-1).
pub fn path(n: usize) -> SirTestNetwork {
    let mut network = isolated(n);
    for i in 1..n {
        network
            .add_edge(NodeId(i as u32 - 1), NodeId(i as u32), false)
            .expect("fixture nodes exist");
    }
    network
}

/// A cycle of `n >= 3` nodes.
///
/// # Panics
///
/// Panics if `n < 3`; smaller cycles degenerate into parallel edges.
pub fn ring(n: usize) -> SirTestNetwork {
    assert!(n >= 3, "a ring needs at least 3 nodes");
    let mut network = path(n);
    network
        .add_edge(NodeId(n as u32 - 1), NodeId(0), false)
        .expect("fixture nodes exist");
    network
}

#[cfg(test)]
mod tests {
    use super::*;
    use contagion_types::ContactNetwork;

    #[test]
    fn test_fixture_shapes() {
        assert_eq!(isolated(4).size(), 0);
        assert_eq!(complete(5).size(), 10);
        assert_eq!(path(4).size(), 3);
        assert_eq!(ring(3).size(), 3);
    }

    #[test]
    fn test_fixtures_start_clean() {
        let network = complete(3);
        assert!(network
            .node_ids()
            .iter()
            .all(|&n| *network.node_attr(n) == Compartment::Susceptible));
        assert!(network
            .edge_ids()
            .iter()
            .all(|&e| !*network.edge_attr(e)));
    }
}
