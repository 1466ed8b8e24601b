//! Dynamical state of a node under SIR dynamics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The compartment a node currently occupies.
///
/// Transitions are monotone along S → I → R: within one run a node never
/// re-enters a compartment it has left. `Infected` is the active
/// compartment, the only one from which dynamics rules originate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Compartment {
    /// Never infected; can be infected by an infected neighbour.
    Susceptible,
    /// Currently infectious.
    Infected,
    /// No longer infectious and immune to re-infection.
    Recovered,
}

impl Compartment {
    /// True for every compartment a node can only reach by having been
    /// infected at some point.
    pub fn was_infected(self) -> bool {
        !matches!(self, Compartment::Susceptible)
    }
}

impl fmt::Display for Compartment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Compartment::Susceptible => 'S',
            Compartment::Infected => 'I',
            Compartment::Recovered => 'R',
        };
        write!(f, "{c}")
    }
}
