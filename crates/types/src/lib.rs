//! Core types for epidemic process simulation.
//!
//! This crate is the leaf of the workspace: identifier newtypes, the
//! compartment state enumeration, the contact-network substrate, and the
//! key/value parameter and result records exchanged with the surrounding
//! experiment framework.

mod compartment;
mod identifiers;
mod network;
mod params;
mod results;

pub use compartment::Compartment;
pub use identifiers::{EdgeId, NodeId};
pub use network::{AdjacencyNetwork, ContactNetwork, Incidence, NetworkError};
pub use params::{param, ParamError, Parameters, DEFAULT_MAX_TIME};
pub use results::{result, Results, Value};
