//! Deterministic epidemic dynamics on contact networks.
//!
//! This crate provides the two scheduling strategies and the SIR process
//! model. Given the same seed, network, and parameters, a run produces
//! identical results every time.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 SynchronousDynamics /                    │
//! │                  StochasticDynamics                      │
//! │                                                          │
//! │  ┌─────────────────────────────────────────────────────┐ │
//! │  │  run(): setup → advance* → teardown → Results       │ │
//! │  │  one scheduling unit per advance:                   │ │
//! │  │    synchronous: one full tick over the active set   │ │
//! │  │    stochastic:  one Gillespie event draw            │ │
//! │  └──────────────────────────┬──────────────────────────┘ │
//! │                             │                            │
//! │                             ▼                            │
//! │  ┌─────────────────────────────────────────────────────┐ │
//! │  │  process: SirSynchronous / SirStochastic            │ │
//! │  │  active set (IndexSet) + per-node/edge attributes   │ │
//! │  └──────────────────────────┬──────────────────────────┘ │
//! │                             │                            │
//! │                             ▼                            │
//! │  ┌─────────────────────────────────────────────────────┐ │
//! │  │  outbreak statistics over the residual graph        │ │
//! │  └─────────────────────────────────────────────────────┘ │
//! └──────────────────────────────────────────────────────────┘
//! ```

mod outbreak;
mod sir;
mod stochastic;
mod synchronous;

pub use outbreak::outbreak_statistics;
pub use sir::{SirEvent, SirNetwork, SirStochastic, SirSynchronous};
pub use stochastic::StochasticDynamics;
pub use synchronous::SynchronousDynamics;

/// Seed used when the caller does not supply one.
pub const DEFAULT_SEED: u64 = 12345;
