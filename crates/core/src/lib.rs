//! Core abstractions for process dynamics on contact networks.
//!
//! This crate defines the two orthogonal seams a simulation run is
//! composed from: a *process model* (what happens at a node, see
//! [`Process`]) and a *scheduling strategy* (when it happens, see
//! [`Dynamics`]). Concrete schedulers and the SIR model live in the
//! `contagion-dynamics` crate.

mod dynamics;
mod error;
mod process;

pub use dynamics::{Dynamics, StepReport};
pub use error::DynamicsError;
pub use process::{Process, StochasticProcess, SynchronousProcess};
