//! End-to-end tests for SIR under synchronous dynamics.

use contagion_core::{Dynamics, DynamicsError};
use contagion_dynamics::{SirSynchronous, SynchronousDynamics};
use contagion_test_helpers as fixtures;
use contagion_types::{param, result, Compartment, ContactNetwork, ParamError, Parameters};
use std::collections::HashSet;
use tracing_test::traced_test;

fn sir_params(p_infected: f64, p_infect: f64, p_recover: f64) -> Parameters {
    Parameters::new()
        .with(param::P_INFECTED, p_infected)
        .with(param::P_INFECT, p_infect)
        .with(param::P_RECOVER, p_recover)
}

fn rank(c: Compartment) -> u8 {
    match c {
        Compartment::Susceptible => 0,
        Compartment::Infected => 1,
        Compartment::Recovered => 2,
    }
}

type SyncSir = SynchronousDynamics<fixtures::SirTestNetwork, SirSynchronous>;

fn states(dynamics: &SyncSir) -> Vec<Compartment> {
    dynamics
        .network()
        .node_ids()
        .into_iter()
        .map(|n| *dynamics.network().node_attr(n))
        .collect()
}

fn occupied_flags(dynamics: &SyncSir) -> Vec<bool> {
    dynamics
        .network()
        .edge_ids()
        .into_iter()
        .map(|e| *dynamics.network().edge_attr(e))
        .collect()
}

#[test]
fn test_no_seeding_is_equilibrium_at_time_zero() {
    let mut dynamics = SynchronousDynamics::new(fixtures::ring(10), SirSynchronous::new());
    let results = dynamics.run(&sir_params(0.0, 0.5, 0.5)).unwrap();

    assert_eq!(results.int(result::EVENTS), Some(0));
    assert_eq!(results.float(result::TIME), Some(0.0));
    assert_eq!(results.int(result::TIMESTEPS), Some(0));
    assert_eq!(results.int(result::REMAINING_INFECTED), Some(0));
}

#[test]
fn test_zero_size_outbreak() {
    // 10 nodes, no edges: every node is seeded and recovers in one tick.
    let mut dynamics = SynchronousDynamics::new(fixtures::isolated(10), SirSynchronous::new());
    let results = dynamics.run(&sir_params(1.0, 0.5, 1.0)).unwrap();

    assert_eq!(results.int(result::EVENTS), Some(10), "one recovery per node");
    assert_eq!(results.float(result::TIME), Some(1.0));
    assert_eq!(results.int(result::TIMESTEPS), Some(1));
    assert_eq!(results.int(result::TIMESTEP_EVENTS), Some(1));
    assert_eq!(results.int(result::REMAINING_INFECTED), Some(0));
    assert_eq!(results.int(result::OCCUPIED_EDGES), Some(0));
    assert_eq!(results.int(result::MAX_OUTBREAK_SIZE), Some(1));
    assert_eq!(results.float(result::MAX_OUTBREAK_PROPORTION), Some(0.1));
    assert_eq!(results.float(result::MEAN_OUTBREAK_SIZE), Some(1.0));
}

#[test]
fn test_full_saturation() {
    // Everyone is seeded on a complete graph and nobody recovers: one
    // outbreak covering the whole network, stopped by the ceiling.
    let mut dynamics = SynchronousDynamics::new(fixtures::complete(5), SirSynchronous::new());
    let params = sir_params(1.0, 1.0, 0.0).with(param::MAX_TIME, 1.0);
    let results = dynamics.run(&params).unwrap();

    assert_eq!(results.int(result::EVENTS), Some(0));
    assert_eq!(results.int(result::REMAINING_INFECTED), Some(5));
    assert_eq!(results.int(result::MAX_OUTBREAK_SIZE), Some(5));
    assert_eq!(results.float(result::MAX_OUTBREAK_PROPORTION), Some(1.0));
    assert_eq!(results.float(result::MEAN_OUTBREAK_SIZE), Some(5.0));
}

#[test]
fn test_zero_infectivity_settles_after_seeds_recover() {
    // With pInfect = 0 and certain recovery, the epidemic dies in at most
    // one tick after seeding.
    let mut dynamics =
        SynchronousDynamics::new(fixtures::ring(8), SirSynchronous::new()).with_seed(7);
    let results = dynamics.run(&sir_params(0.5, 0.0, 1.0)).unwrap();

    assert!(results.int(result::TIMESTEPS).unwrap() <= 1);
    assert_eq!(results.int(result::REMAINING_INFECTED), Some(0));
    assert_eq!(results.int(result::OCCUPIED_EDGES), Some(0));

    let recovered = dynamics
        .network()
        .node_ids()
        .into_iter()
        .filter(|&n| *dynamics.network().node_attr(n) == Compartment::Recovered)
        .count() as u64;
    assert_eq!(results.int(result::EVENTS), Some(recovered));
}

#[test]
fn test_event_conservation() {
    // Every event is exactly one infection (which occupies one edge) or
    // one recovery (which leaves one recovered node behind).
    let mut dynamics =
        SynchronousDynamics::new(fixtures::ring(12), SirSynchronous::new()).with_seed(42);
    let params = sir_params(0.5, 0.6, 0.3).with(param::MAX_TIME, 100.0);
    let results = dynamics.run(&params).unwrap();

    let network = dynamics.network();
    let recovered = network
        .node_ids()
        .into_iter()
        .filter(|&n| *network.node_attr(n) == Compartment::Recovered)
        .count() as u64;
    let occupied = results.int(result::OCCUPIED_EDGES).unwrap();

    assert_eq!(
        results.int(result::EVENTS),
        Some(occupied + recovered),
        "events = infections + recoveries"
    );
}

#[test]
fn test_monotone_states_and_active_set_consistency() {
    let mut dynamics =
        SynchronousDynamics::new(fixtures::ring(10), SirSynchronous::new()).with_seed(3);
    let params = sir_params(0.3, 0.5, 0.2).with(param::MAX_TIME, 50.0);
    dynamics.setup(&params).unwrap();

    let mut prev_states = states(&dynamics);
    let mut prev_occupied = occupied_flags(&dynamics);
    assert!(
        prev_occupied.iter().all(|&o| !o),
        "all edges unoccupied at setup completion"
    );

    let mut t = 0.0;
    while !dynamics.at_equilibrium(t) {
        let step = dynamics.advance().unwrap();
        t += step.elapsed;

        // Monotonicity: states only ever move along S -> I -> R.
        let current = states(&dynamics);
        for (before, after) in prev_states.iter().zip(&current) {
            assert!(
                rank(*after) >= rank(*before),
                "node reverted from {before} to {after}"
            );
        }
        prev_states = current;

        // Occupied flags never reset.
        let flags = occupied_flags(&dynamics);
        for (before, after) in prev_occupied.iter().zip(&flags) {
            assert!(*after || !*before, "occupied flag was reset");
        }
        prev_occupied = flags;

        // The active set is exactly the infected nodes.
        let from_network: HashSet<_> = dynamics
            .network()
            .node_ids()
            .into_iter()
            .filter(|&n| *dynamics.network().node_attr(n) == Compartment::Infected)
            .collect();
        let from_process: HashSet<_> = dynamics.process().infected().iter().copied().collect();
        assert_eq!(from_process, from_network, "active set out of sync");

        if step.exhausted {
            break;
        }
    }
}

#[test]
fn test_reproducible_runs() {
    let params = sir_params(0.4, 0.5, 0.3).with(param::MAX_TIME, 100.0);

    let mut first =
        SynchronousDynamics::new(fixtures::ring(15), SirSynchronous::new()).with_seed(99);
    let mut second =
        SynchronousDynamics::new(fixtures::ring(15), SirSynchronous::new()).with_seed(99);

    assert_eq!(
        first.run(&params).unwrap(),
        second.run(&params).unwrap(),
        "equal seeds must give identical records"
    );
}

#[test]
fn test_rerun_on_same_instance_replays() {
    // Re-using an instance re-seeds from scratch, so a second run is an
    // exact replay rather than a continuation of dirty state.
    let mut dynamics =
        SynchronousDynamics::new(fixtures::ring(9), SirSynchronous::new()).with_seed(5);
    let params = sir_params(0.4, 0.5, 0.4).with(param::MAX_TIME, 100.0);

    let first = dynamics.run(&params).unwrap();
    let second = dynamics.run(&params).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_parameter_is_config_error() {
    let mut dynamics = SynchronousDynamics::new(fixtures::ring(4), SirSynchronous::new());
    let params = Parameters::new()
        .with(param::P_INFECTED, 0.1)
        .with(param::P_INFECT, 0.1);

    let err = dynamics.run(&params).unwrap_err();
    assert_eq!(
        err,
        DynamicsError::Config(ParamError::Missing(param::P_RECOVER.to_owned()))
    );
}

#[test]
fn test_out_of_range_probability_is_config_error() {
    let mut dynamics = SynchronousDynamics::new(fixtures::ring(4), SirSynchronous::new());
    let err = dynamics.run(&sir_params(0.1, 1.5, 0.1)).unwrap_err();
    assert!(matches!(
        err,
        DynamicsError::Config(ParamError::NotAProbability { .. })
    ));
}

#[test]
fn test_advance_before_setup_is_state_error() {
    let mut dynamics = SynchronousDynamics::new(fixtures::ring(4), SirSynchronous::new());
    assert_eq!(dynamics.advance().unwrap_err(), DynamicsError::NotSetUp);
}

#[traced_test]
#[test]
fn test_run_completion_is_logged() {
    let mut dynamics = SynchronousDynamics::new(fixtures::isolated(3), SirSynchronous::new());
    dynamics.run(&sir_params(1.0, 0.0, 1.0)).unwrap();
    assert!(logs_contain("run complete"));
}
