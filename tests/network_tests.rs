//! Validation tests for reaction parsing and ODE solving.
//!
//! Small hand-checkable networks with known analytical behavior:
//! - first-order decay: A -> B, [A](t) = exp(-k t)
//! - two-state equilibrium: A <-> B with kf = kb settles at 50/50
//! - mass-action rate law for bimolecular reactions

use std::collections::HashMap;

use oligosim::network::{IntegratorConfig, RateTerm, ReactionNetwork, ReactionRecord};
use oligosim::SimulationError;

// ============================================================================
// Contribution Record Tests
// ============================================================================

#[test]
fn test_irreversible_contribution_signs() {
    let records = [ReactionRecord::irreversible("A + B -> C", 2.5)];
    let network = ReactionNetwork::from_records(&records).unwrap();

    let pair = |names: &[&str], rate: f64| RateTerm {
        reactants: names.iter().map(|s| s.to_string()).collect(),
        rate,
    };

    assert_eq!(network.terms_for("A").unwrap(), &[pair(&["A", "B"], -2.5)]);
    assert_eq!(network.terms_for("B").unwrap(), &[pair(&["A", "B"], -2.5)]);
    assert_eq!(network.terms_for("C").unwrap(), &[pair(&["A", "B"], 2.5)]);
}

#[test]
fn test_reversible_contribution_signs() {
    let records = [ReactionRecord::reversible("A <-> B", 1.5, 0.25)];
    let network = ReactionNetwork::from_records(&records).unwrap();

    let pair = |names: &[&str], rate: f64| RateTerm {
        reactants: names.iter().map(|s| s.to_string()).collect(),
        rate,
    };

    assert_eq!(
        network.terms_for("A").unwrap(),
        &[pair(&["A"], -1.5), pair(&["B"], 0.25)]
    );
    assert_eq!(
        network.terms_for("B").unwrap(),
        &[pair(&["A"], 1.5), pair(&["B"], -0.25)]
    );
}

#[test]
fn test_species_order_is_lexicographic() {
    let records = [
        ReactionRecord::irreversible("Zeta -> Alpha", 1.0),
        ReactionRecord::irreversible("Mid + Alpha -> Zeta", 1.0),
    ];
    let network = ReactionNetwork::from_records(&records).unwrap();
    assert_eq!(network.species(), &["Alpha", "Mid", "Zeta"]);
}

// ============================================================================
// Solver Accuracy Tests
// ============================================================================

#[test]
fn test_first_order_decay_matches_analytical() {
    // A -> B with k = 1: [A](t) = exp(-t)
    let records = [ReactionRecord::irreversible("A -> B", 1.0)];
    let network = ReactionNetwork::from_records(&records).unwrap();

    let initial = HashMap::from([("A".to_string(), 1.0)]);
    let grid = [0.0, 0.5, 1.0, 2.0];
    let table = network.solve(&initial, &grid).unwrap();

    for (i, t) in grid.iter().enumerate() {
        let expected = (-t).exp();
        let got = table.value(i, "A").unwrap();
        assert!(
            (got - expected).abs() < 1e-6,
            "[A]({}) = {}, expected {}",
            t,
            got,
            expected
        );
        let b = table.value(i, "B").unwrap();
        assert!(
            (got + b - 1.0).abs() < 1e-9,
            "mass not conserved at t = {}",
            t
        );
    }
}

#[test]
fn test_symmetric_equilibrium_settles_at_half() {
    let records = [ReactionRecord::reversible("A <-> B", 1.0, 1.0)];
    let network = ReactionNetwork::from_records(&records).unwrap();

    let initial = HashMap::from([("A".to_string(), 1.0)]);
    let grid: Vec<f64> = (0..=10).map(|i| i as f64).collect();
    let table = network.solve(&initial, &grid).unwrap();

    assert!(
        (table.final_value("A").unwrap() - 0.5).abs() < 1e-6,
        "A should settle at 0.5, got {}",
        table.final_value("A").unwrap()
    );
    assert!((table.final_value("B").unwrap() - 0.5).abs() < 1e-6);
}

#[test]
fn test_asymmetric_equilibrium_ratio() {
    // A <-> B with kf = 3, kb = 1 settles at [B]/[A] = 3.
    let records = [ReactionRecord::reversible("A <-> B", 3.0, 1.0)];
    let network = ReactionNetwork::from_records(&records).unwrap();

    let initial = HashMap::from([("A".to_string(), 1.0)]);
    let grid: Vec<f64> = (0..=10).map(|i| i as f64).collect();
    let table = network.solve(&initial, &grid).unwrap();

    let a = table.final_value("A").unwrap();
    let b = table.final_value("B").unwrap();
    assert!(
        (b / a - 3.0).abs() < 1e-4,
        "equilibrium ratio should be 3, got {}",
        b / a
    );
}

#[test]
fn test_fixed_species_is_invariant() {
    let records = [
        ReactionRecord::irreversible("Feed + A -> B", 1.0),
        ReactionRecord::irreversible("Feed -> Waste", 0.5),
    ];
    let network = ReactionNetwork::from_records(&records)
        .unwrap()
        .with_fixed_concentrations(["Feed".to_string()]);

    let initial = HashMap::from([("Feed".to_string(), 2.0), ("A".to_string(), 1.0)]);
    let grid = [0.0, 1.0, 2.0, 5.0];
    let table = network.solve(&initial, &grid).unwrap();

    for i in 0..table.len() {
        assert_eq!(
            table.value(i, "Feed"),
            Some(2.0),
            "fixed species drifted at row {}",
            i
        );
    }
    // The clamped feed keeps driving both reactions.
    assert!(table.final_value("B").unwrap() > 0.0);
    assert!(table.final_value("Waste").unwrap() > 0.0);
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn test_malformed_reaction_is_rejected() {
    let records = [ReactionRecord::irreversible("A + B = C", 1.0)];
    let err = ReactionNetwork::from_records(&records).unwrap_err();
    assert!(matches!(err, SimulationError::MalformedReaction { .. }));
}

#[test]
fn test_time_grid_validation() {
    let records = [ReactionRecord::irreversible("A -> B", 1.0)];
    let network = ReactionNetwork::from_records(&records).unwrap();

    let err = network.solve(&HashMap::new(), &[]).unwrap_err();
    assert!(matches!(err, SimulationError::EmptyTimeGrid));

    let err = network.solve(&HashMap::new(), &[0.0, 2.0, 1.0]).unwrap_err();
    assert!(matches!(
        err,
        SimulationError::NonMonotonicTimeGrid { index: 2, .. }
    ));
}

// ============================================================================
// Integrator Configuration Tests
// ============================================================================

#[test]
fn test_coarse_integrator_config_is_applied() {
    // A coarse substep visibly degrades the decay accuracy; the configured
    // dt therefore has to reach the integrator.
    let records = [ReactionRecord::irreversible("A -> B", 1.0)];
    let initial = HashMap::from([("A".to_string(), 1.0)]);
    let grid = [0.0, 1.0];

    let fine = ReactionNetwork::from_records(&records)
        .unwrap()
        .with_integrator_config(IntegratorConfig {
            dt: 1e-4,
            min_concentration: 0.0,
        });
    let coarse = ReactionNetwork::from_records(&records)
        .unwrap()
        .with_integrator_config(IntegratorConfig {
            dt: 1.0,
            min_concentration: 0.0,
        });

    let expected = (-1.0f64).exp();
    let fine_err = (fine.solve(&initial, &grid).unwrap().final_value("A").unwrap() - expected).abs();
    let coarse_err =
        (coarse.solve(&initial, &grid).unwrap().final_value("A").unwrap() - expected).abs();

    assert!(fine_err < 1e-9);
    assert!(coarse_err > fine_err);
}
