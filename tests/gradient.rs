mod common;

use aziz::{compute_forces, configuration_from_positions, evaluate, params};
use common::{finite_difference_forces, helium_cluster, mixed_range_configuration};
use ndarray::Array2;

fn assert_matches_finite_differences(configuration: &Array2<f64>) {
    let step = 1e-5;
    let exact = evaluate(configuration.view()).forces;
    let numeric = finite_difference_forces(configuration, step);

    for ((index, &f_exact), &f_numeric) in exact.indexed_iter().zip(numeric.iter()) {
        let tolerance = 1e-9 + 1e-5 * f_exact.abs();
        assert!(
            (f_exact - f_numeric).abs() < tolerance,
            "component {index:?}: autodiff {f_exact:e} vs finite difference {f_numeric:e}"
        );
    }
}

#[test]
fn test_cluster_forces_match_finite_differences() {
    assert_matches_finite_differences(&helium_cluster());
}

#[test]
fn test_mixed_range_forces_match_finite_differences() {
    assert_matches_finite_differences(&mixed_range_configuration());
}

#[test]
fn test_forces_are_smooth_across_damping_onset() {
    let onset = params::D * params::RM;
    for r in [onset - 1e-3, onset + 1e-3] {
        let dimer = configuration_from_positions(&[[0.0, 0.0, 0.0], [0.0, r, 0.0]]);
        assert_matches_finite_differences(&dimer);
    }

    let force_at = |r: f64| {
        let dimer = configuration_from_positions(&[[0.0, 0.0, 0.0], [0.0, r, 0.0]]);
        evaluate(dimer.view()).forces[[1, 1]]
    };
    let jump = (force_at(onset + 1e-9) - force_at(onset - 1e-9)).abs();
    assert!(jump < 1e-12, "force jumps by {jump:e} at the damping onset");
}

#[test]
fn test_zero_and_one_atom_configurations() {
    for n_atoms in [0, 1] {
        let configuration = Array2::from_elem((3, n_atoms), 2.5);
        let mut forces = Array2::from_elem((3, n_atoms), 1.0);
        let energy = compute_forces(configuration.view(), forces.view_mut());

        assert_eq!(energy, 0.0);
        assert!(forces.iter().all(|&f| f == 0.0));
    }
}
