mod common;

use aziz::{
    CalculatorOptions, HeliumCalculator, UnitSystem, compute_ensemble, ensemble_from_configurations,
    evaluate, evaluate_ensemble, layout,
};
use common::{helium_cluster, mixed_range_configuration};
use ndarray::{Array1, Array3, Axis, s};

#[test]
fn test_batch_of_identical_configurations() {
    let configuration = helium_cluster();
    let n_configs = 4;
    let views = vec![configuration.view(); n_configs];
    let ensemble = ensemble_from_configurations(&views).unwrap();

    let mut energies = Array1::from_elem(n_configs, f64::NAN);
    let mut forces = Array3::from_elem(ensemble.raw_dim(), f64::NAN);
    compute_ensemble(ensemble.view(), energies.view_mut(), forces.view_mut());

    let single = evaluate(configuration.view());
    for c in 0..n_configs {
        assert_eq!(energies[c], single.energy);
        assert_eq!(forces.index_axis(Axis(2), c), single.forces);
    }
}

#[test]
fn test_batch_preserves_configuration_order() {
    let b = mixed_range_configuration().slice(s![.., ..5]).to_owned();
    let c = helium_cluster().slice(s![.., ..5]).to_owned();
    let ensemble = ensemble_from_configurations(&[b.view(), c.view()]).unwrap();

    let result = evaluate_ensemble(ensemble.view());
    assert_eq!(result.energies[0], evaluate(b.view()).energy);
    assert_eq!(result.energies[1], evaluate(c.view()).energy);
    assert_ne!(result.energies[0], result.energies[1]);
}

#[test]
#[should_panic(expected = "force buffer shape")]
fn test_force_buffer_shape_is_enforced() {
    let configuration = helium_cluster();
    let ensemble = ensemble_from_configurations(&[configuration.view()]).unwrap();
    let mut energies = Array1::<f64>::zeros(1);
    let mut forces = Array3::<f64>::zeros((3, configuration.ncols() + 1, 1));
    compute_ensemble(ensemble.view(), energies.view_mut(), forces.view_mut());
}

#[test]
fn test_calculator_matches_core_in_atomic_units() {
    let configuration = helium_cluster();
    let views = vec![configuration.view(); 2];
    let native = ensemble_from_configurations(&views).unwrap();
    let frames = layout::native_to_frames(native.view()).unwrap();

    let calculator = HeliumCalculator::new().with_options(CalculatorOptions {
        units: UnitSystem::ATOMIC,
        ..Default::default()
    });
    let result = calculator.compute(frames.view()).unwrap();

    let single = evaluate(configuration.view());
    assert_eq!(result.forces.dim(), (2, configuration.ncols(), 3));
    for c in 0..2 {
        assert_eq!(result.energies[c], single.energy);
        assert_eq!(result.forces.index_axis(Axis(0), c), single.forces.t());
    }
}
