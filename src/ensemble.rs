//! Batch evaluation over an ensemble of configurations.
//!
//! Configurations are processed one after another. Iteration `c` reads only the
//! configuration slice `ensemble[.., .., c]` and writes only `energies[c]` and
//! `forces[.., .., c]`.

use crate::gradient::compute_forces;
use crate::types::{Ensemble, EnsembleResult};
use ndarray::{Array1, Array3, ArrayViewMut1, ArrayViewMut3, Axis};

/// Computes the energy and forces of every configuration of `ensemble`.
///
/// `ensemble` has shape `(3, n_atoms, n_configs)`. `energies` must have length `n_configs`
/// and `forces` the same shape as `ensemble`; both are overwritten.
///
/// # Panics
///
/// Panics if any of the three shapes disagree.
pub fn compute_ensemble(
    ensemble: Ensemble<'_>,
    mut energies: ArrayViewMut1<'_, f64>,
    mut forces: ArrayViewMut3<'_, f64>,
) {
    let (n_dims, n_atoms, n_configs) = ensemble.dim();
    assert_eq!(
        n_dims,
        3,
        "ensemble must have shape (3, n_atoms, n_configs), found {:?}",
        ensemble.shape()
    );
    assert_eq!(
        energies.len(),
        n_configs,
        "energy buffer length {} does not match the number of configurations {}",
        energies.len(),
        n_configs
    );
    assert_eq!(
        forces.dim(),
        (3, n_atoms, n_configs),
        "force buffer shape {:?} does not match ensemble shape {:?}",
        forces.shape(),
        ensemble.shape()
    );

    log::debug!(
        "Evaluating {} configurations of {} atoms ({} pairs each)",
        n_configs,
        n_atoms,
        n_atoms * n_atoms.saturating_sub(1) / 2
    );

    for ((configuration, energy), force) in ensemble
        .axis_iter(Axis(2))
        .zip(energies.iter_mut())
        .zip(forces.axis_iter_mut(Axis(2)))
    {
        *energy = compute_forces(configuration, force);
    }
}

/// Allocating variant of [`compute_ensemble`].
pub fn evaluate_ensemble(ensemble: Ensemble<'_>) -> EnsembleResult {
    let mut energies = Array1::zeros(ensemble.len_of(Axis(2)));
    let mut forces = Array3::zeros(ensemble.raw_dim());
    compute_ensemble(ensemble, energies.view_mut(), forces.view_mut());
    EnsembleResult { energies, forces }
}
