//! This module defines the array types exchanged with the aziz core.
//!
//! Coordinates use a component-major layout: the first axis holds the three Cartesian
//! components, the second axis the atom index and, for ensembles, the third axis the
//! configuration index. Energies are in Hartree, distances in Bohr, forces in Hartree/Bohr.

use crate::error::AzizError;
use ndarray::{Array1, Array2, Array3, ArrayView2, ArrayView3, Axis};

/// A read-only view of one configuration, shape `(3, n_atoms)`.
pub type Configuration<'a> = ArrayView2<'a, f64>;

/// A read-only view of a batch of configurations, shape `(3, n_atoms, n_configs)`.
pub type Ensemble<'a> = ArrayView3<'a, f64>;

/// Energy and forces of a single configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Total pair energy in Hartree.
    pub energy: f64,
    /// Force on every atom, shape `(3, n_atoms)`, in Hartree/Bohr.
    pub forces: Array2<f64>,
}

/// Energies and forces of every configuration of an ensemble.
#[derive(Debug, Clone, PartialEq)]
pub struct EnsembleResult {
    /// One energy per configuration, shape `(n_configs,)`.
    pub energies: Array1<f64>,
    /// Forces with the layout of the ensemble they were computed for.
    pub forces: Array3<f64>,
}

/// Builds a `(3, n_atoms)` configuration from a list of atomic positions.
pub fn configuration_from_positions(positions: &[[f64; 3]]) -> Array2<f64> {
    Array2::from_shape_fn((3, positions.len()), |(k, atom)| positions[atom][k])
}

/// Stacks configurations of equal atom count into a `(3, n_atoms, n_configs)` ensemble.
///
/// # Errors
///
/// Returns [`AzizError::NoConfigurations`] for an empty slice, and
/// [`AzizError::ShapeMismatch`] if a configuration does not have three rows or its atom
/// count differs from the first configuration.
pub fn ensemble_from_configurations(
    configurations: &[Configuration<'_>],
) -> Result<Array3<f64>, AzizError> {
    let first = configurations.first().ok_or(AzizError::NoConfigurations)?;
    let expected = (3, first.ncols());

    for configuration in configurations {
        if configuration.dim() != expected {
            return Err(AzizError::ShapeMismatch {
                what: "configuration",
                expected: vec![expected.0, expected.1],
                found: configuration.shape().to_vec(),
            });
        }
    }

    let mut ensemble = Array3::zeros((3, expected.1, configurations.len()));
    for (mut slot, configuration) in ensemble.axis_iter_mut(Axis(2)).zip(configurations) {
        slot.assign(configuration);
    }
    Ok(ensemble)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_layout_is_component_major() {
        let configuration = configuration_from_positions(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert_eq!(configuration.dim(), (3, 2));
        assert_eq!(configuration[[0, 1]], 4.0);
        assert_eq!(configuration[[2, 0]], 3.0);
    }

    #[test]
    fn test_ensemble_stacks_along_last_axis() {
        let a = configuration_from_positions(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]]);
        let b = configuration_from_positions(&[[0.0, 0.0, 0.0], [2.0, 0.0, 0.0]]);
        let ensemble = ensemble_from_configurations(&[a.view(), b.view()]).unwrap();

        assert_eq!(ensemble.dim(), (3, 2, 2));
        assert_eq!(ensemble[[0, 1, 0]], 1.0);
        assert_eq!(ensemble[[0, 1, 1]], 2.0);
    }

    #[test]
    fn test_ensemble_rejects_inconsistent_atom_counts() {
        let a = configuration_from_positions(&[[0.0; 3], [1.0, 0.0, 0.0]]);
        let b = configuration_from_positions(&[[0.0; 3]]);
        let err = ensemble_from_configurations(&[a.view(), b.view()]).unwrap_err();
        assert_eq!(
            err,
            AzizError::ShapeMismatch {
                what: "configuration",
                expected: vec![3, 2],
                found: vec![3, 1],
            }
        );
    }

    #[test]
    fn test_ensemble_rejects_empty_input() {
        assert_eq!(
            ensemble_from_configurations(&[]).unwrap_err(),
            AzizError::NoConfigurations
        );
    }
}
