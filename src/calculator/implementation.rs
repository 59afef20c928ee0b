//! This module implements the `HeliumCalculator`, the entry point for callers that hold
//! helium configurations in their own units and layout.
//!
//! A calculation converts the frames to the native layout and to Bohr, optionally validates
//! the geometry, evaluates every configuration with the ensemble driver, and converts the
//! energies and forces back to the caller's units and layout.

use super::options::CalculatorOptions;
use crate::{
    energy::position,
    ensemble::evaluate_ensemble,
    error::AzizError,
    layout::{frames_to_native, native_to_frames},
    types::{Ensemble, EnsembleResult},
};
use ndarray::{ArrayView3, Axis};

/// Energies and forces for batches of helium configurations.
///
/// The calculator holds only its options and is cheap to construct and copy.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeliumCalculator {
    /// Unit system and validation settings.
    options: CalculatorOptions,
}

impl HeliumCalculator {
    /// Creates a new `HeliumCalculator` with default options.
    ///
    /// # Examples
    ///
    /// ```
    /// use aziz::HeliumCalculator;
    ///
    /// let calculator = HeliumCalculator::new();
    /// ```
    pub fn new() -> Self {
        Self {
            options: CalculatorOptions::default(),
        }
    }

    /// Configures the calculator with custom options.
    ///
    /// # Examples
    ///
    /// ```
    /// use aziz::{CalculatorOptions, HeliumCalculator, UnitSystem};
    ///
    /// let options = CalculatorOptions {
    ///     units: UnitSystem::ATOMIC,
    ///     ..Default::default()
    /// };
    ///
    /// let calculator = HeliumCalculator::new().with_options(options);
    /// ```
    pub fn with_options(mut self, options: CalculatorOptions) -> Self {
        self.options = options;
        self
    }

    /// The options this calculator was configured with.
    pub fn options(&self) -> &CalculatorOptions {
        &self.options
    }

    /// Computes energies and forces for a batch of frames.
    ///
    /// `frames` has shape `(n_configs, n_atoms, 3)` and is expressed in the configured length
    /// unit. The returned energies have shape `(n_configs,)` and the returned forces the same
    /// `(n_configs, n_atoms, 3)` layout as the input, both in the configured units.
    ///
    /// # Errors
    ///
    /// Returns [`AzizError::ShapeMismatch`] if the last axis is not 3,
    /// [`AzizError::NoConfigurations`] for an empty batch and, when geometry checking is
    /// enabled, [`AzizError::NonFiniteCoordinate`] or [`AzizError::CoincidentAtoms`].
    ///
    /// # Examples
    ///
    /// ```
    /// use aziz::HeliumCalculator;
    /// use ndarray::array;
    ///
    /// // One He dimer, 3 Å apart, in the default Ångström / Rydberg units.
    /// let frames = array![[[0.0, 0.0, 0.0], [3.0, 0.0, 0.0]]];
    /// let result = HeliumCalculator::new().compute(frames.view()).unwrap();
    ///
    /// assert_eq!(result.energies.len(), 1);
    /// assert!(result.energies[0] < 0.0);
    /// assert_eq!(result.forces.dim(), (1, 2, 3));
    /// ```
    pub fn compute(&self, frames: ArrayView3<'_, f64>) -> Result<EnsembleResult, AzizError> {
        let mut ensemble = frames_to_native(frames)?;
        let (_, n_atoms, n_configs) = ensemble.dim();
        if n_configs == 0 {
            return Err(AzizError::NoConfigurations);
        }

        let units = self.options.units;
        units.coordinates_to_internal(&mut ensemble);

        if self.options.check_geometry {
            self.check_geometry(ensemble.view())?;
        }

        log::debug!(
            "Computing {} frames of {} atoms ({:?} units)",
            n_configs,
            n_atoms,
            units
        );

        let EnsembleResult {
            mut energies,
            mut forces,
        } = evaluate_ensemble(ensemble.view());

        units.energies_to_external(&mut energies);
        units.forces_to_external(&mut forces);

        Ok(EnsembleResult {
            energies,
            forces: native_to_frames(forces.view())?,
        })
    }

    /// Rejects non-finite coordinates and pairs of atoms closer than the coincidence
    /// threshold.
    fn check_geometry(&self, ensemble: Ensemble<'_>) -> Result<(), AzizError> {
        for (config, configuration) in ensemble.axis_iter(Axis(2)).enumerate() {
            if let Some((_, atom)) = configuration
                .indexed_iter()
                .find(|(_, x)| !x.is_finite())
                .map(|(index, _)| index)
            {
                return Err(AzizError::NonFiniteCoordinate { config, atom });
            }

            let n_atoms = configuration.ncols();
            for first in 0..n_atoms {
                let pos_i = position(&configuration, first);
                for second in (first + 1)..n_atoms {
                    let pos_j = position(&configuration, second);
                    let distance = pos_i
                        .iter()
                        .zip(pos_j.iter())
                        .map(|(pi, pj)| (pi - pj).powi(2))
                        .sum::<f64>()
                        .sqrt();

                    if distance < self.options.coincidence_threshold {
                        return Err(AzizError::CoincidentAtoms {
                            config,
                            first,
                            second,
                            distance,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}
