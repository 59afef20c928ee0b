//! Energies and forces of helium clusters under the HFDHE2 pair potential of Aziz et al.
//!
//! The numerical core sums the pair potential over every unique pair of atoms and obtains
//! exact forces by forward-mode automatic differentiation of the same pair expression. It
//! works in atomic units (Bohr, Hartree) on arrays with a component-major layout:
//! `(3, n_atoms)` for one configuration and `(3, n_atoms, n_configs)` for an ensemble.
//!
//! Around the core, [`HeliumCalculator`] accepts frames as `(n_configs, n_atoms, 3)` in
//! external units (Ångström and Rydberg by default) and returns results in the same units
//! and layout.

pub mod calculator;
pub mod energy;
pub mod ensemble;
pub mod error;
pub mod gradient;
pub mod layout;
pub mod math;
pub mod params;
pub mod potential;
pub mod types;
pub mod units;

pub use calculator::{CalculatorOptions, HeliumCalculator};
pub use energy::{pair_energy_between, total_energy};
pub use ensemble::{compute_ensemble, evaluate_ensemble};
pub use error::AzizError;
pub use gradient::{compute_forces, energy_and_gradient, evaluate};
pub use potential::{damping, pair_energy, reduced_potential};
pub use types::{
    Configuration, Ensemble, EnsembleResult, Evaluation, configuration_from_positions,
    ensemble_from_configurations,
};
pub use units::{EnergyUnit, LengthUnit, UnitSystem};
