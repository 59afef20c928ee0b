//! This module defines configuration options for the helium calculator.
//!
//! It provides the `CalculatorOptions` struct, which selects the external unit system and
//! controls how strictly incoming frames are validated before they reach the numerical core.

use crate::math::constants::DISTANCE_THRESHOLD_BOHR;
use crate::units::UnitSystem;

/// Configuration parameters for the helium calculator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculatorOptions {
    /// Units of the coordinates passed in and of the energies and forces handed back.
    pub units: UnitSystem,
    /// Whether to reject frames with non-finite coordinates or coincident atoms.
    ///
    /// Without validation such frames still evaluate, producing non-finite energies and
    /// forces.
    pub check_geometry: bool,
    /// Separation in Bohr below which two atoms count as coincident.
    pub coincidence_threshold: f64,
}

impl Default for CalculatorOptions {
    fn default() -> Self {
        Self {
            units: UnitSystem::default(),
            check_geometry: true,
            coincidence_threshold: DISTANCE_THRESHOLD_BOHR,
        }
    }
}
