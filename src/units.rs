//! Conversion between the internal atomic units and external unit systems.
//!
//! The core works in Bohr and Hartree. Callers usually hold coordinates in Ångström and
//! expect energies in Rydberg or Kelvin; this module converts coordinates on the way in and
//! energies and forces on the way out.

use crate::math::constants::{BOHR_TO_ANGSTROM, HARTREE_TO_RYDBERG, KELVIN_TO_HARTREE};
use ndarray::{ArrayBase, DataMut, Dimension};

/// Unit of length for coordinates exchanged with the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthUnit {
    /// Bohr radius, the atomic unit of length used internally.
    Bohr,
    /// Ångström, 10⁻¹⁰ m.
    #[default]
    Angstrom,
}

impl LengthUnit {
    /// Length of one Bohr radius expressed in this unit.
    pub fn per_bohr(self) -> f64 {
        match self {
            Self::Bohr => 1.0,
            Self::Angstrom => BOHR_TO_ANGSTROM,
        }
    }

    /// Short symbol used when labelling output, e.g. `Å`.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Bohr => "Bohr",
            Self::Angstrom => "Å",
        }
    }
}

/// Unit of energy for results returned to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnergyUnit {
    /// Hartree, the atomic unit of energy used internally.
    Hartree,
    /// Rydberg, half a Hartree.
    #[default]
    Rydberg,
    /// Energy expressed as a temperature, `E / k_B`.
    Kelvin,
}

impl EnergyUnit {
    /// One Hartree expressed in this unit.
    pub fn per_hartree(self) -> f64 {
        match self {
            Self::Hartree => 1.0,
            Self::Rydberg => HARTREE_TO_RYDBERG,
            Self::Kelvin => 1.0 / KELVIN_TO_HARTREE,
        }
    }

    /// Short symbol used when labelling output, e.g. `Ry`.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Hartree => "Ha",
            Self::Rydberg => "Ry",
            Self::Kelvin => "K",
        }
    }
}

/// A pair of external length and energy units.
///
/// The default, Ångström and Rydberg, is the convention of the SSCHA ensemble code this
/// potential is typically driven from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnitSystem {
    /// Unit of input coordinates; forces are reported per this unit.
    pub length: LengthUnit,
    /// Unit of reported energies.
    pub energy: EnergyUnit,
}

impl UnitSystem {
    /// Atomic units: Bohr and Hartree. Conversions are the identity.
    pub const ATOMIC: Self = Self {
        length: LengthUnit::Bohr,
        energy: EnergyUnit::Hartree,
    };

    /// Factor taking external coordinates to Bohr.
    pub fn coordinate_factor(&self) -> f64 {
        self.length.per_bohr().recip()
    }

    /// Factor taking Hartree to the external energy unit.
    pub fn energy_factor(&self) -> f64 {
        self.energy.per_hartree()
    }

    /// Factor taking Hartree/Bohr to external energy per external length.
    pub fn force_factor(&self) -> f64 {
        self.energy.per_hartree() / self.length.per_bohr()
    }

    /// Rescales external coordinates to Bohr in place.
    pub fn coordinates_to_internal<S, D>(&self, coordinates: &mut ArrayBase<S, D>)
    where
        S: DataMut<Elem = f64>,
        D: Dimension,
    {
        let factor = self.coordinate_factor();
        coordinates.mapv_inplace(|x| x * factor);
    }

    /// Rescales Hartree energies to the external unit in place.
    pub fn energies_to_external<S, D>(&self, energies: &mut ArrayBase<S, D>)
    where
        S: DataMut<Elem = f64>,
        D: Dimension,
    {
        let factor = self.energy_factor();
        energies.mapv_inplace(|e| e * factor);
    }

    /// Rescales Hartree/Bohr forces to the external units in place.
    pub fn forces_to_external<S, D>(&self, forces: &mut ArrayBase<S, D>)
    where
        S: DataMut<Elem = f64>,
        D: Dimension,
    {
        let factor = self.force_factor();
        forces.mapv_inplace(|f| f * factor);
    }
}
