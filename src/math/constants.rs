//! This module defines fundamental physical constants used throughout the aziz library.
//!
//! These constants cover the conversions between atomic units (Bohr, Hartree), the units in
//! which the HFDHE2 parameters were published (Ångström, Kelvin), and the Rydberg energy unit
//! used by common ensemble codes.

/// Conversion factor from Bohr radii to angstroms.
///
/// This constant represents the standard conversion factor between atomic units (Bohr) and
/// angstroms for length measurements. It is used by the unit conversion layer to bring
/// user-facing coordinates into the internal Bohr units and back.
///
/// The value is approximately 0.529 Å per Bohr radius.
pub const BOHR_TO_ANGSTROM: f64 = 0.529_177_210_903;

/// Conversion factor from Kelvin (energy expressed as a temperature) to Hartree.
///
/// Well depths of rare-gas potentials are conventionally published in Kelvin; this is the
/// Boltzmann constant in Hartree per Kelvin.
pub const KELVIN_TO_HARTREE: f64 = 3.166_811_563e-6;

/// Number of Rydberg in one Hartree.
pub const HARTREE_TO_RYDBERG: f64 = 2.0;

/// Separation in Bohr below which two atoms are treated as coincident.
///
/// The dispersion terms of the pair potential are singular at zero separation; boundary
/// validation rejects configurations with pairs closer than this threshold.
pub const DISTANCE_THRESHOLD_BOHR: f64 = 1e-12;
