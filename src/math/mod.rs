//! This module provides mathematical utilities and physical constants for the aziz library.
//!
//! It contains the unit conversion constants and the forward-mode automatic differentiation
//! machinery through which the potential is differentiated.

/// Physical constants used throughout the library.
///
/// This module defines the conversion factors between atomic units and the external units
/// (Ångström, Kelvin, Rydberg) in which inputs are given and results are reported.
pub mod constants;

/// Dual numbers for forward-mode automatic differentiation.
///
/// The pair potential is written once, generically over [`dual::Scalar`], and differentiated
/// exactly by instantiating it with [`dual::Dual`] values.
pub mod dual;
