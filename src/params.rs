//! This module provides the parameters of the HFDHE2 helium pair potential.
//!
//! The HFDHE2 model of Aziz et al. is a Hartree-Fock repulsion plus damped dispersion fit
//! for the He-He interaction. Its published parameters are dimensionless and refer to a
//! reduced distance `x = r / rm` and a reduced energy `V / ε`. The constants below reproduce
//! the published literals exactly, with `rm` in Bohr and `ε` in Hartree.

use crate::math::constants::KELVIN_TO_HARTREE;

/// Amplitude of the exponential repulsion.
pub const A: f64 = 0.5448506e6;
/// Decay rate of the exponential repulsion, in reduced distance units.
pub const ALPHA: f64 = 13.353384;
/// Reduced C6 dispersion coefficient.
pub const C6: f64 = 1.3732412;
/// Reduced C8 dispersion coefficient.
pub const C8: f64 = 0.4253785;
/// Reduced C10 dispersion coefficient.
pub const C10: f64 = 0.178100;
/// Reduced distance below which the dispersion terms are damped.
pub const D: f64 = 1.241314;
/// Position of the potential minimum, 2.9673 Å expressed in Bohr.
pub const RM: f64 = 2.9673 / 0.529177;
/// Well depth, 10.8 K expressed in Hartree.
pub const EPSILON: f64 = 10.8 * KELVIN_TO_HARTREE;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hfdhe2_literals() {
        assert_eq!(A, 544850.6);
        assert_eq!(ALPHA, 13.353384);
        assert_eq!(C6, 1.3732412);
        assert_eq!(C8, 0.4253785);
        assert_eq!(C10, 0.1781);
        assert_eq!(D, 1.241314);
        assert_eq!(RM, 2.9673 / 0.529177);
        assert_eq!(EPSILON, 10.8 * 3.166811563e-6);
    }

    #[test]
    fn test_derived_scales() {
        assert_relative_eq!(RM, 5.607386564419844, epsilon = 1e-12);
        assert_relative_eq!(EPSILON, 3.420156488e-5, epsilon = 1e-14);
    }
}
