//! The HFDHE2 pair potential for a single interatomic distance.
//!
//! `V(r) = ε · V*(r / rm)` with
//!
//! ```text
//! V*(x) = A·exp(-α·x) - (C6/x^6 + C8/x^8 + C10/x^10) · F(x)
//! F(x)  = 1                      if x >= D
//!         exp(-(D/x - 1)^2)      otherwise
//! ```
//!
//! All functions are generic over [`Scalar`] so that the same code serves plain evaluation
//! (`f64`) and exact differentiation (dual numbers). Distances are in Bohr, energies in
//! Hartree. A zero distance divides by zero and yields a non-finite result.

use crate::math::dual::Scalar;
use crate::params::{A, ALPHA, C6, C8, C10, D, EPSILON, RM};

/// Short-range damping of the dispersion terms at reduced distance `x`.
///
/// Equal to one for `x >= D`; below `D` it decays smoothly to zero as `x -> 0`. Both the
/// function and its first derivative are continuous at `x = D`.
#[inline]
pub fn damping<S: Scalar>(x: S) -> S {
    if x.value() >= D {
        S::constant(1.0)
    } else {
        let t = S::constant(D) / x - 1.0;
        (-(t * t)).exp()
    }
}

/// The reduced potential `V*(x) = V(x·rm) / ε`.
#[inline]
pub fn reduced_potential<S: Scalar>(x: S) -> S {
    let repulsion = (x * -ALPHA).exp() * A;
    let dispersion = S::constant(C6) / x.powi(6)
        + S::constant(C8) / x.powi(8)
        + S::constant(C10) / x.powi(10);
    repulsion - dispersion * damping(x)
}

/// The pair energy in Hartree at distance `r` in Bohr.
#[inline]
pub fn pair_energy<S: Scalar>(r: S) -> S {
    reduced_potential(r / RM) * EPSILON
}
