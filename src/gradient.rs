//! Exact forces by forward-mode automatic differentiation.
//!
//! Each pair term depends on only six coordinates, so it is evaluated once with a
//! six-component dual number seeded on those coordinates. The resulting partial
//! derivatives are scattered into the per-atom gradient. Because the pair term is the very
//! same generic function used by [`total_energy`](crate::total_energy), the gradient can
//! never drift from the energy expression.

use crate::energy::{check_layout, pair_energy_between, position};
use crate::math::dual::Dual;
use crate::types::{Configuration, Evaluation};
use ndarray::{Array2, ArrayViewMut2};

/// Computes the total energy and writes its gradient with respect to every coordinate into
/// `gradient`.
///
/// `gradient` is overwritten, not accumulated into. Returns the energy in Hartree; gradient
/// components are in Hartree/Bohr.
///
/// # Panics
///
/// Panics if `configuration` is not `(3, n_atoms)` or `gradient` has a different shape.
pub fn energy_and_gradient(
    configuration: Configuration<'_>,
    mut gradient: ArrayViewMut2<'_, f64>,
) -> f64 {
    check_layout(&configuration);
    assert_eq!(
        gradient.dim(),
        configuration.dim(),
        "gradient buffer shape {:?} does not match configuration shape {:?}",
        gradient.shape(),
        configuration.shape()
    );

    gradient.fill(0.0);

    let n_atoms = configuration.ncols();
    let mut energy = 0.0;
    for i in 0..n_atoms {
        let pos_i = Dual::<6>::variables(position(&configuration, i), 0);
        for j in (i + 1)..n_atoms {
            let pos_j = Dual::<6>::variables(position(&configuration, j), 3);
            let pair = pair_energy_between(pos_i, pos_j);

            energy += pair.re;
            for k in 0..3 {
                gradient[[k, i]] += pair.eps[k];
                gradient[[k, j]] += pair.eps[k + 3];
            }
        }
    }
    energy
}

/// Computes the total energy and writes the force on every atom into `forces`.
///
/// The forces are the negated energy gradient, in Hartree/Bohr. Returns the energy in
/// Hartree. Configurations with fewer than two atoms give zero energy and zero forces.
///
/// # Panics
///
/// Panics if `configuration` is not `(3, n_atoms)` or `forces` has a different shape.
///
/// # Examples
///
/// ```
/// use aziz::{compute_forces, configuration_from_positions};
/// use ndarray::Array2;
///
/// let dimer = configuration_from_positions(&[[0.0, 0.0, 0.0], [4.0, 0.0, 0.0]]);
/// let mut forces = Array2::<f64>::zeros(dimer.dim());
/// let energy = compute_forces(dimer.view(), forces.view_mut());
///
/// assert!(energy > 0.0);
/// assert!(forces[[0, 1]] > 0.0); // repulsive: pushes the second atom along +x
/// ```
pub fn compute_forces(configuration: Configuration<'_>, mut forces: ArrayViewMut2<'_, f64>) -> f64 {
    let energy = energy_and_gradient(configuration, forces.view_mut());
    forces.mapv_inplace(|g| -g);
    energy
}

/// Allocating variant of [`compute_forces`].
pub fn evaluate(configuration: Configuration<'_>) -> Evaluation {
    let mut forces = Array2::zeros(configuration.raw_dim());
    let energy = compute_forces(configuration, forces.view_mut());
    Evaluation { energy, forces }
}
