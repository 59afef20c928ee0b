//! Total pair energy of a configuration.
//!
//! Every unordered pair of atoms contributes the HFDHE2 energy of its separation exactly
//! once. The sum runs over all `n (n - 1) / 2` pairs without any cutoff.

use crate::math::dual::Scalar;
use crate::potential::pair_energy;
use crate::types::Configuration;

/// Panics unless `configuration` has the `(3, n_atoms)` layout.
#[inline]
pub(crate) fn check_layout(configuration: &Configuration<'_>) {
    assert_eq!(
        configuration.nrows(),
        3,
        "configuration must have shape (3, n_atoms), found {:?}",
        configuration.shape()
    );
}

/// Cartesian position of `atom` in `configuration`.
#[inline]
pub(crate) fn position(configuration: &Configuration<'_>, atom: usize) -> [f64; 3] {
    std::array::from_fn(|k| configuration[[k, atom]])
}

/// Pair energy of two atoms at positions `a` and `b`.
///
/// Generic over [`Scalar`] so that derivatives with respect to all six coordinates can be
/// obtained by passing dual numbers.
#[inline]
pub fn pair_energy_between<S: Scalar>(a: [S; 3], b: [S; 3]) -> S {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    pair_energy((dx * dx + dy * dy + dz * dz).sqrt())
}

/// Total potential energy of a configuration in Hartree.
///
/// Configurations with fewer than two atoms have zero energy.
///
/// # Panics
///
/// Panics if the first axis of `configuration` does not have length 3.
///
/// # Examples
///
/// ```
/// use aziz::{configuration_from_positions, total_energy};
///
/// let dimer = configuration_from_positions(&[[0.0, 0.0, 0.0], [5.6, 0.0, 0.0]]);
/// assert!(total_energy(dimer.view()) < 0.0);
/// ```
pub fn total_energy(configuration: Configuration<'_>) -> f64 {
    check_layout(&configuration);

    let n_atoms = configuration.ncols();
    let mut energy = 0.0;
    for i in 0..n_atoms {
        let pos_i = position(&configuration, i);
        for j in (i + 1)..n_atoms {
            energy += pair_energy_between(pos_i, position(&configuration, j));
        }
    }
    energy
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::configuration_from_positions;
    use approx::assert_relative_eq;
    use ndarray::Array2;

    #[test]
    fn test_dimer_energy_is_pair_energy() {
        let dimer = configuration_from_positions(&[[0.0, 0.0, 0.0], [0.0, 4.0, 0.0]]);
        assert_relative_eq!(total_energy(dimer.view()), pair_energy(4.0), epsilon = 1e-18);
    }

    #[test]
    fn test_each_pair_counted_once() {
        let r = 5.0;
        let h = r * 3.0_f64.sqrt() / 2.0;
        let triangle =
            configuration_from_positions(&[[0.0, 0.0, 0.0], [r, 0.0, 0.0], [r / 2.0, h, 0.0]]);
        assert_relative_eq!(
            total_energy(triangle.view()),
            3.0 * pair_energy(r),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_fewer_than_two_atoms_has_zero_energy() {
        assert_eq!(total_energy(Array2::<f64>::zeros((3, 0)).view()), 0.0);
        assert_eq!(
            total_energy(configuration_from_positions(&[[1.0, 2.0, 3.0]]).view()),
            0.0
        );
    }

    #[test]
    #[should_panic(expected = "configuration must have shape (3, n_atoms)")]
    fn test_rejects_transposed_layout() {
        total_energy(Array2::<f64>::zeros((2, 3)).view());
    }
}
