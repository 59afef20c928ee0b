#![allow(dead_code)]

use aziz::{configuration_from_positions, total_energy};
use ndarray::Array2;

/// A compact nine-atom cluster; its shortest pair distance is about 5.42 Bohr.
///
/// The pair closest to the damping onset (about 6.96 Bohr) is atoms 1 and 7 at about
/// 6.73 Bohr. That gap is far larger than any finite-difference step used against it.
pub fn helium_cluster() -> Array2<f64> {
    configuration_from_positions(&[
        [0.00, 0.00, 0.00],
        [5.61, 0.12, -0.08],
        [2.71, 4.93, 0.21],
        [-2.84, 4.87, -0.33],
        [-5.58, -0.15, 0.11],
        [-2.66, -4.91, 0.27],
        [2.93, -4.82, -0.19],
        [1.42, 1.63, 4.97],
        [-1.87, 1.21, -5.12],
    ])
}

/// A sparse configuration with pairs on both sides of the damping onset.
pub fn mixed_range_configuration() -> Array2<f64> {
    configuration_from_positions(&[
        [0.0, 0.0, 0.0],
        [4.3, 0.0, 0.0],
        [0.0, 6.4, 0.0],
        [0.0, 0.0, 7.7],
        [9.1, 8.2, -3.3],
    ])
}

/// Forces by central finite differences of the total energy.
pub fn finite_difference_forces(configuration: &Array2<f64>, step: f64) -> Array2<f64> {
    let mut forces = Array2::zeros(configuration.raw_dim());
    for ((k, atom), force) in forces.indexed_iter_mut() {
        let mut plus = configuration.clone();
        plus[[k, atom]] += step;
        let mut minus = configuration.clone();
        minus[[k, atom]] -= step;

        *force = -(total_energy(plus.view()) - total_energy(minus.view())) / (2.0 * step);
    }
    forces
}

/// Rotation matrix for `angle` radians about `axis` (Rodrigues' formula).
pub fn rotation_matrix(axis: [f64; 3], angle: f64) -> Array2<f64> {
    let norm = axis.iter().map(|a| a * a).sum::<f64>().sqrt();
    let [x, y, z] = axis.map(|a| a / norm);
    let (s, c) = angle.sin_cos();
    let t = 1.0 - c;
    ndarray::array![
        [t * x * x + c, t * x * y - s * z, t * x * z + s * y],
        [t * x * y + s * z, t * y * y + c, t * y * z - s * x],
        [t * x * z - s * y, t * y * z + s * x, t * z * z + c],
    ]
}

/// Largest absolute element-wise difference between two arrays of equal shape.
pub fn max_abs_difference(a: &Array2<f64>, b: &Array2<f64>) -> f64 {
    assert_eq!(a.dim(), b.dim());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}
