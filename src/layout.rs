//! Adapter between the frame layout used by callers and the native ensemble layout.
//!
//! Most structure codes store a batch of configurations as `(n_configs, n_atoms, 3)`. The
//! core expects `(3, n_atoms, n_configs)`; the two are related by reversing the axes.

use crate::error::AzizError;
use ndarray::{Array3, ArrayView3};

/// Converts a `(n_configs, n_atoms, 3)` array into the native `(3, n_atoms, n_configs)`
/// layout.
///
/// # Errors
///
/// Returns [`AzizError::ShapeMismatch`] if the last axis does not have length 3.
pub fn frames_to_native(frames: ArrayView3<'_, f64>) -> Result<Array3<f64>, AzizError> {
    let (n_configs, n_atoms, n_dims) = frames.dim();
    if n_dims != 3 {
        return Err(AzizError::ShapeMismatch {
            what: "frames (n_configs, n_atoms, 3)",
            expected: vec![n_configs, n_atoms, 3],
            found: frames.shape().to_vec(),
        });
    }
    Ok(reverse_axes(frames))
}

/// Converts a native `(3, n_atoms, n_configs)` array back into `(n_configs, n_atoms, 3)`.
///
/// # Errors
///
/// Returns [`AzizError::ShapeMismatch`] if the first axis does not have length 3.
pub fn native_to_frames(native: ArrayView3<'_, f64>) -> Result<Array3<f64>, AzizError> {
    let (n_dims, n_atoms, n_configs) = native.dim();
    if n_dims != 3 {
        return Err(AzizError::ShapeMismatch {
            what: "ensemble (3, n_atoms, n_configs)",
            expected: vec![3, n_atoms, n_configs],
            found: native.shape().to_vec(),
        });
    }
    Ok(reverse_axes(native))
}

fn reverse_axes(array: ArrayView3<'_, f64>) -> Array3<f64> {
    array
        .permuted_axes([2, 1, 0])
        .as_standard_layout()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axes_are_reversed() {
        let frames = Array3::from_shape_fn((2, 4, 3), |(c, a, k)| (100 * c + 10 * a + k) as f64);
        let native = frames_to_native(frames.view()).unwrap();

        assert_eq!(native.dim(), (3, 4, 2));
        assert_eq!(native[[2, 3, 1]], 132.0);
        assert!(native.is_standard_layout());

        let back = native_to_frames(native.view()).unwrap();
        assert_eq!(back, frames);
    }

    #[test]
    fn test_rejects_wrong_spatial_axis() {
        let frames = Array3::<f64>::zeros((3, 2, 4));
        let err = frames_to_native(frames.view()).unwrap_err();
        assert_eq!(
            err,
            AzizError::ShapeMismatch {
                what: "frames (n_configs, n_atoms, 3)",
                expected: vec![3, 2, 3],
                found: vec![3, 2, 4],
            }
        );

        assert!(native_to_frames(Array3::<f64>::zeros((2, 5, 3)).view()).is_err());
    }
}
