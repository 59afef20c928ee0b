use thiserror::Error;

/// The primary error type for all fallible operations in the `aziz` library.
///
/// The numerical core itself never returns errors: output buffers of the wrong shape are a
/// programming error and abort with a panic, while degenerate geometries simply produce
/// non-finite numbers. This enum covers the validation performed at the library boundary,
/// where caller-provided frames are checked before they reach the core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AzizError {
    /// An input array does not have the dimensions the operation requires.
    ///
    /// `what` names the offending array, `expected` and `found` list its dimensions. A zero
    /// in `expected` stands for an axis whose length is free.
    #[error("Shape mismatch for {what}: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        /// A short description of the array that was rejected.
        what: &'static str,
        /// The required dimensions.
        expected: Vec<usize>,
        /// The dimensions actually provided.
        found: Vec<usize>,
    },

    /// A validation error indicating that an ensemble contained no configurations.
    #[error("Input validation failed: at least one configuration is required")]
    NoConfigurations,

    /// A coordinate of the input was NaN or infinite.
    #[error("Non-finite coordinate for atom {atom} in configuration {config}")]
    NonFiniteCoordinate {
        /// Index of the configuration within the ensemble.
        config: usize,
        /// Index of the atom within the configuration.
        atom: usize,
    },

    /// Two atoms are closer than the coincidence threshold.
    ///
    /// The pair potential diverges at zero separation, so such a configuration has no
    /// meaningful energy.
    #[error(
        "Atoms {first} and {second} in configuration {config} are coincident (distance {distance:.3e} Bohr)"
    )]
    CoincidentAtoms {
        /// Index of the configuration within the ensemble.
        config: usize,
        /// Index of the first atom of the pair.
        first: usize,
        /// Index of the second atom of the pair.
        second: usize,
        /// Their separation in Bohr.
        distance: f64,
    },
}
