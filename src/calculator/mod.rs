//! This module contains the high-level calculator for helium ensembles.
//!
//! It includes the `HeliumCalculator`, which accepts frames in the caller's units and layout,
//! and `CalculatorOptions` for configuring the unit system and the input validation.

mod implementation;
mod options;

pub use implementation::HeliumCalculator;
pub use options::CalculatorOptions;
