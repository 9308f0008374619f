//! # Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Report` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Report, CalcError>` - Pure calculation function
//!
//! Calculations hold no state between calls, so independent requests can run
//! in parallel without coordination.
//!
//! ## Available Calculations
//!
//! - [`duct_size`] - Cable duct sizing against a catalog

pub mod duct_size;

// Re-export commonly used types
pub use duct_size::{calculate, calculate_duct_size, DuctSizeInput, DuctSizeReport};
