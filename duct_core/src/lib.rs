//! # duct_core - Cable Duct Sizing Engine
//!
//! `duct_core` sizes a cable duct (conduit) for a list of cables against a
//! catalog of available duct sizes, applying the NEC Chapter 9 fill limits.
//! All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Explicit outcomes**: "no suitable size" is a `None`, not an error
//!
//! ## Quick Start
//!
//! ```rust
//! use duct_core::cables::CableEntry;
//! use duct_core::calculations::{calculate, DuctSizeInput};
//!
//! let input = DuctSizeInput::new(vec![CableEntry::new(20.0, 2)]);
//! let report = calculate(&input).unwrap();
//!
//! println!("{}", report.summary());
//! let json = serde_json::to_string_pretty(&report).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`geometry`] - Circle area formulas
//! - [`fill_policy`] - Regulatory fill fractions and overrides
//! - [`cables`] - Cable rows and their aggregates
//! - [`sizing`] - Required diameters and the sizing result
//! - [`catalog`] - Duct catalog, catalog modes and size lookup
//! - [`report`] - Per-size fill overview
//! - [`calculations`] - The calculation entry point
//! - [`errors`] - Structured error types
//! - [`file_io`] - Loading inputs from JSON/TOML files

pub mod cables;
pub mod calculations;
pub mod catalog;
pub mod errors;
pub mod file_io;
pub mod fill_policy;
pub mod geometry;
pub mod report;
pub mod sizing;

// Re-export commonly used types at crate root for convenience
pub use cables::{CableEntry, CableSet};
pub use calculations::{calculate, calculate_duct_size, DuctSizeInput, DuctSizeReport};
pub use catalog::{CatalogEntry, CatalogMode, DuctCatalog, DuctSizeSpec};
pub use errors::{CalcError, CalcResult};
pub use file_io::load_input;
pub use report::FillTableRow;
pub use sizing::SizingResult;
