//! # File I/O Module
//!
//! Loads calculation inputs from disk.
//!
//! ## File Formats
//!
//! - `.json` - [`DuctSizeInput`] as JSON
//! - `.toml` - the same structure as TOML
//!
//! Any other extension is parsed as JSON.
//!
//! ## Example
//!
//! ```rust,no_run
//! use duct_core::file_io::load_input;
//! use duct_core::calculations::calculate;
//! use std::path::Path;
//!
//! let input = load_input(Path::new("feeder.toml"))?;
//! let report = calculate(&input)?;
//! # Ok::<(), duct_core::errors::CalcError>(())
//! ```

use std::fs;
use std::path::Path;

use crate::calculations::DuctSizeInput;
use crate::errors::{CalcError, CalcResult};

/// Input file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Toml,
}

impl InputFormat {
    /// Pick the format from a file extension, JSON unless it is `.toml`
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => InputFormat::Toml,
            _ => InputFormat::Json,
        }
    }
}

/// Parse an input document.
pub fn parse_input(contents: &str, format: InputFormat) -> CalcResult<DuctSizeInput> {
    match format {
        InputFormat::Json => serde_json::from_str(contents).map_err(|e| CalcError::serialization(e.to_string())),
        InputFormat::Toml => toml::from_str(contents).map_err(|e| CalcError::serialization(e.to_string())),
    }
}

/// Load and validate an input file.
///
/// # Returns
///
/// * `Ok(DuctSizeInput)` - parsed input with options validated
/// * `Err(CalcError::FileError)` - the file could not be read
/// * `Err(CalcError::SerializationError)` - the contents did not parse
pub fn load_input(path: &Path) -> CalcResult<DuctSizeInput> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read input", path.display().to_string(), e.to_string()))?;

    let format = InputFormat::from_path(path);
    tracing::debug!(path = %path.display(), ?format, "loading input");

    let input = parse_input(&contents, format)?;
    input.validate()?;
    Ok(input)
}
