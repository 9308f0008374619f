//! # Duct Size Calculation
//!
//! The single call boundary of the engine: cable rows, fill option and
//! catalog in, recommendation plus size overview out.
//!
//! ## Pipeline
//!
//! ```text
//! cable rows -> total area -> fill factor -> required ID (-> required OD)
//!            -> catalog lookup -> recommendation + actual fill
//!            -> fill table for every size
//! ```
//!
//! ## Example
//!
//! ```rust
//! use duct_core::cables::CableEntry;
//! use duct_core::calculations::duct_size::{calculate, DuctSizeInput};
//! use duct_core::catalog::CatalogMode;
//!
//! let mut input = DuctSizeInput::new(vec![CableEntry::new(10.0, 3)]);
//! input.catalog_mode = CatalogMode::Id;
//!
//! let report = calculate(&input).unwrap();
//! assert_eq!(report.fill_factor, 0.40);
//! assert_eq!(report.sizing.recommended_size.unwrap().nominal_size, 60.0);
//! assert_eq!(report.fill_table.len(), 8);
//! ```

use serde::{Deserialize, Serialize};

use crate::cables::{CableEntry, CableSet};
use crate::catalog::{CatalogMode, DuctCatalog};
use crate::errors::{CalcError, CalcResult};
use crate::fill_policy::{resolve_fill_factor_with_source, FillFactorSource};
use crate::report::{build_fill_table, FillTableRow};
use crate::sizing::{compute_sizing_result, SizingResult};

/// Input parameters for a duct size calculation.
///
/// Everything except `cables` has a default, so a minimal input only lists
/// cables and gets the standard catalog read as OD with a 10 mm wall.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Feeder run A",
///   "cables": [
///     { "outer_diameter_mm": 20.0, "quantity": 2 },
///     { "outer_diameter_mm": 12.5, "quantity": 1 }
///   ],
///   "fill_override_percent": null,
///   "catalog_mode": { "kind": "od_uniform_wall", "wall_thickness_mm": 10.0 },
///   "catalog": [ { "nominal_size": 60.0 }, { "nominal_size": 110.0 } ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuctSizeInput {
    /// User label for this run
    #[serde(default)]
    pub label: String,

    /// Cable rows, invalid rows are ignored
    pub cables: Vec<CableEntry>,

    /// Fill factor in percent (40.0 for 40%), `None` for the regulatory table
    #[serde(default)]
    pub fill_override_percent: Option<f64>,

    /// How catalog sizes are read
    #[serde(default)]
    pub catalog_mode: CatalogMode,

    /// Available duct sizes
    #[serde(default)]
    pub catalog: DuctCatalog,
}

impl DuctSizeInput {
    /// Input with default options
    pub fn new(cables: Vec<CableEntry>) -> Self {
        DuctSizeInput {
            label: String::new(),
            cables,
            fill_override_percent: None,
            catalog_mode: CatalogMode::default(),
            catalog: DuctCatalog::standard(),
        }
    }

    /// Validate options. Cable rows are filtered, never rejected, and a
    /// zero or negative override is left for the engine to report.
    pub fn validate(&self) -> CalcResult<()> {
        validate_override(self.fill_override_percent)?;
        self.catalog_mode.validate()
    }
}

fn validate_override(fill_override_percent: Option<f64>) -> CalcResult<()> {
    match fill_override_percent {
        Some(p) if !p.is_finite() => Err(CalcError::invalid_input(
            "fill_override_percent",
            p.to_string(),
            "Fill factor override must be a finite number",
        )),
        _ => Ok(()),
    }
}

/// Results from a duct size calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuctSizeReport {
    /// Label copied from the input
    pub label: String,

    /// Number of cables over valid rows
    pub total_quantity: i64,

    /// Sum of cable cross-sections (mm²)
    pub total_cable_area_mm2: f64,

    /// Fill fraction used (0.40 = 40%)
    pub fill_factor: f64,

    /// Regulatory table or caller override
    pub fill_factor_source: FillFactorSource,

    /// Catalog interpretation used
    pub catalog_mode: CatalogMode,

    /// Cable rows ignored as invalid
    pub skipped_rows: usize,

    /// Required diameters and recommendation
    pub sizing: SizingResult,

    /// Fill of every catalog size, ascending
    pub fill_table: Vec<FillTableRow>,
}

impl DuctSizeReport {
    pub fn has_recommendation(&self) -> bool {
        self.sizing.has_recommendation()
    }

    /// Fill factor as a percentage
    pub fn fill_factor_percent(&self) -> f64 {
        self.fill_factor * 100.0
    }

    /// One-line result for display
    pub fn summary(&self) -> String {
        match self.sizing.recommended_size {
            Some(size) => {
                let mut line = format!(
                    "Recommended duct: {} mm ({}).",
                    size.nominal_size,
                    self.catalog_mode.label()
                );
                if let Some(fill) = self.sizing.actual_fill_percent {
                    line.push_str(&format!(" Estimated actual fill: {:.1}%.", fill));
                }
                line
            }
            None => "No suitable size found in the provided list.".to_string(),
        }
    }
}

/// Calculate the duct size for `input`.
///
/// # Returns
///
/// * `Ok(DuctSizeReport)` - including the "no suitable size" outcome
/// * `Err(CalcError::EmptyInput)` - no valid cables, show a prompt
/// * `Err(CalcError::InvalidFillFactor)` - override resolved to ≤ 0
/// * `Err(CalcError::InvalidInput)` - malformed options
pub fn calculate(input: &DuctSizeInput) -> CalcResult<DuctSizeReport> {
    input.validate()?;

    let mut report = calculate_duct_size(
        &input.cables,
        input.fill_override_percent,
        input.catalog_mode,
        &input.catalog,
    )?;
    report.label = input.label.clone();
    Ok(report)
}

/// Calculate the duct size from loose arguments.
///
/// `fill_override_percent` is in percent; `None` selects the regulatory table.
pub fn calculate_duct_size(
    cables: &[CableEntry],
    fill_override_percent: Option<f64>,
    catalog_mode: CatalogMode,
    catalog: &DuctCatalog,
) -> CalcResult<DuctSizeReport> {
    validate_override(fill_override_percent)?;
    catalog_mode.validate()?;

    let set = CableSet::new(cables);
    let skipped_rows = set.skipped_count();
    if skipped_rows > 0 {
        tracing::warn!(skipped_rows, "ignoring cable rows without positive OD, quantity and finite area");
    }

    let total_quantity = set.total_quantity();
    if total_quantity <= 0 {
        return Err(CalcError::EmptyInput);
    }

    let override_fraction = fill_override_percent.map(|p| p / 100.0);
    let (fill_factor, fill_factor_source) =
        resolve_fill_factor_with_source(total_quantity, override_fraction).ok_or(CalcError::EmptyInput)?;

    let sizing = compute_sizing_result(&set, fill_factor, catalog, &catalog_mode)?;
    let total_cable_area_mm2 = set.total_cable_area_mm2();
    let fill_table = build_fill_table(catalog, total_cable_area_mm2, &catalog_mode);

    tracing::info!(
        total_quantity,
        fill_factor,
        mode = catalog_mode.label(),
        recommended = ?sizing.recommended_size.map(|s| s.nominal_size),
        "duct size calculated"
    );

    Ok(DuctSizeReport {
        label: String::new(),
        total_quantity,
        total_cable_area_mm2,
        fill_factor,
        fill_factor_source,
        catalog_mode,
        skipped_rows,
        sizing,
        fill_table,
    })
}
