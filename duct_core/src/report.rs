//! # Fill Report
//!
//! Overview of how full every catalog size would be with the current cables,
//! listed in ascending nominal order. Sizes without a usable internal
//! diameter stay in the table with no fill value.

use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogMode, DuctCatalog};
use crate::sizing::fill_percent;

/// One line of the size overview.
///
/// ## JSON Example
///
/// ```json
/// {
///   "nominal_size": 110.0,
///   "used_as": "Outer Diameter (OD)",
///   "internal_diameter_mm": 90.0,
///   "fill_percent": 3.7
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillTableRow {
    /// Listed size (mm)
    pub nominal_size: f64,

    /// How the listed size was interpreted
    pub used_as: String,

    /// Resolved internal diameter (mm)
    pub internal_diameter_mm: f64,

    /// Fill with the current cables (%), `None` when the ID is not positive
    pub fill_percent: Option<f64>,
}

/// Fill table for every catalog entry.
///
/// Pure function of its inputs: calling it twice gives the same rows.
pub fn build_fill_table(catalog: &DuctCatalog, total_cable_area_mm2: f64, mode: &CatalogMode) -> Vec<FillTableRow> {
    let used_as = mode.label();
    catalog
        .resolved(mode)
        .map(|size| FillTableRow {
            nominal_size: size.nominal_size,
            used_as: used_as.to_string(),
            internal_diameter_mm: size.internal_diameter_mm,
            fill_percent: fill_percent(total_cable_area_mm2, size.internal_diameter_mm),
        })
        .collect()
}
