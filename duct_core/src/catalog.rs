//! # Duct Catalog
//!
//! The list of duct sizes a supplier offers, and how each listed size maps to
//! a usable internal diameter.
//!
//! ## Catalog Modes
//!
//! | Mode                | Internal diameter          | Compared against required |
//! |---------------------|----------------------------|---------------------------|
//! | `id`                | nominal size               | ID vs nominal             |
//! | `od_uniform_wall`   | max(nominal - 2t, 0)       | OD (ID + 2t) vs nominal   |
//! | `od_explicit_table` | the entry's own ID column  | ID vs entry ID            |
//!
//! The comparison axis differs between modes. It is decided once, in
//! [`CatalogMode::comparison_axis`], so the explicit-table mode never goes
//! through the wall-thickness path.
//!
//! ## Example
//!
//! ```rust
//! use duct_core::catalog::{CatalogMode, DuctCatalog};
//!
//! let catalog = DuctCatalog::standard();
//! let mode = CatalogMode::Id;
//!
//! let pick = catalog.pick_recommended(27.4, &mode).unwrap();
//! assert_eq!(pick.nominal_size, 60.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Nominal sizes of the standard duct list (mm)
pub const STANDARD_SIZES_MM: [f64; 8] = [60.0, 110.0, 125.0, 160.0, 180.0, 200.0, 225.0, 250.0];

/// Wall thickness assumed for OD-denominated catalogs unless told otherwise (mm)
pub const DEFAULT_WALL_THICKNESS_MM: f64 = 10.0;

/// A catalog line as supplied by the caller.
///
/// ## JSON Example
///
/// ```json
/// { "nominal_size": 110.0, "internal_diameter_mm": 94.4 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Commercial size designation (mm)
    pub nominal_size: f64,

    /// Exact internal diameter, only read in `od_explicit_table` mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_diameter_mm: Option<f64>,
}

impl CatalogEntry {
    pub fn nominal(nominal_size: f64) -> Self {
        CatalogEntry {
            nominal_size,
            internal_diameter_mm: None,
        }
    }

    pub fn with_internal_diameter(nominal_size: f64, internal_diameter_mm: f64) -> Self {
        CatalogEntry {
            nominal_size,
            internal_diameter_mm: Some(internal_diameter_mm),
        }
    }
}

/// A catalog size with its internal diameter resolved for the active mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DuctSizeSpec {
    /// Commercial size designation (mm)
    pub nominal_size: f64,
    /// Internal diameter used for fill calculations (mm)
    pub internal_diameter_mm: f64,
}

impl DuctSizeSpec {
    /// Zero or negative internal diameter: the entry cannot hold anything
    pub fn is_usable(&self) -> bool {
        self.internal_diameter_mm > 0.0
    }
}

/// How the nominal sizes of a catalog are to be read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogMode {
    /// Nominal size is the internal diameter
    Id,
    /// Nominal size is the outer diameter, every duct has the same wall
    OdUniformWall { wall_thickness_mm: f64 },
    /// Nominal size is the outer diameter, each entry carries its exact ID
    OdExplicitTable,
}

impl Default for CatalogMode {
    fn default() -> Self {
        CatalogMode::OdUniformWall {
            wall_thickness_mm: DEFAULT_WALL_THICKNESS_MM,
        }
    }
}

/// Which diameter of a catalog size is tested against the requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonAxis {
    /// The listed nominal size (an ID in `id` mode, an OD in `od_uniform_wall`)
    NominalSize,
    /// The resolved internal diameter
    InternalDiameter,
}

impl ComparisonAxis {
    /// The diameter of `size` along this axis
    pub fn diameter_of(&self, size: &DuctSizeSpec) -> f64 {
        match self {
            ComparisonAxis::NominalSize => size.nominal_size,
            ComparisonAxis::InternalDiameter => size.internal_diameter_mm,
        }
    }
}

impl CatalogMode {
    /// Human label, the "Used as" column of the overview table
    pub fn label(&self) -> &'static str {
        match self {
            CatalogMode::Id => "Inner Diameter (ID)",
            CatalogMode::OdUniformWall { .. } => "Outer Diameter (OD)",
            CatalogMode::OdExplicitTable => "OD with ID table",
        }
    }

    pub fn comparison_axis(&self) -> ComparisonAxis {
        match self {
            CatalogMode::Id | CatalogMode::OdUniformWall { .. } => ComparisonAxis::NominalSize,
            CatalogMode::OdExplicitTable => ComparisonAxis::InternalDiameter,
        }
    }

    /// Internal diameter of a catalog entry under this mode (mm).
    ///
    /// Uniform-wall mode clamps at zero. Explicit-table mode ignores wall
    /// thickness and yields zero for a missing or non-finite ID.
    pub fn internal_diameter_for(&self, entry: &CatalogEntry) -> f64 {
        match self {
            CatalogMode::Id => entry.nominal_size,
            CatalogMode::OdUniformWall { wall_thickness_mm } => {
                (entry.nominal_size - 2.0 * wall_thickness_mm).max(0.0)
            }
            CatalogMode::OdExplicitTable => entry
                .internal_diameter_mm
                .filter(|d| d.is_finite())
                .unwrap_or(0.0),
        }
    }

    pub fn resolve(&self, entry: &CatalogEntry) -> DuctSizeSpec {
        DuctSizeSpec {
            nominal_size: entry.nominal_size,
            internal_diameter_mm: self.internal_diameter_for(entry),
        }
    }

    /// Required outer diameter, only defined for uniform-wall catalogs
    pub fn required_outer_diameter(&self, required_internal_diameter_mm: f64) -> Option<f64> {
        match self {
            CatalogMode::OdUniformWall { wall_thickness_mm } => Some(crate::sizing::required_outer_diameter(
                required_internal_diameter_mm,
                *wall_thickness_mm,
            )),
            CatalogMode::Id | CatalogMode::OdExplicitTable => None,
        }
    }

    /// The requirement expressed on this mode's comparison axis
    pub fn required_comparison_diameter(&self, required_internal_diameter_mm: f64) -> f64 {
        self.required_outer_diameter(required_internal_diameter_mm)
            .unwrap_or(required_internal_diameter_mm)
    }

    /// Wall thickness only matters to the uniform-wall mode
    pub fn validate(&self) -> CalcResult<()> {
        if let CatalogMode::OdUniformWall { wall_thickness_mm } = self {
            if !wall_thickness_mm.is_finite() || *wall_thickness_mm < 0.0 {
                return Err(CalcError::invalid_input(
                    "wall_thickness_mm",
                    wall_thickness_mm.to_string(),
                    "Wall thickness must be a finite value of zero or more",
                ));
            }
        }
        Ok(())
    }
}

/// Available duct sizes, unique and sorted by ascending nominal size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CatalogEntry>", into = "Vec<CatalogEntry>")]
pub struct DuctCatalog {
    entries: Vec<CatalogEntry>,
}

impl DuctCatalog {
    /// Build a catalog, sorting ascending.
    ///
    /// Fails on non-finite or duplicate nominal sizes.
    pub fn new(mut entries: Vec<CatalogEntry>) -> CalcResult<Self> {
        if let Some(bad) = entries.iter().find(|e| !e.nominal_size.is_finite()) {
            return Err(CalcError::invalid_input(
                "catalog.nominal_size",
                bad.nominal_size.to_string(),
                "Nominal size must be a finite number",
            ));
        }

        entries.sort_by(|a, b| a.nominal_size.total_cmp(&b.nominal_size));

        if let Some(pair) = entries.windows(2).find(|w| w[0].nominal_size == w[1].nominal_size) {
            return Err(CalcError::invalid_input(
                "catalog.nominal_size",
                pair[0].nominal_size.to_string(),
                "Nominal sizes must be unique",
            ));
        }

        Ok(DuctCatalog { entries })
    }

    /// Catalog of plain nominal sizes (no ID column)
    pub fn from_nominal_sizes(sizes: &[f64]) -> CalcResult<Self> {
        DuctCatalog::new(sizes.iter().copied().map(CatalogEntry::nominal).collect())
    }

    /// The standard duct list: 60, 110, 125, 160, 180, 200, 225, 250 mm
    pub fn standard() -> Self {
        DuctCatalog {
            entries: STANDARD_SIZES_MM.iter().copied().map(CatalogEntry::nominal).collect(),
        }
    }

    /// Entries in ascending nominal order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries resolved for `mode`, ascending
    pub fn resolved<'a>(&'a self, mode: &'a CatalogMode) -> impl Iterator<Item = DuctSizeSpec> + 'a {
        self.entries.iter().map(move |e| mode.resolve(e))
    }

    /// Smallest size whose comparison diameter is at least `required_mm`.
    ///
    /// `required_mm` must already be on the mode's comparison axis (see
    /// [`CatalogMode::required_comparison_diameter`]). Entries without a usable
    /// internal diameter are skipped. Returns `None` when nothing is big enough.
    pub fn pick_recommended(&self, required_mm: f64, mode: &CatalogMode) -> Option<DuctSizeSpec> {
        let axis = mode.comparison_axis();
        self.resolved(mode)
            .filter(|size| {
                if !size.is_usable() {
                    tracing::warn!(
                        nominal_size = size.nominal_size,
                        internal_diameter_mm = size.internal_diameter_mm,
                        "skipping catalog entry without usable internal diameter"
                    );
                }
                size.is_usable()
            })
            .find(|size| axis.diameter_of(size) >= required_mm)
    }
}

impl Default for DuctCatalog {
    fn default() -> Self {
        DuctCatalog::standard()
    }
}

impl TryFrom<Vec<CatalogEntry>> for DuctCatalog {
    type Error = CalcError;

    fn try_from(entries: Vec<CatalogEntry>) -> CalcResult<Self> {
        DuctCatalog::new(entries)
    }
}

impl From<DuctCatalog> for Vec<CatalogEntry> {
    fn from(catalog: DuctCatalog) -> Self {
        catalog.entries
    }
}
