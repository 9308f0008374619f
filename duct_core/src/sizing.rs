//! # Sizing Engine
//!
//! Turns a total cable cross-section and a fill fraction into the duct
//! diameter needed, then picks a catalog size and reports the fill it
//! actually achieves.
//!
//! ## Formulas
//!
//! ```text
//! fill  = A_cables / (π × (d/2)²)
//! d_req = 2 × √((A_cables / fill) / π)
//! D_req = d_req + 2t            (OD catalogs with uniform wall t)
//! ```
//!
//! The required fill and the achieved fill are different numbers: the
//! achieved fill uses the internal diameter of the size actually recommended.

use serde::{Deserialize, Serialize};

use crate::cables::CableSet;
use crate::catalog::{CatalogMode, DuctCatalog, DuctSizeSpec};
use crate::errors::{CalcError, CalcResult};
use crate::geometry::{circle_area, diameter_for_area};

/// Internal diameter at which `total_cable_area_mm2` fills exactly `fill_factor`.
///
/// Fails with `InvalidFillFactor` when `fill_factor` is not greater than zero.
///
/// # Example
/// ```rust
/// use duct_core::sizing::required_internal_diameter;
///
/// // One 20 mm cable at 53%: 20 / √0.53 = 27.47 mm
/// let d = required_internal_diameter(314.159, 0.53).unwrap();
/// assert!((d - 27.47).abs() < 0.01);
/// ```
pub fn required_internal_diameter(total_cable_area_mm2: f64, fill_factor: f64) -> CalcResult<f64> {
    // Also rejects NaN
    if !(fill_factor > 0.0) {
        return Err(CalcError::invalid_fill_factor(fill_factor));
    }
    Ok(diameter_for_area(total_cable_area_mm2 / fill_factor))
}

/// Outer diameter needed to give `required_internal_diameter_mm` inside a
/// wall of `wall_thickness_mm`.
#[inline]
pub fn required_outer_diameter(required_internal_diameter_mm: f64, wall_thickness_mm: f64) -> f64 {
    required_internal_diameter_mm + 2.0 * wall_thickness_mm
}

/// Fill percentage of a duct with the given internal diameter.
///
/// `None` when the diameter is not positive.
pub fn fill_percent(total_cable_area_mm2: f64, internal_diameter_mm: f64) -> Option<f64> {
    if internal_diameter_mm > 0.0 {
        Some(total_cable_area_mm2 / circle_area(internal_diameter_mm) * 100.0)
    } else {
        None
    }
}

/// Outcome of sizing one cable set against a catalog.
///
/// ## JSON Example
///
/// ```json
/// {
///   "required_internal_diameter_mm": 27.39,
///   "required_outer_diameter_mm": null,
///   "recommended_size": { "nominal_size": 60.0, "internal_diameter_mm": 60.0 },
///   "actual_fill_percent": 8.33
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizingResult {
    /// Smallest internal diameter meeting the fill factor (mm)
    pub required_internal_diameter_mm: f64,

    /// Required outer diameter, only for uniform-wall OD catalogs (mm)
    pub required_outer_diameter_mm: Option<f64>,

    /// Smallest catalog size that qualifies, `None` if none does
    pub recommended_size: Option<DuctSizeSpec>,

    /// Fill achieved in the recommended size (%), `None` without a recommendation
    pub actual_fill_percent: Option<f64>,
}

impl SizingResult {
    pub fn has_recommendation(&self) -> bool {
        self.recommended_size.is_some()
    }
}

/// Size `cables` against `catalog` at the given fill fraction.
///
/// # Returns
///
/// * `Ok(SizingResult)` - with `recommended_size = None` if no size fits
/// * `Err(CalcError::EmptyInput)` - no valid cable rows
/// * `Err(CalcError::InvalidFillFactor)` - `fill_factor` ≤ 0
/// * `Err(CalcError::InvalidInput)` - the summed cable area is not finite
pub fn compute_sizing_result(
    cables: &CableSet<'_>,
    fill_factor: f64,
    catalog: &DuctCatalog,
    mode: &CatalogMode,
) -> CalcResult<SizingResult> {
    if cables.is_empty() {
        return Err(CalcError::EmptyInput);
    }

    let total_area = cables.total_cable_area_mm2();
    if !total_area.is_finite() {
        return Err(CalcError::invalid_input(
            "cables",
            total_area.to_string(),
            "Total cable area is too large to represent",
        ));
    }
    let required_id = required_internal_diameter(total_area, fill_factor)?;
    let required_od = mode.required_outer_diameter(required_id);
    let needed = mode.required_comparison_diameter(required_id);

    let recommended_size = catalog.pick_recommended(needed, mode);
    let actual_fill_percent = recommended_size.and_then(|size| fill_percent(total_area, size.internal_diameter_mm));

    tracing::debug!(
        total_area_mm2 = total_area,
        fill_factor,
        required_id_mm = required_id,
        compare_against_mm = needed,
        recommended = ?recommended_size.map(|s| s.nominal_size),
        "sized cable set"
    );

    Ok(SizingResult {
        required_internal_diameter_mm: required_id,
        required_outer_diameter_mm: required_od,
        recommended_size,
        actual_fill_percent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cables::CableEntry;
    use crate::catalog::CatalogEntry;

    #[test]
    fn test_required_internal_diameter() {
        // Two 20 mm cables at 31%: 20 × √(2 / 0.31) = 50.80
        let d = required_internal_diameter(2.0 * circle_area(20.0), 0.31).unwrap();
        assert!((d - 50.80).abs() < 0.01);
    }

    #[test]
    fn test_zero_area_needs_zero_diameter() {
        assert_eq!(required_internal_diameter(0.0, 0.4).unwrap(), 0.0);
    }

    #[test]
    fn test_non_positive_fill_factor_rejected() {
        for f in [0.0, -0.4, f64::NAN] {
            let err = required_internal_diameter(100.0, f).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_FILL_FACTOR");
        }
    }

    #[test]
    fn test_required_outer_diameter() {
        assert_eq!(required_outer_diameter(27.5, 10.0), 47.5);
        assert_eq!(required_outer_diameter(27.5, 0.0), 27.5);
    }

    #[test]
    fn test_fill_percent_guards_zero_diameter() {
        assert_eq!(fill_percent(100.0, 0.0), None);
        assert_eq!(fill_percent(100.0, -5.0), None);
        let pct = fill_percent(circle_area(10.0), 20.0).unwrap();
        assert!((pct - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_sizing_id_catalog() {
        let rows = [CableEntry::new(10.0, 3)];
        let result = compute_sizing_result(&CableSet::new(&rows), 0.40, &DuctCatalog::standard(), &CatalogMode::Id).unwrap();

        assert!((result.required_internal_diameter_mm - 27.39).abs() < 0.01);
        assert_eq!(result.required_outer_diameter_mm, None);
        assert_eq!(result.recommended_size.unwrap().nominal_size, 60.0);
        assert!((result.actual_fill_percent.unwrap() - 8.33).abs() < 0.01);
    }

    #[test]
    fn test_sizing_uniform_wall_catalog() {
        let rows = [CableEntry::new(20.0, 1)];
        let mode = CatalogMode::OdUniformWall { wall_thickness_mm: 10.0 };
        let result = compute_sizing_result(&CableSet::new(&rows), 0.53, &DuctCatalog::standard(), &mode).unwrap();

        // ID 27.47 -> OD 47.47, 60 OD has a 40 ID
        let od = result.required_outer_diameter_mm.unwrap();
        assert!((od - 47.47).abs() < 0.01);
        let size = result.recommended_size.unwrap();
        assert_eq!(size.nominal_size, 60.0);
        assert_eq!(size.internal_diameter_mm, 40.0);
        // 314.16 / (π × 20²) = 25%
        assert!((result.actual_fill_percent.unwrap() - 25.0).abs() < 0.01);
    }

    #[test]
    fn test_actual_fill_uses_recommended_size() {
        let rows = [CableEntry::new(20.0, 1)];
        let result = compute_sizing_result(&CableSet::new(&rows), 0.53, &DuctCatalog::standard(), &CatalogMode::Id).unwrap();
        // Required fill is 53%, the 60 mm duct only reaches 11.1%
        assert!((result.actual_fill_percent.unwrap() - 11.11).abs() < 0.01);
    }

    #[test]
    fn test_no_suitable_size_is_not_an_error() {
        let rows = [CableEntry::new(100.0, 5)];
        let result = compute_sizing_result(&CableSet::new(&rows), 0.40, &DuctCatalog::standard(), &CatalogMode::Id).unwrap();
        assert!(!result.has_recommendation());
        assert_eq!(result.actual_fill_percent, None);
    }

    #[test]
    fn test_explicit_table_sizing() {
        let catalog = DuctCatalog::new(vec![
            CatalogEntry::with_internal_diameter(32.0, 26.0),
            CatalogEntry::with_internal_diameter(40.0, 32.6),
        ])
        .unwrap();
        let rows = [CableEntry::new(20.0, 1)];
        let result =
            compute_sizing_result(&CableSet::new(&rows), 0.53, &catalog, &CatalogMode::OdExplicitTable).unwrap();
        assert_eq!(result.required_outer_diameter_mm, None);
        assert_eq!(result.recommended_size.unwrap().nominal_size, 40.0);
    }

    #[test]
    fn test_non_finite_total_area_rejected() {
        // Each row is finite on its own, the sum is not
        let rows = [CableEntry::new(1.4e154, 1), CableEntry::new(1.4e154, 1)];
        let set = CableSet::new(&rows);
        assert_eq!(set.total_quantity(), 2);
        let err = compute_sizing_result(&set, 0.31, &DuctCatalog::standard(), &CatalogMode::Id).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_empty_cables() {
        let rows = [CableEntry::new(0.0, 1)];
        let err = compute_sizing_result(&CableSet::new(&rows), 0.53, &DuctCatalog::standard(), &CatalogMode::Id)
            .unwrap_err();
        assert_eq!(err, CalcError::EmptyInput);
    }
}
