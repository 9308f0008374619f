//! # Cable Rows
//!
//! The cable list is owned by whatever collects it (form, file, CLI). The
//! engine receives it fresh on every call and only reads it.
//!
//! Rows with a non-positive outer diameter or quantity are skipped when
//! aggregating. They are never an error: a half-filled form row simply does
//! not count yet.

use serde::{Deserialize, Serialize};

use crate::geometry::circle_area;

/// One cable type and how many of it run in the duct.
///
/// ## JSON Example
///
/// ```json
/// { "outer_diameter_mm": 20.0, "quantity": 2 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CableEntry {
    /// Cable outer diameter in mm
    pub outer_diameter_mm: f64,

    /// Number of cables of this size
    pub quantity: i64,
}

impl CableEntry {
    pub fn new(outer_diameter_mm: f64, quantity: i64) -> Self {
        CableEntry {
            outer_diameter_mm,
            quantity,
        }
    }

    /// Whether this row takes part in aggregation: finite positive OD,
    /// positive quantity, and a cross-section that stays finite
    pub fn is_valid(&self) -> bool {
        self.outer_diameter_mm.is_finite()
            && self.outer_diameter_mm > 0.0
            && self.quantity > 0
            && self.area_mm2().is_finite()
    }

    /// Cross-section of all cables in this row (mm²)
    pub fn area_mm2(&self) -> f64 {
        circle_area(self.outer_diameter_mm) * self.quantity as f64
    }
}

/// Borrowed view over a list of cable rows with the aggregates the engine needs.
#[derive(Debug, Clone, Copy)]
pub struct CableSet<'a> {
    entries: &'a [CableEntry],
}

impl<'a> CableSet<'a> {
    pub fn new(entries: &'a [CableEntry]) -> Self {
        CableSet { entries }
    }

    /// Rows that count towards the totals
    pub fn valid_entries(&self) -> impl Iterator<Item = &'a CableEntry> + 'a {
        let entries = self.entries;
        entries.iter().filter(|e| e.is_valid())
    }

    /// Number of rows skipped as invalid
    pub fn skipped_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_valid()).count()
    }

    /// Sum of quantities over valid rows, saturating at `i64::MAX`
    pub fn total_quantity(&self) -> i64 {
        self.valid_entries().fold(0i64, |total, e| total.saturating_add(e.quantity))
    }

    /// Sum of cable cross-sections over valid rows (mm²)
    pub fn total_cable_area_mm2(&self) -> f64 {
        self.valid_entries().map(CableEntry::area_mm2).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_quantity() <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_rows_filtered() {
        let rows = [
            CableEntry::new(20.0, 1),
            CableEntry::new(0.0, 4),
            CableEntry::new(-3.0, 1),
            CableEntry::new(15.0, 0),
            CableEntry::new(15.0, -2),
            CableEntry::new(f64::NAN, 1),
        ];
        let set = CableSet::new(&rows);
        assert_eq!(set.total_quantity(), 1);
        assert_eq!(set.skipped_count(), 5);
        assert!((set.total_cable_area_mm2() - 314.159).abs() < 0.001);
    }

    #[test]
    fn test_huge_quantities_saturate() {
        let rows = [CableEntry::new(1.0, i64::MAX), CableEntry::new(1.0, 2)];
        let set = CableSet::new(&rows);
        assert_eq!(set.total_quantity(), i64::MAX);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_overflowing_area_row_is_invalid() {
        let huge = CableEntry::new(1e200, 1);
        assert!(!huge.is_valid());

        let rows = [huge, CableEntry::new(20.0, 1)];
        let set = CableSet::new(&rows);
        assert_eq!(set.total_quantity(), 1);
        assert_eq!(set.skipped_count(), 1);
        assert!(set.total_cable_area_mm2().is_finite());
    }

    #[test]
    fn test_quantity_multiplies_area() {
        let rows = [CableEntry::new(10.0, 3)];
        let set = CableSet::new(&rows);
        assert_eq!(set.total_quantity(), 3);
        // 3 × π × 5² = 235.62
        assert!((set.total_cable_area_mm2() - 235.619).abs() < 0.001);
    }

    #[test]
    fn test_order_does_not_matter() {
        let a = [CableEntry::new(10.0, 2), CableEntry::new(32.0, 1)];
        let b = [CableEntry::new(32.0, 1), CableEntry::new(10.0, 2)];
        let (sa, sb) = (CableSet::new(&a), CableSet::new(&b));
        assert_eq!(sa.total_quantity(), sb.total_quantity());
        assert!((sa.total_cable_area_mm2() - sb.total_cable_area_mm2()).abs() < 1e-9);
    }

    #[test]
    fn test_empty_set() {
        let set = CableSet::new(&[]);
        assert!(set.is_empty());
        assert_eq!(set.total_cable_area_mm2(), 0.0);
    }

    #[test]
    fn test_entry_json() {
        let entry: CableEntry = serde_json::from_str(r#"{"outer_diameter_mm": 12.5, "quantity": 4}"#).unwrap();
        assert_eq!(entry, CableEntry::new(12.5, 4));
    }
}
