//! # Circular Section Geometry
//!
//! Area formulas for round cables and round ducts. All lengths are in
//! millimetres and all areas in square millimetres.
//!
//! ## Notation
//!
//! - `d` = Diameter
//! - `A` = Cross-sectional area
//!
//! ## References
//!
//! - NFPA 70 (NEC) Chapter 9, Note 9: cable area taken as a circle of the
//!   cable's outer diameter

use std::f64::consts::PI;

/// Calculate the area of a circle from its diameter
///
/// ```text
///        .---.
///      /       \
///     |----d----|
///      \       /
///        '---'
/// ```
///
/// # Formula
/// A = π × (d/2)²
///
/// No validation happens here: a zero diameter yields zero and a negative
/// diameter yields a positive (meaningless) area. Callers that can see
/// non-positive diameters must filter them first.
///
/// # Example
/// ```rust
/// use duct_core::geometry::circle_area;
///
/// let area = circle_area(20.0);
/// assert!((area - 314.159).abs() < 0.001);
/// ```
#[inline]
pub fn circle_area(diameter_mm: f64) -> f64 {
    PI * (diameter_mm / 2.0).powi(2)
}

/// Calculate the diameter of a circle with the given area
///
/// # Formula
/// d = 2 × √(A/π)
///
/// Inverse of [`circle_area`] for non-negative areas.
///
/// # Example
/// ```rust
/// use duct_core::geometry::{circle_area, diameter_for_area};
///
/// let d = diameter_for_area(circle_area(63.0));
/// assert!((d - 63.0).abs() < 1e-9);
/// ```
#[inline]
pub fn diameter_for_area(area_mm2: f64) -> f64 {
    2.0 * (area_mm2 / PI).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_area() {
        // 60 mm duct: π × 30² = 2827.43
        assert!((circle_area(60.0) - 2827.433).abs() < 0.001);
        assert_eq!(circle_area(0.0), 0.0);
    }

    #[test]
    fn test_diameter_for_area_inverts_circle_area() {
        for d in [1.0, 12.5, 110.0, 250.0] {
            assert!((diameter_for_area(circle_area(d)) - d).abs() < 1e-9);
        }
    }

    #[test]
    fn test_area_scales_with_square_of_diameter() {
        let ratio = circle_area(40.0) / circle_area(20.0);
        assert!((ratio - 4.0).abs() < 1e-12);
    }
}
