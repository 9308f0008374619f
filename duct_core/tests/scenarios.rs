//! End-to-end sizing scenarios through the public calculation entry point.

use duct_core::cables::CableEntry;
use duct_core::calculations::{calculate_duct_size, DuctSizeInput};
use duct_core::catalog::{CatalogMode, DuctCatalog};
use duct_core::errors::CalcError;
use duct_core::fill_policy::FillFactorSource;

fn id_catalog_run(cables: Vec<CableEntry>, override_percent: Option<f64>) -> Result<duct_core::DuctSizeReport, CalcError> {
    calculate_duct_size(&cables, override_percent, CatalogMode::Id, &DuctCatalog::standard())
}

#[test]
fn scenario_a_single_cable() {
    let report = id_catalog_run(vec![CableEntry::new(20.0, 1)], None).unwrap();

    assert_eq!(report.fill_factor, 0.53);
    assert!((report.total_cable_area_mm2 - 314.16).abs() < 0.01);
    // 20 / √0.53
    assert!((report.sizing.required_internal_diameter_mm - 27.47).abs() < 0.01);
}

#[test]
fn scenario_b_two_cables() {
    let cables = vec![CableEntry::new(20.0, 1), CableEntry::new(20.0, 1)];
    let report = id_catalog_run(cables, None).unwrap();

    assert_eq!(report.total_quantity, 2);
    assert_eq!(report.fill_factor, 0.31);
    assert!((report.total_cable_area_mm2 - 628.32).abs() < 0.01);
    // 20 × √(2 / 0.31)
    assert!((report.sizing.required_internal_diameter_mm - 50.80).abs() < 0.01);
}

#[test]
fn scenario_c_three_cables_id_catalog() {
    let cables = vec![CableEntry::new(10.0, 1); 3];
    let report = id_catalog_run(cables, None).unwrap();

    assert_eq!(report.fill_factor, 0.40);
    assert!((report.total_cable_area_mm2 - 235.62).abs() < 0.01);
    assert!((report.sizing.required_internal_diameter_mm - 27.39).abs() < 0.01);

    let size = report.sizing.recommended_size.unwrap();
    assert_eq!(size.nominal_size, 60.0);
    assert!((report.sizing.actual_fill_percent.unwrap() - 8.33).abs() < 0.01);
}

#[test]
fn scenario_d_zero_override() {
    let err = id_catalog_run(vec![CableEntry::new(20.0, 1)], Some(0.0)).unwrap_err();
    assert!(matches!(err, CalcError::InvalidFillFactor { .. }));
    assert!(err.is_blocking());
}

#[test]
fn scenario_e_nothing_large_enough() {
    let report = id_catalog_run(vec![CableEntry::new(90.0, 4)], None).unwrap();

    assert!(report.sizing.required_internal_diameter_mm > 250.0);
    assert_eq!(report.sizing.recommended_size, None);
    assert_eq!(report.sizing.actual_fill_percent, None);

    assert_eq!(report.fill_table.len(), 8);
    assert!(report.fill_table.iter().all(|row| row.fill_percent.is_some()));
    // 4 × 90² / 60² × 100
    assert!((report.fill_table[0].fill_percent.unwrap() - 900.0).abs() < 0.01);
}

#[test]
fn empty_input_is_neutral() {
    let err = id_catalog_run(vec![CableEntry::new(0.0, 0)], None).unwrap_err();
    assert_eq!(err, CalcError::EmptyInput);
    assert!(!err.is_blocking());
}

#[test]
fn default_options_read_catalog_as_od() {
    let input = DuctSizeInput::new(vec![CableEntry::new(20.0, 1)]);
    let report = duct_core::calculate(&input).unwrap();

    assert_eq!(report.fill_factor_source, FillFactorSource::Auto);
    let od = report.sizing.required_outer_diameter_mm.unwrap();
    assert!((od - 47.47).abs() < 0.01);
    assert_eq!(report.sizing.recommended_size.unwrap().internal_diameter_mm, 40.0);
    assert!(report.fill_table.iter().all(|row| row.used_as == "Outer Diameter (OD)"));
}

#[test]
fn wall_thicker_than_small_duct() {
    let catalog = DuctCatalog::from_nominal_sizes(&[30.0, 60.0, 110.0]).unwrap();
    let mode = CatalogMode::OdUniformWall { wall_thickness_mm: 16.0 };
    let report = calculate_duct_size(&[CableEntry::new(6.0, 1)], None, mode, &catalog).unwrap();

    assert_eq!(report.fill_table[0].internal_diameter_mm, 0.0);
    assert_eq!(report.fill_table[0].fill_percent, None);
    // 6 / √0.53 = 8.24 ID -> 40.24 OD, so 60 is the pick
    assert_eq!(report.sizing.recommended_size.unwrap().nominal_size, 60.0);
}
