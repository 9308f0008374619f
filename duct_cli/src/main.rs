//! # Ductsize CLI Application
//!
//! Terminal front end for the duct sizing engine. Cable rows come from an
//! input file, from `--cable` flags, or from interactive prompts.
//!
//! ```text
//! ductsize --cable 20x2 --cable 12.5 --mode id
//! ductsize --input feeder.toml --json
//! ```

mod logger;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use duct_core::calculations::{calculate, DuctSizeInput, DuctSizeReport};
use duct_core::catalog::{CatalogMode, DuctCatalog, DEFAULT_WALL_THICKNESS_MM};
use duct_core::errors::{CalcError, CalcResult};
use duct_core::fill_policy::{FillFactorSource, REGULATORY_NOTE};
use duct_core::{load_input, CableEntry};

#[derive(Parser, Debug)]
#[command(name = "ductsize")]
#[command(about = "Size a cable duct using NEC Chapter 9 fill limits")]
struct Args {
    /// JSON or TOML input file
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Cable as OD in mm with optional quantity, e.g. 20x2 (repeatable)
    #[arg(short, long = "cable", value_parser = parse_cable)]
    cables: Vec<CableEntry>,

    /// Override the automatic fill factor (percent)
    #[arg(long)]
    fill_percent: Option<f64>,

    /// How the duct list is denominated
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Duct wall thickness in mm (OD lists only)
    #[arg(long)]
    wall_mm: Option<f64>,

    /// Comma-separated nominal duct sizes in mm
    #[arg(long, value_delimiter = ',')]
    sizes: Option<Vec<f64>>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    /// Listed sizes are inner diameters
    Id,
    /// Listed sizes are outer diameters with a uniform wall
    Od,
    /// Listed sizes are outer diameters with an explicit ID per size
    OdTable,
}

/// Parse `OD` or `ODxQTY`.
fn parse_cable(s: &str) -> Result<CableEntry, String> {
    let (od, qty) = match s.split_once(|c| c == 'x' || c == 'X') {
        Some((od, qty)) => (od, qty),
        None => (s, "1"),
    };
    let od: f64 = od.trim().parse().map_err(|_| format!("invalid cable OD '{}'", od.trim()))?;
    let qty: i64 = qty.trim().parse().map_err(|_| format!("invalid cable quantity '{}'", qty.trim()))?;
    Ok(CableEntry::new(od, qty))
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

/// Ask for cable rows until a blank OD.
fn prompt_cables() -> Vec<CableEntry> {
    println!("Enter cables one row at a time (blank OD to finish).");
    let mut cables = Vec::new();
    loop {
        let n = cables.len() + 1;
        let od = match prompt_line(&format!("Cable {} OD (mm): ", n)) {
            Some(od) if !od.is_empty() => od,
            _ => break,
        };
        let od: f64 = od.parse().unwrap_or(0.0);
        let qty = prompt_line(&format!("Cable {} qty [1]: ", n))
            .and_then(|q| if q.is_empty() { Some(1) } else { q.parse().ok() })
            .unwrap_or(1);
        cables.push(CableEntry::new(od, qty));
    }
    println!();
    cables
}

/// Build the calculation input: file first, flags on top.
fn build_input(args: &Args) -> CalcResult<DuctSizeInput> {
    let mut input = match &args.input {
        Some(path) => load_input(path)?,
        None => DuctSizeInput::new(Vec::new()),
    };

    if !args.cables.is_empty() {
        input.cables = args.cables.clone();
    }
    if args.fill_percent.is_some() {
        input.fill_override_percent = args.fill_percent;
    }
    if let Some(sizes) = &args.sizes {
        input.catalog = DuctCatalog::from_nominal_sizes(sizes)?;
    }

    let current_wall = match input.catalog_mode {
        CatalogMode::OdUniformWall { wall_thickness_mm } => wall_thickness_mm,
        _ => DEFAULT_WALL_THICKNESS_MM,
    };
    let wall_thickness_mm = args.wall_mm.unwrap_or(current_wall);

    input.catalog_mode = match args.mode {
        Some(ModeArg::Id) => CatalogMode::Id,
        Some(ModeArg::Od) => CatalogMode::OdUniformWall { wall_thickness_mm },
        Some(ModeArg::OdTable) => CatalogMode::OdExplicitTable,
        None => match input.catalog_mode {
            CatalogMode::OdUniformWall { .. } => CatalogMode::OdUniformWall { wall_thickness_mm },
            other => other,
        },
    };
    if let (Some(sizes), CatalogMode::OdExplicitTable) = (&args.sizes, input.catalog_mode) {
        return Err(CalcError::invalid_input(
            "sizes",
            format!("{:?}", sizes),
            "--sizes carries no per-size ID; use an input file for od-table catalogs",
        ));
    }
    if args.wall_mm.is_some() && !matches!(input.catalog_mode, CatalogMode::OdUniformWall { .. }) {
        tracing::warn!("--wall-mm only applies to OD lists with a uniform wall, ignoring");
    }

    if input.cables.is_empty() && args.input.is_none() {
        input.cables = prompt_cables();
    }

    Ok(input)
}

fn print_report(report: &DuctSizeReport) {
    let source = match report.fill_factor_source {
        FillFactorSource::Auto => "auto",
        FillFactorSource::Override => "override",
    };

    println!("═══════════════════════════════════════");
    println!("  DUCT SIZE RESULTS");
    println!("═══════════════════════════════════════");
    if !report.label.is_empty() {
        println!("  Run: {}", report.label);
    }
    println!();
    println!("Cables:");
    println!("  Total cables:     {}", report.total_quantity);
    println!("  Total cable area: {:.2} mm²", report.total_cable_area_mm2);
    println!("  Fill factor used: {:.0}% ({})", report.fill_factor_percent(), source);
    if report.skipped_rows > 0 {
        println!("  Ignored rows:     {}", report.skipped_rows);
    }
    println!();
    println!("Requirement:");
    println!("  Required internal Ø: {:.2} mm", report.sizing.required_internal_diameter_mm);
    if let Some(od) = report.sizing.required_outer_diameter_mm {
        println!("  Required outer Ø:    {:.2} mm", od);
    }
    match report.sizing.recommended_size {
        Some(size) => println!("  Recommended size:    {} mm", size.nominal_size),
        None => println!("  Recommended size:    —"),
    }
    println!();
    println!("Available sizes ({}):", report.catalog_mode.label());
    println!("  {:>10}  {:>10}  {:>8}", "Listed", "ID (mm)", "Fill");
    for row in &report.fill_table {
        let fill = row
            .fill_percent
            .map(|f| format!("{:.1}%", f))
            .unwrap_or_else(|| "—".to_string());
        let marker = match report.sizing.recommended_size {
            Some(size) if size.nominal_size == row.nominal_size => "  <",
            _ => "",
        };
        println!(
            "  {:>10}  {:>10.2}  {:>8}{}",
            row.nominal_size, row.internal_diameter_mm, fill, marker
        );
    }
    println!();
    println!("═══════════════════════════════════════");
    println!("  {}", report.summary());
    println!("═══════════════════════════════════════");
    println!("{}", REGULATORY_NOTE);
}

fn report_error(e: &CalcError, json: bool) {
    eprintln!("Error: {}", e);
    if json {
        if let Ok(text) = serde_json::to_string_pretty(e) {
            eprintln!("{}", text);
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);
    tracing::debug!("CLI args: {:?}", args);

    let input = match build_input(&args) {
        Ok(input) => input,
        Err(e) => {
            tracing::error!(code = e.error_code(), "could not build input");
            report_error(&e, args.json);
            return ExitCode::FAILURE;
        }
    };

    match calculate(&input) {
        Ok(report) => {
            if args.json {
                match serde_json::to_string_pretty(&report) {
                    Ok(text) => println!("{}", text),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                print_report(&report);
            }
            ExitCode::SUCCESS
        }
        Err(e) if !e.is_blocking() => {
            println!("Add at least one cable row with a positive OD and quantity.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(code = e.error_code(), "calculation failed");
            report_error(&e, args.json);
            ExitCode::FAILURE
        }
    }
}
