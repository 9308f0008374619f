//! # Conduit Fill Policy
//!
//! Maximum permitted fill per NFPA 70 (NEC) Chapter 9, Table 1.
//!
//! ## Fill Table
//!
//! | Cables in duct | Max fill |
//! |----------------|----------|
//! | 1              | 53%      |
//! | 2              | 31%      |
//! | 3 or more      | 40%      |
//!
//! The table itself is fixed. Only the value used for a calculation can be
//! overridden by the caller, and an override is passed through untouched so
//! that a zero or negative value reaches the engine and is reported there.

use serde::{Deserialize, Serialize};

/// Fill fraction for a single cable
pub const FILL_ONE_CABLE: f64 = 0.53;
/// Fill fraction for exactly two cables
pub const FILL_TWO_CABLES: f64 = 0.31;
/// Fill fraction for three or more cables
pub const FILL_THREE_OR_MORE: f64 = 0.40;

/// Reference text for presentation layers
pub const REGULATORY_NOTE: &str = "Per NFPA 70 / NEC Chapter 9, Table 1: \
    1 cable -> 53%, 2 cables -> 31%, 3+ cables -> 40%.";

/// Where the fill factor used in a calculation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillFactorSource {
    /// Looked up from the regulatory table by cable count
    Auto,
    /// Supplied by the caller
    Override,
}

/// Regulatory fill fraction for a total cable count.
///
/// Returns `None` when there are no cables.
///
/// # Example
/// ```rust
/// use duct_core::fill_policy::auto_fill_factor;
///
/// assert_eq!(auto_fill_factor(1), Some(0.53));
/// assert_eq!(auto_fill_factor(0), None);
/// ```
pub fn auto_fill_factor(total_quantity: i64) -> Option<f64> {
    match total_quantity {
        q if q <= 0 => None,
        1 => Some(FILL_ONE_CABLE),
        2 => Some(FILL_TWO_CABLES),
        _ => Some(FILL_THREE_OR_MORE),
    }
}

/// Fill fraction to use: the override when present, otherwise the table value.
///
/// The override is a fraction (0.40 for 40%). It is neither rounded nor
/// clamped.
pub fn resolve_fill_factor(total_quantity: i64, override_fraction: Option<f64>) -> Option<f64> {
    resolve_fill_factor_with_source(total_quantity, override_fraction).map(|(factor, _)| factor)
}

/// Same as [`resolve_fill_factor`], also reporting where the value came from.
pub fn resolve_fill_factor_with_source(
    total_quantity: i64,
    override_fraction: Option<f64>,
) -> Option<(f64, FillFactorSource)> {
    match override_fraction {
        Some(fraction) => {
            if !(fraction > 0.0 && fraction <= 1.0) {
                tracing::warn!(fill_factor = fraction, "fill factor override outside (0, 1]");
            }
            Some((fraction, FillFactorSource::Override))
        }
        None => auto_fill_factor(total_quantity).map(|f| (f, FillFactorSource::Auto)),
    }
}
