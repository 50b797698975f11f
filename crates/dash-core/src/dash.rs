// File: crates/dash-core/src/dash.rs
// Summary: Dash specification (number or list) and its normalized cyclic pattern.

use serde::{Deserialize, Serialize};

/// Default dash and gap length in pixels.
pub const DEFAULT_DASH_LENGTH: f64 = 10.0;

/// Dash length as configured: a single length used for both dash and gap, or
/// a list read cyclically as `[dash, gap, dash, gap, ...]`.
///
/// Values are not validated; zero or negative lengths give degenerate dashing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DashSpec {
    Length(f64),
    Pattern(Vec<f64>),
}

impl Default for DashSpec {
    fn default() -> Self { DashSpec::Length(DEFAULT_DASH_LENGTH) }
}

impl From<f64> for DashSpec {
    fn from(len: f64) -> Self { DashSpec::Length(len) }
}

impl From<Vec<f64>> for DashSpec {
    fn from(v: Vec<f64>) -> Self { DashSpec::Pattern(v) }
}

impl DashSpec {
    /// Normalize to a pattern of at least two entries.
    /// `10` and `[10]` both become `[10, 10]`; longer lists are kept as-is.
    /// An empty list falls back to the default length.
    pub fn normalize(&self) -> DashPattern {
        match self {
            DashSpec::Length(len) => DashPattern(vec![*len, *len]),
            DashSpec::Pattern(v) if v.len() >= 2 => DashPattern(v.clone()),
            DashSpec::Pattern(v) => {
                let len = v.first().copied().unwrap_or(DEFAULT_DASH_LENGTH);
                DashPattern(vec![len, len])
            }
        }
    }
}

/// Normalized dash pattern handed to the surface. Always holds two or more entries.
#[derive(Clone, Debug, PartialEq)]
pub struct DashPattern(Vec<f64>);

impl DashPattern {
    pub fn as_slice(&self) -> &[f64] { &self.0 }

    /// Total length of one cycle of the pattern.
    pub fn cycle_length(&self) -> f64 { self.0.iter().sum() }
}
