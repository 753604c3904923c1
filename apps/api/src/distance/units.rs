//! Unit catalog: the closed set of supported distance units and their exact
//! factor to the base unit (kilometers).
//!
//! The factor table is constant data compiled into the binary. It exists
//! before `main` runs, is never mutated, and is read concurrently by every
//! request without synchronization. Totality comes from the exhaustive match
//! in [`Unit::kilometers`]: adding a variant without a factor does not compile.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// IAU 2012: 1 AU = 149,597,870.7 km
pub const KM_PER_AU: f64 = 149_597_870.7;
/// 1 ly = 9,460,730,472,580.8 km
pub const KM_PER_LIGHT_YEAR: f64 = 9_460_730_472_580.8;
/// 1 pc = 30,856,775,814,913.672 km
pub const KM_PER_PARSEC: f64 = 30_856_775_814_913.672;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Unit {
    Kilometer,
    Au,
    LightYear,
    Parsec,
}

impl Unit {
    /// Declaration order; also the order used in every "supported units" message.
    pub const ALL: [Unit; 4] = [Unit::Kilometer, Unit::Au, Unit::LightYear, Unit::Parsec];

    /// The base unit every conversion is routed through.
    pub const BASE: Unit = Unit::Kilometer;

    /// Canonical upper-case label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Kilometer => "KILOMETER",
            Unit::Au => "AU",
            Unit::LightYear => "LIGHT_YEAR",
            Unit::Parsec => "PARSEC",
        }
    }

    /// Number of kilometers in one of this unit.
    pub fn kilometers(&self) -> f64 {
        match self {
            Unit::Kilometer => 1.0,
            Unit::Au => KM_PER_AU,
            Unit::LightYear => KM_PER_LIGHT_YEAR,
            Unit::Parsec => KM_PER_PARSEC,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported unit '{label}'. Supported: {}", supported_labels())]
pub struct UnsupportedUnitError {
    pub label: String,
}

impl FromStr for Unit {
    type Err = UnsupportedUnitError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Unit::ALL
            .into_iter()
            .find(|unit| unit.as_str().eq_ignore_ascii_case(label))
            .ok_or_else(|| UnsupportedUnitError {
                label: label.to_string(),
            })
    }
}

/// `KILOMETER, AU, LIGHT_YEAR, PARSEC`
pub fn supported_labels() -> String {
    Unit::ALL
        .iter()
        .map(Unit::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Read-only lookups over the unit table.
pub struct UnitCatalog;

impl UnitCatalog {
    /// Case-insensitive. Absent, empty and unknown labels are unsupported.
    pub fn is_supported(label: Option<&str>) -> bool {
        label.is_some_and(|l| l.parse::<Unit>().is_ok())
    }

    pub fn parse(label: &str) -> Result<Unit, UnsupportedUnitError> {
        label.parse()
    }

    pub fn factor_to_base(unit: Unit) -> f64 {
        unit.kilometers()
    }

    /// Owned snapshot of the whole table. Changing it has no effect on the catalog.
    pub fn all_factors() -> BTreeMap<Unit, f64> {
        Unit::ALL
            .into_iter()
            .map(|unit| (unit, unit.kilometers()))
            .collect()
    }
}
