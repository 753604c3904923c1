use thiserror::Error;

use crate::distance::units::{supported_labels, Unit, UnitCatalog};

/// Domain-level conversion request. Labels are optional: an absent label is
/// rejected the same way as an unknown one.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub magnitude: f64,
    pub from_unit: Option<String>,
    pub to_unit: Option<String>,
}

impl ConversionRequest {
    pub fn new(magnitude: f64, from_unit: impl Into<String>, to_unit: impl Into<String>) -> Self {
        Self {
            magnitude,
            from_unit: Some(from_unit.into()),
            to_unit: Some(to_unit.into()),
        }
    }
}

/// Which side(s) of a request carried an unrecognized unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitField {
    From,
    To,
    Both,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Input value must be non-negative")]
    NegativeMagnitude,

    /// One message for every field combination, listing every supported unit.
    #[error("Unsupported unit. Supported: {}", supported_labels())]
    UnsupportedUnit { field: UnitField },
}

/// A request that passed validation, with both units resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedRequest {
    pub magnitude: f64,
    pub from: Unit,
    pub to: Unit,
}

/// Validates a conversion request before it reaches the engine.
///
/// Order: magnitude first, then units. Physical distances are non-negative,
/// so a negative magnitude is rejected here even though the engine handles
/// signed values.
pub fn validate(req: &ConversionRequest) -> Result<ValidatedRequest, ValidationError> {
    if req.magnitude < 0.0 {
        return Err(ValidationError::NegativeMagnitude);
    }

    let from = parse_label(req.from_unit.as_deref());
    let to = parse_label(req.to_unit.as_deref());

    match (from, to) {
        (Some(from), Some(to)) => Ok(ValidatedRequest {
            magnitude: req.magnitude,
            from,
            to,
        }),
        (None, Some(_)) => Err(ValidationError::UnsupportedUnit {
            field: UnitField::From,
        }),
        (Some(_), None) => Err(ValidationError::UnsupportedUnit {
            field: UnitField::To,
        }),
        (None, None) => Err(ValidationError::UnsupportedUnit {
            field: UnitField::Both,
        }),
    }
}

fn parse_label(label: Option<&str>) -> Option<Unit> {
    if !UnitCatalog::is_supported(label) {
        return None;
    }
    label.and_then(|l| UnitCatalog::parse(l).ok())
}
