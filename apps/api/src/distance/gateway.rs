//! Conversion gateway: the boundary between callers and the engine.
//!
//! Two surfaces share one validate → convert pipeline:
//! - [`ConversionGateway::handle_structured_request`] returns typed errors for
//!   the HTTP layer to map onto status codes.
//! - [`ConversionGateway::handle_tool_invocation`] always returns a sentence,
//!   for agent loops that only consume text.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::distance::engine::ConversionEngine;
use crate::distance::units::{supported_labels, Unit};
use crate::distance::validation::{validate, ConversionRequest, ValidationError};

/// Significant digits used in tool sentences.
const TOOL_SIGNIFICANT_DIGITS: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResponse {
    pub original_value: f64,
    pub original_unit: Unit,
    pub converted_value: f64,
    pub converted_unit: Unit,
    pub conversion_factor: f64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Not caused by user input. Never replaced by a default number.
    #[error("{0}")]
    Internal(String),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConversionGateway {
    engine: ConversionEngine,
}

impl ConversionGateway {
    pub fn new(engine: ConversionEngine) -> Self {
        Self { engine }
    }

    pub fn handle_structured_request(
        &self,
        req: &ConversionRequest,
    ) -> Result<ConversionResponse, ConversionError> {
        let validated = validate(req)?;

        let converted = self
            .engine
            .convert(validated.magnitude, validated.from, validated.to);
        let factor = self.engine.conversion_factor(validated.from, validated.to);

        if !converted.is_finite() || !factor.is_finite() {
            return Err(ConversionError::Internal(format!(
                "{} {} to {} produced a non-finite result",
                validated.magnitude, validated.from, validated.to
            )));
        }

        Ok(ConversionResponse {
            original_value: validated.magnitude,
            original_unit: validated.from,
            converted_value: converted,
            converted_unit: validated.to,
            conversion_factor: factor,
            timestamp: Utc::now(),
        })
    }

    /// Text-in/text-out variant. Every failure becomes a descriptive sentence.
    pub fn handle_tool_invocation(&self, magnitude: f64, from_label: &str, to_label: &str) -> String {
        info!("Distance conversion requested: {magnitude} {from_label} to {to_label}");

        let req = ConversionRequest::new(magnitude, from_label, to_label);
        match self.handle_structured_request(&req) {
            Ok(resp) => {
                info!(
                    "Conversion successful: {} {} = {} {}",
                    resp.original_value, resp.original_unit, resp.converted_value, resp.converted_unit
                );
                format!(
                    "{} {} equals {} {} (conversion factor: {})",
                    format_scientific(resp.original_value, TOOL_SIGNIFICANT_DIGITS),
                    resp.original_unit,
                    format_scientific(resp.converted_value, TOOL_SIGNIFICANT_DIGITS),
                    resp.converted_unit,
                    format_scientific(resp.conversion_factor, TOOL_SIGNIFICANT_DIGITS),
                )
            }
            Err(ConversionError::Validation(ValidationError::UnsupportedUnit { field })) => {
                warn!("Invalid unit provided ({field:?}): {from_label} / {to_label}");
                format!(
                    "Error: Invalid unit. Supported units are: {}",
                    supported_labels()
                )
            }
            Err(ConversionError::Validation(e)) => {
                warn!("Rejected tool conversion: {e}");
                format!("Error: {e}")
            }
            Err(ConversionError::Internal(msg)) => {
                error!("Error during conversion: {msg}");
                format!("Error during conversion: {msg}")
            }
        }
    }
}

/// Scientific notation with `significant` digits and a signed exponent of at
/// least two digits, e.g. `1.49598e+08`.
pub fn format_scientific(value: f64, significant: usize) -> String {
    let precision = significant.saturating_sub(1);
    let formatted = format!("{value:.precision$e}");
    let Some((mantissa, exponent)) = formatted.split_once('e') else {
        return formatted;
    };
    match exponent.parse::<i32>() {
        Ok(exp) => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
        }
        Err(_) => formatted,
    }
}
