//! Axum route handlers for the distance conversion API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::distance::gateway::{ConversionError, ConversionResponse};
use crate::distance::units::{Unit, UnitCatalog};
use crate::distance::validation::ConversionRequest;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceConversionRequest {
    pub input_value: f64,
    #[serde(default)]
    pub input_unit: Option<String>,
    #[serde(default)]
    pub output_unit: Option<String>,
}

impl From<DistanceConversionRequest> for ConversionRequest {
    fn from(req: DistanceConversionRequest) -> Self {
        ConversionRequest {
            magnitude: req.input_value,
            from_unit: req.input_unit,
            to_unit: req.output_unit,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitFactor {
    pub unit: Unit,
    pub kilometers: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitListResponse {
    pub base_unit: Unit,
    pub units: Vec<UnitFactor>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/distance-conversion
///
/// 400 bodies are bare JSON strings, see `ConversionError`'s `IntoResponse`.
pub async fn handle_convert(
    State(state): State<AppState>,
    Json(request): Json<DistanceConversionRequest>,
) -> Result<Json<ConversionResponse>, ConversionError> {
    info!(
        "Received conversion request: {} {:?} to {:?}",
        request.input_value, request.input_unit, request.output_unit
    );

    let request: ConversionRequest = request.into();
    let response = state.gateway.handle_structured_request(&request)?;
    Ok(Json(response))
}

/// GET /api/distance-conversion/units
pub async fn handle_list_units() -> Json<UnitListResponse> {
    let units = UnitCatalog::all_factors()
        .into_iter()
        .map(|(unit, kilometers)| UnitFactor { unit, kilometers })
        .collect();

    Json(UnitListResponse {
        base_unit: Unit::BASE,
        units,
    })
}
