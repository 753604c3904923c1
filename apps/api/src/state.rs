use std::sync::Arc;

use crate::distance::gateway::ConversionGateway;
use crate::tools::ToolRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything in here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub gateway: ConversionGateway,
    /// Tools exposed to external agent loops. Default: DistanceConverter.
    pub tools: Arc<ToolRegistry>,
}
