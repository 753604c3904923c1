use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::errors::AppError;
use crate::state::AppState;
use crate::tools::ToolDefinition;

#[derive(Debug, Serialize)]
pub struct ToolInvocationResponse {
    pub tool: String,
    pub output: String,
}

/// GET /api/v1/tools
pub async fn handle_list_tools(State(state): State<AppState>) -> Json<Vec<ToolDefinition>> {
    Json(state.tools.definitions())
}

/// POST /api/v1/tools/:name/invoke
///
/// Unknown tools are a 404 and a non-object body is a 400. Anything else,
/// including arguments the tool rejects, comes back as 200 with the tool's own text.
pub async fn handle_invoke_tool(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(args): Json<Value>,
) -> Result<Json<ToolInvocationResponse>, AppError> {
    let tool = state
        .tools
        .get(&name)
        .ok_or_else(|| AppError::NotFound(format!("Tool '{name}' not found")))?;

    if !args.is_object() {
        return Err(AppError::Validation(
            "Tool arguments must be a JSON object".to_string(),
        ));
    }

    debug!("tool {name} invoked");
    let output = tool.invoke(args).await;

    Ok(Json(ToolInvocationResponse { tool: name, output }))
}
