use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::distance::gateway::ConversionGateway;
use crate::distance::units::supported_labels;
use crate::tools::{Tool, ToolDefinition};

pub const TOOL_NAME: &str = "DistanceConverter";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DistanceConverterArgs {
    value: f64,
    from_unit: String,
    to_unit: String,
}

/// Exposes [`ConversionGateway::handle_tool_invocation`] to agent loops.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistanceConverterTool {
    gateway: ConversionGateway,
}

impl DistanceConverterTool {
    pub fn new(gateway: ConversionGateway) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl Tool for DistanceConverterTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: TOOL_NAME.to_string(),
            description: format!(
                "Converts astronomical distances between different units. Supported units: {}.",
                supported_labels()
            ),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "value": {
                        "type": "number",
                        "description": "Distance to convert, in fromUnit"
                    },
                    "fromUnit": {
                        "type": "string",
                        "description": "Unit of value (case-insensitive)"
                    },
                    "toUnit": {
                        "type": "string",
                        "description": "Unit to convert into (case-insensitive)"
                    }
                },
                "required": ["value", "fromUnit", "toUnit"]
            }),
        }
    }

    async fn invoke(&self, args: Value) -> String {
        match serde_json::from_value::<DistanceConverterArgs>(args) {
            Ok(args) => self
                .gateway
                .handle_tool_invocation(args.value, &args.from_unit, &args.to_unit),
            Err(e) => {
                warn!("{TOOL_NAME} called with malformed arguments: {e}");
                format!("Error during conversion: invalid arguments ({e})")
            }
        }
    }
}
