//! Agent tools: text-in/text-out functions an external chat loop may call.
//!
//! ARCHITECTURAL RULE: a tool never fails. Whatever goes wrong is reported in
//! the returned text; callers cannot branch on error types.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

pub mod handlers;

/// Name, description and JSON Schema an agent needs to decide when and how to call a tool.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

#[async_trait]
pub trait Tool: Send + Sync {
    fn definition(&self) -> ToolDefinition;

    /// Runs the tool on raw JSON arguments and always returns text.
    async fn invoke(&self, args: Value) -> String;
}

/// Named set of tools, built once at startup and shared read-only.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: BTreeMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `tool` under its definition name, replacing any previous one.
    pub fn register(mut self, tool: Arc<dyn Tool>) -> Self {
        let name = tool.definition().name;
        self.tools.insert(name, tool);
        self
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.values().map(|t| t.definition()).collect()
    }
}
