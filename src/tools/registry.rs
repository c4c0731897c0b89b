//! Tool registry for managing available tools.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::sap::SalesOrderClient;
use crate::tools::builtin::SalesOrdersTool;
use crate::tools::redaction::redact_sensitive_json;
use crate::tools::tool::{Tool, ToolError, ToolOutput, ToolSchema};

/// Registry of available tools, keyed by name.
#[derive(Default)]
pub struct ToolRegistry {
    tools: RwLock<HashMap<String, Arc<dyn Tool>>>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool, replacing any previous tool with the same name.
    pub async fn register(&self, tool: Arc<dyn Tool>) {
        let name = tool.name().to_string();
        if self.tools.write().await.insert(name.clone(), tool).is_some() {
            tracing::warn!(tool = %name, "Replaced previously registered tool");
        } else {
            tracing::debug!(tool = %name, "Registered tool");
        }
    }

    /// Register the built-in SAP tools.
    pub async fn register_builtin_tools(&self, client: SalesOrderClient) {
        self.register(Arc::new(SalesOrdersTool::new(client))).await;
    }

    /// Look up a tool by name.
    pub async fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.read().await.get(name).cloned()
    }

    /// Names of all registered tools, sorted.
    pub async fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.read().await.keys().cloned().collect();
        names.sort();
        names
    }

    /// All registered tools, sorted by name.
    pub async fn all(&self) -> Vec<Arc<dyn Tool>> {
        let mut tools: Vec<Arc<dyn Tool>> = self.tools.read().await.values().cloned().collect();
        tools.sort_by(|a, b| a.name().cmp(b.name()));
        tools
    }

    /// Schemas for all registered tools, sorted by name.
    pub async fn schemas(&self) -> Vec<ToolSchema> {
        self.all().await.iter().map(|t| t.schema()).collect()
    }

    /// Invoke a tool by name, enforcing its execution timeout if it has one.
    pub async fn execute(
        &self,
        name: &str,
        params: serde_json::Value,
    ) -> Result<ToolOutput, ToolError> {
        let tool = self
            .get(name)
            .await
            .ok_or_else(|| ToolError::NotFound(name.to_string()))?;

        tracing::debug!(
            tool = %name,
            params = %redact_sensitive_json(&params),
            "Executing tool"
        );

        let output = match tool.execution_timeout() {
            Some(timeout) => tokio::time::timeout(timeout, tool.execute(params))
                .await
                .map_err(|_| {
                    tracing::warn!(tool = %name, ?timeout, "Tool execution timed out");
                    ToolError::Timeout(timeout)
                })??,
            None => tool.execute(params).await?,
        };

        tracing::debug!(tool = %name, duration = ?output.duration, "Tool finished");
        Ok(output)
    }
}
