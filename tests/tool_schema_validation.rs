//! Validates that every registered tool schema is structurally sound.
//!
//! Catches `required` keys missing from `properties`, arrays without
//! `items`, and a non-object top level.

use std::sync::Arc;

use saptools::config::SapConfig;
use saptools::sap::SalesOrderClient;
use saptools::testing::StubTransport;
use saptools::tools::{Tool, ToolRegistry, validate_tool_schema};

async fn builtin_registry() -> ToolRegistry {
    let registry = ToolRegistry::new();
    let client = SalesOrderClient::new(
        SapConfig::default(),
        Arc::new(StubTransport::ok(r#"{"value": []}"#)),
    );
    registry.register_builtin_tools(client).await;
    registry
}

#[tokio::test]
async fn all_builtin_tool_schemas_are_valid() {
    let registry = builtin_registry().await;

    let tools = registry.all().await;
    assert!(
        !tools.is_empty(),
        "registry should have tools after registration"
    );

    let mut all_errors = Vec::new();
    for tool in &tools {
        let errors = validate_tool_schema(&tool.parameters_schema(), tool.name());
        if !errors.is_empty() {
            all_errors.push(format!(
                "Tool '{}' has schema errors:\n  {}",
                tool.name(),
                errors.join("\n  ")
            ));
        }
    }

    assert!(
        all_errors.is_empty(),
        "Tool schema validation failures:\n{}",
        all_errors.join("\n\n")
    );
}

/// Guards against a tool being added without schema coverage.
#[tokio::test]
async fn builtin_registration_covers_expected_tools() {
    let registry = builtin_registry().await;

    assert_eq!(
        registry.list().await,
        ["get_sales_orders"],
        "Built-in tool set changed. Update this test and ensure new tools have valid schemas."
    );
}

#[tokio::test]
async fn sales_orders_tool_parameters_match_contract() {
    let registry = builtin_registry().await;
    let tool = registry
        .get("get_sales_orders")
        .await
        .expect("get_sales_orders should be registered");

    let schema = tool.parameters_schema();
    let properties = schema["properties"]
        .as_object()
        .expect("properties should be an object");

    let mut keys: Vec<_> = properties.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["api_key", "top"]);
    assert_eq!(schema["properties"]["top"]["type"], "integer");
    assert_eq!(schema["properties"]["api_key"]["type"], "string");
    assert_eq!(schema["required"], serde_json::json!([]));
}
