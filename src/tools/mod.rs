//! Tool system.
//!
//! Tools are the hosting runtime's interface to this crate. Each tool
//! publishes a JSON Schema for its parameters and returns a [`ToolOutput`];
//! the [`ToolRegistry`] looks tools up by name and applies the caller-side
//! execution timeout.

pub mod builtin;
pub mod redaction;

mod registry;
mod tool;

pub use registry::ToolRegistry;
pub use tool::{
    Tool, ToolError, ToolOutput, ToolSchema, optional_str, optional_u64, validate_tool_schema,
};
