//! FFI-oriented JSON API for cross-language bindings.
//!
//! All functions take string inputs and return JSON strings,
//! minimizing the FFI surface area.

use serde::Serialize;

use crate::context::entity_contexts;
use crate::synthesize;
use crate::types::*;

// ---------------------------------------------------------------------------
// Result envelope (serialized to JSON output)
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct FfiResult<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> FfiResult<T> {
    pub fn ok(data: T) -> String {
        let result = FfiResult {
            success: true,
            data: Some(data),
            error: None,
        };
        serde_json::to_string(&result)
            .unwrap_or_else(|e| error_json(&format!("JSON serialization error: {e}")))
    }
}

/// Failure envelope. Built by hand so it cannot fail itself.
pub fn error_json(message: &str) -> String {
    let message = serde_json::Value::String(message.to_string());
    format!(r#"{{"success":false,"error":{message}}}"#)
}

// ---------------------------------------------------------------------------
// Input parsing
// ---------------------------------------------------------------------------

pub fn parse_diagram(diagram_json: &str) -> Result<UmlDiagram, String> {
    serde_json::from_str(diagram_json).map_err(|e| format!("Invalid diagram JSON: {e}"))
}

/// An empty string means "all defaults".
pub fn parse_project(project_json: &str) -> Result<ProjectInfo, String> {
    if project_json.trim().is_empty() {
        return Ok(ProjectInfo::default());
    }
    serde_json::from_str(project_json).map_err(|e| format!("Invalid project JSON: {e}"))
}

// ---------------------------------------------------------------------------
// Public FFI functions
// ---------------------------------------------------------------------------

/// Synthesize a diagram and return the domain model as JSON.
///
/// Input: diagram JSON + project JSON (may be empty)
/// Output: `{ success, data?: DomainModel, error? }`
pub fn synthesize_to_json(diagram_json: &str, project_json: &str) -> String {
    let diagram = match parse_diagram(diagram_json) {
        Ok(d) => d,
        Err(e) => return error_json(&e),
    };
    let project = match parse_project(project_json) {
        Ok(p) => p,
        Err(e) => return error_json(&e),
    };

    let result = std::panic::catch_unwind(|| synthesize(&diagram, project));
    match result {
        Ok(model) => FfiResult::ok(model),
        Err(_) => error_json("Internal synthesis panic"),
    }
}

/// Synthesize a diagram and return the per-entity binding contexts as JSON.
///
/// Output: `{ success, data?: EntityContext[], error? }`
pub fn contexts_to_json(diagram_json: &str, project_json: &str) -> String {
    let diagram = match parse_diagram(diagram_json) {
        Ok(d) => d,
        Err(e) => return error_json(&e),
    };
    let project = match parse_project(project_json) {
        Ok(p) => p,
        Err(e) => return error_json(&e),
    };

    let result = std::panic::catch_unwind(|| entity_contexts(&synthesize(&diagram, project)));
    match result {
        Ok(contexts) => FfiResult::ok(contexts),
        Err(_) => error_json("Internal synthesis panic"),
    }
}
