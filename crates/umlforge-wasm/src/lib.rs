//! umlforge WASM bindings.
//!
//! Provides JavaScript-callable functions via wasm-bindgen, for diagram
//! editors running in the browser. All functions take string inputs and
//! return JSON strings.

use umlforge_core::{contexts_to_json, synthesize_to_json};
use umlforge_lint::lint_to_json;
use wasm_bindgen::prelude::*;

/// Synthesize a diagram into a domain model.
///
/// @param diagram_json - diagram `{ classes, relationships }` as exported by the editor
/// @param project_json - project settings `{ groupId?, artifactId?, packageBase?, db?, ... }` or ""
/// @returns JSON string with `{ success: boolean, data?: DomainModel, error?: string }`
#[wasm_bindgen(js_name = "synthesize")]
pub fn wasm_synthesize(diagram_json: &str, project_json: &str) -> String {
    synthesize_to_json(diagram_json, project_json)
}

/// Synthesize a diagram and return the per-entity template contexts.
///
/// @returns JSON string with `{ success: boolean, data?: EntityContext[], error?: string }`
#[wasm_bindgen(js_name = "contexts")]
pub fn wasm_contexts(diagram_json: &str, project_json: &str) -> String {
    contexts_to_json(diagram_json, project_json)
}

/// Lint a diagram.
///
/// @param config_json - `{ rules?: { [ruleId]: "off" | "warn" | "error" } }` or ""
/// @returns JSON string with `{ success: boolean, data?: LintDiagnostic[], error?: string }`
#[wasm_bindgen(js_name = "lint")]
pub fn wasm_lint(diagram_json: &str, config_json: &str) -> String {
    lint_to_json(diagram_json, config_json)
}
