//! umlforge diagram linter: configurable rules for diagram quality.
//!
//! Synthesis never fails on a sloppy diagram; it silently drops or rewrites
//! what it cannot use. The rules here report those cases up front.

mod rules;

pub use rules::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use umlforge_core::ffi::{error_json, parse_diagram, FfiResult};
use umlforge_core::types::UmlDiagram;

// ---------------------------------------------------------------------------
// Lint severity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LintSeverity {
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for LintSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            LintSeverity::Error => "error",
            LintSeverity::Warning => "warning",
            LintSeverity::Info => "info",
        })
    }
}

// ---------------------------------------------------------------------------
// Lint diagnostic
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LintDiagnostic {
    pub rule: String,
    pub severity: LintSeverity,
    /// Diagram element the finding is about: a relationship id, a class name,
    /// or `Class.member`.
    pub element: String,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Lint rule trait
// ---------------------------------------------------------------------------

/// Trait that all lint rules must implement.
pub trait LintRule: Send + Sync {
    /// Unique rule identifier (e.g., "dangling-endpoint").
    fn id(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> &str;

    /// Default severity.
    fn default_severity(&self) -> LintSeverity;

    /// Run the rule against a diagram and return diagnostics.
    fn check(&self, diagram: &UmlDiagram) -> Vec<LintDiagnostic>;

    fn diagnostic(&self, element: impl Into<String>, message: String) -> LintDiagnostic
    where
        Self: Sized,
    {
        LintDiagnostic {
            rule: self.id().into(),
            severity: self.default_severity(),
            element: element.into(),
            message,
        }
    }
}

// ---------------------------------------------------------------------------
// Lint configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleLevel {
    Off,
    #[default]
    Warn,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LintConfig {
    #[serde(default)]
    pub rules: HashMap<String, RuleLevel>,
}

impl LintConfig {
    /// Check if a rule is enabled (not off).
    pub fn is_enabled(&self, rule_id: &str) -> bool {
        !matches!(self.rules.get(rule_id), Some(RuleLevel::Off))
    }

    /// Get the configured severity for a rule, or its default.
    pub fn severity_for(&self, rule: &dyn LintRule) -> LintSeverity {
        match self.rules.get(rule.id()) {
            Some(RuleLevel::Error) => LintSeverity::Error,
            Some(RuleLevel::Warn) => LintSeverity::Warning,
            Some(RuleLevel::Off) => LintSeverity::Warning,
            None => rule.default_severity(),
        }
    }
}

// ---------------------------------------------------------------------------
// Linter engine
// ---------------------------------------------------------------------------

pub struct Linter {
    rules: Vec<Box<dyn LintRule>>,
    config: LintConfig,
}

impl Linter {
    /// Create a new linter with all built-in rules.
    pub fn new(config: LintConfig) -> Self {
        Self {
            rules: builtin_rules(),
            config,
        }
    }

    /// Get a reference to the registered rules.
    pub fn rules(&self) -> &[Box<dyn LintRule>] {
        &self.rules
    }

    /// Run all enabled rules against the diagram, in rule order.
    pub fn lint(&self, diagram: &UmlDiagram) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();

        for rule in &self.rules {
            if self.config.is_enabled(rule.id()) {
                let severity = self.config.severity_for(rule.as_ref());
                let mut results = rule.check(diagram);
                for d in &mut results {
                    d.severity = severity.clone();
                }
                diagnostics.extend(results);
            }
        }

        diagnostics
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new(LintConfig::default())
    }
}

/// Return all built-in lint rules.
fn builtin_rules() -> Vec<Box<dyn LintRule>> {
    vec![
        Box::new(DanglingEndpointRule),
        Box::new(UnknownCardinalityRule),
        Box::new(ForeignKeyAttributeRule),
        Box::new(JoinEntityArityRule),
        Box::new(IdentifierSanitizedRule),
    ]
}

// ---------------------------------------------------------------------------
// JSON API (shared by the wasm and C ABI bindings)
// ---------------------------------------------------------------------------

/// Lint a diagram and return diagnostics as JSON.
///
/// Input: diagram JSON + lint config JSON `{ rules?: { id: level } }` (may be empty)
/// Output: `{ success, data?: LintDiagnostic[], error? }`
pub fn lint_to_json(diagram_json: &str, config_json: &str) -> String {
    let diagram = match parse_diagram(diagram_json) {
        Ok(d) => d,
        Err(e) => return error_json(&e),
    };
    let config: LintConfig = if config_json.trim().is_empty() {
        LintConfig::default()
    } else {
        match serde_json::from_str(config_json) {
            Ok(c) => c,
            Err(e) => return error_json(&format!("Invalid lint config JSON: {e}")),
        }
    };

    FfiResult::ok(Linter::new(config).lint(&diagram))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
