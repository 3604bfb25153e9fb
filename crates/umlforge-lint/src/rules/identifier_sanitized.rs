//! Rule: identifier-sanitized
//!
//! Reports attribute and method names the synthesizer has to rewrite because
//! they contain characters outside `[A-Za-z0-9_]`.

use umlforge_core::naming::sanitize;
use umlforge_core::types::UmlDiagram;

use crate::{LintDiagnostic, LintRule, LintSeverity};

pub struct IdentifierSanitizedRule;

impl LintRule for IdentifierSanitizedRule {
    fn id(&self) -> &str {
        "identifier-sanitized"
    }

    fn description(&self) -> &str {
        "Member names should be valid identifiers"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Info
    }

    fn check(&self, diagram: &UmlDiagram) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();

        for class in &diagram.classes {
            let members = class
                .attributes
                .iter()
                .map(|a| ("Attribute", a.name.as_str()))
                .chain(class.methods.iter().map(|m| ("Method", m.name.as_str())));

            for (kind, name) in members {
                if name.trim().is_empty() {
                    continue;
                }
                let clean = sanitize(name);
                if clean != name {
                    diagnostics.push(self.diagnostic(
                        format!("{}.{}", class.name, name),
                        format!("{kind} \"{name}\" of \"{}\" will be renamed to \"{clean}\"", class.name),
                    ));
                }
            }
        }

        diagnostics
    }
}
