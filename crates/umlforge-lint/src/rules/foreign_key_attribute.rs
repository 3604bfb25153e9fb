//! Rule: foreign-key-attribute
//!
//! Attributes named like a foreign key (`*_id`) never become fields; the
//! column comes from a relationship instead. Reported so the modeller can
//! draw the relationship.

use umlforge_core::naming::{is_foreign_key, sanitize};
use umlforge_core::types::UmlDiagram;

use crate::{LintDiagnostic, LintRule, LintSeverity};

pub struct ForeignKeyAttributeRule;

impl LintRule for ForeignKeyAttributeRule {
    fn id(&self) -> &str {
        "foreign-key-attribute"
    }

    fn description(&self) -> &str {
        "Foreign keys should be modelled as relationships, not attributes"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Info
    }

    fn check(&self, diagram: &UmlDiagram) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();

        for class in &diagram.classes {
            for attr in &class.attributes {
                if attr.name.trim().is_empty() || !is_foreign_key(&sanitize(&attr.name)) {
                    continue;
                }
                diagnostics.push(self.diagnostic(
                    format!("{}.{}", class.name, attr.name),
                    format!(
                        "Attribute \"{}\" of \"{}\" looks like a foreign key and will be dropped; draw a relationship instead",
                        attr.name, class.name
                    ),
                ));
            }
        }

        diagnostics
    }
}
