//! Rule: dangling-endpoint
//!
//! Reports relationships whose source or target id names no class. The
//! synthesizer drops such edges without a trace.

use umlforge_core::types::UmlDiagram;
use umlforge_core::ClassIndex;

use crate::{LintDiagnostic, LintRule, LintSeverity};

pub struct DanglingEndpointRule;

impl LintRule for DanglingEndpointRule {
    fn id(&self) -> &str {
        "dangling-endpoint"
    }

    fn description(&self) -> &str {
        "Relationships must connect two classes of the diagram"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Error
    }

    fn check(&self, diagram: &UmlDiagram) -> Vec<LintDiagnostic> {
        let index = ClassIndex::new(diagram);
        let mut diagnostics = Vec::new();

        for rel in &diagram.relationships {
            let missing: Vec<&str> = [("source", &rel.source_id), ("target", &rel.target_id)]
                .into_iter()
                .filter(|(_, id)| index.position(id).is_none())
                .map(|(end, _)| end)
                .collect();
            if missing.is_empty() {
                continue;
            }
            diagnostics.push(self.diagnostic(
                rel.id.as_str(),
                format!(
                    "Relationship \"{}\" has no class at its {} end ({} -> {}); it will be ignored",
                    rel.id,
                    missing.join(" and "),
                    rel.source_id,
                    rel.target_id
                ),
            ));
        }

        diagnostics
    }
}
