//! Rule: join-entity-arity
//!
//! A class with `_` in its name is treated as a join entity no matter how it
//! is connected. Warns when it is not linked by exactly two relationships.

use umlforge_core::types::UmlDiagram;
use umlforge_core::ClassIndex;

use crate::{LintDiagnostic, LintRule, LintSeverity};

const JOIN_ARITY: usize = 2;

pub struct JoinEntityArityRule;

impl LintRule for JoinEntityArityRule {
    fn id(&self) -> &str {
        "join-entity-arity"
    }

    fn description(&self) -> &str {
        "Join entities should link exactly two classes"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Warning
    }

    fn check(&self, diagram: &UmlDiagram) -> Vec<LintDiagnostic> {
        let index = ClassIndex::new(diagram);
        let mut diagnostics = Vec::new();

        for class in index
            .classes()
            .iter()
            .filter(|c| index.is_associative(&c.id))
        {
            let links = diagram
                .relationships
                .iter()
                .filter(|r| r.source_id == class.id || r.target_id == class.id)
                .count();
            if links != JOIN_ARITY {
                diagnostics.push(self.diagnostic(
                    class.name.as_str(),
                    format!(
                        "\"{}\" is treated as a join entity but has {} relationship(s) (expected {})",
                        class.name, links, JOIN_ARITY
                    ),
                ));
            }
        }

        diagnostics
    }
}
