//! Rule: unknown-cardinality
//!
//! Reports association edges the synthesizer skips because their cardinality
//! pair is missing or not one of `1`, `0..1`, `*`, `0..*`, `1..*`.

use umlforge_core::types::UmlDiagram;
use umlforge_core::{classify, ClassIndex, Resolution, SkipReason};

use crate::{LintDiagnostic, LintRule, LintSeverity};

pub struct UnknownCardinalityRule;

impl LintRule for UnknownCardinalityRule {
    fn id(&self) -> &str {
        "unknown-cardinality"
    }

    fn description(&self) -> &str {
        "Associations need a recognized cardinality on both ends"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Warning
    }

    fn check(&self, diagram: &UmlDiagram) -> Vec<LintDiagnostic> {
        let index = ClassIndex::new(diagram);

        diagram
            .relationships
            .iter()
            .filter(|rel| {
                classify(&index, rel) == Resolution::Skip(SkipReason::UnknownCardinality)
            })
            .map(|rel| {
                let (source, target) = rel
                    .cardinality
                    .as_ref()
                    .map(|c| (c.source.as_deref(), c.target.as_deref()))
                    .unwrap_or((None, None));
                self.diagnostic(
                    rel.id.as_str(),
                    format!(
                        "Relationship \"{}\" has cardinality {} -> {}, which maps to no relation; it will be ignored",
                        rel.id,
                        source.unwrap_or("<none>"),
                        target.unwrap_or("<none>")
                    ),
                )
            })
            .collect()
    }
}
