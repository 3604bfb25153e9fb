use std::path::Path;

use umlforge_lint::{LintDiagnostic, LintSeverity, Linter};

use crate::reader::{load_settings, read_diagram, ProjectArgs};

/// Returns the report and the number of error-level findings.
pub fn run_lint(
    diagram_path: &Path,
    format: &str,
    args: &ProjectArgs,
) -> Result<(String, usize), String> {
    let diagram = read_diagram(diagram_path)?;
    let settings = load_settings(diagram_path, args)?;

    let linter = Linter::new(settings.lint);
    let results = linter.lint(&diagram);
    let error_count = results
        .iter()
        .filter(|d| d.severity == LintSeverity::Error)
        .count();
    let file = diagram_path.display().to_string();

    let output = match format {
        "json" => serde_json::to_string_pretty(&serde_json::json!({
            "diagnostics": results,
            "summary": {
                "count": results.len(),
                "errors": error_count,
                "file": file,
            }
        }))
        .map_err(|e| format!("JSON serialization error: {e}"))?,
        "sarif" => serde_json::to_string_pretty(&build_sarif(&results, &linter, &file))
            .map_err(|e| format!("SARIF serialization error: {e}"))?,
        _ => {
            // Human-readable format
            let mut lines: Vec<String> = results
                .iter()
                .map(|d| format!("{file}: {}[{}] {}: {}", d.severity, d.rule, d.element, d.message))
                .collect();

            let count = results.len();
            let issue_word = if count == 1 { "issue" } else { "issues" };
            lines.push(format!("{count} lint {issue_word} in {file}."));
            lines.join("\n")
        }
    };

    Ok((output, error_count))
}

fn sarif_level(severity: &LintSeverity) -> &'static str {
    match severity {
        LintSeverity::Error => "error",
        LintSeverity::Warning => "warning",
        LintSeverity::Info => "note",
    }
}

fn build_sarif(results: &[LintDiagnostic], linter: &Linter, file: &str) -> serde_json::Value {
    let rule_descriptors: Vec<serde_json::Value> = linter
        .rules()
        .iter()
        .map(|r| {
            serde_json::json!({
                "id": r.id(),
                "shortDescription": { "text": r.description() },
                "defaultConfiguration": { "level": sarif_level(&r.default_severity()) }
            })
        })
        .collect();

    let sarif_results: Vec<serde_json::Value> = results
        .iter()
        .map(|d| {
            serde_json::json!({
                "ruleId": d.rule,
                "level": sarif_level(&d.severity),
                "message": { "text": d.message },
                "locations": [{
                    "physicalLocation": { "artifactLocation": { "uri": file } },
                    "logicalLocations": [{ "fullyQualifiedName": d.element }]
                }]
            })
        })
        .collect();

    serde_json::json!({
        "$schema": "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/main/sarif-2.1/schema/sarif-schema-2.1.0.json",
        "version": "2.1.0",
        "runs": [{
            "tool": {
                "driver": {
                    "name": "umlforge-lint",
                    "version": env!("CARGO_PKG_VERSION"),
                    "rules": rule_descriptors
                }
            },
            "results": sarif_results
        }]
    })
}
