use std::path::Path;

use umlforge_core::{entity_contexts, synthesize};

use crate::reader::{load_settings, read_diagram, ProjectArgs};

/// Print the binding contexts templates receive, for every entity or just one.
pub fn run_context(
    diagram_path: &Path,
    entity: Option<&str>,
    args: &ProjectArgs,
) -> Result<String, String> {
    let diagram = read_diagram(diagram_path)?;
    let settings = load_settings(diagram_path, args)?;
    let contexts = entity_contexts(&synthesize(&diagram, settings.project));

    let value = match entity {
        Some(name) => {
            let ctx = contexts
                .iter()
                .find(|c| c.name == name)
                .or_else(|| contexts.iter().find(|c| c.name.eq_ignore_ascii_case(name)))
                .ok_or_else(|| {
                    let known: Vec<&str> = contexts.iter().map(|c| c.name.as_str()).collect();
                    format!("No entity named \"{name}\" (entities: {})", known.join(", "))
                })?;
            serde_json::to_string_pretty(ctx)
        }
        None => serde_json::to_string_pretty(&contexts),
    };

    value.map_err(|e| format!("JSON serialization error: {e}"))
}
