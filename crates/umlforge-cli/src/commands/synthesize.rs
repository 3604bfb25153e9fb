use std::path::Path;

use log::info;
use umlforge_core::synthesize;

use crate::reader::{load_settings, read_diagram, ProjectArgs};

pub fn run_synthesize(
    diagram_path: &Path,
    output_file: Option<&Path>,
    args: &ProjectArgs,
) -> Result<String, String> {
    let diagram = read_diagram(diagram_path)?;
    let settings = load_settings(diagram_path, args)?;
    let model = synthesize(&diagram, settings.project);

    let json = serde_json::to_string_pretty(&model)
        .map_err(|e| format!("JSON serialization error: {e}"))?;

    if let Some(out_path) = output_file {
        std::fs::write(out_path, &json)
            .map_err(|e| format!("Failed to write {}: {e}", out_path.display()))?;
        info!(path:? = out_path, entities = model.entities.len(); "Wrote domain model");
        return Ok(format!("Written to {}", out_path.display()));
    }

    Ok(json)
}
