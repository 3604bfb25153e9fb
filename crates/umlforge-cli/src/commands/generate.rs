use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use umlforge_core::types::DomainModel;
use umlforge_core::{package, synthesize};

use crate::reader::{load_settings, read_diagram, read_model, ProjectArgs};
use crate::renderer::DirectoryRenderer;

/// Where the domain model to package comes from.
pub enum ModelSource<'a> {
    /// A raw diagram, synthesized with project settings from flags and config.
    Diagram(&'a Path),
    /// An already synthesized model. Its own project info is used, with flags
    /// applied on top.
    Model(&'a Path),
}

impl ModelSource<'_> {
    fn load(&self, args: &ProjectArgs) -> Result<DomainModel, String> {
        match *self {
            ModelSource::Diagram(path) => {
                let diagram = read_diagram(path)?;
                let settings = load_settings(path, args)?;
                Ok(synthesize(&diagram, settings.project))
            }
            ModelSource::Model(path) => {
                let mut model = read_model(path)?;
                args.apply_to(&mut model.project);
                Ok(model)
            }
        }
    }
}

/// Render the project skeleton and write it as a zip archive.
///
/// `output` ending in `.zip` names the archive itself; anything else is a
/// directory that receives `<artifactId>.zip`. Defaults to the current directory.
pub fn run_generate(
    source: ModelSource<'_>,
    templates: &Path,
    output: Option<&Path>,
    args: &ProjectArgs,
) -> Result<String, String> {
    let renderer = DirectoryRenderer::new(templates)?;
    let model = source.load(args)?;
    let archive = package(&model, &renderer).map_err(|e| format!("Generation failed: {e}"))?;

    let target = archive_path(output, &archive.file_name);
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
    }
    fs::write(&target, &archive.bytes)
        .map_err(|e| format!("Failed to write {}: {e}", target.display()))?;

    info!(path:? = target, bytes = archive.len(); "Wrote project archive");
    Ok(format!(
        "Written {} ({} files, {} bytes)",
        target.display(),
        archive.file_count,
        archive.len()
    ))
}

fn archive_path(output: Option<&Path>, file_name: &str) -> PathBuf {
    match output {
        Some(p) if p.extension().is_some_and(|e| e.eq_ignore_ascii_case("zip")) => p.to_path_buf(),
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}
