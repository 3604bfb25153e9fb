//! Packaging of rendered project files into a single zip archive.

use std::io::{Cursor, Write};

use log::{debug, info};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::catalogs::ARCHIVE_CONTENT_TYPE;
use crate::error::GenerateError;
use crate::scaffold::{ScaffoldPlan, TemplateRenderer};
use crate::types::DomainModel;

/// A packaged project ready for delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedArchive {
    /// Suggested download name, `<artifactId>.zip`.
    pub file_name: String,
    pub content_type: &'static str,
    /// Number of entries in the archive.
    pub file_count: usize,
    pub bytes: Vec<u8>,
}

impl GeneratedArchive {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Render every planned file and pack them, in plan order.
///
/// Entries carry a fixed timestamp so the same model always yields the same
/// bytes. The first failure aborts; no partial archive is returned.
pub fn package(
    model: &DomainModel,
    renderer: &dyn TemplateRenderer,
) -> Result<GeneratedArchive, GenerateError> {
    let plan = ScaffoldPlan::new(model);
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
        .unix_permissions(0o644);

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for file in &plan.files {
        let context = serde_json::to_value(&file.context)?;
        let text = renderer.render(file.template, &context)?;
        debug!(path = file.path.as_str(), bytes = text.len(); "Rendered file");

        zip.start_file(file.path.as_str(), options)?;
        zip.write_all(text.as_bytes())?;
    }
    let bytes = zip.finish()?.into_inner();

    info!(
        artifact = model.project.artifact_id.as_str(),
        files = plan.files.len(),
        bytes = bytes.len();
        "Packaged project"
    );

    Ok(GeneratedArchive {
        file_name: format!("{}.zip", model.project.artifact_id),
        content_type: ARCHIVE_CONTENT_TYPE,
        file_count: plan.files.len(),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use super::*;
    use crate::scaffold::Template;
    use crate::types::ProjectInfo;

    struct EchoRenderer;

    impl TemplateRenderer for EchoRenderer {
        fn render(
            &self,
            template: Template,
            context: &serde_json::Value,
        ) -> Result<String, GenerateError> {
            Ok(format!(
                "{} {}",
                template.file_name(),
                context["name"].as_str().unwrap_or("-")
            ))
        }
    }

    struct FailingRenderer;

    impl TemplateRenderer for FailingRenderer {
        fn render(
            &self,
            template: Template,
            _context: &serde_json::Value,
        ) -> Result<String, GenerateError> {
            match template {
                Template::Service => Err(GenerateError::TemplateNotFound(
                    template.file_name().into(),
                )),
                _ => Ok(String::new()),
            }
        }
    }

    fn model() -> DomainModel {
        let diagram = serde_json::from_str(r#"{"classes":[{"id":"1","name":"Pet"}]}"#).unwrap();
        crate::synthesize(&diagram, ProjectInfo::default())
    }

    #[test]
    fn packages_every_planned_file() {
        let archive = package(&model(), &EchoRenderer).unwrap();
        assert_eq!(archive.file_name, "generated-api.zip");
        assert_eq!(archive.content_type, "application/zip");
        assert_eq!(archive.file_count, 7);
        assert!(!archive.is_empty());

        let mut zip = zip::ZipArchive::new(Cursor::new(archive.bytes)).unwrap();
        assert_eq!(zip.len(), archive.file_count);
        assert_eq!(zip.by_index(0).unwrap().name(), "generated-api/pom.xml");

        let mut text = String::new();
        zip.by_name("generated-api/src/main/java/com/acme/generated/domain/Pet.java")
            .unwrap()
            .read_to_string(&mut text)
            .unwrap();
        assert_eq!(text, "Entity.java.j2 Pet");
    }

    #[test]
    fn output_is_reproducible() {
        let a = package(&model(), &EchoRenderer).unwrap();
        let b = package(&model(), &EchoRenderer).unwrap();
        assert_eq!(a.bytes, b.bytes);
    }

    #[test]
    fn render_failure_aborts() {
        let err = package(&model(), &FailingRenderer).unwrap_err();
        assert!(matches!(err, GenerateError::TemplateNotFound(ref t) if t == "Service.java.j2"));
    }
}
