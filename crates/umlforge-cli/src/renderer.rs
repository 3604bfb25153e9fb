//! Directory-backed template renderer.

use std::path::Path;

use minijinja::{path_loader, Environment, ErrorKind};

use umlforge_core::{GenerateError, Template, TemplateRenderer};

/// Loads `<root>/<template file name>` lazily on first use.
pub struct DirectoryRenderer {
    env: Environment<'static>,
}

impl DirectoryRenderer {
    pub fn new(root: &Path) -> Result<Self, String> {
        if !root.is_dir() {
            return Err(format!("Template directory does not exist: {}", root.display()));
        }

        let mut env = Environment::new();
        env.set_loader(path_loader(root.to_path_buf()));
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        Ok(Self { env })
    }
}

impl TemplateRenderer for DirectoryRenderer {
    fn render(&self, template: Template, context: &serde_json::Value) -> Result<String, GenerateError> {
        let name = template.file_name();
        let tmpl = self.env.get_template(name).map_err(|e| match e.kind() {
            ErrorKind::TemplateNotFound => GenerateError::TemplateNotFound(name.into()),
            _ => GenerateError::render(name, e),
        })?;
        tmpl.render(context).map_err(|e| GenerateError::render(name, e))
    }
}
