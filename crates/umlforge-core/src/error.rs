//! Errors raised while generating a project archive.
//!
//! Synthesis itself never fails; only rendering and packaging do, and any of
//! these aborts the whole generation.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    #[error("failed to render {template}: {message}")]
    Render { template: String, message: String },

    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GenerateError {
    pub fn render(template: impl Into<String>, message: impl ToString) -> Self {
        Self::Render {
            template: template.into(),
            message: message.to_string(),
        }
    }
}
