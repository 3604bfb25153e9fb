//! The fixed list of files a generated project consists of.

use serde::Serialize;

use crate::context::{BaseContext, EntityContext};
use crate::error::GenerateError;
use crate::types::DomainModel;

/// Templates a renderer must be able to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Template {
    Pom,
    ApplicationProperties,
    Application,
    Entity,
    Repository,
    Service,
    Controller,
}

impl Template {
    pub const ALL: [Template; 7] = [
        Template::Pom,
        Template::ApplicationProperties,
        Template::Application,
        Template::Entity,
        Template::Repository,
        Template::Service,
        Template::Controller,
    ];

    /// Template file name, relative to the template root.
    pub fn file_name(self) -> &'static str {
        match self {
            Template::Pom => "pom.xml.j2",
            Template::ApplicationProperties => "application.properties.j2",
            Template::Application => "Application.java.j2",
            Template::Entity => "Entity.java.j2",
            Template::Repository => "Repository.java.j2",
            Template::Service => "Service.java.j2",
            Template::Controller => "Controller.java.j2",
        }
    }
}

/// Turns a template plus a binding context into text. Implementations do
/// substitution only.
pub trait TemplateRenderer {
    fn render(&self, template: Template, context: &serde_json::Value) -> Result<String, GenerateError>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PlannedContext {
    Base(BaseContext),
    Entity(Box<EntityContext>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedFile {
    pub template: Template,
    /// Archive path, `/`-separated and rooted at the artifact id.
    pub path: String,
    pub context: PlannedContext,
}

/// Files in archive order: project files first, then four per entity in
/// entity order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaffoldPlan {
    pub files: Vec<PlannedFile>,
}

impl ScaffoldPlan {
    pub fn new(model: &DomainModel) -> Self {
        let base = BaseContext::new(&model.project);
        let root = model.project.artifact_id.as_str();
        let java = format!("src/main/java/{}", base.package_path);

        let mut files = vec![
            planned(root, Template::Pom, "pom.xml", PlannedContext::Base(base.clone())),
            planned(
                root,
                Template::ApplicationProperties,
                "src/main/resources/application.properties",
                PlannedContext::Base(base.clone()),
            ),
            planned(
                root,
                Template::Application,
                &format!("{java}/Application.java"),
                PlannedContext::Base(base.clone()),
            ),
        ];

        for entity in &model.entities {
            let ctx = EntityContext::new(&base, entity);
            let name = &entity.name;
            let per_entity = [
                (Template::Entity, format!("{java}/domain/{name}.java")),
                (Template::Repository, format!("{java}/repository/{name}Repository.java")),
                (Template::Service, format!("{java}/service/{name}Service.java")),
                (Template::Controller, format!("{java}/web/{name}Controller.java")),
            ];
            for (template, rel) in per_entity {
                files.push(planned(
                    root,
                    template,
                    &rel,
                    PlannedContext::Entity(Box::new(ctx.clone())),
                ));
            }
        }

        Self { files }
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.path.as_str())
    }
}

fn planned(root: &str, template: Template, relative: &str, context: PlannedContext) -> PlannedFile {
    PlannedFile {
        template,
        path: format!("{root}/{relative}").replace('\\', "/"),
        context,
    }
}
