use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use log::debug;
use serde::Deserialize;

use umlforge_core::types::{DomainModel, ProjectInfo, UmlDiagram};
use umlforge_lint::LintConfig;

/// Config file looked up next to the diagram when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "umlforge.config.yaml";

/// Project configuration from umlforge.config.yaml.
#[derive(Debug, Default, Deserialize)]
pub struct UmlforgeConfig {
    #[serde(default)]
    pub project: ProjectSection,
    #[serde(default)]
    pub lint: LintConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSection {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub package_base: Option<String>,
    pub db: Option<String>,
    pub db_name: Option<String>,
    pub db_user: Option<String>,
    pub db_password: Option<String>,
}

/// Project flags shared by every subcommand. Flags win over the config file.
#[derive(Debug, Default, Args)]
pub struct ProjectArgs {
    /// Config file (defaults to umlforge.config.yaml next to the diagram)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Maven group id of the generated project
    #[arg(long, global = true)]
    pub group_id: Option<String>,

    /// Maven artifact id, also the archive root directory
    #[arg(long, global = true)]
    pub artifact_id: Option<String>,

    /// Base Java package
    #[arg(long, global = true)]
    pub package_base: Option<String>,

    /// Database kind: h2, postgres or mysql
    #[arg(long, global = true)]
    pub db: Option<String>,

    #[arg(long, global = true)]
    pub db_name: Option<String>,

    #[arg(long, global = true)]
    pub db_user: Option<String>,

    #[arg(long, global = true)]
    pub db_password: Option<String>,
}

impl ProjectArgs {
    /// Overwrite the fields of `project` that were given as flags.
    pub fn apply_to(&self, project: &mut ProjectInfo) {
        let set = |field: &mut String, flag: &Option<String>| {
            if let Some(v) = flag {
                field.clone_from(v);
            }
        };
        set(&mut project.group_id, &self.group_id);
        set(&mut project.artifact_id, &self.artifact_id);
        set(&mut project.package_base, &self.package_base);
        set(&mut project.db, &self.db);

        let set_opt = |field: &mut Option<String>, flag: &Option<String>| {
            if flag.is_some() {
                field.clone_from(flag);
            }
        };
        set_opt(&mut project.db_name, &self.db_name);
        set_opt(&mut project.db_user, &self.db_user);
        set_opt(&mut project.db_password, &self.db_password);
    }
}

/// Everything a command needs besides the diagram itself.
#[derive(Debug)]
pub struct Settings {
    pub project: ProjectInfo,
    pub lint: LintConfig,
}

/// Read a diagram JSON file.
pub fn read_diagram(path: &Path) -> Result<UmlDiagram, String> {
    if !path.is_file() {
        return Err(format!("Diagram file does not exist: {}", path.display()));
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let diagram: UmlDiagram = serde_json::from_str(&content)
        .map_err(|e| format!("Invalid diagram JSON in {}: {}", path.display(), e))?;

    debug!(
        classes = diagram.classes.len(),
        relationships = diagram.relationships.len();
        "Read diagram"
    );
    Ok(diagram)
}

/// Read a domain model JSON file, as written by `umlforge synthesize`.
pub fn read_model(path: &Path) -> Result<DomainModel, String> {
    if !path.is_file() {
        return Err(format!("Model file does not exist: {}", path.display()));
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let model: DomainModel = serde_json::from_str(&content)
        .map_err(|e| format!("Invalid model JSON in {}: {}", path.display(), e))?;

    debug!(entities = model.entities.len(); "Read domain model");
    Ok(model)
}

/// Read the config file. An explicit path must exist; the implicit one next to
/// the diagram is optional.
pub fn read_config(diagram_path: &Path, explicit: Option<&Path>) -> Result<UmlforgeConfig, String> {
    let config_path = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(format!("Config file does not exist: {}", path.display()));
            }
            path.to_path_buf()
        }
        None => {
            let dir = diagram_path.parent().unwrap_or_else(|| Path::new("."));
            let candidate = dir.join(CONFIG_FILE_NAME);
            if !candidate.is_file() {
                return Ok(UmlforgeConfig::default());
            }
            candidate
        }
    };

    let content = fs::read_to_string(&config_path)
        .map_err(|e| format!("Failed to read {}: {}", config_path.display(), e))?;
    debug!(path:? = config_path; "Loaded config");
    serde_yaml::from_str(&content)
        .map_err(|e| format!("Invalid config {}: {}", config_path.display(), e))
}

/// Resolve project settings: flag, then config file, then built-in default.
pub fn load_settings(diagram_path: &Path, args: &ProjectArgs) -> Result<Settings, String> {
    let config = read_config(diagram_path, args.config.as_deref())?;
    let file = config.project;
    let defaults = ProjectInfo::default();

    let pick = |flag: &Option<String>, file: Option<String>| flag.clone().or(file);

    let project = ProjectInfo {
        group_id: pick(&args.group_id, file.group_id).unwrap_or(defaults.group_id),
        artifact_id: pick(&args.artifact_id, file.artifact_id).unwrap_or(defaults.artifact_id),
        package_base: pick(&args.package_base, file.package_base)
            .unwrap_or(defaults.package_base),
        db: pick(&args.db, file.db).unwrap_or(defaults.db),
        db_name: pick(&args.db_name, file.db_name),
        db_user: pick(&args.db_user, file.db_user),
        db_password: pick(&args.db_password, file.db_password),
    };

    Ok(Settings {
        project,
        lint: config.lint,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_yaml_sections() {
        let yaml = "project:\n  artifactId: petshop\n  db: mysql\nlint:\n  rules:\n    join-entity-arity: off\n";
        let config: UmlforgeConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.project.artifact_id.as_deref(), Some("petshop"));
        assert_eq!(config.project.db.as_deref(), Some("mysql"));
        assert!(!config.lint.is_enabled("join-entity-arity"));
    }

    #[test]
    fn flags_override_config_and_defaults_fill_gaps() {
        let dir = tempfile::tempdir().unwrap();
        let diagram = dir.path().join("d.json");
        fs::write(&diagram, "{}").unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "project:\n  artifactId: from-file\n  dbUser: sa\n",
        )
        .unwrap();

        let args = ProjectArgs {
            artifact_id: Some("from-flag".into()),
            ..Default::default()
        };
        let settings = load_settings(&diagram, &args).unwrap();
        assert_eq!(settings.project.artifact_id, "from-flag");
        assert_eq!(settings.project.db_user.as_deref(), Some("sa"));
        assert_eq!(settings.project.group_id, "com.acme");
        assert_eq!(settings.project.db, "h2");
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let args = ProjectArgs {
            config: Some(PathBuf::from("no/such/umlforge.yaml")),
            ..Default::default()
        };
        let err = load_settings(Path::new("d.json"), &args).unwrap_err();
        assert!(err.contains("Config file does not exist"));
    }

    #[test]
    fn flags_patch_an_existing_project() {
        let mut project = ProjectInfo {
            artifact_id: "petshop".into(),
            db_user: Some("sa".into()),
            ..Default::default()
        };
        let args = ProjectArgs {
            db: Some("mysql".into()),
            db_password: Some("secret".into()),
            ..Default::default()
        };
        args.apply_to(&mut project);
        assert_eq!(project.artifact_id, "petshop");
        assert_eq!(project.db, "mysql");
        assert_eq!(project.db_user.as_deref(), Some("sa"));
        assert_eq!(project.db_password.as_deref(), Some("secret"));
    }

    #[test]
    fn model_file_errors() {
        let err = read_model(Path::new("no/such/model.json")).unwrap_err();
        assert!(err.contains("Model file does not exist"));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        fs::write(&path, r#"{"classes":[]}"#).unwrap();
        assert!(read_model(&path).unwrap_err().contains("Invalid model JSON"));
    }

    #[test]
    fn missing_diagram_is_an_error() {
        let err = read_diagram(Path::new("no/such/diagram.json")).unwrap_err();
        assert!(err.contains("does not exist"));
    }
}
