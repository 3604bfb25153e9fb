mod commands;
mod reader;
mod renderer;

use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use log::{debug, LevelFilter};

use commands::generate::ModelSource;
use reader::ProjectArgs;

#[derive(Parser)]
#[command(
    name = "umlforge",
    version,
    about = "umlforge: synthesize JPA-style domain models and project skeletons from UML class diagrams"
)]
struct Cli {
    /// Log level: off, error, warn, info, debug or trace
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(flatten)]
    project: ProjectArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize a diagram and output the domain model as JSON
    Synthesize {
        /// Diagram JSON file
        diagram: PathBuf,

        /// Write output to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Output the per-entity binding contexts templates receive
    Context {
        /// Diagram JSON file
        diagram: PathBuf,

        /// Only this entity
        #[arg(long)]
        entity: Option<String>,
    },

    /// Render a project skeleton and package it as a zip archive
    Generate {
        /// Diagram JSON file
        #[arg(required_unless_present = "model", conflicts_with = "model")]
        diagram: Option<PathBuf>,

        /// Package an already synthesized domain model JSON file instead of a diagram
        #[arg(long)]
        model: Option<PathBuf>,

        /// Directory holding the *.j2 templates
        #[arg(long)]
        templates: PathBuf,

        /// Archive file (*.zip) or directory to write <artifactId>.zip into
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Lint a diagram for relationships and members synthesis would drop or rewrite
    Lint {
        /// Diagram JSON file
        diagram: PathBuf,

        /// Output format: human (default), json or sarif
        #[arg(long, default_value = "human")]
        format: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let log_level = LevelFilter::from_str(&cli.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", cli.log_level);
        LevelFilter::Warn
    });
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();
    debug!(log_level:?; "Starting umlforge");

    let project = &cli.project;
    let result = match cli.command {
        Commands::Synthesize { diagram, output } => {
            commands::synthesize::run_synthesize(&diagram, output.as_deref(), project)
                .map(|out| println!("{out}"))
        }
        Commands::Context { diagram, entity } => {
            commands::context::run_context(&diagram, entity.as_deref(), project)
                .map(|out| println!("{out}"))
        }
        Commands::Generate {
            diagram,
            model,
            templates,
            output,
        } => {
            let source = match (model.as_deref(), diagram.as_deref()) {
                (Some(path), _) => Ok(ModelSource::Model(path)),
                (None, Some(path)) => Ok(ModelSource::Diagram(path)),
                (None, None) => Err("A diagram file or --model is required".to_string()),
            };
            source
                .and_then(|source| {
                    commands::generate::run_generate(source, &templates, output.as_deref(), project)
                })
                .map(|out| println!("{out}"))
        }
        Commands::Lint { diagram, format } => {
            commands::lint::run_lint(&diagram, &format, project).map(|(out, error_count)| {
                println!("{out}");
                if error_count > 0 {
                    process::exit(1);
                }
            })
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
