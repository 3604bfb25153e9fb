pub mod archive;
pub mod assembler;
pub mod associative;
pub mod catalogs;
pub mod context;
pub mod error;
pub mod ffi;
pub mod fields;
pub mod methods;
pub mod naming;
pub mod resolver;
pub mod scaffold;
pub mod types;

pub use archive::{package, GeneratedArchive};
pub use assembler::synthesize;
pub use associative::detect_associatives;
pub use catalogs::{GENERATOR_VERSION, MODEL_VERSION};
pub use context::{entity_contexts, BaseContext, EntityContext};
pub use error::GenerateError;
pub use ffi::{contexts_to_json, synthesize_to_json};
pub use resolver::{classify, ClassIndex, Resolution, SkipReason};
pub use scaffold::{ScaffoldPlan, Template, TemplateRenderer};
pub use types::*;
