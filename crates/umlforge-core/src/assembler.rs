use log::debug;

use crate::catalogs::{GENERATOR_VERSION, MODEL_VERSION};
use crate::fields::build_fields;
use crate::methods::build_methods;
use crate::naming::{class_name, table_name};
use crate::resolver::{resolve_relationships, ClassIndex};
use crate::types::*;

/// Synthesize the domain model of a diagram.
///
/// Two passes: one entity per class (in declaration order), then every
/// relationship resolved onto those entities. Invalid relationships are skipped.
pub fn synthesize(diagram: &UmlDiagram, project: ProjectInfo) -> DomainModel {
    let index = ClassIndex::new(diagram);

    let mut entities: Vec<Entity> = index.classes().iter().map(|c| build_entity(c)).collect();
    resolve_relationships(&index, diagram, &mut entities);

    debug!(
        entities = entities.len(),
        relationships = diagram.relationships.len();
        "Synthesized domain model"
    );

    DomainModel {
        generator_version: GENERATOR_VERSION.to_string(),
        model_version: MODEL_VERSION.to_string(),
        project,
        entities,
    }
}

fn build_entity(class: &UmlClass) -> Entity {
    Entity {
        name: class_name(&class.name),
        table: table_name(&class.name),
        fields: build_fields(class),
        methods: build_methods(class),
        relations: Vec::new(),
        parent: None,
        children: Vec::new(),
    }
}
