//! Relationship resolution.
//!
//! Every diagram edge is first classified into a [`Resolution`] and then applied
//! to the entity arena. Classification follows a fixed priority:
//! generalization, associative endpoint, composition/aggregation, dependency,
//! and finally the cardinality pair.

use std::collections::{HashMap, HashSet};

use log::trace;

use crate::associative::detect_associatives;
use crate::naming::{foreign_key, join_table, pair_key, var_name};
use crate::types::*;

/// Classes of a diagram addressable by id, in declaration order.
///
/// The entity arena built by the assembler uses the same positions, so an
/// index returned here addresses both the class and its entity.
pub struct ClassIndex<'a> {
    classes: Vec<&'a UmlClass>,
    by_id: HashMap<&'a str, usize>,
    associatives: HashSet<&'a str>,
}

impl<'a> ClassIndex<'a> {
    /// Index a diagram. When two classes share an id the first one wins, and
    /// only the kept class decides whether the id is a join entity.
    pub fn new(diagram: &'a UmlDiagram) -> Self {
        let mut classes = Vec::new();
        let mut by_id = HashMap::new();
        for class in &diagram.classes {
            if by_id.contains_key(class.id.as_str()) {
                trace!(class_id = class.id.as_str(); "ignoring class with duplicate id");
                continue;
            }
            by_id.insert(class.id.as_str(), classes.len());
            classes.push(class);
        }
        let associatives = detect_associatives(classes.iter().copied());
        Self {
            classes,
            by_id,
            associatives,
        }
    }

    pub fn classes(&self) -> &[&'a UmlClass] {
        &self.classes
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    pub fn is_associative(&self, id: &str) -> bool {
        self.associatives.contains(id)
    }
}

/// Why an edge produced no mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingEndpoint,
    UnknownCardinality,
}

/// What a single edge turns into. Indices address the entity arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Generalization { child: usize, parent: usize },
    /// Edge touching a join entity, rewritten as many-to-one from the join.
    Associative { join: usize, other: usize },
    /// Composition (`cascade = true`) or aggregation.
    Containment { child: usize, parent: usize, cascade: bool },
    Dependency { dependent: usize, target: usize },
    OneToOne { owner: usize, inverse: usize },
    ManyToMany { owner: usize, inverse: usize },
    ManyToOne { many: usize, one: usize },
    Skip(SkipReason),
}

/// Decide what an edge means without touching any entity.
pub fn classify(index: &ClassIndex<'_>, rel: &UmlRelationship) -> Resolution {
    let (Some(source), Some(target)) = (index.position(&rel.source_id), index.position(&rel.target_id))
    else {
        return Resolution::Skip(SkipReason::MissingEndpoint);
    };

    let kind = rel.kind();
    if kind == RelationshipKind::Generalization {
        return Resolution::Generalization {
            child: source,
            parent: target,
        };
    }

    if index.is_associative(&rel.target_id) {
        return Resolution::Associative {
            join: target,
            other: source,
        };
    }
    if index.is_associative(&rel.source_id) {
        return Resolution::Associative {
            join: source,
            other: target,
        };
    }

    match kind {
        RelationshipKind::Composition | RelationshipKind::Aggregation => {
            return Resolution::Containment {
                child: source,
                parent: target,
                cascade: kind == RelationshipKind::Composition,
            };
        }
        RelationshipKind::Dependency => {
            return Resolution::Dependency {
                dependent: source,
                target,
            };
        }
        _ => {}
    }

    let (m_src, m_tgt) = (rel.source_cardinality(), rel.target_cardinality());
    if m_src == Multiplicity::Unknown || m_tgt == Multiplicity::Unknown {
        return Resolution::Skip(SkipReason::UnknownCardinality);
    }

    match (m_src.is_single(), m_tgt.is_single()) {
        (true, true) => Resolution::OneToOne {
            owner: source,
            inverse: target,
        },
        (false, false) => Resolution::ManyToMany {
            owner: source,
            inverse: target,
        },
        (false, true) => Resolution::ManyToOne {
            many: source,
            one: target,
        },
        (true, false) => Resolution::ManyToOne {
            many: target,
            one: source,
        },
    }
}

/// Apply one resolution to the arena. Relations are only ever appended.
pub fn apply(entities: &mut [Entity], resolution: Resolution) {
    match resolution {
        Resolution::Generalization { child, parent } => {
            resolve_generalization(entities, child, parent)
        }
        Resolution::Associative { join, other } => resolve_associative(entities, join, other),
        Resolution::Containment {
            child,
            parent,
            cascade,
        } => resolve_containment(entities, child, parent, cascade),
        Resolution::Dependency { dependent, target } => {
            resolve_dependency(entities, dependent, target)
        }
        Resolution::OneToOne { owner, inverse } => resolve_one_to_one(entities, owner, inverse),
        Resolution::ManyToMany { owner, inverse } => {
            resolve_many_to_many(entities, owner, inverse)
        }
        Resolution::ManyToOne { many, one } => link_many_to_one(entities, many, one, false),
        Resolution::Skip(_) => {}
    }
}

/// Resolve every relationship of the diagram onto the arena, in edge order.
pub fn resolve_relationships(index: &ClassIndex<'_>, diagram: &UmlDiagram, entities: &mut [Entity]) {
    for rel in &diagram.relationships {
        let resolution = classify(index, rel);
        if let Resolution::Skip(reason) = resolution {
            trace!(relationship = rel.id.as_str(), reason:?; "skipping relationship");
        }
        apply(entities, resolution);
    }
}

fn resolve_generalization(entities: &mut [Entity], child: usize, parent: usize) {
    let child_name = entities[child].name.clone();
    entities[child].parent = Some(entities[parent].name.clone());
    entities[parent].children.push(child_name);
}

fn resolve_associative(entities: &mut [Entity], join: usize, other: usize) {
    link_many_to_one(entities, join, other, false);
}

fn resolve_containment(entities: &mut [Entity], child: usize, parent: usize, cascade: bool) {
    link_many_to_one(entities, child, parent, cascade);
}

/// Same shape as aggregation; never cascades.
fn resolve_dependency(entities: &mut [Entity], dependent: usize, target: usize) {
    link_many_to_one(entities, dependent, target, false);
}

/// `owner` holds `<inverse>_id`; the inverse names the owner's field.
fn resolve_one_to_one(entities: &mut [Entity], owner: usize, inverse: usize) {
    let owner_name = entities[owner].name.clone();
    let inverse_name = entities[inverse].name.clone();

    push(
        &mut entities[owner],
        RelationKind::OneToOne,
        inverse_name.clone(),
        Link::JoinColumn(foreign_key(&inverse_name)),
    );
    push(
        &mut entities[inverse],
        RelationKind::OneToOne,
        owner_name,
        Link::MappedBy(var_name(&inverse_name)),
    );
}

/// Join table is named in edge direction, unlike the sorted pair key.
fn resolve_many_to_many(entities: &mut [Entity], owner: usize, inverse: usize) {
    let owner_name = entities[owner].name.clone();
    let inverse_name = entities[inverse].name.clone();

    push(
        &mut entities[owner],
        RelationKind::ManyToMany,
        inverse_name.clone(),
        Link::JoinTable(join_table(&owner_name, &inverse_name)),
    );
    push(
        &mut entities[inverse],
        RelationKind::ManyToMany,
        owner_name.clone(),
        Link::MappedBy(var_name(&owner_name)),
    );
}

/// MANY_TO_ONE on `many` pointing at `one`, mirrored by ONE_TO_MANY on `one`.
fn link_many_to_one(entities: &mut [Entity], many: usize, one: usize, cascade: bool) {
    let many_name = entities[many].name.clone();
    let one_name = entities[one].name.clone();

    push(
        &mut entities[many],
        RelationKind::ManyToOne,
        one_name.clone(),
        Link::JoinColumn(foreign_key(&one_name)),
    );
    let inverse = push(
        &mut entities[one],
        RelationKind::OneToMany,
        many_name,
        Link::MappedBy(var_name(&one_name)),
    );
    inverse.cascade_all = cascade;
    inverse.orphan_removal = cascade;
}

enum Link {
    JoinColumn(String),
    JoinTable(String),
    MappedBy(String),
}

fn push(owner: &mut Entity, kind: RelationKind, target: String, link: Link) -> &mut Relation {
    let (mut mapped_by, mut join_column, mut join_table) = (None, None, None);
    match link {
        Link::JoinColumn(c) => join_column = Some(c),
        Link::JoinTable(t) => join_table = Some(t),
        Link::MappedBy(m) => mapped_by = Some(m),
    }
    owner.relations.push(Relation {
        kind,
        pair_key: pair_key(&owner.name, &target),
        target,
        mapped_by,
        join_column,
        join_table,
        cascade_all: false,
        orphan_removal: false,
    });
    let last = owner.relations.len() - 1;
    &mut owner.relations[last]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(id: &str, name: &str) -> UmlClass {
        UmlClass {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    fn edge(src: &str, tgt: &str, kind: Option<&str>, card: Option<(&str, &str)>) -> UmlRelationship {
        UmlRelationship {
            id: format!("{src}->{tgt}"),
            source_id: src.into(),
            target_id: tgt.into(),
            rel_type: kind.map(String::from),
            cardinality: card.map(|(s, t)| UmlCardinality {
                source: Some(s.into()),
                target: Some(t.into()),
            }),
        }
    }

    fn diagram(rels: Vec<UmlRelationship>) -> UmlDiagram {
        UmlDiagram {
            classes: vec![class("a", "A"), class("b", "B"), class("ab", "A_B")],
            relationships: rels,
        }
    }

    #[test]
    fn missing_endpoint_is_skipped() {
        let d = diagram(vec![edge("a", "zzz", Some("composition"), None)]);
        let index = ClassIndex::new(&d);
        assert_eq!(
            classify(&index, &d.relationships[0]),
            Resolution::Skip(SkipReason::MissingEndpoint)
        );
    }

    #[test]
    fn generalization_beats_associative() {
        let d = diagram(vec![edge("a", "ab", Some("generalization"), None)]);
        let index = ClassIndex::new(&d);
        assert_eq!(
            classify(&index, &d.relationships[0]),
            Resolution::Generalization { child: 0, parent: 2 }
        );
    }

    #[test]
    fn associative_beats_composition_and_cardinality() {
        let d = diagram(vec![
            edge("a", "ab", Some("composition"), Some(("*", "*"))),
            edge("ab", "b", Some("dependency"), None),
        ]);
        let index = ClassIndex::new(&d);
        assert_eq!(
            classify(&index, &d.relationships[0]),
            Resolution::Associative { join: 2, other: 0 }
        );
        assert_eq!(
            classify(&index, &d.relationships[1]),
            Resolution::Associative { join: 2, other: 1 }
        );
    }

    #[test]
    fn composition_ignores_cardinality() {
        let d = diagram(vec![edge("a", "b", Some("Composition"), Some(("??", "??")))]);
        let index = ClassIndex::new(&d);
        assert_eq!(
            classify(&index, &d.relationships[0]),
            Resolution::Containment {
                child: 0,
                parent: 1,
                cascade: true
            }
        );
    }

    #[test]
    fn cardinality_shapes() {
        let d = diagram(vec![
            edge("a", "b", None, Some(("1", "0..1"))),
            edge("a", "b", Some("association"), Some(("0..*", "1..*"))),
            edge("a", "b", None, Some(("*", "1"))),
            edge("a", "b", None, Some(("0..1", "*"))),
            edge("a", "b", None, Some(("1", "n"))),
            edge("a", "b", None, None),
        ]);
        let index = ClassIndex::new(&d);
        let got: Vec<Resolution> = d.relationships.iter().map(|r| classify(&index, r)).collect();
        assert_eq!(
            got,
            vec![
                Resolution::OneToOne { owner: 0, inverse: 1 },
                Resolution::ManyToMany { owner: 0, inverse: 1 },
                Resolution::ManyToOne { many: 0, one: 1 },
                Resolution::ManyToOne { many: 1, one: 0 },
                Resolution::Skip(SkipReason::UnknownCardinality),
                Resolution::Skip(SkipReason::UnknownCardinality),
            ]
        );
    }

    #[test]
    fn duplicate_class_ids_keep_first() {
        let d = UmlDiagram {
            classes: vec![class("x", "First"), class("x", "Second"), class("y", "Other")],
            relationships: vec![],
        };
        let index = ClassIndex::new(&d);
        assert_eq!(index.classes().len(), 2);
        assert_eq!(index.classes()[0].name, "First");
        assert_eq!(index.position("y"), Some(1));
    }

    #[test]
    fn dropped_duplicate_does_not_make_a_join_entity() {
        let d = UmlDiagram {
            classes: vec![
                class("x", "Order"),
                class("x", "Order_Line"),
                class("c", "Customer"),
            ],
            relationships: vec![edge("c", "x", None, Some(("1", "1")))],
        };
        let index = ClassIndex::new(&d);
        assert!(!index.is_associative("x"));
        assert_eq!(
            classify(&index, &d.relationships[0]),
            Resolution::OneToOne { owner: 1, inverse: 0 }
        );
    }

    #[test]
    fn kept_join_entity_survives_plain_duplicate() {
        let d = UmlDiagram {
            classes: vec![class("x", "Order_Line"), class("x", "Order")],
            relationships: vec![],
        };
        assert!(ClassIndex::new(&d).is_associative("x"));
    }

    #[test]
    fn self_referencing_many_to_one() {
        let mut entities = vec![Entity {
            name: "Employee".into(),
            table: "employee".into(),
            fields: vec![],
            methods: vec![],
            relations: vec![],
            parent: None,
            children: vec![],
        }];
        apply(&mut entities, Resolution::ManyToOne { many: 0, one: 0 });
        let rels = &entities[0].relations;
        assert_eq!(rels.len(), 2);
        assert_eq!(rels[0].kind, RelationKind::ManyToOne);
        assert_eq!(rels[0].join_column.as_deref(), Some("employee_id"));
        assert_eq!(rels[1].kind, RelationKind::OneToMany);
        assert_eq!(rels[1].mapped_by.as_deref(), Some("employee"));
        assert_eq!(rels[1].pair_key, "employee-employee");
    }
}
