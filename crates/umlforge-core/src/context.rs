//! Binding contexts handed to the template renderer.
//!
//! Field names are the template variables, so they must not change.

use serde::Serialize;

use crate::naming::{upper_first, var_name};
use crate::types::*;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseContext {
    pub group_id: String,
    pub artifact_id: String,
    pub package_base: String,
    pub package_path: String,
    #[serde(rename = "db_h2")]
    pub db_h2: bool,
    #[serde(rename = "db_postgres")]
    pub db_postgres: bool,
    #[serde(rename = "db_mysql")]
    pub db_mysql: bool,
    pub db_name: Option<String>,
    pub db_user: Option<String>,
    pub db_password: Option<String>,
}

impl BaseContext {
    pub fn new(project: &ProjectInfo) -> Self {
        let db = project.db_kind();
        Self {
            group_id: project.group_id.clone(),
            artifact_id: project.artifact_id.clone(),
            package_base: project.package_base.clone(),
            package_path: project.package_path(),
            db_h2: db == Some(DbKind::H2),
            db_postgres: db == Some(DbKind::Postgres),
            db_mysql: db == Some(DbKind::Mysql),
            db_name: project.db_name.clone(),
            db_user: project.db_user.clone(),
            db_password: project.db_password.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldContext {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub is_id: bool,
    pub nullable: bool,
    pub unique: bool,
    /// Capitalized name for accessors (`getName`).
    #[serde(rename = "Name")]
    pub cap_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodContext {
    pub name: String,
    pub return_type: String,
    pub params_sig: String,
    pub has_return: bool,
    pub return_expr: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationContext {
    pub target: String,
    pub target_var: String,
    pub target_var_cap: String,
    pub mapped_by: Option<String>,
    pub join_column: Option<String>,
    pub join_table: Option<String>,
    pub cascade_all: bool,
    pub orphan_removal: bool,
    pub json_ref: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityContext {
    #[serde(flatten)]
    pub base: BaseContext,
    pub name: String,
    pub var_name: String,
    pub table: String,
    pub fields: Vec<FieldContext>,
    pub methods: Vec<MethodContext>,
    pub one_to_many: Vec<RelationContext>,
    pub many_to_one: Vec<RelationContext>,
    pub one_to_one_owning: Vec<RelationContext>,
    pub one_to_one_inverse: Vec<RelationContext>,
    pub many_to_many_owning: Vec<RelationContext>,
    pub many_to_many_inverse: Vec<RelationContext>,
    pub parent_name: Option<String>,
    pub is_child: bool,
    pub is_parent: bool,
}

impl EntityContext {
    pub fn new(base: &BaseContext, entity: &Entity) -> Self {
        let table = if entity.table.is_empty() {
            entity.name.to_lowercase()
        } else {
            entity.table.clone()
        };

        let mut ctx = Self {
            base: base.clone(),
            name: entity.name.clone(),
            var_name: var_name(&entity.name),
            table,
            fields: entity.fields.iter().map(field_context).collect(),
            methods: entity.methods.iter().map(method_context).collect(),
            one_to_many: Vec::new(),
            many_to_one: Vec::new(),
            one_to_one_owning: Vec::new(),
            one_to_one_inverse: Vec::new(),
            many_to_many_owning: Vec::new(),
            many_to_many_inverse: Vec::new(),
            parent_name: entity.parent.clone(),
            is_child: entity.parent.is_some(),
            is_parent: !entity.children.is_empty(),
        };

        for rel in &entity.relations {
            let rc = relation_context(rel);
            let bucket = match (rel.kind, rel.is_inverse()) {
                (RelationKind::OneToMany, _) => &mut ctx.one_to_many,
                (RelationKind::ManyToOne, _) => &mut ctx.many_to_one,
                (RelationKind::OneToOne, false) => &mut ctx.one_to_one_owning,
                (RelationKind::OneToOne, true) => &mut ctx.one_to_one_inverse,
                (RelationKind::ManyToMany, false) => &mut ctx.many_to_many_owning,
                (RelationKind::ManyToMany, true) => &mut ctx.many_to_many_inverse,
            };
            bucket.push(rc);
        }

        ctx
    }
}

fn field_context(f: &Field) -> FieldContext {
    FieldContext {
        name: f.name.clone(),
        field_type: f.field_type.qualified_name().to_string(),
        is_id: f.is_id,
        nullable: f.nullable,
        unique: f.unique,
        cap_name: upper_first(&f.name),
    }
}

fn method_context(m: &Method) -> MethodContext {
    MethodContext {
        name: m.name.clone(),
        return_type: m.return_type.as_str().to_string(),
        params_sig: m.params_sig.clone(),
        has_return: m.has_return,
        return_expr: m.return_expr.clone(),
    }
}

fn relation_context(r: &Relation) -> RelationContext {
    let target_var = var_name(&r.target);
    RelationContext {
        target: r.target.clone(),
        target_var_cap: upper_first(&target_var),
        target_var,
        mapped_by: r.mapped_by.clone(),
        join_column: r.join_column.clone(),
        join_table: r.join_table.clone(),
        cascade_all: r.cascade_all,
        orphan_removal: r.orphan_removal,
        json_ref: r.pair_key.clone(),
    }
}

/// Contexts for every entity, in entity order.
pub fn entity_contexts(model: &DomainModel) -> Vec<EntityContext> {
    let base = BaseContext::new(&model.project);
    model
        .entities
        .iter()
        .map(|e| EntityContext::new(&base, e))
        .collect()
}
