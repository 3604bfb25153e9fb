use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Diagram input (deserialized from the editor's JSON export)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UmlAttribute {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub attr_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UmlMethod {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
    /// Raw `"name:type, name:type"` parameter spec.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UmlClass {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<UmlAttribute>,
    #[serde(default)]
    pub methods: Vec<UmlMethod>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UmlCardinality {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UmlRelationship {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub source_id: String,
    #[serde(default)]
    pub target_id: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub rel_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cardinality: Option<UmlCardinality>,
}

impl UmlRelationship {
    pub fn kind(&self) -> RelationshipKind {
        RelationshipKind::parse(self.rel_type.as_deref())
    }

    pub fn source_cardinality(&self) -> Multiplicity {
        Multiplicity::parse(self.cardinality.as_ref().and_then(|c| c.source.as_deref()))
    }

    pub fn target_cardinality(&self) -> Multiplicity {
        Multiplicity::parse(self.cardinality.as_ref().and_then(|c| c.target.as_deref()))
    }
}

/// Top-level diagram submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UmlDiagram {
    #[serde(default)]
    pub classes: Vec<UmlClass>,
    #[serde(default)]
    pub relationships: Vec<UmlRelationship>,
}

/// Declared kind tag on a relationship edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationshipKind {
    Generalization,
    Composition,
    Aggregation,
    Dependency,
    Association,
    /// Unset or unrecognized tag; resolved by cardinality like `Association`.
    Other,
}

impl RelationshipKind {
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return RelationshipKind::Other;
        };
        match raw.to_ascii_lowercase().as_str() {
            "generalization" => RelationshipKind::Generalization,
            "composition" => RelationshipKind::Composition,
            "aggregation" => RelationshipKind::Aggregation,
            "dependency" => RelationshipKind::Dependency,
            "association" => RelationshipKind::Association,
            _ => RelationshipKind::Other,
        }
    }
}

/// One end of a cardinality pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Multiplicity {
    One,
    ZeroOrOne,
    Many,
    Unknown,
}

impl Multiplicity {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("1") => Multiplicity::One,
            Some("0..1") => Multiplicity::ZeroOrOne,
            Some("*") | Some("0..*") | Some("1..*") => Multiplicity::Many,
            _ => Multiplicity::Unknown,
        }
    }

    /// `1` and `0..1` branch identically.
    pub fn is_single(self) -> bool {
        matches!(self, Multiplicity::One | Multiplicity::ZeroOrOne)
    }

    pub fn is_many(self) -> bool {
        self == Multiplicity::Many
    }
}

// ---------------------------------------------------------------------------
// Domain model output (serialized to JSON, consumed by the renderer)
// ---------------------------------------------------------------------------

/// Fixed target-type vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    String,
    Integer,
    Long,
    Double,
    Boolean,
    BigDecimal,
    LocalDate,
    LocalDateTime,
}

impl FieldType {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::String => "String",
            FieldType::Integer => "Integer",
            FieldType::Long => "Long",
            FieldType::Double => "Double",
            FieldType::Boolean => "Boolean",
            FieldType::BigDecimal => "BigDecimal",
            FieldType::LocalDate => "LocalDate",
            FieldType::LocalDateTime => "LocalDateTime",
        }
    }

    /// Name usable in generated source without an import.
    pub fn qualified_name(self) -> &'static str {
        match self {
            FieldType::BigDecimal => "java.math.BigDecimal",
            FieldType::LocalDate => "java.time.LocalDate",
            FieldType::LocalDateTime => "java.time.LocalDateTime",
            other => other.as_str(),
        }
    }

    /// Literal a stub method body returns for this type.
    pub fn default_return_expr(self) -> &'static str {
        match self {
            FieldType::String => "\"\"",
            FieldType::Integer => "0",
            FieldType::Long => "0L",
            FieldType::Double => "0.0",
            FieldType::Boolean => "false",
            FieldType::BigDecimal | FieldType::LocalDate | FieldType::LocalDateTime => "null",
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub is_id: bool,
    pub nullable: bool,
    pub unique: bool,
}

/// Return type of a stub method; `Void` means no return value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnType {
    Void,
    Value(FieldType),
}

impl ReturnType {
    pub fn as_str(self) -> &'static str {
        match self {
            ReturnType::Void => "void",
            ReturnType::Value(t) => t.as_str(),
        }
    }
}

impl Serialize for ReturnType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ReturnType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw == "void" {
            return Ok(ReturnType::Void);
        }
        let t: FieldType =
            serde_json::from_value(serde_json::Value::String(raw)).map_err(serde::de::Error::custom)?;
        Ok(ReturnType::Value(t))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Method {
    pub name: String,
    pub return_type: ReturnType,
    pub params_sig: String,
    pub has_return: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_expr: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationKind {
    ManyToOne,
    OneToMany,
    OneToOne,
    ManyToMany,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    #[serde(rename = "type")]
    pub kind: RelationKind,
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapped_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_column: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_table: Option<String>,
    pub cascade_all: bool,
    pub orphan_removal: bool,
    /// Case-folded, sorted `a-b` key shared by both ends of a pair.
    pub pair_key: String,
}

impl Relation {
    /// Inverse sides only name the owner's field; owning sides hold the key.
    pub fn is_inverse(&self) -> bool {
        self.mapped_by.as_deref().is_some_and(|m| !m.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    pub table: String,
    pub fields: Vec<Field>,
    pub methods: Vec<Method>,
    pub relations: Vec<Relation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<String>,
}

impl Entity {
    pub fn id_field(&self) -> Option<&Field> {
        self.fields.iter().find(|f| f.is_id)
    }

    pub fn relations_of(&self, kind: RelationKind) -> impl Iterator<Item = &Relation> {
        self.relations.iter().filter(move |r| r.kind == kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DbKind {
    H2,
    Postgres,
    Mysql,
}

impl DbKind {
    /// Unrecognized names select no driver at all.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "h2" => Some(DbKind::H2),
            "postgres" | "postgresql" => Some(DbKind::Postgres),
            "mysql" => Some(DbKind::Mysql),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    #[serde(default = "default_group_id")]
    pub group_id: String,
    #[serde(default = "default_artifact_id")]
    pub artifact_id: String,
    #[serde(default = "default_package_base")]
    pub package_base: String,
    #[serde(default = "default_db")]
    pub db: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_password: Option<String>,
}

fn default_group_id() -> String {
    "com.acme".into()
}

fn default_artifact_id() -> String {
    "generated-api".into()
}

fn default_package_base() -> String {
    "com.acme.generated".into()
}

fn default_db() -> String {
    "h2".into()
}

impl Default for ProjectInfo {
    fn default() -> Self {
        Self {
            group_id: default_group_id(),
            artifact_id: default_artifact_id(),
            package_base: default_package_base(),
            db: default_db(),
            db_name: None,
            db_user: None,
            db_password: None,
        }
    }
}

impl ProjectInfo {
    pub fn db_kind(&self) -> Option<DbKind> {
        DbKind::parse(&self.db)
    }

    /// `com.acme.generated` → `com/acme/generated`.
    pub fn package_path(&self) -> String {
        self.package_base.replace('.', "/")
    }
}

/// Final synthesized model: the top-level JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainModel {
    #[serde(rename = "generatorVersion")]
    pub generator_version: String,
    #[serde(rename = "modelVersion")]
    pub model_version: String,
    pub project: ProjectInfo,
    pub entities: Vec<Entity>,
}

impl DomainModel {
    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplicity_tokens() {
        assert_eq!(Multiplicity::parse(Some("1")), Multiplicity::One);
        assert_eq!(Multiplicity::parse(Some(" 0..1 ")), Multiplicity::ZeroOrOne);
        assert_eq!(Multiplicity::parse(Some("*")), Multiplicity::Many);
        assert_eq!(Multiplicity::parse(Some("0..*")), Multiplicity::Many);
        assert_eq!(Multiplicity::parse(Some("1..*")), Multiplicity::Many);
        assert_eq!(Multiplicity::parse(Some("many")), Multiplicity::Unknown);
        assert_eq!(Multiplicity::parse(Some("")), Multiplicity::Unknown);
        assert_eq!(Multiplicity::parse(None), Multiplicity::Unknown);
        assert!(Multiplicity::ZeroOrOne.is_single());
        assert!(!Multiplicity::Unknown.is_single());
        assert!(!Multiplicity::Unknown.is_many());
    }

    #[test]
    fn relationship_kind_is_case_insensitive() {
        assert_eq!(
            RelationshipKind::parse(Some("Generalization")),
            RelationshipKind::Generalization
        );
        assert_eq!(
            RelationshipKind::parse(Some("COMPOSITION")),
            RelationshipKind::Composition
        );
        assert_eq!(RelationshipKind::parse(Some("realization")), RelationshipKind::Other);
        assert_eq!(RelationshipKind::parse(None), RelationshipKind::Other);
    }

    #[test]
    fn db_kind_aliases() {
        assert_eq!(DbKind::parse("PostgreSQL"), Some(DbKind::Postgres));
        assert_eq!(DbKind::parse("postgres"), Some(DbKind::Postgres));
        assert_eq!(DbKind::parse("mysql"), Some(DbKind::Mysql));
        assert_eq!(DbKind::parse("oracle"), None);
    }

    #[test]
    fn return_type_serializes_as_plain_string() {
        let json = serde_json::to_value(ReturnType::Void).unwrap();
        assert_eq!(json, "void");
        let json = serde_json::to_value(ReturnType::Value(FieldType::Long)).unwrap();
        assert_eq!(json, "Long");
        let back: ReturnType = serde_json::from_value(json).unwrap();
        assert_eq!(back, ReturnType::Value(FieldType::Long));
    }
}
