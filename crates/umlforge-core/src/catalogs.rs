use std::collections::HashMap;
use std::sync::LazyLock;

use crate::types::FieldType;

/// Raw diagram type tokens (lowercased) and the type each resolves to.
/// Tokens not in this table resolve to `FieldType::String`.
pub static TYPE_CATALOG: LazyLock<HashMap<&'static str, FieldType>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("string", FieldType::String);
    // `int` / `integer` widen to Long for identifiers, see naming::map_type
    m.insert("int", FieldType::Integer);
    m.insert("integer", FieldType::Integer);
    m.insert("long", FieldType::Long);
    m.insert("double", FieldType::Double);
    m.insert("boolean", FieldType::Boolean);
    m.insert("bigdecimal", FieldType::BigDecimal);
    m.insert("localdate", FieldType::LocalDate);
    m.insert("localdatetime", FieldType::LocalDateTime);
    m
});

/// Name of the identifier field every entity carries.
pub const ID_FIELD: &str = "id";

/// Suffix marking an attribute as a foreign key column.
pub const FK_SUFFIX: &str = "_id";

/// Marker in a class name that flags it as a join entity.
pub const ASSOCIATIVE_MARKER: char = '_';

/// Content type of the packaged project.
pub const ARCHIVE_CONTENT_TYPE: &str = "application/zip";

/// Generator and model version constants.
pub const GENERATOR_VERSION: &str = "0.1.0";
pub const MODEL_VERSION: &str = "1.0";
