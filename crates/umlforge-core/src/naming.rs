//! Identifier and type normalization for diagram strings.

use std::sync::LazyLock;

use regex::Regex;

use crate::catalogs::{FK_SUFFIX, ID_FIELD, TYPE_CATALOG};
use crate::types::FieldType;

static WORD_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[_\s]+").expect("valid separator regex"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));
static NON_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]").expect("valid identifier regex"));

/// `"order_item"` / `"order item"` → `"OrderItem"`.
///
/// Only the first character of each segment is touched; the rest keeps its case.
pub fn class_name(raw: &str) -> String {
    WORD_SEPARATOR
        .split(raw)
        .filter(|segment| !segment.trim().is_empty())
        .map(upper_first)
        .collect()
}

/// `"  Order Item "` → `"order_item"`.
pub fn table_name(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    WHITESPACE_RUN.replace_all(&lowered, "_").into_owned()
}

/// `"OrderItem"` → `"orderItem"`.
pub fn var_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn upper_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Replace every character outside `[A-Za-z0-9_]` with `_`.
pub fn sanitize(raw: &str) -> String {
    NON_IDENTIFIER.replace_all(raw, "_").into_owned()
}

/// Whether a sanitized name looks like a foreign key column.
pub fn is_foreign_key(name: &str) -> bool {
    name.to_lowercase().ends_with(FK_SUFFIX)
}

/// Resolve a raw type token. `owner` is the attribute, parameter or method name;
/// an integer named `id` resolves to `Long`.
pub fn map_type(raw: Option<&str>, owner: &str) -> FieldType {
    let Some(raw) = raw else {
        return FieldType::String;
    };
    match TYPE_CATALOG.get(raw.to_lowercase().as_str()) {
        Some(FieldType::Integer) if owner.eq_ignore_ascii_case(ID_FIELD) => FieldType::Long,
        Some(t) => *t,
        None => FieldType::String,
    }
}

/// Join column holding a reference to `entity`: `"Owner"` → `"owner_id"`.
pub fn foreign_key(entity: &str) -> String {
    format!("{}{}", var_name(entity), FK_SUFFIX)
}

/// Many-to-many join table, in edge direction: `("Student", "Course")` → `"student_course"`.
pub fn join_table(source: &str, target: &str) -> String {
    format!("{source}_{target}").to_lowercase()
}

/// Direction-independent key for a pair of entity names.
pub fn pair_key(a: &str, b: &str) -> String {
    let x = a.to_lowercase();
    let y = b.to_lowercase();
    if x <= y {
        format!("{x}-{y}")
    } else {
        format!("{y}-{x}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_names() {
        assert_eq!(class_name("foo bar"), "FooBar");
        assert_eq!(class_name("persona_gato"), "PersonaGato");
        assert_eq!(class_name("  order__item "), "OrderItem");
        assert_eq!(class_name("HTTPClient"), "HTTPClient");
        assert_eq!(class_name(""), "");
    }

    #[test]
    fn table_names() {
        assert_eq!(table_name("  Order   Item "), "order_item");
        assert_eq!(table_name("Persona_Gato"), "persona_gato");
    }

    #[test]
    fn var_and_upper_first() {
        assert_eq!(var_name("OrderItem"), "orderItem");
        assert_eq!(var_name(""), "");
        assert_eq!(upper_first("orderItem"), "OrderItem");
    }

    #[test]
    fn sanitize_replaces_invalid_characters() {
        assert_eq!(sanitize("first-name"), "first_name");
        assert_eq!(sanitize("price ($)"), "price____");
        assert_eq!(sanitize("ok_1"), "ok_1");
    }

    #[test]
    fn foreign_key_detection() {
        assert!(is_foreign_key("owner_id"));
        assert!(is_foreign_key("Owner_ID"));
        assert!(!is_foreign_key("id"));
        assert!(!is_foreign_key("valid"));
    }

    #[test]
    fn type_mapping() {
        assert_eq!(map_type(Some("int"), "age"), FieldType::Integer);
        assert_eq!(map_type(Some("Integer"), "ID"), FieldType::Long);
        assert_eq!(map_type(Some("LONG"), "count"), FieldType::Long);
        assert_eq!(map_type(Some("double"), "price"), FieldType::Double);
        assert_eq!(map_type(Some("Boolean"), "active"), FieldType::Boolean);
        assert_eq!(map_type(Some("LocalDate"), "born"), FieldType::LocalDate);
        assert_eq!(map_type(Some("uuid"), "code"), FieldType::String);
        assert_eq!(map_type(None, "id"), FieldType::String);
    }

    #[test]
    fn relation_names() {
        assert_eq!(foreign_key("Owner"), "owner_id");
        assert_eq!(foreign_key("OrderItem"), "orderItem_id");
        assert_eq!(join_table("Student", "Course"), "student_course");
        assert_eq!(join_table("Course", "Student"), "course_student");
        assert_eq!(pair_key("Student", "Course"), "course-student");
        assert_eq!(pair_key("Course", "Student"), "course-student");
    }
}
