use std::collections::HashSet;

use crate::catalogs::ID_FIELD;
use crate::naming::{is_foreign_key, map_type, sanitize};
use crate::types::{Field, FieldType, UmlClass};

/// Build the ordered field list of one class.
///
/// Attributes whose sanitized name ends in `_id` are dropped: foreign keys come
/// from relations, never from plain fields. The result always holds exactly one
/// identifier field; `id: Long` is appended when the class declares none.
pub fn build_fields(class: &UmlClass) -> Vec<Field> {
    let mut fields: Vec<Field> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut has_id = false;

    for attr in &class.attributes {
        if attr.name.trim().is_empty() {
            continue;
        }
        let name = sanitize(&attr.name);
        if is_foreign_key(&name) {
            continue;
        }
        if !seen.insert(name.clone()) {
            continue;
        }

        let is_id = name.eq_ignore_ascii_case(ID_FIELD);
        if is_id && has_id {
            // `id` and `ID` would map to the same column
            continue;
        }
        has_id |= is_id;

        fields.push(Field {
            field_type: map_type(attr.attr_type.as_deref(), &name),
            name,
            is_id,
            nullable: !is_id,
            unique: false,
        });
    }

    if !has_id {
        fields.push(identifier_field());
    }

    fields
}

fn identifier_field() -> Field {
    Field {
        name: ID_FIELD.into(),
        field_type: FieldType::Long,
        is_id: true,
        nullable: false,
        unique: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UmlAttribute;

    fn class_with(attrs: &[(&str, Option<&str>)]) -> UmlClass {
        UmlClass {
            id: "c1".into(),
            name: "Pet".into(),
            attributes: attrs
                .iter()
                .map(|(n, t)| UmlAttribute {
                    name: n.to_string(),
                    attr_type: t.map(String::from),
                })
                .collect(),
            methods: vec![],
        }
    }

    #[test]
    fn synthesizes_identifier_last() {
        let fields = build_fields(&class_with(&[("name", Some("string"))]));
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].name, "name");
        assert!(!fields[0].is_id);
        assert!(fields[0].nullable);

        let id = &fields[1];
        assert_eq!(id.name, "id");
        assert_eq!(id.field_type, FieldType::Long);
        assert!(id.is_id);
        assert!(!id.nullable);
    }

    #[test]
    fn declared_id_is_kept_in_place() {
        let fields = build_fields(&class_with(&[("name", None), ("id", Some("int"))]));
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[1].name, "id");
        assert_eq!(fields[1].field_type, FieldType::Long);
        assert!(fields[1].is_id);
        assert!(!fields[1].nullable);
    }

    #[test]
    fn drops_foreign_key_attributes() {
        let fields = build_fields(&class_with(&[
            ("owner_id", Some("long")),
            ("Vet_ID", Some("int")),
            ("age", Some("int")),
        ]));
        let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["age", "id"]);
    }

    #[test]
    fn drops_sanitized_foreign_key() {
        // `owner-id` sanitizes to `owner_id`
        let fields = build_fields(&class_with(&[("owner-id", Some("long"))]));
        assert_eq!(fields.len(), 1);
        assert!(fields[0].is_id);
    }

    #[test]
    fn skips_blank_and_duplicate_names() {
        let fields = build_fields(&class_with(&[
            ("", Some("int")),
            ("  ", None),
            ("name", Some("string")),
            ("name", Some("int")),
        ]));
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].field_type, FieldType::String);
    }

    #[test]
    fn only_one_identifier_per_entity() {
        let fields = build_fields(&class_with(&[("ID", Some("int")), ("id", Some("int"))]));
        assert_eq!(fields.iter().filter(|f| f.is_id).count(), 1);
        assert_eq!(fields[0].name, "ID");
    }
}
