use crate::naming::{map_type, sanitize, var_name};
use crate::types::{Method, ReturnType, UmlClass};

/// Build stub method descriptors for every named method of a class.
pub fn build_methods(class: &UmlClass) -> Vec<Method> {
    class
        .methods
        .iter()
        .filter(|m| !m.name.trim().is_empty())
        .map(|m| {
            let return_type = resolve_return_type(m.return_type.as_deref(), &m.name);
            let return_expr = match return_type {
                ReturnType::Void => None,
                ReturnType::Value(t) => Some(t.default_return_expr().to_string()),
            };
            Method {
                name: sanitize(&m.name),
                return_type,
                params_sig: params_signature(m.parameters.as_deref()),
                has_return: return_type != ReturnType::Void,
                return_expr,
            }
        })
        .collect()
}

fn resolve_return_type(raw: Option<&str>, method_name: &str) -> ReturnType {
    match raw.map(str::trim) {
        None | Some("") => ReturnType::Void,
        Some(t) if t.eq_ignore_ascii_case("void") => ReturnType::Void,
        Some(t) => ReturnType::Value(map_type(Some(t), method_name)),
    }
}

/// `"name:string, age:int"` → `"String name, Integer age"`.
///
/// An entry without a `:` after its first character is a bare parameter name
/// of type `String`.
pub fn params_signature(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };

    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (name, raw_type) = match entry.find(':') {
                Some(idx) if idx > 0 => (entry[..idx].trim(), Some(entry[idx + 1..].trim())),
                _ => (entry, None),
            };
            format!("{} {}", map_type(raw_type, name), var_name(name))
        })
        .collect::<Vec<_>>()
        .join(", ")
}
