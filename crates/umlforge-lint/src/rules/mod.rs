//! Built-in lint rules.

pub mod dangling_endpoint;
pub mod foreign_key_attribute;
pub mod identifier_sanitized;
pub mod join_entity_arity;
pub mod unknown_cardinality;

pub use dangling_endpoint::DanglingEndpointRule;
pub use foreign_key_attribute::ForeignKeyAttributeRule;
pub use identifier_sanitized::IdentifierSanitizedRule;
pub use join_entity_arity::JoinEntityArityRule;
pub use unknown_cardinality::UnknownCardinalityRule;

#[cfg(test)]
pub(crate) fn diagram(json: &str) -> umlforge_core::types::UmlDiagram {
    serde_json::from_str(json).expect("valid diagram JSON")
}
