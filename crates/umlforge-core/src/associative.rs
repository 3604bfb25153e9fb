use std::collections::HashSet;

use crate::catalogs::ASSOCIATIVE_MARKER;
use crate::types::UmlClass;

/// Ids of classes that stand for a many-to-many join entity.
///
/// Purely a naming convention: a class is a join entity iff its raw name
/// contains `_` (`Persona_Gato`). Arity is not checked.
pub fn detect_associatives<'a, I>(classes: I) -> HashSet<&'a str>
where
    I: IntoIterator<Item = &'a UmlClass>,
{
    classes
        .into_iter()
        .filter(|c| c.name.contains(ASSOCIATIVE_MARKER))
        .map(|c| c.id.as_str())
        .collect()
}
