//! Getter/setter generation for entity fields.

use crate::codegen::utils::capitalize_first;

/// Source text of one getter/setter pair, unindented
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorPair {
    pub getter: String,
    pub setter: String,
}

/// Emit `get<Name>`/`set<Name>` for a field.
///
/// The method suffix is the field name with its first character uppercased.
/// An empty name produces methods named `get` and `set`.
///
/// # Arguments
///
/// * `java_type` - Java type of the field (e.g. "String", "LocalDate")
/// * `name` - Field name, used verbatim for the setter parameter
pub fn emit_accessors(java_type: &str, name: &str) -> AccessorPair {
    let capitalized = capitalize_first(name);

    let getter = format!(
        "public {ty} get{cap}() {{\n    return this.{name};\n}}",
        ty = java_type,
        cap = capitalized,
        name = name,
    );

    let setter = format!(
        "public void set{cap}({ty} {name}) {{\n    this.{name} = {name};\n}}",
        ty = java_type,
        cap = capitalized,
        name = name,
    );

    AccessorPair { getter, setter }
}
