//! Core data model for entity generation.
//!
//! A generation request is turned into a class name plus an ordered [`FieldSet`]
//! before any source text is produced.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of semantic field types the vocabulary can infer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SemanticType {
    Text,
    Integer,
    DecimalMoney,
    Date,
    Boolean,
}

impl SemanticType {
    /// Java type name used in generated declarations and accessors
    pub fn java_type(&self) -> &'static str {
        match self {
            SemanticType::Text => "String",
            SemanticType::Integer => "Integer",
            SemanticType::DecimalMoney => "java.math.BigDecimal",
            SemanticType::Date => "LocalDate",
            SemanticType::Boolean => "Boolean",
        }
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.java_type())
    }
}

/// A single inferred field of the generated entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityField {
    #[serde(rename = "type")]
    pub field_type: SemanticType,
    pub name: String,
}

impl EntityField {
    pub fn new(field_type: SemanticType, name: impl Into<String>) -> Self {
        Self {
            field_type,
            name: name.into(),
        }
    }
}

impl fmt::Display for EntityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.field_type)
    }
}

/// Ordered collection of fields, unique by name.
///
/// Insertion order is preserved. Inserting a field whose name is already
/// present keeps the first occurrence.
#[derive(Debug, Clone, Default)]
pub struct FieldSet {
    fields: IndexMap<String, EntityField>,
}

// Equality is order-sensitive, unlike IndexMap's own.
impl PartialEq for FieldSet {
    fn eq(&self, other: &Self) -> bool {
        self.fields.values().eq(other.fields.values())
    }
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, returning false if a field with the same name exists
    pub fn insert(&mut self, field: EntityField) -> bool {
        if self.fields.contains_key(&field.name) {
            return false;
        }
        self.fields.insert(field.name.clone(), field);
        true
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&EntityField> {
        self.fields.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntityField> {
        self.fields.values()
    }

    /// Field names in order
    pub fn names(&self) -> Vec<&str> {
        self.fields.keys().map(|k| k.as_str()).collect()
    }
}

impl FromIterator<EntityField> for FieldSet {
    fn from_iter<I: IntoIterator<Item = EntityField>>(iter: I) -> Self {
        let mut set = FieldSet::new();
        for field in iter {
            set.insert(field);
        }
        set
    }
}

impl<'a> IntoIterator for &'a FieldSet {
    type Item = &'a EntityField;
    type IntoIter = indexmap::map::Values<'a, String, EntityField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.values()
    }
}

/// Inbound generation request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub prompt: String,

    #[serde(default, rename = "generateAccessors")]
    pub generate_accessors: bool,

    #[serde(default, rename = "useAI", alias = "useAi")]
    pub use_ai: bool,
}

impl GenerationRequest {
    /// Heuristic request without explicit accessors
    pub fn heuristic(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            generate_accessors: false,
            use_ai: false,
        }
    }

    pub fn with_accessors(mut self, generate_accessors: bool) -> Self {
        self.generate_accessors = generate_accessors;
        self
    }

    pub fn with_ai(mut self, use_ai: bool) -> Self {
        self.use_ai = use_ai;
        self
    }
}
