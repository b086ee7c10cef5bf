//! Class-name and field inference from Czech prompts.
//!
//! Both functions are pure: they never fail and always fall back to a
//! default when the prompt contains nothing recognizable.

use crate::entity::{EntityField, FieldSet, SemanticType};
use crate::codegen::utils::capitalize_first;
use once_cell::sync::Lazy;
use regex::Regex;

/// Class name used when no trigger word is found
pub const FALLBACK_CLASS_NAME: &str = "GeneratedEntity";

/// Field substituted when no vocabulary keyword matches
pub const FALLBACK_FIELD_NAME: &str = "popis";

/// Trigger words followed by the class name. "třída" and "entita" match in
/// their singular case forms only, so "třídění" is not a trigger. A single
/// "pro" right after a trigger is skipped ("třídu pro X" gives X).
static CLASS_NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:tříd(?:a|u|y|ě|ou)|entit(?:a|u|y|ě|ou)|pro)\b(?:\s+pro\b)?\s+(\w+)")
        .expect("class name pattern is valid")
});

/// One row of the keyword table
#[derive(Debug, Clone, Copy)]
pub struct VocabularyRow {
    /// Lowercase substrings, any of which selects this row
    pub keywords: &'static [&'static str],
    pub name: &'static str,
    pub field_type: SemanticType,
}

impl VocabularyRow {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }

    pub fn field(&self) -> EntityField {
        EntityField::new(self.field_type, self.name)
    }
}

/// Keyword table in scan order. Field order in the output follows this table,
/// not the order of words in the prompt.
pub const VOCABULARY: &[VocabularyRow] = &[
    VocabularyRow {
        keywords: &["jméno", "jmén", "název", "názv"],
        name: "nazev",
        field_type: SemanticType::Text,
    },
    VocabularyRow {
        keywords: &["příjmení"],
        name: "prijmeni",
        field_type: SemanticType::Text,
    },
    VocabularyRow {
        keywords: &["email", "mail"],
        name: "email",
        field_type: SemanticType::Text,
    },
    VocabularyRow {
        keywords: &["věk", "počet", "počt"],
        name: "vek",
        field_type: SemanticType::Integer,
    },
    VocabularyRow {
        keywords: &["cena", "ceny", "cenu", "cenou", "ceně", "plat"],
        name: "cena",
        field_type: SemanticType::DecimalMoney,
    },
    VocabularyRow {
        keywords: &["datum", "datem"],
        name: "datum",
        field_type: SemanticType::Date,
    },
    VocabularyRow {
        keywords: &["aktivní"],
        name: "jeAktivni",
        field_type: SemanticType::Boolean,
    },
];

/// Extract the entity class name from a prompt.
///
/// Returns the word following the first trigger ("třída", "entita", "pro")
/// with its first character uppercased, or [`FALLBACK_CLASS_NAME`].
///
/// # Example
///
/// ```
/// use entitygen::extraction::extract_class_name;
///
/// assert_eq!(extract_class_name("entita zakaznik"), "Zakaznik");
/// assert_eq!(extract_class_name("něco jiného"), "GeneratedEntity");
/// ```
pub fn extract_class_name(prompt: &str) -> String {
    CLASS_NAME_PATTERN
        .captures(prompt)
        .and_then(|caps| caps.get(1))
        .map(|m| capitalize_first(m.as_str()))
        .unwrap_or_else(|| FALLBACK_CLASS_NAME.to_string())
}

/// Infer the entity fields from a prompt.
///
/// The result is never empty: with no keyword present it is exactly
/// `[popis: String]`.
pub fn analyze_fields(prompt: &str) -> FieldSet {
    let lowered = prompt.to_lowercase();

    let mut fields: FieldSet = VOCABULARY
        .iter()
        .filter(|row| row.matches(&lowered))
        .map(VocabularyRow::field)
        .collect();

    if fields.is_empty() {
        fields.insert(EntityField::new(SemanticType::Text, FALLBACK_FIELD_NAME));
    }

    fields
}
