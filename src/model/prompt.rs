//! Fixed instruction for the delegated path and response clean-up.

/// System instruction sent with every delegated request
pub const SYSTEM_INSTRUCTION: &str = "Jsi expertní Java vývojář. Vygeneruj kód pro jednu JPA entitu. \
Použij Jakarta Persistence, Lombok @Data a české názvy polí dle zadání. \
Vrať pouze čistý kód bez vysvětlování a bez Markdown značek (```java).";

const FENCE: &str = "```";

/// Language tags recognized when code follows the opening fence on the same line
const LANGUAGE_TAGS: &[&str] = &["java", "kotlin", "kt", "groovy", "scala", "text", "plaintext"];

/// Remove Markdown code fences and trim the result.
///
/// The opening fence (with an optional language tag) and the closing fence are
/// removed even when they share a line with code. Remaining fence-only lines
/// are dropped; everything else is kept verbatim.
pub fn strip_code_fences(response: &str) -> String {
    let mut text = response.trim();

    if let Some(rest) = text.strip_prefix(FENCE) {
        text = strip_language_tag(rest);
    }
    if let Some(rest) = text.strip_suffix(FENCE) {
        text = rest;
    }

    text.lines()
        .filter(|line| !line.trim_start().starts_with(FENCE))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Drop the word right after an opening fence when it names a language.
///
/// A word on its own line is always a tag. On the same line as code it must be
/// one of [`LANGUAGE_TAGS`], so a response opening with `public class` keeps it.
fn strip_language_tag(rest: &str) -> &str {
    let tag_len = rest
        .find(|c: char| !(c.is_alphanumeric() || matches!(c, '+' | '#' | '-' | '_' | '.')))
        .unwrap_or(rest.len());
    let (tag, after) = rest.split_at(tag_len);

    let own_line = after.is_empty() || after.starts_with(|c: char| c == '\n' || c == '\r');
    if tag.is_empty() || own_line || LANGUAGE_TAGS.contains(&tag.to_lowercase().as_str()) {
        after
    } else {
        rest
    }
}
