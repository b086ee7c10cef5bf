//! Utility functions for code generation.

/// Uppercase the first character, leaving the rest unchanged.
///
/// Characters without an uppercase form (digits, underscore) are kept as-is,
/// and an empty input yields an empty string.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Indent every non-empty line of `code` by `level` four-space steps
pub fn indent(code: &str, level: usize) -> String {
    let pad = "    ".repeat(level);
    code.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", pad, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
