//! Per-line structural predicates.
//!
//! Each predicate is a pure function of a single line's content (no
//! surrounding state). They feed the boundary classifier, which must
//! never rewrite a line break adjacent to structural markdown.

use once_cell::sync::Lazy;
use regex::Regex;

/// Bullet (`-`, `*`, `+`) or ordered (`1.`, `1)`) list marker,
/// indented up to three spaces, followed by whitespace or end of line.
static LIST_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ {0,3}(?:[-*+]|\d{1,9}[.)])(?:[ \t]|$)").unwrap());

/// Three or more hyphens alone on a line.
static HORIZONTAL_RULE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[ \t]*-{3,}[ \t]*$").unwrap());

/// Check if a line is empty or whitespace-only
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Check if a line starts with an ATX heading marker (`#` through `######`)
pub fn is_heading(line: &str) -> bool {
    let trimmed = line.trim_start();
    let hashes = trimmed.chars().take_while(|&c| c == '#').count();
    if !(1..=6).contains(&hashes) {
        return false;
    }
    matches!(trimmed[hashes..].chars().next(), None | Some(' ') | Some('\t'))
}

/// Check if a line starts with a bullet or ordered list marker
pub fn is_list_item(line: &str) -> bool {
    LIST_MARKER.is_match(line)
}

/// Check if a line opens or closes a fenced code block
pub fn is_code_fence(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("```") || trimmed.starts_with("~~~")
}

/// Check if a line is part of a blockquote
pub fn is_blockquote(line: &str) -> bool {
    line.trim_start().starts_with('>')
}

/// Check if a line looks like a table row
pub fn is_table_row(line: &str) -> bool {
    line.contains('|')
}

/// Check if a line is a horizontal rule (3+ hyphens alone)
pub fn is_horizontal_rule(line: &str) -> bool {
    HORIZONTAL_RULE.is_match(line)
}

/// Check if a line already carries the two-trailing-space hard-break marker
pub fn ends_with_hard_break(line: &str) -> bool {
    line.ends_with("  ")
}

/// Check if a line carries any structural marker
pub fn is_structural(line: &str) -> bool {
    is_blank(line)
        || is_heading(line)
        || is_list_item(line)
        || is_code_fence(line)
        || is_blockquote(line)
        || is_table_row(line)
        || is_horizontal_rule(line)
}
