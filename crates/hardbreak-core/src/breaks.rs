//! Line-break normalization.
//!
//! Rewrites ambiguous soft breaks inside prose paragraphs into explicit
//! hard breaks (two trailing spaces), leaving every structural boundary
//! untouched. The line inventory never changes: no line is added,
//! removed, or reordered.

use std::borrow::Cow;

use crate::classify::{classify, Boundary};

/// Normalize soft prose line breaks to hard breaks.
///
/// Line endings are normalized to `\n` first (`\r\n` and bare `\r` never
/// survive into the output). A single forward scan consults the
/// classifier for each line and its successor; on `Convert` the line
/// gains exactly two trailing spaces. The final line is never modified.
///
/// Idempotent: a line already ending in two spaces classifies as
/// `Preserve`, so a second pass is a no-op.
pub fn normalize_breaks(text: &str) -> String {
    let text = normalize_newlines(text);
    let lines: Vec<&str> = text.split('\n').collect();

    let mut out = String::with_capacity(text.len() + lines.len() * 2);

    for (i, line) in lines.iter().enumerate() {
        out.push_str(line);

        if i + 1 < lines.len() {
            if classify(line, Some(lines[i + 1])) == Boundary::Convert {
                out.push_str("  ");
            }
            out.push('\n');
        }
    }

    out
}

/// Normalize `\r\n` and bare `\r` to `\n`
fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prose_paragraph() {
        let input = "line one\nline two\n";
        assert_eq!(normalize_breaks(input), "line one  \nline two\n");
    }

    #[test]
    fn test_final_line_untouched() {
        let input = "line one\nline two";
        let result = normalize_breaks(input);
        assert!(result.ends_with("line two"));
        assert_eq!(result, "line one  \nline two");
    }

    #[test]
    fn test_structural_lines_preserved() {
        let input = "# Title\n- one\n- two\n\nfirst prose\nsecond prose\n";
        let result = normalize_breaks(input);
        assert_eq!(
            result,
            "# Title\n- one\n- two\n\nfirst prose  \nsecond prose\n"
        );
    }

    #[test]
    fn test_idempotent() {
        let input = "a\nb\nc\n\n- list\nprose\nmore prose\n";
        let once = normalize_breaks(input);
        let twice = normalize_breaks(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_breaks(""), "");
    }

    #[test]
    fn test_consecutive_blank_lines() {
        let input = "a\n\n\nb\n";
        assert_eq!(normalize_breaks(input), "a\n\n\nb\n");
    }

    #[test]
    fn test_crlf_normalized() {
        let input = "line one\r\nline two\r\n";
        let result = normalize_breaks(input);
        assert_eq!(result, "line one  \nline two\n");
        assert!(!result.contains('\r'));
    }

    #[test]
    fn test_bare_cr_normalized() {
        assert_eq!(normalize_breaks("a\rb"), "a  \nb");
    }

    #[test]
    fn test_line_inventory_preserved() {
        let input = "one\ntwo\nthree\n\nfour\n";
        let result = normalize_breaks(input);
        assert_eq!(
            input.split('\n').count(),
            result.split('\n').count()
        );
        for (original, rewritten) in input.split('\n').zip(result.split('\n')) {
            assert_eq!(rewritten.trim_end(), original.trim_end());
        }
    }

    #[test]
    fn test_existing_hard_break_not_doubled() {
        let input = "line one  \nline two\n";
        assert_eq!(normalize_breaks(input), input);
    }
}
