//! Boundary classification between neighboring lines.

use crate::line::{ends_with_hard_break, is_structural};

/// What to do with the line break after a given line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Leave the break as-is (structural context or end of document)
    Preserve,
    /// Rewrite the soft break into an explicit hard break
    Convert,
}

/// Classify the break between `current` and the line that follows it.
///
/// Line breaks inside structural constructs (lists, tables, code fences,
/// headings, blockquotes, horizontal rules, blank separation) are
/// syntactically significant and must stay soft. Only a break between
/// two non-empty prose lines is ambiguous enough to rewrite.
///
/// `next` is `None` at the end of the document, which always preserves.
pub fn classify(current: &str, next: Option<&str>) -> Boundary {
    let Some(next) = next else {
        return Boundary::Preserve;
    };

    if ends_with_hard_break(current) || is_structural(current) || is_structural(next) {
        Boundary::Preserve
    } else {
        Boundary::Convert
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prose_pair_converts() {
        assert_eq!(classify("line one", Some("line two")), Boundary::Convert);
    }

    #[test]
    fn test_end_of_document_preserves() {
        assert_eq!(classify("last line", None), Boundary::Preserve);
    }

    #[test]
    fn test_blank_neighbor_preserves() {
        assert_eq!(classify("line", Some("")), Boundary::Preserve);
        assert_eq!(classify("", Some("line")), Boundary::Preserve);
    }

    #[test]
    fn test_structural_current_preserves() {
        assert_eq!(classify("# Title", Some("prose")), Boundary::Preserve);
        assert_eq!(classify("- item", Some("prose")), Boundary::Preserve);
        assert_eq!(classify("> quote", Some("prose")), Boundary::Preserve);
        assert_eq!(classify("```", Some("prose")), Boundary::Preserve);
        assert_eq!(classify("| a | b |", Some("prose")), Boundary::Preserve);
        assert_eq!(classify("---", Some("prose")), Boundary::Preserve);
    }

    #[test]
    fn test_structural_next_preserves() {
        assert_eq!(classify("prose", Some("# Title")), Boundary::Preserve);
        assert_eq!(classify("prose", Some("- item")), Boundary::Preserve);
        assert_eq!(classify("prose", Some("1. item")), Boundary::Preserve);
    }

    #[test]
    fn test_existing_marker_preserves() {
        assert_eq!(classify("line one  ", Some("line two")), Boundary::Preserve);
    }
}
