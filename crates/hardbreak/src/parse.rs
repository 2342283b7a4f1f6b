//! Markdown parsing into an mdast tree.
//!
//! Wraps `markdown::to_mdast` with the grammar extensions this formatter
//! supports: GFM (tables, strikethrough, task lists, autolinks,
//! footnotes), YAML/TOML front matter, and math.

use markdown::mdast::Node;
use markdown::message::{Message, Place};
use markdown::{Constructs, ParseOptions};

use crate::{FormatError, Result};

/// Parse markdown text into an mdast tree
pub fn parse(text: &str) -> Result<Node> {
    markdown::to_mdast(text, &parse_options()).map_err(from_message)
}

fn parse_options() -> ParseOptions {
    ParseOptions {
        constructs: Constructs {
            frontmatter: true,
            math_flow: true,
            math_text: true,
            ..Constructs::gfm()
        },
        ..ParseOptions::gfm()
    }
}

fn from_message(message: Message) -> FormatError {
    let (line, column) = match message.place.as_deref() {
        Some(Place::Point(point)) => (point.line, point.column),
        Some(Place::Position(position)) => (position.start.line, position.start.column),
        None => (0, 0),
    };

    FormatError::Parse {
        reason: message.reason,
        line,
        column,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_plain_paragraph() {
        let tree = parse("Hello World\n").unwrap();
        assert!(matches!(tree, Node::Root(_)));
    }

    #[test]
    fn test_parses_frontmatter() {
        let tree = parse("---\ntitle: Test\n---\n\nBody\n").unwrap();
        let Node::Root(root) = tree else {
            panic!("expected root");
        };
        assert!(matches!(root.children.first(), Some(Node::Yaml(_))));
    }

    #[test]
    fn test_parses_gfm_table() {
        let tree = parse("| a | b |\n| - | - |\n| 1 | 2 |\n").unwrap();
        let Node::Root(root) = tree else {
            panic!("expected root");
        };
        assert!(matches!(root.children.first(), Some(Node::Table(_))));
    }

    #[test]
    fn test_parses_math_block() {
        let tree = parse("$$\nx^2\n$$\n").unwrap();
        let Node::Root(root) = tree else {
            panic!("expected root");
        };
        assert!(matches!(root.children.first(), Some(Node::Math(_))));
    }

    #[test]
    fn test_empty_input() {
        let tree = parse("").unwrap();
        let Node::Root(root) = tree else {
            panic!("expected root");
        };
        assert!(root.children.is_empty());
    }
}
