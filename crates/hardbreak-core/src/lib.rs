//! hardbreak-core - line classification and escaping policies
//!
//! This crate provides the pure text-level building blocks used by the
//! `hardbreak` formatter:
//!
//! - per-line structural predicates (heading, list item, code fence, ...)
//! - the boundary classifier deciding soft vs hard line breaks
//! - the line-break normalizer that rewrites prose boundaries
//! - the selective escaping policy for literal text
//! - the link renderer choosing between autolink and bracketed form
//!
//! None of this depends on a markdown parser; everything operates on
//! plain strings and is usable on its own.
//!
//! # Example
//!
//! ```rust
//! use hardbreak_core::normalize_breaks;
//!
//! let text = "line one\nline two\n\n- a list item\n";
//! let normalized = normalize_breaks(text);
//! assert_eq!(normalized, "line one  \nline two\n\n- a list item\n");
//! ```

mod breaks;
mod classify;
mod escape;
mod line;
mod link;
mod options;

pub use breaks::normalize_breaks;
pub use classify::{classify, Boundary};
pub use escape::escape;
pub use line::{
    ends_with_hard_break, is_blank, is_blockquote, is_code_fence, is_heading,
    is_horizontal_rule, is_list_item, is_structural, is_table_row,
};
pub use link::render_link;
pub use options::FormatOptions;
