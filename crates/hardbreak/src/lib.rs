//! # hardbreak
//!
//! Canonical markdown re-serialization with explicit hard line breaks.
//!
//! Given raw markdown text, this crate produces a round-trippable
//! canonical form: soft line breaks inside prose paragraphs become
//! explicit hard breaks (two trailing spaces), emphasis/strong/bullet
//! markers are normalized to a fixed style, and literal text is
//! selectively escaped (brackets, short asterisk runs, backticks) while
//! underscores and bare URLs stay untouched.
//!
//! # Architecture
//!
//! ```text
//! raw text ──parse──▶ ┌───────────┐ ──serialize──▶ intermediate
//!                     │ mdast tree│                markdown
//!                     └───────────┘                    │
//!                                              normalize breaks
//!                                                      │
//!                                                      ▼
//!                                               final markdown
//! ```
//!
//! # Example
//!
//! ```rust
//! use hardbreak::FormatService;
//!
//! let service = FormatService::new();
//! let output = service
//!     .format_document("# Title\n\nline one\nline two\n")
//!     .unwrap();
//! assert_eq!(output, "# Title\n\nline one  \nline two\n");
//! ```

mod observer;
mod parse;
mod serialize;
mod service;

pub use hardbreak_core::{classify, escape, normalize_breaks, render_link, Boundary, FormatOptions};
pub use observer::{FormatObserver, NoopObserver};
pub use parse::parse;
pub use serialize::serialize;
pub use service::FormatService;

/// Error type for formatting operations
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// The input cannot be parsed under the supported grammar
    #[error("parse error at {line}:{column}: {reason}")]
    Parse {
        reason: String,
        line: usize,
        column: usize,
    },

    /// The input bytes are not valid UTF-8
    #[error("invalid UTF-8 at byte offset {offset}")]
    Encoding { offset: usize },
}

pub type Result<T> = std::result::Result<T, FormatError>;
