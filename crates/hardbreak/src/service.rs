//! FormatService - the main entry point for markdown formatting.

use hardbreak_core::{normalize_breaks, FormatOptions};

use crate::observer::{FormatObserver, NoopObserver};
use crate::parse::parse;
use crate::serialize::serialize;
use crate::{FormatError, Result};

/// The main service for canonical markdown re-serialization.
///
/// Each call owns its own tree and context, so one service may be
/// shared freely across threads; concurrent requests for different
/// documents need no coordination.
pub struct FormatService {
    options: FormatOptions,
    observer: Box<dyn FormatObserver>,
}

impl FormatService {
    /// Create a new FormatService with default options
    pub fn new() -> Self {
        Self {
            options: FormatOptions::default(),
            observer: Box::new(NoopObserver),
        }
    }

    /// Create a FormatService with custom options
    pub fn with_options(options: FormatOptions) -> Self {
        Self {
            options,
            observer: Box::new(NoopObserver),
        }
    }

    /// Attach a lifecycle observer
    pub fn with_observer(mut self, observer: Box<dyn FormatObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Get the current options
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut FormatOptions {
        &mut self.options
    }

    /// Parse markdown and re-serialize it in canonical style.
    ///
    /// Soft breaks are left soft here; compose with
    /// [`normalize_breaks`] (or call [`format_document`]) to rewrite
    /// prose line breaks into hard breaks.
    ///
    /// [`format_document`]: Self::format_document
    pub fn format(&self, text: &str) -> Result<String> {
        self.observer.on_start();

        let tree = match parse(text) {
            Ok(tree) => tree,
            Err(error) => {
                self.observer.on_error(&error);
                return Err(error);
            }
        };
        self.observer.on_parse_complete();

        let rendered = serialize(&tree, &self.options);
        self.observer.on_serialize_complete();

        Ok(rendered)
    }

    /// Rewrite soft prose line breaks into hard breaks
    pub fn normalize_breaks(&self, text: &str) -> String {
        normalize_breaks(text)
    }

    /// Full formatting pipeline: parse, re-serialize, then normalize
    /// line breaks. This is the replacement text an editor host swaps
    /// in as one atomic edit.
    pub fn format_document(&self, text: &str) -> Result<String> {
        let formatted = self.format(text)?;
        Ok(self.normalize_breaks(&formatted))
    }

    /// Like [`format_document`], but validates raw bytes first.
    ///
    /// [`format_document`]: Self::format_document
    pub fn format_bytes(&self, bytes: &[u8]) -> Result<String> {
        let text = match std::str::from_utf8(bytes) {
            Ok(text) => text,
            Err(error) => {
                let error = FormatError::Encoding {
                    offset: error.valid_up_to(),
                };
                self.observer.on_error(&error);
                return Err(error);
            }
        };
        self.format_document(text)
    }
}

impl Default for FormatService {
    fn default() -> Self {
        Self::new()
    }
}
