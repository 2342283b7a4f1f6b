//! Lifecycle observation.
//!
//! The engine carries no global logging state; instead the caller may
//! inject an observer that is notified at well-defined lifecycle
//! points. All methods default to no-ops.

use crate::FormatError;

/// Callbacks invoked at formatting lifecycle points
pub trait FormatObserver: Send + Sync {
    /// A formatting request started
    fn on_start(&self) {}

    /// Parsing finished successfully
    fn on_parse_complete(&self) {}

    /// Serialization finished successfully
    fn on_serialize_complete(&self) {}

    /// The request failed; the input is left untouched
    fn on_error(&self, _error: &FormatError) {}
}

/// Observer that ignores every lifecycle event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl FormatObserver for NoopObserver {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_observer_accepts_events() {
        let observer = NoopObserver;
        observer.on_start();
        observer.on_parse_complete();
        observer.on_serialize_complete();
        observer.on_error(&FormatError::Encoding { offset: 0 });
    }
}
