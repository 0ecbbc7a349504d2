//! [`DiagnosticSink`]: where the tokenizer reports a non-fatal error.

use cc_ir::Span;

use crate::Diagnostic;

/// Narrow reporting surface a tokenizer needs. Every non-fatal error is
/// reported through `error`, even though `Tokenizer::next_token` itself
/// never fails: the sink, not a `Result`, is how the caller learns about
/// an invalid escape sequence or an unterminated character constant (see
/// `DESIGN.md`, Error propagation policy).
pub trait DiagnosticSink {
    /// Report an error at `span`.
    fn error(&self, span: Span, message: impl Into<String>);
}

/// A sink that discards every diagnostic. Useful where the caller only
/// cares about the token stream (e.g. quick one-off conversions in tests).
#[derive(Copy, Clone, Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn error(&self, _span: Span, _message: impl Into<String>) {}
}

/// A sink that collects every diagnostic it receives, for assertions in
/// tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    diagnostics: std::sync::Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every diagnostic reported so far, in report order.
    #[must_use]
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.lock().unwrap_or_else(std::sync::PoisonError::into_inner).clone()
    }

    /// True once at least one diagnostic has been reported.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.lock().unwrap_or_else(std::sync::PoisonError::into_inner).is_empty()
    }
}

impl DiagnosticSink for RecordingSink {
    fn error(&self, span: Span, message: impl Into<String>) {
        self.diagnostics
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(Diagnostic::error(span, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_sink_collects_in_order() {
        let sink = RecordingSink::new();
        sink.error(Span::new(0, 1), "first");
        sink.error(Span::new(1, 2), "second");
        let recorded = sink.diagnostics();
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[0].message, "first");
        assert_eq!(recorded[1].message, "second");
        assert!(sink.has_errors());
    }

    #[test]
    fn null_sink_drops_everything() {
        let sink = NullSink;
        sink.error(Span::new(0, 1), "ignored");
    }
}
