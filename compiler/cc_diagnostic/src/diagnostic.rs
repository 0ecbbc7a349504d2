//! [`Diagnostic`]: a structured message the tokenizer reports through a
//! [`crate::DiagnosticSink`].

use std::fmt;

use cc_ir::Span;

/// Severity level for a diagnostic.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Note => write!(f, "note"),
        }
    }
}

/// A single reported diagnostic: a severity, a message, and the span it
/// concerns.
///
/// Unlike a full compiler's diagnostic type, this carries no labels,
/// notes, or structured fix suggestions — the tokenizer's non-fatal
/// errors (`InvalidEscape`, `InvalidCharacterConstant`) are single-span,
/// single-message conditions (see `DESIGN.md`).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub severity: Severity,
    pub span: Span,
    pub message: String,
}

impl Diagnostic {
    #[must_use]
    pub fn error(span: Span, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            span,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn warning(span: Span, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            span,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({:?})", self.severity, self.message, self.span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_severity_and_message() {
        let d = Diagnostic::error(Span::new(0, 3), "bad escape");
        let text = d.to_string();
        assert!(text.starts_with("error: bad escape"));
    }
}
