//! Human-readable diagnostic rendering, with optional ANSI color.

use std::io::{self, Write};
use std::sync::Mutex;

use cc_ir::Span;

use crate::{Diagnostic, DiagnosticSink};

mod colors {
    pub const ERROR: &str = "\x1b[1;31m";
    pub const WARNING: &str = "\x1b[1;33m";
    pub const NOTE: &str = "\x1b[1;36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for [`TerminalSink`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Use `is_tty` to decide.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    #[must_use]
    pub const fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            Self::Auto => is_tty,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Renders diagnostics to a writer as `severity: message (span)` lines,
/// matching the shape a C compiler's `-fno-diagnostics-show-caret`
/// output would take (this crate has no source map to render a caret
/// line against — see `DESIGN.md`, Span retention).
pub struct TerminalSink<W: Write> {
    writer: Mutex<W>,
    colors: bool,
}

impl<W: Write> TerminalSink<W> {
    #[must_use]
    pub fn new(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        Self {
            writer: Mutex::new(writer),
            colors: mode.should_use_colors(is_tty),
        }
    }

    fn write_line(&self, d: &Diagnostic) -> io::Result<()> {
        let mut w = self
            .writer
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if self.colors {
            let color = match d.severity {
                crate::Severity::Error => colors::ERROR,
                crate::Severity::Warning => colors::WARNING,
                crate::Severity::Note => colors::NOTE,
            };
            writeln!(
                w,
                "{color}{}{reset}: {bold}{}{reset} ({:?})",
                d.severity,
                d.message,
                d.span,
                color = color,
                bold = colors::BOLD,
                reset = colors::RESET,
            )
        } else {
            writeln!(w, "{}: {} ({:?})", d.severity, d.message, d.span)
        }
    }
}

impl<W: Write> DiagnosticSink for TerminalSink<W> {
    fn error(&self, span: Span, message: impl Into<String>) {
        let _ = self.write_line(&Diagnostic::error(span, message.into()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_plain_text_without_color() {
        let mut buf = Vec::new();
        {
            let sink = TerminalSink::new(&mut buf, ColorMode::Never, false);
            sink.error(Span::new(0, 1), "bad escape");
        }
        let rendered = String::from_utf8(buf).expect("output is valid utf-8");
        assert!(rendered.contains("error: bad escape"));
        assert!(!rendered.contains("\x1b["));
    }

    #[test]
    fn color_mode_auto_respects_tty_flag() {
        assert!(ColorMode::Auto.should_use_colors(true));
        assert!(!ColorMode::Auto.should_use_colors(false));
        assert!(ColorMode::Always.should_use_colors(false));
        assert!(!ColorMode::Never.should_use_colors(true));
    }
}
