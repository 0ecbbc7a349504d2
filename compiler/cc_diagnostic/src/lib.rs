//! Diagnostic reporting for the C tokenizer.
//!
//! Keeps the three pieces a tokenizer needs to talk back to its caller:
//! [`Severity`] and [`Diagnostic`], the structured message a scanner
//! reports; [`DiagnosticSink`], the narrow trait the tokenizer reports
//! through; and [`TerminalSink`], a human-readable renderer for it.
//!
//! Fatal conditions (a malformed numeric literal, a `CompactString` over
//! length) are *not* reported through this crate — they are returned as
//! `Result::Err` from the specific operation that detected them. This
//! crate only covers the non-fatal diagnostics a tokenizer emits while
//! still producing a best-effort token stream (see `DESIGN.md`).

mod diagnostic;
mod sink;
mod terminal;

pub use diagnostic::{Diagnostic, Severity};
pub use sink::{DiagnosticSink, RecordingSink};
pub use terminal::{ColorMode, TerminalSink};
