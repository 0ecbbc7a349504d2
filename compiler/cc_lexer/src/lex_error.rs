//! [`LexError`]: the non-fatal conditions a tokenizer run can hit while
//! still producing a best-effort token (see `DESIGN.md`, Error
//! propagation policy). Fatal conditions ([`crate::NumberError`],
//! [`cc_ir::CompactStringError`]) are modeled separately as `Result::Err`
//! from their own operation, not as `LexError` variants.

/// A non-fatal lexical error, reported through a [`cc_diagnostic::DiagnosticSink`]
/// while tokenization continues.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// An unrecognized `\c` escape inside a string or character literal.
    /// The literal byte `c` is emitted in place of the escape.
    #[error("unknown escape sequence `\\{ch}`")]
    InvalidEscape {
        /// The character following the backslash.
        ch: char,
    },
    /// A character literal with no closing `'`.
    #[error("missing terminating ' character")]
    InvalidCharacterConstant,
    /// A string-literal scan was entered without consuming an opening
    /// `"`. Unreachable in practice — the dispatcher only calls the
    /// string scanner once it has already seen `"` — kept as a typed
    /// variant rather than a panic for defensive completeness.
    #[error("internal error: string scan did not start at an opening quote")]
    InvalidString,
    /// A byte the scanner doesn't recognize as the start of any lexeme.
    #[error("invalid character (ASCII 0x{byte:02x})")]
    InvalidByte {
        /// The offending byte.
        byte: u8,
    },
}
