//! [`RawTag`]: the classification a raw scan produces, before cooking.
//!
//! Punctuators are already fully disambiguated here (the longest-match
//! decision the operator scanner makes lives in this crate, not in
//! `cc_lexer`) since it needs no lookahead beyond the raw bytes. Anything
//! that needs an interner, a keyword table, or escape-sequence decoding —
//! identifiers, preprocessing numbers, string and character literals —
//! is left uncooked: the raw scanner only reports its extent.

/// Classification of a raw lexeme, before keyword resolution or escape
/// cooking. Paired with a byte length to form a [`RawToken`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RawTag {
    /// Sentinel returned once the input is exhausted.
    End,
    /// A run of horizontal whitespace (spaces and tabs only).
    Whitespace,
    /// A single newline byte.
    Newline,
    /// An identifier or keyword spelling; `cc_lexer` resolves the keyword
    /// trie against the same bytes.
    Ident,
    /// A preprocessing-number spelling (`cc_lexer::NumberConverter` input).
    PpNumber,
    /// A string literal, quotes included, escapes not yet resolved.
    String,
    /// A character literal, quotes included, escape not yet resolved.
    Char,
    /// A byte the scanner does not recognize as the start of anything
    /// (outside ASCII graphic range and not whitespace); reported as an
    /// error and skipped one byte at a time.
    InvalidByte,

    // === Single-character punctuators ===
    Bang,
    Hash,
    Percent,
    Amp,
    LParen,
    RParen,
    Star,
    Plus,
    Comma,
    Minus,
    Dot,
    Slash,
    Colon,
    Semicolon,
    Lt,
    Eq,
    Gt,
    Question,
    LBracket,
    RBracket,
    Caret,
    LBrace,
    Pipe,
    RBrace,
    Tilde,

    // === Multi-character punctuators and operators ===
    PipePipe,
    AmpAmp,
    LtEq,
    GtEq,
    EqEq,
    NotEq,
    Arrow,
    PlusPlus,
    MinusMinus,
    Shl,
    Shr,
    StarEq,
    SlashEq,
    PercentEq,
    PlusEq,
    MinusEq,
    ShlEq,
    ShrEq,
    AmpEq,
    CaretEq,
    PipeEq,
    HashHash,
    Ellipsis,
}

impl RawTag {
    /// True for every punctuator variant (single- or multi-character).
    /// These need no cooking: `cc_lexer` maps them 1:1 onto `TokenKind`.
    #[must_use]
    pub const fn is_punctuator(self) -> bool {
        !matches!(
            self,
            Self::End
                | Self::Whitespace
                | Self::Newline
                | Self::Ident
                | Self::PpNumber
                | Self::String
                | Self::Char
                | Self::InvalidByte
        )
    }
}

/// A raw lexeme: its classification plus byte length. Carries no payload —
/// the caller re-reads `len` bytes from the source to get the spelling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    /// What kind of lexeme this is.
    pub tag: RawTag,
    /// Length in bytes of the lexeme (not including any leading
    /// whitespace — that is reported as its own [`RawTag::Whitespace`]
    /// token).
    pub len: u32,
}

impl RawToken {
    /// Build a raw token.
    #[must_use]
    pub const fn new(tag: RawTag, len: u32) -> Self {
        Self { tag, len }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuators_are_flagged() {
        assert!(RawTag::Plus.is_punctuator());
        assert!(RawTag::Ellipsis.is_punctuator());
        assert!(!RawTag::Ident.is_punctuator());
        assert!(!RawTag::Whitespace.is_punctuator());
        assert!(!RawTag::End.is_punctuator());
    }
}
