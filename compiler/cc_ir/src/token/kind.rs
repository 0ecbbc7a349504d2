//! [`TokenKind`]: the payload-carrying counterpart to [`super::TokenTag`].
//!
//! `TokenTag` is a plain discriminant used for table lookups and bitsets;
//! `TokenKind` is the Rust sum type the tokenizer actually produces, folding
//! the tag and the payload union the spec describes into one enum rather
//! than keeping them as separate fields glued together by an untagged
//! union.

use crate::{CompactString, Number};

use super::TokenTag;

/// One token's classification, carrying whatever payload that class needs.
///
/// Identifiers, string-literal content, and raw preprocessing-number
/// spellings carry a [`CompactString`]; converted numeric literals carry a
/// [`Number`]. Every other variant is a unit keyword, punctuator, operator,
/// or category marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TokenKind {
    /// Sentinel returned once the input is exhausted.
    End,
    /// Explicit newline token, distinct from horizontal whitespace.
    Newline,
    /// Identifier spelling not matched by the keyword trie.
    Identifier(CompactString),
    /// Converted numeric literal.
    Number(Number),
    /// String-literal content, already escape-resolved and concatenated.
    String(CompactString),
    /// Raw preprocessing-number spelling, before `NumberConverter` runs.
    PrepNumber(CompactString),
    /// Macro-parameter placeholder, assigned by the macro expander.
    Parameter,
    /// Empty macro-argument placeholder, assigned by the macro expander.
    EmptyArg,

    // === Keywords ===
    KwAuto,
    KwBreak,
    KwCase,
    KwChar,
    KwConst,
    KwContinue,
    KwDefault,
    KwDo,
    KwDouble,
    KwElse,
    KwEnum,
    KwExtern,
    KwFloat,
    KwFor,
    KwGoto,
    KwIf,
    KwInt,
    KwLong,
    KwRegister,
    KwReturn,
    KwShort,
    KwSigned,
    KwSizeof,
    KwStatic,
    KwStruct,
    KwSwitch,
    KwTypedef,
    KwUnion,
    KwUnsigned,
    KwVoid,
    KwVolatile,
    KwWhile,

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

impl TokenKind {
    /// The [`TokenTag`] this kind reduces to, dropping any payload.
    #[must_use]
    #[expect(clippy::too_many_lines, reason = "exhaustive TokenKind -> TokenTag dispatch")]
    pub const fn tag(&self) -> TokenTag {
        match self {
            Self::End => TokenTag::End,
            Self::Newline => TokenTag::Newline,
            Self::Identifier(_) => TokenTag::Identifier,
            Self::Number(_) => TokenTag::Number,
            Self::String(_) => TokenTag::String,
            Self::PrepNumber(_) => TokenTag::PrepNumber,
            Self::Parameter => TokenTag::Parameter,
            Self::EmptyArg => TokenTag::EmptyArg,
            Self::KwAuto => TokenTag::KwAuto,
            Self::KwBreak => TokenTag::KwBreak,
            Self::KwCase => TokenTag::KwCase,
            Self::KwChar => TokenTag::KwChar,
            Self::KwConst => TokenTag::KwConst,
            Self::KwContinue => TokenTag::KwContinue,
            Self::KwDefault => TokenTag::KwDefault,
            Self::KwDo => TokenTag::KwDo,
            Self::KwDouble => TokenTag::KwDouble,
            Self::KwElse => TokenTag::KwElse,
            Self::KwEnum => TokenTag::KwEnum,
            Self::KwExtern => TokenTag::KwExtern,
            Self::KwFloat => TokenTag::KwFloat,
            Self::KwFor => TokenTag::KwFor,
            Self::KwGoto => TokenTag::KwGoto,
            Self::KwIf => TokenTag::KwIf,
            Self::KwInt => TokenTag::KwInt,
            Self::KwLong => TokenTag::KwLong,
            Self::KwRegister => TokenTag::KwRegister,
            Self::KwReturn => TokenTag::KwReturn,
            Self::KwShort => TokenTag::KwShort,
            Self::KwSigned => TokenTag::KwSigned,
            Self::KwSizeof => TokenTag::KwSizeof,
            Self::KwStatic => TokenTag::KwStatic,
            Self::KwStruct => TokenTag::KwStruct,
            Self::KwSwitch => TokenTag::KwSwitch,
            Self::KwTypedef => TokenTag::KwTypedef,
            Self::KwUnion => TokenTag::KwUnion,
            Self::KwUnsigned => TokenTag::KwUnsigned,
            Self::KwVoid => TokenTag::KwVoid,
            Self::KwVolatile => TokenTag::KwVolatile,
            Self::KwWhile => TokenTag::KwWhile,
            Self::Bang => TokenTag::Bang,
            Self::Hash => TokenTag::Hash,
            Self::Percent => TokenTag::Percent,
            Self::Amp => TokenTag::Amp,
            Self::LParen => TokenTag::LParen,
            Self::RParen => TokenTag::RParen,
            Self::Star => TokenTag::Star,
            Self::Plus => TokenTag::Plus,
            Self::Comma => TokenTag::Comma,
            Self::Minus => TokenTag::Minus,
            Self::Dot => TokenTag::Dot,
            Self::Slash => TokenTag::Slash,
            Self::Colon => TokenTag::Colon,
            Self::Semicolon => TokenTag::Semicolon,
            Self::Lt => TokenTag::Lt,
            Self::Eq => TokenTag::Eq,
            Self::Gt => TokenTag::Gt,
            Self::Question => TokenTag::Question,
            Self::LBracket => TokenTag::LBracket,
            Self::RBracket => TokenTag::RBracket,
            Self::Caret => TokenTag::Caret,
            Self::LBrace => TokenTag::LBrace,
            Self::Pipe => TokenTag::Pipe,
            Self::RBrace => TokenTag::RBrace,
            Self::Tilde => TokenTag::Tilde,
            Self::PipePipe => TokenTag::PipePipe,
            Self::AmpAmp => TokenTag::AmpAmp,
            Self::LtEq => TokenTag::LtEq,
            Self::GtEq => TokenTag::GtEq,
            Self::EqEq => TokenTag::EqEq,
            Self::NotEq => TokenTag::NotEq,
            Self::Arrow => TokenTag::Arrow,
            Self::PlusPlus => TokenTag::PlusPlus,
            Self::MinusMinus => TokenTag::MinusMinus,
            Self::Shl => TokenTag::Shl,
            Self::Shr => TokenTag::Shr,
            Self::StarEq => TokenTag::StarEq,
            Self::SlashEq => TokenTag::SlashEq,
            Self::PercentEq => TokenTag::PercentEq,
            Self::PlusEq => TokenTag::PlusEq,
            Self::MinusEq => TokenTag::MinusEq,
            Self::ShlEq => TokenTag::ShlEq,
            Self::ShrEq => TokenTag::ShrEq,
            Self::AmpEq => TokenTag::AmpEq,
            Self::CaretEq => TokenTag::CaretEq,
            Self::PipeEq => TokenTag::PipeEq,
            Self::HashHash => TokenTag::HashHash,
            Self::Ellipsis => TokenTag::Ellipsis,
        }
    }

    /// True if this token can start a primary expression. Used by callers
    /// doing ad-hoc recovery; the tokenizer itself never consults this.
    #[must_use]
    pub const fn can_start_expr(&self) -> bool {
        matches!(
            self,
            Self::Identifier(_)
                | Self::Number(_)
                | Self::String(_)
                | Self::LParen
                | Self::Minus
                | Self::Bang
                | Self::Tilde
                | Self::Amp
                | Self::Star
                | Self::PlusPlus
                | Self::MinusMinus
                | Self::KwSizeof
        )
    }

    /// The canonical textual form of this token, used by token pasting
    /// (`##`) and by `Display`. Reconstructs the spelling for payload-
    /// carrying variants; otherwise defers to `TokenTag::text`.
    #[must_use]
    pub fn canonical_text(&self) -> std::borrow::Cow<'_, str> {
        match self {
            Self::Identifier(s) | Self::String(s) | Self::PrepNumber(s) => {
                std::borrow::Cow::Borrowed(s.as_str())
            }
            Self::Number(n) => std::borrow::Cow::Owned(n.canonical_text()),
            other => std::borrow::Cow::Borrowed(other.tag().text()),
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.canonical_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_round_trips_for_unit_variants() {
        assert_eq!(TokenKind::KwWhile.tag(), TokenTag::KwWhile);
        assert_eq!(TokenKind::Arrow.tag(), TokenTag::Arrow);
        assert_eq!(TokenKind::End.tag(), TokenTag::End);
    }

    #[test]
    fn canonical_text_for_identifier() {
        let ident = TokenKind::Identifier(CompactString::try_inline(b"x").unwrap());
        assert_eq!(ident.canonical_text(), "x");
        assert_eq!(ident.to_string(), "x");
    }

    #[test]
    fn canonical_text_for_number() {
        let n = TokenKind::Number(Number::UnsignedInt(255));
        assert_eq!(n.canonical_text(), "255u");
    }

    #[test]
    fn can_start_expr() {
        assert!(TokenKind::LParen.can_start_expr());
        assert!(!TokenKind::RParen.can_start_expr());
        assert!(TokenKind::KwSizeof.can_start_expr());
    }
}
