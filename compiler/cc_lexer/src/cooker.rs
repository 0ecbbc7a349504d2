//! [`Tokenizer`]: cooks [`cc_lexer_core`] raw lexemes into [`Token`]s.

use cc_diagnostic::DiagnosticSink;
use cc_ir::{BasicTypeTable, Interner, Number, Span, Standard, Token, TokenKind, TokenTag};
use cc_lexer_core::{RawScanner, RawTag, SourceBuffer};
use tracing::{debug, warn};

use crate::cook_escape::decode_escape;
use crate::{LexError, NumberConverter};

/// Cooks a [`SourceBuffer`] into a stream of [`Token`]s, one at a time.
///
/// Owns its cursor position (via the embedded [`RawScanner`]); the caller
/// drives the tokenizer, not the cursor, by repeatedly calling
/// [`Tokenizer::next_token`] until it returns [`TokenKind::End`].
pub struct Tokenizer<'a, D: DiagnosticSink> {
    source: &'a SourceBuffer,
    scanner: RawScanner<'a>,
    standard: Standard,
    interner: &'a dyn Interner,
    sink: &'a D,
    /// When set, `PrepNumber` tokens are run through [`NumberConverter`]
    /// immediately and returned as `Number` tokens; a conversion failure
    /// is reported through `sink` and the raw `PrepNumber` token is
    /// returned instead, preserving `next_token`'s infallible contract
    /// (see `DESIGN.md`, Open Question OQ-2).
    eager_numbers: bool,
}

impl<'a, D: DiagnosticSink> Tokenizer<'a, D> {
    /// Build a tokenizer over `source`, lazily converting preprocessing
    /// numbers (the default — see [`Tokenizer::with_eager_numbers`]).
    #[must_use]
    pub fn new(source: &'a SourceBuffer, standard: Standard, interner: &'a dyn Interner, sink: &'a D) -> Self {
        debug!(standard = ?standard, len = source.len(), "Tokenizer::new");
        Self {
            source,
            scanner: RawScanner::new(source, standard.allows_hex_float_exponent()),
            standard,
            interner,
            sink,
            eager_numbers: false,
        }
    }

    /// Opt into eager `PrepNumber` -> `Number` conversion.
    #[must_use]
    pub fn with_eager_numbers(mut self, eager: bool) -> Self {
        self.eager_numbers = eager;
        self
    }

    /// Byte offset the tokenizer will resume scanning from.
    #[must_use]
    pub fn pos(&self) -> u32 {
        self.scanner.pos()
    }

    fn spelling(&self, start: u32, len: u32) -> &'a str {
        let bytes = &self.source.as_bytes()[start as usize..(start + len) as usize];
        std::str::from_utf8(bytes).unwrap_or_else(|e| unreachable!("scanner only spans ASCII identifier/number bytes: {e}"))
    }

    /// Produce the next token. Always succeeds: non-fatal errors are
    /// reported through the sink while scanning continues (see
    /// `DESIGN.md`, Error propagation policy).
    pub fn next_token(&mut self) -> Token {
        let mut leading_whitespace = 0u32;
        loop {
            let start = self.scanner.pos();
            let raw = self.scanner.next_raw_token();
            let kind = match raw.tag {
                RawTag::Whitespace => {
                    leading_whitespace += raw.len;
                    continue;
                }
                RawTag::End => TokenKind::End,
                RawTag::Newline => TokenKind::Newline,
                RawTag::Ident => self.cook_ident(start, raw.len),
                RawTag::PpNumber => self.cook_pp_number(start, raw.len),
                RawTag::String => self.cook_string(start, raw.len),
                RawTag::Char => self.cook_char(start, raw.len),
                RawTag::InvalidByte => {
                    let byte = self.source.as_bytes()[start as usize];
                    self.sink
                        .error(Span::new(start, start + 1), LexError::InvalidByte { byte }.to_string());
                    leading_whitespace = 0;
                    continue;
                }
                tag => cook_punctuator(tag),
            };
            return Token::new(kind, leading_whitespace);
        }
    }

    fn cook_ident(&mut self, start: u32, len: u32) -> TokenKind {
        let spelling = self.spelling(start, len);
        match crate::keywords::lookup(spelling) {
            Some(tag) => keyword_kind(tag),
            None => TokenKind::Identifier(self.interner.register(spelling.as_bytes())),
        }
    }

    fn cook_pp_number(&mut self, start: u32, len: u32) -> TokenKind {
        let spelling = self.spelling(start, len);
        let compact = self.interner.register(spelling.as_bytes());
        if self.eager_numbers {
            match NumberConverter::convert(compact.as_str(), self.standard, &BasicTypeTable) {
                Ok(n) => return TokenKind::Number(n),
                Err(e) => {
                    warn!(spelling, error = %e, "eager number conversion failed");
                    self.sink.error(Span::new(start, start + len), e.to_string());
                }
            }
        }
        TokenKind::PrepNumber(compact)
    }

    /// Decodes the escape-resolved interior of the string/char region
    /// `[start, start+len)` (quotes included in the region, excluded from
    /// the output) into `out`.
    fn append_literal_body(&self, start: u32, len: u32, quote: u8, out: &mut Vec<u8>) {
        let region = &self.source.as_bytes()[start as usize..(start + len) as usize];
        if region.first() != Some(&quote) {
            self.sink
                .error(Span::new(start, start + len), LexError::InvalidString.to_string());
        }
        let body_start = usize::from(region.first() == Some(&quote));
        let body_end = if region.len() > body_start && region[region.len() - 1] == quote {
            region.len() - 1
        } else {
            region.len()
        };
        let interior = &region[body_start..body_end];
        let mut idx = 0;
        while idx < interior.len() {
            if interior[idx] == b'\\' {
                out.push(decode_escape(interior, &mut idx, Span::new(start, start + len), self.sink));
            } else {
                out.push(interior[idx]);
                idx += 1;
            }
        }
    }

    /// Cooks a string literal, concatenating any further string literals
    /// separated from this one only by horizontal whitespace.
    fn cook_string(&mut self, start: u32, len: u32) -> TokenKind {
        let mut content = Vec::with_capacity(len as usize);
        self.append_literal_body(start, len, b'"', &mut content);

        loop {
            let before = self.scanner.pos();
            let raw = self.scanner.next_raw_token();
            match raw.tag {
                RawTag::Whitespace => {}
                RawTag::String => {
                    let body_start = self.scanner.pos() - raw.len;
                    self.append_literal_body(body_start, raw.len, b'"', &mut content);
                }
                _ => {
                    self.scanner.set_pos(before);
                    break;
                }
            }
        }

        TokenKind::String(self.interner.register(&content))
    }

    /// Cooks a character constant into an `int`-typed [`Number`] token.
    /// Only a single byte is retained (wide and multi-character constants
    /// are out of scope; see `DESIGN.md`).
    fn cook_char(&mut self, start: u32, len: u32) -> TokenKind {
        let region = &self.source.as_bytes()[start as usize..(start + len) as usize];
        let mut idx = usize::from(region.first() == Some(&b'\''));
        let value = if idx < region.len() && region[idx] != b'\'' {
            if region[idx] == b'\\' {
                decode_escape(region, &mut idx, Span::new(start, start + len), self.sink)
            } else {
                let b = region[idx];
                idx += 1;
                b
            }
        } else {
            0
        };
        let closed = idx < region.len() && region[idx] == b'\'';
        if !closed {
            self.sink
                .error(Span::new(start, start + len), LexError::InvalidCharacterConstant.to_string());
        }
        TokenKind::Number(Number::Int(i32::from(value)))
    }
}

/// Maps a keyword `TokenTag` (discriminants 1-32) onto its unit
/// `TokenKind` variant.
#[expect(clippy::too_many_lines, reason = "exhaustive keyword dispatch")]
fn keyword_kind(tag: TokenTag) -> TokenKind {
    match tag {
        TokenTag::KwAuto => TokenKind::KwAuto,
        TokenTag::KwBreak => TokenKind::KwBreak,
        TokenTag::KwCase => TokenKind::KwCase,
        TokenTag::KwChar => TokenKind::KwChar,
        TokenTag::KwConst => TokenKind::KwConst,
        TokenTag::KwContinue => TokenKind::KwContinue,
        TokenTag::KwDefault => TokenKind::KwDefault,
        TokenTag::KwDo => TokenKind::KwDo,
        TokenTag::KwDouble => TokenKind::KwDouble,
        TokenTag::KwElse => TokenKind::KwElse,
        TokenTag::KwEnum => TokenKind::KwEnum,
        TokenTag::KwExtern => TokenKind::KwExtern,
        TokenTag::KwFloat => TokenKind::KwFloat,
        TokenTag::KwFor => TokenKind::KwFor,
        TokenTag::KwGoto => TokenKind::KwGoto,
        TokenTag::KwIf => TokenKind::KwIf,
        TokenTag::KwInt => TokenKind::KwInt,
        TokenTag::KwLong => TokenKind::KwLong,
        TokenTag::KwRegister => TokenKind::KwRegister,
        TokenTag::KwReturn => TokenKind::KwReturn,
        TokenTag::KwShort => TokenKind::KwShort,
        TokenTag::KwSigned => TokenKind::KwSigned,
        TokenTag::KwSizeof => TokenKind::KwSizeof,
        TokenTag::KwStatic => TokenKind::KwStatic,
        TokenTag::KwStruct => TokenKind::KwStruct,
        TokenTag::KwSwitch => TokenKind::KwSwitch,
        TokenTag::KwTypedef => TokenKind::KwTypedef,
        TokenTag::KwUnion => TokenKind::KwUnion,
        TokenTag::KwUnsigned => TokenKind::KwUnsigned,
        TokenTag::KwVoid => TokenKind::KwVoid,
        TokenTag::KwVolatile => TokenKind::KwVolatile,
        TokenTag::KwWhile => TokenKind::KwWhile,
        other => unreachable!("{other:?} is not a keyword tag"),
    }
}

/// Maps a punctuator [`RawTag`] onto its [`TokenKind`]. Both enums share
/// the same vocabulary of punctuator names by construction.
#[expect(clippy::too_many_lines, reason = "exhaustive punctuator dispatch")]
fn cook_punctuator(tag: RawTag) -> TokenKind {
    match tag {
        RawTag::Bang => TokenKind::Bang,
        RawTag::Hash => TokenKind::Hash,
        RawTag::Percent => TokenKind::Percent,
        RawTag::Amp => TokenKind::Amp,
        RawTag::LParen => TokenKind::LParen,
        RawTag::RParen => TokenKind::RParen,
        RawTag::Star => TokenKind::Star,
        RawTag::Plus => TokenKind::Plus,
        RawTag::Comma => TokenKind::Comma,
        RawTag::Minus => TokenKind::Minus,
        RawTag::Dot => TokenKind::Dot,
        RawTag::Slash => TokenKind::Slash,
        RawTag::Colon => TokenKind::Colon,
        RawTag::Semicolon => TokenKind::Semicolon,
        RawTag::Lt => TokenKind::Lt,
        RawTag::Eq => TokenKind::Eq,
        RawTag::Gt => TokenKind::Gt,
        RawTag::Question => TokenKind::Question,
        RawTag::LBracket => TokenKind::LBracket,
        RawTag::RBracket => TokenKind::RBracket,
        RawTag::Caret => TokenKind::Caret,
        RawTag::LBrace => TokenKind::LBrace,
        RawTag::Pipe => TokenKind::Pipe,
        RawTag::RBrace => TokenKind::RBrace,
        RawTag::Tilde => TokenKind::Tilde,
        RawTag::PipePipe => TokenKind::PipePipe,
        RawTag::AmpAmp => TokenKind::AmpAmp,
        RawTag::LtEq => TokenKind::LtEq,
        RawTag::GtEq => TokenKind::GtEq,
        RawTag::EqEq => TokenKind::EqEq,
        RawTag::NotEq => TokenKind::NotEq,
        RawTag::Arrow => TokenKind::Arrow,
        RawTag::PlusPlus => TokenKind::PlusPlus,
        RawTag::MinusMinus => TokenKind::MinusMinus,
        RawTag::Shl => TokenKind::Shl,
        RawTag::Shr => TokenKind::Shr,
        RawTag::StarEq => TokenKind::StarEq,
        RawTag::SlashEq => TokenKind::SlashEq,
        RawTag::PercentEq => TokenKind::PercentEq,
        RawTag::PlusEq => TokenKind::PlusEq,
        RawTag::MinusEq => TokenKind::MinusEq,
        RawTag::ShlEq => TokenKind::ShlEq,
        RawTag::ShrEq => TokenKind::ShrEq,
        RawTag::AmpEq => TokenKind::AmpEq,
        RawTag::CaretEq => TokenKind::CaretEq,
        RawTag::PipeEq => TokenKind::PipeEq,
        RawTag::HashHash => TokenKind::HashHash,
        RawTag::Ellipsis => TokenKind::Ellipsis,
        other => unreachable!("{other:?} is not a punctuator tag"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cc_diagnostic::RecordingSink;
    use cc_ir::StringInterner;

    fn tokenize_all(src: &str) -> Vec<TokenKind> {
        let buf = SourceBuffer::new(src);
        let interner = StringInterner::new();
        let sink = RecordingSink::new();
        let mut tok = Tokenizer::new(&buf, Standard::C99, &interner, &sink);
        let mut out = Vec::new();
        loop {
            let t = tok.next_token();
            let done = t.kind == TokenKind::End;
            out.push(t.kind);
            if done {
                break;
            }
        }
        out
    }

    #[test]
    fn empty_buffer_yields_one_end_token() {
        assert_eq!(tokenize_all(""), vec![TokenKind::End]);
    }

    #[test]
    fn scenario_int_x_equals_42() {
        let kinds = tokenize_all("int x = 42;");
        assert_eq!(kinds[0], TokenKind::KwInt);
        assert!(matches!(kinds[1], TokenKind::Identifier(_)));
        assert_eq!(kinds[2], TokenKind::Eq);
        assert!(matches!(kinds[3], TokenKind::PrepNumber(_)));
        assert_eq!(kinds[4], TokenKind::Semicolon);
        assert_eq!(kinds[5], TokenKind::End);
    }

    #[test]
    fn keyword_prefix_followed_by_suffix_is_an_identifier() {
        let kinds = tokenize_all("whilex");
        assert!(matches!(&kinds[0], TokenKind::Identifier(s) if s.as_str() == "whilex"));
    }

    #[test]
    fn leading_whitespace_is_tracked() {
        let buf = SourceBuffer::new("  x");
        let interner = StringInterner::new();
        let sink = RecordingSink::new();
        let mut tok = Tokenizer::new(&buf, Standard::C99, &interner, &sink);
        let t = tok.next_token();
        assert_eq!(t.leading_whitespace, 2);
    }

    #[test]
    fn adjacent_strings_concatenate() {
        let kinds = tokenize_all("\"hello\" \"world\"");
        match &kinds[0] {
            TokenKind::String(s) => assert_eq!(s.as_str(), "helloworld"),
            other => panic!("expected a string token, got {other:?}"),
        }
        assert_eq!(kinds[1], TokenKind::End);
    }

    #[test]
    fn strings_separated_by_a_newline_do_not_concatenate() {
        let kinds = tokenize_all("\"a\"\n\"b\"");
        assert!(matches!(&kinds[0], TokenKind::String(s) if s.as_str() == "a"));
        assert_eq!(kinds[1], TokenKind::Newline);
        assert!(matches!(&kinds[2], TokenKind::String(s) if s.as_str() == "b"));
    }

    #[test]
    fn char_literal_with_hex_escape() {
        let kinds = tokenize_all(r"'\x41'");
        assert_eq!(kinds[0], TokenKind::Number(Number::Int(65)));
    }

    #[test]
    fn operator_disambiguation() {
        assert_eq!(tokenize_all(">>=")[0], TokenKind::ShrEq);
        assert_eq!(tokenize_all(">>")[0], TokenKind::Shr);
        assert_eq!(tokenize_all(">")[0], TokenKind::Gt);
    }

    #[test]
    fn eager_number_conversion() {
        let buf = SourceBuffer::new("0xFFu");
        let interner = StringInterner::new();
        let sink = RecordingSink::new();
        let mut tok = Tokenizer::new(&buf, Standard::C99, &interner, &sink).with_eager_numbers(true);
        let t = tok.next_token();
        assert_eq!(t.kind, TokenKind::Number(Number::UnsignedInt(255)));
    }

    #[test]
    fn invalid_byte_is_reported_and_skipped() {
        let kinds = tokenize_all("@x");
        assert!(matches!(&kinds[0], TokenKind::Identifier(s) if s.as_str() == "x"));
    }
}
