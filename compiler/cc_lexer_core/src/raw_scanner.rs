//! Raw lexeme scanner: bytes in, `(RawTag, len)` pairs out.
//!
//! No interning, no keyword lookup, no escape decoding — `cc_lexer`'s
//! cooking layer does all of that from the spelling this scanner hands
//! back. The only standard-sensitive decision this crate makes is
//! whether a preprocessing number's `p`/`P` exponent sign is part of the
//! number (hex-float literals, C99 and newer) or not.

use crate::{Cursor, RawTag, RawToken, SourceBuffer};

/// True for the byte classes a C identifier may start with.
const fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// True for the byte classes a C identifier may continue with.
const fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Scans raw lexemes from a [`SourceBuffer`], one at a time.
///
/// Holds no state beyond the current [`Cursor`] position and the
/// standard-level flag that gates hex-float exponents — the same
/// "cursor in, cursor out" shape the tokenizer built on top of this
/// crate uses (see `cc_lexer::Tokenizer`).
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
    /// Whether a `p`/`P` exponent sign is accepted in a preprocessing
    /// number (C99-or-newer hex-float literals).
    allow_hex_float_exponent: bool,
}

impl<'a> RawScanner<'a> {
    /// Build a scanner positioned at the start of `buf`.
    #[must_use]
    pub fn new(buf: &'a SourceBuffer, allow_hex_float_exponent: bool) -> Self {
        Self {
            cursor: buf.cursor(),
            allow_hex_float_exponent,
        }
    }

    /// Current byte offset into the source.
    #[must_use]
    pub const fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Reposition the scanner, e.g. after skipping blanks between two
    /// adjacent string literals.
    pub fn set_pos(&mut self, pos: u32) {
        self.cursor.set_pos(pos);
    }

    /// Scan and consume the next raw lexeme.
    pub fn next_raw_token(&mut self) -> RawToken {
        let start = self.cursor.pos();

        if self.cursor.is_eof() {
            return RawToken::new(RawTag::End, 0);
        }

        let b = self.cursor.peek();
        match b {
            b' ' | b'\t' => self.scan_whitespace(start),
            b'\n' => self.scan_newline(start),
            b'\r' if self.cursor.peek2() == b'\n' => {
                self.cursor.bump();
                self.cursor.bump();
                RawToken::new(RawTag::Newline, 2)
            }
            _ if is_ident_start(b) => self.scan_ident(start),
            b'0'..=b'9' => self.scan_pp_number(start),
            b'.' if self.cursor.peek2().is_ascii_digit() => self.scan_pp_number(start),
            b'"' => self.scan_string(start),
            b'\'' => self.scan_char(start),
            _ => self.scan_operator(start),
        }
    }

    fn len_since(&self, start: u32) -> u32 {
        self.cursor.pos() - start
    }

    fn scan_whitespace(&mut self, start: u32) -> RawToken {
        while matches!(self.cursor.peek(), b' ' | b'\t') {
            self.cursor.bump();
        }
        RawToken::new(RawTag::Whitespace, self.len_since(start))
    }

    fn scan_newline(&mut self, start: u32) -> RawToken {
        self.cursor.bump();
        RawToken::new(RawTag::Newline, self.len_since(start))
    }

    fn scan_ident(&mut self, start: u32) -> RawToken {
        while is_ident_continue(self.cursor.peek()) {
            self.cursor.bump();
        }
        RawToken::new(RawTag::Ident, self.len_since(start))
    }

    /// `(\.)?[0-9](\.|[a-zA-Z_0-9]|[eE][+-]|[pP][+-])*`, the `p`/`P`-sign
    /// alternative gated on `allow_hex_float_exponent`.
    fn scan_pp_number(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'.' {
            self.cursor.bump();
        }
        self.cursor.bump(); // the leading digit

        loop {
            match self.cursor.peek() {
                b'.' => {
                    self.cursor.bump();
                }
                b'e' | b'E' => {
                    self.cursor.bump();
                    if matches!(self.cursor.peek(), b'+' | b'-') {
                        self.cursor.bump();
                    }
                }
                b'p' | b'P' => {
                    self.cursor.bump();
                    if self.allow_hex_float_exponent && matches!(self.cursor.peek(), b'+' | b'-') {
                        self.cursor.bump();
                    }
                }
                b if is_ident_continue(b) => {
                    self.cursor.bump();
                }
                _ => break,
            }
        }
        RawToken::new(RawTag::PpNumber, self.len_since(start))
    }

    /// Scans to the matching, unescaped closing quote, or to end of line
    /// / end of input if none is found (the scanner does not diagnose
    /// this — `cc_lexer` checks whether the closing quote was consumed).
    fn scan_string(&mut self, start: u32) -> RawToken {
        self.cursor.bump(); // opening quote
        loop {
            match self.cursor.peek() {
                b'"' => {
                    self.cursor.bump();
                    break;
                }
                b'\\' => {
                    self.cursor.bump();
                    if !self.cursor.is_eof() {
                        self.cursor.bump();
                    }
                }
                b'\n' | 0 => break,
                _ => {
                    self.cursor.bump();
                }
            }
        }
        RawToken::new(RawTag::String, self.len_since(start))
    }

    fn scan_char(&mut self, start: u32) -> RawToken {
        self.cursor.bump(); // opening quote
        loop {
            match self.cursor.peek() {
                b'\'' => {
                    self.cursor.bump();
                    break;
                }
                b'\\' => {
                    self.cursor.bump();
                    if !self.cursor.is_eof() {
                        self.cursor.bump();
                    }
                }
                b'\n' | 0 => break,
                _ => {
                    self.cursor.bump();
                }
            }
        }
        RawToken::new(RawTag::Char, self.len_since(start))
    }

    /// Greedy longest-match punctuator/operator scan.
    fn scan_operator(&mut self, start: u32) -> RawToken {
        let tag = match self.cursor.bump() {
            b'*' => self.maybe_eq(RawTag::Star, RawTag::StarEq),
            b'/' => self.maybe_eq(RawTag::Slash, RawTag::SlashEq),
            b'%' => self.maybe_eq(RawTag::Percent, RawTag::PercentEq),
            b'^' => self.maybe_eq(RawTag::Caret, RawTag::CaretEq),
            b'+' => match self.cursor.peek() {
                b'+' => {
                    self.cursor.bump();
                    RawTag::PlusPlus
                }
                b'=' => {
                    self.cursor.bump();
                    RawTag::PlusEq
                }
                _ => RawTag::Plus,
            },
            b'-' => match self.cursor.peek() {
                b'>' => {
                    self.cursor.bump();
                    RawTag::Arrow
                }
                b'-' => {
                    self.cursor.bump();
                    RawTag::MinusMinus
                }
                b'=' => {
                    self.cursor.bump();
                    RawTag::MinusEq
                }
                _ => RawTag::Minus,
            },
            b'<' => match self.cursor.peek() {
                b'=' => {
                    self.cursor.bump();
                    RawTag::LtEq
                }
                b'<' => {
                    self.cursor.bump();
                    if self.cursor.peek() == b'=' {
                        self.cursor.bump();
                        RawTag::ShlEq
                    } else {
                        RawTag::Shl
                    }
                }
                _ => RawTag::Lt,
            },
            b'>' => match self.cursor.peek() {
                b'=' => {
                    self.cursor.bump();
                    RawTag::GtEq
                }
                b'>' => {
                    self.cursor.bump();
                    if self.cursor.peek() == b'=' {
                        self.cursor.bump();
                        RawTag::ShrEq
                    } else {
                        RawTag::Shr
                    }
                }
                _ => RawTag::Gt,
            },
            b'&' => match self.cursor.peek() {
                b'=' => {
                    self.cursor.bump();
                    RawTag::AmpEq
                }
                b'&' => {
                    self.cursor.bump();
                    RawTag::AmpAmp
                }
                _ => RawTag::Amp,
            },
            b'|' => match self.cursor.peek() {
                b'=' => {
                    self.cursor.bump();
                    RawTag::PipeEq
                }
                b'|' => {
                    self.cursor.bump();
                    RawTag::PipePipe
                }
                _ => RawTag::Pipe,
            },
            b'.' => {
                if self.cursor.peek() == b'.' && self.cursor.peek2() == b'.' {
                    self.cursor.bump();
                    self.cursor.bump();
                    RawTag::Ellipsis
                } else {
                    RawTag::Dot
                }
            }
            b'=' => self.maybe_eq(RawTag::Eq, RawTag::EqEq),
            b'!' => self.maybe_eq(RawTag::Bang, RawTag::NotEq),
            b'#' => {
                if self.cursor.peek() == b'#' {
                    self.cursor.bump();
                    RawTag::HashHash
                } else {
                    RawTag::Hash
                }
            }
            b'(' => RawTag::LParen,
            b')' => RawTag::RParen,
            b',' => RawTag::Comma,
            b':' => RawTag::Colon,
            b';' => RawTag::Semicolon,
            b'?' => RawTag::Question,
            b'[' => RawTag::LBracket,
            b']' => RawTag::RBracket,
            b'{' => RawTag::LBrace,
            b'}' => RawTag::RBrace,
            b'~' => RawTag::Tilde,
            _ => RawTag::InvalidByte,
        };
        RawToken::new(tag, self.len_since(start))
    }

    /// `byte` alone, or `byte=` as the compound-assign form.
    fn maybe_eq(&mut self, plain: RawTag, compound: RawTag) -> RawTag {
        if self.cursor.peek() == b'=' {
            self.cursor.bump();
            compound
        } else {
            plain
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_all(src: &str, allow_hex_float_exponent: bool) -> Vec<RawToken> {
        let buf = SourceBuffer::new(src);
        let mut scanner = RawScanner::new(&buf, allow_hex_float_exponent);
        let mut out = Vec::new();
        loop {
            let tok = scanner.next_raw_token();
            let done = tok.tag == RawTag::End;
            out.push(tok);
            if done {
                break;
            }
        }
        out
    }

    #[test]
    fn empty_input_is_just_end() {
        let toks = scan_all("", false);
        assert_eq!(toks, vec![RawToken::new(RawTag::End, 0)]);
    }

    #[test]
    fn whitespace_is_coalesced() {
        let toks = scan_all("   x", false);
        assert_eq!(toks[0], RawToken::new(RawTag::Whitespace, 3));
        assert_eq!(toks[1], RawToken::new(RawTag::Ident, 1));
    }

    #[test]
    fn newline_is_its_own_token() {
        let toks = scan_all("a\nb", false);
        assert_eq!(toks[0].tag, RawTag::Ident);
        assert_eq!(toks[1], RawToken::new(RawTag::Newline, 1));
        assert_eq!(toks[2].tag, RawTag::Ident);
    }

    #[test]
    fn identifier_spelling() {
        let toks = scan_all("_foo123 bar", false);
        assert_eq!(toks[0], RawToken::new(RawTag::Ident, 7));
    }

    #[test]
    fn pp_number_leading_dot() {
        let toks = scan_all(".5f", false);
        assert_eq!(toks[0], RawToken::new(RawTag::PpNumber, 3));
    }

    #[test]
    fn pp_number_hex_with_suffix() {
        let toks = scan_all("0xFFu", false);
        assert_eq!(toks[0], RawToken::new(RawTag::PpNumber, 5));
    }

    #[test]
    fn pp_number_float_exponent_always_allowed() {
        let toks = scan_all("1.5e-2f", false);
        assert_eq!(toks[0], RawToken::new(RawTag::PpNumber, 7));
    }

    #[test]
    fn pp_number_hex_float_exponent_gated_on_standard() {
        let pre_c99 = scan_all("0x1p+4", false);
        // 'p' consumed as a generic letter, but the '+' sign is not part
        // of the preprocessing number pre-C99, so it stops right after 'p'.
        assert_eq!(pre_c99[0], RawToken::new(RawTag::PpNumber, 4));
        assert_eq!(pre_c99[1].tag, RawTag::Plus);

        let c99 = scan_all("0x1p+4", true);
        assert_eq!(c99[0], RawToken::new(RawTag::PpNumber, 6));
    }

    #[test]
    fn string_literal_extent_includes_quotes_and_escapes() {
        let toks = scan_all(r#""a\"b""#, false);
        assert_eq!(toks[0], RawToken::new(RawTag::String, 6));
    }

    #[test]
    fn unterminated_string_stops_at_newline() {
        let toks = scan_all("\"abc\nrest", false);
        assert_eq!(toks[0], RawToken::new(RawTag::String, 4));
    }

    #[test]
    fn char_literal_with_escape() {
        let toks = scan_all(r"'\x41'", false);
        assert_eq!(toks[0], RawToken::new(RawTag::Char, 6));
    }

    #[test]
    fn operator_longest_match() {
        assert_eq!(scan_all(">>=", false)[0], RawToken::new(RawTag::ShrEq, 3));
        assert_eq!(scan_all(">>", false)[0], RawToken::new(RawTag::Shr, 2));
        assert_eq!(scan_all(">", false)[0], RawToken::new(RawTag::Gt, 1));
    }

    #[test]
    fn ellipsis_vs_two_dots() {
        let toks = scan_all("...", false);
        assert_eq!(toks[0], RawToken::new(RawTag::Ellipsis, 3));
    }

    #[test]
    fn hash_hash_for_token_paste() {
        assert_eq!(scan_all("##", false)[0], RawToken::new(RawTag::HashHash, 2));
        assert_eq!(scan_all("#", false)[0], RawToken::new(RawTag::Hash, 1));
    }

    #[test]
    fn invalid_byte_is_reported_and_skipped() {
        let toks = scan_all("@x", false);
        assert_eq!(toks[0], RawToken::new(RawTag::InvalidByte, 1));
        assert_eq!(toks[1], RawToken::new(RawTag::Ident, 1));
    }
}
