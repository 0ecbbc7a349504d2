//! Token pasting (the `##` preprocessor operator, §4.4).
//!
//! Pasting is specified independently of the tokenizer's scanning loop: it
//! operates on two already-produced tokens, so it lives here as a free
//! function rather than a `Tokenizer` method.

use cc_ir::{Interner, Token, TokenKind};

/// Concatenate the canonical textual forms of `a` and `b`, register the
/// result through `interner`, and return it as a new `STRING`-kind token
/// with no leading whitespace of its own (`##` produces a token in place,
/// synthesized rather than scanned from source).
#[must_use]
pub fn paste_tokens(a: &Token, b: &Token, interner: &dyn Interner) -> Token {
    let mut text = String::with_capacity(a.kind.canonical_text().len() + b.kind.canonical_text().len());
    text.push_str(&a.kind.canonical_text());
    text.push_str(&b.kind.canonical_text());
    Token::bare(TokenKind::String(interner.register(text.as_bytes())))
}

#[cfg(test)]
mod tests {
    use cc_ir::{CompactString, Number, StringInterner};

    use super::*;

    #[test]
    fn pastes_two_identifiers() {
        let interner = StringInterner::new();
        let a = Token::bare(TokenKind::Identifier(CompactString::try_inline(b"foo").unwrap()));
        let b = Token::bare(TokenKind::Identifier(CompactString::try_inline(b"bar").unwrap()));
        let pasted = paste_tokens(&a, &b, &interner);
        match pasted.kind {
            TokenKind::String(s) => assert_eq!(s.as_str(), "foobar"),
            other => panic!("expected a string token, got {other:?}"),
        }
        assert_eq!(pasted.leading_whitespace, 0);
    }

    #[test]
    fn pastes_identifier_with_number() {
        let interner = StringInterner::new();
        let a = Token::bare(TokenKind::Identifier(CompactString::try_inline(b"x").unwrap()));
        let b = Token::bare(TokenKind::Number(Number::UnsignedInt(255)));
        let pasted = paste_tokens(&a, &b, &interner);
        match pasted.kind {
            TokenKind::String(s) => assert_eq!(s.as_str(), "x255u"),
            other => panic!("expected a string token, got {other:?}"),
        }
    }

    #[test]
    fn pastes_punctuator_with_punctuator() {
        let interner = StringInterner::new();
        let a = Token::bare(TokenKind::Hash);
        let b = Token::bare(TokenKind::Hash);
        let pasted = paste_tokens(&a, &b, &interner);
        match pasted.kind {
            TokenKind::String(s) => assert_eq!(s.as_str(), "##"),
            other => panic!("expected a string token, got {other:?}"),
        }
    }
}
