//! Tokenizer for C source text: cooks [`cc_lexer_core`]'s raw lexemes into
//! compiler-ready [`cc_ir::Token`]s.
//!
//! This crate is the "cooking" layer described in `cc_lexer_core`'s module
//! docs: it resolves the keyword trie, decodes string/character escapes,
//! converts preprocessing-number spellings into typed numeric literals, and
//! disambiguates the operator/punctuator forms `cc_lexer_core` hasn't
//! already folded into a single [`cc_lexer_core::RawTag`].
//!
//! The public entry point is [`Tokenizer`]; [`NumberConverter`] and
//! [`paste_tokens`] are exposed separately since a caller may need either
//! without driving a full tokenization pass (e.g. a macro expander
//! converting a pasted `##` result).

mod convert;
mod cook_escape;
mod cooker;
mod keywords;
mod lex_error;
mod paste;

pub use convert::{NumberConverter, NumberError};
pub use cooker::Tokenizer;
pub use lex_error::LexError;
pub use paste::paste_tokens;

#[cfg(test)]
mod tests {
    use cc_diagnostic::RecordingSink;
    use cc_ir::{Standard, StringInterner, TokenKind};
    use cc_lexer_core::SourceBuffer;

    use super::*;

    #[test]
    fn end_to_end_smoke_test() {
        let buf = SourceBuffer::new("int x = 42;");
        let interner = StringInterner::new();
        let sink = RecordingSink::new();
        let mut tokenizer = Tokenizer::new(&buf, Standard::C99, &interner, &sink);

        let mut kinds = Vec::new();
        loop {
            let t = tokenizer.next_token();
            let done = t.kind == TokenKind::End;
            kinds.push(t.kind);
            if done {
                break;
            }
        }

        assert_eq!(kinds[0], TokenKind::KwInt);
        assert!(matches!(kinds[1], TokenKind::Identifier(_)));
        assert_eq!(kinds[2], TokenKind::Eq);
        assert!(matches!(kinds[3], TokenKind::PrepNumber(_)));
        assert_eq!(kinds[4], TokenKind::Semicolon);
        assert_eq!(kinds[5], TokenKind::End);
        assert!(!sink.has_errors());
    }
}
