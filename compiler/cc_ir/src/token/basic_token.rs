//! Fixed lookup tables yielding the canonical [`TokenTag`] for a keyword
//! spelling or a single-character punctuator byte.
//!
//! Grounded on the `basic_token[]` array of the reference C tokenizer this
//! crate's scanner is modeled on, which is indexed both by token-kind
//! constant and, for single-character punctuators, by the literal ASCII
//! byte value. `BYTE_TABLE` here plays the same role as that byte-indexed
//! slice of the original array; `KEYWORDS` plays the role of the constants
//! the hand-written keyword trie returns on a match.

use super::TokenTag;

/// Every C89 keyword (plus `signed`/`volatile` and the float/double/long/
/// short type keywords the spec calls out) paired with its canonical tag.
///
/// This is the single source of truth for keyword spellings: the keyword
/// trie in `cc_lexer` matches against these same spellings and must return
/// the same tags.
pub const KEYWORDS: &[(&str, TokenTag)] = &[
    ("auto", TokenTag::KwAuto),
    ("break", TokenTag::KwBreak),
    ("case", TokenTag::KwCase),
    ("char", TokenTag::KwChar),
    ("const", TokenTag::KwConst),
    ("continue", TokenTag::KwContinue),
    ("default", TokenTag::KwDefault),
    ("do", TokenTag::KwDo),
    ("double", TokenTag::KwDouble),
    ("else", TokenTag::KwElse),
    ("enum", TokenTag::KwEnum),
    ("extern", TokenTag::KwExtern),
    ("float", TokenTag::KwFloat),
    ("for", TokenTag::KwFor),
    ("goto", TokenTag::KwGoto),
    ("if", TokenTag::KwIf),
    ("int", TokenTag::KwInt),
    ("long", TokenTag::KwLong),
    ("register", TokenTag::KwRegister),
    ("return", TokenTag::KwReturn),
    ("short", TokenTag::KwShort),
    ("signed", TokenTag::KwSigned),
    ("sizeof", TokenTag::KwSizeof),
    ("static", TokenTag::KwStatic),
    ("struct", TokenTag::KwStruct),
    ("switch", TokenTag::KwSwitch),
    ("typedef", TokenTag::KwTypedef),
    ("union", TokenTag::KwUnion),
    ("unsigned", TokenTag::KwUnsigned),
    ("void", TokenTag::KwVoid),
    ("volatile", TokenTag::KwVolatile),
    ("while", TokenTag::KwWhile),
];

/// Look up a spelling against [`KEYWORDS`]. Used by tests and as the
/// reference implementation the hand-written trie must agree with.
#[must_use]
pub fn keyword_tag(spelling: &str) -> Option<TokenTag> {
    KEYWORDS
        .iter()
        .find(|(kw, _)| *kw == spelling)
        .map(|(_, tag)| *tag)
}

/// Canonical tag for every single-character punctuator, indexed by the
/// character's own ASCII byte value. `None` for bytes that are never a
/// complete punctuator on their own (letters, digits, `"`, `'`, etc.) and
/// for anything outside the ASCII graphic range.
const fn build_byte_table() -> [Option<TokenTag>; 128] {
    let mut table: [Option<TokenTag>; 128] = [None; 128];
    table[b'!' as usize] = Some(TokenTag::Bang);
    table[b'#' as usize] = Some(TokenTag::Hash);
    table[b'%' as usize] = Some(TokenTag::Percent);
    table[b'&' as usize] = Some(TokenTag::Amp);
    table[b'(' as usize] = Some(TokenTag::LParen);
    table[b')' as usize] = Some(TokenTag::RParen);
    table[b'*' as usize] = Some(TokenTag::Star);
    table[b'+' as usize] = Some(TokenTag::Plus);
    table[b',' as usize] = Some(TokenTag::Comma);
    table[b'-' as usize] = Some(TokenTag::Minus);
    table[b'.' as usize] = Some(TokenTag::Dot);
    table[b'/' as usize] = Some(TokenTag::Slash);
    table[b':' as usize] = Some(TokenTag::Colon);
    table[b';' as usize] = Some(TokenTag::Semicolon);
    table[b'<' as usize] = Some(TokenTag::Lt);
    table[b'=' as usize] = Some(TokenTag::Eq);
    table[b'>' as usize] = Some(TokenTag::Gt);
    table[b'?' as usize] = Some(TokenTag::Question);
    table[b'[' as usize] = Some(TokenTag::LBracket);
    table[b']' as usize] = Some(TokenTag::RBracket);
    table[b'^' as usize] = Some(TokenTag::Caret);
    table[b'{' as usize] = Some(TokenTag::LBrace);
    table[b'|' as usize] = Some(TokenTag::Pipe);
    table[b'}' as usize] = Some(TokenTag::RBrace);
    table[b'~' as usize] = Some(TokenTag::Tilde);
    table
}

/// `BYTE_TABLE[b as usize]` is the single-character punctuator tag for
/// ASCII byte `b`, if any. The operator scanner falls back to this table
/// once it has ruled out every longer match starting with that byte.
pub const BYTE_TABLE: [Option<TokenTag>; 128] = build_byte_table();

/// Look up the canonical tag for a single-character punctuator byte.
#[must_use]
pub const fn punctuator_for_byte(byte: u8) -> Option<TokenTag> {
    if byte < 128 {
        BYTE_TABLE[byte as usize]
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_lookup() {
        assert_eq!(keyword_tag("while"), Some(TokenTag::KwWhile));
        assert_eq!(keyword_tag("whilex"), None);
        assert_eq!(keyword_tag(""), None);
    }

    #[test]
    fn all_keywords_distinct_spellings() {
        let mut seen = std::collections::HashSet::new();
        for (kw, _) in KEYWORDS {
            assert!(seen.insert(*kw), "duplicate keyword {kw}");
        }
        assert_eq!(KEYWORDS.len(), 32);
    }

    #[test]
    fn byte_table_covers_single_char_punctuators() {
        assert_eq!(punctuator_for_byte(b'('), Some(TokenTag::LParen));
        assert_eq!(punctuator_for_byte(b'a'), None);
        assert_eq!(punctuator_for_byte(b'"'), None);
        assert_eq!(punctuator_for_byte(0xFF), None);
    }
}
