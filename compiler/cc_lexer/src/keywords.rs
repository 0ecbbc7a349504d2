//! Keyword resolution: the spelling an identifier scan already captured is
//! classified against the fixed keyword set, or else it stays an
//! identifier.
//!
//! Expressed as nested `match` arms keyed on the first byte rather than a
//! lookup into [`cc_ir::KEYWORDS`] at runtime — the keyword set is small
//! (32 entries) and fixed at compile time, so this reads as the same
//! first-character trie the raw identifier scanner's maximal-munch
//! extent feeds into. [`lookup`] must agree with [`cc_ir::keyword_tag`]
//! for every entry in [`cc_ir::KEYWORDS`]; a unit test below enforces it.

use cc_ir::TokenTag;

/// Classify a fully-scanned identifier spelling as a keyword, if it is
/// one. `spelling` has already been through maximal munch (the raw
/// scanner does not stop partway through a longer identifier), so no
/// backtracking is needed here: a keyword spelling followed by more
/// identifier bytes was never split apart, it simply never reached this
/// function as that keyword in the first place.
#[must_use]
#[expect(clippy::too_many_lines, reason = "flat keyword trie, one arm per spelling")]
pub fn lookup(spelling: &str) -> Option<TokenTag> {
    let mut chars = spelling.bytes();
    let first = chars.next()?;
    match first {
        b'a' => match spelling {
            "auto" => Some(TokenTag::KwAuto),
            _ => None,
        },
        b'b' => match spelling {
            "break" => Some(TokenTag::KwBreak),
            _ => None,
        },
        b'c' => match spelling {
            "case" => Some(TokenTag::KwCase),
            "char" => Some(TokenTag::KwChar),
            "const" => Some(TokenTag::KwConst),
            "continue" => Some(TokenTag::KwContinue),
            _ => None,
        },
        b'd' => match spelling {
            "default" => Some(TokenTag::KwDefault),
            "do" => Some(TokenTag::KwDo),
            "double" => Some(TokenTag::KwDouble),
            _ => None,
        },
        b'e' => match spelling {
            "else" => Some(TokenTag::KwElse),
            "enum" => Some(TokenTag::KwEnum),
            "extern" => Some(TokenTag::KwExtern),
            _ => None,
        },
        b'f' => match spelling {
            "float" => Some(TokenTag::KwFloat),
            "for" => Some(TokenTag::KwFor),
            _ => None,
        },
        b'g' => match spelling {
            "goto" => Some(TokenTag::KwGoto),
            _ => None,
        },
        b'i' => match spelling {
            "if" => Some(TokenTag::KwIf),
            "int" => Some(TokenTag::KwInt),
            _ => None,
        },
        b'l' => match spelling {
            "long" => Some(TokenTag::KwLong),
            _ => None,
        },
        b'r' => match spelling {
            "register" => Some(TokenTag::KwRegister),
            "return" => Some(TokenTag::KwReturn),
            _ => None,
        },
        b's' => match spelling {
            "short" => Some(TokenTag::KwShort),
            "signed" => Some(TokenTag::KwSigned),
            "sizeof" => Some(TokenTag::KwSizeof),
            "static" => Some(TokenTag::KwStatic),
            "struct" => Some(TokenTag::KwStruct),
            "switch" => Some(TokenTag::KwSwitch),
            _ => None,
        },
        b't' => match spelling {
            "typedef" => Some(TokenTag::KwTypedef),
            _ => None,
        },
        b'u' => match spelling {
            "union" => Some(TokenTag::KwUnion),
            "unsigned" => Some(TokenTag::KwUnsigned),
            _ => None,
        },
        b'v' => match spelling {
            "void" => Some(TokenTag::KwVoid),
            "volatile" => Some(TokenTag::KwVolatile),
            _ => None,
        },
        b'w' => match spelling {
            "while" => Some(TokenTag::KwWhile),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agrees_with_cc_ir_keyword_table() {
        for (spelling, tag) in cc_ir::KEYWORDS {
            assert_eq!(lookup(spelling), Some(*tag), "mismatch for {spelling}");
        }
    }

    #[test]
    fn non_keyword_identifier_is_not_matched() {
        assert_eq!(lookup("whilex"), None);
        assert_eq!(lookup("x"), None);
        assert_eq!(lookup(""), None);
    }
}
