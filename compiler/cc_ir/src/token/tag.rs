//! Compact discriminant tag for [`super::TokenKind`].
//!
//! Mirrors the "small integer key" `basic_token[]` uses in the C compiler
//! this scanner is modeled on: every keyword and punctuator maps to exactly
//! one `TokenTag`, and single-character punctuators additionally recover
//! their tag from the raw ASCII byte via
//! [`crate::token::basic_token::punctuator_for_byte`].
///
/// | Range  | Category                                    |
/// |--------|----------------------------------------------|
/// | 0      | End of input                                  |
/// | 1-32   | C89 keywords                                  |
/// | 33-57  | Single-character punctuators                  |
/// | 58-80  | Multi-character punctuators and operators     |
/// | 81     | Newline                                       |
/// | 82-87  | Category markers (identifier, number, ...)    |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenTag {
    /// Sentinel returned once the input is exhausted.
    End = 0,

    // === Keywords (1-32), C89 plus the reinstated float/double/long/short
    // and the `signed`/`volatile` pair the spec calls out explicitly. ===
    KwAuto = 1,
    KwBreak = 2,
    KwCase = 3,
    KwChar = 4,
    KwConst = 5,
    KwContinue = 6,
    KwDefault = 7,
    KwDo = 8,
    KwDouble = 9,
    KwElse = 10,
    KwEnum = 11,
    KwExtern = 12,
    KwFloat = 13,
    KwFor = 14,
    KwGoto = 15,
    KwIf = 16,
    KwInt = 17,
    KwLong = 18,
    KwRegister = 19,
    KwReturn = 20,
    KwShort = 21,
    KwSigned = 22,
    KwSizeof = 23,
    KwStatic = 24,
    KwStruct = 25,
    KwSwitch = 26,
    KwTypedef = 27,
    KwUnion = 28,
    KwUnsigned = 29,
    KwVoid = 30,
    KwVolatile = 31,
    KwWhile = 32,

    // === Single-character punctuators (33-56), indexed by ASCII byte
    // in `basic_token::BYTE_TABLE`. ===
    Bang = 33,      // !
    Hash = 34,      // #
    Percent = 35,   // %
    Amp = 36,       // &
    LParen = 37,    // (
    RParen = 38,    // )
    Star = 39,      // *
    Plus = 40,      // +
    Comma = 41,     // ,
    Minus = 42,     // -
    Dot = 43,       // .
    Slash = 44,     // /
    Colon = 45,     // :
    Semicolon = 46, // ;
    Lt = 47,        // <
    Eq = 48,        // =
    Gt = 49,        // >
    Question = 50,  // ?
    LBracket = 51,  // [
    RBracket = 52,  // ]
    Caret = 53,     // ^
    LBrace = 54,    // {
    Pipe = 55,      // |
    RBrace = 56,    // }
    Tilde = 57,     // ~

    // === Multi-character punctuators and operators (58-78). ===
    PipePipe = 58,   // ||
    AmpAmp = 59,     // &&
    LtEq = 60,       // <=
    GtEq = 61,       // >=
    EqEq = 62,       // ==
    NotEq = 63,      // !=
    Arrow = 64,      // ->
    PlusPlus = 65,   // ++
    MinusMinus = 66, // --
    Shl = 67,        // <<
    Shr = 68,        // >>
    StarEq = 69,     // *=
    SlashEq = 70,    // /=
    PercentEq = 71,  // %=
    PlusEq = 72,     // +=
    MinusEq = 73,    // -=
    ShlEq = 74,      // <<=
    ShrEq = 75,      // >>=
    AmpEq = 76,      // &=
    CaretEq = 77,    // ^=
    PipeEq = 78,     // |=
    HashHash = 79,   // ##
    Ellipsis = 80,   // ...

    /// Explicit `NEWLINE` token, distinct from horizontal whitespace.
    Newline = 81,

    // === Category markers (82-87). ===
    /// Identifier spelling not matched by the keyword trie.
    Identifier = 82,
    /// Converted numeric literal (see [`crate::Number`]).
    Number = 83,
    /// String-literal content, already escape-resolved and concatenated.
    String = 84,
    /// Raw preprocessing-number spelling, before `NumberConverter` runs.
    PrepNumber = 85,
    /// Macro-parameter placeholder, assigned by the macro expander.
    Parameter = 86,
    /// Empty macro-argument placeholder, assigned by the macro expander.
    EmptyArg = 87,
}

impl TokenTag {
    /// Largest discriminant in use, for bitset/table sizing.
    pub const MAX_DISCRIMINANT: u8 = Self::EmptyArg as u8;

    /// Canonical spelling, as it would appear in C source. Category
    /// markers (identifier, number, ...) return a descriptive label instead
    /// since they have no fixed spelling.
    #[must_use]
    #[expect(clippy::too_many_lines, reason = "exhaustive TokenTag -> text dispatch")]
    pub const fn text(self) -> &'static str {
        match self {
            Self::End => "end of file",
            Self::KwAuto => "auto",
            Self::KwBreak => "break",
            Self::KwCase => "case",
            Self::KwChar => "char",
            Self::KwConst => "const",
            Self::KwContinue => "continue",
            Self::KwDefault => "default",
            Self::KwDo => "do",
            Self::KwDouble => "double",
            Self::KwElse => "else",
            Self::KwEnum => "enum",
            Self::KwExtern => "extern",
            Self::KwFloat => "float",
            Self::KwFor => "for",
            Self::KwGoto => "goto",
            Self::KwIf => "if",
            Self::KwInt => "int",
            Self::KwLong => "long",
            Self::KwRegister => "register",
            Self::KwReturn => "return",
            Self::KwShort => "short",
            Self::KwSigned => "signed",
            Self::KwSizeof => "sizeof",
            Self::KwStatic => "static",
            Self::KwStruct => "struct",
            Self::KwSwitch => "switch",
            Self::KwTypedef => "typedef",
            Self::KwUnion => "union",
            Self::KwUnsigned => "unsigned",
            Self::KwVoid => "void",
            Self::KwVolatile => "volatile",
            Self::KwWhile => "while",
            Self::Bang => "!",
            Self::Hash => "#",
            Self::Percent => "%",
            Self::Amp => "&",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Star => "*",
            Self::Plus => "+",
            Self::Comma => ",",
            Self::Minus => "-",
            Self::Dot => ".",
            Self::Slash => "/",
            Self::Colon => ":",
            Self::Semicolon => ";",
            Self::Lt => "<",
            Self::Eq => "=",
            Self::Gt => ">",
            Self::Question => "?",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Caret => "^",
            Self::LBrace => "{",
            Self::Pipe => "|",
            Self::RBrace => "}",
            Self::Tilde => "~",
            Self::PipePipe => "||",
            Self::AmpAmp => "&&",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::EqEq => "==",
            Self::NotEq => "!=",
            Self::Arrow => "->",
            Self::PlusPlus => "++",
            Self::MinusMinus => "--",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::StarEq => "*=",
            Self::SlashEq => "/=",
            Self::PercentEq => "%=",
            Self::PlusEq => "+=",
            Self::MinusEq => "-=",
            Self::ShlEq => "<<=",
            Self::ShrEq => ">>=",
            Self::AmpEq => "&=",
            Self::CaretEq => "^=",
            Self::PipeEq => "|=",
            Self::HashHash => "##",
            Self::Ellipsis => "...",
            Self::Newline => "newline",
            Self::Identifier => "identifier",
            Self::Number => "number",
            Self::String => "string",
            Self::PrepNumber => "preprocessing number",
            Self::Parameter => "parameter",
            Self::EmptyArg => "empty argument",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discriminants_fit_in_one_byte() {
        assert!(TokenTag::MAX_DISCRIMINANT < 128);
    }

    #[test]
    fn keyword_and_punctuator_text() {
        assert_eq!(TokenTag::KwWhile.text(), "while");
        assert_eq!(TokenTag::Arrow.text(), "->");
        assert_eq!(TokenTag::Ellipsis.text(), "...");
    }
}
