//! `cc-tokenize`: a CLI that feeds a C source file (or stdin) through
//! [`cc_lexer::Tokenizer`] and prints the resulting token stream.
//!
//! This crate is the "glue" layer: it wires together a [`SourceBuffer`],
//! a [`StringInterner`], a [`TerminalSink`] and a [`Tokenizer`] the way an
//! external caller would, and serves as both an end-to-end smoke test and
//! a worked usage example for the rest of the workspace.

pub mod tracing_setup;

use std::fmt::Write as _;

use cc_diagnostic::{ColorMode, TerminalSink};
use cc_ir::{BasicTypeTable, Standard, StringInterner, Token, TokenKind};
use cc_lexer::{NumberConverter, Tokenizer};
use cc_lexer_core::SourceBuffer;

/// Everything the driver needs to run a single tokenization pass.
pub struct RunConfig {
    pub standard: Standard,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { standard: Standard::C99 }
    }
}

/// Outcome of [`run`]: the full token stream plus whether any fatal
/// numeric-conversion error was hit along the way.
pub struct RunResult {
    pub tokens: Vec<Token>,
    pub fatal: bool,
}

/// Tokenize `source` to completion, converting every `PrepNumber` token
/// through [`NumberConverter`] as it's produced.
///
/// Unlike [`Tokenizer::with_eager_numbers`], a conversion failure here is
/// treated as fatal by the *caller*: scanning stops at the offending
/// token and `fatal` is set, matching the propagation policy described in
/// the diagnostic crate's docs (the library itself never decides to
/// abort — only this driver does).
pub fn run(source: &str, config: &RunConfig, sink: &TerminalSink<impl std::io::Write>) -> RunResult {
    let buf = SourceBuffer::new(source);
    let interner = StringInterner::new();
    let mut tokenizer = Tokenizer::new(&buf, config.standard, &interner, sink);

    let mut tokens = Vec::new();
    let mut fatal = false;
    loop {
        let token = tokenizer.next_token();
        let done = token.kind == TokenKind::End;
        if let TokenKind::PrepNumber(spelling) = &token.kind {
            match NumberConverter::convert(spelling.as_str(), config.standard, &BasicTypeTable) {
                Ok(n) => {
                    tokens.push(Token::new(TokenKind::Number(n), token.leading_whitespace));
                }
                Err(e) => {
                    sink.error(cc_ir::Span::new(0, 0), e.to_string());
                    fatal = true;
                    break;
                }
            }
        } else {
            tokens.push(token);
        }
        if done {
            break;
        }
    }

    RunResult { tokens, fatal }
}

/// Render a token stream one line per token, matching the shape a
/// `-fdump-tokens`-style diagnostic would take: index, kind, leading
/// whitespace width.
#[must_use]
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for (i, tok) in tokens.iter().enumerate() {
        let _ = writeln!(
            out,
            "{i:>4}: {kind:<20} ws={ws}",
            kind = format!("{:?}", tok.kind),
            ws = tok.leading_whitespace,
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_a_simple_declaration() {
        let sink = TerminalSink::new(std::io::sink(), ColorMode::Never, false);
        let result = run("int x = 42;", &RunConfig::default(), &sink);
        assert!(!result.fatal);
        assert_eq!(result.tokens[0].kind, TokenKind::KwInt);
        assert_eq!(result.tokens.last().unwrap().kind, TokenKind::End);
    }

    #[test]
    fn out_of_range_literal_is_fatal() {
        let sink = TerminalSink::new(std::io::sink(), ColorMode::Never, false);
        let result = run("0xFFFFFFFFFFFFFFFFu;", &RunConfig::default(), &sink);
        assert!(result.fatal);
    }

    #[test]
    fn format_tokens_produces_one_line_per_token() {
        let sink = TerminalSink::new(std::io::sink(), ColorMode::Never, false);
        let result = run("x;", &RunConfig::default(), &sink);
        let rendered = format_tokens(&result.tokens);
        assert_eq!(rendered.lines().count(), result.tokens.len());
    }
}
