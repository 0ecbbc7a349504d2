//! Escape-sequence decoding for string and character literals.
//!
//! Operates on the raw lexeme bytes the scanner already delimited
//! (quotes included); the tokenizer strips the quotes and hands the
//! interior bytes here one escape at a time.

use cc_diagnostic::DiagnosticSink;
use cc_ir::Span;

use crate::LexError;

/// Decode one escape sequence starting at `bytes[*idx]`, which must be
/// `\\`. Advances `*idx` past the whole sequence (backslash included) and
/// returns the decoded byte.
///
/// Any unrecognized `\c` reports [`LexError::InvalidEscape`] through
/// `sink` and yields `c` verbatim, per the tokenizer's best-effort
/// recovery policy.
pub(crate) fn decode_escape(
    bytes: &[u8],
    idx: &mut usize,
    span: Span,
    sink: &impl DiagnosticSink,
) -> u8 {
    debug_assert_eq!(bytes[*idx], b'\\');
    *idx += 1;
    if *idx >= bytes.len() {
        return b'\\';
    }
    let c = bytes[*idx];
    match c {
        b'a' => {
            *idx += 1;
            0x07
        }
        b'b' => {
            *idx += 1;
            0x08
        }
        b't' => {
            *idx += 1;
            0x09
        }
        b'n' => {
            *idx += 1;
            0x0a
        }
        b'v' => {
            *idx += 1;
            0x0b
        }
        b'f' => {
            *idx += 1;
            0x0c
        }
        b'r' => {
            *idx += 1;
            0x0d
        }
        b'\\' => {
            *idx += 1;
            b'\\'
        }
        b'?' => {
            *idx += 1;
            b'?'
        }
        b'\'' => {
            *idx += 1;
            b'\''
        }
        b'"' => {
            *idx += 1;
            b'"'
        }
        b'0' => decode_octal(bytes, idx),
        b'x' => {
            *idx += 1;
            decode_hex(bytes, idx)
        }
        other => {
            *idx += 1;
            sink.error(span, LexError::InvalidEscape { ch: other as char }.to_string());
            other
        }
    }
}

/// Up to three octal digits (`strtol(..., 8)` semantics), truncated to a
/// byte.
fn decode_octal(bytes: &[u8], idx: &mut usize) -> u8 {
    let mut value: u32 = 0;
    let mut count = 0;
    while count < 3 && *idx < bytes.len() && matches!(bytes[*idx], b'0'..=b'7') {
        value = value * 8 + u32::from(bytes[*idx] - b'0');
        *idx += 1;
        count += 1;
    }
    #[expect(clippy::cast_possible_truncation, reason = "char constants are single-byte")]
    {
        value as u8
    }
}

/// Hex digits consumed greedily (`strtol(..., 16)` semantics), truncated
/// to a byte.
fn decode_hex(bytes: &[u8], idx: &mut usize) -> u8 {
    let mut value: u32 = 0;
    while *idx < bytes.len() {
        let Some(digit) = (bytes[*idx] as char).to_digit(16) else {
            break;
        };
        value = value.wrapping_mul(16).wrapping_add(digit);
        *idx += 1;
    }
    #[expect(clippy::cast_possible_truncation, reason = "char constants are single-byte")]
    {
        value as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cc_diagnostic::RecordingSink;

    fn decode(input: &[u8]) -> (u8, usize) {
        let sink = RecordingSink::new();
        let mut idx = 0;
        let byte = decode_escape(input, &mut idx, Span::new(0, input.len() as u32), &sink);
        (byte, idx)
    }

    #[test]
    fn named_escapes() {
        assert_eq!(decode(br"\n").0, b'\n');
        assert_eq!(decode(br"\t").0, b'\t');
        assert_eq!(decode(br"\\").0, b'\\');
        assert_eq!(decode(br#"\""#).0, b'"');
    }

    #[test]
    fn octal_escape_requires_leading_zero() {
        let (byte, consumed) = decode(b"\\012");
        assert_eq!(byte, 0o012);
        assert_eq!(consumed, 4);
    }

    #[test]
    fn bare_zero_is_octal_zero() {
        let (byte, consumed) = decode(b"\\0x");
        assert_eq!(byte, 0);
        assert_eq!(consumed, 2);
    }

    #[test]
    fn nonzero_digit_lead_is_invalid_escape_not_octal() {
        let sink = RecordingSink::new();
        let mut idx = 0;
        let byte = decode_escape(b"\\101", &mut idx, Span::new(0, 4), &sink);
        assert_eq!(byte, b'1');
        assert_eq!(idx, 2);
        assert!(sink.has_errors());
    }

    #[test]
    fn hex_escape_consumes_greedily() {
        let (byte, consumed) = decode(b"\\x41");
        assert_eq!(byte, 0x41);
        assert_eq!(consumed, 4);
    }

    #[test]
    fn unknown_escape_reports_and_emits_literal() {
        let sink = RecordingSink::new();
        let mut idx = 0;
        let byte = decode_escape(br"\q", &mut idx, Span::new(0, 2), &sink);
        assert_eq!(byte, b'q');
        assert!(sink.has_errors());
    }
}
