//! [`NumberConverter`]: turns a preprocessing-number spelling into a typed
//! [`Number`].

use cc_ir::{BasicType, Number, Standard, TypeTable};
use tracing::trace;

/// Fatal error from [`NumberConverter::convert`]. The caller (`cc_tokenize`)
/// decides what to do with it — the converter itself never aborts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumberError {
    /// Neither the integer nor the float parser consumed the whole
    /// preprocessing-number spelling.
    #[error("invalid numeric literal: `{spelling}`")]
    InvalidNumericLiteral {
        /// The offending spelling.
        spelling: String,
    },
    /// The parsed value does not fit in the type the suffixes selected.
    #[error("numeric literal `{spelling}` is out of range for its type")]
    OutOfRange {
        /// The offending spelling.
        spelling: String,
    },
}

/// Converts a preprocessing-number spelling (see `cc_lexer_core`'s
/// `PpNumber` raw tag) into a [`Number`].
pub struct NumberConverter;

impl NumberConverter {
    /// Run the conversion described in `DESIGN.md`'s `NumberConverter`
    /// section: try an integer parse first (C's `0`/`0x`/`0`-prefixed
    /// radix rules plus `u`/`l` suffixes), and fall back to a float parse
    /// when the integer parser can't consume the whole spelling.
    ///
    /// `standard` gates whether a `p`/`P` hex-float exponent sign was
    /// accepted by the scanner that produced this spelling — passed
    /// through here only for documentation purposes, since by the time a
    /// spelling reaches this function the scanner has already decided its
    /// extent; this converter only re-derives which *value* that spelling
    /// encodes, so it never itself inspects `standard`.
    ///
    /// # Errors
    /// Returns [`NumberError`] if the spelling is not a valid C numeric
    /// literal, or if it parses as an integer but the value does not fit
    /// the selected width.
    pub fn convert(
        spelling: &str,
        standard: Standard,
        types: &dyn TypeTable,
    ) -> Result<Number, NumberError> {
        let _ = standard;
        if let Some(result) = Self::try_integer(spelling, types) {
            return result;
        }
        Self::try_float(spelling)
    }

    /// Attempts the integer path. Returns `None` if the spelling isn't a
    /// clean integer-with-suffixes (so the caller should fall back to the
    /// float parser); `Some(Ok(..))`/`Some(Err(..))` once it is.
    fn try_integer(spelling: &str, types: &dyn TypeTable) -> Option<Result<Number, NumberError>> {
        let bytes = spelling.as_bytes();
        if bytes.first() == Some(&b'.') {
            return None; // leading dot is always a float
        }

        let (value, digits_end, overflowed) = Self::scan_digits(bytes);
        if digits_end == 0 {
            return None;
        }

        let ty = Self::scan_suffix(&spelling[digits_end..])?;
        trace!(spelling, ty = ty.name(), "integer suffix resolved");

        if overflowed {
            return Some(Err(NumberError::OutOfRange {
                spelling: spelling.to_owned(),
            }));
        }

        Some(Self::fit(spelling, value, ty, types))
    }

    /// Consumes the digit span starting at byte 0 (radix determined by the
    /// `0x`/`0`-prefix convention), returning the accumulated value, the
    /// byte offset just past the digits, and whether accumulation
    /// overflowed a `u64`.
    fn scan_digits(bytes: &[u8]) -> (u64, usize, bool) {
        let (radix, mut idx) = if bytes.len() > 1 && bytes[0] == b'0' && matches!(bytes[1], b'x' | b'X') {
            (16, 2)
        } else if bytes.first() == Some(&b'0') && bytes.len() > 1 {
            (8, 1)
        } else {
            (10, 0)
        };

        let mut value: u64 = 0;
        let mut overflowed = false;
        while idx < bytes.len() {
            let Some(digit) = (bytes[idx] as char).to_digit(radix) else {
                break;
            };
            idx += 1;
            match value
                .checked_mul(u64::from(radix))
                .and_then(|v| v.checked_add(u64::from(digit)))
            {
                Some(v) => value = v,
                None => overflowed = true,
            }
        }
        (value, idx, overflowed)
    }

    /// Parses the `u`/`l` suffix tail (case-insensitive, any order,
    /// `ll`/`LL` folded to `long`), returning the resulting [`BasicType`]
    /// starting from `int`. `None` if the tail contains anything else (the
    /// spelling is then not a clean integer, e.g. it has a float suffix or
    /// exponent).
    fn scan_suffix(tail: &str) -> Option<BasicType> {
        let bytes = tail.as_bytes();
        let mut ty = BasicType::Int;
        let mut idx = 0;
        let mut seen_u = false;
        let mut seen_l = false;
        while idx < bytes.len() {
            match bytes[idx] {
                b'u' | b'U' if !seen_u => {
                    seen_u = true;
                    ty = ty.to_unsigned();
                    idx += 1;
                }
                b'l' | b'L' if !seen_l => {
                    seen_l = true;
                    ty = ty.to_long();
                    idx += 1;
                    if idx < bytes.len() && bytes[idx] == bytes[idx - 1] {
                        idx += 1; // LL/ll folded into `long`, see DESIGN.md
                    }
                }
                _ => return None,
            }
        }
        Some(ty)
    }

    /// Checks `value` fits the width/signedness `ty` selects and builds
    /// the matching [`Number`] variant.
    fn fit(spelling: &str, value: u64, ty: BasicType, types: &dyn TypeTable) -> Result<Number, NumberError> {
        let bits = types.size_bytes(ty) * 8;
        let signed = types.is_signed(ty);
        let fits = if signed {
            bits >= 64 || value < (1u64 << (bits - 1))
        } else {
            bits >= 64 || value < (1u64 << bits)
        };
        if !fits {
            return Err(NumberError::OutOfRange {
                spelling: spelling.to_owned(),
            });
        }
        Ok(match ty {
            BasicType::Int => Number::Int(i32::try_from(value).unwrap_or(i32::MAX)),
            BasicType::UnsignedInt => Number::UnsignedInt(u32::try_from(value).unwrap_or(u32::MAX)),
            BasicType::Long => Number::Long(i64::try_from(value).unwrap_or(i64::MAX)),
            BasicType::UnsignedLong => Number::UnsignedLong(value),
            BasicType::Float | BasicType::Double => {
                unreachable!("integer suffix scan never selects a floating-point type")
            }
        })
    }

    /// Float fallback: trims a trailing `f`/`F` single-precision suffix,
    /// then parses the remaining body either as a C99 hex-float (`0x`/`0X`
    /// prefix, `p`/`P` binary exponent — the raw scanner only accepts this
    /// form under `Standard::C99` or newer) or as an ordinary decimal
    /// float via `str::parse::<f64>`.
    fn try_float(spelling: &str) -> Result<Number, NumberError> {
        let (body, single_precision) = match spelling.strip_suffix(['f', 'F']) {
            Some(body) => (body, true),
            None => (spelling, false),
        };
        let bytes = body.as_bytes();
        let value = if bytes.len() > 1 && bytes[0] == b'0' && matches!(bytes[1], b'x' | b'X') {
            Self::parse_hex_float(body).ok_or_else(|| NumberError::InvalidNumericLiteral {
                spelling: spelling.to_owned(),
            })?
        } else {
            body.parse().map_err(|_| NumberError::InvalidNumericLiteral {
                spelling: spelling.to_owned(),
            })?
        };
        Ok(if single_precision {
            #[expect(clippy::cast_possible_truncation, reason = "explicit single-precision suffix")]
            Number::Float(value as f32)
        } else {
            Number::Double(value)
        })
    }

    /// Decodes a C99 hex-float body (`0x`/`0X` prefix already confirmed by
    /// the caller, no trailing `f`/`F` suffix): a hex mantissa (optional
    /// `.`) followed by a required `p`/`P` binary exponent, as `strtod`
    /// decodes `0x1.8p3` to `12.0`. Returns `None` for anything that
    /// doesn't fit this shape, which the caller reports as an invalid
    /// numeric literal.
    fn parse_hex_float(body: &str) -> Option<f64> {
        let rest = &body[2..]; // skip "0x"/"0X"
        let (mantissa, exponent) = rest.split_once(['p', 'P'])?;
        let exponent: i32 = exponent.parse().ok()?;

        let (int_part, frac_part) = match mantissa.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (mantissa, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return None;
        }

        let mut value = 0.0f64;
        for c in int_part.chars() {
            value = value * 16.0 + f64::from(c.to_digit(16)?);
        }
        let mut scale = 1.0 / 16.0;
        for c in frac_part.chars() {
            value += f64::from(c.to_digit(16)?) * scale;
            scale /= 16.0;
        }
        Some(value * 2f64.powi(exponent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cc_ir::BasicTypeTable;

    fn convert(spelling: &str) -> Result<Number, NumberError> {
        NumberConverter::convert(spelling, Standard::C99, &BasicTypeTable)
    }

    #[test]
    fn plain_decimal_is_int() {
        assert_eq!(convert("42").unwrap(), Number::Int(42));
    }

    #[test]
    fn hex_with_unsigned_suffix() {
        assert_eq!(convert("0xFFu").unwrap(), Number::UnsignedInt(255));
    }

    #[test]
    fn float_with_negative_exponent_and_suffix() {
        assert_eq!(convert("1.5e-2f").unwrap(), Number::Float(0.015));
    }

    #[test]
    fn hex_float_with_fraction_and_exponent() {
        assert_eq!(convert("0x1.8p3").unwrap(), Number::Double(12.0));
    }

    #[test]
    fn hex_float_integer_mantissa_with_sign_exponent() {
        assert_eq!(convert("0x1p+4").unwrap(), Number::Double(16.0));
    }

    #[test]
    fn hex_float_single_precision_suffix() {
        assert_eq!(convert("0x1.8p3f").unwrap(), Number::Float(12.0));
    }

    #[test]
    fn hex_float_missing_exponent_is_invalid() {
        assert!(matches!(
            convert("0x1.8"),
            Err(NumberError::InvalidNumericLiteral { .. })
        ));
    }

    #[test]
    fn plain_double() {
        assert_eq!(convert("1.5").unwrap(), Number::Double(1.5));
    }

    #[test]
    fn long_long_suffix_folds_to_long() {
        assert_eq!(convert("7ll").unwrap(), Number::Long(7));
        assert_eq!(convert("7LL").unwrap(), Number::Long(7));
        assert_eq!(convert("7ull").unwrap(), Number::UnsignedLong(7));
    }

    #[test]
    fn octal_literal() {
        assert_eq!(convert("017").unwrap(), Number::Int(15));
    }

    #[test]
    fn unsigned_int_overflow_is_out_of_range() {
        assert_eq!(
            convert("0xFFFFFFFFFFFFFFFFu"),
            Err(NumberError::OutOfRange {
                spelling: "0xFFFFFFFFFFFFFFFFu".to_owned()
            })
        );
    }

    #[test]
    fn unsigned_long_max_fits() {
        assert_eq!(
            convert("0xFFFFFFFFFFFFFFFFul").unwrap(),
            Number::UnsignedLong(u64::MAX)
        );
    }

    #[test]
    fn garbage_suffix_is_invalid() {
        assert!(matches!(
            convert("1qq"),
            Err(NumberError::InvalidNumericLiteral { .. })
        ));
    }
}
