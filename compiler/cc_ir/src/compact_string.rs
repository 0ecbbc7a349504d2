//! Compact small-string representation for token payloads.
//!
//! Every identifier, string literal, and preprocessing-number spelling the
//! tokenizer produces is stored as a `CompactString`: short spellings (the
//! overwhelming majority of C identifiers) are kept inline with no
//! allocation, longer ones are represented as a reference into
//! externally-owned (interner) storage.
//!
//! # Design
//!
//! The reference implementation this crate is modeled on packs the
//! discriminant into the last byte of a 16-byte union (zero for inline,
//! non-zero for heap, relying on little-endian layout to recover the
//! length). That trick needs `unsafe` to reconstruct a pointer from raw
//! bytes, which this workspace's lints forbid. Instead, `CompactString` is
//! an explicit two-variant enum; the discriminant is ordinary Rust enum
//! tagging rather than a packed byte. See `DESIGN.md` for the resulting
//! size trade-off.

use std::fmt;

/// Maximum length a `CompactString` may represent, mirroring the 56-bit
/// length field of the representation this type replaces.
pub const MAX_LEN: u64 = 0x00FF_FFFF_FFFF_FFFF;

/// Content up to this many bytes is stored inline with no allocation.
pub const INLINE_CAPACITY: usize = 15;

/// Error constructing a `CompactString`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompactStringError {
    /// The requested length exceeds [`MAX_LEN`].
    #[error("string length {len} exceeds maximum supported size {MAX_LEN}")]
    TooLong {
        /// The length that was rejected.
        len: usize,
    },
}

/// A compact string value: inline for short content, a borrowed
/// `'static` slice (typically leaked interner storage) for longer content.
///
/// `Copy` because both variants are: the inline buffer is plain bytes, and
/// `&'static str` carries no destructor.
#[derive(Clone, Copy)]
pub enum CompactString {
    /// Content of at most [`INLINE_CAPACITY`] bytes stored in place.
    Inline {
        /// Number of valid bytes in `buf`.
        len: u8,
        /// Backing storage; only `buf[..len]` is meaningful.
        buf: [u8; INLINE_CAPACITY],
    },
    /// Content stored externally (typically in an interner's leaked
    /// arena), referenced for as long as the caller holds this value.
    Heap(&'static str),
}

impl CompactString {
    /// Build a `CompactString` from bytes, choosing inline or heap storage.
    ///
    /// The heap variant is only reachable by constructing from a
    /// `&'static str` directly (see [`CompactString::from_static`]); this
    /// constructor is for inline-sized content. Use an [`Interner`] to get
    /// a `CompactString` from possibly-long content.
    ///
    /// # Errors
    /// Returns [`CompactStringError::TooLong`] if `bytes.len()` exceeds
    /// [`INLINE_CAPACITY`]. Use [`Interner::register`] for longer content.
    pub fn try_inline(bytes: &[u8]) -> Result<Self, CompactStringError> {
        if bytes.len() > INLINE_CAPACITY {
            return Err(CompactStringError::TooLong { len: bytes.len() });
        }
        let mut buf = [0u8; INLINE_CAPACITY];
        buf[..bytes.len()].copy_from_slice(bytes);
        Ok(Self::Inline {
            #[expect(clippy::cast_possible_truncation, reason = "bounded by INLINE_CAPACITY (15)")]
            len: bytes.len() as u8,
            buf,
        })
    }

    /// Build a `CompactString` from a `'static` string slice, typically one
    /// leaked by a [`crate::StringInterner`]. Chooses inline storage when
    /// the content is short enough to avoid keeping the heap reference
    /// alive for no reason.
    #[must_use]
    pub fn from_static(s: &'static str) -> Self {
        if s.len() <= INLINE_CAPACITY {
            Self::try_inline(s.as_bytes()).unwrap_or_else(|e| unreachable!("{e}"))
        } else {
            Self::Heap(s)
        }
    }

    /// Number of bytes of content.
    #[must_use]
    pub const fn len(&self) -> usize {
        match self {
            Self::Inline { len, .. } => *len as usize,
            Self::Heap(s) => s.len(),
        }
    }

    /// True if this string has no content.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the content as bytes. Lifetime is tied to `&self`.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Inline { len, buf } => &buf[..*len as usize],
            Self::Heap(s) => s.as_bytes(),
        }
    }

    /// Borrow the content as a `str`. Lifetime is tied to `&self`.
    ///
    /// # Panics
    /// Panics if the inline bytes are not valid UTF-8, which cannot happen
    /// for values produced by this crate's constructors (all of which
    /// start from a `&str`).
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Heap(s) => s,
            Self::Inline { .. } => std::str::from_utf8(self.as_bytes())
                .unwrap_or_else(|e| unreachable!("CompactString inline bytes not utf8: {e}")),
        }
    }

    /// True if `byte` occurs anywhere in this string's content.
    #[must_use]
    pub fn contains(&self, byte: u8) -> bool {
        self.as_bytes().contains(&byte)
    }

    /// Write this string as a double-quoted, C-escaped literal.
    ///
    /// Printable bytes other than `"` and `\` are emitted as-is; the
    /// standard named escapes are used for `\u{8}`, tab, newline, form
    /// feed, carriage return, backslash and quote; anything else is
    /// emitted as a three-digit, zero-padded octal escape.
    pub fn format_quoted(&self, w: &mut impl fmt::Write) -> fmt::Result {
        w.write_char('"')?;
        for &byte in self.as_bytes() {
            match byte {
                b'\"' => w.write_str("\\\"")?,
                b'\\' => w.write_str("\\\\")?,
                0x08 => w.write_str("\\b")?,
                b'\t' => w.write_str("\\t")?,
                b'\n' => w.write_str("\\n")?,
                0x0c => w.write_str("\\f")?,
                b'\r' => w.write_str("\\r")?,
                0x20..=0x7e => w.write_char(byte as char)?,
                _ => write!(w, "\\{byte:03o}")?,
            }
        }
        w.write_char('"')
    }
}

impl PartialEq for CompactString {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for CompactString {}

impl std::hash::Hash for CompactString {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl fmt::Debug for CompactString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompactString({:?})", self.as_str())
    }
}

impl fmt::Display for CompactString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&'static str> for CompactString {
    fn from(s: &'static str) -> Self {
        Self::from_static(s)
    }
}

impl TryFrom<&str> for CompactString {
    type Error = CompactStringError;

    /// Only succeeds for content that fits inline; use an [`Interner`] to
    /// convert arbitrary-length content.
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_inline(s.as_bytes())
    }
}

/// Converts raw byte content into a `CompactString`, choosing inline or
/// externally-owned storage.
///
/// Implemented by the intern table (`cc_tokenize`'s `StringInterner`); kept
/// as a trait so the tokenizer and `NumberConverter` can be exercised
/// against a lightweight fake in tests.
pub trait Interner {
    /// Register `bytes`, returning a `CompactString` valid for as long as
    /// the interner (or, for inline content, for as long as the caller
    /// holds the returned value).
    fn register(&self, bytes: &[u8]) -> CompactString;
}

// Size note: an explicit enum with a 16-byte inline payload and a 16-byte
// fat-pointer payload cannot share the tag byte with either payload
// without `unsafe` niche tricks, so this type is larger than the 16-byte
// union it replaces. See DESIGN.md, CompactString layout.
crate::static_assert_size!(CompactString, 24);

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn inline_roundtrip() {
        let s = CompactString::try_inline(b"hello").unwrap();
        assert_eq!(s.len(), 5);
        assert!(!s.is_empty());
        assert_eq!(s.as_str(), "hello");
        assert!(matches!(s, CompactString::Inline { .. }));
    }

    #[test]
    fn inline_boundary_fifteen_bytes() {
        let fifteen = "a".repeat(15);
        let s = CompactString::try_inline(fifteen.as_bytes()).unwrap();
        assert_eq!(s.len(), 15);
        assert!(matches!(s, CompactString::Inline { .. }));
    }

    #[test]
    fn sixteen_bytes_does_not_fit_inline() {
        let sixteen = "a".repeat(16);
        assert_eq!(
            CompactString::try_inline(sixteen.as_bytes()),
            Err(CompactStringError::TooLong { len: 16 })
        );
    }

    #[test]
    fn heap_from_static() {
        let long: &'static str = "this identifier is definitely longer than fifteen bytes";
        let s = CompactString::from_static(long);
        assert!(matches!(s, CompactString::Heap(_)));
        assert_eq!(s.len(), long.len());
        assert_eq!(s.as_str(), long);
    }

    #[test]
    fn short_static_chooses_inline() {
        let s = CompactString::from_static("short");
        assert!(matches!(s, CompactString::Inline { .. }));
    }

    #[test]
    fn empty_string() {
        let s = CompactString::try_inline(b"").unwrap();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn equality_across_variants() {
        let inline = CompactString::try_inline(b"abc").unwrap();
        let also_inline = CompactString::from_static("abc");
        assert_eq!(inline, also_inline);
    }

    #[test]
    fn contains_byte() {
        let s = CompactString::try_inline(b"a.b").unwrap();
        assert!(s.contains(b'.'));
        assert!(!s.contains(b'x'));
    }

    #[test]
    fn format_quoted_escapes() {
        let s = CompactString::try_inline(b"a\"b\\c\nd").unwrap();
        let mut out = String::new();
        s.format_quoted(&mut out).unwrap();
        assert_eq!(out, r#""a\"b\\c\nd""#);
    }

    #[test]
    fn format_quoted_nonprintable_is_octal() {
        let s = CompactString::try_inline(&[0x01]).unwrap();
        let mut out = String::new();
        s.format_quoted(&mut out).unwrap();
        assert_eq!(out, "\"\\001\"");
    }

    #[test]
    fn debug_and_display() {
        let s = CompactString::try_inline(b"x").unwrap();
        assert_eq!(format!("{s}"), "x");
        assert_eq!(format!("{s:?}"), "CompactString(\"x\")");
    }

    proptest! {
        #[test]
        fn try_inline_round_trips_any_ascii_bytes(bytes in proptest::collection::vec(0u8..=127, 0..=INLINE_CAPACITY)) {
            let s = CompactString::try_inline(&bytes).unwrap();
            prop_assert_eq!(s.as_bytes(), bytes.as_slice());
            prop_assert_eq!(s.len(), bytes.len());
        }

        #[test]
        fn exactly_capacity_stays_inline_one_more_byte_errors(len in 0usize..=INLINE_CAPACITY) {
            let bytes = vec![b'a'; len];
            prop_assert!(CompactString::try_inline(&bytes).is_ok());

            let too_long = vec![b'a'; len + INLINE_CAPACITY + 1];
            prop_assert!(CompactString::try_inline(&too_long).is_err());
        }

        #[test]
        fn contains_agrees_with_as_bytes(bytes in proptest::collection::vec(0u8..=127, 0..=INLINE_CAPACITY), needle in 0u8..=127) {
            let s = CompactString::try_inline(&bytes).unwrap();
            prop_assert_eq!(s.contains(needle), bytes.contains(&needle));
        }
    }
}
