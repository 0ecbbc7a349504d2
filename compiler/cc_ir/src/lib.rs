//! Core data types for the C tokenizer.
//!
//! This crate holds the pieces a hand-rolled C tokenizer cannot be
//! specified without:
//! - [`CompactString`], the inline/heap small-string representation every
//!   identifier, string literal, and preprocessing-number spelling uses.
//! - [`BasicType`] and [`TypeTable`], the six built-in numeric types a
//!   converted literal can resolve to.
//! - [`Token`], [`TokenKind`] and [`TokenTag`], the token representation
//!   the tokenizer produces one at a time.
//! - [`Name`] and [`StringInterner`], the intern table `CompactString`'s
//!   heap variant borrows from.
//! - [`Span`], kept for diagnostics even though the tokenizer itself does
//!   not attach one to `Token` (see `DESIGN.md`).
//! - [`Standard`], the C revision threaded into the tokenizer's
//!   constructor to gate standard-specific lexical rules.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod basic_type;
mod compact_string;
mod interner;
mod name;
mod span;
mod standard;
mod token;

pub use basic_type::{BasicType, BasicTypeTable, TypeTable};
pub use compact_string::{CompactString, CompactStringError, Interner, INLINE_CAPACITY, MAX_LEN};
pub use interner::{InternError, SharedInterner, StringInterner, StringLookup};
pub use name::Name;
pub use span::{Span, SpanError};
pub use standard::Standard;
pub use token::{keyword_tag, punctuator_for_byte, Number, Token, TokenKind, TokenTag, KEYWORDS};
