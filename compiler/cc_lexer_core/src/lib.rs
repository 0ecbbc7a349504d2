//! Low-level raw scanner for C source text.
//!
//! This crate is the "raw" half of the tokenizer's two-layer architecture
//! (modeled after `rustc_lexer`'s split from `rustc_parse`'s lexer):
//!
//! - **`cc_lexer_core`** (this crate): produces `(RawTag, len)` pairs from
//!   raw bytes. No interning, no keyword resolution, no diagnostics,
//!   no escape-sequence resolution.
//! - **`cc_lexer`**: "cooks" raw tokens into compiler-ready `Token`s —
//!   resolving keywords, converting preprocessing numbers, decoding
//!   string/character escapes, and reporting errors through a
//!   diagnostic sink.
//!
//! This crate has zero `cc_*` dependencies so external tools (a syntax
//! highlighter, a formatter) can depend on it without pulling in the rest
//! of the tokenizer.
//!
//! # Example
//!
//! ```
//! use cc_lexer_core::{RawScanner, RawTag, SourceBuffer};
//!
//! let buf = SourceBuffer::new("int x;");
//! let mut scanner = RawScanner::new(&buf, false);
//! let first = scanner.next_raw_token();
//! assert_eq!(first.tag, RawTag::Ident);
//! assert_eq!(first.len, 3);
//! ```

mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::RawScanner;
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};
