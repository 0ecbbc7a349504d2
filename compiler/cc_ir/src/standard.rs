//! [`Standard`]: the C language revision a tokenizer run targets.
//!
//! Passed by value into `Tokenizer::new` rather than read from global
//! state, so the same process can tokenize files under different
//! standards without synchronization (see `DESIGN.md`, Global context
//! dependency).

/// A C standard revision, ordered so `standard >= Standard::C99` can gate
/// standard-specific lexical rules (currently: the `p`/`P` exponent in a
/// hex-float preprocessing number).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Standard {
    C89,
    C90,
    C99,
    C11,
    C17,
}

impl Standard {
    /// True if this standard accepts a `p`/`P` exponent sign in a
    /// hex-float preprocessing number (C99 introduced hex-float literals).
    #[must_use]
    pub const fn allows_hex_float_exponent(self) -> bool {
        matches!(self, Self::C99 | Self::C11 | Self::C17)
    }
}

impl Default for Standard {
    /// `C89`/`C90` is the base dialect this tokenizer was modeled on.
    fn default() -> Self {
        Self::C89
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering() {
        assert!(Standard::C89 < Standard::C99);
        assert!(Standard::C99 <= Standard::C99);
        assert!(Standard::C17 > Standard::C11);
    }

    #[test]
    fn hex_float_exponent_gated_on_c99() {
        assert!(!Standard::C89.allows_hex_float_exponent());
        assert!(!Standard::C90.allows_hex_float_exponent());
        assert!(Standard::C99.allows_hex_float_exponent());
        assert!(Standard::C11.allows_hex_float_exponent());
        assert!(Standard::C17.allows_hex_float_exponent());
    }
}
