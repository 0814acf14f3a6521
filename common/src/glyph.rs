//! Random glyph selection for the rain.
//!
//! The katakana set uses the half-width block `U+FF70..=U+FF9E`, which is what
//! the JIS X0201 mono fonts in `embedded-graphics` render.

use rand::Rng;

use crate::config::KATAKANA_PERCENT;

/// ASCII fallback glyphs: digits, uppercase and a few symbols.
pub const ASCII_GLYPHS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ!@#$%^&*()[]{}<>+-=*/|";

/// First half-width katakana used (`ｰ`).
pub const KATAKANA_FIRST: u32 = 0xFF70;

/// Last half-width katakana used (`ﾞ`).
pub const KATAKANA_LAST: u32 = 0xFF9E;

/// Which characters the rain draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GlyphSet {
    /// Mostly katakana, with some ASCII mixed in.
    Katakana,
    /// ASCII only.
    Ascii,
}

/// Pick a random glyph from `set`.
pub fn random_glyph<R: Rng + ?Sized>(
    rng: &mut R,
    set: GlyphSet,
) -> char {
    if set == GlyphSet::Katakana && rng.random_range(0..100u8) < KATAKANA_PERCENT {
        let code = rng.random_range(KATAKANA_FIRST..=KATAKANA_LAST);
        // The whole range is assigned scalar values
        return char::from_u32(code).unwrap_or(' ');
    }
    char::from(ASCII_GLYPHS[rng.random_range(0..ASCII_GLYPHS.len())])
}
