//! Pre-computed static text styles.
//!
//! Styles whose color never changes are `const`, so they live in read-only
//! data and cost nothing per frame. Rain glyphs change shade every cell, so
//! [`glyph_style`] builds those on the fly from the shared [`RAIN_FONT`].

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::jis_x0201::FONT_6X13;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::text::{Baseline, TextStyle, TextStyleBuilder};
use profont::PROFONT_18_POINT;

use crate::colors::{BLACK, GREEN, HEAD_COLOR};

// =============================================================================
// Text Positioning
// =============================================================================

/// Anchor text at its top-left corner, like a cursor on a character grid.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new().baseline(Baseline::Top).build();

// =============================================================================
// Font References
// =============================================================================

/// Rain font (6x13 pixels). JIS X0201 covers ASCII plus half-width katakana.
pub const RAIN_FONT: &MonoFont = &FONT_6X13;

/// Hello message font (`ProFont` 18pt, roughly a 2x scaled 6x8 cell).
pub const HELLO_FONT: &MonoFont = &PROFONT_18_POINT;

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Text with an opaque black background, so redraws overwrite what was there.
const fn on_black(
    font: &'static MonoFont<'static>,
    color: Rgb565,
) -> MonoTextStyle<'static, Rgb565> {
    let mut style = MonoTextStyle::new(font, color);
    style.background_color = Some(BLACK);
    style
}

/// Large green text for the hello program.
pub const HELLO_STYLE: MonoTextStyle<'static, Rgb565> = on_black(HELLO_FONT, GREEN);

/// Rain title splash in the head highlight color.
pub const SPLASH_STYLE: MonoTextStyle<'static, Rgb565> = on_black(RAIN_FONT, HEAD_COLOR);

/// Style for one rain glyph in `color`.
#[inline]
pub const fn glyph_style(color: Rgb565) -> MonoTextStyle<'static, Rgb565> { on_black(RAIN_FONT, color) }
