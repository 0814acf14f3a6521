//! Color constants and the rain trail palette.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! The palette is specified as 8-bit triples and packed with [`color565`],
//! which drops the low bits the same way most TFT libraries do (no rounding),
//! so the shades match what the panel showed under the C++ driver.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors
// =============================================================================

/// Pure black. Background and erase color.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure green. Used for the hello message.
pub const GREEN: Rgb565 = Rgb565::GREEN;

// =============================================================================
// Trail Palette
// =============================================================================

/// Pack an 8-bit-per-channel color into RGB565 by truncation.
pub const fn color565(
    r: u8,
    g: u8,
    b: u8,
) -> Rgb565 {
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}

/// Number of trail shades.
pub const PALETTE_LEN: usize = 6;

/// Trail shades from dark to bright. The last entry is the head highlight.
pub const PALETTE: [Rgb565; PALETTE_LEN] = [
    color565(0, 20, 0),
    color565(0, 40, 0),
    color565(0, 80, 0),
    color565(0, 140, 0),
    color565(40, 220, 40),
    color565(180, 255, 180),
];

/// Brightest shade, used for the head of every drop.
pub const HEAD_COLOR: Rgb565 = PALETTE[PALETTE_LEN - 1];

/// Palette index for a trail cell `offset` rows behind the head.
///
/// Linear map of `offset` in `0..=tail` onto `PALETTE_LEN - 1 ..= 0` with
/// integer truncation, clamped into the palette.
pub fn trail_index(
    offset: u8,
    tail: u8,
) -> usize {
    const TOP: i32 = PALETTE_LEN as i32 - 1;
    if tail == 0 {
        return TOP as usize;
    }
    let idx = TOP - i32::from(offset) * TOP / i32::from(tail);
    idx.clamp(0, TOP) as usize
}

/// Trail color for a cell `offset` rows behind the head.
#[inline]
pub fn trail_color(
    offset: u8,
    tail: u8,
) -> Rgb565 {
    PALETTE[trail_index(offset, tail)]
}
