//! Display and animation configuration constants.
//!
//! Everything here is fixed at compile time. The only runtime switch is the
//! `ascii-only` cargo feature, which selects the glyph set.

use crate::glyph::GlyphSet;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (ST7796S in landscape: 480x320).
pub const SCREEN_WIDTH: u32 = 480;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 320;

/// Native panel width before the 90° rotation.
pub const NATIVE_WIDTH: u16 = 320;

/// Native panel height before the 90° rotation.
pub const NATIVE_HEIGHT: u16 = 480;

/// Integer scale applied to rain and splash glyphs (6x13 font -> 12x26 cells).
pub const TEXT_SIZE: u32 = 2;

/// SPI clock for the display. The ST7796S is reliable at 40 MHz on short wires.
pub const SPI_FREQUENCY: u32 = 40_000_000;

// =============================================================================
// Animation Tunables
// =============================================================================

/// Shortest trail, in rows.
pub const MIN_TAIL: u8 = 6;

/// Longest trail, in rows.
pub const MAX_TAIL: u8 = 18;

/// Slowest fall speed, in rows per tick.
pub const MIN_SPEED: u8 = 1;

/// Fastest fall speed, in rows per tick.
pub const MAX_SPEED: u8 = 3;

/// Frame interval in milliseconds (~33 FPS).
pub const TICK_MS: u32 = 30;

/// Chance (percent) that a non-head trail cell gets a fresh glyph each tick.
pub const SHIMMER_PERCENT: u8 = 25;

/// Chance (percent) that the katakana set picks a katakana over ASCII.
pub const KATAKANA_PERCENT: u8 = 70;

/// Rows a trail must fall below the bottom edge before the drop respawns.
pub const RESPAWN_MARGIN: i16 = 2;

/// Upper bound on columns. 480 px / 12 px cells = 40, so this leaves headroom
/// for narrower fonts or a smaller scale without a heap.
pub const MAX_COLUMNS: usize = 128;

/// Glyph set used by the rain.
pub const GLYPH_SET: GlyphSet = if cfg!(feature = "ascii-only") {
    GlyphSet::Ascii
} else {
    GlyphSet::Katakana
};

// =============================================================================
// Startup Timing
// =============================================================================

/// Delay before the hello program reports pins (lets the debugger attach).
pub const HELLO_STARTUP_DELAY_MS: u32 = 500;

/// Delay before the rain program reports pins.
pub const RAIN_STARTUP_DELAY_MS: u32 = 300;

/// How long the rain title splash stays on screen.
pub const SPLASH_MS: u32 = 700;
