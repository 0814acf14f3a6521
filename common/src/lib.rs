//! Common types and constants for the ST7796S matrix rain demo.
//!
//! This crate contains platform-agnostic code shared between the simulator
//! and the Pico 2 firmware:
//!
//! - [`config`]: Display geometry and animation tunables
//! - [`pins`]: SPI pin mapping and the startup pin report
//! - [`colors`]: RGB565 palette for the rain trail
//! - [`grid`]: Character cell geometry
//! - [`drop`]: Per-column falling drop state
//! - [`glyph`]: Random glyph selection
//! - [`timing`]: Fixed-interval tick gate
//! - [`rain`]: The matrix rain animation itself
//! - [`screens`]: Static hello and splash screens
//! - [`scaled`]: Pixel-doubling draw target for scaled text
//! - [`styles`]: Fonts and pre-computed text styles
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` compatible and can be used on embedded targets.
//! It avoids any dependencies on `std::time` or platform-specific types.
//! Tests run with `std` enabled (via `cfg_attr`) so the standard harness works.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod drop;
pub mod glyph;
pub mod grid;
pub mod pins;
pub mod rain;
pub mod scaled;
pub mod screens;
pub mod styles;
pub mod timing;

// Re-export commonly used items
pub use drop::RainDrop;
pub use grid::Grid;
pub use pins::{PIN_CONFIG, PinConfig};
pub use rain::MatrixRain;
pub use timing::TickGate;
