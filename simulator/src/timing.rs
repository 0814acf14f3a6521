//! Timing helpers for the simulator.
//!
//! These use `std::time` which is not available in `no_std` environments, so
//! they are defined here rather than in the common crate.

use std::time::{Duration, Instant};

/// Event polling interval while a static screen is up (~50 FPS).
pub const IDLE_FRAME: Duration = Duration::from_millis(20);

/// Milliseconds since `start` as a wrapping `u32`, the same clock width the
/// firmware feeds to `TickGate`.
pub fn millis_since(start: Instant) -> u32 { start.elapsed().as_millis() as u32 }
