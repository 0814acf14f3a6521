//! Fixed-interval tick gate for polling loops.
//!
//! The caller supplies a monotonic millisecond counter (`embassy_time::Instant`
//! on hardware, `std::time::Instant` in the simulator), so this stays `no_std`.

/// Lets a polling loop run one tick every `interval_ms`.
#[derive(Clone, Copy, Debug)]
pub struct TickGate {
    interval_ms: u32,
    last_ms: u32,
}

impl TickGate {
    /// Create a gate. The first tick fires once `interval_ms` has elapsed since 0.
    pub const fn new(interval_ms: u32) -> Self { Self { interval_ms, last_ms: 0 } }

    /// Returns true and restarts the interval if a tick is due at `now_ms`.
    ///
    /// Uses wrapping arithmetic, so a `u32` millisecond counter rolling over
    /// after ~49 days does not stall the loop.
    pub fn ready(
        &mut self,
        now_ms: u32,
    ) -> bool {
        if now_ms.wrapping_sub(self.last_ms) < self.interval_ms {
            return false;
        }
        self.last_ms = now_ms;
        true
    }

    /// Milliseconds until the next tick is due (0 if already due).
    pub fn remaining(
        &self,
        now_ms: u32,
    ) -> u32 {
        self.interval_ms.saturating_sub(now_ms.wrapping_sub(self.last_ms))
    }

    /// Configured interval.
    #[inline]
    pub const fn interval_ms(&self) -> u32 { self.interval_ms }
}
