//! Per-column falling drop state.

use core::ops::RangeInclusive;

use rand::Rng;

use crate::config::{MAX_SPEED, MAX_TAIL, MIN_SPEED, MIN_TAIL, RESPAWN_MARGIN};

/// One falling trail. The head row is signed and may sit above or below the
/// visible grid; callers skip off-screen rows when drawing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RainDrop {
    /// Current head row.
    pub row: i16,
    /// Rows moved per tick.
    pub speed: u8,
    /// Trail length in rows behind the head.
    pub tail: u8,
}

/// Uniform value in `lo..hi`, or `lo` when the range is empty.
fn random_row<R: Rng + ?Sized>(
    rng: &mut R,
    lo: i16,
    hi: i16,
) -> i16 {
    if lo < hi { rng.random_range(lo..hi) } else { lo }
}

fn signed_rows(rows: u16) -> i16 { rows.min(i16::MAX as u16) as i16 }

impl RainDrop {
    /// Initial drop for a column: anywhere from a full screen above the top
    /// to the last visible row, so columns enter staggered.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        rows: u16,
    ) -> Self {
        let rows = signed_rows(rows);
        Self {
            row: random_row(rng, -rows, rows),
            speed: rng.random_range(MIN_SPEED..=MAX_SPEED),
            tail: rng.random_range(MIN_TAIL..=MAX_TAIL),
        }
    }

    /// Restart above the screen with fresh speed and tail. The head lands in
    /// the upper half-screen band above row 0.
    pub fn respawn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        rows: u16,
    ) {
        let rows = signed_rows(rows);
        self.row = random_row(rng, -rows / 2, 0);
        self.speed = rng.random_range(MIN_SPEED..=MAX_SPEED);
        self.tail = rng.random_range(MIN_TAIL..=MAX_TAIL);
    }

    /// Move the head down by `speed` rows. Returns the previous head row.
    #[inline]
    pub fn advance(&mut self) -> i16 {
        let prev = self.row;
        self.row = self.row.saturating_add(i16::from(self.speed));
        prev
    }

    /// Row of the last trail cell (furthest from the head).
    #[inline]
    pub fn tail_end(&self) -> i16 { self.row.saturating_sub(i16::from(self.tail)) }

    /// Rows that dropped out of the trail when the head moved from `prev_row`.
    ///
    /// Empty when the head did not move down.
    pub fn vacated_rows(
        &self,
        prev_row: i16,
    ) -> RangeInclusive<i16> {
        let start = prev_row.saturating_sub(i16::from(self.tail));
        let end = self.tail_end().saturating_sub(1);
        start..=end
    }

    /// Whether the whole trail has fallen far enough below the grid to respawn.
    #[inline]
    pub fn is_past_bottom(
        &self,
        rows: u16,
    ) -> bool {
        self.tail_end() > signed_rows(rows).saturating_add(RESPAWN_MARGIN)
    }

    /// `(offset, row)` for every trail cell, tail end first and head last.
    pub fn trail(&self) -> impl Iterator<Item = (u8, i16)> + use<> {
        let head = self.row;
        (0..=self.tail).rev().map(move |offset| (offset, head.saturating_sub(i16::from(offset))))
    }
}
