//! Reserved play-phase state.

/// Tricks taken by each partnership.
///
/// Play of the hand is not modeled yet, so both counters stay at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrickCount {
    /// Tricks taken by North and South.
    pub north_south: u8,
    /// Tricks taken by East and West.
    pub east_west: u8,
}

impl TrickCount {
    /// Zeroes both counters.
    pub const fn clear(&mut self) {
        self.north_south = 0;
        self.east_west = 0;
    }
}
