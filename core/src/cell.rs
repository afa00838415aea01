use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Stored state of a single board position.
    ///
    /// `REVEALED` and `FLAGGED` are never set together: flags block reveals and revealed cells cannot be flagged.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Cell: u8 {
        const MINE     = 1;
        const REVEALED = 1 << 1;
        const FLAGGED  = 1 << 2;
    }
}

impl Cell {
    pub const fn has_mine(self) -> bool {
        self.contains(Self::MINE)
    }

    pub const fn is_revealed(self) -> bool {
        self.contains(Self::REVEALED)
    }

    pub const fn is_flagged(self) -> bool {
        self.contains(Self::FLAGGED)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::empty()
    }
}

/// Player-facing state of a cell, derived from the stored cell and the session outcome.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    Revealed(u8),
    /// Mine exposed after the game was lost.
    Mine,
    /// The mine whose reveal lost the game.
    TriggeredMine,
}

impl CellView {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_) | Self::Mine | Self::TriggeredMine)
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cell_is_blank() {
        let cell = Cell::default();
        assert!(!cell.has_mine());
        assert!(!cell.is_revealed());
        assert!(!cell.is_flagged());
    }

    #[test]
    fn flags_are_independent() {
        let cell = Cell::MINE | Cell::FLAGGED;
        assert!(cell.has_mine());
        assert!(cell.is_flagged());
        assert!(!cell.is_revealed());
    }
}
