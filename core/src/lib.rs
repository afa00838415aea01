#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use types::*;

mod cell;
mod error;
mod generator;
mod session;
mod types;

/// Validated board configuration; the only ways to obtain one are [`GameConfig::new`] and [`GameConfig::DEFAULT`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameConfig {
    size: Coord2,
    mines: CellCount,
}

impl GameConfig {
    /// Board used at start-up and on every reset: 10 rows, 10 columns, 10 mines.
    pub const DEFAULT: Self = Self::new_unchecked((10, 10), 10);

    const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Validates that both dimensions are non-zero and `0 < mines <= rows * cols`.
    pub fn new((rows, cols): Coord2, mines: CellCount) -> Result<Self> {
        if rows == 0 || cols == 0 || mines == 0 || mines > mult(rows, cols) {
            log::warn!(
                "Rejected board configuration {}x{} with {} mines",
                rows,
                cols,
                mines
            );
            return Err(GameError::InvalidConfiguration);
        }
        Ok(Self::new_unchecked((rows, cols), mines))
    }

    /// `(rows, cols)`
    pub const fn size(&self) -> Coord2 {
        self.size
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Grid of cells with a fixed size and a fixed set of mines.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    size: Coord2,
    mine_count: CellCount,
}

impl Board {
    /// Generates a `rows` x `cols` board holding exactly `mines` uniformly placed mines.
    pub fn generate(rows: Coord, cols: Coord, mines: CellCount, seed: u64) -> Result<Self> {
        let config = GameConfig::new((rows, cols), mines)?;
        Ok(ShuffleGenerator::new(seed).generate(config))
    }

    pub(crate) fn from_mine_mask(size: Coord2, mine_mask: &Array2<bool>) -> Self {
        let cells = mine_mask.map(|&is_mine| if is_mine { Cell::MINE } else { Cell::empty() });
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        Self {
            cells,
            size,
            mine_count,
        }
    }

    /// Builds a board with mines at exactly the given coordinates; duplicates are counted once.
    ///
    /// Unlike [`Board::generate`] this accepts a board without mines.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidConfiguration);
        }

        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::OutOfBounds);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(size, &mine_mask))
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    /// `(rows, cols)`
    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Mines among the in-bounds 8-neighbors of `coords`; the cell itself is never counted.
    ///
    /// `coords` must already be validated.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.cells
            .iter_neighbors(coords)
            .filter(|&pos| self[pos].has_mine())
            .count() as u8
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[coords.to_nd_index()]
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoOp,
    Flagged,
    Unflagged,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoOp => false,
            Self::Flagged => true,
            Self::Unflagged => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoOp,
    Continue,
    Loss,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoOp => false,
            Continue => true,
            Loss => true,
        }
    }
}
