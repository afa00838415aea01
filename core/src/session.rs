use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    InProgress,
    Won,
    Lost,
}

impl SessionState {
    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::InProgress
    }
}

/// A single game from creation to win or loss. Owns its board; every mutation goes through here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    board: Board,
    flagged_count: Saturating<CellCount>,
    state: SessionState,
    triggered_mine: Option<Coord2>,
}

impl Session {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self::from_board(ShuffleGenerator::new(seed).generate(config))
    }

    pub fn create(rows: Coord, cols: Coord, mines: CellCount, seed: u64) -> Result<Self> {
        Ok(Self::new(GameConfig::new((rows, cols), mines)?, seed))
    }

    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            flagged_count: Saturating(0),
            state: Default::default(),
            triggered_mine: None,
        }
    }

    /// Fresh session on the default board, meant to replace this one wholesale.
    pub fn reset(&self, seed: u64) -> Self {
        log::debug!("Reset from {:?}", self.state);
        Self::new(GameConfig::DEFAULT, seed)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn is_won(&self) -> bool {
        matches!(self.state, SessionState::Won)
    }

    pub fn is_lost(&self) -> bool {
        matches!(self.state, SessionState::Lost)
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn mine_total(&self) -> CellCount {
        self.board.mine_count()
    }

    pub fn flag_total(&self) -> CellCount {
        self.flagged_count.0
    }

    /// How many mines have not been flagged yet, negative when there are more flags than mines
    pub fn remaining_mines(&self) -> isize {
        (self.mine_total() as isize) - (self.flagged_count.0 as isize)
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.board.validate_coords(coords)?;
        Ok(self.board[coords])
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> Result<u8> {
        let coords = self.board.validate_coords(coords)?;
        Ok(self.board.adjacent_mine_count(coords))
    }

    /// What the player should see at `coords`. Once lost, every mine is exposed, flagged or not.
    pub fn view_at(&self, coords: Coord2) -> Result<CellView> {
        let coords = self.board.validate_coords(coords)?;
        let cell = self.board[coords];

        Ok(match self.state {
            SessionState::Lost if self.triggered_mine == Some(coords) => CellView::TriggeredMine,
            SessionState::Lost if cell.has_mine() => CellView::Mine,
            _ if cell.is_flagged() => CellView::Flagged,
            _ if cell.is_revealed() => {
                CellView::Revealed(self.board.adjacent_mine_count(coords))
            }
            _ => CellView::Hidden,
        })
    }

    /// Win requires every cell to be either revealed or flagged, with exactly one flag per mine.
    pub fn check_win(&self) -> bool {
        let (revealed, flagged) =
            self.board
                .iter_cells()
                .fold((0usize, 0usize), |(revealed, flagged), cell| {
                    if cell.is_revealed() {
                        (revealed + 1, flagged)
                    } else if cell.is_flagged() {
                        (revealed, flagged + 1)
                    } else {
                        (revealed, flagged)
                    }
                });

        revealed + flagged == usize::from(self.board.total_cells())
            && flagged == usize::from(self.mine_total())
    }

    /// Reveal a single cell, zero-count neighbors are not opened.
    ///
    /// The win is only evaluated here; revealing an already revealed cell re-checks it.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;

        if self.state.is_terminal() {
            return Ok(RevealOutcome::NoOp);
        }

        let cell = self.board[coords];
        if cell.is_flagged() {
            log::trace!("Reveal blocked by flag at {:?}", coords);
            return Ok(RevealOutcome::NoOp);
        }

        self.board.cell_mut(coords).insert(Cell::REVEALED);

        if cell.has_mine() {
            log::debug!("Hit mine at {:?}", coords);
            self.triggered_mine = Some(coords);
            self.end_game(false);
            return Ok(RevealOutcome::Loss);
        }

        log::debug!(
            "Revealed {:?}, adjacent mines: {}",
            coords,
            self.board.adjacent_mine_count(coords)
        );
        self.end_if_won();
        Ok(RevealOutcome::Continue)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        let coords = self.board.validate_coords(coords)?;

        if self.state.is_terminal() {
            return Ok(FlagOutcome::NoOp);
        }

        let cell = self.board.cell_mut(coords);
        let outcome = if cell.is_revealed() {
            FlagOutcome::NoOp
        } else if cell.is_flagged() {
            cell.remove(Cell::FLAGGED);
            self.flagged_count -= 1;
            FlagOutcome::Unflagged
        } else {
            cell.insert(Cell::FLAGGED);
            self.flagged_count += 1;
            FlagOutcome::Flagged
        };

        if outcome.has_update() {
            log::debug!(
                "{:?} at {:?}, flags: {}",
                outcome,
                coords,
                self.flagged_count
            );
        }
        Ok(outcome)
    }

    fn end_if_won(&mut self) {
        if self.check_win() {
            self.end_game(true);
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_terminal() {
            return;
        }

        self.state = if won {
            SessionState::Won
        } else {
            SessionState::Lost
        };
        log::debug!("Game ended: {:?}", self.state);
    }
}
