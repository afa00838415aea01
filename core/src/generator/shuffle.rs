use super::*;

/// Uniform mine placement: samples `mines` distinct cell indices from a seeded RNG.
///
/// Equal seeds and configurations always produce equal boards.
#[derive(Clone, Debug, PartialEq)]
pub struct ShuffleGenerator {
    seed: u64,
}

impl ShuffleGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for ShuffleGenerator {
    fn generate(self, config: GameConfig) -> Board {
        use rand::prelude::*;
        use rand::seq::index::sample;

        let total_cells = usize::from(config.total_cells());
        let mines = usize::from(config.mines());

        let cols = usize::from(config.size().1);
        let mut mine_mask: Array2<bool> = Array2::default(config.size().to_nd_index());
        let mut rng = SmallRng::seed_from_u64(self.seed);
        for index in sample(&mut rng, total_cells, mines) {
            mine_mask[[index / cols, index % cols]] = true;
        }

        let board = Board::from_mine_mask(config.size(), &mine_mask);
        log::debug!(
            "Generated {}x{} board with {} mines from seed {}",
            config.size().0,
            config.size().1,
            board.mine_count(),
            self.seed
        );
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_mines(board: &Board) -> usize {
        board.iter_cells().filter(|cell| cell.has_mine()).count()
    }

    #[test]
    fn places_exactly_the_requested_mines() {
        for (seed, mines) in [(0, 1), (1, 10), (2, 50), (3, 99), (4, 100)] {
            let config = GameConfig::new((10, 10), mines).unwrap();
            let board = ShuffleGenerator::new(seed).generate(config);
            assert_eq!(count_mines(&board), usize::from(mines));
            assert_eq!(board.mine_count(), mines);
            assert_eq!(
                board.iter_cells().filter(|cell| !cell.has_mine()).count(),
                100 - usize::from(mines)
            );
        }
    }

    #[test]
    fn same_seed_same_board() {
        let config = GameConfig::new((8, 13), 20).unwrap();
        let a = ShuffleGenerator::new(42).generate(config);
        let b = ShuffleGenerator::new(42).generate(config);
        assert_eq!(a, b);
    }

    #[test]
    fn non_square_boards_keep_their_shape() {
        let config = GameConfig::new((3, 17), 51).unwrap();
        let board = ShuffleGenerator::new(9).generate(config);
        assert_eq!(board.size(), (3, 17));
        assert!(board.iter_cells().all(Cell::has_mine));
    }

    #[test]
    fn overfull_config_never_reaches_generator() {
        assert_eq!(
            GameConfig::new((2, 2), 9),
            Err(GameError::InvalidConfiguration)
        );
        assert_eq!(
            Session::create(3, 3, 0, 1).unwrap_err(),
            GameError::InvalidConfiguration
        );
    }

    #[test]
    fn placement_covers_every_cell_across_seeds() {
        let config = GameConfig::new((3, 3), 1).unwrap();
        let mut hit = [false; 9];
        for seed in 0..500 {
            let board = ShuffleGenerator::new(seed).generate(config);
            for (index, cell) in board.iter_cells().enumerate() {
                if cell.has_mine() {
                    hit[index] = true;
                }
            }
        }
        assert!(hit.iter().all(|&h| h));
    }
}
