use rand::{seq::SliceRandom, Rng};

use crate::dots::prelude::*;

impl Board {
    /// Spawns a random powerup on a random source that is still showing its source glyph. Sources that
    /// are covered by a piece or already carry a powerup are skipped; with none left this does nothing.
    pub fn place_powerup_on_source(&mut self, rng: &mut impl Rng) -> Option<(Coord, Powerup)> {
        let mut candidates = self.sources.iter().copied().collect::<Vec<Coord>>();
        candidates.shuffle(rng);

        let Some(coord) = candidates.into_iter().find(|c| self.cell(c) == Cell::PowerupSource) else {
            log::debug!("no free powerup source to spawn on");
            return None;
        };
        let all = Powerup::all();
        let powerup = all[rng.random_range(0..all.len())];
        self.cells.0[coord.row][coord.col] = Cell::from_powerup(powerup);
        log::info!("a {powerup} powerup appeared at {coord}");
        Some((coord, powerup))
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn spawns_only_on_uncovered_sources() {
        let mut board = Board::new(parse_grid("
            ?x?
            ///
        ").unwrap()).unwrap();
        board.set(&Coord::new(0, 0), Cell::Player1).unwrap(); // a piece covers the first source
        let mut rng = StdRng::seed_from_u64(3);

        let (coord, powerup) = board.place_powerup_on_source(&mut rng).unwrap();
        assert_eq!(coord, Coord::new(0, 2));
        assert_eq!(board.cell(&coord), Cell::from_powerup(powerup));
        assert!(board.sources().contains(&coord));

        // the only free source now carries a powerup
        assert_eq!(board.place_powerup_on_source(&mut rng), None);
    }

    #[test]
    fn boards_without_sources_are_left_alone() {
        let mut board = Board::filled(3, 3);
        let before = board.grid().clone();
        assert_eq!(board.place_powerup_on_source(&mut StdRng::seed_from_u64(0)), None);
        assert_eq!(board.grid(), &before);
    }
}
