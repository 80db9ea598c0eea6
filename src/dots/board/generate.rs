use rand::{seq::IndexedRandom, Rng};

use crate::dots::prelude::*;

impl Board {
    /// Generates a fresh field:
    /// 1. player one's dots fill the top-left corner in a triangle, then the field turns half a turn
    ///    so they sit bottom-right, and player two's dots fill the new top-left corner
    /// 2. powerup sources and crumbly floor are scattered over regular floor
    /// 3. barrier shapes are dropped wherever they fit entirely on regular floor
    ///
    /// Every random placement is best-effort; a crowded board simply ends up with fewer features.
    pub fn generate(settings: &Settings, rng: &mut impl Rng) -> Board {
        let mut board = Board::filled(settings.length, settings.width);

        board.place_dots(Cell::dot(PlayerId::One), settings.num_dots);
        board.rotate();
        board.place_dots(Cell::dot(PlayerId::Two), settings.num_dots);

        board.scatter(Cell::PowerupSource, settings.num_initial_powerups, rng);
        board.scatter(Cell::Crumbly, settings.num_initial_crumblies, rng);

        let density = settings.barrier_density.max(1);
        let barriers = (settings.length / density) * (settings.width / density);
        board.place_barriers(barriers, rng);

        log::debug!("generated {}x{} board:\n{}", board.length, board.width, board.pretty());
        board
    }

    /// Attempts to drop a barrier shape at an anchor. The shape is placed only if every cell it covers
    /// is on the board and currently regular floor.
    pub fn try_place_barrier(&mut self, anchor: &Coord, shape: &[(isize, isize)]) -> bool {
        let covered = shape.iter()
            .map(|&offset| self.bounded(&(*anchor + OffsetCoord::from(offset))))
            .collect::<Option<Vec<Coord>>>();

        let Some(covered) = covered else {
            return false;
        };
        if covered.iter().any(|c| self.cell(c) != Cell::Regular) {
            return false;
        }
        for c in &covered {
            self.cells.0[c.row][c.col] = Cell::Barrier;
            self.barriers.insert(*c);
        }
        true
    }

    /// Fills rows front-to-back with dots. Row `i` holds at most `k - i` dots, where `k` is the side of
    /// the smallest triangle that fits the requested count. Only regular floor is taken.
    fn place_dots(&mut self, dot: Cell, count: usize) -> usize {
        let mut row_capacity = TRIANGLE_NUMBERS.iter()
            .position(|&t| count <= t)
            .map_or(TRIANGLE_NUMBERS.len(), |i| i + 1);

        let mut remaining = count;
        for row in self.cells.0.iter_mut() {
            for cell in row.iter_mut().take(row_capacity) {
                if remaining > 0 && *cell == Cell::Regular {
                    *cell = dot;
                    remaining -= 1;
                }
            }
            row_capacity = row_capacity.saturating_sub(1);
        }

        if remaining > 0 {
            log::warn!("only placed {} of {count} {dot:?} dots", count - remaining);
        }
        count - remaining
    }

    /// Turns the whole field half a turn in place.
    fn rotate(&mut self) {
        self.cells.0.reverse();
        self.cells.0.iter_mut().for_each(|row| row.reverse());
        self.reindex();
    }

    /// Converts up to `count` random regular cells into `target`.
    fn scatter(&mut self, target: Cell, count: usize, rng: &mut impl Rng) -> usize {
        let mut placed = 0;
        for _ in 0..SCATTER_ATTEMPTS {
            if placed == count {
                break;
            }
            let coord = self.random_coord(rng);
            if self.cell(&coord) == Cell::Regular {
                self.cells.0[coord.row][coord.col] = target;
                self.track(&coord, target);
                placed += 1;
            }
        }
        if placed < count {
            log::warn!("placed {placed} of {count} {target:?} cells before giving up");
        }
        placed
    }

    fn place_barriers(&mut self, count: usize, rng: &mut impl Rng) -> usize {
        let mut placed = 0;
        for _ in 0..BARRIER_ATTEMPTS {
            if placed == count {
                break;
            }
            let anchor = self.random_coord(rng);
            let Some(shape) = BARRIER_SHAPES.choose(rng) else {
                break;
            };
            if self.try_place_barrier(&anchor, shape) {
                placed += 1;
            }
        }
        if placed < count {
            log::warn!("placed {placed} of {count} barriers before giving up");
        }
        placed
    }

    fn random_coord(&self, rng: &mut impl Rng) -> Coord {
        Coord::new(rng.random_range(0..self.length), rng.random_range(0..self.width))
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn bare_settings(length: usize, width: usize, num_dots: usize) -> Settings {
        Settings {
            length,
            width,
            num_dots,
            num_initial_powerups: 0,
            num_initial_crumblies: 0,
            barrier_density: 100,
            ..Settings::default()
        }
    }

    #[test]
    fn dots_form_point_symmetric_triangles() {
        let mut rng = StdRng::seed_from_u64(1);
        let board = Board::generate(&bare_settings(5, 5, 6), &mut rng);
        assert_eq!(board.notate().lines().collect::<Vec<_>>(), vec![
            "ooo//",
            "oo///",
            "o///x",
            "///xx",
            "//xxx",
        ]);
    }

    #[test]
    fn partial_triangles_fill_front_to_back() {
        let mut rng = StdRng::seed_from_u64(1);
        let board = Board::generate(&bare_settings(5, 6, 4), &mut rng);
        // 4 dots need the 3-wide triangle: rows take 3, then 1
        let rows = board.notate().lines().map(String::from).collect::<Vec<_>>();
        assert_eq!(rows[0], "ooo///");
        assert_eq!(rows[1], "o/////");
        assert_eq!(board.scan(&[Cell::Player1]).len(), 4);
    }

    #[test]
    fn scattered_features_are_indexed() {
        let mut rng = StdRng::seed_from_u64(42);
        let settings = Settings { length: 10, width: 10, ..Settings::default() };
        let board = Board::generate(&settings, &mut rng);
        assert_eq!(board.sources().len(), settings.num_initial_powerups);
        assert_eq!(board.crumblies().len(), settings.num_initial_crumblies);
        assert_eq!(board.sources().iter().copied().collect::<Vec<_>>(), board.scan(&[Cell::PowerupSource]));
        assert_eq!(board.crumblies().iter().copied().collect::<Vec<_>>(), board.scan(&[Cell::Crumbly]));
        assert_eq!(board.barriers().iter().copied().collect::<Vec<_>>(), board.scan(&[Cell::Barrier]));
        assert!(!board.barriers().is_empty());
        assert_eq!(board.scan(&[Cell::Player1]).len(), 3);
        assert_eq!(board.scan(&[Cell::Player2]).len(), 3);
    }

    #[test]
    fn crowded_boards_place_what_fits() {
        let settings = Settings {
            length: 5,
            width: 5,
            num_dots: 10,
            num_initial_powerups: 10,
            num_initial_crumblies: 10,
            barrier_density: 2,
            ..Settings::default()
        };
        for seed in 0..20 {
            let board = Board::generate(&settings, &mut StdRng::seed_from_u64(seed));
            assert_eq!(board.scan(&[Cell::Player1]).len(), 10);
            assert_eq!(board.scan(&[Cell::Player2]).len(), 10);
            assert!(board.sources().len() <= 10);
            assert!(board.crumblies().len() <= 10);
            // 20 dots leave 5 squares for everything else
            assert!(board.sources().len() + board.crumblies().len() + board.barriers().len() <= 5);
            assert_eq!(board.sources().iter().copied().collect::<Vec<_>>(), board.scan(&[Cell::PowerupSource]));
            assert_eq!(board.crumblies().iter().copied().collect::<Vec<_>>(), board.scan(&[Cell::Crumbly]));
        }
    }

    #[test]
    fn generation_is_reproducible_from_a_seed() {
        let settings = Settings { length: 8, width: 8, ..Settings::default() };
        let a = Board::generate(&settings, &mut StdRng::seed_from_u64(9));
        let b = Board::generate(&settings, &mut StdRng::seed_from_u64(9));
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn barrier_needs_regular_floor_under_every_cell() {
        let mut board = Board::filled(5, 5);
        let shape = BARRIER_SHAPES[0];
        assert!(board.try_place_barrier(&Coord::new(2, 2), shape));
        assert_eq!(board.scan(&[Cell::Barrier]), vec![
            Coord::new(2, 2), Coord::new(2, 3), Coord::new(2, 4), Coord::new(3, 2),
        ]);
        assert_eq!(board.barriers().len(), 4);

        // same anchor again: the cells are no longer regular
        assert!(!board.try_place_barrier(&Coord::new(2, 2), shape));
        assert_eq!(board.barriers().len(), 4);

        // hanging off the edge
        assert!(!board.try_place_barrier(&Coord::new(0, 4), shape));
        assert!(!board.try_place_barrier(&Coord::new(0, 0), BARRIER_SHAPES[1]));
    }
}
