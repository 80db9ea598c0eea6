pub(crate) mod generate;
pub(crate) mod indexing;
pub(crate) mod powerups;
pub(crate) mod pretty;

use super::prelude::*;

/// The cells of a board, row by row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid(pub Vec<Vec<Cell>>);

/// A rectangular field of cells plus coordinate indices over it.
///
/// The indices remember what floor lies under a square: a coordinate stays in `crumblies` or `sources`
/// while a piece or a spawned powerup stands on it, and leaves the index as soon as any other floor
/// cell is written there. They are caches over `cells` and are only ever updated through `set`.
#[derive(Clone, Debug)]
pub struct Board {
    /// Every square on the board; always `length` rows of `width` cells.
    cells: Grid,

    length: usize,
    width: usize,

    /// Floor that crumbles into a blank once a piece steps off it.
    crumblies: BTreeSet<Coord>,

    /// Permanent powerup sources; a piece leaving one restores it.
    sources: BTreeSet<Coord>,

    barriers: BTreeSet<Coord>,
}

impl Board {
    /// Builds a board around a pre-populated grid, deriving its dimensions and indices.
    pub fn new(grid: Grid) -> Result<Board> {
        let length = grid.0.len();
        let width = grid.0.first().map_or(0, Vec::len);
        if length == 0 || width == 0 {
            return Err(Defect::MalformedGrid("board must have at least one row and column".into()).into());
        }
        if grid.0.iter().any(|row| row.len() != width) {
            return Err(Defect::MalformedGrid("every row must have the same width".into()).into());
        }

        let mut board = Board {
            cells: grid,
            length,
            width,
            crumblies: BTreeSet::new(),
            sources: BTreeSet::new(),
            barriers: BTreeSet::new(),
        };
        board.reindex();
        Ok(board)
    }

    /// A board of the given size covered in regular floor.
    pub fn filled(length: usize, width: usize) -> Board {
        Board {
            cells: Grid(vec![vec![Cell::Regular; width]; length]),
            length,
            width,
            crumblies: BTreeSet::new(),
            sources: BTreeSet::new(),
            barriers: BTreeSet::new(),
        }
    }

    /// Number of rows.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn grid(&self) -> &Grid {
        &self.cells
    }

    pub fn crumblies(&self) -> &BTreeSet<Coord> {
        &self.crumblies
    }

    pub fn sources(&self) -> &BTreeSet<Coord> {
        &self.sources
    }

    pub fn barriers(&self) -> &BTreeSet<Coord> {
        &self.barriers
    }

    /// Returns every coordinate holding one of the target cells, in row-major order.
    pub fn scan(&self, targets: &[Cell]) -> Vec<Coord> {
        self.cells.0.iter().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate()
                .filter(|(_, cell)| targets.contains(cell))
                .map(move |(c, _)| Coord::new(r, c))
        }).collect()
    }

    /// Rebuilds the floor indices from scratch. Squares covered by a piece or powerup cannot reveal
    /// their floor, so they are treated as regular floor.
    pub(super) fn reindex(&mut self) {
        self.crumblies = self.scan(&[Cell::Crumbly]).into_iter().collect();
        self.sources = self.scan(&[Cell::PowerupSource]).into_iter().collect();
        self.barriers = self.scan(&[Cell::Barrier]).into_iter().collect();
    }

    /// Keeps the floor indices in step with a write of `cell` at `coord`.
    fn track(&mut self, coord: &Coord, cell: Cell) {
        if cell.owner().is_some() || cell.powerup().is_some() {
            return; // something standing on the floor; the floor itself is unchanged
        }
        for (index, kind) in [
            (&mut self.crumblies, Cell::Crumbly),
            (&mut self.sources, Cell::PowerupSource),
            (&mut self.barriers, Cell::Barrier),
        ] {
            if cell == kind {
                index.insert(*coord);
            } else {
                index.remove(coord);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        Board::new(parse_grid(text).unwrap()).unwrap()
    }

    #[test]
    fn dimensions_come_from_the_grid() {
        let b = board("
            ////
            ////
            ////
        ");
        assert_eq!((b.length(), b.width()), (3, 4));
    }

    #[test]
    fn scan_is_row_major() {
        let b = board("
            x/x
            /o/
            x//
        ");
        assert_eq!(b.scan(&[Cell::Player1]), vec![Coord::new(0, 0), Coord::new(0, 2), Coord::new(2, 0)]);
        assert_eq!(b.scan(&[Cell::Player1, Cell::Player2]).len(), 4);
        assert!(b.scan(&[Cell::Portal]).is_empty());
    }

    #[test]
    fn indices_follow_the_floor_under_pieces() {
        let mut b = board("
            ~?#
            ///
        ");
        let [crumbly, source, barrier] = [Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)];
        assert!(b.crumblies().contains(&crumbly));
        assert!(b.sources().contains(&source));
        assert!(b.barriers().contains(&barrier));

        // a piece or spawned powerup hides the floor without changing it
        b.set(&crumbly, Cell::Player1).unwrap();
        b.set(&source, Cell::Hop).unwrap();
        assert!(b.crumblies().contains(&crumbly));
        assert!(b.sources().contains(&source));

        // new floor replaces the old
        b.set(&crumbly, Cell::Blank).unwrap();
        b.set(&barrier, Cell::Regular).unwrap();
        assert!(b.crumblies().is_empty());
        assert!(b.barriers().is_empty());
        assert!(b.sources().contains(&source));
    }
}
