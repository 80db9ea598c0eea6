use crate::dots::prelude::*;

/// A labelled step a piece can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Direction {
    /// The key a player types to pick this direction.
    pub key: char,
    pub name: &'static str,
    pub vector: OffsetCoord,
}

static ORTHOGONAL_LABELS: [(char, &str); 4] = [('W', "Up"), ('A', "Left"), ('S', "Down"), ('D', "Right")];
static DIAGONAL_LABELS: [(char, &str); 4] = [('Q', "Top left"), ('E', "Top right"), ('A', "Bottom left"), ('D', "Bottom right")];

/// A single playable unit on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Piece {
    pub coord: Coord,
    /// The cell this piece shows on the board.
    pub cell: Cell,
    pub upgraded: bool,
}

impl Piece {
    /// A regular piece for the given player.
    pub fn dot(coord: Coord, player: PlayerId) -> Piece {
        Piece { coord, cell: Cell::dot(player), upgraded: false }
    }

    /// An upgraded piece for the given player.
    pub fn bishop(coord: Coord, player: PlayerId) -> Piece {
        Piece { coord, cell: Cell::bishop(player), upgraded: true }
    }

    /// Recovers a piece from the cell it shows, if that cell is a piece at all.
    pub fn from_cell(coord: Coord, cell: Cell) -> Option<Piece> {
        let owner = cell.owner()?;
        Some(match cell == Cell::bishop(owner) {
            true => Piece::bishop(coord, owner),
            _    => Piece::dot(coord, owner),
        })
    }

    pub fn owner(&self) -> Option<PlayerId> {
        self.cell.owner()
    }

    /// Gets the four directions this piece may step in. Regular pieces step orthogonally and bishops
    /// diagonally; a hop doubles the step.
    pub fn directions(&self, is_hop: bool) -> [Direction; 4] {
        let (offsets, labels) = match self.upgraded {
            true => (&DIAGONAL_OFFSETS, &DIAGONAL_LABELS),
            _    => (&ORTHOGONAL_OFFSETS, &ORTHOGONAL_LABELS),
        };
        let scale = if is_hop { 2 } else { 1 };
        std::array::from_fn(|i| Direction {
            key: labels[i].0,
            name: labels[i].1,
            vector: offsets[i] * scale,
        })
    }

    /// Turns the piece into a bishop of the same owner.
    pub fn upgrade(&mut self) -> Result<()> {
        let owner = self.owner().ok_or(anyhow!("{:?} is not a piece cell", self.cell))?;
        if self.upgraded {
            return Err(anyhow!("the piece at {} is already a bishop", self.coord));
        }
        self.upgraded = true;
        self.cell = Cell::bishop(owner);
        Ok(())
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = if self.upgraded { "bishop" } else { "dot" };
        write!(f, "{kind} at {}", self.coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dots_step_orthogonally() {
        let piece = Piece::dot(Coord::new(2, 2), PlayerId::One);
        let dirs = piece.directions(false);
        assert_eq!(dirs.map(|d| d.key), ['W', 'A', 'S', 'D']);
        assert_eq!(dirs[0].vector, OffsetCoord::new(-1, 0));
        assert_eq!(dirs[3].name, "Right");
        assert!(dirs.iter().all(|d| d.vector.rows == 0 || d.vector.cols == 0));
    }

    #[test]
    fn bishops_step_diagonally_and_hops_double() {
        let piece = Piece::bishop(Coord::new(2, 2), PlayerId::Two);
        let dirs = piece.directions(true);
        assert_eq!(dirs.map(|d| d.key), ['Q', 'E', 'A', 'D']);
        assert_eq!(dirs[1].vector, OffsetCoord::new(-2, 2));
        assert!(dirs.iter().all(|d| d.vector.rows.abs() == 2 && d.vector.cols.abs() == 2));
    }

    #[test]
    fn upgrading_swaps_the_cell_once() {
        let mut piece = Piece::dot(Coord::new(0, 0), PlayerId::Two);
        piece.upgrade().unwrap();
        assert_eq!(piece.cell, Cell::Bishop2);
        assert!(piece.upgraded);
        assert!(piece.upgrade().is_err());
        assert_eq!(Piece::from_cell(Coord::new(0, 0), Cell::Bishop2), Some(piece));
        assert_eq!(Piece::from_cell(Coord::new(0, 0), Cell::Regular), None);
    }
}
