use crate::dots::prelude::*;

impl Board {
    /// Determines whether the coordinate lies on the board.
    pub fn is_within_bounds(&self, coord: &OffsetCoord) -> bool {
        coord.in_bounds_signed(self.length, self.width)
    }

    /// Confirms a signed coordinate against the board, producing a real coordinate if it is on it.
    pub fn bounded(&self, coord: &OffsetCoord) -> Option<Coord> {
        if self.is_within_bounds(coord) {
            coord.coerce()
        } else {
            None
        }
    }

    /// Gets the cell at a given coordinate.
    pub fn get(&self, coord: &Coord) -> Result<Cell> {
        self.cells.0.get(coord.row)
            .and_then(|row| row.get(coord.col))
            .copied()
            .ok_or_else(|| Defect::OutOfBounds(coord.row as isize, coord.col as isize).into())
    }

    /// Gets the cell at a coordinate the caller has already bounds-checked.
    pub fn cell(&self, coord: &Coord) -> Cell {
        self.cells.0[coord.row][coord.col]
    }

    /// Sets the cell at a given coordinate, keeping the floor indices in step.
    pub fn set(&mut self, coord: &Coord, cell: Cell) -> Result<&mut Self> {
        let r = self.cells.0.get_mut(coord.row)
            .and_then(|row| row.get_mut(coord.col))
            .ok_or(Defect::OutOfBounds(coord.row as isize, coord.col as isize))?;
        *r = cell;
        self.track(coord, cell);
        Ok(self)
    }

    /// Turns a crumbly coordinate blank for good.
    pub fn crumble(&mut self, coord: &Coord) -> Result<&mut Self> {
        log::debug!("floor at {coord} crumbled away");
        self.set(coord, Cell::Blank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_agree_with_the_definition() {
        let b = Board::filled(4, 6);
        for rows in -2..8isize {
            for cols in -2..9isize {
                let expected = 0 <= rows && rows < 4 && 0 <= cols && cols < 6;
                let coord = OffsetCoord::new(rows, cols);
                assert_eq!(b.is_within_bounds(&coord), expected);
                assert_eq!(b.bounded(&coord).is_some(), expected);
            }
        }
    }

    #[test]
    fn out_of_bounds_access_is_a_defect() {
        let mut b = Board::filled(2, 2);
        let err = b.get(&Coord::new(2, 0)).unwrap_err();
        assert_eq!(err.downcast_ref::<Defect>(), Some(&Defect::OutOfBounds(2, 0)));
        assert!(b.set(&Coord::new(0, 5), Cell::Blank).is_err());
        assert_eq!(b.get(&Coord::new(1, 1)).unwrap(), Cell::Regular);
    }
}
