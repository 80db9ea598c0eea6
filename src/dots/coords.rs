use crate::dots::prelude::*;

/// A board coordinate. Rows grow downwards, columns grow rightwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Constructs a new coord.
    pub fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }

    /// The coord reached by turning a `length` x `width` grid half a turn.
    pub fn rotated(&self, length: usize, width: usize) -> Coord {
        Coord {
            row: length - 1 - self.row,
            col: width - 1 - self.col,
        }
    }
}

/// A signed step or displacement; sums of coords and offsets can leave the board, so they live here
/// until a board confirms them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OffsetCoord {
    pub rows: isize,
    pub cols: isize,
}

/// Unit steps for regular pieces: up, left, down, right.
pub static ORTHOGONAL_OFFSETS: [OffsetCoord; 4] = [
    OffsetCoord { rows: -1, cols: 0 },
    OffsetCoord { rows: 0, cols: -1 },
    OffsetCoord { rows: 1, cols: 0 },
    OffsetCoord { rows: 0, cols: 1 },
];

/// Unit steps for bishops: top left, top right, bottom left, bottom right.
pub static DIAGONAL_OFFSETS: [OffsetCoord; 4] = [
    OffsetCoord { rows: -1, cols: -1 },
    OffsetCoord { rows: -1, cols: 1 },
    OffsetCoord { rows: 1, cols: -1 },
    OffsetCoord { rows: 1, cols: 1 },
];

impl OffsetCoord {
    /// Constructs a new offset coord.
    pub fn new(rows: isize, cols: isize) -> OffsetCoord {
        OffsetCoord { rows, cols }
    }

    /// Coerces the offset into a coordinate if neither component is negative.
    pub fn coerce(&self) -> Option<Coord> {
        if self.rows < 0 || self.cols < 0 {
            return None;
        }
        Some(Coord { row: self.rows as usize, col: self.cols as usize })
    }

    /// Determines whether the offset lands inside a `length` x `width` grid.
    pub fn in_bounds_signed(&self, length: usize, width: usize) -> bool {
        0 <= self.rows && self.rows < length as isize && 0 <= self.cols && self.cols < width as isize
    }
}

impl From<(isize, isize)> for OffsetCoord {
    fn from((rows, cols): (isize, isize)) -> Self {
        OffsetCoord { rows, cols }
    }
}

// C -> OC

impl From<Coord> for OffsetCoord {
    fn from(value: Coord) -> Self {
        OffsetCoord {
            rows: value.row as isize,
            cols: value.col as isize,
        }
    }
}

impl From<&Coord> for OffsetCoord {
    fn from(value: &Coord) -> Self {
        OffsetCoord {
            rows: value.row as isize,
            cols: value.col as isize,
        }
    }
}

// OC + OC

impl Add<&OffsetCoord> for &OffsetCoord {
    type Output = OffsetCoord;
    fn add(self, rhs: &OffsetCoord) -> Self::Output {
        OffsetCoord {
            rows: self.rows + rhs.rows,
            cols: self.cols + rhs.cols,
        }
    }
}

impl Add<OffsetCoord> for OffsetCoord {
    type Output = OffsetCoord;
    fn add(self, rhs: OffsetCoord) -> Self::Output {
        &self + &rhs
    }
}

// C + OC

impl Add<&OffsetCoord> for &Coord {
    type Output = OffsetCoord;
    fn add(self, rhs: &OffsetCoord) -> Self::Output {
        &OffsetCoord::from(self) + rhs
    }
}

impl Add<&OffsetCoord> for Coord {
    type Output = OffsetCoord;
    fn add(self, rhs: &OffsetCoord) -> Self::Output {
        &self + rhs
    }
}

impl Add<OffsetCoord> for Coord {
    type Output = OffsetCoord;
    fn add(self, rhs: OffsetCoord) -> Self::Output {
        &self + &rhs
    }
}

// OC * k

impl Mul<isize> for OffsetCoord {
    type Output = OffsetCoord;
    fn mul(self, rhs: isize) -> Self::Output {
        OffsetCoord {
            rows: self.rows * rhs,
            cols: self.cols * rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_leave_the_board_only_through_signed_space() {
        let corner = Coord::new(0, 0);
        let up = corner + ORTHOGONAL_OFFSETS[0];
        assert_eq!(up, OffsetCoord::new(-1, 0));
        assert_eq!(up.coerce(), None);
        assert!(!up.in_bounds_signed(5, 5));

        let hop = corner + DIAGONAL_OFFSETS[3] * 2;
        assert_eq!(hop.coerce(), Some(Coord::new(2, 2)));
    }

    #[test]
    fn rotation_is_an_involution() {
        let c = Coord::new(1, 3);
        assert_eq!(c.rotated(5, 7), Coord::new(3, 3));
        assert_eq!(c.rotated(5, 7).rotated(5, 7), c);
    }
}
