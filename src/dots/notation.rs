use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;

use crate::{dots::board::Grid, prelude::{Cell, Coord, Defect}, utils::prelude::*};

static COORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?<row>[0-9]+)(?<col>[A-Za-z]+)$").expect("coordinate pattern is valid")
});

/// Converts a 0-based column index into bijective base-26 letters (`0 -> A`, `25 -> Z`, `26 -> AA`).
pub fn column_letters(col: usize) -> String {
    let mut letters = vec![];
    let mut n = col + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push((b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Converts bijective base-26 letters back into a 0-based column index; case-insensitive.
pub fn column_index(letters: &str) -> Option<usize> {
    if letters.is_empty() {
        return None;
    }
    letters.chars().try_fold(0usize, |acc, ch| {
        if !ch.is_ascii_alphabetic() {
            return None;
        }
        let digit = (ch.to_ascii_uppercase() as u8 - b'A') as usize + 1;
        acc.checked_mul(26)?.checked_add(digit)
    }).map(|n| n - 1)
}

impl Coord {
    /// The canonical notation of the coord: 1-based row number followed by column letters.
    pub fn notate(&self) -> String {
        format!("{}{}", self.row + 1, column_letters(self.col))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.notate())
    }
}

impl std::str::FromStr for Coord {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let Some(matches) = COORD_PATTERN.captures(s.trim()) else {
            return Err(anyhow!("expected a row number followed by column letters (e.g. 1A); received {s}"));
        };
        let row = matches["row"].parse::<usize>()?;
        if row == 0 {
            return Err(anyhow!("row numbers start at 1; received {s}"));
        }
        let col = column_index(&matches["col"]).ok_or(anyhow!("column {} is too large", &matches["col"]))?;
        Ok(Coord::new(row - 1, col))
    }
}

/// Parses a grid written in map notation, one line per row. Blank lines and surrounding whitespace
/// are ignored, so grids can be written as indented string literals.
pub fn parse_grid(s: &str) -> Result<Grid> {
    let rows = s.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.chars().map(Cell::parse).collect::<Result<Vec<Cell>>>())
        .collect::<Result<Vec<Vec<Cell>>>>()?;

    let Some(width) = rows.first().map(Vec::len) else {
        return Err(Defect::MalformedGrid("grid has no rows".into()).into());
    };
    if let Some((i, row)) = rows.iter().find_position(|row| row.len() != width) {
        return Err(Defect::MalformedGrid(format!("row {} has {} cells, expected {width}", i + 1, row.len())).into());
    }
    Ok(Grid(rows))
}

/// Writes a grid back out in map notation.
pub fn notate_grid(grid: &Grid) -> String {
    grid.0.iter().map(|row| row.iter().map(Cell::notate).collect::<String>()).join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_letters_are_bijective_base_26() {
        assert_eq!(column_letters(0), "A");
        assert_eq!(column_letters(25), "Z");
        assert_eq!(column_letters(26), "AA");
        assert_eq!(column_letters(27), "AB");
        assert_eq!(column_letters(701), "ZZ");
        assert_eq!(column_letters(702), "AAA");
        for col in 0..1000 {
            assert_eq!(column_index(&column_letters(col)), Some(col));
        }
    }

    #[test]
    fn coordinates_parse_case_insensitively() {
        assert_eq!("1A".parse::<Coord>().unwrap(), Coord::new(0, 0));
        assert_eq!(" 3c ".parse::<Coord>().unwrap(), Coord::new(2, 2));
        assert_eq!("12ab".parse::<Coord>().unwrap(), Coord::new(11, 27));
        assert_eq!(Coord::new(11, 27).notate(), "12AB");
    }

    #[test]
    fn malformed_coordinates_are_rejected() {
        for bad in ["", "A1", "0A", "1", "A", "1A2", "1-A", "c"] {
            assert!(bad.parse::<Coord>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn ragged_grids_are_malformed() {
        let err = parse_grid("///\n//").unwrap_err();
        assert!(matches!(err.downcast_ref::<Defect>(), Some(Defect::MalformedGrid(_))));
        assert!(parse_grid("/z/").is_err());
        assert!(parse_grid("\n\n").is_err());
    }

    #[test]
    fn grids_round_trip_through_notation() {
        let text = "o/~\n.#?\nhdx";
        let grid = parse_grid(text).unwrap();
        assert_eq!(grid.0[0][0], Cell::Player2);
        assert_eq!(grid.0[1][0], Cell::Blank);
        assert_eq!(notate_grid(&grid), text);
    }
}
