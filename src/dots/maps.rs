use serde::Deserialize;

use crate::dots::prelude::*;

/// Where the starting board comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapChoice {
    /// Procedurally generated from the settings.
    #[default]
    Generated,
    Breakout,
}

impl MapChoice {
    pub fn name(&self) -> &'static str {
        match self {
            MapChoice::Generated => "Generated",
            MapChoice::Breakout  => "Breakout",
        }
    }
}

/// Breakout: two walled lines of dots facing each other across an open middle.
const BREAKOUT: &str = "
    //ooooo//
    /#/~?~/#/
    /////////
    #/#/./#/#
    /////////
    /#/~?~/#/
    //xxxxx//
";

/// Loads the pre-built grid of a named map. Generated boards have no grid and are refused.
pub fn load(map: MapChoice) -> Result<Grid> {
    match map {
        MapChoice::Breakout  => parse_grid(BREAKOUT),
        MapChoice::Generated => Err(anyhow!("the generated map is built from settings, not loaded")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakout_is_point_symmetric() {
        let grid = load(MapChoice::Breakout).unwrap();
        let (length, width) = (grid.0.len(), grid.0[0].len());
        for r in 0..length {
            for c in 0..width {
                let here = grid.0[r][c];
                let mirror = Coord::new(r, c).rotated(length, width);
                let there = grid.0[mirror.row][mirror.col];
                match here.owner() {
                    Some(player) => assert_eq!(there.owner(), Some(-player)),
                    None         => assert_eq!(here, there),
                }
            }
        }
    }

    #[test]
    fn breakout_builds_a_board() {
        let board = Board::new(load(MapChoice::Breakout).unwrap()).unwrap();
        assert_eq!((board.length(), board.width()), (7, 9));
        assert_eq!(board.scan(&[Cell::Player1]).len(), 5);
        assert_eq!(board.scan(&[Cell::Player2]).len(), 5);
        assert_eq!(board.sources().len(), 2);
        assert_eq!(board.crumblies().len(), 4);
        assert!(load(MapChoice::Generated).is_err());
    }
}
