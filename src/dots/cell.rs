use crossterm::style::{Color, Stylize};
use crate::dots::prelude::*;

/// Everything a square on the board can show. The declaration order is the total order on cells.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cell {
    Blank = 0,
    Regular = 1,
    Player1 = 2,
    Player2 = 3,
    Bishop1 = 4,
    Bishop2 = 5,
    Barrier = 6,
    Crumbly = 7,
    Portal = 8,
    PowerupSource = 9,
    Hop = 10,
    Destroyer = 11,
    PortalPowerup = 12,
    BishopPowerup = 13,
}

/// Glyph and colour for every cell; this is the rendering registry and, read backwards, the parser.
static REGISTRY: [(Cell, char, Color); 14] = [
    (Cell::Blank, ' ', Color::Reset),
    (Cell::Regular, '/', Color::Reset),
    (Cell::Player1, 'O', Color::Blue),
    (Cell::Player2, 'O', Color::Red),
    (Cell::Bishop1, 'B', Color::Blue),
    (Cell::Bishop2, 'B', Color::Red),
    (Cell::Barrier, '#', Color::Reset),
    (Cell::Crumbly, '~', Color::Reset),
    (Cell::Portal, '@', Color::DarkMagenta),
    (Cell::PowerupSource, '?', Color::Magenta),
    (Cell::Hop, 'H', Color::Green),
    (Cell::Destroyer, 'D', Color::Green),
    (Cell::PortalPowerup, 'P', Color::Green),
    (Cell::BishopPowerup, 'B', Color::Green),
];

impl Cell {
    /// Every cell kind in order.
    pub fn all() -> [Cell; 14] {
        REGISTRY.map(|(cell, _, _)| cell)
    }

    /// The glyph drawn for this cell.
    pub fn glyph(&self) -> char {
        REGISTRY[*self as usize].1
    }

    /// The colour the glyph is drawn in.
    pub fn colour(&self) -> Color {
        REGISTRY[*self as usize].2
    }

    /// Recovers a cell from its rendered glyph and colour.
    pub fn from_glyph(glyph: char, colour: Color) -> Option<Cell> {
        REGISTRY.iter().find(|(_, g, c)| *g == glyph && *c == colour).map(|(cell, _, _)| *cell)
    }

    /// The cell showing a regular piece of the given player.
    pub fn dot(player: PlayerId) -> Cell {
        match player {
            PlayerId::One => Cell::Player1,
            PlayerId::Two => Cell::Player2,
        }
    }

    /// The cell showing an upgraded piece of the given player.
    pub fn bishop(player: PlayerId) -> Cell {
        match player {
            PlayerId::One => Cell::Bishop1,
            PlayerId::Two => Cell::Bishop2,
        }
    }

    /// The player whose piece stands on this cell, if any.
    pub fn owner(&self) -> Option<PlayerId> {
        match self {
            Cell::Player1 | Cell::Bishop1 => Some(PlayerId::One),
            Cell::Player2 | Cell::Bishop2 => Some(PlayerId::Two),
            _                             => None,
        }
    }

    /// The powerup lying on this cell, if any.
    pub fn powerup(&self) -> Option<Powerup> {
        match self {
            Cell::Hop           => Some(Powerup::Hop),
            Cell::Destroyer     => Some(Powerup::Destroyer),
            Cell::PortalPowerup => Some(Powerup::Portal),
            Cell::BishopPowerup => Some(Powerup::Bishop),
            _                   => None,
        }
    }

    /// The cell a freshly spawned powerup shows.
    pub fn from_powerup(powerup: Powerup) -> Cell {
        match powerup {
            Powerup::Hop       => Cell::Hop,
            Powerup::Destroyer => Cell::Destroyer,
            Powerup::Portal    => Cell::PortalPowerup,
            Powerup::Bishop    => Cell::BishopPowerup,
        }
    }

    /// Notates the cell as a single character of the map notation.
    pub fn notate(&self) -> char {
        match self {
            Cell::Blank         => '.',
            Cell::Regular       => '/',
            Cell::Player1       => 'x',
            Cell::Bishop1       => 'X',
            Cell::Player2       => 'o',
            Cell::Bishop2       => 'O',
            Cell::Barrier       => '#',
            Cell::Crumbly       => '~',
            Cell::Portal        => '@',
            Cell::PowerupSource => '?',
            Cell::Hop           => 'h',
            Cell::Destroyer     => 'd',
            Cell::PortalPowerup => 'p',
            Cell::BishopPowerup => 'b',
        }
    }

    /// Parses a single character of the map notation.
    pub fn parse(ch: char) -> Result<Cell> {
        Cell::all().into_iter()
            .find(|cell| cell.notate() == ch)
            .ok_or_else(|| anyhow!("invalid notation {ch:?} for cell"))
    }

    /// The glyph wrapped in its terminal colour.
    pub fn styled(&self) -> String {
        match self.colour() {
            Color::Reset => self.glyph().to_string(),
            colour       => self.glyph().to_string().with(colour).to_string(),
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
