use std::ops::Neg;
use super::coords::Coord;

/// Triangular numbers used to size the starting formation of each player.
pub const TRIANGLE_NUMBERS: [usize; 14] = [1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 66, 78, 91, 105];

/// Attempts allowed when scattering powerup sources and crumbly cells.
pub const SCATTER_ATTEMPTS: usize = 100;

/// Attempts allowed when placing barrier shapes.
pub const BARRIER_ATTEMPTS: usize = 1000;

/// Barrier shapes as offsets from an anchor coordinate.
///
/// ```text
///   #       #     #     #
///   # # #   # #   #   # #
///           #     #
/// ```
pub const BARRIER_SHAPES: [&[(isize, isize)]; 4] = [
    &[(0, 0), (1, 0), (0, 1), (0, 2)],
    &[(0, 0), (1, 0), (0, 1), (-1, 0)],
    &[(0, 0), (1, 0), (-1, 0)],
    &[(0, 0), (0, -1), (1, 0)],
];

/// Token that cancels any free-text or coordinate prompt.
pub const CANCEL_TOKEN: &str = "c";

/// One of the two seats at the table.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PlayerId {
    One = 0,
    Two = 1,
}

impl PlayerId {
    /// Both seats in turn order.
    pub fn all() -> [PlayerId; 2] {
        [PlayerId::One, PlayerId::Two]
    }

    /// The 1-based seat number shown to humans.
    pub fn number(&self) -> u8 {
        *self as u8 + 1
    }

    /// Index into a pair of per-player values.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl Neg for PlayerId {
    type Output = PlayerId;
    fn neg(self) -> Self::Output {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// The powerups a player can hold.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Powerup {
    Hop = 0,
    Destroyer = 1,
    Portal = 2,
    Bishop = 3,
}

impl Powerup {
    /// Gets every powerup kind in order.
    pub fn all() -> [Powerup; 4] {
        [Powerup::Hop, Powerup::Destroyer, Powerup::Portal, Powerup::Bishop]
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Powerup::Hop       => "Hop",
            Powerup::Destroyer => "Destroyer",
            Powerup::Portal    => "Portal",
            Powerup::Bishop    => "Bishop",
        }
    }
}

impl std::fmt::Display for Powerup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// How a prompted action ended. Cancellations and rejections never touch the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Cancelled,
    Rejected(String),
}

impl Outcome {
    pub fn rejected(reason: impl Into<String>) -> Outcome {
        Outcome::Rejected(reason.into())
    }

    pub fn is_completed(&self) -> bool {
        *self == Outcome::Completed
    }
}

/// Invariant violations. These mean the engine was driven incorrectly, not that a player chose badly.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum Defect {
    #[error("coordinate {0} is not a member of any live portal")]
    UnknownPortal(Coord),

    #[error("no piece at {0} belongs to player {1}")]
    MissingPiece(Coord, PlayerId),

    #[error("{0} holds a piece of player {1}, who cannot land on their own piece")]
    NotOwnPiece(Coord, PlayerId),

    #[error("portal endpoint {0} is already part of a live portal")]
    PortalOverlap(Coord),

    #[error("a portal cannot link {0} to itself")]
    DegeneratePortal(Coord),

    #[error("coordinate ({0}, {1}) is outside the board")]
    OutOfBounds(isize, isize),

    #[error("malformed grid: {0}")]
    MalformedGrid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation_swaps_seats() {
        assert_eq!(-PlayerId::One, PlayerId::Two);
        assert_eq!(-(-PlayerId::Two), PlayerId::Two);
        assert_eq!(PlayerId::all().map(|p| p.number()), [1, 2]);
    }
}
