mod actions;
mod play;

use rand::rngs::StdRng;

pub use play::GameSummary;

use crate::dots::{maps, prelude::*};

/// What a resolved move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveReport {
    /// Where the piece ended up; the exit of a portal if it stepped into one.
    pub landing: Coord,
    pub picked_up: Option<Powerup>,
    pub captured: bool,
    /// The portal end the piece stepped into.
    pub teleported_from: Option<Coord>,
}

/// A game in progress. The game is the only thing that changes the board once play begins.
pub struct Game {
    settings: Settings,
    board: Board,
    players: [Player; 2],
    portals: PortalRegistry,
    turn_number: u32,
    current: PlayerId,
    starting_dots: usize,
    deletes: [u32; 2],
    creates: [u32; 2],
    rng: StdRng,
}

impl Game {
    /// Sets up a game from settings: a generated board, or the named map the settings ask for.
    pub fn new(settings: Settings, mut rng: StdRng) -> Result<Game> {
        let board = match settings.map {
            MapChoice::Generated => Board::generate(&settings, &mut rng),
            map                  => Board::new(maps::load(map)?)?,
        };
        Ok(Game::from_board(settings, board, rng))
    }

    /// Sets up a game on a prepared board.
    pub fn from_board(settings: Settings, board: Board, rng: StdRng) -> Game {
        let players = PlayerId::all().map(|id| Player::new(id, &board));
        log::info!(
            "new {}x{} game, {} against {} pieces",
            board.length(), board.width(), players[0].pieces().len(), players[1].pieces().len()
        );
        let starting_dots = players.iter().map(|p| p.pieces().len()).max().unwrap_or(0);
        Game {
            starting_dots,
            deletes: [settings.num_deletes; 2],
            creates: [settings.num_creates; 2],
            settings,
            board,
            players,
            portals: PortalRegistry::new(),
            turn_number: 1,
            current: PlayerId::One,
            rng,
        }
    }

    /// Pieces each side began with, whatever the settings asked for.
    pub fn starting_dots(&self) -> usize {
        self.starting_dots
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn portals(&self) -> &PortalRegistry {
        &self.portals
    }

    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// The player whose turn it is.
    pub fn current(&self) -> PlayerId {
        self.current
    }

    /// The player the current player is trying to defeat.
    pub fn target(&self) -> PlayerId {
        -self.current
    }

    pub fn deletes_left(&self, id: PlayerId) -> u32 {
        self.deletes[id.index()]
    }

    pub fn creates_left(&self, id: PlayerId) -> u32 {
        self.creates[id.index()]
    }

    /// Applies a move by the current player from `origin` to an already resolved `destination`.
    ///
    /// The floor the piece leaves behind crumbles, regenerates into a source, or turns regular. The
    /// destination is read first: a powerup there is picked up, a portal there sends the piece to its
    /// other end, and an opposing piece there is captured. Everything is checked before anything
    /// changes, so a defect leaves the game as it was.
    pub fn process_move(&mut self, origin: Coord, destination: Coord) -> Result<MoveReport> {
        let mover = self.current;
        let piece = *self.players[mover.index()].piece(&origin).ok_or(Defect::MissingPiece(origin, mover))?;

        let target = self.board.get(&destination)?;
        if target.owner() == Some(mover) {
            return Err(Defect::NotOwnPiece(destination, mover).into());
        }
        let captured = target.owner() == Some(-mover);
        if captured && self.players[(-mover).index()].piece(&destination).is_none() {
            return Err(Defect::MissingPiece(destination, -mover).into());
        }
        let teleported_from = match target {
            Cell::Portal if self.portals.is_member(&destination) => Some(destination),
            Cell::Portal                                         => return Err(Defect::UnknownPortal(destination).into()),
            _                                                    => None,
        };
        let picked_up = target.powerup();

        // origin
        if self.board.crumblies().contains(&origin) {
            self.board.crumble(&origin)?;
        } else if self.board.sources().contains(&origin) {
            self.board.set(&origin, Cell::PowerupSource)?;
        } else {
            self.board.set(&origin, Cell::Regular)?;
        }

        // destination
        if let Some(powerup) = picked_up {
            log::info!("player {mover} picked up a {powerup} at {destination}");
            self.players[mover.index()].add_powerup(powerup);
        }
        let landing = match teleported_from {
            Some(entry) => self.update_portals(&entry)?,
            None        => destination,
        };
        if captured {
            log::info!("player {mover} captured the piece at {destination}");
            self.players[(-mover).index()].remove_piece(&destination)?;
        }

        self.board.set(&landing, piece.cell)?;
        self.players[mover.index()].relocate(&origin, landing)?;
        log::debug!("player {mover} moved {origin} -> {landing}");

        Ok(MoveReport { landing, picked_up, captured, teleported_from })
    }

    /// Consumes the live portal `coord` belongs to, turning the entry back into regular floor, and
    /// returns the exit.
    pub fn update_portals(&mut self, coord: &Coord) -> Result<Coord> {
        let exit = self.portals.take(coord).ok_or(Defect::UnknownPortal(*coord))?;
        self.board.set(coord, Cell::Regular)?;
        log::info!("portal {coord} -> {exit} used up");
        Ok(exit)
    }

    /// Determines whether the current player's opponent has run out of pieces.
    pub fn check_defeat(&self) -> bool {
        !self.players[self.target().index()].has_pieces()
    }

    /// Hands the turn to the other player.
    fn advance(&mut self) {
        self.current = -self.current;
        self.turn_number += 1;
        log::info!("turn {} begins for player {}", self.turn_number, self.current);
    }
}
