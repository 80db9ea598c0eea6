use crate::{console::{Prompt, TextRules}, dots::prelude::*};

/// A direction a piece can take and the square it would end up on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub direction: Direction,
    pub destination: Coord,
}

/// One side of the game: its live pieces and the powerups it holds.
#[derive(Clone, Debug)]
pub struct Player {
    id: PlayerId,
    /// Pieces keyed by where they stand, so prompts list them in a stable order.
    pieces: BTreeMap<Coord, Piece>,
    powerups: Vec<Powerup>,
}

impl Player {
    /// Picks up every piece of the given player from the board.
    pub fn new(id: PlayerId, board: &Board) -> Player {
        let pieces = board.scan(&[Cell::dot(id), Cell::bishop(id)]).into_iter()
            .filter_map(|coord| Piece::from_cell(coord, board.cell(&coord)))
            .map(|piece| (piece.coord, piece))
            .collect();
        Player { id, pieces, powerups: vec![] }
    }

    pub fn pieces(&self) -> &BTreeMap<Coord, Piece> {
        &self.pieces
    }

    pub fn piece(&self, coord: &Coord) -> Option<&Piece> {
        self.pieces.get(coord)
    }

    pub fn has_pieces(&self) -> bool {
        !self.pieces.is_empty()
    }

    pub fn powerups(&self) -> &[Powerup] {
        &self.powerups
    }

    /// Follows `vector` from `origin` to the square a piece would land on.
    ///
    /// Blank squares are passed over, so a run of blanks stretches the step until it reaches
    /// something else. The board edge, a barrier, or one of this player's own pieces stops the move.
    pub fn destination(&self, board: &Board, origin: &Coord, vector: &OffsetCoord) -> Option<Coord> {
        let mut current = OffsetCoord::from(origin);
        loop {
            current = &current + vector;
            let candidate = board.bounded(&current)?;
            match board.cell(&candidate) {
                cell if cell.owner() == Some(self.id) => return None,
                Cell::Barrier                         => return None,
                Cell::Blank                           => continue,
                _                                     => return Some(candidate),
            }
        }
    }

    /// Gets every direction the piece can actually go in, keyed by its selection key.
    pub fn detect_moves(&self, board: &Board, piece: &Piece, is_hop: bool) -> BTreeMap<char, Move> {
        piece.directions(is_hop).into_iter()
            .filter_map(|direction| {
                self.destination(board, &piece.coord, &direction.vector)
                    .map(|destination| (direction.key, Move { direction, destination }))
            })
            .collect()
    }

    /// Asks which piece to move and where. A piece that cannot move is reported and the question
    /// repeats; cancelling either question abandons the attempt.
    pub fn attempt_move(&self, board: &Board, is_hop: bool, prompt: &mut dyn Prompt) -> Result<Option<(Coord, Coord)>> {
        loop {
            let pieces = self.pieces.values().collect::<Vec<&Piece>>();
            let options = pieces.iter().map(|piece| piece.coord.to_string()).collect::<Vec<String>>();
            let Some(choice) = prompt.choose("Which dot would you like to move?", &options)? else {
                return Ok(None);
            };
            let piece = pieces[choice];

            let moves = self.detect_moves(board, piece, is_hop);
            if moves.is_empty() {
                prompt.say("This dot cannot move.")?;
                continue;
            }

            let menu = moves.values()
                .map(|mv| format!("\n{}) {}", mv.direction.key, mv.direction.name))
                .collect::<String>();
            let rules = TextRules::new(1, 1)
                .with_cancel(CANCEL_TOKEN)
                .with_allowed(moves.keys().flat_map(|key| [*key, key.to_ascii_lowercase()]));
            let question = format!("Where would you like to move the dot?{menu}\nC) Cancel");

            let Some(answer) = prompt.ask_string(&question, &rules)? else {
                return Ok(None);
            };
            let key = answer.chars().next().map(|ch| ch.to_ascii_uppercase());
            let Some(mv) = key.and_then(|key| moves.get(&key)) else {
                return Ok(None);
            };
            log::debug!("player {} chose {} {} to {}", self.id, piece, mv.direction.name, mv.destination);
            return Ok(Some((piece.coord, mv.destination)));
        }
    }

    /// Removes a captured piece.
    pub(crate) fn remove_piece(&mut self, coord: &Coord) -> Result<Piece> {
        self.pieces.remove(coord).ok_or(Defect::MissingPiece(*coord, self.id).into())
    }

    /// Moves a piece to a new square.
    pub(crate) fn relocate(&mut self, from: &Coord, to: Coord) -> Result<Piece> {
        let mut piece = self.remove_piece(from)?;
        piece.coord = to;
        self.pieces.insert(to, piece);
        Ok(piece)
    }

    /// Upgrades the piece at `coord` into a bishop, returning the upgraded piece.
    pub(crate) fn upgrade(&mut self, coord: &Coord) -> Result<Piece> {
        let piece = self.pieces.get_mut(coord).ok_or(Defect::MissingPiece(*coord, self.id))?;
        piece.upgrade()?;
        Ok(*piece)
    }

    pub(crate) fn add_powerup(&mut self, powerup: Powerup) {
        self.powerups.push(powerup);
    }

    /// Spends one held instance of the powerup; false if none was held.
    pub(crate) fn remove_powerup(&mut self, powerup: Powerup) -> bool {
        match self.powerups.iter().position(|p| *p == powerup) {
            Some(i) => {
                self.powerups.remove(i);
                true
            },
            None => false,
        }
    }
}
