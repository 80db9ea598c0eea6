use crate::{console::Prompt, dots::prelude::*};

/// Which of a player's limited board edits is being spent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Edit {
    Delete,
    Create,
}

impl Game {
    /// Asks the current player for a move and applies it. With `is_hop` every step is doubled.
    pub fn take_move(&mut self, prompt: &mut dyn Prompt, is_hop: bool) -> Result<Outcome> {
        let player = &self.players[self.current.index()];
        let Some((origin, destination)) = player.attempt_move(&self.board, is_hop, prompt)? else {
            return Ok(Outcome::Cancelled);
        };

        let report = self.process_move(origin, destination)?;
        if let Some(powerup) = report.picked_up {
            prompt.say(&format!("Player {} has found a {powerup}!", self.current))?;
        }
        if report.captured {
            prompt.say(&format!("Player {} captured the dot at {destination}!", self.current))?;
        }
        if let Some(entry) = report.teleported_from {
            prompt.say(&format!("The portal at {entry} carried the dot to {}.", report.landing))?;
        }
        Ok(Outcome::Completed)
    }

    /// Turns a regular square blank, spending one of the current player's deletes.
    pub fn delete_space(&mut self, prompt: &mut dyn Prompt) -> Result<Outcome> {
        self.spend_edit(prompt, Edit::Delete)
    }

    /// Turns a blank square regular, spending one of the current player's creates.
    pub fn create_space(&mut self, prompt: &mut dyn Prompt) -> Result<Outcome> {
        self.spend_edit(prompt, Edit::Create)
    }

    /// Asks which held powerup to use and uses it. The powerup is only spent when its action completes.
    pub fn use_powerup(&mut self, prompt: &mut dyn Prompt) -> Result<Outcome> {
        let held = self.players[self.current.index()].powerups().to_vec();
        if held.is_empty() {
            return Ok(Outcome::rejected("You don't have any powerups."));
        }

        let options = held.iter().map(Powerup::to_string).collect::<Vec<String>>();
        let Some(choice) = prompt.choose("Which powerup would you like to use?", &options)? else {
            return Ok(Outcome::Cancelled);
        };
        let powerup = held[choice];

        let outcome = match powerup {
            Powerup::Portal    => self.place_portal_pair(prompt)?,
            Powerup::Hop       => self.take_move(prompt, true)?,
            Powerup::Destroyer => {
                match self.edit_coord(prompt, "Which barrier would you like to destroy?", Cell::Barrier, Cell::Regular)? {
                    Some(_) => Outcome::Completed,
                    None    => Outcome::Cancelled,
                }
            },
            Powerup::Bishop    => self.upgrade_piece(prompt)?,
        };

        if outcome.is_completed() {
            self.players[self.current.index()].remove_powerup(powerup);
            log::info!("player {} used a {powerup}", self.current);
        }
        Ok(outcome)
    }

    /// Places a linked pair of portals on two regular squares. Cancelling the second square puts the
    /// first one back, and a pair that cannot be linked puts both back.
    pub fn place_portal_pair(&mut self, prompt: &mut dyn Prompt) -> Result<Outcome> {
        let Some(first) = self.edit_coord(prompt, "Enter the first portal coordinate", Cell::Regular, Cell::Portal)? else {
            return Ok(Outcome::Cancelled);
        };
        let Some(second) = self.edit_coord(prompt, "Enter the second portal coordinate", Cell::Regular, Cell::Portal)? else {
            self.board.set(&first, Cell::Regular)?;
            return Ok(Outcome::Cancelled);
        };
        let linked = Portal::new(first, second).and_then(|portal| self.portals.insert(portal));
        if let Err(err) = linked {
            self.board.set(&first, Cell::Regular)?;
            self.board.set(&second, Cell::Regular)?;
            return Err(err);
        }
        Ok(Outcome::Completed)
    }

    /// Asks for one of the current player's dots and turns it into a bishop.
    pub fn upgrade_piece(&mut self, prompt: &mut dyn Prompt) -> Result<Outcome> {
        let player = &self.players[self.current.index()];
        let pieces = player.pieces().values().copied().collect::<Vec<Piece>>();
        let options = pieces.iter().map(Piece::to_string).collect::<Vec<String>>();
        let Some(choice) = prompt.choose("Which dot would you like to upgrade?", &options)? else {
            return Ok(Outcome::Cancelled);
        };

        let piece = pieces[choice];
        if piece.upgraded {
            return Ok(Outcome::rejected("That dot is already a bishop."));
        }
        let upgraded = self.players[self.current.index()].upgrade(&piece.coord)?;
        self.board.set(&upgraded.coord, upgraded.cell)?;
        log::info!("player {} upgraded the dot at {}", self.current, upgraded.coord);
        Ok(Outcome::Completed)
    }

    /// Asks for a square showing `target` and replaces it with `replacement`. Squares showing anything
    /// else are refused and the question repeats.
    pub fn edit_coord(&mut self, prompt: &mut dyn Prompt, question: &str, target: Cell, replacement: Cell) -> Result<Option<Coord>> {
        loop {
            let Some(coord) = prompt.ask_coord(question, self.board.length(), self.board.width())? else {
                return Ok(None);
            };
            if self.board.get(&coord)? == target {
                self.board.set(&coord, replacement)?;
                return Ok(Some(coord));
            }
            prompt.say(&format!("Coordinate does not correspond to {target:?}"))?;
        }
    }

    fn spend_edit(&mut self, prompt: &mut dyn Prompt, edit: Edit) -> Result<Outcome> {
        let (counts, name, question, target, replacement) = match edit {
            Edit::Delete => (&self.deletes, "delete", "Which space would you like to delete?", Cell::Regular, Cell::Blank),
            Edit::Create => (&self.creates, "create", "Where would you like to create a space?", Cell::Blank, Cell::Regular),
        };
        if counts[self.current.index()] == 0 {
            return Ok(Outcome::rejected(format!("You ran out of {name}s.")));
        }
        let Some(coord) = self.edit_coord(prompt, question, target, replacement)? else {
            return Ok(Outcome::Cancelled);
        };

        let counts = match edit {
            Edit::Delete => &mut self.deletes,
            Edit::Create => &mut self.creates,
        };
        counts[self.current.index()] -= 1;
        log::info!("player {} used a {name} at {coord}, {} left", self.current, counts[self.current.index()]);
        Ok(Outcome::Completed)
    }
}
