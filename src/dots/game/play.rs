use itertools::Itertools;

use crate::{console::Prompt, dots::prelude::*};

/// How a finished game went.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameSummary {
    pub winner: PlayerId,
    /// The turn the game ended on.
    pub turns: u32,
    pub conceded: bool,
}

const TURN_MENU: &str = "What would you like to do?\n1) Move\n2) Delete a space\n3) Create a space\n4) Use a Powerup\n5) Concede";

impl Game {
    /// Plays turns until one player wins.
    pub fn play(&mut self, prompt: &mut dyn Prompt) -> Result<GameSummary> {
        loop {
            if let Some(summary) = self.play_turn(prompt)? {
                return Ok(summary);
            }
        }
    }

    /// Plays one turn of the current player, returning a summary if the game ended during it.
    ///
    /// A powerup spawns first on every turn that is a multiple of the placement frequency. Cancelled
    /// and refused actions ask again without using up the turn.
    pub fn play_turn(&mut self, prompt: &mut dyn Prompt) -> Result<Option<GameSummary>> {
        if self.turn_number % self.settings.powerup_frequency.max(1) == 0 {
            self.board.place_powerup_on_source(&mut self.rng);
        }

        loop {
            prompt.say(&self.board.render())?;
            prompt.say(&self.status())?;

            let result = match prompt.ask_int(TURN_MENU, 1, 5)? {
                1 => self.take_move(prompt, false),
                2 => self.delete_space(prompt),
                3 => self.create_space(prompt),
                4 => self.use_powerup(prompt),
                _ => {
                    if !prompt.ask_confirm("Are you sure you want to concede?")? {
                        continue;
                    }
                    prompt.say(&format!("Player {} has conceded.", self.current))?;
                    return self.finish(prompt, true).map(Some);
                },
            };

            match result {
                Ok(Outcome::Completed)        => break,
                Ok(Outcome::Cancelled)        => continue,
                Ok(Outcome::Rejected(reason)) => prompt.say(&reason)?,
                Err(err) => match err.downcast_ref::<Defect>() {
                    Some(defect) => {
                        log::error!("aborted an action of player {}: {defect}", self.current);
                        prompt.say("Something went wrong and the action was aborted.")?;
                    },
                    None => return Err(err),
                },
            }
        }

        if self.check_defeat() {
            prompt.say(&self.board.render())?;
            return self.finish(prompt, false).map(Some);
        }
        self.advance();
        Ok(None)
    }

    /// The line shown above the turn menu.
    fn status(&self) -> String {
        let player = &self.players[self.current.index()];
        let held = match player.powerups() {
            []       => "none".to_owned(),
            powerups => powerups.iter().join(", "),
        };
        format!(
            "Player {}'s turn\t\t\tTurn: {}\nPowerups: {held}\tDeletes left: {}\tCreates left: {}",
            self.current, self.turn_number, self.deletes_left(self.current), self.creates_left(self.current)
        )
    }

    /// Announces the winner. A concession hands the game to the opponent.
    fn finish(&self, prompt: &mut dyn Prompt, conceded: bool) -> Result<GameSummary> {
        let winner = if conceded { self.target() } else { self.current };
        prompt.say(&format!("Player {winner} has won in {} turns!", self.turn_number))?;
        log::info!("player {winner} won on turn {}{}", self.turn_number, if conceded { " by concession" } else { "" });
        Ok(GameSummary { winner, turns: self.turn_number, conceded })
    }
}
