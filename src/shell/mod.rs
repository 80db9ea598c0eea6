/*
 *  The menus around a game: playing, editing settings and reading the score table.
 */

mod editor;
mod options;
mod scores;

use rand::{rngs::StdRng, SeedableRng};

pub use options::{DotsOptions, DEFAULT_SETTINGS_PATH};
pub use scores::{Score, ScoreBook};

use crate::prelude::*;

const MAIN_MENU: &str = "What would you like to do?\n1) Play\n2) Edit settings\n3) View scores\n4) Exit";

pub struct Shell {
    settings: Settings,
    scores: ScoreBook,
}

impl Shell {
    pub fn new(settings: Settings) -> Shell {
        let scores = ScoreBook::new(settings.scores_path.clone());
        Shell { settings, scores }
    }

    /// Runs the main menu until the player exits.
    pub fn run(&mut self, prompt: &mut dyn Prompt) -> Result<()> {
        loop {
            match prompt.ask_int(MAIN_MENU, 1, 4)? {
                1 => {
                    self.play(prompt)?;
                },
                2 => self.settings.edit(prompt)?,
                3 => self.show_scores(prompt)?,
                _ => return Ok(()),
            }
        }
    }

    /// Plays one game with the current settings and offers to record it.
    pub fn play(&mut self, prompt: &mut dyn Prompt) -> Result<GameSummary> {
        let mut game = Game::new(self.settings.clone(), game_rng(&self.settings))?;
        let summary = game.play(prompt)?;
        self.offer_save(prompt, &game, &summary)?;
        Ok(summary)
    }

    fn offer_save(&self, prompt: &mut dyn Prompt, game: &Game, summary: &GameSummary) -> Result<()> {
        if !prompt.ask_confirm("Would you like to save the score?")? {
            return Ok(());
        }
        let question = format!("Enter your names ('{CANCEL_TOKEN}' to cancel):");
        let Some(name) = prompt.ask_string(&question, &Score::name_rules())? else {
            return Ok(());
        };
        let score = Score {
            name,
            length: game.board().length(),
            width: game.board().width(),
            num_dots: game.starting_dots(),
            turns: summary.turns,
        };
        self.scores.append(&score)
    }

    fn show_scores(&self, prompt: &mut dyn Prompt) -> Result<()> {
        let scores = self.scores.read()?;
        match scores.is_empty() {
            true => prompt.say("No scores have been saved yet."),
            _    => prompt.say(&ScoreBook::tabulate(&scores)),
        }
    }
}

/// The random source for one game: seeded when the settings carry a seed, otherwise from the OS.
pub fn game_rng(settings: &Settings) -> StdRng {
    match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_os_rng(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_games_repeat() {
        let settings = Settings { seed: Some(11), length: 9, width: 9, ..Settings::default() };
        let a = Game::new(settings.clone(), game_rng(&settings)).unwrap();
        let b = Game::new(settings.clone(), game_rng(&settings)).unwrap();
        assert_eq!(a.board().grid(), b.board().grid());
    }

    #[test]
    fn scores_are_shown_from_the_menu() {
        let path = std::env::temp_dir().join(format!("dots-{}-menu.csv", std::process::id()));
        std::fs::write(&path, "Ada,5,5,3,8\n").unwrap();
        let mut shell = Shell::new(Settings { scores_path: path.clone(), ..Settings::default() });

        let mut console = TextConsole::scripted("3\n4\n");
        shell.run(&mut console).unwrap();
        assert!(console.transcript().contains("Ada  | 5      | 5     | 3    | 8"));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn a_conceded_breakout_game_can_be_saved() {
        let path = std::env::temp_dir().join(format!("dots-{}-breakout.csv", std::process::id()));
        let _ = std::fs::remove_file(&path);
        let settings = Settings { map: MapChoice::Breakout, seed: Some(1), scores_path: path.clone(), ..Settings::default() };
        let mut shell = Shell::new(settings);

        let mut console = TextConsole::scripted("5\ny\ny\nWe Two\n");
        let summary = shell.play(&mut console).unwrap();
        assert_eq!(summary.winner, PlayerId::Two);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "We Two,7,9,5,1\n");
        std::fs::remove_file(&path).unwrap();
    }
}
