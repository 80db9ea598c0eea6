/*
 *  Prompting players for input and showing them the game.
 */

mod text;

use std::collections::HashSet;

pub use text::TextConsole;

use crate::prelude::*;

/// Constraints on a line of free text.
#[derive(Clone, Debug)]
pub struct TextRules {
    pub min_len: usize,
    pub max_len: usize,
    /// Typing exactly this token cancels the prompt.
    pub cancel: Option<String>,
    /// If present, only these characters may appear.
    pub allowed: Option<HashSet<char>>,
    pub forbidden: HashSet<char>,
}

impl TextRules {
    /// Any text between `min_len` and `max_len` characters long.
    pub fn new(min_len: usize, max_len: usize) -> TextRules {
        TextRules { min_len, max_len, cancel: None, allowed: None, forbidden: HashSet::new() }
    }

    pub fn with_cancel(mut self, token: &str) -> TextRules {
        self.cancel = Some(token.to_owned());
        self
    }

    pub fn with_allowed(mut self, allowed: impl IntoIterator<Item = char>) -> TextRules {
        self.allowed = Some(allowed.into_iter().collect());
        self
    }

    pub fn with_forbidden(mut self, forbidden: impl IntoIterator<Item = char>) -> TextRules {
        self.forbidden = forbidden.into_iter().collect();
        self
    }

    /// Explains why the text breaks the rules, or `None` if it does not.
    pub fn violation(&self, text: &str) -> Option<String> {
        let len = text.chars().count();
        if len < self.min_len || len > self.max_len {
            return Some(format!("Input must be between {} and {} characters.", self.min_len, self.max_len));
        }
        let disallowed = |ch: &char| {
            self.forbidden.contains(ch) || self.allowed.as_ref().is_some_and(|allowed| !allowed.contains(ch))
        };
        if text.chars().any(|ch| disallowed(&ch)) {
            return Some("Input contains forbidden characters.".to_owned());
        }
        None
    }
}

/// Asks a player for validated input. Every `ask_*` keeps asking until it receives a valid answer;
/// `None` means the player cancelled. Errors mean the input itself is gone.
pub trait Prompt {
    /// Shows a line of text.
    fn say(&mut self, text: &str) -> Result<()>;

    /// Asks for an integer within `min..=max`.
    fn ask_int(&mut self, prompt: &str, min: i64, max: i64) -> Result<i64>;

    /// Asks a yes or no question.
    fn ask_confirm(&mut self, prompt: &str) -> Result<bool>;

    /// Asks for a line of text obeying the rules.
    fn ask_string(&mut self, prompt: &str, rules: &TextRules) -> Result<Option<String>>;

    /// Asks for a coordinate on a `length` x `width` board.
    fn ask_coord(&mut self, prompt: &str, length: usize, width: usize) -> Result<Option<Coord>>;

    /// Asks the player to pick one of a numbered list of options, with a trailing cancel entry.
    fn choose(&mut self, prompt: &str, options: &[String]) -> Result<Option<usize>> {
        let cancel = options.len() + 1;
        let menu = options.iter().enumerate()
            .map(|(i, option)| format!("\n{}) {option}", i + 1))
            .collect::<String>();
        let choice = self.ask_int(&format!("{prompt}{menu}\n{cancel}) Cancel"), 1, cancel as i64)? as usize;
        Ok((choice != cancel).then(|| choice - 1))
    }
}
