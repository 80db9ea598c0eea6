use std::io::{BufRead, Cursor, StdinLock, Stdout, Write};

use crate::prelude::*;

/// A prompt over a pair of line streams: the terminal, a pipe, or a script in tests.
pub struct TextConsole<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl TextConsole<StdinLock<'static>, Stdout> {
    /// A console on the process' standard streams.
    pub fn stdio() -> Self {
        TextConsole::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl TextConsole<Cursor<String>, Vec<u8>> {
    /// A console that answers from a script of lines and records everything it shows.
    pub fn scripted(script: &str) -> Self {
        TextConsole::new(Cursor::new(script.to_owned()), vec![])
    }

    /// Everything shown so far.
    pub fn transcript(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }
}

impl<R: BufRead, W: Write> TextConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        TextConsole { input, output }
    }

    /// Reads one trimmed line; running out of input is an error.
    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line).context("failed to read input")? == 0 {
            return Err(anyhow!("input closed while waiting for an answer"));
        }
        log::trace!("read {:?}", line.trim());
        Ok(line.trim().to_owned())
    }
}

impl<R: BufRead, W: Write> Prompt for TextConsole<R, W> {
    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    fn ask_int(&mut self, prompt: &str, min: i64, max: i64) -> Result<i64> {
        loop {
            self.say(prompt)?;
            match self.read_line()?.parse::<i64>() {
                Ok(value) if (min..=max).contains(&value) => return Ok(value),
                _ => self.say(&format!("Invalid input. Please enter an integer from {min} to {max}."))?,
            }
        }
    }

    fn ask_confirm(&mut self, prompt: &str) -> Result<bool> {
        loop {
            self.say(&format!("{prompt} (y/n):"))?;
            match self.read_line()?.to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no"  => return Ok(false),
                ""          => self.say("Input cannot be empty. Please enter y or n.")?,
                _           => self.say("Invalid input. Please enter y or n.")?,
            }
        }
    }

    fn ask_string(&mut self, prompt: &str, rules: &TextRules) -> Result<Option<String>> {
        loop {
            self.say(prompt)?;
            let line = self.read_line()?;
            if line.is_empty() {
                self.say("Input cannot be empty. Please enter a string.")?;
                continue;
            }
            if rules.cancel.as_deref().is_some_and(|token| token.eq_ignore_ascii_case(&line)) {
                return Ok(None);
            }
            match rules.violation(&line) {
                Some(reason) => self.say(&reason)?,
                None         => return Ok(Some(line)),
            }
        }
    }

    fn ask_coord(&mut self, prompt: &str, length: usize, width: usize) -> Result<Option<Coord>> {
        loop {
            self.say(&format!("{prompt}. Enter coordinate (e.g. 1A, '{CANCEL_TOKEN}' to cancel)"))?;
            let line = self.read_line()?;
            if line.eq_ignore_ascii_case(CANCEL_TOKEN) {
                return Ok(None);
            }
            match line.parse::<Coord>() {
                Ok(coord) if coord.row < length && coord.col < width => return Ok(Some(coord)),
                Ok(_)   => self.say("Coordinate is out of bounds")?,
                Err(_)  => self.say("Invalid coordinate format")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_are_asked_for_until_in_range() {
        let mut console = TextConsole::scripted("seven\n9\n 3 \n");
        assert_eq!(console.ask_int("Pick", 1, 5).unwrap(), 3);
        let transcript = console.transcript();
        assert_eq!(transcript.matches("Pick").count(), 3);
        assert_eq!(transcript.matches("Invalid input").count(), 2);
    }

    #[test]
    fn confirmation_is_case_insensitive() {
        let mut console = TextConsole::scripted("maybe\nY\n\nno\n");
        assert!(console.ask_confirm("Sure?").unwrap());
        assert!(!console.ask_confirm("Sure?").unwrap());
        assert!(console.transcript().contains("Sure? (y/n):"));
    }

    #[test]
    fn strings_follow_the_rules() {
        let rules = TextRules::new(1, 5).with_cancel("c").with_forbidden([',']);
        let mut console = TextConsole::scripted("much too long\na,b\nab\nC\n");
        assert_eq!(console.ask_string("Name", &rules).unwrap(), Some("ab".to_owned()));
        assert_eq!(console.ask_string("Name", &rules).unwrap(), None);

        let keys = TextRules::new(1, 1).with_allowed(['W', 'S']);
        let mut console = TextConsole::scripted("x\nS\n");
        assert_eq!(console.ask_string("Key", &keys).unwrap(), Some("S".to_owned()));
    }

    #[test]
    fn coordinates_are_bounded_and_cancellable() {
        let mut console = TextConsole::scripted("A1\n6a\n5e\nc\n");
        assert_eq!(console.ask_coord("Where", 5, 5).unwrap(), Some(Coord::new(4, 4)));
        assert_eq!(console.ask_coord("Where", 5, 5).unwrap(), None);
        let transcript = console.transcript();
        assert!(transcript.contains("Invalid coordinate format"));
        assert!(transcript.contains("Coordinate is out of bounds"));
    }

    #[test]
    fn running_out_of_input_is_an_error() {
        let mut console = TextConsole::scripted("nope\n");
        assert!(console.ask_int("Pick", 1, 2).is_err());
    }

    #[test]
    fn choices_end_with_cancel() {
        let mut console = TextConsole::scripted("2\n3\n");
        let options = vec!["Hop".to_owned(), "Portal".to_owned()];
        assert_eq!(console.choose("Which?", &options).unwrap(), Some(1));
        assert_eq!(console.choose("Which?", &options).unwrap(), None);
        assert!(console.transcript().contains("Which?\n1) Hop\n2) Portal\n3) Cancel"));
    }
}
