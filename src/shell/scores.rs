use std::{fs::OpenOptions, io::Write, path::PathBuf};

use itertools::Itertools;

use crate::prelude::*;

/// One finished game in the score table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Score {
    pub name: String,
    pub length: usize,
    pub width: usize,
    pub num_dots: usize,
    pub turns: u32,
}

impl Score {
    /// Characters a score name may not contain.
    pub const FORBIDDEN: [char; 3] = [',', '\n', '\r'];

    /// Rules for the name a score is saved under.
    pub fn name_rules() -> TextRules {
        TextRules::new(1, 20).with_cancel(CANCEL_TOKEN).with_forbidden(Score::FORBIDDEN)
    }

    fn to_row(&self) -> String {
        format!("{},{},{},{},{}", self.name, self.length, self.width, self.num_dots, self.turns)
    }
}

impl std::str::FromStr for Score {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let Some((name, length, width, num_dots, turns)) = s.split(',').collect_tuple() else {
            return Err(anyhow!("expected 5 comma-separated fields in score row {s:?}"));
        };
        Ok(Score {
            name: name.to_owned(),
            length: length.trim().parse()?,
            width: width.trim().parse()?,
            num_dots: num_dots.trim().parse()?,
            turns: turns.trim().parse()?,
        })
    }
}

/// The append-only table of finished games.
#[derive(Clone, Debug)]
pub struct ScoreBook {
    path: PathBuf,
}

impl ScoreBook {
    pub fn new(path: impl Into<PathBuf>) -> ScoreBook {
        ScoreBook { path: path.into() }
    }

    /// Reads every saved score; a missing table holds none.
    pub fn read(&self) -> Result<Vec<Score>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no score table at {}", self.path.display());
                return Ok(vec![]);
            },
            Err(err) => return Err(err).with_context(|| format!("failed to read scores from {}", self.path.display())),
        };
        content.lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::parse::<Score>)
            .collect()
    }

    /// Appends one score, creating the table if needed.
    pub fn append(&self, score: &Score) -> Result<()> {
        if score.name.is_empty() || score.name.contains(Score::FORBIDDEN) {
            return Err(anyhow!("score name {:?} cannot be stored", score.name));
        }
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)
            .with_context(|| format!("failed to open {}", self.path.display()))?;
        writeln!(file, "{}", score.to_row())?;
        log::info!("saved a {}-turn score for {}", score.turns, score.name);
        Ok(())
    }

    /// Lays the scores out as a table.
    pub fn tabulate(scores: &[Score]) -> String {
        let header = ["Name", "Length", "Width", "Dots", "Turns"].map(String::from);
        let rows = scores.iter().map(|s| {
            [s.name.clone(), s.length.to_string(), s.width.to_string(), s.num_dots.to_string(), s.turns.to_string()]
        });
        let table = std::iter::once(header).chain(rows).collect::<Vec<[String; 5]>>();

        let widths: [usize; 5] = std::array::from_fn(|i| {
            table.iter().map(|row| row[i].chars().count()).max().unwrap_or(0)
        });
        table.iter()
            .map(|row| row.iter().zip(widths).map(|(cell, w)| format!("{cell:<w$}")).join(" | ").trim_end().to_owned())
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("dots-{}-{name}.csv", std::process::id()));
        let _ = std::fs::remove_file(&path);
        path
    }

    fn score(name: &str, turns: u32) -> Score {
        Score { name: name.to_owned(), length: 5, width: 6, num_dots: 3, turns }
    }

    #[test]
    fn missing_tables_are_empty() {
        let book = ScoreBook::new(scratch("missing"));
        assert!(book.read().unwrap().is_empty());
    }

    #[test]
    fn scores_are_appended_in_order() {
        let path = scratch("append");
        let book = ScoreBook::new(&path);
        book.append(&score("Ada & Bo", 12)).unwrap();
        book.append(&score("Cy", 4)).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Ada & Bo,5,6,3,12\nCy,5,6,3,4\n");
        assert_eq!(book.read().unwrap(), vec![score("Ada & Bo", 12), score("Cy", 4)]);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn names_with_delimiters_are_refused() {
        let book = ScoreBook::new(scratch("refused"));
        assert!(book.append(&score("a,b", 1)).is_err());
        assert!(book.read().unwrap().is_empty());
        assert!(Score::name_rules().violation("a,b").is_some());
        assert!(Score::name_rules().violation(&"n".repeat(21)).is_some());
    }

    #[test]
    fn tables_line_up() {
        let table = ScoreBook::tabulate(&[score("Cy", 4)]);
        assert_eq!(table, "Name | Length | Width | Dots | Turns\nCy   | 5      | 6     | 3    | 4");
    }
}
