use std::path::PathBuf;

use clap::Parser;

use crate::prelude::*;

/// Settings file picked up from the working directory when none is named.
pub const DEFAULT_SETTINGS_PATH: &str = "dots.toml";

#[derive(Clone, Debug, Default, Parser)]
#[command(name = "dots", about = "A two-player game of dots, portals and powerups on a grid.")]
pub struct DotsOptions {
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// TOML file to read settings from.
    #[arg(short, long)]
    pub settings: Option<PathBuf>,

    /// Seed for board generation and powerup placement.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where finished games are recorded.
    #[arg(long)]
    pub scores: Option<PathBuf>,
}

impl DotsOptions {
    /// Resolves the settings to start with: the named file, else `dots.toml` if present, else the
    /// defaults. Flags override whatever the file says.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.settings {
            Some(path) => Settings::load(path)?,
            None => {
                let fallback = PathBuf::from(DEFAULT_SETTINGS_PATH);
                match fallback.exists() {
                    true => Settings::load(&fallback)?,
                    _    => Settings::default(),
                }
            },
        };

        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
        if let Some(scores) = &self.scores {
            settings.scores_path = scores.clone();
        }
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_the_file() {
        let path = std::env::temp_dir().join(format!("dots-{}-settings.toml", std::process::id()));
        std::fs::write(&path, "width = 7\nseed = 1\n").unwrap();

        let options = DotsOptions::parse_from(["dots", "--settings", path.to_str().unwrap(), "--seed", "9", "--scores", "s.csv"]);
        let settings = options.settings().unwrap();
        assert_eq!(settings.width, 7);
        assert_eq!(settings.seed, Some(9));
        assert_eq!(settings.scores_path, PathBuf::from("s.csv"));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn a_named_file_must_exist() {
        let options = DotsOptions { settings: Some("/nonexistent/dots.toml".into()), ..DotsOptions::default() };
        assert!(options.settings().is_err());
    }
}
