use std::{ops::RangeInclusive, path::{Path, PathBuf}};

use serde::Deserialize;

use crate::dots::prelude::*;

/// Everything that shapes a game before the first turn.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub map: MapChoice,
    pub length: usize,
    pub width: usize,
    pub num_dots: usize,
    /// Powerup sources scattered at generation time.
    pub num_initial_powerups: usize,
    /// A powerup spawns on a source every this many turns.
    pub powerup_frequency: u32,
    pub num_initial_crumblies: usize,
    /// One barrier per `barrier_density` x `barrier_density` area of the board.
    pub barrier_density: usize,
    pub num_deletes: u32,
    pub num_creates: u32,
    pub seed: Option<u64>,
    pub scores_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            map: MapChoice::Generated,
            length: 5,
            width: 5,
            num_dots: 3,
            num_initial_powerups: 3,
            powerup_frequency: 3,
            num_initial_crumblies: 3,
            barrier_density: 4,
            num_deletes: 3,
            num_creates: 3,
            seed: None,
            scores_path: PathBuf::from("scores.csv"),
        }
    }
}

/// A numeric setting the editor can change, with the values it accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Length,
    Width,
    NumDots,
    NumInitialPowerups,
    PowerupFrequency,
    NumInitialCrumblies,
    BarrierDensity,
    NumDeletes,
    NumCreates,
}

impl Field {
    pub fn all() -> [Field; 9] {
        [
            Field::Length, Field::Width, Field::NumDots, Field::NumInitialPowerups, Field::PowerupFrequency,
            Field::NumInitialCrumblies, Field::BarrierDensity, Field::NumDeletes, Field::NumCreates,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Field::Length              => "Length",
            Field::Width               => "Width",
            Field::NumDots             => "Number of Dots",
            Field::NumInitialPowerups  => "Number of Initial Powerups",
            Field::PowerupFrequency    => "Powerup Placement Frequency",
            Field::NumInitialCrumblies => "Number of Initial Crumblies",
            Field::BarrierDensity      => "Barrier Density",
            Field::NumDeletes          => "Number of Deletes",
            Field::NumCreates          => "Number of Creates",
        }
    }

    pub fn range(&self) -> RangeInclusive<i64> {
        match self {
            Field::Length | Field::Width => 5..=15,
            Field::NumDots               => 1..=10,
            Field::PowerupFrequency      => 1..=10,
            Field::BarrierDensity        => 2..=10,
            _                            => 0..=10,
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file; missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Settings> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        let settings: Settings = toml::from_str(&content)
            .with_context(|| format!("failed to parse settings in {}", path.display()))?;
        settings.validate()?;
        log::info!("loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Checks every numeric field against the range the editor allows.
    pub fn validate(&self) -> Result<()> {
        for field in Field::all() {
            let value = self.get(field);
            if !field.range().contains(&value) {
                return Err(anyhow!("{} must be within {:?}, found {value}", field.name(), field.range()));
            }
        }
        Ok(())
    }

    pub fn get(&self, field: Field) -> i64 {
        match field {
            Field::Length              => self.length as i64,
            Field::Width               => self.width as i64,
            Field::NumDots             => self.num_dots as i64,
            Field::NumInitialPowerups  => self.num_initial_powerups as i64,
            Field::PowerupFrequency    => self.powerup_frequency as i64,
            Field::NumInitialCrumblies => self.num_initial_crumblies as i64,
            Field::BarrierDensity      => self.barrier_density as i64,
            Field::NumDeletes          => self.num_deletes as i64,
            Field::NumCreates          => self.num_creates as i64,
        }
    }

    /// Sets a field; values outside the field's range are refused.
    pub fn set(&mut self, field: Field, value: i64) -> Result<()> {
        if !field.range().contains(&value) {
            return Err(anyhow!("{} must be within {:?}, received {value}", field.name(), field.range()));
        }
        match field {
            Field::Length              => self.length = value as usize,
            Field::Width               => self.width = value as usize,
            Field::NumDots             => self.num_dots = value as usize,
            Field::NumInitialPowerups  => self.num_initial_powerups = value as usize,
            Field::PowerupFrequency    => self.powerup_frequency = value as u32,
            Field::NumInitialCrumblies => self.num_initial_crumblies = value as usize,
            Field::BarrierDensity      => self.barrier_density = value as usize,
            Field::NumDeletes          => self.num_deletes = value as u32,
            Field::NumCreates          => self.num_creates = value as u32,
        };
        Ok(())
    }
}
