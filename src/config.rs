//! Runtime tunables.
//!
//! * Looks for `invaders.toml` in the cwd unless `--config` names a file.
//! * Every field has a default, so the file is optional and may be partial.
//! * Command-line flags override whatever the file says.
//!
//! Only timing is tunable; the rules themselves live in `game::consts`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::game::consts::{DEFAULT_TICK_MS, DEFAULT_WAVE_PAUSE_MS};

pub const DEFAULT_CONFIG_FILE: &str = "invaders.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Delay between simulation ticks.
    pub tick_ms: u64,
    /// How long "Wave Cleared!" stays up before the next wave moves.
    pub wave_pause_ms: u64,
    /// Redraw interval of the terminal front-end.
    pub frame_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            wave_pause_ms: DEFAULT_WAVE_PAUSE_MS,
            frame_ms: 16,
        }
    }
}

impl Config {
    /// Load from `path`, or from `invaders.toml` if present. A missing
    /// default file is not an error; a missing explicit one is.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if !explicit && e.kind() == io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(source) => return Err(Error::ConfigRead { path, source }),
        };
        let config = Self::from_toml(&text).map_err(|source| Error::ConfigParse { path, source })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick_ms == 0 {
            return Err(Error::InvalidConfig("tick_ms must be at least 1".into()));
        }
        if self.frame_ms == 0 {
            return Err(Error::InvalidConfig("frame_ms must be at least 1".into()));
        }
        Ok(())
    }

    pub fn tick_delay(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// The wave pause expressed in whole ticks, rounded up.
    pub fn wave_pause_ticks(&self) -> u32 {
        let tick = self.tick_ms.max(1);
        self.wave_pause_ms.div_ceil(tick).min(u32::MAX as u64) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_timing() {
        let c = Config::default();
        assert_eq!(c.tick_ms, 20);
        assert_eq!(c.wave_pause_ms, 1200);
        assert_eq!(c.wave_pause_ticks(), 60);
        assert_eq!(c.tick_delay(), Duration::from_millis(20));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let c = Config::from_toml("tick_ms = 50\n").unwrap();
        assert_eq!(c.tick_ms, 50);
        assert_eq!(c.wave_pause_ms, DEFAULT_WAVE_PAUSE_MS);
        assert_eq!(c.wave_pause_ticks(), 24);
    }

    #[test]
    fn pause_rounds_up_to_whole_ticks() {
        let c = Config { tick_ms: 7, wave_pause_ms: 20, frame_ms: 16 };
        assert_eq!(c.wave_pause_ticks(), 3);
        let none = Config { wave_pause_ms: 0, ..Config::default() };
        assert_eq!(none.wave_pause_ticks(), 0);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::from_toml("tick_rate = 3").is_err());
    }

    #[test]
    fn zero_tick_is_invalid() {
        let c = Config { tick_ms: 0, ..Config::default() };
        assert!(matches!(c.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = Config::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, Error::ConfigRead { .. }));
    }
}
