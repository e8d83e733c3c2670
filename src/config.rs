// File: src/config.rs
//! Runtime configuration.
//!
//! ```toml
//! log_level = "info"
//!
//! [assets]
//! words = "data/words.json"
//! forms = "data/forms.json"
//! matrix = "data/matrix.bin"
//! snapshot = "data/lexicon.bin"
//!
//! [scoring]
//! word_count = 7
//! calibration = { strategy = "power_law", a = 47.4548, p = 3.382, b = 48.5157 }
//!
//! [session]
//! slots = 10
//! time_limit_secs = 180
//! ```
//!
//! Every section falls back to its defaults when absent, but values that
//! are present are validated and never silently corrected.

use crate::core::types::SCORE_WORD_COUNT;
use crate::error::{DatError, Result};
use crate::scoring::{Calibration, Scorer};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatConfig {
    pub assets: AssetConfig,
    pub scoring: ScoringConfig,
    pub session: SessionConfig,
    /// `tracing` level for the session binary.
    pub log_level: String,
}

impl Default for DatConfig {
    fn default() -> Self {
        Self {
            assets: AssetConfig::default(),
            scoring: ScoringConfig::default(),
            session: SessionConfig::default(),
            log_level: "warn".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub words: PathBuf,
    pub forms: PathBuf,
    pub matrix: PathBuf,
    /// Bincode cache of the lexicon; written after the first JSON load.
    pub snapshot: Option<PathBuf>,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            words: PathBuf::from("data/words.json"),
            forms: PathBuf::from("data/forms.json"),
            matrix: PathBuf::from("data/matrix.bin"),
            snapshot: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub word_count: usize,
    pub calibration: Calibration,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self { word_count: SCORE_WORD_COUNT, calibration: Calibration::default() }
    }
}

impl ScoringConfig {
    pub fn scorer(&self) -> Result<Scorer> {
        Scorer::new(self.calibration, self.word_count)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub slots: usize,
    pub time_limit_secs: u64,
    pub warning_secs: u64,
    pub danger_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { slots: 10, time_limit_secs: 180, warning_secs: 60, danger_secs: 30 }
    }
}

impl DatConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| DatError::Config {
            message: format!("Failed to read config file '{}': {}", path.display(), e),
        })?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// The parsed `log_level`; accepts `trace`, `debug`, `info`, `warn`, `error`.
    pub fn log_level(&self) -> Result<Level> {
        self.log_level.parse().map_err(|_| DatError::Config {
            message: format!(
                "log_level must be one of trace, debug, info, warn, error; got '{}'",
                self.log_level
            ),
        })
    }

    pub fn validate(&self) -> Result<()> {
        let fail = |message: String| Err(DatError::Config { message });

        self.log_level()?;

        if self.scoring.word_count < 2 {
            return fail(format!(
                "[scoring] word_count must be at least 2, got {}",
                self.scoring.word_count
            ));
        }
        if let Err(message) = self.scoring.calibration.validate() {
            return fail(format!("[scoring] {}", message));
        }
        if self.session.slots < self.scoring.word_count {
            return fail(format!(
                "[session] slots ({}) cannot be fewer than scoring.word_count ({})",
                self.session.slots, self.scoring.word_count
            ));
        }
        let s = &self.session;
        if !(s.danger_secs <= s.warning_secs && s.warning_secs <= s.time_limit_secs) {
            return fail(format!(
                "[session] expected danger_secs <= warning_secs <= time_limit_secs, got {} / {} / {}",
                s.danger_secs, s.warning_secs, s.time_limit_secs
            ));
        }
        Ok(())
    }
}
