//! Engine Configuration
//!
//! Tunables for puzzle assembly and scoring, loadable from TOML.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use clash_core::{Difficulty, ACCEPT_THRESHOLD};

use crate::hints::HintLevel;

/// Per-difficulty settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierSettings {
    /// Complexity factor in [0, 1]; places key material within the tier's
    /// ranges and sets the hint level
    pub complexity: f64,

    /// Score multiplier applied on acceptance
    pub score_multiplier: f64,
}

impl TierSettings {
    /// Built-in settings for a tier
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self {
            complexity: difficulty.complexity(),
            score_multiplier: difficulty.score_multiplier(),
        }
    }
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Minimum similarity for an answer to count as correct
    pub accept_threshold: f64,

    /// RNG seed (entropy when absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// JSON phrase bank (built-in phrases when absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phrase_bank_path: Option<PathBuf>,

    /// Log level
    pub log_level: String,

    /// Easy tier
    pub easy: TierSettings,

    /// Medium tier
    pub medium: TierSettings,

    /// Hard tier
    pub hard: TierSettings,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            accept_threshold: ACCEPT_THRESHOLD,
            seed: None,
            phrase_bank_path: None,
            log_level: "info".to_string(),
            easy: TierSettings::for_difficulty(Difficulty::Easy),
            medium: TierSettings::for_difficulty(Difficulty::Medium),
            hard: TierSettings::for_difficulty(Difficulty::Hard),
        }
    }
}

impl EngineConfig {
    /// Create a new configuration builder
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }

    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

        let config: Self =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))
    }

    /// Settings for one tier
    pub fn tier(&self, difficulty: Difficulty) -> &TierSettings {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    fn tier_mut(&mut self, difficulty: Difficulty) -> &mut TierSettings {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        }
    }

    pub fn score_multiplier(&self, difficulty: Difficulty) -> f64 {
        self.tier(difficulty).score_multiplier
    }

    /// Hint level implied by the tier's complexity
    pub fn hint_level(&self, difficulty: Difficulty) -> HintLevel {
        HintLevel::from_complexity(self.tier(difficulty).complexity)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.accept_threshold > 0.0 && self.accept_threshold <= 1.0) {
            return Err(ConfigError::InvalidValue(
                "accept_threshold must be in (0, 1]".into(),
            ));
        }

        for difficulty in Difficulty::ALL {
            let tier = self.tier(difficulty);
            if !(0.0..=1.0).contains(&tier.complexity) {
                return Err(ConfigError::InvalidValue(format!(
                    "{} complexity must be in [0, 1]",
                    difficulty
                )));
            }
            if !(tier.score_multiplier > 0.0) {
                return Err(ConfigError::InvalidValue(format!(
                    "{} score_multiplier must be positive",
                    difficulty
                )));
            }
        }

        if self.easy.score_multiplier > self.medium.score_multiplier
            || self.medium.score_multiplier > self.hard.score_multiplier
        {
            return Err(ConfigError::InvalidValue(
                "score multipliers must not decrease with difficulty".into(),
            ));
        }

        Ok(())
    }
}

/// Configuration builder
#[derive(Default)]
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    /// Set acceptance threshold
    pub fn accept_threshold(mut self, threshold: f64) -> Self {
        self.config.accept_threshold = threshold;
        self
    }

    /// Fix the RNG seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Set phrase bank path
    pub fn phrase_bank_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.phrase_bank_path = Some(path.into());
        self
    }

    /// Set log level
    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.config.log_level = level.into();
        self
    }

    /// Set a tier's complexity factor
    pub fn complexity(mut self, difficulty: Difficulty, complexity: f64) -> Self {
        self.config.tier_mut(difficulty).complexity = complexity;
        self
    }

    /// Set a tier's score multiplier
    pub fn score_multiplier(mut self, difficulty: Difficulty, multiplier: f64) -> Self {
        self.config.tier_mut(difficulty).score_multiplier = multiplier;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<EngineConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}
