use std::path::Path;

use serde::Deserialize;

use crate::error::SyllableError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PipelineConfig {
    /// Hyphenation dictionary tag. Only `en-us` is embedded.
    #[serde(default = "default_language")]
    pub hyphenation_language: String,
    /// Tier timestamps are rounded to this many decimals on read.
    #[serde(default = "default_time_decimals")]
    pub time_decimals: u32,
    #[serde(default)]
    pub melody: MelodyConfig,
}

impl PipelineConfig {
    pub const DEFAULT_LANGUAGE: &'static str = "en-us";
    pub const DEFAULT_TIME_DECIMALS: u32 = 3;

    pub fn load(path: &Path) -> Result<Self, SyllableError> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| SyllableError::io("read pipeline config", e))?;
        let config: Self = serde_json::from_str(&data)
            .map_err(|e| SyllableError::json("parse pipeline config", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SyllableError> {
        self.melody.validate()
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            hyphenation_language: default_language(),
            time_decimals: Self::DEFAULT_TIME_DECIMALS,
            melody: MelodyConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct MelodyConfig {
    /// Frames below this confidence quantile of their window are discarded.
    #[serde(default = "default_confidence_quantile")]
    pub confidence_quantile: f64,
    /// Tuning reference for A4.
    #[serde(default = "default_reference_hz")]
    pub reference_hz: f64,
}

impl MelodyConfig {
    pub const DEFAULT_CONFIDENCE_QUANTILE: f64 = 0.99;
    pub const DEFAULT_REFERENCE_HZ: f64 = 440.0;

    pub fn validate(&self) -> Result<(), SyllableError> {
        if !(0.0..=1.0).contains(&self.confidence_quantile) {
            return Err(SyllableError::invalid_input(format!(
                "confidence_quantile must be in [0, 1], got {}",
                self.confidence_quantile
            )));
        }
        if !self.reference_hz.is_finite() || self.reference_hz <= 0.0 {
            return Err(SyllableError::invalid_input(format!(
                "reference_hz must be positive, got {}",
                self.reference_hz
            )));
        }
        Ok(())
    }
}

impl Default for MelodyConfig {
    fn default() -> Self {
        Self {
            confidence_quantile: Self::DEFAULT_CONFIDENCE_QUANTILE,
            reference_hz: Self::DEFAULT_REFERENCE_HZ,
        }
    }
}

fn default_language() -> String {
    PipelineConfig::DEFAULT_LANGUAGE.to_string()
}
fn default_time_decimals() -> u32 {
    PipelineConfig::DEFAULT_TIME_DECIMALS
}
fn default_confidence_quantile() -> f64 {
    MelodyConfig::DEFAULT_CONFIDENCE_QUANTILE
}
fn default_reference_hz() -> f64 {
    MelodyConfig::DEFAULT_REFERENCE_HZ
}
