// Pipeline configuration: the rule tables and thresholds that deployments
// may override. Defaults reproduce the historical catalog behavior.
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::classifier::{FuelRules, PortabilityThresholds, ProductRules};
use crate::efficiency::EfficiencyConfig;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub fuel: FuelRules,
    pub product: ProductRules,
    pub portability: PortabilityThresholds,
    pub efficiency: EfficiencyConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl PipelineConfig {
    /// Parses a JSON override document. Absent sections keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Loads a configuration override file.
pub fn load_config(path: impl AsRef<Path>) -> Result<PipelineConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    PipelineConfig::from_json(&content)
}
