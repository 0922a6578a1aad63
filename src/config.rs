//! Application configuration
//!
//! Read from a YAML file; every field is optional:
//!
//! ```yaml
//! dataset: data/movies.json
//! relation: director-cast
//! threshold: 3
//! namespacing: prefixed-by-role
//! render:
//!   font_size: 14
//! ```

use crate::aggregate::{AggregatorConfig, Namespacing, Relation};
use crate::render::RenderOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("No dataset given on the command line or in the config file")]
    MissingDataset,
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Movie dataset (JSON)
    pub dataset: Option<PathBuf>,
    pub relation: Relation,
    /// Overrides the relation's default threshold
    pub threshold: Option<u32>,
    pub namespacing: Namespacing,
    /// Overrides the relation's default weight accumulation
    pub accumulate_weight: Option<bool>,
    pub render: RenderOptions,
}

impl AppConfig {
    pub fn from_yaml_str(text: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        debug!("Loading config from {:?}", path);
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Relation preset with this file's overrides applied
    pub fn aggregator_config(&self) -> AggregatorConfig {
        let mut config =
            AggregatorConfig::for_relation(self.relation).with_namespacing(self.namespacing);
        if let Some(threshold) = self.threshold {
            config = config.with_threshold(threshold);
        }
        if let Some(weights) = self.accumulate_weight {
            config = config.with_weights(weights);
        }
        config
    }

    pub fn dataset(&self) -> ConfigResult<&Path> {
        self.dataset.as_deref().ok_or(ConfigError::MissingDataset)
    }
}
