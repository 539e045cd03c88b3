pub mod toml_config;

#[cfg(feature = "cli")]
pub mod cli;

pub use toml_config::{ModelConfig, ModelMeta};

use crate::core::ConfigProvider;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// In-memory provider for embedding the model without a config file.
#[derive(Debug, Clone, Default)]
pub struct StaticConfig {
    data_dir: PathBuf,
    config: HashMap<String, serde_json::Value>,
    secrets: HashMap<String, String>,
}

impl StaticConfig {
    pub fn new<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.into(),
            config: HashMap::new(),
            secrets: HashMap::new(),
        }
    }

    pub fn with_config_entry<K: Into<String>>(mut self, key: K, value: serde_json::Value) -> Self {
        self.config.insert(key.into(), value);
        self
    }

    pub fn with_secret<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.secrets.insert(key.into(), value.into());
        self
    }
}

impl ConfigProvider for StaticConfig {
    fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn config(&self) -> &HashMap<String, serde_json::Value> {
        &self.config
    }

    fn secrets(&self) -> &HashMap<String, String> {
        &self.secrets
    }
}
