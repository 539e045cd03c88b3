use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Model configuration loaded from a TOML file: a `[model]` table with the
/// data directory, a free-form `[config]` table handed to the model as-is,
/// and a `[secrets]` table supporting `${VAR}` environment substitution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub model: ModelMeta,
    #[serde(default)]
    pub config: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub secrets: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMeta {
    pub name: String,
    pub version: String,
    pub description: Option<String>,
    pub data_dir: PathBuf,
}

impl ModelConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        let config = toml::from_str(&processed_content)?;
        Ok(config)
    }

    /// Replaces `${VAR_NAME}` with the environment variable's value; unset
    /// variables are left as-is so validation can report them in context.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }
}

impl ConfigProvider for ModelConfig {
    fn data_dir(&self) -> &Path {
        &self.model.data_dir
    }

    fn config(&self) -> &HashMap<String, serde_json::Value> {
        &self.config
    }

    fn secrets(&self) -> &HashMap<String, String> {
        &self.secrets
    }
}

impl Validate for ModelConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("model.name", &self.model.name)?;
        validate_non_empty_string("model.version", &self.model.version)?;
        validate_path("model.data_dir", &self.model.data_dir.to_string_lossy())?;

        for (key, value) in &self.secrets {
            validate_non_empty_string(&format!("secrets.{}", key), value)?;
        }

        Ok(())
    }
}
