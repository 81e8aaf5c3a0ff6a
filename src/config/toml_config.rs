use crate::adapters::http::DEFAULT_TIMEOUT_SECONDS;
use crate::core::decode::DEFAULT_MAX_DEPTH;
use crate::core::ConfigProvider;
use crate::utils::error::{FeedError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub decode: Option<DecodeConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub location: String,
    pub timeout_seconds: Option<u64>,
    pub headers: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodeConfig {
    pub max_depth: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub pretty: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FeedError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FeedError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${API_TOKEN})，找不到的變數保留原字串
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FeedError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn headers(&self) -> HashMap<String, String> {
        self.source.headers.clone().unwrap_or_default()
    }
}

impl ConfigProvider for TomlConfig {
    fn source(&self) -> &str {
        &self.source.location
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.path.as_deref())
    }

    fn max_depth(&self) -> usize {
        self.decode
            .as_ref()
            .and_then(|d| d.max_depth)
            .unwrap_or(DEFAULT_MAX_DEPTH)
    }

    fn pretty(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|o| o.pretty)
            .unwrap_or(false)
    }

    fn timeout_seconds(&self) -> u64 {
        self.source.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        crate::utils::validation::validate_location("source.location", &self.source.location)?;
        if let Some(path) = self.output_path() {
            crate::utils::validation::validate_path("output.path", path)?;
        }
        crate::utils::validation::validate_positive_number("decode.max_depth", self.max_depth(), 1)?;
        Ok(())
    }
}
