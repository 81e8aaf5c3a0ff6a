use crate::adapters::http::DEFAULT_TIMEOUT_SECONDS;
use crate::config::toml_config::TomlConfig;
use crate::core::decode::DEFAULT_MAX_DEPTH;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_location, validate_path, validate_positive_number, validate_required_field, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "opds-feed")]
#[command(about = "Decode an OPDS2 catalog feed and re-emit it in canonical form")]
pub struct CliConfig {
    #[arg(short, long, help = "Feed location: a file path or an http(s) URL")]
    pub source: Option<String>,

    #[arg(short, long, help = "TOML configuration file; command-line options take precedence")]
    pub config: Option<String>,

    #[arg(short, long, help = "Write the canonical feed here instead of stdout")]
    pub output: Option<String>,

    #[arg(long, help = "Pretty-print the canonical feed")]
    pub pretty: bool,

    #[arg(long, help = "Deepest link nesting kept while decoding")]
    pub max_depth: Option<usize>,

    #[arg(long, help = "HTTP timeout in seconds")]
    pub timeout: Option<u64>,

    #[arg(long, help = "Print a human-readable summary instead of JSON")]
    pub summary: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 命令列未指定的選項由 TOML 設定補上
    pub fn merge(&mut self, file: &TomlConfig) {
        if self.source.is_none() {
            self.source = Some(file.source.location.clone());
        }
        if self.timeout.is_none() {
            self.timeout = file.source.timeout_seconds;
        }
        if self.max_depth.is_none() {
            self.max_depth = file.decode.as_ref().and_then(|d| d.max_depth);
        }
        if let Some(output) = &file.output {
            if self.output.is_none() {
                self.output = output.path.clone();
            }
            self.pretty |= output.pretty.unwrap_or(false);
        }
    }
}

impl ConfigProvider for CliConfig {
    fn source(&self) -> &str {
        self.source.as_deref().unwrap_or_default()
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }

    fn max_depth(&self) -> usize {
        self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH)
    }

    fn pretty(&self) -> bool {
        self.pretty
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        let source = validate_required_field("source", &self.source)?;
        validate_location("source", source)?;
        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }
        validate_positive_number("max_depth", self.max_depth(), 1)?;
        validate_positive_number("timeout", self.timeout_seconds() as usize, 1)?;
        Ok(())
    }
}
