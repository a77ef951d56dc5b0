use crate::domains::landing::{
    DEFAULT_LANDING_AREA_LENGTH, DEFAULT_LANDING_AREA_WIDTH, DEFAULT_PLATFORM_LENGTH,
    DEFAULT_PLATFORM_WIDTH,
};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub platform: PlatformConfig,
    pub landing_area: LandingAreaConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    pub pos_x: i32,
    pub pos_y: i32,
    pub width: i32,
    pub length: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingAreaConfig {
    pub width: i32,
    pub length: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level for both the tracing subscriber and the file logger.
    pub level: String,
    /// Optional file for domain log lines.
    pub file: Option<String>,
}

impl Config {
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("parsing landing config")?;
        Ok(config)
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.level
            .parse()
            .map_err(|_| anyhow!("invalid log level {:?}", self.level))
    }
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            pos_x: 5,
            pos_y: 5,
            width: DEFAULT_PLATFORM_WIDTH,
            length: DEFAULT_PLATFORM_LENGTH,
        }
    }
}

impl Default for LandingAreaConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_LANDING_AREA_WIDTH,
            length: DEFAULT_LANDING_AREA_LENGTH,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
