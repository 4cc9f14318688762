//! Configuration resolution: defaults, then a TOML file named by
//! `OMAHA_CONFIG`, then individual `OMAHA_*` environment variables.
//! Command-line flags are applied on top by the command handlers.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;

/// Output rendering for analysis commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub format: OutputFormat,
    pub list_better: bool,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub format: ValueSource,
    pub list_better: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            format: ValueSource::Default,
            list_better: ValueSource::Default,
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            list_better: false,
            seed: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("OMAHA_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.format {
            cfg.format = v;
            sources.format = ValueSource::File;
        }
        if let Some(v) = f.list_better {
            cfg.list_better = v;
            sources.list_better = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Ok(format) = std::env::var("OMAHA_FORMAT")
        && !format.is_empty()
    {
        cfg.format = OutputFormat::from_str(&format, true)
            .map_err(|_| ConfigError::Invalid(format!("Invalid format: {}", format)))?;
        sources.format = ValueSource::Env;
    }
    if let Ok(list) = std::env::var("OMAHA_LIST_BETTER")
        && !list.is_empty()
    {
        cfg.list_better =
            parse_bool(&list).ok_or_else(|| ConfigError::Invalid("Invalid list_better".into()))?;
        sources.list_better = ValueSource::Env;
    }
    if let Ok(seed) = std::env::var("OMAHA_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }

    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    format: Option<OutputFormat>,
    #[serde(default)]
    list_better: Option<bool>,
    #[serde(default)]
    seed: Option<u64>,
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
