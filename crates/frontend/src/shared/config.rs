//! Application configuration
//!
//! Search order:
//! 1. TOML override stored in localStorage under [`CONFIG_STORAGE_KEY`]
//! 2. Embedded default config

use anyhow::Context;
use contracts::domain::a001_pokemon::PokemonId;
use serde::Deserialize;

pub const CONFIG_STORAGE_KEY: &str = "random_pokemon_config";

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// 0 disables the bound
    pub timeout_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "https://pokeapi.co/api/v2/pokemon"
timeout_ms = 8000

[logging]
level = "debug"
"#;

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://pokeapi.co/api/v2/pokemon".to_string(),
            timeout_ms: 8000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

impl ApiConfig {
    pub fn pokemon_url(&self, id: PokemonId) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), id)
    }
}

impl LoggingConfig {
    /// Unknown level names fall back to `Debug`
    pub fn log_level(&self) -> log::Level {
        self.level.parse().unwrap_or(log::Level::Debug)
    }
}

pub fn parse_config(contents: &str) -> anyhow::Result<AppConfig> {
    toml::from_str(contents).context("Invalid application config")
}

/// Load configuration: localStorage override first, embedded default otherwise
pub fn load_config() -> anyhow::Result<AppConfig> {
    if let Some(contents) = read_override() {
        match parse_config(&contents) {
            Ok(config) => {
                log::info!("Loaded config override from localStorage");
                return Ok(config);
            }
            Err(e) => log::warn!("Ignoring config override: {:#}", e),
        }
    }

    parse_config(DEFAULT_CONFIG).context("Embedded default config is broken")
}

fn read_override() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(CONFIG_STORAGE_KEY)
        .ok()?
}
