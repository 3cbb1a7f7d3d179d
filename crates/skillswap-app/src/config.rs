use anyhow::{anyhow, Context};
use serde::Deserialize;
use skillswap_controller::Timings;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default config template created when no config exists
const DEFAULT_CONFIG: &str = r#"
[ui]
notification_visible_ms = 3000
notification_fade_ms = 300
overlay_hide_delay_ms = 1500
render = "text"  # text, html, json

[seed]
path = ""  # Empty uses the built-in listings. Set via SKILLSWAP_SEED env var

[logging]
level = "info"  # trace, debug, info, warn, error
format = "pretty"  # pretty, json
"#;

/// How frames are written to stdout
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    Text,
    Html,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UiConfig {
    pub notification_visible_ms: u64,
    pub notification_fade_ms: u64,
    pub overlay_hide_delay_ms: u64,
    pub render: RenderMode,
}

impl UiConfig {
    pub fn timings(&self) -> Timings {
        Timings {
            notification_visible: Duration::from_millis(self.notification_visible_ms),
            notification_fade: Duration::from_millis(self.notification_fade_ms),
            overlay_hide_delay: Duration::from_millis(self.overlay_hide_delay_ms),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SeedConfig {
    #[serde(default)]
    pub path: Option<String>,
}

impl SeedConfig {
    /// Configured seed file, ignoring an empty value
    pub fn path(&self) -> Option<PathBuf> {
        self.path
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_format() -> String {
    "pretty".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub ui: UiConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Get the global config path: ~/.skillswap/skillswap.toml
    fn global_config_path() -> anyhow::Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
        Ok(home.join(".skillswap").join("skillswap.toml"))
    }

    /// Ensure global config directory and file exist, creating defaults if needed
    fn ensure_global_config() -> anyhow::Result<PathBuf> {
        let config_path = Self::global_config_path()?;

        if let Some(config_dir) = config_path.parent() {
            if !config_dir.exists() {
                fs::create_dir_all(config_dir).with_context(|| {
                    format!("Failed to create config directory {}", config_dir.display())
                })?;
                eprintln!("Created config directory: {}", config_dir.display());
            }
        }

        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG.trim())?;
            eprintln!("Created default config: {}", config_path.display());
        }

        Ok(config_path)
    }

    /// Load configuration with layered approach:
    /// 1. Defaults
    /// 2. Global config: ~/.skillswap/skillswap.toml (auto-created if missing)
    /// 3. Local override: ./skillswap.toml (optional)
    /// 4. Environment variables (highest priority)
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file from current directory
        dotenvy::dotenv().ok();

        let global_config_path = Self::ensure_global_config()?;

        let mut config_builder = Self::defaults()
            .add_source(config::File::from(global_config_path))
            .add_source(config::File::with_name("skillswap").required(false))
            .add_source(
                config::Environment::with_prefix("SKILLSWAP")
                    .separator("__")
                    .try_parsing(true),
            );

        if let Ok(path) = env::var("SKILLSWAP_SEED") {
            config_builder = config_builder.set_override("seed.path", path)?;
        }

        let config = config_builder.build()?;

        let config: Self = config.try_deserialize()?;
        Ok(config)
    }

    /// Parse a TOML document layered over the defaults
    #[cfg(test)]
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = Self::defaults()
            .add_source(config::File::from_str(content, config::FileFormat::Toml))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    fn defaults() -> config::ConfigBuilder<config::builder::DefaultState> {
        config::Config::builder().add_source(config::File::from_str(
            DEFAULT_CONFIG,
            config::FileFormat::Toml,
        ))
    }
}
