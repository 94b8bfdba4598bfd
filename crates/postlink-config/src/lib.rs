use postlink_engine::{LinkOptions, RenderContext, ReplacementStrategy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// On-disk configuration. Every key is optional; defaults reproduce the
/// engine's built-in behavior.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Base URL for profile, hashtag-search, and status links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Append ` target="_blank"` to entity anchors.
    #[serde(default)]
    pub open_in_new_tab: bool,
    /// Use the legacy buffer-per-group replacement passes instead of
    /// offset-planned replacement.
    #[serde(default)]
    pub legacy_passes: bool,
    /// Error on records missing required fields instead of skipping them.
    #[serde(default)]
    pub strict_records: bool,
    /// Fallback author handle for permalinks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_handle: Option<String>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/postlink");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Rendering context configured by this file.
    pub fn render_context(&self) -> RenderContext {
        let ctx = match &self.base_url {
            Some(base_url) => RenderContext::new(base_url.clone()),
            None => RenderContext::default(),
        };
        match &self.default_handle {
            Some(handle) => ctx.with_default_handle(handle.clone()),
            None => ctx,
        }
    }

    /// Link options configured by this file.
    pub fn link_options(&self) -> LinkOptions {
        LinkOptions {
            open_in_new_tab: self.open_in_new_tab,
            strategy: if self.legacy_passes {
                ReplacementStrategy::SequentialPasses
            } else {
                ReplacementStrategy::ByOffset
            },
            strict_records: self.strict_records,
        }
    }
}
