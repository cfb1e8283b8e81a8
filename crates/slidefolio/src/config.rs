use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::viewer::navigator::{DEFAULT_CLOSE_DELAY, DEFAULT_SETTLE_DELAY, NavigatorConfig};

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "slidefolio";

/// Longest accepted animation delay, in milliseconds.
const MAX_DELAY_MS: u64 = 5_000;

pub const KEYS: &[&str] = &[
    "viewer.theme",
    "viewer.media_base",
    "viewer.settle_ms",
    "viewer.close_ms",
    "viewer.fullscreen",
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewer: Option<ViewerConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    /// Directory that relative media paths resolve against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_base: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settle_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fullscreen: Option<bool>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `slidefolio config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                tracing::debug!("using default config: {e}");
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# slidefolio configuration\n{yaml}");
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let viewer = self.viewer.get_or_insert_with(ViewerConfig::default);
        match key {
            "viewer.theme" => {
                match value {
                    "light" | "dark" => {}
                    _ => anyhow::bail!("Invalid theme: {value}. Must be 'light' or 'dark'."),
                }
                viewer.theme = Some(value.to_string());
            }
            "viewer.media_base" => {
                if value.trim().is_empty() {
                    anyhow::bail!("Invalid media_base: must not be empty.");
                }
                viewer.media_base = Some(PathBuf::from(value));
            }
            "viewer.settle_ms" => {
                viewer.settle_ms = Some(parse_delay(key, value)?);
            }
            "viewer.close_ms" => {
                viewer.close_ms = Some(parse_delay(key, value)?);
            }
            "viewer.fullscreen" => {
                let flag = match value {
                    "true" | "yes" | "on" => true,
                    "false" | "no" | "off" => false,
                    _ => anyhow::bail!("Invalid fullscreen: {value}. Must be 'true' or 'false'."),
                };
                viewer.fullscreen = Some(flag);
            }
            _ => anyhow::bail!(
                "Unknown config key: {key}. Valid keys: {}",
                KEYS.join(", ")
            ),
        }
        Ok(())
    }

    pub fn theme_name(&self) -> &str {
        self.viewer
            .as_ref()
            .and_then(|v| v.theme.as_deref())
            .unwrap_or("light")
    }

    pub fn media_base(&self) -> Option<&Path> {
        self.viewer.as_ref().and_then(|v| v.media_base.as_deref())
    }

    pub fn fullscreen(&self) -> bool {
        self.viewer
            .as_ref()
            .and_then(|v| v.fullscreen)
            .unwrap_or(true)
    }

    /// Animation timings for the viewer, with defaults filled in.
    pub fn navigator(&self) -> NavigatorConfig {
        let viewer = self.viewer.as_ref();
        NavigatorConfig {
            settle_delay: viewer
                .and_then(|v| v.settle_ms)
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_SETTLE_DELAY),
            close_delay: viewer
                .and_then(|v| v.close_ms)
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_CLOSE_DELAY),
            ..NavigatorConfig::default()
        }
    }
}

fn parse_delay(key: &str, value: &str) -> Result<u64> {
    match value.parse::<u64>() {
        Ok(ms) if ms <= MAX_DELAY_MS => Ok(ms),
        _ => anyhow::bail!(
            "Invalid {key}: {value}. Must be a number of milliseconds up to {MAX_DELAY_MS}."
        ),
    }
}
