//! Configuration file and environment overrides

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::appearance::{Appearance, Palette, Rgb};

/// Environment variable overriding `api.base_url`.
pub const API_URL_ENV: &str = "ROOMPLAN_API_URL";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    /// Extra or replacement palette entries, keyed by furniture name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub palette: BTreeMap<String, PaletteEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub icon: String,
    /// `#RRGGBB`
    pub color: String,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;
        ensure!(
            config.api.timeout_secs > 0,
            "Invalid configuration in {}: api.timeout_secs must be at least 1",
            path.display()
        );
        Ok(config)
    }

    /// `<config dir>/roomplan/config.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("roomplan").join("config.yaml"))
    }

    /// Load `path` if given, else the default location when it exists, else
    /// defaults. The environment override is applied last.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load_from_file(path)?,
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(path) => Self::load_from_file(&path)?,
                None => {
                    debug!("no configuration file, using defaults");
                    Self::default()
                }
            },
        };
        if let Ok(url) = std::env::var(API_URL_ENV) {
            config.apply_api_url(url);
        }
        Ok(config)
    }

    pub fn apply_api_url(&mut self, url: impl Into<String>) {
        let url = url.into();
        if !url.trim().is_empty() {
            debug!(%url, "api base url overridden");
            self.api.base_url = url;
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }

    /// Standard palette with this configuration's entries layered on top.
    pub fn palette(&self) -> Result<Palette> {
        let mut overrides = Vec::with_capacity(self.palette.len());
        for (name, entry) in &self.palette {
            let fill: Rgb = entry
                .color
                .parse()
                .with_context(|| format!("palette entry '{}'", name))?;
            overrides.push((name.clone(), Appearance::new(entry.icon.clone(), fill)));
        }
        Ok(Palette::standard().with_overrides(overrides))
    }
}
