use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::codec::{CipherId, DEFAULT_SHIFT};
use crate::shorten::DEFAULT_FALLBACK_BASE;

/// Output preferences (optional section in config.toml).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Print link analyses as JSON instead of text.
    #[serde(default)]
    pub json: bool,
}

/// Shortener fallback settings (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortenerConfig {
    /// Base URL fallback slugs are appended to (`<base>/s/<slug>`).
    pub fallback_base_url: String,
}

impl Default for ShortenerConfig {
    fn default() -> Self {
        Self {
            fallback_base_url: DEFAULT_FALLBACK_BASE.to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/decode/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodeConfig {
    /// Caesar shift used when `--shift` is not given.
    #[serde(default = "default_shift")]
    pub default_shift: i64,
    /// Cipher used when `--cipher` is not given.
    #[serde(default = "default_cipher")]
    pub default_cipher: CipherId,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub shortener: ShortenerConfig,
}

fn default_shift() -> i64 {
    DEFAULT_SHIFT
}

fn default_cipher() -> CipherId {
    CipherId::Caesar
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            default_shift: default_shift(),
            default_cipher: default_cipher(),
            output: OutputConfig::default(),
            shortener: ShortenerConfig::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("decode")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DecodeConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DecodeConfig::default();
        write_to(&path, &default_cfg)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<DecodeConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: DecodeConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

/// Write `cfg` as pretty TOML, creating parent directories.
pub fn write_to(path: &Path, cfg: &DecodeConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml).with_context(|| format!("write config {}", path.display()))?;
    Ok(())
}
