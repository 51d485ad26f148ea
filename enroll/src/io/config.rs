//! Optional settings stored in `enroll.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "enroll.toml";
pub const DEFAULT_DATA_FILE: &str = "Enrollments.json";

/// Enrollment settings (TOML). Missing fields take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EnrollConfig {
    /// Roster file read at startup and replaced on save.
    pub data_file: PathBuf,

    /// Tracing filter used when `RUST_LOG` is unset (e.g. `"enroll=debug"`).
    pub log_filter: String,
}

impl Default for EnrollConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_filter: "warn".to_string(),
        }
    }
}

impl EnrollConfig {
    pub fn validate(&self) -> Result<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(anyhow!("data_file must not be empty"));
        }
        if self.log_filter.trim().is_empty() {
            return Err(anyhow!("log_filter must not be empty"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `EnrollConfig::default()`.
pub fn load_config(path: &Path) -> Result<EnrollConfig> {
    if !path.exists() {
        return Ok(EnrollConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: EnrollConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Write config to disk, creating parent directories as needed.
pub fn write_config(path: &Path, cfg: &EnrollConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    fs::write(path, buf).with_context(|| format!("write {}", path.display()))
}
