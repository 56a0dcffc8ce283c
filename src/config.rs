//! User configuration, read from `tasklist.toml` in the platform config dir.
//!
//! ```toml
//! language = "korean"
//!
//! [storage]
//! backend = "sqlite"
//! data_dir = "/home/me/.local/share/tasklist"
//! key = "@tasks"
//! save_delay_ms = 2000
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::i18n::Language;

pub const DATA_DIR_ENV: &str = "TASKLIST_DATA_DIR";
const CONFIG_FILE: &str = "tasklist.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Json,
    Sqlite,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub data_dir: PathBuf,
    pub key: String,
    pub save_delay: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub storage: StorageConfig,
    pub language: Option<Language>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    language: Option<Language>,
    storage: RawStorage,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawStorage {
    backend: StorageBackend,
    data_dir: Option<PathBuf>,
    key: Option<String>,
    save_delay_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config::from_raw(RawConfig::default(), None)
    }
}

impl Config {
    pub const DEFAULT_KEY: &'static str = "@tasks";
    pub const DEFAULT_SAVE_DELAY: Duration = Duration::from_secs(2);

    /// Loads the user config, falling back to defaults when it is missing or broken.
    pub fn load() -> Self {
        let data_dir_override = std::env::var_os(DATA_DIR_ENV).map(PathBuf::from);

        let Some(path) = Self::path() else {
            return Config::from_raw(RawConfig::default(), data_dir_override);
        };

        match Self::read(&path) {
            Ok(Some(raw)) => {
                tracing::info!(path = %path.display(), "loaded config");
                Config::from_raw(raw, data_dir_override)
            }
            Ok(None) => Config::from_raw(RawConfig::default(), data_dir_override),
            Err(error) => {
                tracing::warn!(%error, "using default config");
                Config::from_raw(RawConfig::default(), data_dir_override)
            }
        }
    }

    pub fn path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    fn read(path: &Path) -> Result<Option<RawConfig>, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_owned(),
                    source,
                });
            }
        };

        toml::from_str(&contents)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: path.to_owned(),
                source,
            })
    }

    fn from_raw(raw: RawConfig, data_dir_override: Option<PathBuf>) -> Self {
        let data_dir = data_dir_override
            .or(raw.storage.data_dir)
            .unwrap_or_else(default_data_dir);

        Config {
            storage: StorageConfig {
                backend: raw.storage.backend,
                data_dir,
                key: raw
                    .storage
                    .key
                    .unwrap_or_else(|| Self::DEFAULT_KEY.to_owned()),
                save_delay: raw
                    .storage
                    .save_delay_ms
                    .map(Duration::from_millis)
                    .unwrap_or(Self::DEFAULT_SAVE_DELAY),
            },
            language: raw.language,
        }
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("rs", "Iced", "Tasklist")
}

fn default_data_dir() -> PathBuf {
    if let Some(project_dirs) = project_dirs() {
        project_dirs.data_dir().into()
    } else {
        std::env::current_dir().unwrap_or_default()
    }
}
