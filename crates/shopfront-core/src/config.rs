use serde::{Deserialize, Serialize};
use shopfront_cache::{FileStore, KeyValueStore, MemoryStore, SqliteStore};
use std::path::PathBuf;
use tracing::debug;

/// Main configuration structure
///
/// Loaded from `<config_dir>/shopfront/config.toml`, CLI flags override it.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Load config from default location, falling back to defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let config = Self::from_toml(&contents)?;
            debug!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(contents: &str) -> crate::Result<Self> {
        toml::from_str(contents)
            .map_err(|e| crate::Error::ConfigError(format!("Failed to parse config: {}", e)))
    }

    fn config_path() -> crate::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| crate::Error::ConfigError("Could not find config directory".into()))?
            .join("shopfront");

        Ok(config_dir.join("config.toml"))
    }

    /// Per-user data directory (favorites, logs)
    pub fn data_dir() -> crate::Result<PathBuf> {
        Ok(dirs::data_dir()
            .ok_or_else(|| crate::Error::ConfigError("Could not find data directory".into()))?
            .join("shopfront"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Catalog API root
    #[serde(default = "default_api_url")]
    pub base_url: String,
}

fn default_api_url() -> String {
    shopfront_api::fakestore::FAKESTORE_API_BASE.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_url(),
        }
    }
}

/// Which key-value backend keeps the favorites
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Sqlite,
    File,
    Memory,
}

impl std::str::FromStr for StorageBackend {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_lowercase().as_str() {
            "sqlite" => Ok(StorageBackend::Sqlite),
            "file" | "json" => Ok(StorageBackend::File),
            "memory" | "mem" => Ok(StorageBackend::Memory),
            other => Err(crate::Error::ConfigError(format!(
                "Unknown storage backend '{}' (expected sqlite, file or memory)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Where the store lives; defaults to the data directory
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl StorageConfig {
    /// Resolved on-disk location for file-backed stores
    pub fn resolved_path(&self) -> crate::Result<PathBuf> {
        if let Some(path) = &self.path {
            return Ok(path.clone());
        }

        let file_name = match self.backend {
            StorageBackend::File => "favorites.json",
            _ => "favorites.db",
        };
        Ok(Config::data_dir()?.join(file_name))
    }

    /// Open the configured backend
    pub fn open(&self) -> crate::Result<Box<dyn KeyValueStore>> {
        match self.backend {
            StorageBackend::Memory => Ok(Box::new(MemoryStore::new())),
            StorageBackend::File => Ok(Box::new(FileStore::new(self.resolved_path()?))),
            StorageBackend::Sqlite => {
                let path = self.resolved_path()?;
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                Ok(Box::new(SqliteStore::new(path)?))
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Appended to every price
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_currency() -> String {
    "₽".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
        }
    }
}
