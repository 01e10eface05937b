use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::auth::{Operator, StoredHash};
use crate::error::{InventoryError, Result};
use crate::models::LOW_STOCK_THRESHOLD;
use crate::store::{CorruptionPolicy, InventoryStore};

/// Directory holding invtrack's own configuration.
const CONFIG_DIR: &str = ".invtrack";
/// Config filename.
const CONFIG_FILE: &str = "config.toml";
/// Default inventory filename, relative to the project root.
const INVENTORY_FILE: &str = "inventory.json";

/// Environment variable overriding the operator username.
pub const ENV_ADMIN: &str = "INVTRACK_ADMIN";
/// Environment variable carrying the operator's plaintext password.
pub const ENV_ADMIN_PASSWORD: &str = "INVTRACK_ADMIN_PASSWORD";

/// Project-level configuration resolved from the working directory.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the inventory lives in.
    pub project_root: PathBuf,
    /// Path to the `.invtrack/` directory.
    pub config_dir: PathBuf,
    /// Path to the config file.
    pub config_path: PathBuf,
    /// User settings loaded from config.toml.
    pub settings: UserSettings,
}

/// User-configurable settings from .invtrack/config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub store: StoreSettings,
    pub auth: AuthSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    /// Inventory file, relative to the project root unless absolute.
    pub file: PathBuf,
    /// Default threshold for the low-stock view.
    pub low_stock_threshold: u64,
    /// Handling of an unreadable inventory file.
    pub on_corrupt: CorruptionPolicy,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            file: PathBuf::from(INVENTORY_FILE),
            low_stock_threshold: LOW_STOCK_THRESHOLD,
            on_corrupt: CorruptionPolicy::default(),
        }
    }
}

/// Operator credential as stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Argon2 PHC string, or a legacy 64-hex SHA-256 digest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Minified,
    Pretty,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
}

/// Operator overrides taken from the environment.
#[derive(Debug, Clone, Default)]
pub struct OperatorEnv {
    pub admin: Option<String>,
    pub admin_password: Option<String>,
}

impl OperatorEnv {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            admin: std::env::var(ENV_ADMIN).ok().filter(|v| !v.is_empty()),
            admin_password: std::env::var(ENV_ADMIN_PASSWORD)
                .ok()
                .filter(|v| !v.is_empty()),
        }
    }
}

impl Config {
    /// Create config for a given project root.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        let project_root = project_root.into();
        let config_dir = project_root.join(CONFIG_DIR);
        let config_path = config_dir.join(CONFIG_FILE);

        let settings = Self::load_settings(&config_path).unwrap_or_default();

        Self {
            project_root,
            config_dir,
            config_path,
            settings,
        }
    }

    /// Create config from the current working directory.
    pub fn from_cwd() -> Result<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| InventoryError::Config(format!("cannot get cwd: {e}")))?;
        Ok(Self::new(cwd))
    }

    /// Load settings from config.toml if it exists and parses.
    fn load_settings(config_path: &Path) -> Option<UserSettings> {
        if !config_path.exists() {
            return None;
        }
        let content = std::fs::read_to_string(config_path).ok()?;
        match toml::from_str(&content) {
            Ok(settings) => Some(settings),
            Err(e) => {
                tracing::warn!(path = %config_path.display(), error = %e, "ignoring invalid config");
                None
            }
        }
    }

    /// Save current settings to config.toml.
    pub fn save_settings(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        let content = toml::to_string_pretty(&self.settings)
            .map_err(|e| InventoryError::Config(format!("failed to serialize settings: {e}")))?;
        std::fs::write(&self.config_path, content)?;
        Ok(())
    }

    /// Absolute path of the inventory file.
    #[must_use]
    pub fn inventory_path(&self) -> PathBuf {
        self.project_root.join(&self.settings.store.file)
    }

    /// The inventory store described by these settings.
    #[must_use]
    pub fn store(&self) -> InventoryStore {
        InventoryStore::open(self.inventory_path()).with_policy(self.settings.store.on_corrupt)
    }

    /// Resolve the operator credential, environment first.
    ///
    /// A plaintext password from the environment is hashed here, once per
    /// process.
    pub fn operator(&self, env: &OperatorEnv) -> Result<Operator> {
        let username = env
            .admin
            .clone()
            .or_else(|| self.settings.auth.username.clone())
            .ok_or(InventoryError::NoOperator)?;

        if let Some(password) = &env.admin_password {
            return Operator::from_plaintext(username, password);
        }
        let hash = self
            .settings
            .auth
            .password_hash
            .as_deref()
            .ok_or(InventoryError::NoOperator)?;
        Ok(Operator::new(username, StoredHash::parse(hash)?))
    }
}
