use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use shared_types::ImportContext;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = r#"
[database]
# path = "/var/lib/roster/roster.sqlite"
pool_size = 8
busy_timeout_secs = 5

[import]
fallback_language = "en"
# ISO 3166 alpha-2 code used for phone numbers written without a country code
# default_country = "DE"
"#;

#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub struct ImportConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub import: ImportSettings,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Falls back to the platform data directory when unset
    pub path: Option<PathBuf>,
    pub pool_size: u32,
    pub busy_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: None,
            pool_size: 8,
            busy_timeout_secs: 5,
        }
    }
}

impl DatabaseConfig {
    pub fn resolved_path(&self) -> anyhow::Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => crate::helpers::database::get_db_path(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ImportSettings {
    pub fallback_language: String,
    pub default_country: Option<String>,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            fallback_language: "en".to_string(),
            default_country: None,
        }
    }
}

impl ImportConfig {
    /// Loads the config from the user config directory, writing a default
    /// file on first use.
    pub fn load() -> Result<(Self, PathBuf), ConfigError> {
        let config_path = get_config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        if !config_path.exists() {
            std::fs::write(&config_path, DEFAULT_CONFIG).map_err(|e| {
                ConfigError::Message(format!("Failed to write default config: {e}"))
            })?;
        }

        let config = Self::load_from(&config_path)?;
        Ok((config, config_path))
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()))
            .build()?
            .try_deserialize()
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(content, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Builds the context for an import run by `operator_name`
    pub fn context_for(
        &self,
        tenant_id: i64,
        operator_id: Option<i64>,
        operator_name: &str,
    ) -> ImportContext {
        ImportContext {
            tenant_id,
            operator_id,
            operator_name: operator_name.to_string(),
            fallback_language: self.import.fallback_language.clone(),
            country_hint: self.import.default_country.clone(),
        }
    }
}

pub fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("roster").join("import.toml")
    } else {
        PathBuf::from("import.toml")
    }
}
