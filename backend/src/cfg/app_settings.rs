use std::{env, fs, path::{Path, PathBuf}};

use config::{ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::cfg;

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct AppSettings {
    #[serde(default)]
    pub server: cfg::ServerSettings,

    #[serde(default)]
    pub tester: cfg::TesterSettings,
}

impl AppSettings {
    pub fn new() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let app_run_env = Self::get_app_run_env();
        let config_path = Self::get_config_path();
        let mut builder = config::Config::builder();

        // Layer 0: Set defaults from AppSettings::default()
        let default_settings = Self::default();
        let default_toml = toml::to_string(&default_settings)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize defaults: {e}")))?;
        builder = builder.add_source(File::from_str(&default_toml, config::FileFormat::Toml));

        // Layer 1: Add default configuration from files
        let default_config_path = config_path.join("configs.default.toml");
        if default_config_path.exists() {
            builder = builder.add_source(File::from(default_config_path));
        }

        // Layer 2: Add environment-specific config
        let env_config_path = config_path.join(format!("configs.{app_run_env}.toml"));
        if env_config_path.exists() {
            builder = builder.add_source(File::from(env_config_path));
        }

        // Layer 3: Add local config overrides
        let local_config_path = config_path.join("configs.local.toml");
        if local_config_path.exists() {
            builder = builder.add_source(File::from(local_config_path));
        }

        // Layer 4: Override with environment variables
        // Use APP_SERVER__PORT, APP_TESTER__BASE_URL, etc.
        builder = builder.add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        );

        builder.build()?.try_deserialize::<Self>()
    }

    /// In the production environment, writes the effective settings to
    /// `configs.production.toml` if that file doesn't exist yet, so users can
    /// edit it without copying it during deployment. Only the server calls this.
    pub fn save_env_config_if_missing(&self, config_path: &Path, app_run_env: &str) -> Result<Option<PathBuf>, ConfigError> {
        let env_config_path = config_path.join(format!("configs.{app_run_env}.toml"));
        if app_run_env != "production" || env_config_path.exists() {
            return Ok(None);
        }

        let settings_str = toml::to_string(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;
        fs::write(&env_config_path, settings_str)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;
        Ok(Some(env_config_path))
    }

    #[must_use]
    pub fn get_server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Origin used by the tester for relative endpoint paths.
    #[must_use]
    pub fn get_tester_base_url(&self) -> String {
        if self.tester.base_url.trim().is_empty() {
            format!("http://{}", self.get_server_address())
        } else {
            self.tester.base_url.trim().to_string()
        }
    }

    #[must_use]
    pub fn get_app_run_env() -> String {
        env::var("APP_RUN_ENV").unwrap_or_else(|_| "production".to_string())
    }

    #[must_use]
    pub fn get_config_path() -> &'static Path {
        Path::new(".")
    }

    #[must_use]
    pub fn get_config_full_path() -> String {
        let config_path = Self::get_config_path();
        config_path
            .canonicalize()
            .ok()
            .unwrap_or_else(|| config_path.to_path_buf())
            .to_string_lossy()
            .to_string()
    }
}
