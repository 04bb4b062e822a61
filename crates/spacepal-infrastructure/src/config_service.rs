//! Configuration loading for the backend connection.

use std::env;
use std::path::PathBuf;

use spacepal_core::config::ClientConfig;
use spacepal_core::error::Result;

use crate::paths::SpacePalPaths;
use crate::storage::AtomicTomlFile;

/// Environment variable that overrides the configured base URL.
pub const API_URL_ENV: &str = "SPACEPAL_API_URL";

/// Loads [`ClientConfig`] from `config.toml`, with an environment override.
///
/// Resolution order: `SPACEPAL_API_URL` beats the file, the file beats the
/// built-in defaults. A missing file is created with the defaults.
pub struct ConfigService {
    file: AtomicTomlFile<ClientConfig>,
}

impl ConfigService {
    pub fn new_default() -> Result<Self> {
        Ok(Self::new(SpacePalPaths::config_file()?))
    }

    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
        }
    }

    pub fn load(&self) -> Result<ClientConfig> {
        let mut config = match self.file.load()? {
            Some(config) => config,
            None => {
                // First run: write the defaults so the user has a file to edit.
                let config = ClientConfig::default();
                self.file.save(&config)?;
                config
            }
        };

        if let Ok(url) = env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                tracing::debug!(%url, "overriding API base URL from environment");
                config.api_base_url = url;
            }
        }

        Ok(config)
    }

    /// Writes the config file, creating parent directories as needed.
    pub fn save(&self, config: &ClientConfig) -> Result<()> {
        self.file.save(config)
    }
}
