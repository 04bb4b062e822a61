//! Unified path management for SpacePal client files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/spacepal/          # Config directory
//! ├── config.toml              # Backend connection settings
//! └── session.toml             # Persisted session (token, identity, selection)
//! ```

use std::path::PathBuf;

use spacepal_core::{Result, SpacePalError};

/// Resolves the on-disk locations the client reads and writes.
pub struct SpacePalPaths;

impl SpacePalPaths {
    /// Returns the SpacePal configuration directory.
    ///
    /// XDG config dir on Linux, the platform equivalent elsewhere.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("spacepal"))
            .ok_or_else(|| SpacePalError::config("cannot determine config directory"))
    }

    /// Path to the backend connection settings file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Path to the persisted session file.
    pub fn session_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("session.toml"))
    }
}
