//! Filesystem-backed persistence for the SpacePal client.
//!
//! Owns the on-disk layout (paths), the atomic TOML storage primitive, the
//! persisted session store, and config loading.

pub mod config_service;
pub mod paths;
pub mod session_store;
pub mod storage;

pub use config_service::ConfigService;
pub use paths::SpacePalPaths;
pub use session_store::TomlSessionStore;
