//! Asset location configuration.
//!
//! The card definitions live in `CardDefs.xml` inside an assets directory.
//! The directory defaults to `assets/` next to this crate's manifest and
//! can be overridden with the `CONFIG_ASSETS_PATH` environment variable.
//! `AssetConfig::global()` resolves it once per process.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Environment variable overriding the assets directory.
pub const ASSETS_PATH_ENV: &str = "CONFIG_ASSETS_PATH";

/// File name of the card definitions inside the assets directory.
pub const CARD_DEFS_FILE: &str = "CardDefs.xml";

/// Where card assets are read from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetConfig {
    /// Directory holding `CardDefs.xml`.
    pub assets_path: PathBuf,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self::new(Self::default_assets_path())
    }
}

impl AssetConfig {
    /// Config for an explicit assets directory.
    pub fn new(assets_path: impl Into<PathBuf>) -> Self {
        Self {
            assets_path: assets_path.into(),
        }
    }

    /// `assets/` next to the crate manifest.
    #[must_use]
    pub fn default_assets_path() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("assets")
    }

    /// Resolve from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve using `lookup` in place of the environment.
    ///
    /// An unset or empty override falls back to the default directory.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(ASSETS_PATH_ENV).filter(|path| !path.is_empty()) {
            Some(path) => {
                tracing::debug!("Assets path overridden by {}: {}", ASSETS_PATH_ENV, path);
                Self::new(path)
            }
            None => Self::default(),
        }
    }

    /// Process-wide config, resolved from the environment on first use.
    pub fn global() -> &'static AssetConfig {
        static CONFIG: OnceLock<AssetConfig> = OnceLock::new();
        CONFIG.get_or_init(Self::from_env)
    }

    /// Full path of `CardDefs.xml`.
    #[must_use]
    pub fn card_defs_path(&self) -> PathBuf {
        self.assets_path.join(CARD_DEFS_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_assets_dir() {
        let config = AssetConfig::default();
        assert!(config.assets_path.ends_with("assets"));
        assert!(config.assets_path.is_dir());
    }

    #[test]
    fn test_override_from_lookup() {
        let config = AssetConfig::from_lookup(|key| {
            (key == ASSETS_PATH_ENV).then(|| "/the/assets/dir".to_string())
        });
        assert_eq!(config.assets_path, PathBuf::from("/the/assets/dir"));
        assert_eq!(
            config.card_defs_path(),
            PathBuf::from("/the/assets/dir/CardDefs.xml")
        );
    }

    #[test]
    fn test_empty_override_uses_default() {
        let config = AssetConfig::from_lookup(|_| Some(String::new()));
        assert_eq!(config, AssetConfig::default());
    }

    /// Touches the real environment; no other unit test reads the variable.
    #[test]
    fn test_assets_path_overridden_by_env() {
        let previous = std::env::var_os(ASSETS_PATH_ENV);
        std::env::set_var(ASSETS_PATH_ENV, "/env/assets");
        let config = AssetConfig::from_env();
        match previous {
            Some(value) => std::env::set_var(ASSETS_PATH_ENV, value),
            None => std::env::remove_var(ASSETS_PATH_ENV),
        }

        assert_eq!(config.assets_path, PathBuf::from("/env/assets"));
        assert_eq!(config.card_defs_path(), PathBuf::from("/env/assets/CardDefs.xml"));
    }

    #[test]
    fn test_unset_override_uses_default() {
        let config = AssetConfig::from_lookup(|_| None);
        assert_eq!(config.assets_path, AssetConfig::default_assets_path());
    }
}
