//! Configuration file support for the site builder.
//!
//! Loads optional `audara.toml` from the working directory, or an explicit
//! file passed with `--config`.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "audara.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub build: BuildConfig,
}

/// `[build]` table
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Where `index.html` and copied assets go.
    pub out_dir: Option<PathBuf>,
    /// Directory whose files are copied verbatim into the output.
    pub public_dir: Option<PathBuf>,
    /// Pins the footer year instead of reading the system clock.
    pub year: Option<i32>,
}

impl SiteConfig {
    /// Load the explicit config file, or `audara.toml` from `cwd` if present.
    ///
    /// An explicit path must exist. The default file is optional.
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_from_path(path),
            None => {
                let default_path = cwd.join(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::load_from_path(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_default_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = SiteConfig::load(None, dir.path()).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn reads_default_file_from_cwd() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "[build]\nout_dir = \"site-out\"\nyear = 2026\n",
        )
        .unwrap();

        let config = SiteConfig::load(None, dir.path()).unwrap();
        assert_eq!(config.build.out_dir, Some(PathBuf::from("site-out")));
        assert_eq!(config.build.public_dir, None);
        assert_eq!(config.build.year, Some(2026));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = SiteConfig::load(Some(&dir.path().join("nope.toml")), dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[build]\nyear = \"soon\"\n").unwrap();

        let err = SiteConfig::load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("typo.toml");
        fs::write(&path, "[build]\noutdir = \"x\"\n").unwrap();

        assert!(SiteConfig::load_from_path(&path).is_err());
    }
}
