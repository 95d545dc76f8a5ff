//! Persisted model-root configuration.
//!
//! The model root survives restarts as a single UTF-8 text file holding the
//! absolute path, overwritten on every change. A missing or unreadable file
//! falls back to the default root.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::{VaultError, VaultResult};

/// File name of the persisted model-root path
pub const ROOT_STATE_FILE: &str = "model_root.txt";

/// Default model root used when no path has been persisted
#[must_use]
pub fn default_root() -> PathBuf {
    ProjectDirs::from("ai", "Voicevault", "voicevault").map_or_else(
        || PathBuf::from("rvc_models"),
        |dirs| dirs.data_dir().join("rvc_models"),
    )
}

fn default_state_file() -> PathBuf {
    ProjectDirs::from("ai", "Voicevault", "voicevault").map_or_else(
        || PathBuf::from(ROOT_STATE_FILE),
        |dirs| dirs.config_dir().join(ROOT_STATE_FILE),
    )
}

/// The model root and where it is persisted
#[derive(Debug, Clone)]
pub struct VaultConfig {
    state_file: PathBuf,
    root: PathBuf,
}

impl VaultConfig {
    /// Load the configuration from the cross-platform default location
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(default_state_file())
    }

    /// Load the configuration from a specific state file
    ///
    /// Any read error falls back to the default root, matching the behavior
    /// users expect on first run.
    #[must_use]
    pub fn load_from(state_file: PathBuf) -> Self {
        let root = match fs::read_to_string(&state_file) {
            Ok(contents) => {
                let trimmed = contents.trim();
                if trimmed.is_empty() {
                    default_root()
                } else {
                    PathBuf::from(trimmed)
                }
            }
            Err(e) => {
                tracing::debug!(
                    "No persisted model root at {} ({}), using default",
                    state_file.display(),
                    e
                );
                default_root()
            }
        };

        Self { state_file, root }
    }

    /// The configured model root
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where the root path is persisted
    #[must_use]
    pub fn state_file(&self) -> &Path {
        &self.state_file
    }

    /// Change the model root and persist it immediately
    ///
    /// No validation is performed on the new path; enumeration creates it
    /// when missing.
    pub fn set_root(&mut self, root: PathBuf) -> VaultResult<()> {
        if let Some(parent) = self.state_file.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                VaultError::config(format!(
                    "failed to create {}: {e}",
                    parent.display()
                ))
            })?;
        }
        fs::write(&self.state_file, root.to_string_lossy().as_bytes()).map_err(|e| {
            VaultError::config(format!(
                "failed to persist model root to {}: {e}",
                self.state_file.display()
            ))
        })?;

        tracing::info!("Persisted model root {}", root.display());
        self.root = root;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_state_file_falls_back_to_default() {
        let temp = TempDir::new().unwrap();
        let config = VaultConfig::load_from(temp.path().join("absent.txt"));
        assert_eq!(config.root(), default_root());
    }

    #[test]
    fn test_blank_state_file_falls_back_to_default() {
        let temp = TempDir::new().unwrap();
        let state_file = temp.path().join(ROOT_STATE_FILE);
        fs::write(&state_file, "  \n").unwrap();

        let config = VaultConfig::load_from(state_file);
        assert_eq!(config.root(), default_root());
    }

    #[test]
    fn test_set_root_persists_and_reloads() {
        let temp = TempDir::new().unwrap();
        let state_file = temp.path().join(ROOT_STATE_FILE);
        let new_root = temp.path().join("my_models");

        let mut config = VaultConfig::load_from(state_file.clone());
        config.set_root(new_root.clone()).unwrap();
        assert_eq!(config.root(), new_root);

        let reloaded = VaultConfig::load_from(state_file);
        assert_eq!(reloaded.root(), new_root);
    }

    #[test]
    fn test_set_root_overwrites_previous_value() {
        let temp = TempDir::new().unwrap();
        let state_file = temp.path().join(ROOT_STATE_FILE);

        let mut config = VaultConfig::load_from(state_file.clone());
        config.set_root(temp.path().join("first")).unwrap();
        config.set_root(temp.path().join("second")).unwrap();

        let reloaded = VaultConfig::load_from(state_file);
        assert_eq!(reloaded.root(), temp.path().join("second"));
    }

    #[test]
    fn test_state_file_whitespace_is_trimmed() {
        let temp = TempDir::new().unwrap();
        let state_file = temp.path().join(ROOT_STATE_FILE);
        fs::write(&state_file, "/some/model/root\n").unwrap();

        let config = VaultConfig::load_from(state_file);
        assert_eq!(config.root(), Path::new("/some/model/root"));
    }
}
