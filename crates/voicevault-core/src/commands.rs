//! Presentation-agnostic command dispatch.
//!
//! Frontends translate their events (button clicks, drops, path edits) into
//! [`Command`]s and render the resulting [`Outcome`]: a fresh model listing
//! plus any blocking notices. Every failure is caught here; none is fatal,
//! none is retried.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::VaultConfig;
use crate::error::VaultError;
use crate::model::{DropPayload, ModelEntry, ModelManager};

/// One user-initiated operation against the vault
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Re-enumerate the model root
    Refresh,
    /// Import a drag-and-drop payload
    Import(DropPayload),
    /// Rename a listed model folder
    Rename {
        /// Current folder name
        name: String,
        /// Requested new name
        new_name: String,
    },
    /// Remove a listed model folder and all its contents
    Remove {
        /// Folder name to remove
        name: String,
        /// Whether the user has confirmed the removal
        confirmed: bool,
    },
    /// Change the model root and persist it
    SetRoot(PathBuf),
}

/// How a notice should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    /// A blocking error message
    Error,
    /// A yes/no question that must be answered before removal proceeds
    ConfirmRemove,
}

/// A blocking user-facing message produced by a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Dialog title
    pub title: String,
    /// Message body, naming the failing path and cause
    pub message: String,
    /// Presentation kind
    pub kind: NoticeKind,
}

impl Notice {
    fn error<T: Into<String>, M: Into<String>>(title: T, message: M) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind: NoticeKind::Error,
        }
    }

    fn confirm_remove(name: &str) -> Self {
        Self {
            title: "Remove Model".to_string(),
            message: format!("Are you sure you want to remove '{name}'?"),
            kind: NoticeKind::ConfirmRemove,
        }
    }
}

impl From<&VaultError> for Notice {
    fn from(err: &VaultError) -> Self {
        let title = match err {
            VaultError::CopyFailure { .. } => "Copy Error",
            VaultError::RenameCollision { .. }
            | VaultError::RenameFailure { .. }
            | VaultError::InvalidName { .. } => "Rename Error",
            VaultError::RemoveFailure { .. } => "Remove Error",
            VaultError::NoSelection { .. } => "No Selection",
            VaultError::PathNotFound { .. } | VaultError::ConfigFailure { .. } => "Error",
        };
        Self::error(title, err.to_string())
    }
}

/// Result of dispatching one command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Fresh, name-sorted model listing after the command ran
    pub entries: Vec<ModelEntry>,
    /// Blocking notices to show the user, in order
    pub notices: Vec<Notice>,
}

/// Dispatches commands against the configured model root
///
/// Owns the configuration and the manager; every mutating command ends with
/// a fresh enumeration so the listing never goes stale.
#[derive(Debug)]
pub struct CommandDispatcher {
    config: VaultConfig,
    manager: ModelManager,
}

impl CommandDispatcher {
    /// Create a dispatcher over the given configuration
    #[must_use]
    pub fn new(config: VaultConfig) -> Self {
        let manager = ModelManager::new(config.root().to_path_buf());
        Self { config, manager }
    }

    /// The current configuration
    #[must_use]
    pub fn config(&self) -> &VaultConfig {
        &self.config
    }

    /// Run one command and report the resulting listing and notices
    pub fn dispatch(&mut self, command: Command) -> Outcome {
        let mut notices = Vec::new();

        match command {
            Command::Refresh => {}
            Command::Import(payload) => {
                let outcome = self.manager.import(&payload);
                for failure in &outcome.failures {
                    tracing::warn!("Import failed: {}", failure);
                    notices.push(Notice::from(failure));
                }
            }
            Command::Rename { name, new_name } => {
                if let Err(e) = self.manager.rename(&name, &new_name) {
                    tracing::warn!("Rename failed: {}", e);
                    notices.push(Notice::from(&e));
                }
            }
            Command::Remove { name, confirmed } => {
                if confirmed {
                    if let Err(e) = self.manager.remove(&name) {
                        tracing::warn!("Remove failed: {}", e);
                        notices.push(Notice::from(&e));
                    }
                } else {
                    notices.push(Notice::confirm_remove(&name));
                }
            }
            Command::SetRoot(path) => match self.config.set_root(path) {
                Ok(()) => self.manager.set_root(self.config.root().to_path_buf()),
                Err(e) => {
                    tracing::error!("Root change failed: {}", e);
                    notices.push(Notice::from(&e));
                }
            },
        }

        let entries = match self.manager.list_models() {
            Ok(entries) => entries,
            Err(e) => {
                tracing::error!("Listing failed: {}", e);
                notices.push(Notice::from(&e));
                Vec::new()
            }
        };

        Outcome { entries, notices }
    }
}
