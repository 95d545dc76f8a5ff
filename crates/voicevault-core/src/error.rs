//! Error types for Voicevault model-folder operations.


/// Result type alias for Voicevault operations
pub type VaultResult<T> = Result<T, VaultError>;

/// Main error type for model-folder operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum VaultError {
    /// A dropped or referenced path does not exist
    #[error("Path does not exist: {path}")]
    PathNotFound {
        /// The path that could not be found
        path: String,
    },

    /// Copying a file or folder into the model root failed
    #[error("Failed to copy '{path}': {message}")]
    CopyFailure {
        /// Source path of the failed copy
        path: String,
        /// Underlying cause reported by the filesystem
        message: String,
    },

    /// The rename target name is already taken by another model folder
    #[error("A model named '{name}' already exists")]
    RenameCollision {
        /// The colliding folder name
        name: String,
    },

    /// Renaming a model folder failed at the filesystem level
    #[error("Failed to rename model '{name}': {message}")]
    RenameFailure {
        /// Name of the model that could not be renamed
        name: String,
        /// Underlying cause reported by the filesystem
        message: String,
    },

    /// Removing a model folder failed at the filesystem level
    #[error("Failed to remove model '{name}': {message}")]
    RemoveFailure {
        /// Name of the model that could not be removed
        name: String,
        /// Underlying cause reported by the filesystem
        message: String,
    },

    /// An operation referenced a model that is not currently listed
    #[error("No model selected: {message}")]
    NoSelection {
        /// What the caller asked for
        message: String,
    },

    /// A user-supplied model name is not usable
    #[error("Invalid model name: {message}")]
    InvalidName {
        /// Why the name was rejected
        message: String,
    },

    /// Persisting or reading the model root configuration failed
    #[error("Configuration error: {message}")]
    ConfigFailure {
        /// Error message describing the configuration issue
        message: String,
    },
}

impl VaultError {
    /// Create a new path-not-found error
    #[must_use]
    pub fn path_not_found<S: Into<String>>(path: S) -> Self {
        Self::PathNotFound { path: path.into() }
    }

    /// Create a new copy failure error
    #[must_use]
    pub fn copy<S: Into<String>, M: Into<String>>(path: S, message: M) -> Self {
        Self::CopyFailure {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new rename collision error
    #[must_use]
    pub fn rename_collision<S: Into<String>>(name: S) -> Self {
        Self::RenameCollision { name: name.into() }
    }

    /// Create a new rename failure error
    #[must_use]
    pub fn rename<S: Into<String>, M: Into<String>>(name: S, message: M) -> Self {
        Self::RenameFailure {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a new remove failure error
    #[must_use]
    pub fn remove<S: Into<String>, M: Into<String>>(name: S, message: M) -> Self {
        Self::RemoveFailure {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a new no-selection error
    #[must_use]
    pub fn no_selection<S: Into<String>>(message: S) -> Self {
        Self::NoSelection {
            message: message.into(),
        }
    }

    /// Create a new invalid name error
    #[must_use]
    pub fn invalid_name<S: Into<String>>(message: S) -> Self {
        Self::InvalidName {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    #[must_use]
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::ConfigFailure {
            message: message.into(),
        }
    }

    /// Check if this error is due to invalid user input rather than an I/O fault
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::RenameCollision { .. } | Self::NoSelection { .. } | Self::InvalidName { .. }
        )
    }

    /// Get the error category for logging/metrics
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::PathNotFound { .. } => "path_not_found",
            Self::CopyFailure { .. } => "copy",
            Self::RenameCollision { .. } => "rename_collision",
            Self::RenameFailure { .. } => "rename",
            Self::RemoveFailure { .. } => "remove",
            Self::NoSelection { .. } => "selection",
            Self::InvalidName { .. } => "name",
            Self::ConfigFailure { .. } => "configuration",
        }
    }
}
