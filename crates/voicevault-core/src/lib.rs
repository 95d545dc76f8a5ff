//! # Voicevault Core
//!
//! Library for organizing RVC voice-conversion model folders on a local
//! filesystem.
//!
//! ## Features
//!
//! - Enumerate and validate model folders under a configured, persisted root
//! - Import dropped files and folders, pairing a weights file with its index
//! - Rename and remove model folders with collision checks
//! - Presentation-agnostic command dispatch for any GUI frontend
//!
//! ## Example
//!
//! ```rust,no_run
//! use voicevault_core::{Command, CommandDispatcher, VaultConfig};
//!
//! let mut dispatcher = CommandDispatcher::new(VaultConfig::load());
//! let outcome = dispatcher.dispatch(Command::Refresh);
//! for entry in &outcome.entries {
//!     println!("{}", entry.display_name());
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod commands;
pub mod config;
pub mod error;
pub mod model;

// Re-export main types for convenience
pub use commands::{Command, CommandDispatcher, Notice, NoticeKind, Outcome};
pub use config::VaultConfig;
pub use error::{VaultError, VaultResult};
pub use model::{DropPayload, ImportOutcome, ModelEntry, ModelManager, ModelScan, ModelStatus};

/// Version information for the voicevault-core crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Extension of the primary weights file required in a model folder
pub const WEIGHTS_EXTENSION: &str = "pth";

/// Extension of the retrieval index file required in a model folder
pub const INDEX_EXTENSION: &str = "index";

/// Interval at which frontends should re-enumerate the model root
pub const REFRESH_INTERVAL: std::time::Duration = std::time::Duration::from_secs(30);
