//! Model folder management for the vault
//! Enumerates, validates, imports, renames, and removes model folders

/// Model manager for filesystem operations under the model root
pub mod manager;
/// Model entry types and drop payloads
pub mod types;

pub use manager::{ImportOutcome, ModelManager, ModelScan};
pub use types::{DropPayload, ModelEntry, ModelStatus};
