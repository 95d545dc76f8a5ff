// ModelManager implementation for RVC model folders
// Every operation works directly against the configured model root

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{VaultError, VaultResult};
use crate::{INDEX_EXTENSION, WEIGHTS_EXTENSION};

use super::types::{DropPayload, ModelEntry, ModelStatus};

/// Manages model folders under a single root directory
///
/// All operations are synchronous and run on the caller's thread. Large
/// copies block for their duration.
#[derive(Debug, Clone)]
pub struct ModelManager {
    root: PathBuf,
}

/// Result of importing a drop payload
///
/// Per-item failures do not abort the rest of the batch, so both the created
/// folder names and the failures are reported together.
#[derive(Debug, Default)]
pub struct ImportOutcome {
    /// Names of the model folders created under the root, in import order
    pub created: Vec<String>,
    /// Failures for the items that could not be imported
    pub failures: Vec<VaultError>,
}

impl ModelManager {
    /// Create a new manager for the given model root
    pub fn new(root: PathBuf) -> Self {
        // Ensure the root exists up front; enumeration re-checks anyway
        if let Err(e) = fs::create_dir_all(&root) {
            tracing::warn!("Failed to create model root {}: {}", root.display(), e);
        }

        Self { root }
    }

    /// The current model root
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Point the manager at a different model root
    ///
    /// Persistence of the new path is the configuration layer's job; the
    /// next scan creates the directory if it is missing.
    pub fn set_root(&mut self, root: PathBuf) {
        tracing::info!("Model root changed to {}", root.display());
        self.root = root;
    }

    /// Start a lazy scan of the model folders under the root
    ///
    /// Folder names are collected up front so the listing is name-sorted;
    /// each folder's status is derived only when the iterator reaches it.
    /// The scan is restartable: call again for a fresh listing.
    pub fn scan(&self) -> VaultResult<ModelScan> {
        self.ensure_root()?;

        let entries = fs::read_dir(&self.root).map_err(|e| {
            VaultError::config(format!(
                "failed to read model root {}: {e}",
                self.root.display()
            ))
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                VaultError::config(format!(
                    "failed to read model root {}: {e}",
                    self.root.display()
                ))
            })?;
            if entry.path().is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();

        Ok(ModelScan {
            root: self.root.clone(),
            names: names.into_iter(),
        })
    }

    /// Enumerate all model folders as a collected, name-sorted list
    pub fn list_models(&self) -> VaultResult<Vec<ModelEntry>> {
        Ok(self.scan()?.collect())
    }

    /// Import a drop payload into the model root
    ///
    /// A two-item payload of exactly one weights file and one index file is
    /// treated as one logical model; any other multi-item payload imports
    /// each item independently, each with its own collision resolution.
    pub fn import(&self, payload: &DropPayload) -> ImportOutcome {
        let mut outcome = ImportOutcome::default();

        match payload {
            DropPayload::Single(path) => match self.import_item(path) {
                Ok(name) => outcome.created.push(name),
                Err(e) => outcome.failures.push(e),
            },
            DropPayload::Multiple(paths) => {
                if let Some((weights, index)) = Self::as_model_pair(paths) {
                    match self.import_pair(weights, index) {
                        Ok(name) => outcome.created.push(name),
                        Err(e) => outcome.failures.push(e),
                    }
                } else {
                    for path in paths {
                        match self.import_item(path) {
                            Ok(name) => outcome.created.push(name),
                            Err(e) => outcome.failures.push(e),
                        }
                    }
                }
            }
        }

        outcome
    }

    /// Rename a model folder
    ///
    /// Renaming to the current name is a no-op. The rename is an atomic
    /// directory rename; on failure the original folder is left intact.
    pub fn rename(&self, name: &str, new_name: &str) -> VaultResult<()> {
        if new_name.trim().is_empty() {
            return Err(VaultError::invalid_name("name must not be empty"));
        }
        if new_name == name {
            tracing::debug!("Rename of '{}' to itself, nothing to do", name);
            return Ok(());
        }

        let old_path = self.root.join(name);
        if !old_path.is_dir() {
            return Err(VaultError::no_selection(format!(
                "model '{name}' is not in the list"
            )));
        }

        let new_path = self.root.join(new_name);
        if new_path.exists() {
            return Err(VaultError::rename_collision(new_name));
        }

        fs::rename(&old_path, &new_path)
            .map_err(|e| VaultError::rename(name, e.to_string()))?;

        tracing::info!("Renamed model '{}' to '{}'", name, new_name);
        Ok(())
    }

    /// Remove a model folder and all of its contents
    ///
    /// Partial removal on failure is not rolled back; the next scan reflects
    /// whatever state the filesystem ended up in.
    pub fn remove(&self, name: &str) -> VaultResult<()> {
        let path = self.root.join(name);
        if !path.is_dir() {
            return Err(VaultError::no_selection(format!(
                "model '{name}' is not in the list"
            )));
        }

        fs::remove_dir_all(&path).map_err(|e| VaultError::remove(name, e.to_string()))?;

        tracing::info!("Removed model '{}'", name);
        Ok(())
    }

    fn ensure_root(&self) -> VaultResult<()> {
        fs::create_dir_all(&self.root).map_err(|e| {
            VaultError::config(format!(
                "failed to create model root {}: {e}",
                self.root.display()
            ))
        })
    }

    /// Import one dropped file or directory as a model folder
    fn import_item(&self, source: &Path) -> VaultResult<String> {
        if !source.exists() {
            return Err(VaultError::path_not_found(source.display().to_string()));
        }

        // Files are named by their stem, directories by their full name
        let base = if source.is_file() {
            source.file_stem()
        } else {
            source.file_name()
        };
        let base = base
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| VaultError::invalid_name(source.display().to_string()))?;

        let dest_name = self.next_free_name(&base);
        let dest = self.root.join(&dest_name);

        if source.is_file() {
            let file_name = source
                .file_name()
                .ok_or_else(|| VaultError::invalid_name(source.display().to_string()))?;
            fs::create_dir_all(&dest)
                .map_err(|e| VaultError::copy(source.display().to_string(), e.to_string()))?;
            fs::copy(source, dest.join(file_name))
                .map_err(|e| VaultError::copy(source.display().to_string(), e.to_string()))?;
        } else {
            copy_dir_recursive(source, &dest)
                .map_err(|e| VaultError::copy(source.display().to_string(), e.to_string()))?;
        }

        tracing::info!(
            "Imported {} as model '{}'",
            source.display(),
            dest_name
        );
        Ok(dest_name)
    }

    /// Import a weights + index pair as one model folder named by the
    /// weights file's stem
    fn import_pair(&self, weights: &Path, index: &Path) -> VaultResult<String> {
        for source in [weights, index] {
            if !source.exists() {
                return Err(VaultError::path_not_found(source.display().to_string()));
            }
        }

        let base = weights
            .file_stem()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| VaultError::invalid_name(weights.display().to_string()))?;

        let dest_name = self.next_free_name(&base);
        let dest = self.root.join(&dest_name);

        fs::create_dir_all(&dest)
            .map_err(|e| VaultError::copy(weights.display().to_string(), e.to_string()))?;
        for source in [weights, index] {
            let file_name = source
                .file_name()
                .ok_or_else(|| VaultError::invalid_name(source.display().to_string()))?;
            fs::copy(source, dest.join(file_name))
                .map_err(|e| VaultError::copy(source.display().to_string(), e.to_string()))?;
        }

        tracing::info!(
            "Imported model pair {} + {} as '{}'",
            weights.display(),
            index.display(),
            dest_name
        );
        Ok(dest_name)
    }

    /// First free folder name: `base`, then `base_1`, `base_2`, ...
    ///
    /// The counter restarts from 1 on every call; only names the filesystem
    /// currently shows are considered taken.
    fn next_free_name(&self, base: &str) -> String {
        if !self.root.join(base).exists() {
            return base.to_string();
        }
        let mut counter = 1usize;
        loop {
            let candidate = format!("{base}_{counter}");
            if !self.root.join(&candidate).exists() {
                return candidate;
            }
            counter += 1;
        }
    }

    /// A payload is a model pair iff it is exactly one weights file plus
    /// one index file; anything else falls back to independent imports
    fn as_model_pair(paths: &[PathBuf]) -> Option<(&Path, &Path)> {
        if paths.len() != 2 {
            return None;
        }
        let weights = paths.iter().find(|p| has_extension(p, WEIGHTS_EXTENSION))?;
        let index = paths.iter().find(|p| has_extension(p, INDEX_EXTENSION))?;
        Some((weights.as_path(), index.as_path()))
    }
}

/// Lazy, restartable iterator over the model folders of one scan
#[derive(Debug)]
pub struct ModelScan {
    root: PathBuf,
    names: std::vec::IntoIter<String>,
}

impl Iterator for ModelScan {
    type Item = ModelEntry;

    fn next(&mut self) -> Option<ModelEntry> {
        loop {
            let name = self.names.next()?;
            match folder_status(&self.root.join(&name)) {
                Ok(status) => return Some(ModelEntry::new(name, status)),
                // Folder vanished between listing and classification
                Err(e) => tracing::warn!("Skipping model folder '{}': {}", name, e),
            }
        }
    }
}

/// Derive the status of one model folder from its immediate children
fn folder_status(dir: &Path) -> std::io::Result<ModelStatus> {
    let mut has_any = false;
    let mut has_weights = false;
    let mut has_index = false;

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        has_any = true;
        if entry.file_type()?.is_file() {
            let path = entry.path();
            has_weights |= has_extension(&path, WEIGHTS_EXTENSION);
            has_index |= has_extension(&path, INDEX_EXTENSION);
        }
    }

    if !has_any {
        Ok(ModelStatus::Empty)
    } else if has_weights && has_index {
        Ok(ModelStatus::Complete)
    } else {
        Ok(ModelStatus::MissingFiles {
            weights: !has_weights,
            index: !has_index,
        })
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().is_some_and(|e| e == extension)
}

/// Recursively copy a directory, iteratively to keep the stack flat
fn copy_dir_recursive(source: &Path, destination: &Path) -> std::io::Result<()> {
    let mut stack = vec![(source.to_path_buf(), destination.to_path_buf())];

    while let Some((src, dst)) = stack.pop() {
        fs::create_dir_all(&dst)?;
        for entry in fs::read_dir(&src)? {
            let entry = entry?;
            let dst_path = dst.join(entry.file_name());
            if entry.file_type()?.is_dir() {
                stack.push((entry.path(), dst_path));
            } else {
                fs::copy(entry.path(), &dst_path)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_next_free_name_skips_existing() {
        let temp = TempDir::new().unwrap();
        let manager = ModelManager::new(temp.path().to_path_buf());

        assert_eq!(manager.next_free_name("voiceA"), "voiceA");

        fs::create_dir(temp.path().join("voiceA")).unwrap();
        assert_eq!(manager.next_free_name("voiceA"), "voiceA_1");

        fs::create_dir(temp.path().join("voiceA_1")).unwrap();
        assert_eq!(manager.next_free_name("voiceA"), "voiceA_2");
    }

    #[test]
    fn test_folder_status_empty_wins_over_missing() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("model");
        fs::create_dir(&dir).unwrap();

        assert_eq!(folder_status(&dir).unwrap(), ModelStatus::Empty);

        // A subdirectory counts as a child but not as a required file
        fs::create_dir(dir.join("nested")).unwrap();
        assert_eq!(
            folder_status(&dir).unwrap(),
            ModelStatus::MissingFiles {
                weights: true,
                index: true,
            }
        );
    }

    #[test]
    fn test_folder_status_complete() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("model");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("voiceA.pth"), b"weights").unwrap();
        fs::write(dir.join("voiceA.index"), b"index").unwrap();
        fs::write(dir.join("notes.txt"), b"ignored").unwrap();

        assert_eq!(folder_status(&dir).unwrap(), ModelStatus::Complete);
    }

    #[test]
    fn test_as_model_pair() {
        let pair = vec![
            PathBuf::from("/d/voiceA.index"),
            PathBuf::from("/d/voiceA.pth"),
        ];
        let (weights, index) = ModelManager::as_model_pair(&pair).unwrap();
        assert_eq!(weights, Path::new("/d/voiceA.pth"));
        assert_eq!(index, Path::new("/d/voiceA.index"));

        let triple = vec![
            PathBuf::from("/d/voiceA.pth"),
            PathBuf::from("/d/voiceA.index"),
            PathBuf::from("/d/extra.txt"),
        ];
        assert!(ModelManager::as_model_pair(&triple).is_none());

        let two_weights = vec![
            PathBuf::from("/d/voiceA.pth"),
            PathBuf::from("/d/voiceB.pth"),
        ];
        assert!(ModelManager::as_model_pair(&two_weights).is_none());
    }
}
