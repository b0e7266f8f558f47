//! Saved prompt store: one `.txt` file per named prompt.

use anyhow::{Result, bail};
use std::path::{Path, PathBuf};

/// A directory of named prompt files.
#[derive(Debug, Clone)]
pub struct PromptStore {
    dir: PathBuf,
}

impl PromptStore {
    /// Create a store rooted at the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The store directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Saved prompt names, sorted. A missing directory is an empty store.
    pub fn list(&self) -> Result<Vec<String>> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "txt")
                && let Some(stem) = path.file_stem().and_then(|stem| stem.to_str())
            {
                names.push(stem.to_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Load a saved prompt. Returns `None` when the name is unknown.
    pub fn load(&self, name: &str) -> Result<Option<String>> {
        let path = self.path_for(name)?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Save a prompt under the given name, replacing any existing one.
    pub fn save(&self, name: &str, content: &str) -> Result<()> {
        let path = self.path_for(name)?;
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Resolve the file path for a name, rejecting path traversal.
    fn path_for(&self, name: &str) -> Result<PathBuf> {
        if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
            bail!("invalid prompt name: {name:?}");
        }
        Ok(self.dir.join(format!("{name}.txt")))
    }
}
