use std::fs;
use std::path::PathBuf;

use crate::core_api::{CoreError, CoreErrorCode};

pub const CONFIG_FILES_DIR: &str = "config_files";
pub const LANGUAGES_DIR: &str = "languages";
pub const CHARACTERS_DIR: &str = "characters";
pub const PORTRAITS_DIR: &str = "portraits";

/// Resolves the on-disk data layout relative to one root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDirs {
    root: PathBuf,
}

impl DataDirs {
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn config_files(&self) -> PathBuf {
        self.root.join(CONFIG_FILES_DIR)
    }

    pub fn languages(&self) -> PathBuf {
        self.root.join(LANGUAGES_DIR)
    }

    pub fn characters(&self) -> PathBuf {
        self.root.join(CHARACTERS_DIR)
    }

    pub fn portraits(&self) -> PathBuf {
        self.root.join(PORTRAITS_DIR)
    }

    /// Creates the character save directory if it does not exist yet.
    pub fn ensure_characters_dir(&self) -> Result<PathBuf, CoreError> {
        let dir = self.characters();
        fs::create_dir_all(&dir).map_err(|e| {
            CoreError::new(
                CoreErrorCode::Io,
                format!("failed to create {}: {e}", dir.display()),
            )
        })?;
        Ok(dir)
    }
}
