use std::path::{Path, PathBuf};

use log::warn;
use npcgen_core::core_api::{CoreError, CoreErrorCode};

pub const BASIC_PORTRAIT: &str = "placeholder.png";

pub fn load_portrait_path(portraits_dir: &Path, file_name: &str) -> Result<PathBuf, CoreError> {
    let path = portraits_dir.join(file_name);
    if path.is_file() {
        Ok(path)
    } else {
        Err(CoreError::new(
            CoreErrorCode::ImageNotFound,
            format!("portrait {} does not exist", path.display()),
        ))
    }
}

/// A missing portrait silently falls back to the placeholder path.
pub fn resolve_portrait(portraits_dir: &Path, file_name: &str) -> PathBuf {
    load_portrait_path(portraits_dir, file_name).unwrap_or_else(|e| {
        warn!("{e}; using placeholder");
        portraits_dir.join(BASIC_PORTRAIT)
    })
}
