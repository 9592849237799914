//! Utility functions and helpers

use crate::error::{Result, SweepError};
use std::path::PathBuf;

/// File system utilities
pub struct FileUtils;

impl FileUtils {
    /// Expand a leading tilde (~) in file paths.
    ///
    /// Only the current user's home is expanded (`~` or `~/...`);
    /// a `~user/...` reference to another user's home is rejected
    /// rather than silently misread as `<home>/user/...`.
    pub fn expand_path(path: &str) -> Result<PathBuf> {
        let rest = match path.strip_prefix('~') {
            None => return Ok(PathBuf::from(path)),
            Some(rest) => rest,
        };
        if !rest.is_empty() && !rest.starts_with(['/', '\\']) {
            return Err(SweepError::Config(format!(
                "Cannot expand another user's home directory: \"{path}\""
            )));
        }
        if let Some(home_dir) = dirs::home_dir() {
            Ok(home_dir.join(rest.trim_start_matches(['/', '\\'])))
        } else {
            Err(SweepError::Config(
                "Cannot determine home directory".to_string(),
            ))
        }
    }

    /// Whether a profile argument names a filesystem path rather than a
    /// profile directory name.
    pub fn is_path_like(value: &str) -> bool {
        value.contains('/') || value.contains('\\') || value.starts_with('~')
    }
}
