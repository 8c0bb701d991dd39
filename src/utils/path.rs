//! Path utilities: expand ~, resolve sheet files against the sheets dir.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Resolve a user supplied path. `~` is expanded; relative paths stay
/// relative to the current directory.
pub fn resolve(path: &str) -> PathBuf {
    expand_tilde(path.trim())
}

/// Join `file_name` onto `dir` (after `~` expansion of the dir).
pub fn in_dir(dir: &str, file_name: &str) -> PathBuf {
    expand_tilde(dir).join(Path::new(file_name))
}
