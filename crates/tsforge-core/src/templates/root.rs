//! Locating and validating the template root

use crate::error::ScaffoldError;
use std::path::{Path, PathBuf};

/// Environment variable overriding the template root
pub const TEMPLATE_DIR_ENV: &str = "TSFORGE_TEMPLATE_DIR";

/// Resolve the template root
///
/// Order: explicit override, `TSFORGE_TEMPLATE_DIR`, `templates/` next to the executable,
/// `../share/tsforge/templates` relative to the executable, then the workspace copy.
pub fn resolve_template_root(override_dir: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir;
    }
    if let Ok(dir) = std::env::var(TEMPLATE_DIR_ENV) {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }

    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    candidates(exe_dir.as_deref())
        .into_iter()
        .find(|dir| dir.is_dir())
        .unwrap_or_else(workspace_templates)
}

fn candidates(exe_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(exe_dir) = exe_dir {
        dirs.push(exe_dir.join("templates"));
        dirs.push(exe_dir.join("..").join("share").join("tsforge").join("templates"));
    }
    dirs.push(workspace_templates());
    dirs
}

fn workspace_templates() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("templates")
}

/// The template root must be a readable directory
pub fn validate_template_root(path: &Path) -> Result<(), ScaffoldError> {
    if !path.is_dir() {
        return Err(ScaffoldError::config_at("Template directory not found", path));
    }
    std::fs::read_dir(path).map(|_| ()).map_err(|e| {
        ScaffoldError::config_at(format!("Template directory unreadable: {}", e), path)
    })
}
