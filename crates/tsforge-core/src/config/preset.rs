//! YAML presets for project options
//!
//! A preset is a `ProjectOptions` record stored on disk so teams can share one
//! feature selection:
//!
//! ```yaml
//! package_manager: yarn
//! run_install: true
//! ts: true
//! eslint: true
//! git: true
//! commit_lint: true
//! ```

use super::options::ProjectOptions;
use anyhow::{Context, Result};
use std::path::Path;

/// Load project options from a YAML preset file
pub fn load_preset(path: &Path) -> Result<ProjectOptions> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read preset {}", path.display()))?;
    parse_preset(&content).with_context(|| format!("Failed to parse preset {}", path.display()))
}

/// Parse project options from YAML text
pub fn parse_preset(content: &str) -> Result<ProjectOptions> {
    if content.trim().is_empty() {
        return Ok(ProjectOptions::default());
    }
    Ok(serde_yaml::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PackageManager;

    #[test]
    fn test_parse_preset_fields() {
        let options = parse_preset(
            "name: demo\npackage_manager: yarn\nts: true\npre_commit_hook: true\n",
        )
        .unwrap();
        assert_eq!(options.name.as_deref(), Some("demo"));
        assert_eq!(options.package_manager, Some(PackageManager::Yarn));
        assert!(options.ts);
        assert!(options.commit_lint);
        assert!(!options.git);
    }

    #[test]
    fn test_empty_preset_is_default() {
        assert_eq!(parse_preset("  \n").unwrap(), ProjectOptions::default());
    }

    #[test]
    fn test_unknown_package_manager_is_rejected() {
        assert!(parse_preset("package_manager: bun\n").is_err());
    }

    #[test]
    fn test_load_preset_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_preset(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read preset"));
    }
}
