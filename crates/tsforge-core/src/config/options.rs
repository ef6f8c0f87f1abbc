//! Project options and the resolved configuration record

use crate::error::ScaffoldError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

/// Supported package managers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Yarn,
    #[default]
    Pnpm,
}

impl PackageManager {
    /// Program name on PATH
    pub fn binary(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
        }
    }

    /// Subcommand that adds a dependency
    pub fn install_alias(&self) -> &'static str {
        match self {
            PackageManager::Yarn => "add",
            PackageManager::Npm | PackageManager::Pnpm => "install",
        }
    }

    /// Arguments for `<binary> <alias> -D <packages…>`
    pub fn dev_install_args(&self, packages: &[&str]) -> Vec<String> {
        let mut args = vec![self.install_alias().to_string(), "-D".to_string()];
        args.extend(packages.iter().map(|p| p.to_string()));
        args
    }

    /// Program and arguments that run a locally installed tool
    pub fn exec(&self, tool: &str, args: &[&str]) -> (&'static str, Vec<String>) {
        let mut full_args = Vec::new();
        let program = match self {
            PackageManager::Npm => "npx",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => {
                full_args.push("exec".to_string());
                "pnpm"
            }
        };
        full_args.push(tool.to_string());
        full_args.extend(args.iter().map(|a| a.to_string()));
        (program, full_args)
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.binary())
    }
}

impl FromStr for PackageManager {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "npm" => Ok(PackageManager::Npm),
            "yarn" => Ok(PackageManager::Yarn),
            "pnpm" => Ok(PackageManager::Pnpm),
            other => Err(ScaffoldError::config(format!(
                "Unknown package manager '{}' (expected npm, yarn or pnpm)",
                other
            ))),
        }
    }
}

/// Options collected by the CLI layer (flags, presets) before resolution
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ProjectOptions {
    /// Folder to create inside the working directory
    pub name: Option<String>,

    /// Package manager used for dependency installs
    pub package_manager: Option<PackageManager>,

    /// Run dependency installs (otherwise print what to install)
    pub run_install: bool,

    pub git: bool,
    pub ts: bool,
    pub eslint: bool,
    pub nodemon: bool,
    pub editor_config: bool,

    /// Commit hooks (husky + commitlint)
    #[serde(alias = "pre_commit_hook")]
    pub commit_lint: bool,
}

impl ProjectOptions {
    /// Every feature on, installs on, default package manager
    pub fn all_features() -> Self {
        Self {
            name: None,
            package_manager: Some(PackageManager::default()),
            run_install: true,
            git: true,
            ts: true,
            eslint: true,
            nodemon: true,
            editor_config: true,
            commit_lint: true,
        }
    }

    /// Combine two option sets: flags are OR-ed, `other`'s name and package manager win
    pub fn merge(&self, other: &ProjectOptions) -> ProjectOptions {
        ProjectOptions {
            name: other.name.clone().or_else(|| self.name.clone()),
            package_manager: other.package_manager.or(self.package_manager),
            run_install: self.run_install || other.run_install,
            git: self.git || other.git,
            ts: self.ts || other.ts,
            eslint: self.eslint || other.eslint,
            nodemon: self.nodemon || other.nodemon,
            editor_config: self.editor_config || other.editor_config,
            commit_lint: self.commit_lint || other.commit_lint,
        }
    }
}

/// Feature selection carried by the resolved configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    pub git: bool,
    pub ts: bool,
    pub eslint: bool,
    pub nodemon: bool,
    pub editor_config: bool,
    pub commit_lint: bool,
}

/// Resolved, read-only input for every component of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub target_directory: PathBuf,
    pub template_directory: PathBuf,
    pub package_manager: PackageManager,
    pub run_install: bool,
    pub features: FeatureFlags,
    pub name: Option<String>,
}

impl Configuration {
    /// Resolve options against a working directory and a template root
    pub fn new(
        options: ProjectOptions,
        cwd: &Path,
        template_directory: PathBuf,
    ) -> Result<Self, ScaffoldError> {
        let name = match options.name {
            Some(name) => Some(validate_name(name)?),
            None => None,
        };

        let target_directory = match &name {
            Some(name) => cwd.join(name),
            None => cwd.to_path_buf(),
        };

        Ok(Self {
            target_directory,
            template_directory,
            package_manager: options.package_manager.unwrap_or_default(),
            run_install: options.run_install,
            features: FeatureFlags {
                git: options.git,
                ts: options.ts,
                eslint: options.eslint,
                nodemon: options.nodemon,
                editor_config: options.editor_config,
                commit_lint: options.commit_lint,
            },
            name,
        })
    }

    /// Path of a template fragment inside the template root
    pub fn template_path(&self, fragment: &str) -> PathBuf {
        self.template_directory.join(fragment)
    }
}

/// A project name must be exactly one normal path component
fn validate_name(name: String) -> Result<String, ScaffoldError> {
    let trimmed = name.trim();
    let mut components = Path::new(trimmed).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(trimmed.to_string()),
        _ => Err(ScaffoldError::config(format!(
            "Invalid project name '{}': expected a single folder name",
            name
        ))),
    }
}
