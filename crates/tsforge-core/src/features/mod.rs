//! Feature installers
//!
//! Each feature copies its template fragment into the project and, when installs are
//! enabled, adds a fixed set of dev dependencies through the configured package manager.
//! When installs are disabled the dependencies are reported back as a
//! [`Notice::ManualInstallRequired`] instead of being dropped silently.

mod commit_hooks;
mod editor_config;
mod eslint;
mod git;
mod nodemon;
mod typescript;

use crate::config::{Configuration, FeatureFlags};
use crate::error::ScaffoldError;
use crate::runtime::CommandRunner;
use crate::templates::{copy_template, CopyReport, Fragment};
use std::fmt;
use std::path::{Path, PathBuf};

/// A user-selectable capability backed by one installer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Git,
    TypeScript,
    Eslint,
    Nodemon,
    CommitHooks,
    EditorConfig,
}

impl Feature {
    pub fn display_name(&self) -> &'static str {
        match self {
            Feature::Git => "git",
            Feature::TypeScript => "TypeScript",
            Feature::Eslint => "ESLint",
            Feature::Nodemon => "nodemon",
            Feature::CommitHooks => "Commit hooks",
            Feature::EditorConfig => "EditorConfig",
        }
    }

    /// Dev dependencies this feature adds to the project
    pub fn packages(&self) -> &'static [&'static str] {
        match self {
            Feature::TypeScript => &["@types/node", "typescript", "ts-node"],
            Feature::Eslint => &[
                "eslint",
                "eslint-config-airbnb-base",
                "eslint-plugin-import",
                "@typescript-eslint/eslint-plugin",
                "@typescript-eslint/parser",
            ],
            Feature::Nodemon => &["nodemon"],
            // Hook scripts and `husky install` follow the v8 layout
            Feature::CommitHooks => &[
                "husky@8",
                "@commitlint/cli",
                "@commitlint/config-conventional",
            ],
            Feature::Git | Feature::EditorConfig => &[],
        }
    }

    /// Features that must be enabled for this one to be installed
    pub fn requires(&self) -> &'static [Feature] {
        match self {
            Feature::CommitHooks => &[Feature::Git, Feature::Eslint],
            Feature::Nodemon => &[Feature::TypeScript],
            _ => &[],
        }
    }

    /// Whether the flag backing this feature is set
    pub fn is_enabled(&self, flags: &FeatureFlags) -> bool {
        match self {
            Feature::Git => flags.git,
            Feature::TypeScript => flags.ts,
            Feature::Eslint => flags.eslint,
            Feature::Nodemon => flags.nodemon,
            Feature::CommitHooks => flags.commit_lint,
            Feature::EditorConfig => flags.editor_config,
        }
    }

    /// Fail with `FeaturePrecondition` if a required feature is disabled
    pub fn check_preconditions(&self, flags: &FeatureFlags) -> Result<(), ScaffoldError> {
        let missing: Vec<Feature> = self
            .requires()
            .iter()
            .filter(|f| !f.is_enabled(flags))
            .copied()
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ScaffoldError::FeaturePrecondition {
                feature: *self,
                missing,
            })
        }
    }

    /// Run this feature's installer
    ///
    /// Preconditions are checked before anything is written or launched.
    pub async fn install<R: CommandRunner>(
        &self,
        ctx: &InstallContext<'_, R>,
    ) -> Result<StepOutcome, ScaffoldError> {
        self.check_preconditions(&ctx.config.features)?;

        match self {
            Feature::Git => git::install(ctx).await,
            Feature::TypeScript => typescript::install(ctx).await,
            Feature::Eslint => eslint::install(ctx).await,
            Feature::Nodemon => nodemon::install(ctx).await,
            Feature::CommitHooks => commit_hooks::install(ctx).await,
            Feature::EditorConfig => editor_config::install(ctx).await,
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Structured messages a step hands back besides success
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Installs were skipped; the user has to add these packages themselves
    ManualInstallRequired {
        feature: Feature,
        packages: Vec<&'static str>,
        command: String,
        follow_up: Option<String>,
    },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::ManualInstallRequired {
                feature,
                command,
                follow_up,
                ..
            } => {
                write!(f, "{} dependencies were not installed. Run: {}", feature, command)?;
                if let Some(follow_up) = follow_up {
                    write!(f, " then: {}", follow_up)?;
                }
                Ok(())
            }
        }
    }
}

/// What a step did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepOutcome {
    pub copied: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    pub notices: Vec<Notice>,
}

impl StepOutcome {
    fn record(&mut self, report: CopyReport) {
        self.copied.extend(report.copied);
        self.skipped.extend(report.skipped);
    }
}

/// Shared collaborators for installers
pub struct InstallContext<'a, R: CommandRunner> {
    pub config: &'a Configuration,
    pub runner: &'a R,
}

impl<'a, R: CommandRunner> InstallContext<'a, R> {
    pub fn new(config: &'a Configuration, runner: &'a R) -> Self {
        Self { config, runner }
    }

    fn target(&self) -> &Path {
        &self.config.target_directory
    }

    /// Copy a fragment into a directory of the project
    async fn copy(
        &self,
        fragment: Fragment,
        destination: &Path,
    ) -> Result<CopyReport, ScaffoldError> {
        copy_template(&self.config.template_path(fragment.dir_name()), destination).await
    }

    /// Run a program in the project directory
    async fn run(&self, program: &str, args: Vec<String>) -> Result<(), ScaffoldError> {
        self.runner.run(program, &args, self.target()).await
    }

    /// Add a feature's dev dependencies, or describe how to when installs are off
    ///
    /// Returns `Some(notice)` when the install was skipped.
    async fn install_packages(
        &self,
        feature: Feature,
        follow_up: Option<String>,
    ) -> Result<Option<Notice>, ScaffoldError> {
        let packages = feature.packages();
        let pm = self.config.package_manager;
        let args = pm.dev_install_args(packages);

        if !self.config.run_install {
            return Ok(Some(Notice::ManualInstallRequired {
                feature,
                packages: packages.to_vec(),
                command: crate::error::display_invocation(pm.binary(), &args),
                follow_up,
            }));
        }

        self.run(pm.binary(), args).await?;
        Ok(None)
    }
}
