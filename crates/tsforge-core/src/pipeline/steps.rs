//! The step list for a run

use crate::config::Configuration;
use crate::error::ScaffoldError;
use crate::features::{Feature, InstallContext, StepOutcome};
use crate::runtime::CommandRunner;

/// Unit of work behind a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Create the named project folder
    CreateFolder,
    /// Run a feature installer
    Install(Feature),
}

impl Action {
    pub async fn run<R: CommandRunner>(
        &self,
        ctx: &InstallContext<'_, R>,
    ) -> Result<StepOutcome, ScaffoldError> {
        match self {
            Action::CreateFolder => {
                let target = &ctx.config.target_directory;
                tokio::fs::create_dir_all(target)
                    .await
                    .map_err(|e| ScaffoldError::io(target, e))?;
                Ok(StepOutcome::default())
            }
            Action::Install(feature) => feature.install(ctx).await,
        }
    }
}

/// One entry of the pipeline
#[derive(Clone, Copy)]
pub struct Step {
    pub title: &'static str,
    pub enabled_by: fn(&Configuration) -> bool,
    pub action: Action,
}

/// Build the step list; each step's predicate decides whether it runs
///
/// The order is the dependency order: the folder exists before anything is written, git
/// before anything that touches the repository, TypeScript before nodemon and ESLint
/// before commit hooks.
pub fn build_steps() -> Vec<Step> {
    vec![
        Step {
            title: "Create project folder",
            enabled_by: |c| c.name.is_some(),
            action: Action::CreateFolder,
        },
        Step {
            title: "Initialize git repository",
            enabled_by: |c| c.features.git,
            action: Action::Install(Feature::Git),
        },
        Step {
            title: "Integrate TypeScript",
            enabled_by: |c| c.features.ts,
            action: Action::Install(Feature::TypeScript),
        },
        Step {
            title: "Integrate ESLint",
            enabled_by: |c| c.features.eslint,
            action: Action::Install(Feature::Eslint),
        },
        Step {
            title: "Integrate nodemon",
            enabled_by: |c| c.features.nodemon,
            action: Action::Install(Feature::Nodemon),
        },
        Step {
            title: "Create .editorconfig",
            enabled_by: |c| c.features.editor_config,
            action: Action::Install(Feature::EditorConfig),
        },
        Step {
            title: "Integrate commit hooks",
            enabled_by: |c| c.features.commit_lint,
            action: Action::Install(Feature::CommitHooks),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectOptions;
    use std::path::{Path, PathBuf};

    fn enabled_actions(options: ProjectOptions) -> Vec<Action> {
        let config =
            Configuration::new(options, Path::new("/work"), PathBuf::from("/templates")).unwrap();
        build_steps()
            .into_iter()
            .filter(|s| (s.enabled_by)(&config))
            .map(|s| s.action)
            .collect()
    }

    fn position(actions: &[Action], action: Action) -> usize {
        actions.iter().position(|a| *a == action).unwrap()
    }

    #[test]
    fn test_demo_scenario_order() {
        let actions = enabled_actions(ProjectOptions {
            name: Some("demo".to_string()),
            ts: true,
            eslint: true,
            git: true,
            commit_lint: true,
            run_install: true,
            ..Default::default()
        });
        assert_eq!(
            actions,
            vec![
                Action::CreateFolder,
                Action::Install(Feature::Git),
                Action::Install(Feature::TypeScript),
                Action::Install(Feature::Eslint),
                Action::Install(Feature::CommitHooks),
            ]
        );
    }

    #[test]
    fn test_dependencies_run_first() {
        let actions: Vec<Action> = build_steps().iter().map(|s| s.action).collect();

        for feature in [
            Feature::Git,
            Feature::TypeScript,
            Feature::Eslint,
            Feature::Nodemon,
            Feature::CommitHooks,
            Feature::EditorConfig,
        ] {
            let at = position(&actions, Action::Install(feature));
            assert!(position(&actions, Action::CreateFolder) < at);
            for required in feature.requires() {
                assert!(position(&actions, Action::Install(*required)) < at);
            }
        }
    }

    #[test]
    fn test_nothing_enabled_without_flags() {
        assert!(enabled_actions(ProjectOptions::default()).is_empty());
        assert_eq!(
            enabled_actions(ProjectOptions {
                name: Some("only-folder".to_string()),
                ..Default::default()
            }),
            vec![Action::CreateFolder]
        );
    }

    #[test]
    fn test_every_feature_has_one_step() {
        let installs = build_steps()
            .iter()
            .filter(|s| matches!(s.action, Action::Install(_)))
            .count();
        assert_eq!(installs, 6);
    }
}
