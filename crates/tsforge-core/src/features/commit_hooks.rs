//! Commit hooks: husky running ESLint before commits and commitlint on messages
//!
//! Hooks live in the repository and call ESLint, so both git and ESLint must already be
//! configured; the installer refuses to half-configure hooks otherwise.

use super::{Feature, InstallContext, StepOutcome};
use crate::error::{display_invocation, ScaffoldError};
use crate::runtime::CommandRunner;
use crate::templates::Fragment;

/// Directory husky reads hook scripts from
pub const HOOKS_DIR: &str = ".husky";

pub(super) async fn install<R: CommandRunner>(
    ctx: &InstallContext<'_, R>,
) -> Result<StepOutcome, ScaffoldError> {
    let (program, args) = ctx.config.package_manager.exec("husky", &["install"]);
    let mut outcome = StepOutcome::default();

    let notice = ctx
        .install_packages(
            Feature::CommitHooks,
            Some(display_invocation(program, &args)),
        )
        .await?;
    match notice {
        Some(notice) => outcome.notices.push(notice),
        None => ctx.run(program, args).await?,
    }

    let target = ctx.target();
    outcome.record(ctx.copy(Fragment::Husky, &target.join(HOOKS_DIR)).await?);
    outcome.record(ctx.copy(Fragment::CommitLint, target).await?);
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{config_in, files_under};
    use super::super::{Feature, InstallContext, Notice};
    use crate::config::{PackageManager, ProjectOptions};
    use crate::error::ScaffoldError;
    use crate::runtime::command::testing::RecordingRunner;

    fn hook_options() -> ProjectOptions {
        ProjectOptions {
            git: true,
            eslint: true,
            commit_lint: true,
            run_install: true,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_installs_activates_then_copies() {
        let root = tempfile::tempdir().unwrap();
        let config = config_in(root.path(), hook_options());
        let runner = RecordingRunner::new();

        Feature::CommitHooks
            .install(&InstallContext::new(&config, &runner))
            .await
            .unwrap();

        assert_eq!(
            runner.lines(),
            vec![
                "pnpm install -D husky@8 @commitlint/cli @commitlint/config-conventional",
                "pnpm exec husky install",
            ]
        );
        let files = files_under(&config.target_directory);
        assert!(files.contains(&".husky/pre-commit".to_string()));
        assert!(files.contains(&".husky/commit-msg".to_string()));
        assert!(files.contains(&"commitlint.config.js".to_string()));
    }

    #[tokio::test]
    async fn test_without_git_fails_before_any_write() {
        for eslint in [true, false] {
            let root = tempfile::tempdir().unwrap();
            let config = config_in(
                root.path(),
                ProjectOptions {
                    git: false,
                    eslint,
                    ..hook_options()
                },
            );
            let runner = RecordingRunner::new();

            let err = Feature::CommitHooks
                .install(&InstallContext::new(&config, &runner))
                .await
                .unwrap_err();

            assert!(matches!(
                err,
                ScaffoldError::FeaturePrecondition {
                    feature: Feature::CommitHooks,
                    ..
                }
            ));
            assert!(runner.calls().is_empty());
            assert!(files_under(&config.target_directory).is_empty());
        }
    }

    #[tokio::test]
    async fn test_skipped_install_explains_activation() {
        let root = tempfile::tempdir().unwrap();
        let config = config_in(
            root.path(),
            ProjectOptions {
                run_install: false,
                package_manager: Some(PackageManager::Npm),
                ..hook_options()
            },
        );
        let runner = RecordingRunner::new();

        let outcome = Feature::CommitHooks
            .install(&InstallContext::new(&config, &runner))
            .await
            .unwrap();

        assert!(runner.calls().is_empty());
        match &outcome.notices[..] {
            [Notice::ManualInstallRequired {
                command, follow_up, ..
            }] => {
                assert_eq!(
                    command,
                    "npm install -D husky@8 @commitlint/cli @commitlint/config-conventional"
                );
                assert_eq!(follow_up.as_deref(), Some("npx husky install"));
            }
            other => panic!("unexpected notices: {other:?}"),
        }
        assert!(config.target_directory.join(".husky/pre-commit").is_file());
    }
}
