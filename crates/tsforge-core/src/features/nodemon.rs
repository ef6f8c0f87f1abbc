//! Hot reload through nodemon
//!
//! The shipped `nodemon.json` runs `ts-node`, so TypeScript must be part of the project.

use super::{Feature, InstallContext, StepOutcome};
use crate::error::ScaffoldError;
use crate::runtime::CommandRunner;
use crate::templates::Fragment;

pub(super) async fn install<R: CommandRunner>(
    ctx: &InstallContext<'_, R>,
) -> Result<StepOutcome, ScaffoldError> {
    let mut outcome = StepOutcome::default();
    outcome.record(ctx.copy(Fragment::Nodemon, ctx.target()).await?);
    outcome
        .notices
        .extend(ctx.install_packages(Feature::Nodemon, None).await?);
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{config_in, files_under};
    use super::super::{Feature, InstallContext};
    use crate::config::ProjectOptions;
    use crate::error::ScaffoldError;
    use crate::runtime::command::testing::RecordingRunner;

    #[tokio::test]
    async fn test_refuses_without_typescript() {
        let root = tempfile::tempdir().unwrap();
        let config = config_in(
            root.path(),
            ProjectOptions {
                nodemon: true,
                run_install: true,
                ..Default::default()
            },
        );
        let runner = RecordingRunner::new();

        let err = Feature::Nodemon
            .install(&InstallContext::new(&config, &runner))
            .await
            .unwrap_err();

        assert!(matches!(err, ScaffoldError::FeaturePrecondition { .. }));
        assert!(runner.calls().is_empty());
        assert!(files_under(&config.target_directory).is_empty());
    }

    #[tokio::test]
    async fn test_copies_config_with_typescript() {
        let root = tempfile::tempdir().unwrap();
        let config = config_in(
            root.path(),
            ProjectOptions {
                nodemon: true,
                ts: true,
                run_install: true,
                ..Default::default()
            },
        );
        let runner = RecordingRunner::new();

        Feature::Nodemon
            .install(&InstallContext::new(&config, &runner))
            .await
            .unwrap();

        assert_eq!(runner.lines(), vec!["pnpm install -D nodemon"]);
        assert!(config.target_directory.join("nodemon.json").is_file());
    }
}
