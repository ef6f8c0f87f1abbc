//! Repository initialization

use super::{InstallContext, StepOutcome};
use crate::error::ScaffoldError;
use crate::runtime::CommandRunner;
use crate::templates::Fragment;

/// `git init`, then the ignore file
pub(super) async fn install<R: CommandRunner>(
    ctx: &InstallContext<'_, R>,
) -> Result<StepOutcome, ScaffoldError> {
    ctx.run("git", vec!["init".to_string()]).await?;

    let mut outcome = StepOutcome::default();
    outcome.record(ctx.copy(Fragment::Git, ctx.target()).await?);
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{config_in, files_under};
    use super::super::{Feature, InstallContext};
    use crate::config::ProjectOptions;
    use crate::runtime::command::testing::RecordingRunner;

    #[tokio::test]
    async fn test_git_init_then_gitignore() {
        let root = tempfile::tempdir().unwrap();
        let config = config_in(
            root.path(),
            ProjectOptions {
                git: true,
                ..Default::default()
            },
        );
        let runner = RecordingRunner::new();

        Feature::Git
            .install(&InstallContext::new(&config, &runner))
            .await
            .unwrap();

        assert_eq!(runner.lines(), vec!["git init"]);
        assert_eq!(runner.calls()[0].cwd, config.target_directory);
        assert!(files_under(&config.target_directory).contains(&".gitignore".to_string()));
    }

    #[tokio::test]
    async fn test_failed_init_copies_nothing() {
        let root = tempfile::tempdir().unwrap();
        let config = config_in(root.path(), ProjectOptions::default());
        let runner = RecordingRunner::failing_on("git init");

        let result = Feature::Git
            .install(&InstallContext::new(&config, &runner))
            .await;

        assert!(result.is_err());
        assert!(!config.target_directory.join(".gitignore").exists());
    }
}
