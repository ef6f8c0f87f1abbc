//! ESLint configuration

use super::{Feature, InstallContext, StepOutcome};
use crate::error::ScaffoldError;
use crate::runtime::CommandRunner;
use crate::templates::Fragment;

pub(super) async fn install<R: CommandRunner>(
    ctx: &InstallContext<'_, R>,
) -> Result<StepOutcome, ScaffoldError> {
    let mut outcome = StepOutcome::default();
    outcome.record(ctx.copy(Fragment::Eslint, ctx.target()).await?);
    outcome
        .notices
        .extend(ctx.install_packages(Feature::Eslint, None).await?);
    Ok(outcome)
}
