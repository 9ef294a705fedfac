use crate::args::CommonArgs;
use crate::locator::ApplicationPortLocator;
use anyhow::anyhow;
use clap::Args;
use presentation::terminal::run_shell;
use tracing::instrument;

#[derive(Args, Debug)]
pub struct ShellArgs {}

#[instrument(level = "trace", skip(common_args, args))]
pub async fn run(common_args: CommonArgs, args: ShellArgs) -> anyhow::Result<()> {
    let ShellArgs {} = args;
    let locator = ApplicationPortLocator::new(common_args)?;

    run_shell(&locator).await.map_err(|e| anyhow!(e))
}
