use crate::args::CommonArgs;
use crate::locator::ApplicationPortLocator;
use anyhow::anyhow;
use application_ports::view::Tab;
use clap::Args;
use presentation::terminal::commands;
use tracing::instrument;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// students, courses or attendance
    #[arg(long, default_value = "students")]
    pub tab: Tab,
}

#[instrument(level = "trace", skip(common_args, args))]
pub async fn run(common_args: CommonArgs, args: ShowArgs) -> anyhow::Result<()> {
    let ShowArgs { tab } = args;
    let locator = ApplicationPortLocator::new(common_args)?;

    commands::show(&locator, tab).await.map_err(|e| anyhow!(e))
}
