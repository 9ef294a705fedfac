use crate::args::CommonArgs;
use crate::command::DeleteArgs;
use crate::locator::ApplicationPortLocator;
use anyhow::anyhow;
use application_ports::view::Tab;
use clap::{Args, Subcommand};
use domain_shared::forms::CourseForm;
use presentation::terminal::{commands, FormDraft};
use tracing::instrument;

#[derive(Subcommand, Debug)]
pub enum CourseCommand {
    /// Create a course
    #[command(name = "add")]
    Add(#[arg(flatten)] AddCourseArgs),
    /// Delete a course by id
    #[command(name = "delete")]
    Delete(#[arg(flatten)] DeleteArgs),
}

#[derive(Args, Debug)]
pub struct AddCourseArgs {
    /// Course code, e.g. MATH-101
    #[arg(long)]
    pub code: String,
    #[arg(long)]
    pub title: String,
}

#[instrument(level = "trace", skip(common_args, command))]
pub async fn run(common_args: CommonArgs, command: CourseCommand) -> anyhow::Result<()> {
    let locator = ApplicationPortLocator::new(common_args)?;

    let result = match command {
        CourseCommand::Add(AddCourseArgs { code, title }) => {
            let draft = FormDraft::Course(CourseForm { code, title });
            commands::create(&locator, draft).await
        }
        CourseCommand::Delete(DeleteArgs { id, yes }) => {
            commands::delete(&locator, Tab::Courses, id, yes).await
        }
    };

    result.map_err(|e| anyhow!(e))
}
