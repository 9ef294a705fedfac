use crate::args::CommonArgs;
use crate::command::DeleteArgs;
use crate::locator::ApplicationPortLocator;
use anyhow::anyhow;
use application_ports::view::Tab;
use clap::{Args, Subcommand};
use domain_shared::forms::StudentForm;
use presentation::terminal::{commands, FormDraft};
use tracing::instrument;

#[derive(Subcommand, Debug)]
pub enum StudentCommand {
    /// Create a student
    #[command(name = "add")]
    Add(#[arg(flatten)] AddStudentArgs),
    /// Delete a student by id
    #[command(name = "delete")]
    Delete(#[arg(flatten)] DeleteArgs),
}

#[derive(Args, Debug)]
pub struct AddStudentArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    /// Grade label, e.g. 10
    #[arg(long)]
    pub grade: String,
}

#[instrument(level = "trace", skip(common_args, command))]
pub async fn run(common_args: CommonArgs, command: StudentCommand) -> anyhow::Result<()> {
    let locator = ApplicationPortLocator::new(common_args)?;

    let result = match command {
        StudentCommand::Add(AddStudentArgs { name, email, grade }) => {
            let draft = FormDraft::Student(StudentForm { name, email, grade });
            commands::create(&locator, draft).await
        }
        StudentCommand::Delete(DeleteArgs { id, yes }) => {
            commands::delete(&locator, Tab::Students, id, yes).await
        }
    };

    result.map_err(|e| anyhow!(e))
}
