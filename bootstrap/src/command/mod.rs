pub mod attendance;
pub mod course;
pub mod shell;
pub mod show;
pub mod student;

use crate::args::CommonArgs;
use crate::command::attendance::AttendanceCommand;
use crate::command::course::CourseCommand;
use crate::command::shell::ShellArgs;
use crate::command::show::ShowArgs;
use crate::command::student::StudentCommand;
use clap::{Args, Subcommand};
use tracing::instrument;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print one tab of the dashboard
    #[command(name = "show")]
    Show(#[arg(flatten)] ShowArgs),
    #[command(name = "student", subcommand)]
    Student(StudentCommand),
    #[command(name = "course", subcommand)]
    Course(CourseCommand),
    #[command(name = "attendance", subcommand)]
    Attendance(AttendanceCommand),
    /// Interactive dashboard
    #[command(name = "shell")]
    Shell(#[arg(flatten)] ShellArgs),
}

/// Shared by every `delete` subcommand.
#[derive(Args, Debug)]
pub struct DeleteArgs {
    pub id: String,
    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl Command {
    #[instrument(level = "trace", skip(self, common_args))]
    pub async fn run(self, common_args: CommonArgs) -> anyhow::Result<()> {
        match self {
            Command::Show(args) => show::run(common_args, args).await,
            Command::Student(command) => student::run(common_args, command).await,
            Command::Course(command) => course::run(common_args, command).await,
            Command::Attendance(command) => attendance::run(common_args, command).await,
            Command::Shell(args) => shell::run(common_args, args).await,
        }
    }
}
