use crate::args::CommonArgs;
use crate::command::DeleteArgs;
use crate::locator::ApplicationPortLocator;
use anyhow::anyhow;
use application_ports::view::Tab;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use domain_shared::forms::AttendanceForm;
use domain_shared::school::AttendanceStatus;
use presentation::terminal::{commands, parse_date, FormDraft};
use tracing::instrument;

#[derive(Subcommand, Debug)]
pub enum AttendanceCommand {
    /// Record attendance of a student in a course
    #[command(name = "add")]
    Add(#[arg(flatten)] AddAttendanceArgs),
    /// Delete an attendance record by id
    #[command(name = "delete")]
    Delete(#[arg(flatten)] DeleteArgs),
}

#[derive(Args, Debug)]
pub struct AddAttendanceArgs {
    #[arg(long)]
    pub student_id: String,
    #[arg(long)]
    pub course_id: String,
    /// YYYY-MM-DD, today (UTC) when omitted
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,
    /// PRESENT, ABSENT, LATE or EXCUSED
    #[arg(long, default_value = "PRESENT")]
    pub status: AttendanceStatus,
    #[arg(long, default_value = "")]
    pub note: String,
}

impl AddAttendanceArgs {
    fn into_form(self) -> AttendanceForm {
        let AddAttendanceArgs {
            student_id,
            course_id,
            date,
            status,
            note,
        } = self;
        let defaults = AttendanceForm::default();

        AttendanceForm {
            student_id,
            course_id,
            date: date.unwrap_or(defaults.date),
            status,
            note,
        }
    }
}

#[instrument(level = "trace", skip(common_args, command))]
pub async fn run(common_args: CommonArgs, command: AttendanceCommand) -> anyhow::Result<()> {
    let locator = ApplicationPortLocator::new(common_args)?;

    let result = match command {
        AttendanceCommand::Add(args) => {
            let draft = FormDraft::Attendance(args.into_form());
            commands::create(&locator, draft).await
        }
        AttendanceCommand::Delete(DeleteArgs { id, yes }) => {
            commands::delete(&locator, Tab::Attendance, id, yes).await
        }
    };

    result.map_err(|e| anyhow!(e))
}
