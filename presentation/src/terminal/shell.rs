use crate::application_ports::Locator;
use crate::terminal::confirmation::StdinConfirmation;
use crate::terminal::draft::{self, FormDraft};
use crate::terminal::input::read_line;
use crate::terminal::render::{render_dashboard, render_notifications};
use crate::terminal::Error;
use application_ports::dashboard::{DashboardPort, DeleteOutcome};
use application_ports::view::{Tab, UnknownTab};
use std::io::Write;
use std::sync::Arc;
use tracing::{debug, info, instrument};

const HELP: &str = "\
Commands:
  tab <students|courses|attendance>   switch the active tab
  add                                 open the form of the active tab
  set <field> <value>                 fill a field of the open form
  submit                              send the open form
  close                               close the form, keeping its content
  delete <id>                         delete a record of the active tab
  retry                               reload everything
  help                                show this text
  quit                                leave the shell";

#[derive(Debug, Clone, PartialEq, Eq)]
enum ShellCommand {
    Tab(Tab),
    Add,
    Close,
    Set { field: String, value: String },
    Submit,
    Delete(String),
    Retry,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
enum ShellInputError {
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("unknown command {0:?}, type `help`")]
    UnknownCommand(String),
    #[error(transparent)]
    Tab(#[from] UnknownTab),
}

enum Step {
    Render,
    Say(String),
    Quit,
}

/// `Ok(None)` for a blank line.
fn parse_command(line: &str) -> Result<Option<ShellCommand>, ShellInputError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "tab" => ShellCommand::Tab(rest.parse()?),
        "add" | "new" => ShellCommand::Add,
        "close" | "cancel" => ShellCommand::Close,
        "set" => {
            let (field, value) = rest
                .split_once(char::is_whitespace)
                .map(|(field, value)| (field, value.trim()))
                .unwrap_or((rest, ""));
            if field.is_empty() {
                return Err(ShellInputError::Usage("set <field> <value>"));
            }
            ShellCommand::Set {
                field: field.to_ascii_lowercase(),
                value: value.to_string(),
            }
        }
        "submit" => ShellCommand::Submit,
        "delete" | "rm" => {
            if rest.is_empty() {
                return Err(ShellInputError::Usage("delete <id>"));
            }
            ShellCommand::Delete(rest.to_string())
        }
        "retry" | "reload" => ShellCommand::Retry,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => return Err(ShellInputError::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}

async fn execute<P: DashboardPort + Send>(port: &mut P, command: ShellCommand) -> Step {
    match command {
        ShellCommand::Tab(tab) => {
            port.select_tab(tab);
            Step::Render
        }
        ShellCommand::Add => {
            port.open_create_modal();
            Step::Render
        }
        ShellCommand::Close => {
            port.close_create_modal();
            Step::Render
        }
        ShellCommand::Set { field, value } => {
            let view = port.view();
            let Some(tab) = view.modal else {
                return Step::Say("No form is open, use `add` first.".to_string());
            };
            match FormDraft::with_field(&view.forms, tab, &field, &value) {
                Ok(draft) => {
                    draft.store(port);
                    Step::Render
                }
                Err(err) => Step::Say(err.to_string()),
            }
        }
        ShellCommand::Submit => {
            let Some(tab) = port.view().modal else {
                return Step::Say("No form is open, use `add` first.".to_string());
            };
            if let Err(err) = draft::submit(port, tab).await {
                debug!(error = %err, "Submission failed");
            }
            Step::Render
        }
        ShellCommand::Delete(id) => {
            let tab = port.view().active_tab;
            match draft::delete(port, tab, id).await {
                Ok(DeleteOutcome::Cancelled) => Step::Say("Deletion cancelled.".to_string()),
                Ok(DeleteOutcome::Deleted) => Step::Render,
                Err(err) => {
                    debug!(error = %err, "Deletion failed");
                    Step::Render
                }
            }
        }
        ShellCommand::Retry => {
            if let Err(err) = port.load().await {
                debug!(error = %err, "Reload failed");
            }
            Step::Render
        }
        ShellCommand::Help => Step::Say(HELP.to_string()),
        ShellCommand::Quit => Step::Quit,
    }
}

/// Interactive dashboard on stdin/stdout until `quit` or end of input.
#[instrument(level = "debug", skip(locator))]
pub async fn run_shell<L: Locator>(locator: &L) -> Result<(), Error> {
    let mut port = locator.create_dashboard_port(Arc::new(StdinConfirmation));

    if let Err(err) = port.load().await {
        debug!(error = %err, "Initial load failed");
    }
    println!("{}", render_dashboard(&port.view()));
    println!("Type `help` for commands.");

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = read_line().await? else {
            break;
        };
        let step = match parse_command(&line) {
            Ok(Some(command)) => execute(&mut port, command).await,
            Ok(None) => continue,
            Err(err) => Step::Say(err.to_string()),
        };

        match step {
            Step::Render => println!("{}", render_dashboard(&port.view())),
            Step::Say(message) => println!("{}", message),
            Step::Quit => break,
        }
        print!("{}", render_notifications(&port.take_notifications()));
    }

    info!("Shell closed");
    Ok(())
}
