use crate::terminal::input::read_line;
use async_trait::async_trait;
use domain::ports::confirmation::ConfirmationPort;
use std::io::Write;
use tracing::{instrument, warn};

/// Asks on the terminal, anything but `y`/`yes` declines.
pub struct StdinConfirmation;

#[async_trait]
impl ConfirmationPort for StdinConfirmation {
    #[instrument(level = "debug", skip(self))]
    async fn confirm(&self, prompt: &str) -> bool {
        print!("{} [y/N] ", prompt);
        if let Err(err) = std::io::stdout().flush() {
            warn!(error = %err, "Failed to flush confirmation prompt");
        }

        match read_line().await {
            Ok(Some(answer)) => is_yes(&answer),
            Ok(None) => false,
            Err(err) => {
                warn!(error = %err, "Failed to read confirmation answer");
                false
            }
        }
    }
}

/// Confirms everything, for `--yes`.
pub struct AssumeYes;

#[async_trait]
impl ConfirmationPort for AssumeYes {
    async fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
