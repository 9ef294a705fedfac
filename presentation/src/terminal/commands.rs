use crate::application_ports::Locator;
use crate::terminal::confirmation::{AssumeYes, StdinConfirmation};
use crate::terminal::draft::{self, FormDraft};
use crate::terminal::render::render_dashboard;
use crate::terminal::Error;
use application_ports::dashboard::{DashboardPort, DeleteOutcome};
use application_ports::view::Tab;
use domain::ports::confirmation::ConfirmationPort;
use std::sync::Arc;
use tracing::{info, instrument};

/// Loads everything and prints one tab.
#[instrument(level = "info", skip(locator))]
pub async fn show<L: Locator>(locator: &L, tab: Tab) -> Result<(), Error> {
    let mut port = locator.create_dashboard_port(Arc::new(StdinConfirmation));

    port.load().await?;
    port.select_tab(tab);
    print!("{}", render_dashboard(&port.view()));

    Ok(())
}

/// Submits one form and prints the reloaded tab it belongs to.
#[instrument(level = "info", skip(locator))]
pub async fn create<L: Locator>(locator: &L, draft: FormDraft) -> Result<(), Error> {
    let mut port = locator.create_dashboard_port(Arc::new(StdinConfirmation));
    let tab = draft.tab();

    port.select_tab(tab);
    draft.store(&mut port);
    let result = draft::submit(&mut port, tab).await;
    // The error is returned below, the queued copy would only repeat it.
    port.take_notifications();
    result?;

    print!("{}", render_dashboard(&port.view()));
    Ok(())
}

#[instrument(level = "info", skip(locator))]
pub async fn delete<L: Locator>(
    locator: &L,
    tab: Tab,
    id: String,
    assume_yes: bool,
) -> Result<(), Error> {
    let confirmation_port: Arc<dyn ConfirmationPort + Send + Sync> = if assume_yes {
        Arc::new(AssumeYes)
    } else {
        Arc::new(StdinConfirmation)
    };
    let mut port = locator.create_dashboard_port(confirmation_port);

    port.select_tab(tab);
    let result = draft::delete(&mut port, tab, id.clone()).await;
    port.take_notifications();

    match result? {
        DeleteOutcome::Deleted => {
            info!(id = %id, "Deleted");
            print!("{}", render_dashboard(&port.view()));
        }
        DeleteOutcome::Cancelled => println!("Deletion cancelled."),
    }
    Ok(())
}
