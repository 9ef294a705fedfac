use application_ports::dashboard::DashboardPort;
use domain::ports::confirmation::ConfirmationPort;
use std::sync::Arc;

pub trait Locator {
    fn create_dashboard_port(
        &self,
        confirmation_port: Arc<dyn ConfirmationPort + Send + Sync>,
    ) -> impl DashboardPort + Send;
}
