use crate::args::CommonArgs;
use application::dashboard::DashboardService;
use application_ports::dashboard::DashboardPort;
use domain::ports::backend::BackendPort;
use domain::ports::confirmation::ConfirmationPort;
use infrastructure::http::{HttpBackendAdapter, HttpBackendConfig};
use presentation::application_ports::Locator;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

#[derive(Clone)]
pub struct ApplicationPortLocator {
    pub(crate) backend_adapter: Arc<dyn BackendPort + Send + Sync>,
}

impl ApplicationPortLocator {
    #[instrument(level = "trace", skip_all)]
    pub fn new(common_args: CommonArgs) -> anyhow::Result<Self> {
        let CommonArgs {
            api_url,
            request_timeout_secs,
        } = common_args;

        let backend_adapter = HttpBackendAdapter::new(HttpBackendConfig {
            base_url: api_url,
            request_timeout: request_timeout_secs.map(Duration::from_secs),
        })
        .map_err(|e| anyhow::anyhow!(e))?;

        Ok(Self {
            backend_adapter: Arc::new(backend_adapter),
        })
    }
}

impl Locator for ApplicationPortLocator {
    #[instrument(level = "trace", skip_all)]
    fn create_dashboard_port(
        &self,
        confirmation_port: Arc<dyn ConfirmationPort + Send + Sync>,
    ) -> impl DashboardPort + Send {
        DashboardService::new(self.backend_adapter.clone(), confirmation_port)
    }
}
