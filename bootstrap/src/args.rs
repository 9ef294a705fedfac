use clap::Args;
use url::Url;

#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Root of the attendance REST API, e.g. http://localhost:8080/api
    #[arg(long, env = "ATTENDANCE_API_URL")]
    pub api_url: Url,
    /// Per-request timeout, requests never time out when unset
    #[arg(long, env = "ATTENDANCE_REQUEST_TIMEOUT_SECS")]
    pub request_timeout_secs: Option<u64>,
}
