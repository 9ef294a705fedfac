use domain::ports::backend::BackendError;
use reqwest::StatusCode;
use tracing::{instrument, warn};

/// Message for a non-success response: the body's `message` (or `error`)
/// field when present, the status line otherwise.
#[instrument(level = "trace", skip(body))]
pub fn status_to_domain_error(status: StatusCode, body: &str) -> BackendError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["message", "error"]
                .iter()
                .find_map(|key| value.get(key).and_then(|v| v.as_str()).map(str::to_string))
        })
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()));

    warn!(status = status.as_u16(), message, "Backend returned an error response");
    BackendError::new(message)
}

#[instrument(level = "trace", skip_all)]
pub fn reqwest_to_domain_error(err: reqwest::Error) -> BackendError {
    warn!(error = ?err, "Backend request failed");
    BackendError::new(err.to_string())
}
