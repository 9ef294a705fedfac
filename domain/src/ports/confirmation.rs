use async_trait::async_trait;

/// Asks the user to approve a destructive action.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait ConfirmationPort {
    async fn confirm(&self, prompt: &str) -> bool;
}
