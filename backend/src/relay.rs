use async_trait::async_trait;
use fortisecure_shared::ContactSubmission;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("relay request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("relay endpoint answered with status {0}")]
    Status(u16),
}

/// Hands a validated inquiry to whoever answers it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRelay: Send + Sync {
    fn name(&self) -> &'static str;

    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), RelayError>;
}

/// Fallback when no webhook is configured: the inquiry lands in the log.
pub struct LogRelay;

#[async_trait]
impl ContactRelay for LogRelay {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), RelayError> {
        tracing::info!(
            name = submission.name(),
            email = submission.email(),
            phone = submission.phone(),
            message = submission.message(),
            "New contact inquiry"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fortisecure_shared::ContactInput;

    #[tokio::test]
    async fn log_relay_always_accepts() {
        let submission = ContactInput {
            name: "John Doe".into(),
            email: "john@example.com".into(),
            phone: "+91 8745060006".into(),
            message: "Hello".into(),
        }
        .validate()
        .unwrap();

        assert!(LogRelay.deliver(&submission).await.is_ok());
        assert_eq!(LogRelay.name(), "log");
    }
}
