use std::time::Duration;

use async_trait::async_trait;
use fortisecure_shared::{whatsapp, ContactSubmission};
use reqwest::Client;
use serde::Serialize;

use crate::relay::{ContactRelay, RelayError};

#[derive(Serialize)]
struct WebhookPayload<'a> {
    text: String,
    submission: &'a ContactSubmission,
}

/// Posts each inquiry to a chat/webhook endpoint (Slack-style `text` field).
pub struct WebhookRelay {
    client: Client,
    url: String,
}

impl WebhookRelay {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, RelayError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl ContactRelay for WebhookRelay {
    fn name(&self) -> &'static str {
        "webhook"
    }

    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), RelayError> {
        let payload = WebhookPayload {
            text: whatsapp::submission_message(submission),
            submission,
        };

        let response = self.client.post(&self.url).json(&payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Contact webhook rejected the inquiry");
            return Err(RelayError::Status(status.as_u16()));
        }

        tracing::debug!("Contact webhook accepted the inquiry");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fortisecure_shared::ContactInput;
    use httpmock::prelude::*;
    use serde_json::json;

    fn submission() -> ContactSubmission {
        ContactInput {
            name: "John Doe".into(),
            email: "john@example.com".into(),
            phone: "+91 8745060006".into(),
            message: "Hello".into(),
        }
        .validate()
        .unwrap()
    }

    #[tokio::test]
    async fn posts_template_and_fields() {
        let server = MockServer::start_async().await;
        let hook = server
            .mock_async(|when, then| {
                when.method(POST).path("/hook").json_body(json!({
                    "text": "Hello FortiSecure!\n\nName: John Doe\nEmail: john@example.com\nPhone: +91 8745060006\n\nMessage:\nHello",
                    "submission": {
                        "name": "John Doe",
                        "email": "john@example.com",
                        "phone": "+91 8745060006",
                        "message": "Hello"
                    }
                }));
                then.status(200);
            })
            .await;

        let relay = WebhookRelay::new(server.url("/hook"), Duration::from_secs(5)).unwrap();
        let result = relay.deliver(&submission()).await;

        hook.assert_async().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start_async().await;
        let hook = server
            .mock_async(|when, then| {
                when.method(POST).path("/hook");
                then.status(500);
            })
            .await;

        let relay = WebhookRelay::new(server.url("/hook"), Duration::from_secs(5)).unwrap();
        let result = relay.deliver(&submission()).await;

        hook.assert_async().await;
        assert!(matches!(result, Err(RelayError::Status(500))));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_an_error() {
        // Port 9 (discard) is not expected to have a listener.
        let relay = WebhookRelay::new("http://127.0.0.1:9/hook", Duration::from_secs(2)).unwrap();

        let result = relay.deliver(&submission()).await;

        assert!(matches!(result, Err(RelayError::Http(_))));
    }
}
