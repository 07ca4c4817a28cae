//! Slack incoming-webhook delivery.
//!
//! Slack incoming webhooks take a `{ "text": ... }` payload and answer
//! 200 with body `ok`. One attempt per event.

use std::time::Duration;

use crate::event::LeadEvent;

/// HTTP request timeout for a delivery attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Error type for Slack delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum SlackError {
    /// The underlying HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Slack returned a non-2xx status code.
    #[error("Slack webhook returned HTTP {0}")]
    HttpStatus(u16),
}

/// Delivers lead summaries to a Slack incoming webhook.
pub struct SlackChannel {
    client: reqwest::Client,
    webhook_url: String,
}

impl SlackChannel {
    /// Create a channel for the given incoming-webhook URL.
    pub fn new(webhook_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self {
            client,
            webhook_url,
        }
    }

    /// Post the event summary as a Slack message.
    pub async fn deliver(&self, event: &LeadEvent) -> Result<(), SlackError> {
        let payload = serde_json::json!({ "text": event.summary() });

        let response = self
            .client
            .post(&self.webhook_url)
            .json(&payload)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(SlackError::HttpStatus(response.status().as_u16()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_does_not_panic() {
        let _channel = SlackChannel::new("https://hooks.slack.com/services/T/B/x".into());
    }

    #[test]
    fn error_display_http_status() {
        let err = SlackError::HttpStatus(404);
        assert_eq!(err.to_string(), "Slack webhook returned HTTP 404");
    }
}
