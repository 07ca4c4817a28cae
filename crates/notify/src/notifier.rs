//! Concurrent fan-out over the configured channels.

use crate::channels::email::{EmailChannel, EmailConfig};
use crate::channels::slack::SlackChannel;
use crate::channels::webhook::WebhookChannel;
use crate::event::LeadEvent;

/// Dispatches lead events to every configured channel.
///
/// Built once at startup and shared via `Arc`. Handlers spawn
/// [`dispatch`](Notifier::dispatch) and return immediately; the task
/// logs each channel's outcome and drops the results.
pub struct Notifier {
    webhook: Option<WebhookChannel>,
    slack: Option<SlackChannel>,
    email: Option<EmailChannel>,
}

impl Notifier {
    /// Build the channel set from environment variables.
    ///
    /// | Variable            | Channel it enables            |
    /// |---------------------|-------------------------------|
    /// | `LEAD_WEBHOOK_URL`  | generic HTTP webhook          |
    /// | `SLACK_WEBHOOK_URL` | Slack incoming webhook        |
    /// | `SMTP_HOST` + `LEAD_NOTIFY_TO` | SMTP email         |
    ///
    /// Anything unset simply leaves that channel out.
    pub fn from_env() -> Self {
        let webhook = std::env::var("LEAD_WEBHOOK_URL")
            .ok()
            .filter(|url| !url.is_empty())
            .map(WebhookChannel::new);

        let slack = std::env::var("SLACK_WEBHOOK_URL")
            .ok()
            .filter(|url| !url.is_empty())
            .map(SlackChannel::new);

        let email = match (EmailConfig::from_env(), std::env::var("LEAD_NOTIFY_TO").ok()) {
            (Some(config), Some(to)) if !to.is_empty() => Some(EmailChannel::new(config, to)),
            _ => None,
        };

        Self {
            webhook,
            slack,
            email,
        }
    }

    /// A notifier with no channels; used by tests.
    pub fn disabled() -> Self {
        Self {
            webhook: None,
            slack: None,
            email: None,
        }
    }

    /// How many channels are configured.
    pub fn channel_count(&self) -> usize {
        usize::from(self.webhook.is_some())
            + usize::from(self.slack.is_some())
            + usize::from(self.email.is_some())
    }

    /// Deliver the event to all configured channels concurrently.
    ///
    /// Each channel's failure is caught and logged independently; nothing
    /// is retried and nothing propagates. Callers are expected to
    /// `tokio::spawn` this so the HTTP response is never delayed by
    /// delivery.
    pub async fn dispatch(&self, event: LeadEvent) {
        if self.channel_count() == 0 {
            tracing::debug!(lead_id = event.id, "No notification channels configured");
            return;
        }

        let webhook_fut = async {
            if let Some(channel) = &self.webhook {
                match channel.deliver(&event).await {
                    Ok(()) => tracing::info!(lead_id = event.id, "Webhook notification delivered"),
                    Err(e) => {
                        tracing::warn!(lead_id = event.id, error = %e, "Webhook notification failed");
                    }
                }
            }
        };

        let slack_fut = async {
            if let Some(channel) = &self.slack {
                match channel.deliver(&event).await {
                    Ok(()) => tracing::info!(lead_id = event.id, "Slack notification delivered"),
                    Err(e) => {
                        tracing::warn!(lead_id = event.id, error = %e, "Slack notification failed");
                    }
                }
            }
        };

        let email_fut = async {
            if let Some(channel) = &self.email {
                match channel.deliver(&event).await {
                    Ok(()) => tracing::info!(lead_id = event.id, "Email notification delivered"),
                    Err(e) => {
                        tracing::warn!(lead_id = event.id, error = %e, "Email notification failed");
                    }
                }
            }
        };

        tokio::join!(webhook_fut, slack_fut, email_fut);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn event() -> LeadEvent {
        LeadEvent {
            id: 1,
            name: "Test".into(),
            phone: "000".into(),
            email: None,
            location: "Nowhere".into(),
            requirement: "test".into(),
            message: None,
            utm_source: None,
            utm_medium: None,
            utm_campaign: None,
            variant: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn disabled_notifier_has_no_channels() {
        assert_eq!(Notifier::disabled().channel_count(), 0);
    }

    #[tokio::test]
    async fn dispatch_with_no_channels_completes() {
        // Must return promptly without attempting any network I/O.
        Notifier::disabled().dispatch(event()).await;
    }

    #[tokio::test]
    async fn dispatch_swallows_channel_failures() {
        // A webhook pointing at a closed local port fails fast; dispatch
        // must still complete without error.
        let notifier = Notifier {
            webhook: Some(WebhookChannel::new("http://127.0.0.1:1/hook".into())),
            slack: None,
            email: None,
        };
        notifier.dispatch(event()).await;
    }
}
