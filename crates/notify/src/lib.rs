//! Lead notification fan-out.
//!
//! When a lead lands through the public CTA form, the back office wants to
//! hear about it on whatever channels are configured: a generic HTTP
//! webhook, a Slack incoming webhook, and SMTP email. This crate provides:
//!
//! - [`LeadEvent`] — the serializable envelope built from the stored row.
//! - [`channels`] — one delivery module per channel, each a single
//!   attempt with its own error type.
//! - [`Notifier`] — builds the configured channel set from the
//!   environment and dispatches an event to all of them concurrently,
//!   fire-and-forget. Delivery failures are logged, never retried, and
//!   never reach the HTTP caller.

pub mod channels;
pub mod event;
pub mod notifier;

pub use channels::email::{EmailChannel, EmailConfig};
pub use channels::slack::SlackChannel;
pub use channels::webhook::WebhookChannel;
pub use event::LeadEvent;
pub use notifier::Notifier;
