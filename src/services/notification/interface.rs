use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("email transport is not configured")]
    NotConfigured,
    #[error("invalid mailbox {0}")]
    InvalidAddress(String),
    #[error("failed to build message: {0}")]
    Message(String),
    #[error("delivery failed: {0}")]
    Delivery(String),
}

/// A rendered notification ready to hand to a transport.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub subject: String,
    /// Submitter's address, so a reply from the inbox goes straight back to them.
    pub reply_to: Option<String>,
    pub html: String,
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn deliver(&self, email: OutgoingEmail) -> Result<(), NotifyError>;

    /// False when delivery would be refused up front, e.g. missing SMTP credentials.
    fn is_configured(&self) -> bool;
}
