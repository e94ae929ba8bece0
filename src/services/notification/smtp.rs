use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use log::{error, warn};

use crate::config::SmtpConfig;

use super::interface::{Notifier, NotifyError, OutgoingEmail};

struct SmtpRelay {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpRelay {
    fn build(config: &SmtpConfig) -> Result<Self, NotifyError> {
        if !config.is_configured() {
            return Err(NotifyError::NotConfigured);
        }
        let (Some(host), Some(user), Some(password), Some(from), Some(to)) = (
            config.host.as_deref(),
            config.user.as_deref(),
            config.password.as_deref(),
            config.from.as_deref(),
            config.to.as_deref(),
        ) else {
            return Err(NotifyError::NotConfigured);
        };

        let builder = if config.secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
        };
        let builder = builder
            .map_err(|e| NotifyError::Delivery(format!("failed to create SMTP transport: {}", e)))?;

        let transport = builder
            .port(config.port)
            .credentials(Credentials::new(user.to_string(), password.to_string()))
            .build();

        Ok(Self {
            transport,
            from: parse_mailbox(from)?,
            to: parse_mailbox(to)?,
        })
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, NotifyError> {
    address
        .parse::<Mailbox>()
        .map_err(|_| NotifyError::InvalidAddress(address.to_string()))
}

/// Relays notifications through the configured SMTP server. Built once at startup;
/// incomplete or invalid settings leave it unconfigured so every delivery is refused.
pub struct SmtpNotifier {
    relay: Option<SmtpRelay>,
}

impl SmtpNotifier {
    pub fn new(config: &SmtpConfig) -> Self {
        let relay = match SmtpRelay::build(config) {
            Ok(relay) => Some(relay),
            Err(NotifyError::NotConfigured) => {
                error!("SMTP not configured; form submissions will be refused");
                None
            }
            Err(e) => {
                error!("SMTP setup failed: {}", e);
                None
            }
        };
        Self { relay }
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn deliver(&self, email: OutgoingEmail) -> Result<(), NotifyError> {
        let relay = self.relay.as_ref().ok_or(NotifyError::NotConfigured)?;

        let mut builder = Message::builder()
            .from(relay.from.clone())
            .to(relay.to.clone())
            .subject(email.subject)
            .header(ContentType::TEXT_HTML);

        if let Some(reply_to) = email.reply_to.as_deref() {
            match parse_mailbox(reply_to) {
                Ok(mailbox) => builder = builder.reply_to(mailbox),
                Err(e) => warn!("Omitting Reply-To: {}", e),
            }
        }

        let message = builder
            .body(email.html)
            .map_err(|e| NotifyError::Message(e.to_string()))?;

        relay
            .transport
            .send(message)
            .await
            .map(|_| ())
            .map_err(|e| NotifyError::Delivery(e.to_string()))
    }

    fn is_configured(&self) -> bool {
        self.relay.is_some()
    }
}
