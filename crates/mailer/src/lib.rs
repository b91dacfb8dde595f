//! SMTP mail transport for Spendwise.
//!
//! Implements the core [`Mailer`] trait over lettre's async SMTP transport.
//! When no `MAIL_SERVER` is configured the app falls back to [`NoopMailer`],
//! which disables alert delivery instead of failing requests.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use log::info;

use spendwise_core::notifications::Mailer;
use spendwise_core::{Error, Result};

/// Outbound SMTP calls never block a request longer than this.
const SMTP_TIMEOUT: Duration = Duration::from_secs(10);

/// SMTP transport settings, read from the environment by the server.
#[derive(Debug, Clone, Default)]
pub struct MailSettings {
    pub server: Option<String>,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub use_tls: bool,
    /// Sender address; defaults to `username` when unset.
    pub from: Option<String>,
}

impl MailSettings {
    pub fn is_configured(&self) -> bool {
        self.server.is_some()
    }
}

/// Builds the mailer for the given settings: a real SMTP transport when a
/// server is configured, otherwise the no-op fallback.
pub fn build_mailer(settings: &MailSettings) -> Result<Arc<dyn Mailer>> {
    if settings.is_configured() {
        Ok(Arc::new(SmtpMailer::new(settings)?))
    } else {
        info!("MAIL_SERVER not configured; budget alerts will be suppressed");
        Ok(Arc::new(NoopMailer))
    }
}

/// Async SMTP mailer with STARTTLS and a short send timeout.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(settings: &MailSettings) -> Result<Self> {
        let server = settings
            .server
            .as_deref()
            .ok_or_else(|| Error::Mail("MAIL_SERVER is not set".to_string()))?;

        let from_addr = settings
            .from
            .as_deref()
            .or(settings.username.as_deref())
            .ok_or_else(|| {
                Error::Mail("Neither MAIL_FROM nor MAIL_USERNAME is set".to_string())
            })?;
        let from: Mailbox = from_addr
            .parse()
            .map_err(|e| Error::Mail(format!("Invalid sender address '{from_addr}': {e}")))?;

        let mut builder = if settings.use_tls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(server)
                .map_err(|e| Error::Mail(format!("Invalid SMTP relay '{server}': {e}")))?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(server)
        };
        builder = builder.port(settings.port).timeout(Some(SMTP_TIMEOUT));

        if let (Some(username), Some(password)) = (&settings.username, &settings.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(SmtpMailer {
            transport: builder.build(),
            from,
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<()> {
        let recipient: Mailbox = to
            .parse()
            .map_err(|e| Error::Mail(format!("Invalid recipient '{to}': {e}")))?;
        let message = Message::builder()
            .from(self.from.clone())
            .to(recipient)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| Error::Mail(format!("Failed to build message: {e}")))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| Error::Mail(e.to_string()))?;
        Ok(())
    }
}

/// Fallback used when the mail transport is not configured.
pub struct NoopMailer;

#[async_trait]
impl Mailer for NoopMailer {
    fn is_enabled(&self) -> bool {
        false
    }

    async fn send(&self, to: &str, subject: &str, _body: &str) -> Result<()> {
        info!("Mail transport disabled; dropping '{subject}' to {to}");
        Ok(())
    }
}
