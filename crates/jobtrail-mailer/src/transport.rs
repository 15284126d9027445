//! Mail transport abstraction and the SMTP implementation.

use std::time::Duration;

use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{debug, info};

use jobtrail_core::config::EmailConfig;
use jobtrail_core::error::{AppError, ErrorKind};
use jobtrail_core::result::AppResult;

/// A fully rendered email ready for handoff to a transport.
#[derive(Debug, Clone)]
pub struct OutgoingEmail {
    /// Recipient address.
    pub to_address: String,
    /// Recipient display name.
    pub to_name: String,
    /// Subject line.
    pub subject: String,
    /// HTML body.
    pub html: String,
    /// Plaintext body.
    pub text: String,
}

/// Handoff of a rendered email to a delivery mechanism.
///
/// The SMTP implementation is the production path; tests substitute
/// recording or failing doubles.
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Send a single email. A timed-out or rejected send is a
    /// [`ErrorKind::Delivery`] error scoped to this one message.
    async fn send(&self, email: &OutgoingEmail) -> AppResult<()>;
}

/// SMTP transport over STARTTLS with a bounded per-send timeout.
pub struct SmtpMailTransport {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailTransport {
    /// Build the transport from configuration.
    pub fn new(config: &EmailConfig) -> AppResult<Self> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| {
                AppError::with_source(ErrorKind::Configuration, "Invalid SMTP host", e)
            })?
            .port(config.smtp_port)
            .timeout(Some(Duration::from_secs(config.send_timeout_seconds)));

        if !config.smtp_username.is_empty() {
            builder = builder.credentials(Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            ));
        }

        let from = format!("{} <{}>", config.from_name, config.from_address)
            .parse::<Mailbox>()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Configuration, "Invalid sender address", e)
            })?;

        info!(
            host = %config.smtp_host,
            port = config.smtp_port,
            "SMTP transport initialized"
        );

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }
}

#[async_trait]
impl MailTransport for SmtpMailTransport {
    async fn send(&self, email: &OutgoingEmail) -> AppResult<()> {
        let to = format!("{} <{}>", email.to_name, email.to_address)
            .parse::<Mailbox>()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Delivery, "Invalid recipient address", e)
            })?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(&email.subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(email.text.clone()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(email.html.clone()),
                    ),
            )
            .map_err(|e| {
                AppError::with_source(ErrorKind::Delivery, "Failed to build email message", e)
            })?;

        debug!(to = %email.to_address, subject = %email.subject, "Sending email via SMTP");

        self.transport.send(message).await.map_err(|e| {
            AppError::with_source(ErrorKind::Delivery, "SMTP transport rejected the message", e)
        })?;

        Ok(())
    }
}
