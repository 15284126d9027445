//! # jobtrail-mailer
//!
//! Email rendering and SMTP dispatch for JobTrail notifications.
//!
//! The [`EmailDispatcher`] selects a template by notification kind, renders
//! subject, HTML, and plaintext bodies, and hands the message to a
//! [`MailTransport`]. Delivery bookkeeping (the `email_sent` flag) is owned
//! by the caller, so the dispatcher stays free of persistence concerns.

pub mod dispatcher;
pub mod templates;
pub mod transport;

pub use dispatcher::EmailDispatcher;
pub use templates::EmailTemplates;
pub use transport::{MailTransport, OutgoingEmail, SmtpMailTransport};
