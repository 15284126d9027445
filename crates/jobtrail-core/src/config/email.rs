//! Email dispatch configuration.

use serde::{Deserialize, Serialize};

/// SMTP transport and template rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    /// Whether outbound email is enabled. When disabled, notifications are
    /// still persisted and visible in-app but never dispatched.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// SMTP server host.
    pub smtp_host: String,
    /// SMTP server port (587 = STARTTLS).
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    /// SMTP username.
    #[serde(default)]
    pub smtp_username: String,
    /// SMTP password.
    #[serde(default)]
    pub smtp_password: String,
    /// Sender address for all outbound mail.
    pub from_address: String,
    /// Sender display name.
    #[serde(default = "default_from_name")]
    pub from_name: String,
    /// Upper bound on a single transport call, in seconds.
    #[serde(default = "default_send_timeout")]
    pub send_timeout_seconds: u64,
    /// Frontend base URL prepended to notification action URLs.
    #[serde(default = "default_frontend_base_url")]
    pub frontend_base_url: String,
}

fn default_true() -> bool {
    true
}

fn default_smtp_port() -> u16 {
    587
}

fn default_from_name() -> String {
    "JobTrail".to_string()
}

fn default_send_timeout() -> u64 {
    15
}

fn default_frontend_base_url() -> String {
    "http://localhost:3000".to_string()
}
