//! Authentication configuration.
//!
//! JobTrail does not issue tokens itself; it only validates bearer JWTs
//! minted by the external auth service, so the only knob is the shared
//! signing secret.

use serde::{Deserialize, Serialize};

/// JWT validation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret shared with the token issuer.
    pub jwt_secret: String,
    /// Expected token issuer (checked when non-empty).
    #[serde(default)]
    pub issuer: String,
}
