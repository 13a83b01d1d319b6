use serde::{Deserialize, Serialize};

/// Claims carried by a session token. Validity is fully determined by the
/// signature and the expiry; nothing is kept server-side and there is no
/// revocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaim {
    /// The user's email, the unique match key.
    pub sub: String,
    /// Issuance time, seconds since the epoch.
    pub iat: i64,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
}
