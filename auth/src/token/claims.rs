use serde::Deserialize;
use serde::Serialize;

/// Claims carried by an identity token.
///
/// Standard RFC 7519 claims plus the identity fields the blog backend binds
/// into every token. `jti` is unique per issued token so a revocation list
/// can be added later without a token format change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Email address of the subject
    pub email: String,

    /// Display name of the subject
    pub name: String,

    /// JWT ID (unique token identifier)
    pub jti: String,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// Issued at (Unix timestamp, seconds)
    pub iat: i64,

    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,
}
