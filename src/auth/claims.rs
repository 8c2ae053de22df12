use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Only access tokens are issued; the tag lets verifiers reject anything else.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
}

/// JWT payload used for authentication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,      // user ID
    pub iat: usize,     // issued at (unix timestamp)
    pub nbf: usize,     // not before
    pub exp: usize,     // expires at
    pub jti: Uuid,      // token ID
    pub iss: String,
    pub aud: String,
    #[serde(rename = "type")]
    pub kind: TokenKind,
}
