use std::time::Duration;

use axum::extract::FromRef;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use time::{Duration as TimeDuration, OffsetDateTime};
use tracing::debug;
use uuid::Uuid;

use super::claims::{Claims, TokenKind};
use crate::{config::JwtConfig, state::AppState};

/// Access tokens live for exactly one hour.
pub const ACCESS_TOKEN_TTL: Duration = Duration::from_secs(60 * 60);

#[derive(Clone)]
pub struct JwtKeys {
    pub encoding: EncodingKey,
    #[cfg(test)]
    pub decoding: jsonwebtoken::DecodingKey,
    pub issuer: String,
    pub audience: String,
    pub access_ttl: Duration,
}

impl From<&JwtConfig> for JwtKeys {
    fn from(cfg: &JwtConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(cfg.secret.as_bytes()),
            #[cfg(test)]
            decoding: jsonwebtoken::DecodingKey::from_secret(cfg.secret.as_bytes()),
            issuer: cfg.issuer.clone(),
            audience: cfg.audience.clone(),
            access_ttl: ACCESS_TOKEN_TTL,
        }
    }
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        Self::from(&state.config.jwt)
    }
}

impl JwtKeys {
    pub fn sign_access(&self, user_id: Uuid) -> anyhow::Result<String> {
        let now = OffsetDateTime::now_utc();
        let exp = now + TimeDuration::seconds(self.access_ttl.as_secs() as i64);
        let claims = Claims {
            sub: user_id,
            iat: now.unix_timestamp() as usize,
            nbf: now.unix_timestamp() as usize,
            exp: exp.unix_timestamp() as usize,
            jti: Uuid::new_v4(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            kind: TokenKind::Access,
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?;
        debug!(user_id = %user_id, jti = %claims.jti, "jwt signed");
        Ok(token)
    }

    #[cfg(test)]
    pub fn verify(&self, token: &str) -> anyhow::Result<Claims> {
        use jsonwebtoken::{decode, Validation};

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_nbf = true;
        validation.set_audience(std::slice::from_ref(&self.audience));
        validation.set_issuer(std::slice::from_ref(&self.issuer));
        let data = decode::<Claims>(token, &self.decoding, &validation)?;
        debug!(user_id = %data.claims.sub, "jwt verified");
        Ok(data.claims)
    }
}
