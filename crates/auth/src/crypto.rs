use super::*;
use cbn_core::Config;
use cbn_core::Error;

/// JWT signing and verification. One symmetric key, one issuer, one
/// lifetime — the lifetime policy is whatever the startup [`Config`]
/// says, for every token.
pub struct Crypto {
    encoding: jsonwebtoken::EncodingKey,
    decoding: jsonwebtoken::DecodingKey,
    validation: jsonwebtoken::Validation,
    issuer: String,
    ttl: std::time::Duration,
}

impl Crypto {
    pub fn new(secret: &[u8], issuer: &str, ttl: std::time::Duration) -> Self {
        let mut validation = jsonwebtoken::Validation::default();
        validation.set_issuer(&[issuer]);
        Self {
            encoding: jsonwebtoken::EncodingKey::from_secret(secret),
            decoding: jsonwebtoken::DecodingKey::from_secret(secret),
            validation,
            issuer: issuer.to_string(),
            ttl,
        }
    }
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.secret.as_bytes(), &config.issuer, config.ttl)
    }
    /// Build a claim set for a member under this service's issuer and
    /// lifetime policy.
    pub fn claims(&self, member: &Member) -> Claims {
        Claims::new(member, &self.issuer, self.ttl)
    }
    pub fn encode(&self, claims: &Claims) -> Result<String, Error> {
        jsonwebtoken::encode(&jsonwebtoken::Header::default(), claims, &self.encoding).map_err(
            |e| {
                log::error!("token encoding failed: {}", e);
                Error::storage("token not issued")
            },
        )
    }
    /// Verify signature, expiry, and issuer. Every failure collapses to
    /// [`Error::Unauthenticated`] so the boundary answers 401, never 500.
    pub fn decode(&self, token: &str) -> Result<Claims, Error> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| Error::Unauthenticated)
    }
}
