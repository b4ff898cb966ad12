use super::*;
use cbn_core::ID;
use cbn_core::Unique;

/// Verified bearer-token payload. Rebuilt per request from the token;
/// never persisted.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Claims {
    pub iss: String,
    pub sub: i64,
    pub usr: String,
    pub rol: Role,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(member: &Member, issuer: &str, ttl: std::time::Duration) -> Self {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time")
            .as_secs() as i64;
        Self {
            iss: issuer.to_string(),
            sub: member.id().inner(),
            usr: member.username().to_string(),
            rol: member.role(),
            iat: now,
            exp: now + ttl.as_secs() as i64,
        }
    }
    pub fn expired(&self) -> bool {
        self.exp
            < std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .expect("time")
                .as_secs() as i64
    }
    pub fn member(&self) -> ID<Member> {
        ID::from(self.sub)
    }
    pub fn username(&self) -> &str {
        &self.usr
    }
    pub fn role(&self) -> Role {
        self.rol
    }
}
