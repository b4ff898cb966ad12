use super::*;
use cbn_core::ID;

/// Caller identity for one request: anonymous or authenticated. A bearer
/// token that fails verification resolves to `Anon`, never to an error,
/// on routes that permit anonymous access.
#[derive(Debug, Clone)]
pub enum User {
    Anon,
    Auth(Claims),
}

impl User {
    pub fn id(&self) -> Option<ID<Member>> {
        match self {
            Self::Auth(claims) => Some(claims.member()),
            Self::Anon => None,
        }
    }
    pub fn claims(&self) -> Option<&Claims> {
        match self {
            Self::Auth(claims) => Some(claims),
            Self::Anon => None,
        }
    }
}

impl From<Claims> for User {
    fn from(claims: Claims) -> Self {
        Self::Auth(claims)
    }
}

impl From<Option<Claims>> for User {
    fn from(claims: Option<Claims>) -> Self {
        claims.map(Self::Auth).unwrap_or(Self::Anon)
    }
}
