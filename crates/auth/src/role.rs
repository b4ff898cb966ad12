use serde::Deserialize;
use serde::Serialize;

/// Account role. Every account registers as `User`; `Admin` is only ever
/// assigned out of band, directly in the store.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
        }
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        match s {
            "ADMIN" => Self::Admin,
            _ => Self::User,
        }
    }
}
