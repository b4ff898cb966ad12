use super::*;
use cbn_core::ID;
use cbn_core::Unique;

/// Registered account with verified identity.
/// Note: the password digest is a database-only field, never part of the
/// domain type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Member {
    id: ID<Self>,
    username: String,
    role: Role,
}

impl Member {
    pub fn new(id: ID<Self>, username: String, role: Role) -> Self {
        Self { id, username, role }
    }
    pub fn username(&self) -> &str {
        &self.username
    }
    pub fn role(&self) -> Role {
        self.role
    }
}

impl Unique for Member {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

#[cfg(feature = "database")]
mod schema {
    use super::*;
    use cbn_pg::*;

    impl Schema for Member {
        fn name() -> &'static str {
            USERS
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                USERS,
                " (
                    id          BIGSERIAL PRIMARY KEY,
                    username    VARCHAR(20) UNIQUE NOT NULL,
                    hashword    TEXT NOT NULL,
                    role        TEXT NOT NULL DEFAULT 'USER'
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_users_username ON ",
                USERS,
                " (username);"
            )
        }
    }
}
