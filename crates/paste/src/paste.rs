use cbn_auth::Member;
use cbn_core::ID;
use cbn_core::Unique;

/// Published snippet. Created once, immutable thereafter; the store
/// assigns id and creation time.
#[derive(Debug, Clone)]
pub struct Paste {
    id: ID<Self>,
    draft: Draft,
    created_at: std::time::SystemTime,
}

/// Everything a snippet is before the store has seen it: validated,
/// escaped, attributed, but without identity or timestamp.
#[derive(Debug, Clone)]
pub struct Draft {
    pub member: Option<ID<Member>>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub slug: String,
    pub code: String,
    pub language: i32,
    pub private: bool,
}

impl Paste {
    pub fn new(id: ID<Self>, draft: Draft, created_at: std::time::SystemTime) -> Self {
        Self {
            id,
            draft,
            created_at,
        }
    }
    pub fn member(&self) -> Option<ID<Member>> {
        self.draft.member
    }
    pub fn title(&self) -> Option<&str> {
        self.draft.title.as_deref()
    }
    pub fn description(&self) -> Option<&str> {
        self.draft.description.as_deref()
    }
    pub fn slug(&self) -> &str {
        &self.draft.slug
    }
    pub fn code(&self) -> &str {
        &self.draft.code
    }
    pub fn language(&self) -> i32 {
        self.draft.language
    }
    pub fn private(&self) -> bool {
        self.draft.private
    }
    pub fn created_at(&self) -> std::time::SystemTime {
        self.created_at
    }
}

impl Unique for Paste {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

/// One row of the closed language lookup set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub id: i32,
    pub name: String,
}

#[cfg(feature = "database")]
mod schema {
    use super::*;
    use cbn_pg::*;
    use tokio_postgres::Client;

    impl Schema for Paste {
        fn name() -> &'static str {
            PASTES
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                PASTES,
                " (
                    id          BIGSERIAL PRIMARY KEY,
                    member_id   BIGINT REFERENCES ",
                USERS,
                "(id),
                    title       VARCHAR(50),
                    description TEXT,
                    slug        VARCHAR(10) UNIQUE NOT NULL,
                    code        TEXT NOT NULL,
                    language    INT NOT NULL REFERENCES ",
                LANGUAGES,
                "(id),
                    private     BOOLEAN NOT NULL DEFAULT FALSE,
                    created_at  TIMESTAMPTZ NOT NULL DEFAULT now()
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_pastes_member ON ",
                PASTES,
                " (member_id);
                 CREATE INDEX IF NOT EXISTS idx_pastes_created ON ",
                PASTES,
                " (created_at DESC);"
            )
        }
    }

    impl Schema for Language {
        fn name() -> &'static str {
            LANGUAGES
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                LANGUAGES,
                " (
                    id      SERIAL PRIMARY KEY,
                    name    VARCHAR(32) UNIQUE NOT NULL
                );"
            )
        }
        fn indices() -> &'static str {
            ""
        }
    }

    /// Seed the closed language set. Idempotent; ids are fixed so the
    /// numeric references clients send stay stable across deployments.
    pub async fn seed_languages(client: &Client) -> Result<(), PgErr> {
        client
            .batch_execute(const_format::concatcp!(
                "INSERT INTO ",
                LANGUAGES,
                " (id, name) VALUES
                    (1,  'plaintext'),
                    (2,  'c'),
                    (3,  'cpp'),
                    (4,  'csharp'),
                    (5,  'css'),
                    (6,  'go'),
                    (7,  'html'),
                    (8,  'java'),
                    (9,  'javascript'),
                    (10, 'json'),
                    (11, 'kotlin'),
                    (12, 'markdown'),
                    (13, 'php'),
                    (14, 'python'),
                    (15, 'ruby'),
                    (16, 'rust'),
                    (17, 'shell'),
                    (18, 'sql'),
                    (19, 'typescript'),
                    (20, 'yaml')
                 ON CONFLICT (id) DO NOTHING;"
            ))
            .await
    }
}

#[cfg(feature = "database")]
pub use schema::seed_languages;
