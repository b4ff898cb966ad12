use super::*;
use cbn_auth::Member;
use cbn_core::Error;
use cbn_core::ID;

/// Record Store shapes the snippet workflows need. `Ok(None)` means "no
/// such record"; `Err` means the store itself failed.
#[allow(async_fn_in_trait)]
pub trait PasteRepository {
    /// Point lookup by unique slug.
    async fn get(&self, slug: &str) -> Result<Option<Paste>, Error>;
    /// Every snippet, newest first.
    async fn all(&self) -> Result<Vec<Paste>, Error>;
    /// Snippets owned by one account, newest first.
    async fn by_member(&self, member: ID<Member>) -> Result<Vec<Paste>, Error>;
    /// Insert-if-absent; the slug's unique constraint is the
    /// authoritative backstop and maps to [`Error::Conflict`].
    async fn create(&self, draft: &Draft) -> Result<ID<Paste>, Error>;
    /// Point lookup into the closed language set.
    async fn language(&self, id: i32) -> Result<Option<Language>, Error>;
}

#[cfg(feature = "database")]
mod postgres {
    use super::*;
    use cbn_pg::*;
    use std::sync::Arc;
    use tokio_postgres::Client;

    const COLUMNS: &str =
        "id, member_id, title, description, slug, code, language, private, created_at";

    fn paste(row: &tokio_postgres::Row) -> Paste {
        Paste::new(
            ID::from(row.get::<_, i64>(0)),
            Draft {
                member: row.get::<_, Option<i64>>(1).map(ID::from),
                title: row.get(2),
                description: row.get(3),
                slug: row.get(4),
                code: row.get(5),
                language: row.get(6),
                private: row.get(7),
            },
            row.get(8),
        )
    }

    impl PasteRepository for Arc<Client> {
        async fn get(&self, slug: &str) -> Result<Option<Paste>, Error> {
            self.query_opt(
                const_format::concatcp!(
                    "SELECT ",
                    COLUMNS,
                    " FROM ",
                    PASTES,
                    " WHERE slug = $1"
                ),
                &[&slug],
            )
            .await
            .map(|opt| opt.map(|row| paste(&row)))
            .map_err(|e| storage("code lookup failed", e))
        }

        async fn all(&self) -> Result<Vec<Paste>, Error> {
            self.query(
                const_format::concatcp!(
                    "SELECT ",
                    COLUMNS,
                    " FROM ",
                    PASTES,
                    " ORDER BY created_at DESC"
                ),
                &[],
            )
            .await
            .map(|rows| rows.iter().map(paste).collect())
            .map_err(|e| storage("code listing failed", e))
        }

        async fn by_member(&self, member: ID<Member>) -> Result<Vec<Paste>, Error> {
            self.query(
                const_format::concatcp!(
                    "SELECT ",
                    COLUMNS,
                    " FROM ",
                    PASTES,
                    " WHERE member_id = $1 ORDER BY created_at DESC"
                ),
                &[&member.inner()],
            )
            .await
            .map(|rows| rows.iter().map(paste).collect())
            .map_err(|e| storage("code listing failed", e))
        }

        async fn create(&self, draft: &Draft) -> Result<ID<Paste>, Error> {
            self.query_one(
                const_format::concatcp!(
                    "INSERT INTO ",
                    PASTES,
                    " (member_id, title, description, slug, code, language, private)
                      VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING id"
                ),
                &[
                    &draft.member.map(|m| m.inner()),
                    &draft.title,
                    &draft.description,
                    &draft.slug,
                    &draft.code,
                    &draft.language,
                    &draft.private,
                ],
            )
            .await
            .map(|row| ID::from(row.get::<_, i64>(0)))
            .map_err(|e| match unique_violation(&e) {
                true => Error::conflict("slug exists"),
                false => storage("code not created", e),
            })
        }

        async fn language(&self, id: i32) -> Result<Option<Language>, Error> {
            self.query_opt(
                const_format::concatcp!("SELECT id, name FROM ", LANGUAGES, " WHERE id = $1"),
                &[&id],
            )
            .await
            .map(|opt| {
                opt.map(|row| Language {
                    id: row.get(0),
                    name: row.get(1),
                })
            })
            .map_err(|e| storage("language lookup failed", e))
        }
    }
}
