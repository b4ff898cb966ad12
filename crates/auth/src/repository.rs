use super::*;
use cbn_core::Error;
use cbn_core::ID;

/// Record Store shapes the account workflows need. `Ok(None)` means "no
/// such record"; `Err` means the store itself failed. Implementations
/// log driver detail internally and surface only the taxonomy.
#[allow(async_fn_in_trait)]
pub trait AuthRepository {
    /// Point lookup by exact, case-sensitive username.
    async fn lookup(&self, username: &str) -> Result<Option<(Member, String)>, Error>;
    /// Point lookup by account id.
    async fn get(&self, id: ID<Member>) -> Result<Option<(Member, String)>, Error>;
    /// Insert-if-absent; the store's uniqueness constraint is the
    /// authoritative backstop and maps to [`Error::Conflict`].
    async fn create(&self, username: &str, hashword: &str) -> Result<ID<Member>, Error>;
    /// Update-by-id of only the supplied fields.
    async fn update(
        &self,
        id: ID<Member>,
        username: Option<&str>,
        hashword: Option<&str>,
    ) -> Result<Member, Error>;
}

#[cfg(feature = "database")]
mod postgres {
    use super::*;
    use cbn_pg::*;
    use std::sync::Arc;
    use tokio_postgres::Client;

    fn account(row: &tokio_postgres::Row) -> (Member, String) {
        (
            Member::new(
                ID::from(row.get::<_, i64>(0)),
                row.get::<_, String>(1),
                Role::from(row.get::<_, &str>(2)),
            ),
            row.get::<_, String>(3),
        )
    }

    impl AuthRepository for Arc<Client> {
        async fn lookup(&self, username: &str) -> Result<Option<(Member, String)>, Error> {
            self.query_opt(
                const_format::concatcp!(
                    "SELECT id, username, role, hashword FROM ",
                    USERS,
                    " WHERE username = $1"
                ),
                &[&username],
            )
            .await
            .map(|opt| opt.map(|row| account(&row)))
            .map_err(|e| storage("user lookup failed", e))
        }

        async fn get(&self, id: ID<Member>) -> Result<Option<(Member, String)>, Error> {
            self.query_opt(
                const_format::concatcp!(
                    "SELECT id, username, role, hashword FROM ",
                    USERS,
                    " WHERE id = $1"
                ),
                &[&id.inner()],
            )
            .await
            .map(|opt| opt.map(|row| account(&row)))
            .map_err(|e| storage("user lookup failed", e))
        }

        async fn create(&self, username: &str, hashword: &str) -> Result<ID<Member>, Error> {
            self.query_one(
                const_format::concatcp!(
                    "INSERT INTO ",
                    USERS,
                    " (username, hashword) VALUES ($1, $2) RETURNING id"
                ),
                &[&username, &hashword],
            )
            .await
            .map(|row| ID::from(row.get::<_, i64>(0)))
            .map_err(|e| match unique_violation(&e) {
                true => Error::conflict("username exists"),
                false => storage("user not created", e),
            })
        }

        async fn update(
            &self,
            id: ID<Member>,
            username: Option<&str>,
            hashword: Option<&str>,
        ) -> Result<Member, Error> {
            self.query_opt(
                const_format::concatcp!(
                    "UPDATE ",
                    USERS,
                    " SET username = COALESCE($2, username),
                         hashword = COALESCE($3, hashword)
                     WHERE id = $1 RETURNING id, username, role"
                ),
                &[&id.inner(), &username, &hashword],
            )
            .await
            .map_err(|e| match unique_violation(&e) {
                true => Error::conflict("username taken"),
                false => storage("user not updated", e),
            })?
            .map(|row| {
                Member::new(
                    ID::from(row.get::<_, i64>(0)),
                    row.get::<_, String>(1),
                    Role::from(row.get::<_, &str>(2)),
                )
            })
            .ok_or_else(|| Error::not_found("user not found"))
        }
    }
}
