//! Account workflows: registration, login, profile reads and updates.
//!
//! Each workflow validates exhaustively before its first store call,
//! consults [`policy`] for the verdict where one is needed, and reports
//! every failure exactly once through the [`Error`] taxonomy.

use super::*;
use cbn_core::Error;
use cbn_core::ID;
use cbn_core::Unique;

/// Username length bounds, enforced at registration and on rename.
pub const MIN_USERNAME: usize = 3;
pub const MAX_USERNAME: usize = 20;

fn check_username(username: &str) -> Result<(), Error> {
    match username.len() {
        MIN_USERNAME..=MAX_USERNAME => Ok(()),
        _ => Err(Error::validation("username too long or too short")),
    }
}

fn digest(secret: &str) -> Result<String, Error> {
    password::hash(secret).map_err(|e| {
        log::error!("password hashing failed: {}", e);
        Error::storage("credential not stored")
    })
}

/// Create an account with role `USER`. The username lookup gives the
/// friendly error; the store's unique constraint is the backstop when
/// two registrations race.
pub async fn register(repo: &impl AuthRepository, req: &RegisterRequest) -> Result<MemberInfo, Error> {
    check_username(&req.username)?;
    if req.password.len() < password::MIN_PASSWORD {
        return Err(Error::validation("password too short"));
    }
    if repo.lookup(&req.username).await?.is_some() {
        return Err(Error::conflict("username exists"));
    }
    let hashword = digest(&req.password)?;
    let id = repo.create(&req.username, &hashword).await?;
    Ok(MemberInfo {
        id: id.inner(),
        username: req.username.clone(),
        role: Role::User,
    })
}

/// Verify credentials and issue a token. Unknown user and wrong password
/// collapse into the same [`Error::Unauthenticated`].
pub async fn login(
    repo: &impl AuthRepository,
    crypto: &Crypto,
    req: &LoginRequest,
) -> Result<LoginResponse, Error> {
    let Some((member, hashword)) = repo.lookup(&req.username).await? else {
        return Err(Error::Unauthenticated);
    };
    if !password::verify(&req.password, &hashword) {
        return Err(Error::Unauthenticated);
    }
    let token = crypto.encode(&crypto.claims(&member))?;
    Ok(LoginResponse {
        id: member.id().inner(),
        token,
    })
}

/// Sanitized profile by id. The view is non-sensitive, so any caller may
/// read it.
pub async fn profile(repo: &impl AuthRepository, id: ID<Member>) -> Result<MemberInfo, Error> {
    repo.get(id)
        .await?
        .map(|(member, _)| MemberInfo::from(member))
        .ok_or_else(|| Error::not_found("user not found"))
}

/// Mutate username and/or credential. Only the owner passes the policy
/// gate; a credential change additionally demands the verified current
/// password before the stored digest is touched.
pub async fn update(
    repo: &impl AuthRepository,
    user: &User,
    target: ID<Member>,
    req: &UpdateRequest,
) -> Result<MemberInfo, Error> {
    policy::authorize(user, policy::Action::UpdateMember(target))?;
    if req.username.is_none() && req.new_password.is_none() {
        return Err(Error::validation("nothing to change"));
    }
    let Some((_, stored)) = repo.get(target).await? else {
        return Err(Error::not_found("user not found"));
    };
    if let Some(ref username) = req.username {
        check_username(username)?;
        if repo.lookup(username).await?.is_some() {
            return Err(Error::conflict("username taken"));
        }
    }
    let hashword = match req.new_password {
        Some(ref new) => {
            let Some(ref current) = req.current_password else {
                return Err(Error::validation("no current password"));
            };
            if !password::verify(current, &stored) {
                return Err(Error::validation("wrong current password"));
            }
            if new.len() < password::MIN_PASSWORD {
                return Err(Error::validation("new password too short"));
            }
            Some(digest(new)?)
        }
        None => None,
    };
    let member = repo
        .update(target, req.username.as_deref(), hashword.as_deref())
        .await?;
    Ok(MemberInfo::from(member))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// In-memory Record Store double: (id, username, hashword, role).
    #[derive(Default)]
    struct MemStore {
        rows: RefCell<Vec<(i64, String, String, Role)>>,
    }

    impl MemStore {
        fn hashword(&self, id: i64) -> String {
            self.rows
                .borrow()
                .iter()
                .find(|r| r.0 == id)
                .map(|r| r.2.clone())
                .unwrap()
        }
    }

    impl AuthRepository for MemStore {
        async fn lookup(&self, username: &str) -> Result<Option<(Member, String)>, Error> {
            Ok(self
                .rows
                .borrow()
                .iter()
                .find(|r| r.1 == username)
                .map(|r| (Member::new(ID::from(r.0), r.1.clone(), r.3), r.2.clone())))
        }
        async fn get(&self, id: ID<Member>) -> Result<Option<(Member, String)>, Error> {
            Ok(self
                .rows
                .borrow()
                .iter()
                .find(|r| r.0 == id.inner())
                .map(|r| (Member::new(ID::from(r.0), r.1.clone(), r.3), r.2.clone())))
        }
        async fn create(&self, username: &str, hashword: &str) -> Result<ID<Member>, Error> {
            let mut rows = self.rows.borrow_mut();
            if rows.iter().any(|r| r.1 == username) {
                return Err(Error::conflict("username exists"));
            }
            let id = rows.len() as i64 + 1;
            rows.push((id, username.to_string(), hashword.to_string(), Role::User));
            Ok(ID::from(id))
        }
        async fn update(
            &self,
            id: ID<Member>,
            username: Option<&str>,
            hashword: Option<&str>,
        ) -> Result<Member, Error> {
            let mut rows = self.rows.borrow_mut();
            let row = rows
                .iter_mut()
                .find(|r| r.0 == id.inner())
                .ok_or_else(|| Error::not_found("user not found"))?;
            if let Some(username) = username {
                row.1 = username.to_string();
            }
            if let Some(hashword) = hashword {
                row.2 = hashword.to_string();
            }
            Ok(Member::new(ID::from(row.0), row.1.clone(), row.3))
        }
    }

    fn crypto() -> Crypto {
        Crypto::new(b"secret", "cbn", std::time::Duration::from_secs(3600))
    }

    fn auth(id: i64) -> User {
        let member = Member::new(ID::from(id), format!("user{}", id), Role::User);
        User::from(Claims::new(&member, "cbn", std::time::Duration::from_secs(3600)))
    }

    fn alice() -> RegisterRequest {
        RegisterRequest {
            username: "alice".to_string(),
            password: "longpass1".to_string(),
        }
    }

    #[tokio::test]
    async fn register_assigns_user_role() {
        let repo = MemStore::default();
        let info = register(&repo, &alice()).await.unwrap();
        assert!(info.username == "alice");
        assert!(info.role == Role::User);
        assert!(info.id == 1);
    }

    #[tokio::test]
    async fn register_never_duplicates() {
        let repo = MemStore::default();
        register(&repo, &alice()).await.unwrap();
        let err = register(&repo, &alice()).await.unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));
        assert!(repo.rows.borrow().len() == 1);
    }

    #[tokio::test]
    async fn register_bounds_username() {
        let repo = MemStore::default();
        for username in ["ab", "a".repeat(21).as_str()] {
            let req = RegisterRequest {
                username: username.to_string(),
                password: "longpass1".to_string(),
            };
            assert!(matches!(
                register(&repo, &req).await,
                Err(Error::Validation(_))
            ));
        }
    }

    #[tokio::test]
    async fn register_bounds_password() {
        let repo = MemStore::default();
        let req = RegisterRequest {
            username: "alice".to_string(),
            password: "short".to_string(),
        };
        assert!(matches!(
            register(&repo, &req).await,
            Err(Error::Validation(_))
        ));
    }

    #[tokio::test]
    async fn login_roundtrip() {
        let repo = MemStore::default();
        let crypto = crypto();
        register(&repo, &alice()).await.unwrap();
        let resp = login(
            &repo,
            &crypto,
            &LoginRequest {
                username: "alice".to_string(),
                password: "longpass1".to_string(),
            },
        )
        .await
        .unwrap();
        let claims = crypto.decode(&resp.token).unwrap();
        assert!(claims.member() == ID::from(resp.id));
        assert!(claims.username() == "alice");
        assert!(claims.role() == Role::User);
    }

    #[tokio::test]
    async fn login_failure_is_uniform() {
        let repo = MemStore::default();
        let crypto = crypto();
        register(&repo, &alice()).await.unwrap();
        let wrong_password = login(
            &repo,
            &crypto,
            &LoginRequest {
                username: "alice".to_string(),
                password: "longpass2".to_string(),
            },
        )
        .await
        .unwrap_err();
        let unknown_user = login(
            &repo,
            &crypto,
            &LoginRequest {
                username: "nobody".to_string(),
                password: "longpass1".to_string(),
            },
        )
        .await
        .unwrap_err();
        assert!(wrong_password == Error::Unauthenticated);
        assert!(unknown_user == wrong_password);
    }

    #[tokio::test]
    async fn profile_is_sanitized() {
        let repo = MemStore::default();
        register(&repo, &alice()).await.unwrap();
        let info = profile(&repo, ID::from(1)).await.unwrap();
        assert!(info.username == "alice");
        assert!(matches!(
            profile(&repo, ID::from(99)).await,
            Err(Error::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn update_rejects_anonymous() {
        let repo = MemStore::default();
        register(&repo, &alice()).await.unwrap();
        let req = UpdateRequest {
            username: Some("bob".to_string()),
            current_password: None,
            new_password: None,
        };
        let err = update(&repo, &User::Anon, ID::from(1), &req)
            .await
            .unwrap_err();
        assert!(err == Error::Unauthenticated);
    }

    #[tokio::test]
    async fn update_rejects_other_accounts() {
        let repo = MemStore::default();
        register(&repo, &alice()).await.unwrap();
        let req = UpdateRequest {
            username: Some("bob".to_string()),
            current_password: None,
            new_password: None,
        };
        let err = update(&repo, &auth(2), ID::from(1), &req).await.unwrap_err();
        assert!(matches!(err, Error::Forbidden(_)));
        assert!(repo.rows.borrow()[0].1 == "alice");
    }

    #[tokio::test]
    async fn update_requires_a_change() {
        let repo = MemStore::default();
        register(&repo, &alice()).await.unwrap();
        let req = UpdateRequest {
            username: None,
            current_password: None,
            new_password: None,
        };
        assert!(matches!(
            update(&repo, &auth(1), ID::from(1), &req).await,
            Err(Error::Validation(_))
        ));
    }

    #[tokio::test]
    async fn rename_checks_uniqueness() {
        let repo = MemStore::default();
        register(&repo, &alice()).await.unwrap();
        register(
            &repo,
            &RegisterRequest {
                username: "bob".to_string(),
                password: "longpass1".to_string(),
            },
        )
        .await
        .unwrap();
        let req = UpdateRequest {
            username: Some("bob".to_string()),
            current_password: None,
            new_password: None,
        };
        assert!(matches!(
            update(&repo, &auth(1), ID::from(1), &req).await,
            Err(Error::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn password_change_requires_current() {
        let repo = MemStore::default();
        register(&repo, &alice()).await.unwrap();
        let before = repo.hashword(1);
        let req = UpdateRequest {
            username: None,
            current_password: None,
            new_password: Some("longpass2".to_string()),
        };
        assert!(matches!(
            update(&repo, &auth(1), ID::from(1), &req).await,
            Err(Error::Validation(_))
        ));
        assert!(repo.hashword(1) == before);
    }

    #[tokio::test]
    async fn wrong_current_password_keeps_digest() {
        let repo = MemStore::default();
        register(&repo, &alice()).await.unwrap();
        let before = repo.hashword(1);
        let req = UpdateRequest {
            username: None,
            current_password: Some("longpass9".to_string()),
            new_password: Some("longpass2".to_string()),
        };
        assert!(matches!(
            update(&repo, &auth(1), ID::from(1), &req).await,
            Err(Error::Validation(_))
        ));
        assert!(repo.hashword(1) == before);
    }

    #[tokio::test]
    async fn password_change_rotates_digest() {
        let repo = MemStore::default();
        register(&repo, &alice()).await.unwrap();
        let req = UpdateRequest {
            username: None,
            current_password: Some("longpass1".to_string()),
            new_password: Some("longpass2".to_string()),
        };
        update(&repo, &auth(1), ID::from(1), &req).await.unwrap();
        let stored = repo.hashword(1);
        assert!(password::verify("longpass2", &stored));
        assert!(!password::verify("longpass1", &stored));
        assert!(repo.rows.borrow()[0].1 == "alice");
    }

    #[tokio::test]
    async fn rename_preserves_digest() {
        let repo = MemStore::default();
        register(&repo, &alice()).await.unwrap();
        let before = repo.hashword(1);
        let req = UpdateRequest {
            username: Some("alicia".to_string()),
            current_password: None,
            new_password: None,
        };
        let info = update(&repo, &auth(1), ID::from(1), &req).await.unwrap();
        assert!(info.username == "alicia");
        assert!(repo.hashword(1) == before);
    }
}
