//! The single authorization decision table.
//!
//! Every route resolves a [`User`] and asks this module for a verdict;
//! no role or ownership check lives anywhere else. Denials distinguish
//! [`Error::Unauthenticated`] (no usable identity, 401) from
//! [`Error::Forbidden`] (resolved identity, insufficient rights, 403).

use super::*;
use cbn_core::Error;
use cbn_core::ID;

/// Actions a caller can attempt against the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Fetch one snippet by slug.
    ReadPaste,
    /// List every snippet, newest first.
    ListAllPastes,
    /// Read a sanitized account profile.
    ReadProfile,
    /// List snippets owned by one account.
    ListMemberPastes,
    /// Publish a snippet.
    CreatePaste,
    /// Mutate the given account's username or credential.
    UpdateMember(ID<Member>),
}

/// Stateless verdict over `(identity, action)`.
pub fn authorize(user: &User, action: Action) -> Result<(), Error> {
    match action {
        Action::ReadPaste => Ok(()),
        Action::ReadProfile => Ok(()),
        Action::ListMemberPastes => Ok(()),
        Action::CreatePaste => Ok(()),
        Action::ListAllPastes => match user {
            User::Anon => Err(Error::Unauthenticated),
            User::Auth(claims) if claims.role() == Role::Admin => Ok(()),
            User::Auth(_) => Err(Error::forbidden("admin only")),
        },
        Action::UpdateMember(target) => match user {
            User::Anon => Err(Error::Unauthenticated),
            User::Auth(claims) if claims.member() == target => Ok(()),
            User::Auth(_) => Err(Error::forbidden("you can only modify yourself")),
        },
    }
}

/// Ownership attribution for a new snippet: the caller, iff authenticated
/// and the submission is not marked private; otherwise ownerless.
pub fn attribution(user: &User, private: bool) -> Option<ID<Member>> {
    if private { None } else { user.id() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(id: i64, role: Role) -> Claims {
        let member = Member::new(ID::from(id), format!("user{}", id), role);
        Claims::new(&member, "cbn", std::time::Duration::from_secs(3600))
    }

    #[test]
    fn public_actions_allow_anyone() {
        for action in [
            Action::ReadPaste,
            Action::ReadProfile,
            Action::ListMemberPastes,
            Action::CreatePaste,
        ] {
            assert!(authorize(&User::Anon, action).is_ok());
            assert!(authorize(&User::from(claims(1, Role::User)), action).is_ok());
        }
    }

    #[test]
    fn listing_all_requires_admin() {
        assert!(matches!(
            authorize(&User::Anon, Action::ListAllPastes),
            Err(Error::Unauthenticated)
        ));
        assert!(matches!(
            authorize(&User::from(claims(1, Role::User)), Action::ListAllPastes),
            Err(Error::Forbidden(_))
        ));
        assert!(authorize(&User::from(claims(1, Role::Admin)), Action::ListAllPastes).is_ok());
    }

    #[test]
    fn update_requires_owner() {
        let target = Action::UpdateMember(ID::from(1));
        assert!(matches!(
            authorize(&User::Anon, target),
            Err(Error::Unauthenticated)
        ));
        assert!(matches!(
            authorize(&User::from(claims(2, Role::User)), target),
            Err(Error::Forbidden(_))
        ));
        assert!(authorize(&User::from(claims(1, Role::User)), target).is_ok());
    }

    #[test]
    fn admin_cannot_update_others() {
        let target = Action::UpdateMember(ID::from(1));
        assert!(matches!(
            authorize(&User::from(claims(2, Role::Admin)), target),
            Err(Error::Forbidden(_))
        ));
    }

    #[test]
    fn attribution_follows_visibility() {
        let authed = User::from(claims(5, Role::User));
        assert!(attribution(&authed, false) == Some(ID::from(5)));
        assert!(attribution(&authed, true) == None);
        assert!(attribution(&User::Anon, false) == None);
        assert!(attribution(&User::Anon, true) == None);
    }
}
