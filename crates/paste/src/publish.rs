//! Snippet workflows: publication and the three read paths.
//!
//! Publication validates exhaustively before its single store write, in
//! the same order the checks are cheapest to fail: field presence, the
//! language lookup, slug derivation, metadata bounds, slug collision.

use super::*;
use cbn_auth::Member;
use cbn_auth::User;
use cbn_auth::policy;
use cbn_auth::policy::Action;
use cbn_core::Error;
use cbn_core::ID;

/// Maximum title length.
pub const MAX_TITLE: usize = 50;
/// Maximum description length.
pub const MAX_DESCRIPTION: usize = 65_500;

/// Validate, escape, attribute, persist; returns the canonical access
/// URL built from the configured site base.
pub async fn publish(
    repo: &impl PasteRepository,
    user: &User,
    site: &str,
    req: &PostPasteRequest,
) -> Result<PasteUrl, Error> {
    policy::authorize(user, Action::CreatePaste)?;
    if req.slug.is_empty() {
        return Err(Error::validation("no slug"));
    }
    if req.code.is_empty() {
        return Err(Error::validation("no code"));
    }
    if repo.language(req.language).await?.is_none() {
        return Err(Error::validation("invalid language"));
    }
    let slug = slug::derive(&req.slug)?;
    if let Some(ref title) = req.title {
        if title.len() > MAX_TITLE {
            return Err(Error::validation("title too long"));
        }
    }
    if let Some(ref description) = req.description {
        if description.len() > MAX_DESCRIPTION {
            return Err(Error::validation("description too long"));
        }
    }
    if repo.get(&slug).await?.is_some() {
        return Err(Error::conflict("slug exists"));
    }
    let draft = Draft {
        member: policy::attribution(user, req.private),
        title: req.title.clone(),
        description: req.description.clone(),
        slug: slug.clone(),
        code: escape::escape(&req.code),
        language: req.language,
        private: req.private,
    };
    repo.create(&draft).await.map_err(|e| match e {
        Error::Storage(_) => Error::storage("code not created"),
        other => other,
    })?;
    Ok(PasteUrl {
        url: format!("{}/{}", site, slug),
    })
}

/// Fetch one snippet by slug.
pub async fn fetch(
    repo: &impl PasteRepository,
    user: &User,
    slug: &str,
) -> Result<PasteInfo, Error> {
    policy::authorize(user, Action::ReadPaste)?;
    repo.get(slug)
        .await?
        .map(PasteInfo::from)
        .ok_or_else(|| Error::not_found("code not found"))
}

/// Every snippet, newest first. Admin only.
pub async fn all(repo: &impl PasteRepository, user: &User) -> Result<Vec<PasteInfo>, Error> {
    policy::authorize(user, Action::ListAllPastes)?;
    repo.all()
        .await
        .map(|pastes| pastes.into_iter().map(PasteInfo::from).collect())
}

/// Snippets owned by one account.
pub async fn by_member(
    repo: &impl PasteRepository,
    user: &User,
    member: ID<Member>,
) -> Result<Vec<PasteInfo>, Error> {
    policy::authorize(user, Action::ListMemberPastes)?;
    repo.by_member(member)
        .await
        .map(|pastes| pastes.into_iter().map(PasteInfo::from).collect())
}
