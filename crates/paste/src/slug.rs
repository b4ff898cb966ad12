//! Slug derivation: a user-supplied title becomes the snippet's
//! canonical URL identifier.
//!
//! Pure validation; the collision point-lookup lives in the publication
//! workflow. Two concurrent submissions of the same slug can both pass
//! that lookup — the store's unique constraint is the accepted backstop
//! for the race (mapped to a conflict, never a generic failure).

use cbn_core::Error;

/// Maximum slug length after normalization.
pub const MAX_SLUG: usize = 10;

/// Slugs that collide with route segments.
pub const RESERVED: [&str; 4] = ["api", "user", "admin", "all"];

/// Lowercase, collapse whitespace runs to `-`, strip everything outside
/// `[a-z0-9-_]`. Idempotent: normalizing a normal form is a no-op.
pub fn normalize(source: &str) -> String {
    source
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .filter(|c| matches!(c, 'a'..='z' | '0'..='9' | '-' | '_'))
        .collect()
}

/// Normalize and enforce the length and reserved-word rules.
pub fn derive(source: &str) -> Result<String, Error> {
    let slug = normalize(source);
    if slug.len() > MAX_SLUG {
        return Err(Error::validation("slug too long"));
    }
    if RESERVED.contains(&slug.as_str()) {
        return Err(Error::validation("reserved slug"));
    }
    Ok(slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical(slug: &str) -> bool {
        slug.len() <= MAX_SLUG
            && slug
                .chars()
                .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '-' | '_'))
    }

    #[test]
    fn lowercases_and_hyphenates() {
        assert!(normalize("My Paste") == "my-paste");
        assert!(normalize("a  b\t c") == "a-b-c");
    }

    #[test]
    fn strips_foreign_characters() {
        assert!(normalize("héllo!") == "hllo");
        assert!(normalize("<script>") == "script");
        assert!(normalize("under_score-ok9") == "under_score-ok9");
    }

    #[test]
    fn trims_edge_whitespace() {
        assert!(normalize("  padded  ") == "padded");
    }

    #[test]
    fn empty_input_is_empty() {
        assert!(normalize("") == "");
        assert!(normalize("!!!") == "");
    }

    #[test]
    fn idempotent() {
        for source in ["My Paste", "  padded  ", "héllo!", "a_b-c9", ""] {
            let once = normalize(source);
            assert!(normalize(&once) == once);
            assert!(canonical(&once) || once.len() > MAX_SLUG);
        }
    }

    #[test]
    fn derive_accepts_canonical() {
        assert!(derive("My Paste").unwrap() == "my-paste");
        assert!(canonical(&derive("short").unwrap()));
    }

    #[test]
    fn derive_rejects_long() {
        assert!(matches!(
            derive("My Cool Snippet"),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn derive_rejects_reserved() {
        for source in ["api", "User", "ADMIN", "all"] {
            assert!(matches!(derive(source), Err(Error::Validation(_))));
        }
    }
}
