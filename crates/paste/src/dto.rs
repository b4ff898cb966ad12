use super::*;
use cbn_core::Unique;
use serde::Deserialize;
use serde::Serialize;

/// Publication request. `slug` is the free-form slug source, not the
/// final identifier; `language` must resolve against the closed lookup
/// set. A missing or mistyped field fails JSON extraction with 400
/// before the workflow runs.
#[derive(Deserialize)]
pub struct PostPasteRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub slug: String,
    pub code: String,
    pub language: i32,
    pub private: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasteInfo {
    pub id: i64,
    pub user_id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub slug: String,
    pub code: String,
    pub language: i32,
    pub private: bool,
    /// Seconds since the Unix epoch.
    pub created_at: i64,
}

impl From<Paste> for PasteInfo {
    fn from(paste: Paste) -> Self {
        let created_at = paste
            .created_at()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0);
        Self {
            id: paste.id().inner(),
            user_id: paste.member().map(|m| m.inner()),
            title: paste.title().map(str::to_string),
            description: paste.description().map(str::to_string),
            slug: paste.slug().to_string(),
            code: paste.code().to_string(),
            language: paste.language(),
            private: paste.private(),
            created_at,
        }
    }
}

/// Canonical access URL for a freshly published snippet.
#[derive(Debug, Serialize)]
pub struct PasteUrl {
    pub url: String,
}
