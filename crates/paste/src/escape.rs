//! Markup neutralization for stored content.
//!
//! `<` and `>` become entities and line breaks become `<br>` markers so
//! embedded markup cannot execute when the snippet is rendered verbatim.
//! This is a defensive transform for one rendering path, not a full
//! sanitizer: attribute contexts, quotes, and ampersands pass through.

/// Escape raw snippet content for storage.
pub fn escape(code: &str) -> String {
    code.replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\n', "<br>")
}
