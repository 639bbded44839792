//! Slug and route conventions.
//!
//! Every landing page is addressed as `{prefix}/{slug}`, where the prefix
//! comes from the page's category. Slugs are lowercase ASCII words joined by
//! single dashes, so they survive as URL path segments without escaping:
//!
//! - `newoldstamp` → valid
//! - `hipaa-email-signatures` → valid
//! - `Gmail`, `gmail--setup`, `-gmail`, `gmail/setup` → invalid

/// Check a slug against the `[a-z0-9]+(-[a-z0-9]+)*` convention.
pub fn is_url_safe_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .split('-')
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()))
}

/// Join a route prefix and a slug into a canonical path.
///
/// Tolerates a trailing slash on the prefix:
/// - `("/compare", "foo")` → `/compare/foo`
/// - `("/compare/", "foo")` → `/compare/foo`
pub fn canonical_path(prefix: &str, slug: &str) -> String {
    format!("{}/{}", prefix.trim_end_matches('/'), slug)
}

/// Identity of a record in reports: its slug, or `#<index>` when the slug is
/// missing or unusable.
pub fn record_label(index: usize, slug: Option<&str>) -> String {
    match slug {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => format!("#{index}"),
    }
}
