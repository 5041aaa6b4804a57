//! URL slugification.
//!
//! Converts titles and names to lowercase, hyphenated, ASCII-only slugs
//! via the `slug` crate.

/// Characters dropped without leaving a separator behind ("Don't" → "dont").
const ELIDED_CHARS: &[char] = &['\'', '"', '`'];

/// Convert text to a URL-safe slug.
///
/// Quotes are dropped first, then `slug` transliterates ("Café" → "cafe",
/// "你好" → "ni-hao") and collapses every run of other characters into `-`.
/// Returns an empty string when nothing slug-worthy remains.
pub fn slugify(text: &str) -> String {
    let elided: String = text.chars().filter(|c| !ELIDED_CHARS.contains(c)).collect();
    slug::slugify(elided)
}

/// Pick the slug of the first candidate that produces a non-empty one.
pub fn first_slug<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .map(slugify)
        .find(|slug| !slug.is_empty())
}

/// Slug used when no candidate field yields one: `node-` plus a stable hash prefix.
pub fn fallback_slug(id: &str) -> String {
    let hash = blake3::hash(id.as_bytes());
    format!("node-{}", &hex::encode(hash.as_bytes())[..8])
}

/// Check that a slug is non-empty and made only of `[a-z0-9-]`.
#[cfg(test)]
pub fn is_url_safe(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
