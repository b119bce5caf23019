//! URL identifiers for catalog entries.
//!
//! Categories and subcategories may carry an explicit slug. When they don't,
//! one is derived from the display name so every catalog entry has a stable,
//! non-empty identifier.

/// Identifier used when neither a slug nor a usable name is available.
pub const FALLBACK_SLUG: &str = "uncategorized";

/// Derive the public identifier for a catalog entry.
///
/// Returns the explicit slug (trimmed) when it is present and non-blank.
/// Otherwise the name is lowercased and each run of whitespace is replaced
/// with a single hyphen.
///
/// ```
/// use shopfront_core::derive_slug;
///
/// assert_eq!(derive_slug(Some("tools"), "Tools"), "tools");
/// assert_eq!(derive_slug(None, "Home Goods"), "home-goods");
/// assert_eq!(derive_slug(Some(""), "Outdoor  Lighting"), "outdoor-lighting");
/// ```
#[must_use]
pub fn derive_slug(slug: Option<&str>, name: &str) -> String {
    if let Some(explicit) = slug.map(str::trim).filter(|s| !s.is_empty()) {
        return explicit.to_owned();
    }

    let derived = name
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-");

    if derived.is_empty() {
        FALLBACK_SLUG.to_owned()
    } else {
        derived
    }
}
