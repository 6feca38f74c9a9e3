//! Name normalization for catalog and effect lookups.

/// Normalizes a trait, skill, or attribute name for lookup.
///
/// Leading/trailing whitespace is dropped and the name is lowercased, so
/// `"  Athlétisme "` and `"athlétisme"` resolve to the same key.
///
/// # Examples
///
/// ```
/// use xpledger_domain::common::normalize_name;
///
/// assert_eq!(normalize_name("  Force "), "force");
/// assert_eq!(normalize_name("ÉRUDITION"), "érudition");
/// ```
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Returns true when two names are equal after normalization.
pub fn names_match(a: &str, b: &str) -> bool {
    normalize_name(a) == normalize_name(b)
}
