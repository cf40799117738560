//! Identifier normalization

/// Normalize a display name into a comparable id.
///
/// Lowercases and strips everything that is not ASCII alphanumeric, so
/// `"Sword of Ruin"`, `"sword-of-ruin"`, and `"swordofruin"` all compare
/// equal. Every name comparison in the workspace goes through this.
pub fn to_id(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
