use std::sync::LazyLock;

use regex::Regex;

// Anchored so extension-like substrings in the middle of a name survive.
static EXTENSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.\w{1,4}$").unwrap());

/// Collapse a raw import path literal into a canonical short name.
///
/// Surrounding quotes and whitespace are trimmed, path prefixes are
/// dropped for both separator styles, and a trailing file extension
/// (dot plus 1-4 word characters) is removed.
///
/// Normalization is pure and idempotent on already-canonical names.
///
/// # Examples
///
/// ```
/// use deplens::engine::normalize_target;
///
/// assert_eq!(normalize_target("'./components/button.tsx'"), "button");
/// assert_eq!(normalize_target(r"..\pkg\util.js"), "util");
/// assert_eq!(normalize_target("react"), "react");
/// ```
pub fn normalize_target(raw: &str) -> String {
    let trimmed = raw.trim_matches(['"', '\'', ' ']);

    // Keep only the last path segment, whichever separator was used.
    let name = trimmed.rsplit('/').next().unwrap_or(trimmed);
    let name = name.rsplit('\\').next().unwrap_or(name);

    EXTENSION_REGEX.replace(name, "").into_owned()
}
