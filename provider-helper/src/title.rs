//! Helpers reading release metadata out of free text titles.

use once_cell::sync::Lazy;
use regex::Regex;

static GROUP_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[([^\]]+)\]").unwrap());
// ascii boundaries so that CJK characters around the token count as separators
static RESOLUTION: Lazy<Regex> = Lazy::new(|| {
    regex::RegexBuilder::new(r"(?-u:\b)([0-9]{3,4}p)(?-u:\b)")
        .case_insensitive(true)
        .build()
        .unwrap()
});

/// Splits a `[group]` prefix off a title.
///
/// Returns the group and the remaining title, trimmed, or `None` when the
/// title does not start with a closed bracket.
pub fn split_group_prefix(title: &str) -> Option<(&str, &str)> {
    let found = GROUP_PREFIX.captures(title)?;
    let prefix = found.get(0)?;
    let group = found.get(1)?;
    Some((group.as_str(), title[prefix.end()..].trim()))
}

/// Resolves the release group of an entry.
///
/// An explicit `label` always wins and leaves the title as is, otherwise the
/// group is taken out of the title prefix. Returns `(name, release_group)`.
pub fn resolve_release_group(title: &str, label: &str) -> (String, String) {
    let title = title.trim();
    let label = label.trim();
    if !label.is_empty() {
        return (title.to_string(), label.to_string());
    }
    match split_group_prefix(title) {
        Some((group, rest)) => (rest.to_string(), group.to_string()),
        None => (title.to_string(), String::new()),
    }
}

/// First resolution token like `720p` or `1080P`, case preserved.
pub fn parse_resolution(title: &str) -> Option<&str> {
    RESOLUTION
        .captures(title)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
}
