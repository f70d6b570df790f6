pub mod artist;
pub mod show;
pub mod venue;

/// Case-insensitive substring test with full Unicode folding.
///
/// SQLite's `lower()` and `LIKE` only fold ASCII, so name search filters
/// in Rust. An empty term matches every name.
pub(crate) fn name_contains(name: &str, term: &str) -> bool {
    name.to_lowercase().contains(&term.to_lowercase())
}

pub(crate) fn encode_genres(genres: &[String]) -> anyhow::Result<String> {
    Ok(serde_json::to_string(genres)?)
}

pub(crate) fn decode_genres(raw: Option<&str>) -> Vec<String> {
    raw.and_then(|s| serde_json::from_str(s).ok())
        .unwrap_or_default()
}
