use chrono::{DateTime, NaiveDate};
use serde_json::Value;

// Canonical field -> accepted source keys, in priority order. The API has
// shipped several serializer versions; every lookup goes through this table
// once, right after a fetch, never per render.
pub const ID_KEYS: &[&str] = &["id", "pk"];
pub const TITLE_KEYS: &[&str] = &["title", "name"];
pub const DESCRIPTION_KEYS: &[&str] = &["description", "excerpt", "short_description", "summary"];
pub const IMAGE_KEYS: &[&str] = &["image", "thumbnail", "cover", "image_url"];
pub const DATE_KEYS: &[&str] = &["created_at", "created", "published_at", "pub_date", "date"];
pub const BODY_KEYS: &[&str] = &["content", "body", "text", "html"];
pub const CATEGORY_SLUG_KEYS: &[&str] = &["slug", "name", "title"];
pub const CATEGORY_NAME_KEYS: &[&str] = &["name", "title", "slug"];

/// Returns the first key whose value is present, non-null and non-blank.
/// The value keeps its native JSON type; text conversion happens only for
/// the blankness check. Missing keys and non-object records are not errors.
pub fn pick<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| {
        let value = record.get(key)?;
        if value.is_null() || display_text(value).trim().is_empty() {
            return None;
        }
        Some(value)
    })
}

/// [`pick`] rendered to text, with a fallback when nothing matches.
pub fn pick_str(record: &Value, keys: &[&str], fallback: &str) -> String {
    match pick(record, keys) {
        Some(value) => display_text(value),
        None => fallback.to_string(),
    }
}

fn display_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Renders an ISO-8601 timestamp (or bare date) as `DD Mon YYYY`.
/// Absent or unparseable input renders as nothing rather than an error.
pub fn format_date(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%d %b %Y").to_string();
    }
    let head = raw.get(..10).unwrap_or(raw);
    if let Ok(parsed) = NaiveDate::parse_from_str(head, "%Y-%m-%d") {
        return parsed.format("%d %b %Y").to_string();
    }
    String::new()
}
