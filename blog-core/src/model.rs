use serde_json::Value;

use crate::fields::{
    pick_str, BODY_KEYS, CATEGORY_NAME_KEYS, CATEGORY_SLUG_KEYS, DATE_KEYS, DESCRIPTION_KEYS,
    ID_KEYS, IMAGE_KEYS, TITLE_KEYS,
};

/// A post category as the API actually sends it: sometimes a bare slug
/// string, sometimes an object carrying slug and display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    Slug(String),
    Named { slug: String, name: String },
}

impl Category {
    /// Builds a category from a raw JSON value. Absent, empty or
    /// unrecognizable input yields `None` rather than a junk chip.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(text) if !text.trim().is_empty() => Some(Self::Slug(text.clone())),
            Value::Object(_) => {
                let slug = pick_str(value, CATEGORY_SLUG_KEYS, "");
                let name = pick_str(value, CATEGORY_NAME_KEYS, "");
                if slug.trim().is_empty() && name.trim().is_empty() {
                    None
                } else {
                    Some(Self::Named { slug, name })
                }
            }
            _ => None,
        }
    }

    /// URL-safe filter token: lowercase, trimmed.
    pub fn slug(&self) -> String {
        match self {
            Self::Slug(text) => text,
            Self::Named { slug, .. } => slug,
        }
        .trim()
        .to_lowercase()
    }

    /// Human-facing label; for a bare slug the original string, verbatim.
    pub fn name(&self) -> &str {
        match self {
            Self::Slug(text) => text,
            Self::Named { name, .. } => name,
        }
    }
}

/// A post normalized at the API boundary. Whatever key aliases the payload
/// used, downstream code only ever sees these fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    /// Stringified id/pk; empty when the payload carried neither, in which
    /// case the post still renders but cannot be linked.
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub category: Option<Category>,
    /// Raw ISO-8601 publication date, formatted at render time.
    pub date: Option<String>,
    /// Body content; falls back to the description when the payload has no
    /// body-like key at all.
    pub body: String,
}

impl Post {
    pub fn from_value(value: &Value) -> Self {
        let description = pick_str(value, DESCRIPTION_KEYS, "");
        let body = pick_str(value, BODY_KEYS, &description);
        Self {
            id: pick_str(value, ID_KEYS, ""),
            title: pick_str(value, TITLE_KEYS, ""),
            image: Some(pick_str(value, IMAGE_KEYS, "")).filter(|text| !text.is_empty()),
            category: value.get("category").and_then(Category::from_value),
            date: Some(pick_str(value, DATE_KEYS, "")).filter(|text| !text.is_empty()),
            description,
            body,
        }
    }
}

/// One page of a list endpoint, normalized from either response shape:
/// a DRF-style `{results, count, next, previous}` object, or a bare array
/// treated as a single full page.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub results: Vec<T>,
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
}

impl Page<Value> {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Array(items) => Self {
                count: items.len() as u64,
                results: items,
                next: None,
                previous: None,
            },
            Value::Object(mut map) => {
                let results = match map.remove("results") {
                    Some(Value::Array(items)) => items,
                    _ => Vec::new(),
                };
                Self {
                    results,
                    count: map.get("count").and_then(Value::as_u64).unwrap_or(0),
                    next: map.get("next").and_then(Value::as_str).map(str::to_string),
                    previous: map.get("previous").and_then(Value::as_str).map(str::to_string),
                }
            }
            _ => Self {
                results: Vec::new(),
                count: 0,
                next: None,
                previous: None,
            },
        }
    }

    pub fn into_posts(self) -> Page<Post> {
        Page {
            results: self.results.iter().map(Post::from_value).collect(),
            count: self.count,
            next: self.next,
            previous: self.previous,
        }
    }

    pub fn into_categories(self) -> Page<Category> {
        Page {
            results: self.results.iter().filter_map(Category::from_value).collect(),
            count: self.count,
            next: self.next,
            previous: self.previous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn category_from_string_is_kept_verbatim() {
        let category = Category::from_value(&json!("sport")).unwrap();
        assert_eq!(category, Category::Slug("sport".into()));
        assert_eq!(category.slug(), "sport");
        assert_eq!(category.name(), "sport");
    }

    #[test]
    fn category_from_object_reads_slug_and_name() {
        let category = Category::from_value(&json!({ "slug": "tech", "name": "Technology" })).unwrap();
        assert_eq!(category.slug(), "tech");
        assert_eq!(category.name(), "Technology");
    }

    #[test]
    fn category_slug_is_lowercased_and_trimmed() {
        let category = Category::from_value(&json!({ "name": " Sport " })).unwrap();
        assert_eq!(category.slug(), "sport");
        assert_eq!(category.name(), " Sport ");
    }

    #[test]
    fn unusable_categories_are_none() {
        assert_eq!(Category::from_value(&json!(null)), None);
        assert_eq!(Category::from_value(&json!("  ")), None);
        assert_eq!(Category::from_value(&json!({})), None);
        assert_eq!(Category::from_value(&json!(7)), None);
    }

    #[test]
    fn post_normalizes_variant_keys() {
        let value = json!({
            "pk": 7,
            "name": "Variant title",
            "excerpt": "Short",
            "thumbnail": "/img/7.jpg",
            "category": { "slug": "tech", "name": "Technology" },
            "pub_date": "2024-01-02T00:00:00Z",
        });
        let post = Post::from_value(&value);
        assert_eq!(post.id, "7");
        assert_eq!(post.title, "Variant title");
        assert_eq!(post.description, "Short");
        assert_eq!(post.image.as_deref(), Some("/img/7.jpg"));
        assert_eq!(post.category.map(|c| c.slug()).as_deref(), Some("tech"));
        assert_eq!(post.date.as_deref(), Some("2024-01-02T00:00:00Z"));
    }

    #[test]
    fn post_with_string_category_keeps_it() {
        let post = Post::from_value(&json!({ "id": 1, "title": "T", "category": "sport" }));
        assert_eq!(post.category, Some(Category::Slug("sport".into())));
    }

    #[test]
    fn post_body_prefers_body_keys() {
        let post = Post::from_value(&json!({ "id": 1, "body": "full text", "description": "D" }));
        assert_eq!(post.body, "full text");
    }

    #[test]
    fn post_body_falls_back_to_description() {
        let post = Post::from_value(&json!({ "id": 42, "title": "T", "description": "D" }));
        assert_eq!(post.body, "D");
    }

    #[test]
    fn bare_post_is_all_fallbacks() {
        let post = Post::from_value(&json!({}));
        assert_eq!(post.id, "");
        assert_eq!(post.title, "");
        assert!(post.image.is_none());
        assert!(post.category.is_none());
        assert!(post.date.is_none());
        assert_eq!(post.body, "");
    }

    #[test]
    fn page_from_array_is_a_single_full_page() {
        let page = Page::from_value(json!([{ "id": 1 }, { "id": 2 }]));
        assert_eq!(page.count, 2);
        assert_eq!(page.results.len(), 2);
        assert!(page.next.is_none());
        assert!(page.previous.is_none());
    }

    #[test]
    fn page_from_object_reads_pagination_fields() {
        let page = Page::from_value(json!({
            "results": [{ "id": 1 }],
            "count": 9,
            "next": "http://api.example.com/posts/?page=3",
            "previous": null,
        }));
        assert_eq!(page.count, 9);
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.next.as_deref(), Some("http://api.example.com/posts/?page=3"));
        assert!(page.previous.is_none());
    }

    #[test]
    fn empty_paginated_object_yields_nothing() {
        let page = Page::from_value(json!({ "results": [], "count": 0, "next": null, "previous": null }));
        assert_eq!(page.count, 0);
        assert!(page.results.is_empty());
    }

    #[test]
    fn junk_payload_is_an_empty_page() {
        let page = Page::from_value(json!("nope"));
        assert_eq!(page.count, 0);
        assert!(page.results.is_empty());
    }

    #[test]
    fn into_posts_normalizes_each_result() {
        let page = Page::from_value(json!([{ "pk": 1, "name": "A" }])).into_posts();
        assert_eq!(page.results[0].id, "1");
        assert_eq!(page.results[0].title, "A");
    }

    #[test]
    fn into_categories_drops_unusable_entries() {
        let page = Page::from_value(json!([{ "slug": "tech" }, {}, "sport"])).into_categories();
        let slugs: Vec<String> = page.results.iter().map(Category::slug).collect();
        assert_eq!(slugs, vec!["tech", "sport"]);
    }
}
