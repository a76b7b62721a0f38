use url::form_urlencoded;

/// The list view's whole state. It lives in the page URL's query string and
/// nowhere else; every load reconstructs it from there, so back/forward
/// navigation replays prior states for free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    /// 1-based page number, never 0.
    pub page: u32,
    /// Category slug filter; empty means all.
    pub category: String,
    /// Free-text search; empty means none.
    pub search: String,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            page: 1,
            category: String::new(),
            search: String::new(),
        }
    }
}

impl ListState {
    /// Parses a query string, with or without the leading `?`. A missing,
    /// non-numeric or zero `page` falls back to 1.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut state = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "page" => state.page = value.parse().ok().filter(|page| *page >= 1).unwrap_or(1),
                "category" => state.category = value.into_owned(),
                "search" => state.search = value.into_owned(),
                _ => {}
            }
        }
        state
    }

    /// Serializes back to a query string: `page` always, `category` and
    /// `search` only when non-empty. Round-trips through [`Self::from_query`].
    pub fn to_query(&self) -> String {
        let page = self.page.to_string();
        build_query(&[
            ("page", page.as_str()),
            ("category", self.category.as_str()),
            ("search", self.search.as_str()),
        ])
    }

    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    /// Switching category restarts from the first page; search is kept.
    pub fn with_category(&self, category: &str) -> Self {
        Self {
            page: 1,
            category: category.to_string(),
            search: self.search.clone(),
        }
    }

    /// A new search restarts from the first page; the category filter is kept.
    pub fn with_search(&self, search: &str) -> Self {
        Self {
            page: 1,
            category: self.category.clone(),
            search: search.trim().to_string(),
        }
    }
}

/// Builds a `?`-prefixed query string from key/value pairs, omitting pairs
/// with empty values. Nothing left means an empty string, never a bare `?`.
pub fn build_query(pairs: &[(&str, &str)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    let mut any = false;
    for (key, value) in pairs {
        if value.is_empty() {
            continue;
        }
        serializer.append_pair(key, value);
        any = true;
    }
    if any {
        format!("?{}", serializer.finish())
    } else {
        String::new()
    }
}

/// Percent-encodes a single URL component, e.g. a post id in a path.
pub fn encode_component(raw: &str) -> String {
    form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_query_omits_empty_values() {
        assert_eq!(build_query(&[("a", ""), ("c", "x")]), "?c=x");
    }

    #[test]
    fn build_query_of_nothing_is_empty() {
        assert_eq!(build_query(&[]), "");
        assert_eq!(build_query(&[("a", "")]), "");
    }

    #[test]
    fn build_query_encodes_values() {
        assert_eq!(build_query(&[("search", "rust lang")]), "?search=rust+lang");
    }

    #[test]
    fn state_round_trips_through_query() {
        let state = ListState {
            page: 4,
            category: "tech".into(),
            search: "foo & bar".into(),
        };
        assert_eq!(ListState::from_query(&state.to_query()), state);
    }

    #[test]
    fn default_state_round_trips() {
        let state = ListState::default();
        assert_eq!(state.to_query(), "?page=1");
        assert_eq!(ListState::from_query("?page=1"), state);
    }

    #[test]
    fn missing_or_bad_page_defaults_to_one() {
        assert_eq!(ListState::from_query("").page, 1);
        assert_eq!(ListState::from_query("page=abc").page, 1);
        assert_eq!(ListState::from_query("page=0").page, 1);
        assert_eq!(ListState::from_query("?category=sport").category, "sport");
    }

    #[test]
    fn unknown_params_are_ignored() {
        let state = ListState::from_query("?page=2&utm_source=x");
        assert_eq!(state.page, 2);
        assert!(state.category.is_empty());
    }

    #[test]
    fn with_helpers_reset_the_page() {
        let state = ListState {
            page: 5,
            category: "tech".into(),
            search: "x".into(),
        };
        assert_eq!(
            state.with_category("sport"),
            ListState {
                page: 1,
                category: "sport".into(),
                search: "x".into(),
            }
        );
        assert_eq!(
            state.with_search("  y  "),
            ListState {
                page: 1,
                category: "tech".into(),
                search: "y".into(),
            }
        );
        assert_eq!(state.with_page(9).page, 9);
        assert_eq!(state.with_page(9).category, "tech");
    }
}
