use blog_core::model::{Category, Page, Post};
use blog_core::state::{build_query, encode_component, ListState};
use gloo_net::http::Request;
use serde_json::Value;

use crate::error::ApiError;

/// Origin of the blog REST API.
pub(crate) const API_BASE: &str = "http://127.0.0.1:8000/api";

#[derive(Clone)]
pub(crate) struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(API_BASE)
    }
}

impl ApiClient {
    pub(crate) fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET `{base}{path}`, decoded as JSON. A non-success status becomes
    /// [`ApiError::Http`] carrying the status code and body text; transport
    /// failures propagate unmodified. No retries, no timeout.
    async fn get(&self, path: &str) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let request = Request::get(&url)
            .header("Accept", "application/json")
            .build()?;
        let response = request.send().await?;

        if response.ok() {
            response.json().await.map_err(ApiError::from)
        } else {
            let status = response.status();
            let message = response.text().await.unwrap_or_default();
            Err(ApiError::Http { status, message })
        }
    }

    /// All categories; tolerates both the bare-array and paginated shapes.
    pub(crate) async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        let payload = self.get("/categories/").await?;
        Ok(Page::from_value(payload).into_categories().results)
    }

    /// One page of posts for the given list state.
    pub(crate) async fn posts(&self, state: &ListState) -> Result<Page<Post>, ApiError> {
        let payload = self.get(&format!("/posts/{}", state.to_query())).await?;
        Ok(Page::from_value(payload).into_posts())
    }

    pub(crate) async fn post_by_id(&self, id: &str) -> Result<Post, ApiError> {
        let payload = self
            .get(&format!("/posts/{}/", encode_component(id)))
            .await?;
        Ok(Post::from_value(&payload))
    }

    /// First page of posts sharing a category, for the related section.
    pub(crate) async fn related(&self, category: &str) -> Result<Vec<Post>, ApiError> {
        let query = build_query(&[("category", category), ("page", "1")]);
        let payload = self.get(&format!("/posts/{}", query)).await?;
        Ok(Page::from_value(payload).into_posts().results)
    }
}
