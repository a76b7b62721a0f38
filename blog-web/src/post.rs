use dioxus::logger::tracing;
use dioxus::prelude::*;

use blog_core::model::Post;
use blog_core::state::ListState;

use crate::client::ApiClient;
use crate::components::{cover_src, meta_date, PostCardGrid, PostCardSmall, SkeletonCard};
use crate::Route;

/// Cap on related posts shown under the article.
const RELATED_LIMIT: usize = 6;

#[component]
pub(crate) fn PostDetail(id: String) -> Element {
    let exclude = id.clone();

    let mut post = use_resource(use_reactive!(|(id,)| async move {
        // An empty id renders a message without ever hitting the API.
        if id.trim().is_empty() {
            return None;
        }
        Some(ApiClient::default().post_by_id(&id).await)
    }));

    rsx! {
        section { class: "detail",
            match post.read().as_ref() {
                Some(None) => rsx! {
                    div { class: "card",
                        div { class: "card-body",
                            p { class: "desc", "No post id in the URL." }
                        }
                    }
                },
                Some(Some(Ok(post))) => rsx! {
                    PostArticle { post: post.clone() }
                    RelatedSection {
                        category: post.category.as_ref().map(|c| c.slug()).unwrap_or_default(),
                        exclude: exclude.clone(),
                    }
                },
                Some(Some(Err(error))) => rsx! {
                    div { class: "load-error",
                        p { class: "desc", "The post failed to load: {error}" }
                        button { class: "retry", onclick: move |_| post.restart(), "Try again" }
                    }
                },
                None => rsx! {
                    SkeletonCard { small: false }
                },
            }
        }
    }
}

#[component]
fn PostArticle(post: Post) -> Element {
    let slug = post
        .category
        .as_ref()
        .map(|category| category.slug())
        .unwrap_or_default();
    let label = post
        .category
        .as_ref()
        .map(|category| category.name().trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| slug.clone());
    let badge = if label.is_empty() { "post".to_string() } else { label.clone() };
    let crumb = if label.is_empty() { "Category".to_string() } else { label.clone() };

    rsx! {
        document::Title { "{post.title} — MyBlog" }
        nav { class: "breadcrumb",
            Link { to: Route::list(ListState::default()), "Home" }
            span { " / " }
            Link { to: Route::list(ListState::default().with_category(&slug)), "{crumb}" }
            span { " / " }
            span { "{post.title}" }
        }
        article { class: "card detail-card",
            img { class: "cover", src: cover_src(&post), alt: "cover" }
            div { class: "card-body",
                div { class: "meta", span { "{meta_date(&post)}" } }
                h1 { class: "title detail-title", "{post.title}" }
                div { class: "badge", "#{badge}" }
                // The API may return HTML body content; plain text renders
                // unchanged through the same path.
                div { class: "content", dangerous_inner_html: post.body.clone() }
            }
        }
    }
}

/// Posts sharing the article's category, minus the article itself. A failure
/// here degrades to the empty message; it never takes the article down.
#[component]
fn RelatedSection(category: String, exclude: String) -> Element {
    let related = use_resource(use_reactive!(|(category, exclude)| async move {
        let result = ApiClient::default().related(&category).await;
        if let Err(error) = &result {
            tracing::warn!("related posts fetch failed: {error}");
        }
        result.map(|posts| {
            posts
                .into_iter()
                .filter(|post| post.id != exclude)
                .take(RELATED_LIMIT)
                .collect::<Vec<Post>>()
        })
    }));

    rsx! {
        section { class: "related",
            h2 { class: "section-title", "Related posts" }
            match related.read().as_ref() {
                Some(Ok(posts)) if !posts.is_empty() => rsx! {
                    div { class: "related-wrap",
                        for post in posts.iter().take(3).cloned() {
                            PostCardSmall { post }
                        }
                    }
                    div { class: "related-grid",
                        for post in posts.iter().cloned() {
                            PostCardGrid { post }
                        }
                    }
                },
                Some(_) => rsx! {
                    p { class: "desc", "No related posts found." }
                },
                None => rsx! {
                    div { class: "related-grid",
                        SkeletonCard { small: true }
                        SkeletonCard { small: true }
                        SkeletonCard { small: true }
                    }
                },
            }
        }
    }
}
