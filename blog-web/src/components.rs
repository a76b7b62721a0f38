use dioxus::prelude::*;

use blog_core::fields::format_date;
use blog_core::model::Post;

use crate::Route;

/// Shown when a post has no usable image field.
pub(crate) const PLACEHOLDER_IMAGE: &str = "https://picsum.photos/1200/800?blur=2";

pub(crate) fn cover_src(post: &Post) -> String {
    post.image
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
}

pub(crate) fn badge_label(post: &Post) -> String {
    post.category
        .as_ref()
        .map(|category| category.slug())
        .filter(|slug| !slug.is_empty())
        .unwrap_or_else(|| "post".to_string())
}

pub(crate) fn meta_date(post: &Post) -> String {
    post.date.as_deref().map(format_date).unwrap_or_default()
}

fn detail_route(post: &Post) -> Route {
    Route::PostDetail {
        id: post.id.clone(),
    }
}

#[component]
pub(crate) fn PostCardFeatured(post: Post) -> Element {
    rsx! {
        Link { class: "card", to: detail_route(&post),
            img { class: "cover", src: cover_src(&post), alt: "cover" }
            div { class: "card-body",
                div { class: "meta", span { "{meta_date(&post)}" } }
                div { class: "postlink",
                    div {
                        div { class: "title", "{post.title}" }
                        p { class: "desc", "{post.description}" }
                        div { class: "badge", "#{badge_label(&post)}" }
                    }
                    div { class: "arrow", "↗" }
                }
            }
        }
    }
}

#[component]
pub(crate) fn PostCardSmall(post: Post) -> Element {
    rsx! {
        Link { class: "card", to: detail_route(&post),
            img { class: "small-cover", src: cover_src(&post), alt: "cover" }
            div { class: "card-body",
                div { class: "meta", span { "{meta_date(&post)}" } }
                div { class: "title title-small", "{post.title}" }
                p { class: "desc", "{post.description}" }
                div { class: "badge", "#{badge_label(&post)}" }
            }
        }
    }
}

#[component]
pub(crate) fn PostCardGrid(post: Post) -> Element {
    rsx! {
        Link { class: "card", to: detail_route(&post),
            img { class: "cover cover-grid", src: cover_src(&post), alt: "cover" }
            div { class: "card-body",
                div { class: "meta", span { "{meta_date(&post)}" } }
                div { class: "postlink",
                    div {
                        div { class: "title", "{post.title}" }
                        p { class: "desc", "{post.description}" }
                        div { class: "badge", "#{badge_label(&post)}" }
                    }
                    div { class: "arrow", "↗" }
                }
            }
        }
    }
}

#[component]
pub(crate) fn SkeletonCard(small: bool) -> Element {
    rsx! {
        div { class: "card skeleton",
            div { class: if small { "sk-img sk-img-small" } else { "sk-img" } }
            div { class: "sk-body",
                div { class: "sk-line", style: "width:40%" }
                div { class: "sk-line", style: "width:75%" }
                if !small {
                    div { class: "sk-line", style: "width:55%" }
                }
            }
        }
    }
}

#[component]
pub(crate) fn SkeletonFeatured() -> Element {
    rsx! {
        section { class: "featured",
            SkeletonCard { small: false }
            div { class: "side",
                SkeletonCard { small: true }
                SkeletonCard { small: true }
            }
        }
    }
}

#[component]
pub(crate) fn SkeletonGrid(count: usize) -> Element {
    rsx! {
        section { class: "posts-grid",
            for _index in 0..count {
                SkeletonCard { small: false }
            }
        }
    }
}
