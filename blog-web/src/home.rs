use dioxus::logger::tracing;
use dioxus::prelude::*;

use blog_core::model::{Category, Page, Post};
use blog_core::pagination::Pagination;
use blog_core::state::ListState;

use crate::client::ApiClient;
use crate::components::{
    PostCardFeatured, PostCardGrid, PostCardSmall, SkeletonFeatured, SkeletonGrid,
};
use crate::{ListQuery, Route};

/// The list view. All of its state arrives through the route; chips,
/// pagination and search never touch the rendered tree directly, they only
/// navigate, and the resources below restart when the route state changes.
/// Restarting also drops the in-flight future of a superseded navigation,
/// so a slow stale response can never overwrite a newer page.
#[component]
pub(crate) fn Home(state: ListQuery) -> Element {
    let state = state.0;

    let categories = use_resource(use_reactive!(|state| async move {
        let _ = state; // categories reload with every list-state change
        let result = ApiClient::default().categories().await;
        if let Err(error) = &result {
            tracing::warn!("categories fetch failed: {error}");
        }
        result
    }));

    let mut posts = use_resource(use_reactive!(|state| async move {
        ApiClient::default().posts(&state).await
    }));

    rsx! {
        section { class: "chips-row",
            match categories.read().as_ref() {
                Some(Ok(list)) => rsx! {
                    CategoryChips { categories: list.clone(), state: state.clone() }
                },
                Some(Err(_)) => rsx! {
                    p { class: "desc", "Categories could not be loaded." }
                },
                None => rsx! {},
            }
        }
        match posts.read().as_ref() {
            Some(Ok(page)) => rsx! {
                ListResults { page: page.clone(), state: state.clone() }
            },
            Some(Err(error)) => rsx! {
                div { class: "load-error",
                    p { class: "desc", "Posts failed to load: {error}" }
                    button { class: "retry", onclick: move |_| posts.restart(), "Try again" }
                }
            },
            None => rsx! {
                SkeletonFeatured {}
                SkeletonGrid { count: 6 }
            },
        }
    }
}

/// One loaded page: the first three results go to the featured block, the
/// remainder to the grid, and the pagination bar is derived from the page's
/// count and neighbour URLs.
#[component]
fn ListResults(page: Page<Post>, state: ListState) -> Element {
    let featured: Vec<Post> = page.results.iter().take(3).cloned().collect();
    let rest: Vec<Post> = page.results.iter().skip(3).cloned().collect();
    let pagination = Pagination::compute(&page, state.page, page.page_size_guess());

    rsx! {
        FeaturedSection { posts: featured }
        PostsGrid { posts: rest }
        PaginationBar { pagination, state }
    }
}

#[component]
fn CategoryChips(categories: Vec<Category>, state: ListState) -> Element {
    rsx! {
        div { class: "chips",
            Link {
                class: if state.category.is_empty() { "chip active" } else { "chip" },
                to: Route::list(state.with_category("")),
                "#All"
            }
            for category in categories {
                CategoryChip { category, state: state.clone() }
            }
        }
    }
}

#[component]
fn CategoryChip(category: Category, state: ListState) -> Element {
    let slug = category.slug();
    rsx! {
        Link {
            class: if slug == state.category { "chip active" } else { "chip" },
            to: Route::list(state.with_category(&slug)),
            "#{category.name()}"
        }
    }
}

/// First result large, the next two stacked beside it.
#[component]
fn FeaturedSection(posts: Vec<Post>) -> Element {
    if posts.is_empty() {
        return rsx! {
            section { class: "featured",
                p { class: "desc", "No posts found." }
            }
        };
    }
    let main = posts[0].clone();
    let side: Vec<Post> = posts.iter().skip(1).take(2).cloned().collect();
    rsx! {
        section { class: "featured",
            PostCardFeatured { post: main }
            div { class: "side",
                for post in side {
                    PostCardSmall { post }
                }
            }
        }
    }
}

#[component]
fn PostsGrid(posts: Vec<Post>) -> Element {
    rsx! {
        section { class: "posts-grid",
            if posts.is_empty() {
                p { class: "desc", "No posts found." }
            }
            for post in posts {
                PostCardGrid { post }
            }
        }
    }
}

#[component]
fn PaginationBar(pagination: Pagination, state: ListState) -> Element {
    let navigator = use_navigator();
    let previous = pagination.previous;
    let next = pagination.next;
    let prev_state = state.clone();
    let next_state = state.clone();

    rsx! {
        nav { class: "pagination",
            // Dimming instead of disabling matches the stylesheet; the
            // handler still refuses to navigate without a page number.
            button {
                class: "pill arrow",
                style: if previous.is_some() { "opacity:1" } else { "opacity:.4" },
                onclick: move |_| {
                    if let Some(page) = previous {
                        navigator.push(Route::list(prev_state.with_page(page)));
                    }
                },
                "←"
            }
            div { class: "page-nums",
                for page in pagination.window.clone() {
                    PagePill { page, active: page == pagination.current, state: state.clone() }
                }
            }
            button {
                class: "pill arrow",
                style: if next.is_some() { "opacity:1" } else { "opacity:.4" },
                onclick: move |_| {
                    if let Some(page) = next {
                        navigator.push(Route::list(next_state.with_page(page)));
                    }
                },
                "→"
            }
        }
    }
}

#[component]
fn PagePill(page: u32, active: bool, state: ListState) -> Element {
    rsx! {
        Link {
            class: if active { "pill active" } else { "pill" },
            to: Route::list(state.with_page(page)),
            "{page}"
        }
    }
}
