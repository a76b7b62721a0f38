use dioxus::logger::tracing;
use dioxus::prelude::*;
use dioxus::router::routable::FromQuery;
use gloo_events::EventListener;
use wasm_bindgen::JsCast;

use blog_core::state::ListState;

use crate::home::Home;
use crate::post::PostDetail;
use crate::theme::{Theme, ThemeToggle};

mod client;
mod components;
mod error;
mod home;
mod post;
mod theme;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
        #[route("/?:..state")]
        Home { state: ListQuery },
        #[route("/post?:id")]
        PostDetail { id: String },
}

impl Route {
    fn list(state: ListState) -> Self {
        Self::Home {
            state: ListQuery(state),
        }
    }
}

/// List-view state carried in the route's query string; the query string is
/// its only persisted representation, so back/forward navigation replays
/// prior states through the router.
#[derive(Clone, Debug, PartialEq, Default)]
struct ListQuery(ListState);

impl FromQuery for ListQuery {
    fn from_query(query: &str) -> Self {
        Self(ListState::from_query(query))
    }
}

impl std::fmt::Display for ListQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.to_query().trim_start_matches('?'))
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let theme = use_signal(Theme::load);
    provide_context(theme);

    // Persist and reflect the theme on every change, including the first.
    use_effect(move || {
        let theme = theme();
        theme.apply();
        theme.store();
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

#[component]
fn Navbar() -> Element {
    let route = use_route::<Route>();
    let state = match &route {
        Route::Home { state } => state.0.clone(),
        _ => ListState::default(),
    };
    let menu_open = use_signal(|| false);

    rsx! {
        header { class: "topbar",
            div { class: "topbar-inner",
                Link { class: "brand", to: Route::list(ListState::default()), "MyBlog" }
                SearchForm { state }
                div { class: "topbar-actions",
                    ThemeToggle {}
                    button {
                        class: "menu-btn",
                        aria_label: "Open menu",
                        onclick: move |_| open_menu(menu_open),
                        "☰"
                    }
                }
            }
        }
        MenuOverlay { open: menu_open }
        main { class: "page",
            Outlet::<Route> {}
        }
    }
}

/// Submitting navigates back to the list with the term and a reset page;
/// the active category filter survives the search.
#[component]
fn SearchForm(state: ListState) -> Element {
    let navigator = use_navigator();
    let initial = state.search.clone();
    let mut term = use_signal(move || initial);

    rsx! {
        form {
            class: "search-form",
            onsubmit: move |event: FormEvent| {
                event.prevent_default();
                navigator.push(Route::list(state.with_search(term.read().as_str())));
            },
            input {
                class: "search-input",
                r#type: "search",
                placeholder: "Search posts…",
                value: "{term}",
                oninput: move |event| term.set(event.value()),
            }
        }
    }
}

/// Mobile navigation sheet. Closed by the close button, the backdrop (not
/// the panel itself), any link inside, or Escape from anywhere on the page.
#[component]
fn MenuOverlay(open: Signal<bool>) -> Element {
    // Kept alive for the component's lifetime; dropped with it.
    use_hook(|| {
        std::rc::Rc::new(web_sys::window().map(|window| {
            EventListener::new(&window, "keydown", move |event| {
                let is_escape = event
                    .dyn_ref::<web_sys::KeyboardEvent>()
                    .is_some_and(|event| event.key() == "Escape");
                if is_escape && *open.peek() {
                    close_menu(open);
                }
            })
        }))
    });

    rsx! {
        div {
            class: if open() { "menu-overlay open" } else { "menu-overlay" },
            aria_hidden: if open() { "false" } else { "true" },
            onclick: move |_| close_menu(open),
            div {
                class: "menu-panel",
                onclick: move |event| event.stop_propagation(),
                button {
                    class: "menu-close",
                    aria_label: "Close menu",
                    onclick: move |_| close_menu(open),
                    "✕"
                }
                nav { class: "menu-links",
                    Link {
                        to: Route::list(ListState::default()),
                        onclick: move |_| close_menu(open),
                        "Home"
                    }
                }
                ThemeToggle {}
            }
        }
    }
}

fn open_menu(mut open: Signal<bool>) {
    open.set(true);
    lock_body_scroll(true);
}

fn close_menu(mut open: Signal<bool>) {
    open.set(false);
    lock_body_scroll(false);
}

fn lock_body_scroll(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };
    let style = body.style();
    let result = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    if result.is_err() {
        tracing::warn!("failed to toggle the body scroll lock");
    }
}
