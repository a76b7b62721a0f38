use derive_more::Display;
use dioxus::prelude::*;
use gloo_storage::{LocalStorage, Storage};

const THEME_KEY: &str = "theme";
const THEME_ATTR: &str = "data-theme";

/// The one piece of state that outlives a render cycle. Stored under a fixed
/// local-storage key and mirrored to a document-level attribute that the
/// stylesheet keys off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub(crate) enum Theme {
    #[default]
    #[display("light")]
    Light,
    #[display("dark")]
    Dark,
}

impl Theme {
    pub(crate) fn load() -> Self {
        match LocalStorage::get::<String>(THEME_KEY) {
            Ok(saved) if saved == "dark" => Self::Dark,
            _ => Self::Light,
        }
    }

    pub(crate) fn store(self) {
        let _ = LocalStorage::set(THEME_KEY, self.to_string());
    }

    pub(crate) fn apply(self) {
        let root = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element());
        if let Some(root) = root {
            let _ = root.set_attribute(THEME_ATTR, &self.to_string());
        }
    }

    pub(crate) fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Theme switch, shared by the top bar and the mobile menu. Every click
/// flips the stored theme; persistence and the document attribute are
/// handled by the effect watching the shared signal.
#[component]
pub(crate) fn ThemeToggle() -> Element {
    let mut theme = use_context::<Signal<Theme>>();

    rsx! {
        button {
            class: "theme-toggle",
            aria_label: "Toggle theme",
            onclick: move |_| {
                let next = theme().flipped();
                theme.set(next);
            },
            if theme() == Theme::Dark { "☀" } else { "☾" }
        }
    }
}
