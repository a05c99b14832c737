//! Theme management module for the application.
//!
//! Dark and light themes, toggled from the top header. The choice is kept
//! in localStorage and applied as a `data-theme` attribute plus a body class.

use crate::shared::storage;
use leptos::prelude::*;
use web_sys::window;

/// Available themes in the application.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Returns the theme name as a string (used for CSS and localStorage).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Icon shown on the toggle button.
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Dark => "🌙",
            Theme::Light => "☀️",
        }
    }
}

const THEME_STORAGE_KEY: &str = "justlaw-theme";

fn load_theme_from_storage() -> Theme {
    storage::get_item(THEME_STORAGE_KEY)
        .map(|s| Theme::from_str(&s))
        .unwrap_or_default()
}

fn apply_theme(theme: Theme) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let _ = body.set_attribute("data-theme", theme.as_str());
    let class_list = body.class_list();
    let _ = class_list.toggle_with_force("light-mode", theme == Theme::Light);
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Set the theme and persist to storage.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        storage::set_item(THEME_STORAGE_KEY, theme.as_str());
        apply_theme(theme);
    }

    pub fn toggle(&self) {
        self.set_theme(self.theme.get_untracked().toggled());
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial_theme = load_theme_from_storage();
    apply_theme(initial_theme);

    provide_context(ThemeContext {
        theme: RwSignal::new(initial_theme),
    });

    children()
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Single-button dark/light switch.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            class="top-header__icon-btn"
            title="Tema değiştir"
            on:click=move |_| ctx.toggle()
        >
            {move || ctx.theme.get().icon()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_round_trip_names() {
        assert_eq!(Theme::from_str("light"), Theme::Light);
        assert_eq!(Theme::from_str("anything"), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
