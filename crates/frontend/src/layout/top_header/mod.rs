//! TopHeader component - application top bar.
//!
//! Contains the sidebar toggle, the brand and the theme toggle.

use crate::layout::global_context::{AppGlobalContext, Section};
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button class="top-header__icon-btn menu-toggle" on:click=toggle_sidebar title="Menü">
                    {icon("menu")}
                </button>
                <span class="top-header__title" on:click=move |_| ctx.navigate(Section::Home)>
                    {icon("scale")}
                    " JustLaw"
                </span>
            </div>

            <div class="top-header__actions">
                <ThemeToggle />
                <button
                    class="top-header__icon-btn"
                    title="Ayarlar"
                    on:click=move |_| ctx.navigate(Section::Settings)
                >
                    {icon("settings")}
                </button>
            </div>
        </div>
    }
}
