pub mod center;
pub mod global_context;
pub mod left;
pub mod top_header;

use global_context::AppGlobalContext;
use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// |   (Left)  |          (Center)            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-layout">
            <TopHeader />

            <Show when=move || !ctx.online.get()>
                <div class="offline-banner">
                    "📡 Çevrimdışısınız. Bazı özellikler kısıtlı olabilir."
                </div>
            </Show>

            <div class="app-body">
                <left::Left>
                    {left()}
                </left::Left>

                // click-away overlay for the sidebar on narrow screens
                <Show when=move || ctx.left_open.get()>
                    <div class="sidebar-overlay" on:click=move |_| ctx.left_open.set(false)></div>
                </Show>

                <div class="app-main">
                    <center::Center>
                        {center()}
                    </center::Center>
                </div>
            </div>
        </div>
    }
}
