//! Sidebar: section navigation, new chat, recent conversations and legal links.

use crate::domain::a002_chat_session::ui::details::use_chat_vm;
use crate::domain::a002_chat_session::ui::list::ChatHistoryList;
use crate::layout::global_context::{AppGlobalContext, Section};
use crate::shared::icons::icon;
use crate::system::pages::legal::LegalLinks;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let chat = use_chat_vm();

    let new_chat = move |_| {
        if !chat.reset() {
            log::info!("new chat ignored: reply pending");
        }
        ctx.navigate(Section::Chat);
    };

    view! {
        <div class="app-sidebar__content">
            <button
                class="new-chat-btn"
                disabled=move || chat.is_sending.get()
                on:click=new_chat
            >
                {icon("message-square")}
                <span>"Yeni Sohbet"</span>
            </button>

            <nav class="app-sidebar__nav">
                {Section::all()
                    .into_iter()
                    .map(|section| {
                        view! {
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || ctx.section.get() == section
                                on:click=move |_| ctx.navigate(section)
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(section.icon())}
                                    <span>{section.title()}</span>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </nav>

            <ChatHistoryList />

            <div class="app-sidebar__footer">
                <LegalLinks />
            </div>
        </div>
    }
}
