//! Recent conversations shown under the sidebar navigation.

use crate::domain::a002_chat_session::ui::details::use_chat_vm;
use crate::layout::global_context::{AppGlobalContext, Section};
use crate::shared::date_utils::format_timestamp_ms;
use crate::shared::icons::icon;
use contracts::domain::a002_chat_session::history::SIDEBAR_SESSIONS;
use contracts::domain::a002_chat_session::ChatSession;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn ChatHistoryList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let vm = use_chat_vm();

    let recent = move || -> Vec<ChatSession> {
        ctx.chat_history
            .with(|history| history.recent(SIDEBAR_SESSIONS).to_vec())
    };

    let open_session = move |id: String| {
        let session = ctx
            .chat_history
            .with_untracked(|history| history.find(&id).cloned());
        match session {
            Some(session) => {
                if !vm.restore(&session) {
                    log::info!("chat session {} not opened: reply pending", id);
                }
                ctx.navigate(Section::Chat);
            }
            None => log::warn!("chat session {} not in history", id),
        }
    };

    view! {
        <div class="app-sidebar__history">
            <div class="app-sidebar__history-title">"Son Sohbetler"</div>
            <Show
                when=move || !recent().is_empty()
                fallback=|| view! { <div class="app-sidebar__history-empty">"Henüz sohbet yok"</div> }
            >
                <For each=recent key=|session| (session.id.clone(), session.timestamp) let:session>
                    {
                        let id = session.id.clone();
                        let is_active = {
                            let id = id.clone();
                            move || vm.conversation_id.get().as_deref() == Some(id.as_str())
                        };
                        view! {
                            <div
                                class="app-sidebar__item history-item"
                                class:app-sidebar__item--active=is_active
                                class:app-sidebar__item--disabled=move || vm.is_sending.get()
                                title=format_timestamp_ms(session.timestamp)
                                on:click=move |_| open_session(id.clone())
                            >
                                <div class="app-sidebar__item-content">
                                    {icon("message-square")}
                                    <span>{session.title.clone()}</span>
                                </div>
                            </div>
                        }
                    }
                </For>
            </Show>
        </div>
    }
}
