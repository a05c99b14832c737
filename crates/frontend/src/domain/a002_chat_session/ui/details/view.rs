//! Chat - View Component

use super::model::{save_session, send_turn, TurnReply};
use super::view_model::{use_chat_vm, ChatEntry};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::date_utils::now_ms;
use crate::shared::icons::icon;
use crate::shared::markdown::Markdown;
use contracts::domain::a002_chat_session::dto::{outgoing_message, UNREACHABLE_MESSAGE};
use contracts::domain::a002_chat_session::{ChatMessage, ChatRole, ChatSession, ChatTurnRequest};
use leptos::prelude::*;
use thaw::*;

const SUGGESTIONS: [(&str, &str); 4] = [
    ("İhbar tazminatı nasıl hesaplanır?", "İhbar tazminatı hesaplama"),
    (
        "Kira sözleşmesi feshi prosedürü nedir?",
        "Kira sözleşmesi feshi prosedürü",
    ),
    (
        "İş kazasında işverenin sorumlulukları nelerdir?",
        "İş kazasında işveren sorumluluğu",
    ),
    ("Boşanma davası süreci nasıl işler?", "Boşanma davası süreci"),
];

#[component]
#[allow(non_snake_case)]
pub fn ChatPanel() -> impl IntoView {
    let vm = use_chat_vm();
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();

    let scroll_to_bottom = move || {
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    };

    Effect::new(move |_| {
        vm.entries.track();
        scroll_to_bottom();
    });

    let handle_send = Callback::new(move |_: ()| {
        let Some(content) =
            outgoing_message(&vm.input.get_untracked(), vm.is_sending.get_untracked())
        else {
            return;
        };

        vm.is_sending.set(true);
        vm.input.set(String::new());
        vm.push(ChatEntry::new(ChatMessage::user(content.clone())));

        let request = ChatTurnRequest::anonymous(content, vm.conversation_id.get_untracked());
        leptos::task::spawn_local(async move {
            match send_turn(&request).await {
                Ok(TurnReply::Answer(reply)) => {
                    vm.push(ChatEntry::new(ChatMessage::assistant(reply.response)));
                    vm.conversation_id.set(Some(reply.conversation_id.clone()));
                    let session = ChatSession::from_messages(
                        reply.conversation_id,
                        vm.persistent_messages(),
                        now_ms(),
                    );
                    ctx.chat_history.set(save_session(session));
                }
                Ok(TurnReply::Rejected(text)) => {
                    vm.push(ChatEntry::notice(ChatMessage::assistant(text)));
                }
                Err(e) => {
                    log::error!("chat request failed: {}", e);
                    vm.push(ChatEntry::notice(ChatMessage::assistant(
                        UNREACHABLE_MESSAGE.to_string(),
                    )));
                }
            }
            vm.is_sending.set(false);
        });
    });

    let ask = move |question: &'static str| {
        vm.input.set(question.to_string());
        handle_send.run(());
    };

    view! {
        <div class="chat-panel" style="height: 100%; display: flex; flex-direction: column;">
            <div
                node_ref=messages_container_ref
                class="chat-messages"
                style="flex: 1; overflow-y: auto; display: flex; flex-direction: column; gap: 12px; padding: 12px;"
            >
                <Show when=move || vm.entries.with(|list| list.is_empty())>
                    <div class="welcome">
                        <div class="welcome-icon">{icon("scale")}</div>
                        <h2>"JustLaw'a Hoş Geldiniz"</h2>
                        <p>
                            "Türk Hukuku hakkında sorularınızı sorun. Mevzuat ve Yargıtay kararlarına dayalı yanıtlar alın."
                        </p>
                        <div class="suggestion-chips">
                            {SUGGESTIONS
                                .iter()
                                .map(|(question, label)| {
                                    let question = *question;
                                    view! {
                                        <button class="chip" on:click=move |_| ask(question)>
                                            {*label}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Show>

                <For each=move || vm.entries.get() key=|entry| entry.key let:entry>
                    {
                        let role_class = format!("message {}", entry.message.role.css_class());
                        let content = entry.message.content.clone();
                        view! {
                            <div class=role_class>
                                {match entry.message.role {
                                    ChatRole::Assistant => {
                                        view! { <Markdown content=content class="message-content" /> }
                                            .into_any()
                                    }
                                    ChatRole::User => {
                                        view! {
                                            <div class="message-content" style="white-space: pre-wrap;">
                                                {content}
                                            </div>
                                        }
                                            .into_any()
                                    }
                                }}
                            </div>
                        }
                    }
                </For>

                <Show when=move || vm.is_sending.get()>
                    <div class="message assistant typing">
                        <Spinner size=SpinnerSize::Tiny />
                        <span style="margin-left: 8px;">"Yanıt hazırlanıyor..."</span>
                    </div>
                </Show>
            </div>

            <Flex align=FlexAlign::End class="chat-input" style="gap: 8px; padding: 12px;">
                <div style="flex: 1;">
                    <Textarea
                        value=vm.input
                        placeholder="Hukuki sorunuzu yazın..."
                        attr:style="width: 100%; min-height: 48px; max-height: 200px; resize: vertical;"
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" && !ev.shift_key() {
                                ev.prevent_default();
                                handle_send.run(());
                            }
                        }
                    />
                </div>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=vm.is_sending
                    on_click=move |_| handle_send.run(())
                >
                    {icon("send")}
                </Button>
            </Flex>
        </div>
    }
}
