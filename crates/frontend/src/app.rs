use crate::domain::a001_petition::ui::details::PetitionVm;
use crate::domain::a002_chat_session::ui::details::{load_history, ChatVm};
use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::theme::ThemeProvider;
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::pages::legal::LegalModalHost;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    ctx.chat_history.set(load_history());
    provide_context(ctx);

    provide_context(ToastService::new());

    // Feature state lives here so it survives section switches.
    provide_context(ChatVm::new());
    provide_context(PetitionVm::new());

    view! {
        <ThemeProvider>
            <AppRoutes />
            <LegalModalHost />
            <ToastHost />
        </ThemeProvider>
    }
}
