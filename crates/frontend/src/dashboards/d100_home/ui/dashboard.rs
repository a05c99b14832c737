use crate::layout::global_context::{AppGlobalContext, Section};
use crate::shared::date_utils::today_long_tr;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Quick entry points shown on the home screen.
const QUICK_ACTIONS: [(Section, &str); 4] = [
    (Section::Chat, "Hukuki sorularınızı yapay zekaya sorun"),
    (Section::Petition, "Adım adım dilekçe hazırlayın"),
    (Section::Analysis, "Sözleşmenizdeki riskleri görün"),
    (Section::Search, "Yargıtay ve Danıştay kararlarında arayın"),
];

/// Home dashboard component
#[component]
pub fn HomeDashboard() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let today = today_long_tr();
    let session_count = move || ctx.chat_history.with(|h| h.len());

    view! {
        <div class="dashboard">
            <div class="dashboard-header">
                <h2>"Hoş Geldiniz"</h2>
                <p class="dashboard-date">{today}</p>
            </div>

            <div class="quick-actions">
                {QUICK_ACTIONS
                    .into_iter()
                    .map(|(section, hint)| {
                        view! {
                            <div class="quick-action-card" on:click=move |_| ctx.navigate(section)>
                                <div class="quick-action-icon">{icon(section.icon())}</div>
                                <h3>{section.title()}</h3>
                                <p>{hint}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="dashboard-stats">
                <div class="stat-card">
                    <span class="stat-value">{session_count}</span>
                    <span class="stat-label">"Kayıtlı sohbet"</span>
                </div>
            </div>
        </div>
    }
}
