//! Maps the active section to its page component.

use crate::dashboards::d100_home::HomeDashboard;
use crate::domain::a001_petition::ui::PetitionPage;
use crate::domain::a002_chat_session::ui::details::ChatPanel;
use crate::domain::a003_contract_analysis::ui::details::ContractAnalysis;
use crate::domain::a004_precedent_search::ui::list::PrecedentSearch;
use crate::layout::global_context::{AppGlobalContext, Section};
use crate::system::pages::plans::PlansPage;
use crate::system::pages::settings::SettingsPage;
use leptos::logging::log;
use leptos::prelude::*;

pub fn render_section(section: Section) -> AnyView {
    log!("render section: {}", section.key());
    match section {
        Section::Home => view! { <HomeDashboard /> }.into_any(),
        Section::Chat => view! { <ChatPanel /> }.into_any(),
        Section::Petition => view! { <PetitionPage /> }.into_any(),
        Section::Analysis => view! { <ContractAnalysis /> }.into_any(),
        Section::Search => view! { <PrecedentSearch /> }.into_any(),
        Section::Plans => view! { <PlansPage /> }.into_any(),
        Section::Settings => view! { <SettingsPage /> }.into_any(),
    }
}

/// Re-renders only when the section actually changes.
#[component]
pub fn SectionView() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let section = Memo::new(move |_| ctx.section.get());

    view! { {move || render_section(section.get())} }
}
