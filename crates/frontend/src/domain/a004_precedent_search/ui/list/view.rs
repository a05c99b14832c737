use super::model::search_precedents;
use super::view_model::{PrecedentSearchVm, SearchState};
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use contracts::domain::a004_precedent_search::{PrecedentResult, PrecedentSource, SearchQuery};
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn PrecedentSearch() -> impl IntoView {
    let vm = PrecedentSearchVm::new();
    let toast = use_toast();

    let run_search = Callback::new(move |_: ()| {
        if vm.state.with_untracked(|s| matches!(s, SearchState::Searching { .. })) {
            return;
        }
        let query = match SearchQuery::new(&vm.query.get_untracked(), &vm.selected_sources()) {
            Ok(query) => query,
            Err(e) => {
                toast.error(e.to_string());
                return;
            }
        };

        vm.state.set(SearchState::Searching {
            source_count: query.sources().len(),
        });
        leptos::task::spawn_local(async move {
            match search_precedents(&query).await {
                Ok(data) if !data.results.is_empty() => {
                    toast.success(format!("{} sonuç bulundu", data.results.len()));
                    vm.state.set(SearchState::Results(data.results));
                }
                Ok(data) => vm.state.set(SearchState::Empty {
                    message: data.message.filter(|m| !m.is_empty()),
                }),
                Err(e) => {
                    log::error!("precedent search failed: {}", e);
                    toast.error("Arama sırasında hata oluştu");
                    vm.state.set(SearchState::Failed);
                }
            }
        });
    });

    view! {
        <div class="emsal-container">
            <Flex style="gap: 8px; margin-bottom: 12px;">
                <div
                    style="flex: 1;"
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            run_search.run(());
                        }
                    }
                >
                    <Input value=vm.query placeholder="Örn. işe iade, kıdem tazminatı, kira tespiti">
                        <InputPrefix slot>{icon("search")}</InputPrefix>
                    </Input>
                </div>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || vm.is_searching())
                    on_click=move |_| run_search.run(())
                >
                    "Ara"
                </Button>
            </Flex>

            <Flex class="source-toggles" style="gap: 16px; margin-bottom: 16px; flex-wrap: wrap;">
                {PrecedentSource::all()
                    .into_iter()
                    .map(|source| {
                        view! { <Checkbox checked=vm.toggle(source) label=source.display_name() /> }
                    })
                    .collect_view()}
            </Flex>

            <div class="emsal-results">
                {move || match vm.state.get() {
                    SearchState::Idle => ().into_any(),
                    SearchState::Searching { source_count } => {
                        view! {
                            <div style="text-align: center; padding: 40px;">
                                <Spinner />
                                <p style="margin-top: 16px;">
                                    {format!("{} kaynakta aranıyor...", source_count)}
                                </p>
                            </div>
                        }
                            .into_any()
                    }
                    SearchState::Results(results) => {
                        results
                            .into_iter()
                            .map(|result| view! { <PrecedentCard result=result /> })
                            .collect_view()
                            .into_any()
                    }
                    SearchState::Empty { message } => {
                        view! {
                            <div style="text-align: center; padding: 40px;">
                                <p>"Sonuç bulunamadı. Farklı terimler deneyin."</p>
                                {message.map(|m| view! { <p style="font-size: 12px;">{m}</p> })}
                            </div>
                        }
                            .into_any()
                    }
                    SearchState::Failed => {
                        view! { <p class="muted">"Arama hatası."</p> }.into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn PrecedentCard(result: PrecedentResult) -> impl IntoView {
    let expanded = RwSignal::new(false);
    let (short, is_long) = result.excerpt();
    let full = result.body().to_string();
    let badge_style = format!(
        "background: {}; color: white; padding: 4px 10px; border-radius: 20px; font-size: 11px; font-weight: 600; text-transform: uppercase;",
        result.badge_color()
    );
    let case_numbers = result.case_numbers();

    view! {
        <div class="emsal-card">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Start style="margin-bottom: 12px;">
                <div>
                    <span style=badge_style>{result.source_label().to_string()}</span>
                    <h3 style="margin: 8px 0 0; font-size: 16px;">{result.court().to_string()}</h3>
                </div>
                <span class="emsal-date">{result.tarih.clone().unwrap_or_default()}</span>
            </Flex>
            {(!case_numbers.is_empty())
                .then(|| view! { <div class="emsal-case-numbers">{case_numbers}</div> })}
            <div class="emsal-content" style="line-height: 1.7;">
                <p style="margin: 0; white-space: pre-wrap;">
                    {move || if expanded.get() { full.clone() } else { short.clone() }}
                </p>
                {is_long
                    .then(|| {
                        view! {
                            <button
                                class="emsal-toggle"
                                on:click=move |_| expanded.update(|v| *v = !*v)
                            >
                                {move || if expanded.get() { "Daralt" } else { "Devamını Göster" }}
                            </button>
                        }
                    })}
            </div>
        </div>
    }
}
