//! Document type picker: categories of petition types with a text filter.

use crate::domain::a001_petition::ui::details::use_petition_vm;
use crate::shared::icons::icon;
use crate::shared::storage::{self, USER_NAME_KEY};
use contracts::domain::a001_petition::catalog;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn DocumentTypePicker() -> impl IntoView {
    let vm = use_petition_vm();

    let groups = Memo::new(move |_| vm.filter.with(|q| catalog::filter(q)));

    view! {
        <div class="dilekce-picker">
            <div class="dilekce-search-container" style="margin-bottom: 16px;">
                <Input value=vm.filter placeholder="Dilekçe türü ara... (örn. kira, nafaka, işe iade)">
                    <InputPrefix slot>{icon("search")}</InputPrefix>
                </Input>
            </div>

            <Show
                when=move || groups.with(|g| !g.is_empty())
                fallback=|| view! { <div class="empty-state">"Aramanızla eşleşen dilekçe türü bulunamadı."</div> }
            >
                <div class="dilekce-types">
                    {move || {
                        groups
                            .get()
                            .into_iter()
                            .map(|(category, docs)| {
                                view! {
                                    <div class="dilekce-category">
                                        <h3 class="category-title">{category.display_name()}</h3>
                                        <div class="dilekce-grid">
                                            {docs
                                                .into_iter()
                                                .map(|doc| {
                                                    let key = doc.key;
                                                    view! {
                                                        <div
                                                            class="dilekce-card"
                                                            title=doc.default_subject
                                                            on:click=move |_| {
                                                                leptos::logging::log!("petition type selected: {}", key);
                                                                vm.select_type(key);
                                                                if let Some(name) = storage::get_item(USER_NAME_KEY) {
                                                                    vm.prefill_plaintiff(&name);
                                                                }
                                                            }
                                                        >
                                                            {icon("file-text")}
                                                            <span>{doc.display_name}</span>
                                                        </div>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}
