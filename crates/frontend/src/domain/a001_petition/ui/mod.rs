pub mod details;
pub mod picker;

use details::{use_petition_vm, PetitionWizard};
use leptos::prelude::*;
use picker::DocumentTypePicker;

/// Picker until a type is chosen, then the wizard for it.
#[component]
#[allow(non_snake_case)]
pub fn PetitionPage() -> impl IntoView {
    let vm = use_petition_vm();

    view! {
        <Show when=move || vm.selected_type.get().is_some() fallback=|| view! { <DocumentTypePicker /> }>
            <PetitionWizard />
        </Show>
    }
}
