//! Contract analysis - View Component

use super::model::analyze_contract;
use super::view_model::{ContractAnalysisVm, UploadState};
use crate::shared::icons::icon;
use crate::shared::markdown::Markdown;
use crate::shared::toast::use_toast;
use contracts::domain::a003_contract_analysis::{validate_upload, ACCEPT_ATTR};
use leptos::prelude::*;
use thaw::*;
use web_sys::File;

#[component]
#[allow(non_snake_case)]
pub fn ContractAnalysis() -> impl IntoView {
    let vm = ContractAnalysisVm::new();
    let toast = use_toast();
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    let handle_file = move |file: File| {
        if vm.is_analyzing() {
            return;
        }
        let name = file.name();
        if let Err(e) = validate_upload(&name, &file.type_(), file.size() as u64) {
            log::warn!("rejected upload {}: {:?}", name, e);
            toast.error(e.to_string());
            return;
        }

        vm.state.set(UploadState::Analyzing {
            file_name: name.clone(),
        });
        leptos::task::spawn_local(async move {
            match analyze_contract(&file).await {
                Ok(report) => vm.state.set(UploadState::Done {
                    file_name: name,
                    report,
                }),
                Err(message) => {
                    log::error!("contract analysis failed: {}", message);
                    vm.state.set(UploadState::Failed { message });
                }
            }
        });
    };

    let open_picker = move |_: leptos::ev::MouseEvent| {
        if let Some(input) = file_input_ref.get() {
            input.click();
        }
    };

    let on_change = move |ev: leptos::ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            handle_file(file);
        }
        input.set_value("");
    };

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        vm.drag_over.set(false);
        if let Some(file) = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0))
        {
            handle_file(file);
        }
    };

    view! {
        <div class="sozlesme-container">
            <input
                type="file"
                accept=ACCEPT_ATTR
                style="display: none;"
                node_ref=file_input_ref
                on:change=on_change
            />

            <div
                class="upload-area"
                class:dragover=move || vm.drag_over.get()
                class:compact=move || vm.is_compact()
                on:dragover=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    vm.drag_over.set(true);
                }
                on:dragleave=move |_| vm.drag_over.set(false)
                on:drop=on_drop
            >
                {move || match vm.state.get() {
                    UploadState::Idle => {
                        view! {
                            <div class="upload-icon">{icon("upload")}</div>
                            <h3>"Sözleşmenizi Yükleyin"</h3>
                            <p>"PDF, DOCX, TXT veya UDF formatında, maksimum 20MB"</p>
                            <Button appearance=ButtonAppearance::Primary on_click=open_picker>
                                "Dosya Seç"
                            </Button>
                        }
                            .into_any()
                    }
                    UploadState::Analyzing { file_name } => {
                        view! {
                            <Spinner />
                            <h3>"Analiz Ediliyor..."</h3>
                            <p>{format!("{} dosyası işleniyor", file_name)}</p>
                        }
                            .into_any()
                    }
                    UploadState::Done { .. } => {
                        view! {
                            <div>
                                <h3>"Başka Bir Sözleşme Yükleyin"</h3>
                                <p>"PDF, DOCX, TXT veya UDF formatında, maksimum 20MB"</p>
                            </div>
                            <Button appearance=ButtonAppearance::Secondary on_click=open_picker>
                                "Dosya Seç"
                            </Button>
                        }
                            .into_any()
                    }
                    UploadState::Failed { message } => {
                        view! {
                            <div class="upload-icon">"❌"</div>
                            <h3>"Analiz Başarısız"</h3>
                            <p style="color: var(--color-error);">{message}</p>
                            <Button appearance=ButtonAppearance::Primary on_click=open_picker>
                                "Tekrar Dene"
                            </Button>
                        }
                            .into_any()
                    }
                }}
            </div>

            {move || match vm.state.get() {
                UploadState::Done { file_name, report } => Some(view! {
                    <div class="analysis-result">
                        <div class="analysis-header">
                            <h3>{format!("📋 Analiz Sonuçları: {}", file_name)}</h3>
                        </div>
                        <Markdown
                            content=report
                            class="analysis-content"
                        />
                    </div>
                }),
                _ => None,
            }}
        </div>
    }
}
