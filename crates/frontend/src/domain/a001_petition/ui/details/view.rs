//! Petition wizard - View Component

use super::model::{generate_pdf, generate_udf, suggest_field};
use super::view_model::{use_petition_vm, PetitionVm};
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use contracts::domain::a001_petition::catalog::{self, FALLBACK_TITLE};
use contracts::domain::a001_petition::request::{SuggestionField, DEFAULT_COURT};
use contracts::domain::a001_petition::wizard::step_title;
use contracts::domain::a001_petition::PetitionField;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn PetitionWizard() -> impl IntoView {
    let vm = use_petition_vm();
    let toast = use_toast();

    let title = move || {
        vm.selected_type
            .get()
            .and_then(catalog::lookup)
            .map(|d| d.display_name)
            .unwrap_or(FALLBACK_TITLE)
    };

    let is_busy = Signal::derive(move || {
        vm.is_generating_pdf.get() || vm.is_generating_udf.get()
    });

    let on_pdf = move |_: leptos::ev::MouseEvent| {
        let form = vm.form.snapshot();
        if let Err(e) = form.validate_for_submission() {
            vm.field_error.set(Some(e));
            return;
        }
        vm.clear_errors();
        vm.is_generating_pdf.set(true);
        let type_key = vm.selected_type.get_untracked();
        leptos::task::spawn_local(async move {
            match generate_pdf(&form, type_key).await {
                Ok(file_name) => toast.success(format!("{} indirildi", file_name)),
                Err(e) => {
                    log::error!("pdf generation failed: {}", e);
                    vm.error.set(Some(format!("PDF Hatası: {}", e)));
                }
            }
            vm.is_generating_pdf.set(false);
        });
    };

    let on_udf = move |_: leptos::ev::MouseEvent| {
        let form = vm.form.snapshot();
        if let Err(e) = form.validate_for_submission() {
            vm.field_error.set(Some(e));
            return;
        }
        vm.clear_errors();
        vm.is_generating_udf.set(true);
        let type_key = vm.selected_type.get_untracked();
        leptos::task::spawn_local(async move {
            match generate_udf(&form, type_key).await {
                Ok(_) => toast.success("✅ UDF Dosyası Hazır!"),
                Err(e) => {
                    log::error!("udf generation failed: {}", e);
                    vm.error.set(Some(format!("UDF Hatası: {}", e)));
                }
            }
            vm.is_generating_udf.set(false);
        });
    };

    view! {
        <div class="dilekce-form">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center style="margin-bottom: 16px;">
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| vm.deselect()>
                    {icon("chevron-left")}
                    " Geri"
                </Button>
                <h2 style="font-size: 18px; font-weight: bold;">{title}</h2>
                <Button
                    appearance=ButtonAppearance::Subtle
                    disabled=is_busy
                    on_click=move |_| {
                        vm.reset();
                        toast.info("Form temizlendi");
                    }
                >
                    "Yeni Dilekçe"
                </Button>
            </Flex>

            <ProgressSteps vm=vm />

            {move || {
                vm.field_error
                    .get()
                    .map(|e| {
                        view! {
                            <div class="field-error" style="padding: 12px; margin-bottom: 16px; background: var(--color-warning-50); border: 1px solid var(--color-warning-100); border-radius: 8px;">
                                <span>{e.message}</span>
                            </div>
                        }
                    })
            }}

            {move || {
                vm.error
                    .get()
                    .map(|e| {
                        view! {
                            <div style="padding: 12px; margin-bottom: 16px; background: var(--color-error-50); border: 1px solid var(--color-error-100); border-radius: 8px;">
                                <span style="color: var(--color-error);">{e}</span>
                            </div>
                        }
                    })
            }}

            {move || match vm.wizard.get().current_step() {
                1 => view! { <PartyStep vm=vm /> }.into_any(),
                2 => view! { <OpponentStep vm=vm /> }.into_any(),
                3 => view! { <DetailsStep vm=vm /> }.into_any(),
                _ => view! { <ReliefStep vm=vm /> }.into_any(),
            }}

            <Flex justify=FlexJustify::SpaceBetween class="wizard-buttons" style="margin-top: 24px;">
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || vm.wizard.get().is_first())
                    on_click=move |_| vm.prev_step()
                >
                    {icon("chevron-left")}
                    " Geri"
                </Button>

                <Show
                    when=move || vm.wizard.get().is_last()
                    fallback=move || {
                        view! {
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.next_step()>
                                "İleri "
                                {icon("chevron-right")}
                            </Button>
                        }
                    }
                >
                    <Flex style="gap: 8px;">
                        <Button appearance=ButtonAppearance::Secondary disabled=is_busy on_click=on_udf>
                            {icon("download")}
                            {move || if vm.is_generating_udf.get() { " Hazırlanıyor..." } else { " UDF İndir" }}
                        </Button>
                        <Button appearance=ButtonAppearance::Primary disabled=is_busy on_click=on_pdf>
                            {icon("file-text")}
                            {move || if vm.is_generating_pdf.get() { " Oluşturuluyor..." } else { " PDF Oluştur" }}
                        </Button>
                    </Flex>
                </Show>
            </Flex>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn ProgressSteps(vm: PetitionVm) -> impl IntoView {
    view! {
        <div class="wizard-progress">
            {move || {
                let wizard = vm.wizard.get();
                wizard
                    .steps()
                    .map(move |step| {
                        view! {
                            <div class=wizard.step_status(step).css_class() data-step=step.to_string()>
                                <div class="step-number">{step}</div>
                                <div class="step-label">{step_title(step)}</div>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn TextField(
    vm: PetitionVm,
    field: PetitionField,
    #[prop(optional)] required: bool,
    #[prop(into, optional)] placeholder: String,
) -> impl IntoView {
    let label = if required {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    };
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <Input value=vm.form.signal(field) placeholder=placeholder />
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn AreaField(
    vm: PetitionVm,
    field: PetitionField,
    #[prop(optional)] required: bool,
    #[prop(into, optional)] placeholder: String,
    #[prop(optional)] suggest: Option<SuggestionField>,
) -> impl IntoView {
    let label = if required {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    };
    view! {
        <div class="form__group">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <label class="form__label">{label}</label>
                {suggest.map(|kind| view! { <SuggestButton vm=vm kind=kind /> })}
            </Flex>
            <Textarea value=vm.form.signal(field) placeholder=placeholder attr:rows=5 />
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn SuggestButton(vm: PetitionVm, kind: SuggestionField) -> impl IntoView {
    let toast = use_toast();
    let is_thinking = move || vm.suggesting.get() == Some(kind);

    let on_click = move |_: leptos::ev::MouseEvent| {
        if vm.suggesting.get_untracked().is_some() {
            return;
        }
        vm.suggesting.set(Some(kind));
        let form = vm.form.snapshot();
        let type_key = vm.selected_type.get_untracked();
        leptos::task::spawn_local(async move {
            match suggest_field(kind, &form, type_key).await {
                Ok(text) => vm.form.signal(kind.target()).set(text),
                Err(e) => {
                    log::error!("field suggestion failed: {}", e);
                    toast.error("AI önerisi alınırken bir hata oluştu");
                }
            }
            vm.suggesting.set(None);
        });
    };

    view! {
        <Button
            appearance=ButtonAppearance::Subtle
            size=ButtonSize::Small
            disabled=Signal::derive(move || vm.suggesting.get().is_some())
            on_click=on_click
        >
            {move || if is_thinking() { "🤖 Düşünüyor..." } else { "✨ AI ile Öner" }}
        </Button>
    }
}

#[component]
#[allow(non_snake_case)]
fn PartyStep(vm: PetitionVm) -> impl IntoView {
    view! {
        <div class="wizard-step active">
            <TextField vm=vm field=PetitionField::PlaintiffName required=true placeholder="Adınız ve soyadınız" />
            <TextField vm=vm field=PetitionField::PlaintiffNationalId placeholder="11 haneli" />
            <AreaField vm=vm field=PetitionField::PlaintiffAddress placeholder="Tebligat adresiniz" />
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn OpponentStep(vm: PetitionVm) -> impl IntoView {
    view! {
        <div class="wizard-step active">
            <TextField vm=vm field=PetitionField::DefendantName />
            <AreaField vm=vm field=PetitionField::DefendantAddress />
            <TextField vm=vm field=PetitionField::Court placeholder=DEFAULT_COURT />
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn DetailsStep(vm: PetitionVm) -> impl IntoView {
    let subject_hint = vm
        .selected_type
        .get_untracked()
        .map(catalog::default_subject_for)
        .unwrap_or(catalog::FALLBACK_SUBJECT);
    view! {
        <div class="wizard-step active">
            <AreaField
                vm=vm
                field=PetitionField::Subject
                required=true
                placeholder=subject_hint
                suggest=SuggestionField::Subject
            />
            <AreaField
                vm=vm
                field=PetitionField::Narrative
                required=true
                placeholder="Olayı kısaca anlatın"
            />
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn ReliefStep(vm: PetitionVm) -> impl IntoView {
    let toast = use_toast();
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    let on_files = move |ev: leptos::ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        if let Some(files) = input.files() {
            for i in 0..files.length() {
                if let Some(file) = files.get(i) {
                    if !vm.add_attachment(file.name(), file.size() as u64) {
                        toast.info(format!("{} zaten ekli", file.name()));
                    }
                }
            }
        }
        // allow selecting the same file again
        input.set_value("");
    };

    view! {
        <div class="wizard-step active">
            <AreaField
                vm=vm
                field=PetitionField::Relief
                placeholder="Mahkemeden talepleriniz"
                suggest=SuggestionField::Relief
            />

            <div class="form__group">
                <label class="form__label">"Ekler"</label>
                <input
                    type="file"
                    multiple=true
                    style="display: none;"
                    node_ref=file_input_ref
                    on:change=on_files
                />
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| {
                        if let Some(input) = file_input_ref.get() {
                            input.click();
                        }
                    }
                >
                    {icon("paperclip")}
                    " Dosya Ekle"
                </Button>
                <div class="attachment-list">
                    <For
                        each=move || vm.attachments.with(|list| list.iter().cloned().collect::<Vec<_>>())
                        key=|a| a.name.clone()
                        let:attachment
                    >
                        {
                            let name = attachment.name.clone();
                            view! {
                                <div class="attachment-item">
                                    <span>"📄 " {attachment.name.clone()} " (" {attachment.size_label()} ")"</span>
                                    <button class="remove-btn" on:click=move |_| vm.remove_attachment(&name)>
                                        "×"
                                    </button>
                                </div>
                            }
                        }
                    </For>
                </div>
            </div>
        </div>
    }
}
