use crate::layout::global_context::AppGlobalContext;
use crate::shared::storage::{self, USER_NAME_KEY};
use crate::shared::theme::{use_theme, Theme};
use crate::shared::toast::use_toast;
use contracts::domain::a002_chat_session::{ChatHistory, HISTORY_STORAGE_KEY};
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn SettingsPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let theme = use_theme();
    let toast = use_toast();

    let user_name = RwSignal::new(storage::get_item(USER_NAME_KEY).unwrap_or_default());

    let save_profile = move |_: leptos::ev::MouseEvent| {
        let name = user_name.get_untracked();
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        storage::set_item(USER_NAME_KEY, name);
        toast.success("Profil kaydedildi!");
    };

    let clear_history = move |_: leptos::ev::MouseEvent| {
        storage::remove_item(HISTORY_STORAGE_KEY);
        ctx.chat_history.set(ChatHistory::new());
        toast.info("Sohbet geçmişi temizlendi");
    };

    view! {
        <div class="settings-container">
            <div class="details-section">
                <h4 class="details-section__title">"Profil"</h4>
                <div class="form__group">
                    <label class="form__label">"Ad Soyad"</label>
                    <Input value=user_name placeholder="Dilekçelerde davacı adı olarak kullanılır" />
                </div>
                <Button appearance=ButtonAppearance::Primary on_click=save_profile>
                    "Kaydet"
                </Button>
            </div>

            <div class="details-section">
                <h4 class="details-section__title">"Görünüm"</h4>
                <Flex align=FlexAlign::Center style="gap: 12px;">
                    <span>
                        {move || match theme.theme.get() {
                            Theme::Dark => "Koyu tema",
                            Theme::Light => "Açık tema",
                        }}
                    </span>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| theme.toggle()>
                        {move || theme.theme.get().toggled().icon()}
                        " Temayı Değiştir"
                    </Button>
                </Flex>
            </div>

            <div class="details-section">
                <h4 class="details-section__title">"Veriler"</h4>
                <p>{move || format!("{} kayıtlı sohbet", ctx.chat_history.with(|h| h.len()))}</p>
                <Button appearance=ButtonAppearance::Secondary on_click=clear_history>
                    "Sohbet Geçmişini Temizle"
                </Button>
            </div>
        </div>
    }
}
