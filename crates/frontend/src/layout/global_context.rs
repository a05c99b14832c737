use crate::system::pages::legal::LegalDoc;
use contracts::domain::a002_chat_session::ChatHistory;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Top-level screens reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    Chat,
    Petition,
    Analysis,
    Search,
    Plans,
    Settings,
}

impl Section {
    pub fn all() -> [Section; 7] {
        [
            Section::Home,
            Section::Chat,
            Section::Petition,
            Section::Analysis,
            Section::Search,
            Section::Plans,
            Section::Settings,
        ]
    }

    /// Value used in the `?section=` query parameter.
    pub fn key(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Chat => "chat",
            Section::Petition => "dilekce",
            Section::Analysis => "sozlesme",
            Section::Search => "emsal",
            Section::Plans => "plans",
            Section::Settings => "settings",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.key() == key)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Home => "Ana Sayfa",
            Section::Chat => "Hukuki Asistan",
            Section::Petition => "Dilekçe Hazırla",
            Section::Analysis => "Sözleşme Analizi",
            Section::Search => "Emsal Karar Ara",
            Section::Plans => "Planlar",
            Section::Settings => "Ayarlar",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Chat => "message-square",
            Section::Petition => "file-text",
            Section::Analysis => "upload",
            Section::Search => "search",
            Section::Plans => "credit-card",
            Section::Settings => "settings",
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub section: RwSignal<Section>,
    pub left_open: RwSignal<bool>,
    pub online: RwSignal<bool>,
    pub legal_doc: RwSignal<Option<LegalDoc>>,
    /// Mirror of the stored chat history, for the sidebar list.
    pub chat_history: RwSignal<ChatHistory>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        let online = window().map(|w| w.navigator().on_line()).unwrap_or(true);
        Self {
            section: RwSignal::new(Section::default()),
            left_open: RwSignal::new(false),
            online: RwSignal::new(online),
            legal_doc: RwSignal::new(None),
            chat_history: RwSignal::new(ChatHistory::new()),
        }
    }

    /// Read `?section=` once, then keep the URL in step with the active section.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(section) = params.get("section").and_then(|k| Section::from_key(k)) {
            self.section.set(section);
        }

        let this = *self;
        Effect::new(move |_| {
            let section = this.section.get();
            let query_string = serde_qs::to_string(&HashMap::from([(
                "section".to_string(),
                section.key().to_string(),
            )]))
            .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    /// Track `navigator.onLine` through the window online/offline events.
    pub fn init_connectivity(&self) {
        let online = self.online;
        let on = window_event_listener(leptos::ev::online, move |_| online.set(true));
        let off = window_event_listener(leptos::ev::offline, move |_| online.set(false));
        on_cleanup(move || {
            on.remove();
            off.remove();
        });
    }

    pub fn navigate(&self, section: Section) {
        leptos::logging::log!("navigate: {}", section.key());
        self.section.set(section);
        // the sidebar is an overlay on narrow screens
        self.left_open.set(false);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_keys_round_trip() {
        for section in Section::all() {
            assert_eq!(Section::from_key(section.key()), Some(section));
        }
        assert_eq!(Section::from_key("unknown"), None);
    }
}
