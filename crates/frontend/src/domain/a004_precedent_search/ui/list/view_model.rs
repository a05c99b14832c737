use contracts::domain::a004_precedent_search::{PrecedentResult, PrecedentSource};
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    Idle,
    Searching { source_count: usize },
    Results(Vec<PrecedentResult>),
    Empty { message: Option<String> },
    Failed,
}

#[derive(Clone, Copy)]
pub struct PrecedentSearchVm {
    pub query: RwSignal<String>,
    pub yargitay: RwSignal<bool>,
    pub danistay: RwSignal<bool>,
    pub anayasa: RwSignal<bool>,
    pub rekabet: RwSignal<bool>,
    pub state: RwSignal<SearchState>,
}

impl PrecedentSearchVm {
    pub fn new() -> Self {
        Self {
            query: RwSignal::new(String::new()),
            yargitay: RwSignal::new(true),
            danistay: RwSignal::new(true),
            anayasa: RwSignal::new(true),
            rekabet: RwSignal::new(true),
            state: RwSignal::new(SearchState::Idle),
        }
    }

    pub fn toggle(&self, source: PrecedentSource) -> RwSignal<bool> {
        match source {
            PrecedentSource::Yargitay => self.yargitay,
            PrecedentSource::Danistay => self.danistay,
            PrecedentSource::Anayasa => self.anayasa,
            PrecedentSource::Rekabet => self.rekabet,
        }
    }

    pub fn selected_sources(&self) -> Vec<PrecedentSource> {
        PrecedentSource::all()
            .into_iter()
            .filter(|s| self.toggle(*s).get_untracked())
            .collect()
    }

    pub fn is_searching(&self) -> bool {
        matches!(self.state.get(), SearchState::Searching { .. })
    }
}
