//! Contract analysis - View Model

use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum UploadState {
    Idle,
    Analyzing { file_name: String },
    Done { file_name: String, report: String },
    Failed { message: String },
}

#[derive(Clone, Copy)]
pub struct ContractAnalysisVm {
    pub state: RwSignal<UploadState>,
    pub drag_over: RwSignal<bool>,
}

impl ContractAnalysisVm {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(UploadState::Idle),
            drag_over: RwSignal::new(false),
        }
    }

    pub fn is_analyzing(&self) -> bool {
        self.state
            .with_untracked(|s| matches!(s, UploadState::Analyzing { .. }))
    }

    /// A finished report keeps the upload area compact.
    pub fn is_compact(&self) -> bool {
        self.state.with(|s| matches!(s, UploadState::Done { .. }))
    }
}
