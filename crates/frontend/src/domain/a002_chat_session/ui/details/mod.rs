//! Chat UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: chat API call and history storage
//! - view_model.rs: ChatVm with RwSignals
//! - view.rs: Main component ChatPanel

mod model;
mod view;
mod view_model;

pub use model::load_history;
pub use view::ChatPanel;
pub use view_model::{use_chat_vm, ChatVm};
