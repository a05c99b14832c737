//! Contract analysis UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: upload call
//! - view_model.rs: ContractAnalysisVm and the upload state
//! - view.rs: Main component ContractAnalysis

mod model;
mod view;
mod view_model;

pub use view::ContractAnalysis;
