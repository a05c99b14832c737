//! Petition wizard UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: PDF/UDF generation and AI field suggestion calls
//! - view_model.rs: PetitionVm with RwSignals
//! - view.rs: Main component PetitionWizard

mod model;
mod view;
mod view_model;

pub use view::PetitionWizard;
pub use view_model::{use_petition_vm, PetitionVm};
