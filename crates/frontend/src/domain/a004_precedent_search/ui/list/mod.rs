//! Precedent search UI Module
//!
//! - model.rs: search call
//! - view_model.rs: PrecedentSearchVm
//! - view.rs: PrecedentSearch panel and result cards

mod model;
mod view;
mod view_model;

pub use view::PrecedentSearch;
