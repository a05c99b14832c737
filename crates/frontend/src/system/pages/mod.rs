pub mod legal;
pub mod plans;
pub mod settings;
