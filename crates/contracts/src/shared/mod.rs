pub mod api_error;
pub mod config;
pub mod plans;
pub mod text;
