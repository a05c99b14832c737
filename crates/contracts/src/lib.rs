//! Shared domain types for the JustLaw client.
//!
//! Everything here is plain Rust with no browser dependencies, so the
//! validation rules, lookup tables and wire DTOs can be unit-tested natively.

pub mod domain;
pub mod shared;
