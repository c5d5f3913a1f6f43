//! Feature slices
//!
//! Each slice bundles one endpoint: its route registration, its handler and
//! its response shape.

pub mod categories;
pub mod health;
