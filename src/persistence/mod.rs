//! Database access: connection setup, schema bootstrap and the entities
//! the feature slices read from.

mod database;
pub mod entity;
mod schema;

pub use database::connect;
pub use schema::{ensure_schema, seed_sample_categories};
