pub mod response;

pub use response::{Lookup, respond};
