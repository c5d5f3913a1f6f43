//! Process lifecycle
//!
//! The server runs until SIGINT or SIGTERM, then stops accepting
//! connections and drains in-flight requests.

mod shutdown;

pub use shutdown::shutdown_signal;
