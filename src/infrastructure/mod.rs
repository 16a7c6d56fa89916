//! Adapters implementing the `Gateway` port.

pub mod auth;
pub mod http;
pub mod in_memory;
