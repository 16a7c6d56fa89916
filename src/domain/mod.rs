//! Gateway vocabulary: money, parties, wire requests and replies, and the
//! transport port the application layer talks through.

pub mod enums;
pub mod money;
pub mod party;
pub mod ports;
pub mod request;
pub mod response;
