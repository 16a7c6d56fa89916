//! Application layer shaping caller parameters into gateway requests.
//!
//! `IyzipayClient` is the primary entry point. It owns the gateway transport
//! behind the `Gateway` port, so the same request shaping runs against the
//! HTTP adapter in production and the in-memory adapter in tests.

pub mod client;
pub mod params;
