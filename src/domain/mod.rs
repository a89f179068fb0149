//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Rich domain types and the pure computation
//! - `wire.rs` — Raw serde structs matching data source payloads
//! - `convert.rs` — Conversions from wire types with validation
//! - `client.rs` — Facade over an injected data source

pub mod price_history;
