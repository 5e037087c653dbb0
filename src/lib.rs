//! Plaintris (workspace facade crate).
//!
//! Re-exports the rules engine as `plaintris::{core,types}` and carries the terminal
//! host: configuration, key mapping and rendering. The engine itself lives in the
//! crates under `crates/`.

pub use plaintris_core as core;
pub use plaintris_types as types;

pub mod config;
pub mod input;
pub mod term;
