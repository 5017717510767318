//! Match-3 (workspace facade crate).
//!
//! The engine lives in dedicated crates under `crates/`; this package exposes
//! them as `match3::{core, types}` and hosts the headless simulator.

pub use match3_core as core;
pub use match3_types as types;

pub mod sim;
