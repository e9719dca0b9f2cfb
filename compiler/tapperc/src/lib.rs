//! Tapper command-line driver.
//!
//! The binary in `main.rs` only parses arguments; the commands and the
//! tracing setup live here so they can be tested.

pub mod commands;
mod tracing_setup;

pub use tracing_setup::init_tracing;
