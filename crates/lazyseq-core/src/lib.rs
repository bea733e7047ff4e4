#![forbid(unsafe_code)]
//! lazyseq-core: error kinds and configuration shared by the engine crates.
//!
//! Nothing in here iterates. Operators live in `lazyseq-operators`; this crate
//! only defines what they can fail with and how callers tune them.

pub mod config;
pub mod error;
pub mod prelude;

pub use config::{EngineConfig, OverflowPolicy};
pub use error::{Error, Result};
