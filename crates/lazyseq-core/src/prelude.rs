//! Convenient re-exports for downstream crates.

pub use crate::config::{EngineConfig, OverflowPolicy};
pub use crate::error::{Error, Result};
