//! Engine configuration that downstream crates can serialize/deserialize.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// What integer aggregation does when the running total leaves the type's range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Fail with `Error::Overflow`.
    #[default]
    Checked,
    /// Clamp to the type's min/max.
    Saturating,
    /// Two's-complement wraparound.
    Wrapping,
}

impl FromStr for OverflowPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "checked" => Ok(Self::Checked),
            "saturating" => Ok(Self::Saturating),
            "wrapping" => Ok(Self::Wrapping),
            other => Err(Error::Config(format!("unknown overflow policy '{other}'"))),
        }
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Checked => "checked",
            Self::Saturating => "saturating",
            Self::Wrapping => "wrapping",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Overflow behavior for `sum_with`.
    pub overflow: OverflowPolicy,
}

impl EngineConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `LAZYSEQ_OVERFLOW`: `checked`, `saturating` or `wrapping`
    ///
    /// Unparseable values are ignored; use [`EngineConfig::try_from_env`] to
    /// surface them instead.
    pub fn from_env() -> Self {
        Self::try_from_env().unwrap_or_default()
    }

    pub fn try_from_env() -> Result<Self> {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("LAZYSEQ_OVERFLOW") {
            cfg.overflow = s.parse()?;
        }

        Ok(cfg)
    }

    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }
}
