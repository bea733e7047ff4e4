use thiserror::Error;

/// Canonical result for terminal operators.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("sequence contains no (matching) elements")]
    EmptySequence,

    #[error("sequence contains more than one (matching) element")]
    MultipleMatch,

    /// `len` is `None` for negative indices, which are rejected without
    /// enumerating.
    #[error(
        "index {index} is out of range{}",
        .len.map(|n| format!(" for a sequence of length {n}")).unwrap_or_default()
    )]
    IndexOutOfRange { index: i64, len: Option<usize> },

    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    #[error("element {index} cannot be narrowed to `{target}`")]
    InvalidCast { index: usize, target: &'static str },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    // Only raised under `OverflowPolicy::Checked`.
    #[error("arithmetic overflow in {0}")]
    Overflow(&'static str),

    #[error("invalid configuration: {0}")]
    Config(String),
}
