// ─── Error ──────────────────────────────────────────────────────────────────
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CollectionError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// A parameter had the wrong type, e.g. a string key used as an offset.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A numeric parameter that must be non-negative was negative.
    #[error("only non-negative {name}s are allowed, [{value}] is negative")]
    OutOfBounds { name: &'static str, value: i64 },
}

impl CollectionError {
    pub(crate) fn negative_offset(value: i64) -> Self {
        CollectionError::OutOfBounds {
            name: "offset",
            value,
        }
    }

    pub(crate) fn negative_length(value: i64) -> Self {
        CollectionError::OutOfBounds {
            name: "length",
            value,
        }
    }
}
