use crate::error::{CollectionError, Result};
use smol_str::SmolStr;
use std::fmt;

// ─── Key ────────────────────────────────────────────────────────────────────

/// Key of a collection entry. Either an integer or a string.
///
/// String keys are kept verbatim: `Key::from("5")` and `Key::from(5)` are
/// different keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Int(i64),
    Str(SmolStr),
}

impl Key {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Key::Int(i) => Some(*i),
            Key::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Str(s) => Some(s.as_str()),
            Key::Int(_) => None,
        }
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Key::Int(_))
    }

    /// Integer value of the key, or `InvalidArgument` for string keys.
    pub(crate) fn expect_offset(&self) -> Result<i64> {
        match self {
            Key::Int(i) => Ok(*i),
            Key::Str(s) => {
                tracing::debug!(target: "keyed_collections::ordered", key = %s, "Rejected non-integer offset");
                Err(CollectionError::InvalidArgument(format!(
                    "accepts only integers as offset, got {s:?}"
                )))
            }
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(i) => write!(f, "{i}"),
            Key::Str(s) => f.write_str(s),
        }
    }
}

// ─── From impls ─────────────────────────────────────────────────────────────

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Int(i)
    }
}

impl From<i32> for Key {
    fn from(i: i32) -> Self {
        Key::Int(i64::from(i))
    }
}

impl From<usize> for Key {
    fn from(i: usize) -> Self {
        Key::Int(i as i64)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(SmolStr::from(s))
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Str(SmolStr::from(s))
    }
}

impl From<SmolStr> for Key {
    fn from(s: SmolStr) -> Self {
        Key::Str(s)
    }
}

impl From<&Key> for Key {
    fn from(k: &Key) -> Self {
        k.clone()
    }
}
