use super::OrderedCollection;
use crate::collection::Collection;
use crate::container::Container;
use crate::error::{CollectionError, Result};
use crate::indexed::IndexedCollection;
use crate::key::Key;
use crate::types::Items;
use crate::value::Value;
use std::cmp::Ordering;

// ─── AppendSource ───────────────────────────────────────────────────────────

/// Anything whose values can be appended to an [`OrderedCollection`].
///
/// Containers and raw mappings always qualify. A dynamic [`Value`] qualifies
/// only when it is an array or an object.
pub trait AppendSource {
    /// The source's values in its own iteration order, keys dropped.
    fn into_append_values(self) -> Result<Vec<Value>>;
}

impl<C: Container> AppendSource for &C {
    fn into_append_values(self) -> Result<Vec<Value>> {
        Ok(self.values().cloned().collect())
    }
}

impl AppendSource for Collection {
    fn into_append_values(self) -> Result<Vec<Value>> {
        Ok(self.into_items().into_values().collect())
    }
}

impl AppendSource for IndexedCollection {
    fn into_append_values(self) -> Result<Vec<Value>> {
        Ok(self.into_items().into_values().collect())
    }
}

impl AppendSource for OrderedCollection {
    fn into_append_values(self) -> Result<Vec<Value>> {
        Ok(self.into_items().into_values().collect())
    }
}

impl AppendSource for Items {
    fn into_append_values(self) -> Result<Vec<Value>> {
        Ok(self.into_values().collect())
    }
}

impl AppendSource for Vec<Value> {
    fn into_append_values(self) -> Result<Vec<Value>> {
        Ok(self)
    }
}

impl AppendSource for Value {
    fn into_append_values(self) -> Result<Vec<Value>> {
        match self {
            Value::Array(arr) => Ok(arr),
            Value::Object(map) => Ok(map.into_values().collect()),
            other => {
                tracing::debug!(target: "keyed_collections::ordered", source = ?other, "Rejected append source");
                Err(CollectionError::InvalidArgument(format!(
                    "array or collection expected for append, got {other:?}"
                )))
            }
        }
    }
}

impl OrderedCollection {
    // ════════════════════════════════════════════════════════════════════════
    // Merge, reorder, shrink
    // ════════════════════════════════════════════════════════════════════════

    /// Append the values of `source` after the current items, in the
    /// source's order. The source's keys are ignored.
    ///
    /// Fails with `InvalidArgument` when `source` is a scalar value; the
    /// collection is unchanged in that case.
    pub fn append(&mut self, source: impl AppendSource) -> Result<&mut Self> {
        let values = source.into_append_values()?;
        let start = self.len();
        let storage = self.storage_mut();
        storage.reserve(values.len());
        for (i, value) in values.into_iter().enumerate() {
            storage.insert(Key::from(start + i), value);
        }
        Ok(self)
    }

    /// Stable sort by `compare`; indices are renumbered afterwards.
    pub fn sort<F>(&mut self, mut compare: F) -> &mut Self
    where
        F: FnMut(&Value, &Value) -> Ordering,
    {
        self.storage_mut().sort_by(|_, a, _, b| compare(a, b));
        self.reindex();
        self
    }

    /// Keep only the first `length` items. Longer lengths leave the
    /// collection as is; negative ones fail with `OutOfBounds`.
    pub fn truncate(&mut self, length: i64) -> Result<&mut Self> {
        if length < 0 {
            tracing::debug!(target: "keyed_collections::ordered", length, "Rejected negative length");
            return Err(CollectionError::negative_length(length));
        }
        let keep = usize::try_from(length).unwrap_or(usize::MAX);
        self.storage_mut().truncate(keep);
        Ok(self)
    }
}
