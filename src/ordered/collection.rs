use crate::container::Container;
use crate::error::{CollectionError, Result};
use crate::indexed::IndexedCollection;
use crate::key::Key;
use crate::types::{Items, Iter, renumber};
use crate::value::Value;
use std::ops::Index;

// ─── OrderedCollection ──────────────────────────────────────────────────────

/// A sequence of items under the keys `0..len-1`.
///
/// Every mutation leaves the keys contiguous: removals in the middle shift
/// the following items down, bulk loads drop the incoming keys, and `set`
/// past the end appends.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderedCollection {
    inner: IndexedCollection,
}

impl OrderedCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from any keyed mapping; the mapping's keys are discarded.
    pub fn from_items(items: Items) -> Self {
        Self {
            inner: IndexedCollection::from_items(renumber(items.into_values())),
        }
    }

    #[inline]
    pub(super) fn storage_mut(&mut self) -> &mut Items {
        self.inner.storage_mut()
    }

    /// Rebuild the keys as `0..len-1` after an interior removal or reorder.
    pub(super) fn reindex(&mut self) {
        let values = std::mem::take(self.storage_mut());
        *self.storage_mut() = renumber(values.into_values());
        tracing::trace!(target: "keyed_collections::ordered", len = self.len(), "Re-indexed");
    }

    /// Position addressed by `offset`, if it is a valid index.
    #[inline]
    fn position(&self, offset: i64) -> Option<usize> {
        usize::try_from(offset).ok().filter(|&pos| pos < self.len())
    }

    #[inline]
    fn at(&self, pos: usize) -> Option<&Value> {
        self.items()
            .get_index(pos)
            .map(|(_, v)| v)
            .filter(|v| !v.is_null())
    }

    // ════════════════════════════════════════════════════════════════════════
    // Positional access
    // ════════════════════════════════════════════════════════════════════════

    /// Whether a non-null item sits at `offset`.
    ///
    /// Fails with `InvalidArgument` for a non-integer offset.
    pub fn has(&self, offset: impl Into<Key>) -> Result<bool> {
        Ok(self.get(offset)?.is_some())
    }

    /// Item at `offset`. Out of range (including negative) yields `None`.
    pub fn get(&self, offset: impl Into<Key>) -> Result<Option<&Value>> {
        let offset = offset.into().expect_offset()?;
        Ok(self.position(offset).and_then(|pos| self.at(pos)))
    }

    /// Replace the item at `offset`, or append it when nothing is stored there
    /// (`offset >= len`, or the slot holds `Null`).
    ///
    /// A `Null` item unsets the offset instead. Non-integer offsets fail with
    /// `InvalidArgument`, negative ones with `OutOfBounds`; the collection is
    /// unchanged on failure.
    pub fn set(&mut self, offset: impl Into<Key>, item: impl Into<Value>) -> Result<&mut Self> {
        let offset = offset.into().expect_offset()?;
        if offset < 0 {
            tracing::debug!(target: "keyed_collections::ordered", offset, "Rejected negative offset");
            return Err(CollectionError::negative_offset(offset));
        }

        let item = item.into();
        if item.is_null() {
            return self.unset(offset);
        }

        // a slot holding Null counts as absent, so it is appended past
        match self.position(offset).filter(|&pos| self.at(pos).is_some()) {
            Some(pos) => {
                if let Some((_, slot)) = self.storage_mut().get_index_mut(pos) {
                    *slot = item;
                }
            }
            None => {
                self.push(item);
            }
        }
        Ok(self)
    }

    /// Remove the item at `offset` and shift every later item down by one.
    ///
    /// Absent offsets are a no-op. Fails with `InvalidArgument` for a
    /// non-integer offset.
    pub fn unset(&mut self, offset: impl Into<Key>) -> Result<&mut Self> {
        let offset = offset.into().expect_offset()?;
        if let Some(pos) = self.position(offset) {
            self.storage_mut().shift_remove_index(pos);
            if pos < self.len() {
                self.reindex();
            }
        }
        Ok(self)
    }

    pub fn first(&self) -> Option<&Value> {
        self.at(0)
    }

    pub fn last(&self) -> Option<&Value> {
        self.len().checked_sub(1).and_then(|pos| self.at(pos))
    }

    /// Snapshot of the items in order.
    pub fn to_vec(&self) -> Vec<Value> {
        self.values().cloned().collect()
    }

    pub fn into_items(self) -> Items {
        self.inner.into_items()
    }
}

impl Container for OrderedCollection {
    #[inline]
    fn items(&self) -> &Items {
        self.inner.items()
    }

    /// Incoming keys are discarded; values are renumbered in iteration order.
    fn replace_items(&mut self, items: Items) {
        self.inner.replace_items(renumber(items.into_values()));
    }
}

impl Index<usize> for OrderedCollection {
    type Output = Value;

    /// Panics when `index >= len`, like slice indexing.
    fn index(&self, index: usize) -> &Value {
        &self.items()[index]
    }
}

impl From<Items> for OrderedCollection {
    fn from(items: Items) -> Self {
        Self::from_items(items)
    }
}

impl From<Vec<Value>> for OrderedCollection {
    fn from(values: Vec<Value>) -> Self {
        Self {
            inner: IndexedCollection::from_items(renumber(values)),
        }
    }
}

impl<V: Into<Value>> FromIterator<V> for OrderedCollection {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::from(iter.into_iter().map(Into::into).collect::<Vec<Value>>())
    }
}

impl<V: Into<Value>> Extend<V> for OrderedCollection {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        self.push_all(iter);
    }
}

impl<'a> IntoIterator for &'a OrderedCollection {
    type Item = (&'a Key, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
