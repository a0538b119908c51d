use super::OrderedCollection;
use crate::container::Container;
use crate::key::Key;
use crate::types::renumber;
use crate::value::Value;

impl OrderedCollection {
    // ════════════════════════════════════════════════════════════════════════
    // Stack operations
    // ════════════════════════════════════════════════════════════════════════

    /// Append one item to the end.
    #[inline]
    pub fn push(&mut self, item: impl Into<Value>) -> &mut Self {
        let next = Key::from(self.len());
        self.storage_mut().insert(next, item.into());
        self
    }

    /// Append several items, keeping their order.
    pub fn push_all<I, V>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        for item in items {
            self.push(item);
        }
        self
    }

    /// Prepend one item to the front.
    #[inline]
    pub fn unshift(&mut self, item: impl Into<Value>) -> &mut Self {
        self.unshift_all(std::iter::once(item))
    }

    /// Prepend several items as one block: `unshift_all([a, b])` on
    /// `[x, y]` gives `[a, b, x, y]`.
    pub fn unshift_all<I, V>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let old = std::mem::take(self.storage_mut());
        let mut values: Vec<Value> = items.into_iter().map(Into::into).collect();
        values.extend(old.into_values());
        *self.storage_mut() = renumber(values);
        self
    }

    /// Remove and return the last item, or `None` when empty.
    #[inline]
    pub fn pop(&mut self) -> Option<Value> {
        self.storage_mut().pop().map(|(_, v)| v)
    }

    /// Remove and return the first item, or `None` when empty. The remaining
    /// items move down by one.
    pub fn shift(&mut self) -> Option<Value> {
        let (_, first) = self.storage_mut().shift_remove_index(0)?;
        if !self.is_empty() {
            self.reindex();
        }
        Some(first)
    }
}
