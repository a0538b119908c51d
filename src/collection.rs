use crate::container::Container;
use crate::key::Key;
use crate::types::{Items, Iter};
use crate::value::Value;

// ─── Collection ─────────────────────────────────────────────────────────────

/// A list of items under arbitrary keys.
///
/// Keys need not be numeric or contiguous. Bulk-loaded `Null` items are kept
/// and counted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    items: Items,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Items) -> Self {
        Self { items }
    }

    #[inline]
    pub(crate) fn storage_mut(&mut self) -> &mut Items {
        &mut self.items
    }

    pub fn into_items(self) -> Items {
        self.items
    }
}

impl Container for Collection {
    #[inline]
    fn items(&self) -> &Items {
        &self.items
    }

    #[inline]
    fn replace_items(&mut self, items: Items) {
        self.items = items;
    }
}

impl From<Items> for Collection {
    fn from(items: Items) -> Self {
        Self::from_items(items)
    }
}

impl<K, V> FromIterator<(K, V)> for Collection
where
    K: Into<Key>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_items(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = (&'a Key, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for Collection {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
