use crate::collection::Collection;
use crate::container::Container;
use crate::error::{CollectionError, Result};
use crate::key::Key;
use crate::types::{Items, Iter, renumber};
use crate::value::Value;

// ─── IndexedCollection ──────────────────────────────────────────────────────

/// A collection addressed by key.
///
/// `Null` is not a storable value here: setting a key to `Null` removes it,
/// and a `Null` loaded in bulk reads as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexedCollection {
    base: Collection,
}

impl IndexedCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Items) -> Self {
        Self {
            base: Collection::from_items(items),
        }
    }

    #[inline]
    pub(crate) fn storage_mut(&mut self) -> &mut Items {
        self.base.storage_mut()
    }

    pub fn into_items(self) -> Items {
        self.base.into_items()
    }

    /// Whether a non-null value is stored under `key`.
    pub fn has(&self, key: impl Into<Key>) -> bool {
        self.get(key).is_some()
    }

    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        self.items().get(&key.into()).filter(|v| !v.is_null())
    }

    /// Value under `key`, or `default` when absent.
    pub fn get_or<'a>(&'a self, key: impl Into<Key>, default: &'a Value) -> &'a Value {
        self.get(key).unwrap_or(default)
    }

    /// Insert or replace the value under `key`. A `Null` value unsets the key.
    pub fn set(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> &mut Self {
        let value = value.into();
        if value.is_null() {
            return self.unset(key);
        }
        self.storage_mut().insert(key.into(), value);
        self
    }

    /// Remove `key` if present. The order of the remaining items is kept.
    pub fn unset(&mut self, key: impl Into<Key>) -> &mut Self {
        self.storage_mut().shift_remove(&key.into());
        self
    }
}

impl Container for IndexedCollection {
    #[inline]
    fn items(&self) -> &Items {
        self.base.items()
    }

    #[inline]
    fn replace_items(&mut self, items: Items) {
        self.base.replace_items(items);
    }
}

impl From<Items> for IndexedCollection {
    fn from(items: Items) -> Self {
        Self::from_items(items)
    }
}

impl From<Collection> for IndexedCollection {
    fn from(base: Collection) -> Self {
        Self { base }
    }
}

impl<K, V> FromIterator<(K, V)> for IndexedCollection
where
    K: Into<Key>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Collection>())
    }
}

/// Objects become string-keyed collections and arrays become `0..n-1`
/// keyed ones. Any other value is rejected.
impl TryFrom<Value> for IndexedCollection {
    type Error = CollectionError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(map.into_iter().collect()),
            Value::Array(arr) => Ok(Self::from_items(renumber(arr))),
            other => Err(CollectionError::InvalidArgument(format!(
                "object or array expected, got {other:?}"
            ))),
        }
    }
}

impl<'a> IntoIterator for &'a IndexedCollection {
    type Item = (&'a Key, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
