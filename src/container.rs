use crate::key::Key;
use crate::types::{FastMap, Items, Iter};
use crate::value::Value;

/// Sized, iterable, bulk-replaceable item storage.
///
/// Every container in the crate implements this; the keyed and positional
/// layers build their own access rules on top of it.
pub trait Container {
    fn items(&self) -> &Items;

    /// Replace the whole storage. Implementors may normalize the keys.
    fn replace_items(&mut self, items: Items);

    #[inline]
    fn set_items(&mut self, items: Items) -> &mut Self
    where
        Self: Sized,
    {
        self.replace_items(items);
        self
    }

    #[inline]
    fn clear(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self.set_items(Items::default())
    }

    #[inline]
    fn len(&self) -> usize {
        self.items().len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Iterate `(key, value)` pairs in storage order. Each call starts over.
    #[inline]
    fn iter(&self) -> Iter<'_> {
        self.items().iter()
    }

    /// All keys in storage order.
    fn keys(&self) -> Vec<Key> {
        self.items().keys().cloned().collect()
    }

    fn values(&self) -> indexmap::map::Values<'_, Key, Value> {
        self.items().values()
    }

    /// Apply `f` to every item. The result keeps the original keys and the
    /// container is left untouched.
    fn map<U, F>(&self, mut f: F) -> FastMap<Key, U>
    where
        F: FnMut(&Value) -> U,
    {
        self.items()
            .iter()
            .map(|(k, v)| (k.clone(), f(v)))
            .collect()
    }

    /// Keep only the items `predicate` accepts.
    ///
    /// The surviving entries go back through [`Container::replace_items`],
    /// so containers that renumber on bulk replace renumber here too.
    fn filter<F>(&mut self, mut predicate: F) -> &mut Self
    where
        F: FnMut(&Value) -> bool,
        Self: Sized,
    {
        let kept: Items = self
            .items()
            .iter()
            .filter(|&(_, v)| predicate(v))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        self.set_items(kept)
    }

    /// First key holding `needle`, or `None`.
    ///
    /// `strict` compares with `==` (same variant, same payload); otherwise
    /// [`Value::loose_eq`] is used.
    fn search(&self, needle: &Value, strict: bool) -> Option<Key> {
        self.items()
            .iter()
            .find(|&(_, v)| {
                if strict {
                    v == needle
                } else {
                    v.loose_eq(needle)
                }
            })
            .map(|(k, _)| k.clone())
    }
}
