use crate::container::Container;
use crate::error::Result;
use crate::indexed::IndexedCollection;
use crate::key::Key;
use crate::types::{Items, Iter};
use crate::value::Value;

// ─── Record ─────────────────────────────────────────────────────────────────

/// Named fields over an [`IndexedCollection`].
///
/// Fields can be reached directly (`get_field`, `set_field`, ...) or through
/// the `verbField` method names handled by [`Record::call`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    data: IndexedCollection,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_data(data: impl Into<IndexedCollection>) -> Self {
        Self { data: data.into() }
    }

    /// Replace all fields. Accepts a keyed mapping or a ready collection.
    pub fn set_data(&mut self, data: impl Into<IndexedCollection>) -> &mut Self {
        self.data = data.into();
        self
    }

    pub fn data(&self) -> &IndexedCollection {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut IndexedCollection {
        &mut self.data
    }

    pub fn data_as_items(&self) -> &Items {
        self.data.items()
    }

    pub fn into_data(self) -> IndexedCollection {
        self.data
    }

    pub fn get_field(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    pub fn get_field_or<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        self.data.get_or(key, default)
    }

    /// Set a field. A `Null` value removes the field.
    pub fn set_field(&mut self, key: &str, value: impl Into<Value>) -> &mut Self {
        self.data.set(key, value);
        self
    }

    pub fn has_field(&self, key: &str) -> bool {
        self.data.has(key)
    }

    pub fn unset_field(&mut self, key: &str) -> &mut Self {
        self.data.unset(key);
        self
    }
}

impl Container for Record {
    #[inline]
    fn items(&self) -> &Items {
        self.data.items()
    }

    #[inline]
    fn replace_items(&mut self, items: Items) {
        self.data.replace_items(items);
    }
}

impl From<Items> for Record {
    fn from(items: Items) -> Self {
        Self::from_data(items)
    }
}

impl From<IndexedCollection> for Record {
    fn from(data: IndexedCollection) -> Self {
        Self { data }
    }
}

impl TryFrom<Value> for Record {
    type Error = crate::error::CollectionError;

    fn try_from(value: Value) -> Result<Self> {
        IndexedCollection::try_from(value).map(Self::from)
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a Key, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items;
    use serde_json::json;

    fn some_data() -> Items {
        items! { "foo" => "bar", "fii" => "baz", "under_scored" => "camelCase" }
    }

    #[test]
    fn test_generic_constructor() {
        let record = Record::new();
        assert!(record.is_empty());
        assert_eq!(record.len(), 0);
    }

    #[test]
    fn test_set_get_data() {
        let mut record = Record::new();
        let data = record.set_data(some_data()).data().items().clone();
        assert_eq!(data, some_data());

        record.set_data(IndexedCollection::from_items(some_data()));
        assert_eq!(record.data_as_items(), &some_data());
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn test_is_empty_and_clear() {
        let mut record = Record::from_data(some_data());
        assert!(!record.is_empty());
        assert!(record.clear().is_empty());
    }

    #[test]
    fn test_has_field() {
        let mut record = Record::new();
        assert!(!record.has_field("void"));

        record.set_data(some_data());
        assert!(record.has_field("foo"));
        assert!(!record.has_field("faa"));
    }

    #[test]
    fn test_get_field() {
        let record = Record::from_data(some_data());
        assert_eq!(record.get_field("foo"), Some(&Value::from("bar")));
        assert_eq!(record.get_field("void"), None);
    }

    #[test]
    fn test_get_field_default() {
        let record = Record::from_data(some_data());
        let fallback = Value::from("foo");
        assert_eq!(record.get_field_or("void", &fallback), &fallback);
    }

    #[test]
    fn test_set_field() {
        let mut record = Record::new();
        record.set_field("foo", "bar");
        assert_eq!(record.get_field("foo"), Some(&Value::from("bar")));

        record.set_data(some_data());
        assert_eq!(
            record.set_field("foo", "new").get_field("foo"),
            Some(&Value::from("new"))
        );
    }

    #[test]
    fn test_unset_field() {
        let mut record = Record::from_data(some_data());
        assert_eq!(record.unset_field("fii").get_field("fii"), None);
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_iteration_yields_fields() {
        let record = Record::from_data(some_data());
        let data = some_data();
        for (field, value) in &record {
            assert_eq!(data.get(field), Some(value));
        }
        assert_eq!(record.iter().count(), data.len());
    }

    #[test]
    fn test_try_from_object_value() {
        let record = Record::try_from(Value::from(json!({ "name": "Alice", "age": 28 }))).unwrap();
        assert_eq!(record.get_field("name").and_then(Value::as_str), Some("Alice"));
        assert!(Record::try_from(Value::from(1i64)).is_err());
    }
}
