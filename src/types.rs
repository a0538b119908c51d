use crate::key::Key;
use crate::value::Value;
use rustc_hash::FxHasher;
use std::hash::BuildHasherDefault;

pub type FastMap<K, V> = indexmap::IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Keyed item storage shared by every container. Iteration follows insertion
/// order.
pub type Items = FastMap<Key, Value>;

/// Borrowing iterator over `(key, value)` pairs in storage order.
pub type Iter<'a> = indexmap::map::Iter<'a, Key, Value>;

/// Build an [`Items`] map.
///
/// ```
/// use keyed_collections::items;
///
/// let keyed = items! { "a" => 42i64, "b" => 666i64 };
/// assert_eq!(keyed.len(), 2);
///
/// let listed = items!["1st", "2nd"];
/// assert_eq!(listed.len(), 2);
/// ```
#[macro_export]
macro_rules! items {
    () => {
        $crate::types::Items::default()
    };

    ($($key:expr => $val:expr),+ $(,)?) => {{
        let mut map = $crate::types::Items::default();
        $(
            map.insert($crate::key::Key::from($key), $crate::value::Value::from($val));
        )+
        map
    }};

    ($($val:expr),+ $(,)?) => {{
        let mut map = $crate::types::Items::default();
        $(
            let next = $crate::key::Key::from(map.len());
            map.insert(next, $crate::value::Value::from($val));
        )+
        map
    }};
}

/// Rebuild `values` under keys `0..n-1`.
pub(crate) fn renumber<I>(values: I) -> Items
where
    I: IntoIterator<Item = Value>,
{
    values
        .into_iter()
        .enumerate()
        .map(|(i, v)| (Key::from(i), v))
        .collect()
}
