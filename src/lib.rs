//! In-memory keyed containers.
//!
//! - [`Collection`]: items under arbitrary keys, insertion ordered.
//! - [`IndexedCollection`]: keyed `has`/`get`/`set`/`unset` on top of it.
//! - [`OrderedCollection`]: a sequence whose keys are always `0..len-1`, with
//!   stack operations, append, sort and truncate.
//! - [`Record`]: named fields with `getFoo`/`setFoo`/`hasFoo`/`unsetFoo`
//!   method-name dispatch.
//!
//! ```
//! use keyed_collections::{Container, OrderedCollection, Value, items};
//!
//! let mut list = OrderedCollection::from_items(items! { "a" => 42i64, "b" => 666i64 });
//! list.push(7i64).unshift(1i64);
//! list.unset(1)?;
//! assert_eq!(list.to_vec(), vec![Value::from(1i64), Value::from(666i64), Value::from(7i64)]);
//! assert_eq!(list.keys().len(), list.len());
//! # Ok::<(), keyed_collections::CollectionError>(())
//! ```

pub mod collection;
pub mod container;
pub mod error;
pub mod indexed;
pub mod key;
pub mod ordered;
pub mod record;
pub mod types;
pub mod value;

pub use collection::Collection;
pub use container::Container;
pub use error::{CollectionError, Result};
pub use indexed::IndexedCollection;
pub use key::Key;
pub use ordered::{AppendSource, OrderedCollection};
pub use record::{Dispatched, FieldCall, FieldVerb, Record};
pub use types::{FastMap, Items};
pub use value::{Number, ObjectMap, Value};
