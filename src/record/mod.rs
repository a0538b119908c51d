mod dispatch;
mod fields;

pub use dispatch::{Dispatched, FieldCall, FieldVerb};
pub use fields::Record;
