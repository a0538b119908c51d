mod collection;
mod merge_op;
mod stack_op;

pub use collection::OrderedCollection;
pub use merge_op::AppendSource;
