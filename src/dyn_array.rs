mod array;
mod inner;
mod sort;

pub use array::DEFAULT_CAPACITY;
pub use array::DynArr;
