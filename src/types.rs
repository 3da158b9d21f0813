//! The error types reported by `DynArr` operations, and the `LengthType` trait
//! that picks the integer used for lengths, capacities, and indices.

mod errors;
mod len_type;

pub use errors::*;
pub use len_type::LengthType;
