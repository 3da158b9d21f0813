//! # Dynamic Array
//!
//! The `dyn_array` crate provides a `#[no_std]` growable array, `DynArr`, that supports
//! appending, positional insert and remove, searching, reversing, and sorting with a
//! caller supplied comparator.
//!
//! Every slot of the backing buffer is an `Option<T>`. An empty slot is a *hole*, so the
//! element type never has to reserve a sentinel value of its own. Holes only appear when
//! an item is inserted past the current end of the array, every other operation keeps
//! the occupied prefix compact.
//!
//! `DynArr` uses fallible allocations. Instead of panicking when an allocation fails it
//! returns an error. The buffer starts at `DEFAULT_CAPACITY` slots, doubles whenever it
//! fills up, and never shrinks.
//!
//! The type used for the length, capacity, and indices is a generic (`u32` by default),
//! see `LengthType`.
//!
//! # Feature Flags
//! * `std_alloc` - Enabled by default. This feature enables a wrapper called `Global` that
//! implements `AltAllocator` using the standard allocator APIs.
//!
//! * `experimental_allocator` - This feature enables the use of the unstable `Allocator` trait for
//! custom memory allocators. Further, if used in conjunction with `std_alloc` this will re-export
//! the `Global` type from the `std` crate instead of the `Global` wrapper defined in this crate.
//!
//! * `alloc_api2` - Any allocator implementing the `allocator-api2` `Allocator` trait can be
//! used with `DynArr`.
//!
//! # Example
//! ```
//! use dyn_array::DynArr;
//!
//! let mut arr = DynArr::<&str>::new().unwrap();
//! arr.append("c").unwrap();
//! arr.append("a").unwrap();
//! arr.append("b").unwrap();
//! arr.sort_with(|a, b| a.cmp(b));
//!
//! assert_eq!(arr.len(), 3);
//! assert_eq!(arr.get(0).unwrap(), Some(&"a"));
//! assert_eq!(arr.index_of(Some(&"c")), Some(2));
//! ```

#![no_std]
#![cfg_attr(feature = "experimental_allocator", feature(allocator_api))]

#[cfg(any(feature = "std_alloc", test))]
extern crate std;

pub mod alloc;
mod dyn_array;
pub mod types;

pub use dyn_array::DEFAULT_CAPACITY;
pub use dyn_array::DynArr;
