//! Allocator types used by `DynArr`: the `AltAllocator` trait that the buffer is
//! allocated and grown through, and the `AllocError` it reports.
//!
//! If the `experimental_allocator` feature is enabled, `AltAllocator` is implemented
//! for every type implementing the unstable `Allocator` trait. With `alloc_api2` the
//! same is done for `allocator-api2` allocators.
//!
//! If built with the `std_alloc` feature, a wrapper called `Global` is also
//! provided. Further, if the `experimental_allocator` feature is enabled,
//! the allocator APIs `Global` is re-exported instead.

#[cfg(all(feature = "alloc_api2", not(feature = "experimental_allocator")))]
mod alloc_api2;
#[cfg(feature = "experimental_allocator")]
mod alloc_unstable;
mod alt_alloc;
#[cfg(feature = "std_alloc")]
mod std_alloc;

#[cfg(feature = "experimental_allocator")]
pub use core::alloc::AllocError;

#[cfg(not(feature = "experimental_allocator"))]
pub use alloc_error::AllocError;
pub use alt_alloc::AltAllocator;
#[cfg(feature = "std_alloc")]
pub use std_alloc::Global;

#[cfg(not(feature = "experimental_allocator"))]
mod alloc_error {
    use core::error::Error;
    use core::fmt;

    /// The allocator could not hand out or grow a block of memory.
    ///
    /// If the rust allocator API is enabled this will be the same error type as
    /// the Allocator API.
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct AllocError;

    impl Error for AllocError {}

    impl fmt::Display for AllocError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("The allocator refused the request.")
        }
    }
}
