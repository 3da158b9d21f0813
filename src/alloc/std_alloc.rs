pub use alloc_def::Global;

#[cfg(feature = "experimental_allocator")]
mod alloc_def {
    /// Re-export the std Global implementation of allocator APIs.
    pub use std::alloc::Global;
}

#[cfg(not(feature = "experimental_allocator"))]
mod alloc_def {
    use core::ptr::NonNull;
    use std::alloc;
    use std::alloc::Layout;

    use crate::alloc::AllocError;
    use crate::alloc::AltAllocator;

    /// The process wide allocator from `std`, wrapped so it can back a `DynArr`.
    ///
    /// See:
    /// <https://doc.rust-lang.org/std/alloc/struct.Global.html>
    ///
    /// It shares the name of the unstable `Global` so that switching to the
    /// allocator API later does not break callers.
    #[derive(Debug, Copy, Clone, Default)]
    pub struct Global;

    unsafe impl AltAllocator for Global {
        fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
            // std::alloc::alloc() rejects zero sized layouts.
            if layout.size() == 0 {
                return Err(AllocError);
            };
            let ptr = unsafe { alloc::alloc(layout) };
            let Some(ptr) = NonNull::new(ptr) else {
                return Err(AllocError);
            };
            return Ok(NonNull::slice_from_raw_parts(ptr, layout.size()));
        }

        unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
            unsafe { alloc::dealloc(ptr.as_ptr(), layout) };
        }

        unsafe fn grow(
            &self,
            old_ptr: NonNull<u8>,
            old_layout: Layout,
            new_layout: Layout,
        ) -> Result<NonNull<[u8]>, AllocError> {
            if new_layout.size() < old_layout.size() || new_layout.align() != old_layout.align() {
                return Err(AllocError);
            }
            // realloc keeps the old block alive when it fails.
            let new = unsafe { alloc::realloc(old_ptr.as_ptr(), old_layout, new_layout.size()) };
            let Some(new) = NonNull::new(new) else {
                return Err(AllocError);
            };
            return Ok(NonNull::slice_from_raw_parts(new, new_layout.size()));
        }
    }
}
