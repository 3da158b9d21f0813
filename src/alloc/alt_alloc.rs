use core::alloc::Layout;
use core::ptr::NonNull;

use super::AllocError;

/// The memory source behind a `DynArr` buffer.
///
/// The rust allocator API is not stable yet, so this trait stands in for it in a
/// `no_std` environment. It keeps only what a growth-only buffer needs: an initial
/// allocation, growing a block, and releasing it. There is deliberately no shrink.
///
/// Implementors must uphold the safety requirements of the allocator API:
/// <https://doc.rust-lang.org/std/alloc/trait.Allocator.html>
pub unsafe trait AltAllocator {
    /// Allocates a block for the given layout.
    ///
    /// The block may be larger than requested. Its contents are uninitialized.
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError>;

    /// Releases the block pointed at by `ptr`.
    ///
    /// The block must come from this allocator and `layout` must be the
    /// layout it was allocated (or last grown) with.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);

    /// Grows the block at `old_ptr` to `new_layout`, keeping its first
    /// `old_layout.size()` bytes.
    ///
    /// On failure the old block is untouched and still owned by the caller.
    /// On success only the returned pointer may be used.
    unsafe fn grow(
        &self,
        old_ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        let new = self.allocate(new_layout)?;
        let ptr = new.cast::<u8>();

        // Copy into the new block, then drop the old one.
        unsafe { ptr.copy_from_nonoverlapping(old_ptr, old_layout.size()) };
        unsafe { self.deallocate(old_ptr, old_layout) };
        return Ok(new);
    }
}

// The allocator trait features already cover references through their own
// blanket impls.
#[cfg(not(any(feature = "experimental_allocator", feature = "alloc_api2")))]
unsafe impl<A> AltAllocator for &A
where
    A: AltAllocator,
{
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        return (**self).allocate(layout);
    }
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { (**self).deallocate(ptr, layout) };
    }
    unsafe fn grow(
        &self,
        old_ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        return unsafe { (**self).grow(old_ptr, old_layout, new_layout) };
    }
}
