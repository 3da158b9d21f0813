use core::alloc::Allocator;
use core::alloc::Layout;
use core::ptr::NonNull;

use super::AllocError;
use super::AltAllocator;

// Any nightly allocator can back a `DynArr` directly.
unsafe impl<A> AltAllocator for A
where
    A: Allocator,
{
    #[inline]
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        return <Self as Allocator>::allocate(self, layout);
    }
    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { <Self as Allocator>::deallocate(self, ptr, layout) };
    }
    #[inline]
    unsafe fn grow(
        &self,
        old_ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        return unsafe { <Self as Allocator>::grow(self, old_ptr, old_layout, new_layout) };
    }
}
