use core::alloc::Layout;
use core::ptr::NonNull;

use crate::alloc::AltAllocator;
use crate::types::DynArrErr;
use crate::types::DynArrResult;
use crate::types::ErrorReason;
use crate::types::LengthType;

const fn layout_array(layout: Layout, length: usize) -> DynArrResult<Layout> {
    let lay = layout.pad_to_align();
    let Some(len) = length.checked_mul(lay.size()) else {
        return Err(DynArrErr::new(ErrorReason::UsizeOverflow));
    };
    let Ok(lay) = Layout::from_size_align(len, layout.align()) else {
        return Err(DynArrErr::new(ErrorReason::LayoutFailure));
    };
    return Ok(lay);
}

/// The untyped buffer behind a `DynArr`. Every method takes the layout of a
/// single slot. The owner is responsible for initializing slots and for
/// calling `release` exactly once.
pub(crate) struct Inner<A: AltAllocator, L: LengthType>
where
    usize: TryFrom<L>,
{
    ptr:      NonNull<u8>,
    capacity: L,
    alloc:    A,
}

impl<A: AltAllocator, L: LengthType> Inner<A, L>
where
    usize: TryFrom<L>,
{
    const fn dangling(alloc: A, align: usize, capacity: L) -> Self {
        let ptr = align as *mut u8;
        return Self {
            ptr:      unsafe { NonNull::new_unchecked(ptr) },
            capacity: capacity,
            alloc:    alloc,
        };
    }

    pub(crate) fn initial_alloc(alloc: A, capacity: L, layout: Layout) -> DynArrResult<Self> {
        let Ok(cap) = usize::try_from(capacity) else {
            return Err(DynArrErr::new(ErrorReason::UsizeOverflow));
        };
        let layout = layout_array(layout, cap)?;

        // Nothing to allocate for zero sized slots or an empty buffer.
        if layout.size() == 0 {
            return Ok(Self::dangling(alloc, layout.align(), capacity));
        }

        let Ok(ptr) = alloc.allocate(layout) else {
            log::warn!("allocator refused an initial buffer of {} bytes", layout.size());
            return Err(DynArrErr::new(ErrorReason::AllocFailure));
        };

        return Ok(Self {
            ptr:      ptr.cast(),
            capacity: capacity,
            alloc:    alloc,
        });
    }

    /// Grows the buffer to hold `capacity` slots. The first `self.capacity`
    /// slots keep their contents, the rest are uninitialized.
    ///
    /// On error the buffer is left as it was.
    pub(crate) fn grow_to(&mut self, capacity: L, layout: Layout) -> DynArrResult<()> {
        let Ok(new_cap) = usize::try_from(capacity) else {
            return Err(DynArrErr::new(ErrorReason::UsizeOverflow));
        };
        let old_cap = self.capacity.as_usize();
        let new_layout = layout_array(layout, new_cap)?;
        let old_layout = layout_array(layout, old_cap)?;

        if new_layout.size() == 0 {
            self.capacity = capacity;
            return Ok(());
        }

        let grown = if old_layout.size() == 0 {
            self.alloc.allocate(new_layout)
        } else {
            unsafe { self.alloc.grow(self.ptr, old_layout, new_layout) }
        };
        let Ok(ptr) = grown else {
            log::warn!("allocator refused to grow buffer from {} to {} slots", old_cap, new_cap);
            return Err(DynArrErr::new(ErrorReason::AllocFailure));
        };

        log::debug!("grew buffer from {} to {} slots", old_cap, new_cap);
        self.ptr = ptr.cast();
        self.capacity = capacity;
        return Ok(());
    }

    /// Hands the block back to the allocator.
    ///
    /// Must only be called once, after every slot has been dropped.
    pub(crate) unsafe fn release(&mut self, layout: Layout) {
        let Ok(layout) = layout_array(layout, self.capacity.as_usize()) else {
            return;
        };
        if layout.size() == 0 {
            return;
        }
        unsafe { self.alloc.deallocate(self.ptr, layout) };
    }

    #[inline]
    pub(crate) const fn capacity(&self) -> L {
        return self.capacity;
    }

    #[inline]
    pub(crate) const fn get_ptr<T>(&self) -> *mut T {
        return self.ptr.as_ptr().cast();
    }
}
