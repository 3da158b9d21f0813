use core::alloc::Layout;
use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::ops::Index;
use core::ops::IndexMut;
use core::ops::Range;
use core::ptr;
use core::slice;

use super::inner::Inner;
use super::sort;
#[cfg(feature = "std_alloc")]
use crate::alloc::Global;
use crate::alloc::AltAllocator;
use crate::types::DynArrErr;
use crate::types::DynArrResult;
use crate::types::ErrorReason;
use crate::types::LengthType;

/// Number of slots a `DynArr` allocates when no capacity is given.
pub const DEFAULT_CAPACITY: u8 = 10;

/// A growable array of `Option<T>` slots.
///
/// `len()` counts the slots holding a value. `end()` is one past the last
/// occupied slot. They only differ when `insert_at` was given an index past
/// `end()`, which leaves empty slots (holes) behind.
///
/// The buffer always keeps at least one free slot past `end()`. It doubles
/// when that slot would be used up and never shrinks.
#[cfg(feature = "std_alloc")]
pub struct DynArr<T, A: AltAllocator = Global, L: LengthType = u32>
where
    usize: TryFrom<L>,
{
    inner: Inner<A, L>,
    len:   L,
    end:   L,
    _ph:   PhantomData<T>,
}

/// A growable array of `Option<T>` slots.
///
/// `len()` counts the slots holding a value. `end()` is one past the last
/// occupied slot. They only differ when `insert_at` was given an index past
/// `end()`, which leaves empty slots (holes) behind.
///
/// The buffer always keeps at least one free slot past `end()`. It doubles
/// when that slot would be used up and never shrinks.
#[cfg(not(feature = "std_alloc"))]
pub struct DynArr<T, A: AltAllocator, L: LengthType = u32>
where
    usize: TryFrom<L>,
{
    inner: Inner<A, L>,
    len:   L,
    end:   L,
    _ph:   PhantomData<T>,
}

unsafe impl<T: Send, A: AltAllocator + Send, L: LengthType + Send> Send for DynArr<T, A, L> where usize: TryFrom<L> {}
unsafe impl<T: Sync, A: AltAllocator + Sync, L: LengthType + Sync> Sync for DynArr<T, A, L> where usize: TryFrom<L> {}

/// Writes `None` into every slot in `range`.
///
/// The slots must be allocated and must not hold a value that still needs dropping.
unsafe fn write_empty<T>(base: *mut Option<T>, range: Range<usize>) {
    for i in range {
        unsafe { ptr::write(base.add(i), None) };
    }
}

#[cfg(feature = "std_alloc")]
impl<T, L: LengthType> DynArr<T, Global, L>
where
    usize: TryFrom<L>,
{
    /// Creates an array with `DEFAULT_CAPACITY` slots using the global allocator.
    pub fn new() -> DynArrResult<Self> {
        return Self::new_in(Global);
    }

    pub fn with_capacity(capacity: L) -> DynArrResult<Self> {
        return Self::with_capacity_in(Global, capacity);
    }
}

impl<T, A: AltAllocator, L: LengthType> DynArr<T, A, L>
where
    usize: TryFrom<L>,
{
    const LAYOUT: Layout = Layout::new::<Option<T>>();

    /// Creates an array with `DEFAULT_CAPACITY` slots taken from `alloc`.
    pub fn new_in(alloc: A) -> DynArrResult<Self> {
        return Self::with_capacity_in(alloc, L::from(DEFAULT_CAPACITY));
    }

    pub fn with_capacity_in(alloc: A, capacity: L) -> DynArrResult<Self> {
        let inner = Inner::initial_alloc(alloc, capacity, Self::LAYOUT)?;
        unsafe { write_empty(inner.get_ptr::<Option<T>>(), 0..capacity.as_usize()) };
        return Ok(Self {
            inner: inner,
            len:   L::ZERO_VALUE,
            end:   L::ZERO_VALUE,
            _ph:   PhantomData,
        });
    }

    /// Adds `item` right after the last occupied slot.
    ///
    /// Grows the buffer first if the write would leave no free slot, so on
    /// error the array is unchanged.
    pub fn append(&mut self, item: T) -> DynArrResult<()> {
        let end = self.end;
        let Some(new_end) = end.checked_add(L::ONE_VALUE) else {
            return Err(DynArrErr::new(ErrorReason::CapacityOverflow));
        };
        self.reserve_for(new_end)?;

        self.buffer_mut()[end.as_usize()] = Some(item);
        self.end = new_end;
        self.len += L::ONE_VALUE;
        return Ok(());
    }

    /// Inserts `item` at `index`.
    ///
    /// Below `end()` the slots from `index` on shift right by one. At or past
    /// `end()` nothing moves and any slots between the old end and `index`
    /// stay empty. Any index below `capacity()` is accepted, as is `end()`.
    pub fn insert_at(&mut self, index: L, item: T) -> DynArrResult<()> {
        let end = self.end;
        let idx = if index == end { end.as_usize() } else { self.check_index(index)? };
        let new_end = if index < end { end } else { index };
        let Some(new_end) = new_end.checked_add(L::ONE_VALUE) else {
            return Err(DynArrErr::new(ErrorReason::CapacityOverflow));
        };
        self.reserve_for(new_end)?;

        let end = end.as_usize();
        let slots = self.buffer_mut();
        if idx < end {
            // slots[end] is free, rotating carries it down to idx.
            slots[idx..=end].rotate_right(1);
        }
        slots[idx] = Some(item);

        self.end = new_end;
        self.len += L::ONE_VALUE;
        return Ok(());
    }

    /// Returns the item at `index`, or `None` if that slot is empty.
    pub fn get(&self, index: L) -> DynArrResult<Option<&T>> {
        let idx = self.check_index(index)?;
        return Ok(self.buffer()[idx].as_ref());
    }

    pub fn get_mut(&mut self, index: L) -> DynArrResult<Option<&mut T>> {
        let idx = self.check_index(index)?;
        return Ok(self.buffer_mut()[idx].as_mut());
    }

    /// Removes the slot at `index` and shifts every later slot left by one.
    ///
    /// Returns what the slot held. Indices between `end()` and `capacity()`
    /// name empty slots, for those nothing changes and `None` is returned.
    pub fn remove_at(&mut self, index: L) -> DynArrResult<Option<T>> {
        let idx = self.check_index(index)?;
        if index >= self.end {
            return Ok(None);
        }

        let end = self.end.as_usize();
        let slots = self.buffer_mut();
        let removed = slots[idx].take();
        slots[idx..end].rotate_left(1);

        if removed.is_some() {
            self.len -= L::ONE_VALUE;
        }
        self.end -= L::ONE_VALUE;
        self.trim_end();
        return Ok(removed);
    }

    /// Drops every item. The capacity is kept.
    pub fn remove_all(&mut self) {
        for slot in self.as_mut_slots() {
            *slot = None;
        }
        self.len = L::ZERO_VALUE;
        self.end = L::ZERO_VALUE;
    }

    /// Finds the first slot below `end()` that matches `item`.
    ///
    /// `Some(x)` looks for a value equal to `x`, `None` looks for an empty slot.
    pub fn index_of(&self, item: Option<&T>) -> Option<L>
    where
        T: PartialEq,
    {
        let pos = self.as_slots().iter().position(|slot| slot.as_ref() == item)?;
        return L::from_usize(pos);
    }

    /// Reverses the order of the slots below `end()`.
    pub fn reverse(&mut self) {
        let slots = self.as_mut_slots();
        if slots.len() > 1 {
            let mut left = 0;
            let mut right = slots.len() - 1;
            while left < right {
                slots.swap(left, right);
                left += 1;
                right -= 1;
            }
        }
        // A leading hole is now trailing.
        self.trim_end();
    }

    /// Sorts the items with `compare`. The sort is not stable.
    ///
    /// Empty slots sort after every item, so afterwards the array has no
    /// holes and `end() == len()`.
    pub fn sort_with<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if self.len == L::ZERO_VALUE {
            return;
        }
        log::trace!("sorting {} slots", self.end.as_usize());

        let mut by_slot = |a: &Option<T>, b: &Option<T>| match (a, b) {
            (Some(a), Some(b)) => compare(a, b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        sort::quick_sort(self.as_mut_slots(), &mut by_slot);
        self.end = self.len;
    }

    #[inline]
    pub const fn len(&self) -> L {
        return self.len;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.len == L::ZERO_VALUE;
    }

    /// One past the last occupied slot.
    #[inline]
    pub const fn end(&self) -> L {
        return self.end;
    }

    pub const fn capacity(&self) -> L {
        return self.inner.capacity();
    }

    /// The slots below `end()`, empty ones included.
    #[inline]
    pub fn as_slots(&self) -> &[Option<T>] {
        return &self.buffer()[..self.end.as_usize()];
    }

    /// Iterates over the slots below `end()`, yielding `None` for holes.
    pub fn iter(&self) -> impl Iterator<Item = Option<&T>> {
        return self.as_slots().iter().map(Option::as_ref);
    }

    fn as_mut_slots(&mut self) -> &mut [Option<T>] {
        let end = self.end.as_usize();
        return &mut self.buffer_mut()[..end];
    }

    #[inline]
    fn buffer(&self) -> &[Option<T>] {
        unsafe { slice::from_raw_parts(self.inner.get_ptr(), self.capacity().as_usize()) }
    }

    #[inline]
    fn buffer_mut(&mut self) -> &mut [Option<T>] {
        unsafe { slice::from_raw_parts_mut(self.inner.get_ptr(), self.capacity().as_usize()) }
    }

    fn check_index(&self, index: L) -> DynArrResult<usize> {
        if index >= self.capacity() {
            return Err(DynArrErr::new(ErrorReason::IndexOutOfBounds));
        }
        return Ok(index.as_usize());
    }

    /// Makes sure slot `new_end` exists, so that writing up to `new_end`
    /// still leaves a free slot. Doubles the capacity when it has to grow.
    fn reserve_for(&mut self, new_end: L) -> DynArrResult<()> {
        let cap = self.capacity();
        if new_end < cap {
            return Ok(());
        }
        let Some(needed) = new_end.checked_add(L::ONE_VALUE) else {
            return Err(DynArrErr::new(ErrorReason::CapacityOverflow));
        };
        let doubled = cap.checked_mul(L::from(2u8)).unwrap_or(L::MAX_VALUE);
        let new_cap = if doubled < needed { needed } else { doubled };

        self.inner.grow_to(new_cap, Self::LAYOUT)?;
        unsafe { write_empty(self.inner.get_ptr::<Option<T>>(), cap.as_usize()..new_cap.as_usize()) };
        return Ok(());
    }

    fn trim_end(&mut self) {
        while self.end > L::ZERO_VALUE && self.buffer()[(self.end - L::ONE_VALUE).as_usize()].is_none() {
            self.end -= L::ONE_VALUE;
        }
    }
}

impl<T, A: AltAllocator, L: LengthType> Drop for DynArr<T, A, L>
where
    usize: TryFrom<L>,
{
    fn drop(&mut self) {
        // Slots past `end` are always empty.
        let slots: *mut [Option<T>] = self.as_mut_slots();
        unsafe { ptr::drop_in_place(slots) };
        unsafe { self.inner.release(Self::LAYOUT) };
    }
}

impl<T, A: AltAllocator, L: LengthType> Index<L> for DynArr<T, A, L>
where
    usize: TryFrom<L>,
{
    type Output = T;

    fn index(&self, index: L) -> &T {
        let Ok(slot) = self.get(index) else {
            panic!("index {} is out of bounds for capacity {}", index.as_usize(), self.capacity().as_usize());
        };
        let Some(item) = slot else {
            panic!("slot {} is empty", index.as_usize());
        };
        return item;
    }
}

impl<T, A: AltAllocator, L: LengthType> IndexMut<L> for DynArr<T, A, L>
where
    usize: TryFrom<L>,
{
    fn index_mut(&mut self, index: L) -> &mut T {
        let cap = self.capacity().as_usize();
        let Ok(slot) = self.get_mut(index) else {
            panic!("index {} is out of bounds for capacity {}", index.as_usize(), cap);
        };
        let Some(item) = slot else {
            panic!("slot {} is empty", index.as_usize());
        };
        return item;
    }
}

impl<T: fmt::Debug, A: AltAllocator, L: LengthType> fmt::Debug for DynArr<T, A, L>
where
    usize: TryFrom<L>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_list().entries(self.iter()).finish();
    }
}
