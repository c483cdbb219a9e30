use core::alloc::Layout;
use core::ptr::NonNull;

use crate::alloc::AltAllocator;
use crate::types::ArrListErr;
use crate::types::ArrListResult;
use crate::types::ErrorReason;
use crate::types::LengthType;

const fn layout_array(layout: Layout, length: usize) -> ArrListResult<Layout> {
    let lay = layout.pad_to_align();
    let Some(len) = length.checked_mul(lay.size()) else {
        return Err(ArrListErr::new(ErrorReason::Overflow));
    };
    // Fails for anything past isize::MAX.
    let Ok(lay) = Layout::from_size_align(len, layout.align()) else {
        return Err(ArrListErr::new(ErrorReason::Overflow));
    };
    return Ok(lay);
}

/// The largest capacity a buffer of `layout` elements can have when its
/// length is counted in `L`.
pub(crate) fn max_capacity<L: LengthType>(layout: Layout) -> L
where
    usize: TryFrom<L>,
{
    let size = layout.pad_to_align().size();
    if size == 0 {
        return L::MAX_VALUE;
    }
    let by_bytes = (isize::MAX as usize) / size;
    return L::from_usize(by_bytes).unwrap_or(L::MAX_VALUE);
}

/// Capacity after one growth step: `capacity + 3 * length / 2`.
pub(crate) fn count_new_capacity<L: LengthType>(length: L, capacity: L) -> ArrListResult<L>
where
    usize: TryFrom<L>,
{
    let overflow = ArrListErr::new(ErrorReason::Overflow);
    let Some(tripled) = length.checked_mul(L::from(3u8)) else {
        return Err(overflow);
    };
    if capacity.checked_add(L::from(2u8)).is_none() {
        return Err(overflow);
    }
    return capacity.checked_add(tripled >> L::ONE_VALUE).ok_or(overflow);
}

/// The raw, untyped buffer behind an `ArrList` together with its capacity
/// and length.
///
/// `length` is only bookkeeping here. The list decides which slots are live
/// and updates it.
pub(crate) struct Inner<L: LengthType, A: AltAllocator>
where
    usize: TryFrom<L>,
{
    ptr:               NonNull<u8>,
    capacity:          L,
    pub(crate) length: L,
    alloc:             A,
}

impl<L: LengthType, A: AltAllocator> Inner<L, A>
where
    usize: TryFrom<L>,
{
    pub(crate) fn initial_alloc(alloc: A, capacity: L, layout: Layout) -> ArrListResult<Self> {
        if capacity > max_capacity::<L>(layout) {
            return Err(ArrListErr::new(ErrorReason::Overflow));
        }
        let Ok(cap) = usize::try_from(capacity) else {
            return Err(ArrListErr::new(ErrorReason::Overflow));
        };
        let array = layout_array(layout, cap)?;

        // Zero sized elements never need memory.
        if array.size() == 0 {
            return Ok(Self {
                ptr:      dangling(layout),
                capacity: capacity,
                length:   L::ZERO_VALUE,
                alloc:    alloc,
            });
        }

        let Ok(ptr) = alloc.allocate(array) else {
            return Err(ArrListErr::new(ErrorReason::OutOfMemory));
        };

        return Ok(Self {
            ptr:      ptr.cast(),
            capacity: capacity,
            length:   L::ZERO_VALUE,
            alloc:    alloc,
        });
    }

    /// Makes room for `additional` more elements after the current length.
    ///
    /// Does nothing when they already fit. Otherwise a single reallocation to
    /// `max(capacity + 3 * length / 2, length + additional)`. On any error
    /// the buffer, its contents and its capacity are unchanged.
    pub(crate) fn reserve(&mut self, additional: L, layout: Layout) -> ArrListResult<()> {
        let length = self.length;
        let required = length.checked_add(additional);
        if required.is_some_and(|req| req <= self.capacity) {
            return Ok(());
        }
        let max = max_capacity::<L>(layout);
        if self.capacity >= max {
            return Err(ArrListErr::new(ErrorReason::ReachedCapacityMax));
        }
        let Some(required) = required else {
            return Err(ArrListErr::new(ErrorReason::Overflow));
        };

        let new_capacity = count_new_capacity(length, self.capacity)?.max(required);
        if new_capacity > max {
            return Err(ArrListErr::new(ErrorReason::Overflow));
        }

        let Ok(old_cap) = usize::try_from(self.capacity) else {
            return Err(ArrListErr::new(ErrorReason::Overflow));
        };
        let Ok(new_cap) = usize::try_from(new_capacity) else {
            return Err(ArrListErr::new(ErrorReason::Overflow));
        };
        let old_layout = layout_array(layout, old_cap)?;
        let new_layout = layout_array(layout, new_cap)?;

        if new_layout.size() == 0 {
            self.capacity = new_capacity;
            return Ok(());
        }

        let grown = unsafe { self.alloc.grow(self.ptr, old_layout, new_layout) };
        let Ok(ptr) = grown else {
            return Err(ArrListErr::new(ErrorReason::OutOfMemory));
        };

        self.ptr = ptr.cast();
        self.capacity = new_capacity;
        return Ok(());
    }

    /// Hands the buffer back to the allocator.
    ///
    /// Must be called at most once, with the element layout the buffer was
    /// created with. Any live elements must already be dropped.
    pub(crate) unsafe fn release(&mut self, layout: Layout) {
        let Ok(array) = layout_array(layout, self.capacity.as_usize()) else {
            return;
        };
        if array.size() == 0 {
            return;
        }
        unsafe { self.alloc.deallocate(self.ptr, array) };
    }

    #[inline]
    pub(crate) const fn capacity(&self) -> L {
        return self.capacity;
    }

    #[inline]
    pub(crate) const fn get_ptr<T>(&self) -> *mut T {
        return self.ptr.as_ptr() as *mut T;
    }
}

const fn dangling(layout: Layout) -> NonNull<u8> {
    let ptr = layout.align() as *mut u8;
    return unsafe { NonNull::new_unchecked(ptr) };
}
