use core::alloc::Layout;
use core::fmt;
use core::marker::PhantomData;
use core::mem;
use core::ptr;
use core::slice;

use super::inner::Inner;
use super::shift::Shift;
#[cfg(any(feature = "std_alloc", test))]
use crate::alloc::Global;
use crate::alloc::AltAllocator;
use crate::types::ArrListErr;
use crate::types::ArrListResult;
use crate::types::ErrorReason;
use crate::types::LengthType;

/// A contiguous, growable list of `T` backed by memory from `A`, with
/// its length, capacity and indices counted in `L`.
///
/// Every operation that can fail returns an `ArrListResult`, and all of its
/// checks run before the list is modified. Growth sets the capacity to
/// `capacity + 3 * length / 2`, or to what an insertion needs if that is
/// more. Capacity is never given back until the list is dropped.
pub struct ArrList<T, A: AltAllocator, L: LengthType = usize>
where
    usize: TryFrom<L>,
{
    inner: Inner<L, A>,
    _ph:   PhantomData<T>,
}

#[cfg(any(feature = "std_alloc", test))]
impl<T, L: LengthType> ArrList<T, Global, L>
where
    usize: TryFrom<L>,
{
    /// Creates an empty list with room for `capacity` elements, using the
    /// global allocator.
    pub fn create(capacity: L) -> ArrListResult<Self> {
        return Self::create_in(Global, capacity);
    }
}

impl<T, A: AltAllocator, L: LengthType> ArrList<T, A, L>
where
    usize: TryFrom<L>,
{
    const LAYOUT: Layout = Layout::new::<T>();

    /// Creates an empty list with room for `capacity` elements allocated
    /// from `alloc`.
    ///
    /// A zero capacity is rejected with `InvalidArgs`. A capacity whose byte
    /// size cannot be represented fails with `Overflow`, and a failing
    /// allocator with `OutOfMemory`.
    pub fn create_in(alloc: A, capacity: L) -> ArrListResult<Self> {
        if capacity == L::ZERO_VALUE {
            return Err(ArrListErr::new(ErrorReason::InvalidArgs));
        }
        let inner = Inner::initial_alloc(alloc, capacity, Self::LAYOUT)?;
        return Ok(Self {
            inner: inner,
            _ph:   PhantomData,
        });
    }

    /// Drops every element and releases the buffer.
    pub fn destroy(self) {
        drop(self);
    }

    #[inline]
    pub const fn len(&self) -> L {
        return self.inner.length;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.inner.length == L::ZERO_VALUE;
    }

    #[inline]
    pub const fn capacity(&self) -> L {
        return self.inner.capacity();
    }

    pub fn get(&self, index: L) -> ArrListResult<&T> {
        self.check_index(index)?;
        return Ok(unsafe { &*self.as_ptr().add(index.as_usize()) });
    }

    pub fn get_mut(&mut self, index: L) -> ArrListResult<&mut T> {
        self.check_index(index)?;
        return Ok(unsafe { &mut *self.as_mut_ptr().add(index.as_usize()) });
    }

    /// Replaces the element at `index` and hands back the one it replaced.
    pub fn set(&mut self, index: L, value: T) -> ArrListResult<T> {
        let slot = self.get_mut(index)?;
        return Ok(mem::replace(slot, value));
    }

    /// Clones `out.len()` elements starting at `start` into `out`.
    ///
    /// Fails with `IndexTooBig` if `start` is not a valid index and with
    /// `InvalidArgs` if the run reaches past the end of the list.
    pub fn slice(&self, start: L, out: &mut [T]) -> ArrListResult<()>
    where
        T: Clone,
    {
        self.check_range(start, out.len())?;
        let run = &self.as_slice()[start.as_usize()..start.as_usize() + out.len()];
        out.clone_from_slice(run);
        return Ok(());
    }

    /// Inserts `value` at `index`, moving everything after it one slot to the
    /// right. An index at or past the end appends.
    pub fn insert(&mut self, index: L, value: T) -> ArrListResult<()> {
        let index = index.min(self.inner.length);
        self.inner.reserve(L::ONE_VALUE, Self::LAYOUT)?;

        let plan = Shift::right(self.inner.length, self.capacity(), index, L::ONE_VALUE)?;
        unsafe {
            plan.apply(self.as_mut_ptr());
            ptr::write(self.as_mut_ptr().add(index.as_usize()), value);
        }
        self.inner.length = plan.new_len;
        return Ok(());
    }

    /// Adds `value` after the last element.
    #[inline]
    pub fn append(&mut self, value: T) -> ArrListResult<()> {
        return self.insert(self.inner.length, value);
    }

    /// Inserts clones of `values` starting at `index`. The tail is moved
    /// once and the buffer grows at most once, however many values there are.
    /// An index at or past the end appends.
    pub fn insert_multi(&mut self, index: L, values: &[T]) -> ArrListResult<()>
    where
        T: Clone,
    {
        if values.is_empty() {
            return Ok(());
        }
        let index = index.min(self.inner.length);
        let Some(count) = L::from_usize(values.len()) else {
            return Err(ArrListErr::new(ErrorReason::Overflow));
        };
        self.inner.reserve(count, Self::LAYOUT)?;

        let plan = Shift::right(self.inner.length, self.capacity(), index, count)?;
        let base = self.as_mut_ptr();
        // Until the gap is filled only the head is live, so the moved tail
        // leaks rather than double drops if a clone panics.
        self.inner.length = index;
        unsafe {
            plan.apply(base);
            let gap = base.add(index.as_usize());
            for (k, value) in values.iter().enumerate() {
                ptr::write(gap.add(k), value.clone());
            }
        }
        self.inner.length = plan.new_len;
        return Ok(());
    }

    /// Removes and returns the element at `index`, moving everything after
    /// it one slot to the left. An index at or past the end pops the last
    /// element.
    pub fn pop(&mut self, index: L) -> ArrListResult<T> {
        if self.is_empty() {
            return Err(ArrListErr::new(ErrorReason::PopEmptyList));
        }
        let index = index.min(self.inner.length - L::ONE_VALUE);
        let plan = Shift::left(self.inner.length, index + L::ONE_VALUE, L::ONE_VALUE)?;

        let value = unsafe { ptr::read(self.as_ptr().add(index.as_usize())) };
        unsafe { plan.apply(self.as_mut_ptr()) };
        self.inner.length = plan.new_len;
        return Ok(value);
    }

    /// Moves `out.len()` elements starting at `index` into `out` and closes
    /// the gap with a single move of the tail. What `out` held before is
    /// dropped.
    ///
    /// Range errors match `slice`.
    pub fn pop_multi(&mut self, index: L, out: &mut [T]) -> ArrListResult<()> {
        let end = self.check_range(index, out.len())?;
        let plan = Shift::left(self.inner.length, end, end - index)?;

        let base = self.as_mut_ptr();
        // Assigning into `out` drops its old values. Should one of those
        // drops panic, the run and the tail are leaked instead.
        self.inner.length = index;
        unsafe {
            let run = base.add(index.as_usize());
            for (k, slot) in out.iter_mut().enumerate() {
                *slot = ptr::read(run.add(k));
            }
        }

        unsafe { plan.apply(base) };
        self.inner.length = plan.new_len;
        return Ok(());
    }

    /// Removes the element at `index` and drops it. Index handling matches
    /// `pop`.
    pub fn remove(&mut self, index: L) -> ArrListResult<()> {
        return self.remove_with(index, drop);
    }

    /// Removes the element at `index` and passes it to `callback`.
    pub fn remove_with<F>(&mut self, index: L, callback: F) -> ArrListResult<()>
    where
        F: FnOnce(T),
    {
        let value = self.pop(index)?;
        callback(value);
        return Ok(());
    }

    /// Drops every element. The capacity stays as it is.
    pub fn clear(&mut self) -> ArrListResult<()> {
        let len = self.inner.length;
        let plan = Shift::left(len, len, len)?;
        self.inner.length = plan.new_len;

        let live = ptr::slice_from_raw_parts_mut(self.as_mut_ptr(), len.as_usize());
        unsafe { ptr::drop_in_place(live) };
        return Ok(());
    }

    /// Passes every element, in index order, to `callback` and leaves the list
    /// empty. The capacity stays as it is.
    ///
    /// If `callback` panics the elements it has not seen yet are leaked.
    pub fn clear_with<F>(&mut self, mut callback: F) -> ArrListResult<()>
    where
        F: FnMut(T),
    {
        let len = self.inner.length;
        let plan = Shift::left(len, len, len)?;
        self.inner.length = plan.new_len;

        let base = self.as_ptr();
        for k in 0..len.as_usize() {
            callback(unsafe { ptr::read(base.add(k)) });
        }
        return Ok(());
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        return self.as_slice().iter();
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.as_ptr(), self.inner.length.as_usize()) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.inner.length.as_usize()) }
    }

    #[inline]
    const fn as_ptr(&self) -> *const T {
        return self.inner.get_ptr();
    }

    #[inline]
    const fn as_mut_ptr(&mut self) -> *mut T {
        return self.inner.get_ptr();
    }

    #[inline]
    fn check_index(&self, index: L) -> ArrListResult<()> {
        if index >= self.inner.length {
            return Err(ArrListErr::new(ErrorReason::IndexTooBig));
        }
        return Ok(());
    }

    /// Validates the run `[start, start + count)` and returns its end.
    fn check_range(&self, start: L, count: usize) -> ArrListResult<L> {
        self.check_index(start)?;
        let Some(count) = L::from_usize(count) else {
            return Err(ArrListErr::new(ErrorReason::InvalidArgs));
        };
        let Some(end) = start.checked_add(count) else {
            return Err(ArrListErr::new(ErrorReason::Overflow));
        };
        if end > self.inner.length {
            return Err(ArrListErr::new(ErrorReason::InvalidArgs));
        }
        return Ok(end);
    }
}

impl<T, A: AltAllocator, L: LengthType> Drop for ArrList<T, A, L>
where
    usize: TryFrom<L>,
{
    fn drop(&mut self) {
        unsafe {
            ptr::drop_in_place(self.as_mut_slice());
            self.inner.release(Self::LAYOUT);
        }
    }
}

impl<T: fmt::Debug, A: AltAllocator, L: LengthType> fmt::Debug for ArrList<T, A, L>
where
    usize: TryFrom<L>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T, A: AltAllocator, L: LengthType> IntoIterator for &'a ArrList<T, A, L>
where
    usize: TryFrom<L>,
{
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        return self.iter();
    }
}
