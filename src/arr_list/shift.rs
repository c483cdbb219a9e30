//! Block moves that open and close gaps in the buffer.
//!
//! Each shift is split in two. Planning runs every overflow and bounds
//! check against the current length and capacity and touches nothing.
//! Applying only moves memory. Callers plan first, so an operation that
//! fails has not read, moved or dropped a single element.

use core::ptr;

use crate::types::ArrListErr;
use crate::types::ArrListResult;
use crate::types::ErrorReason;
use crate::types::LengthType;

/// A checked move of `count` elements from slot `src` to slot `dst`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Shift<L> {
    pub(crate) src:     usize,
    pub(crate) dst:     usize,
    pub(crate) count:   usize,
    pub(crate) new_len: L,
}

impl<L: LengthType> Shift<L>
where
    usize: TryFrom<L>,
{
    /// Plans opening a gap of `move_by` slots at `start_i`.
    ///
    /// `[start_i, length)` moves to `[start_i + move_by, length + move_by)`.
    pub(crate) fn right(length: L, capacity: L, start_i: L, move_by: L) -> ArrListResult<Self> {
        let Some(new_len) = length.checked_add(move_by) else {
            return Err(ArrListErr::new(ErrorReason::Overflow));
        };
        // The buffer must have been grown first.
        if new_len > capacity {
            return Err(ArrListErr::new(ErrorReason::InvalidArgs));
        }
        let Some(trailing) = length.checked_sub(start_i) else {
            return Err(ArrListErr::new(ErrorReason::Underflow));
        };

        return Ok(Self {
            src:     start_i.as_usize(),
            dst:     (start_i + move_by).as_usize(),
            count:   trailing.as_usize(),
            new_len: new_len,
        });
    }

    /// Plans closing the `move_by` slots right before `start_i`.
    ///
    /// `move_by` is clamped to `start_i` so nothing before the first slot is
    /// ever read. `[start_i, length)` moves to
    /// `[start_i - move_by, length - move_by)`.
    pub(crate) fn left(length: L, start_i: L, move_by: L) -> ArrListResult<Self> {
        let move_by = move_by.min(start_i);

        let Some(new_len) = length.checked_sub(move_by) else {
            return Err(ArrListErr::new(ErrorReason::Underflow));
        };
        let Some(trailing) = length.checked_sub(start_i) else {
            return Err(ArrListErr::new(ErrorReason::Underflow));
        };

        // Removing the tail itself leaves nothing to move.
        return Ok(Self {
            src:     start_i.as_usize(),
            dst:     (start_i - move_by).as_usize(),
            count:   trailing.as_usize(),
            new_len: new_len,
        });
    }

    /// Moves the planned run inside the buffer at `base`.
    ///
    /// The plan must come from the buffer's current length and capacity.
    /// Slots the run lands on that are not part of the run itself are
    /// overwritten without being dropped, so their values must have been
    /// moved out already.
    pub(crate) unsafe fn apply<T>(self, base: *mut T) {
        if self.count == 0 || self.src == self.dst {
            return;
        }
        unsafe {
            let src = base.add(self.src);
            let dst = base.add(self.dst);
            // memmove semantics, overlap in either direction is fine.
            ptr::copy(src, dst, self.count);
        }
    }
}
