use core::ptr::NonNull;
use std::alloc;
use std::alloc::Layout;

use super::AllocError;
use super::AltAllocator;

/// A wrapper around the std global allocator APIs.
///
/// See:
/// <https://doc.rust-lang.org/std/alloc/struct.Global.html>
#[derive(Debug, Copy, Clone, Default)]
pub struct Global;

unsafe impl AltAllocator for Global {
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        // std::alloc::alloc() requires a non-zero size.
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
        if old_layout.size() == 0 {
            return self.allocate(new_layout);
        }
        if new_layout.size() < old_layout.size() || new_layout.align() != old_layout.align() {
            return Err(AllocError);
        }

        // realloc leaves the old block alone when it returns null.
        let new = unsafe { alloc::realloc(old_ptr.as_ptr(), old_layout, new_layout.size()) };
        let Some(new) = NonNull::new(new) else {
            return Err(AllocError);
        };
        return Ok(NonNull::slice_from_raw_parts(new, new_layout.size()));
    }
}
