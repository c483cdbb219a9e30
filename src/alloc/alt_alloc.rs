use core::alloc::Layout;
use core::ptr::NonNull;

use super::AllocError;

/// The rust allocator API is not stable yet, so `ArrList` takes its memory
/// from any type implementing this trait instead. It only asks for what an
/// array list needs: a first allocation, growing in place or by moving, and
/// releasing the block.
///
/// Implementations carry the same safety requirements as the allocator API:
/// <https://doc.rust-lang.org/std/alloc/trait.Allocator.html>
///
/// Tests implement this trait to make allocation fail on demand.
pub unsafe trait AltAllocator {
    /// Allocates a block of memory fitting `layout`.
    ///
    /// Returns `AllocError` if the memory cannot be provided.
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError>;

    /// Releases the block pointed at by `ptr`.
    ///
    /// `ptr` must come from this allocator and `layout` must be the layout
    /// the block currently has.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);

    /// Grows the block at `old_ptr` from `old_layout` to `new_layout`,
    /// which must not be smaller.
    ///
    /// On failure `old_ptr` is still valid and still holds its contents.
    /// On success only the returned pointer may be used.
    ///
    /// The default moves the contents into a fresh allocation.
    unsafe fn grow(
        &self,
        old_ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        let new = self.allocate(new_layout)?;
        let ptr = new.cast::<u8>();

        unsafe { ptr.copy_from_nonoverlapping(old_ptr, old_layout.size()) };
        unsafe { self.deallocate(old_ptr, old_layout) };
        return Ok(new);
    }
}
