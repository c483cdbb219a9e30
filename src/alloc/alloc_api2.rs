use core::alloc::Layout;
use core::ptr::NonNull;

use allocator_api2::alloc::Allocator as Alloc2;

use super::AllocError;
use super::AltAllocator;

// Every `allocator_api2` allocator can back an `ArrList`. Its own error type
// is collapsed into `AllocError`.
unsafe impl<A: Alloc2> AltAllocator for A {
    #[inline]
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        return <Self as Alloc2>::allocate(self, layout).map_err(|_| AllocError);
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { <Self as Alloc2>::deallocate(self, ptr, layout) };
    }

    #[inline]
    unsafe fn grow(
        &self,
        old_ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        let grown = unsafe { <Self as Alloc2>::grow(self, old_ptr, old_layout, new_layout) };
        return grown.map_err(|_| AllocError);
    }
}

#[cfg(test)]
mod tests {
    use allocator_api2::alloc::Global as Api2Global;

    use crate::ArrList;
    use crate::types::ErrorReason;

    #[test]
    fn list_over_api2_global() {
        let mut list = ArrList::<u64, Api2Global>::create_in(Api2Global, 2).unwrap();
        for v in 0..8u64 {
            list.append(v * 3).unwrap();
        }
        assert_eq!(list.len(), 8);
        assert!(list.capacity() >= 8);
        assert_eq!(*list.get(7).unwrap(), 21);
        assert_eq!(list.pop(0).unwrap(), 0);

        let err = list.get(7).unwrap_err();
        assert_eq!(err.reason(), ErrorReason::IndexTooBig);
    }
}
