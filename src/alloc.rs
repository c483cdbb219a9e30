//! Allocator types and traits used by `ArrList`. The most important being
//! the `AltAllocator` trait, and the `AllocError` type.
//!
//! If built with the `std_alloc` feature, a wrapper called `Global` is also
//! provided. With the `alloc_api2` feature any `allocator_api2` allocator
//! can back an `ArrList` as well.

#[cfg(feature = "alloc_api2")]
mod alloc_api2;
mod alt_alloc;
#[cfg(any(feature = "std_alloc", test))]
mod std_alloc;

use core::error::Error;
use core::fmt;

pub use alt_alloc::AltAllocator;
#[cfg(any(feature = "std_alloc", test))]
pub use std_alloc::Global;

/// This indicates the allocator could not satisfy a request.
///
/// `ArrList` reports it to callers as `ErrorReason::OutOfMemory`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AllocError;

impl Error for AllocError {}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("A memory allocation error occurred.")
    }
}
