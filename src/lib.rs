//! # Array List
//!
//! The `arr_list` crate provides a `#[no_std]` array list: a contiguous, growable
//! buffer built directly on raw allocation where every operation that can fail
//! says so through a `Result` instead of panicking.
//!
//! `ArrList` supports indexed reads and writes, insertion and removal at any
//! position, bulk insertion and bulk popping that move the tail only once, and
//! slicing into caller owned storage. All arithmetic that could wrap is checked
//! before the list is touched, so a failed call leaves the list as it was.
//!
//! Growth is driven by the current length rather than the capacity alone:
//! the new capacity is `capacity + 3 * length / 2`. Capacity never shrinks.
//!
//! The integer type used for length, capacity and indices is a generic
//! parameter (`usize` by default). A smaller type keeps the list record small
//! and caps the list at that type's range.
//!
//! # Feature Flags
//! * `std_alloc` - Enables `Global`, a wrapper implementing `AltAllocator` on
//! top of the standard allocator APIs, and the `ArrList::create` constructor.
//!
//! * `alloc_api2` - Implements `AltAllocator` for every allocator implementing
//! the `allocator-api2` crate's `Allocator` trait.

#![no_std]

#[cfg(any(feature = "std_alloc", test))]
extern crate std;

pub mod alloc;
mod arr_list;
pub mod types;

pub use arr_list::ArrList;
