//! `DynVec`: a growable contiguous buffer with manual storage management.
//!
//! `DynVec<T>` owns a heap-allocated buffer and tracks `len` and `capacity`
//! separately. Appending doubles the capacity when the buffer is full
//! (`max(1, capacity * 2)`), and removing the last element halves the
//! capacity once the length drops strictly below half of it. `clear`
//! releases the backing buffer entirely instead of keeping the capacity.
//!
//! Element access comes in two flavors:
//! - `at` / `at_mut`: bounds-checked, returning `Result`.
//! - `get_unchecked` / `get_unchecked_mut`: `unsafe`, the caller
//!   guarantees the index is in bounds.
//!
//! Reallocation transfers elements by cloning, so every method that can
//! resize the buffer requires `T: Clone`.
//!
//! ```
//! use dynvec::DynVec;
//!
//! let mut v = DynVec::new();
//! v.push(10);
//! v.push(20);
//! v.push(30);
//!
//! assert_eq!(v.len(), 3);
//! assert_eq!(v.capacity(), 4); // grew 1 -> 2 -> 4
//! assert_eq!(*v.at(1).unwrap(), 20);
//!
//! assert_eq!(v.pop().unwrap(), 30);
//! assert!(v.at(2).is_err());
//! ```
//!
//! # Deferred initial capacity
//!
//! `with_capacity(n)` records the requested capacity but defers the
//! allocation until the first write:
//!
//! ```
//! use dynvec::DynVec;
//!
//! let mut v = DynVec::with_capacity(5);
//! assert_eq!(v.capacity(), 5);
//! assert_eq!(v.len(), 0);
//!
//! v.push(1u32); // allocates the 5 recorded slots here
//! assert_eq!(v.capacity(), 5);
//! ```

mod core;
mod error;

pub use crate::core::DynVec;
pub use crate::error::DynVecError;
