use std::alloc::{self, Layout};
use std::cmp::max;
use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ptr::{self, NonNull};

use crate::error::DynVecError;

/// A growable contiguous buffer with doubling growth and halving shrink.
///
/// Invariants: `len <= capacity`; the buffer pointer is null exactly while
/// no storage has been allocated; slots `[0, len)` hold live values and
/// slots `[len, capacity)` are uninitialized.
pub struct DynVec<T> {
    ptr: *mut T,
    len: usize,
    cap: usize,
    _marker: PhantomData<T>,
}

unsafe impl<T: Send> Send for DynVec<T> {}
unsafe impl<T: Sync> Sync for DynVec<T> {}

impl<T> DynVec<T> {
    /// Creates an empty vector. Does not allocate.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ptr: ptr::null_mut(),
            len: 0,
            cap: 0,
            _marker: PhantomData,
        }
    }

    /// Creates an empty vector with `capacity` slots recorded.
    ///
    /// The storage itself is deferred: nothing is allocated until the
    /// first write, which then allocates exactly the recorded capacity.
    #[must_use]
    pub const fn with_capacity(capacity: usize) -> Self {
        Self {
            ptr: ptr::null_mut(),
            len: 0,
            cap: capacity,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocates a buffer of `cap` slots. Zero-sized element types never
    /// touch the allocator and use a dangling pointer instead.
    ///
    /// Allocation failure is fatal; it is not part of the recoverable
    /// error set.
    #[allow(clippy::expect_used)]
    fn allocate(cap: usize) -> *mut T {
        if mem::size_of::<T>() == 0 {
            return NonNull::dangling().as_ptr();
        }
        let layout = Layout::array::<T>(cap).expect("capacity overflows the allocatable size");
        let ptr = unsafe { alloc::alloc(layout) }.cast::<T>();
        if ptr.is_null() {
            alloc::handle_alloc_error(layout);
        }
        ptr
    }

    #[allow(clippy::expect_used)]
    fn deallocate(ptr: *mut T, cap: usize) {
        if cap == 0 || mem::size_of::<T>() == 0 {
            return;
        }
        let layout = Layout::array::<T>(cap).expect("layout was valid when allocated");
        unsafe { alloc::dealloc(ptr.cast::<u8>(), layout) };
    }

    /// Moves the vector to a fresh buffer of `new_cap` slots, cloning the
    /// live elements across in order, then releases the old buffer.
    fn reallocate(&mut self, new_cap: usize)
    where
        T: Clone,
    {
        debug_assert!(self.len <= new_cap);
        let new_ptr = Self::allocate(new_cap);
        unsafe {
            for i in 0..self.len {
                ptr::write(new_ptr.add(i), (*self.ptr.add(i)).clone());
            }
            if !self.ptr.is_null() {
                for i in 0..self.len {
                    ptr::drop_in_place(self.ptr.add(i));
                }
                Self::deallocate(self.ptr, self.cap);
            }
        }
        self.ptr = new_ptr;
        self.cap = new_cap;
    }

    /// Appends an element, growing the capacity to `max(1, capacity * 2)`
    /// when the buffer is full. A vector created with `with_capacity`
    /// allocates its recorded capacity on the first call.
    pub fn push(&mut self, value: T)
    where
        T: Clone,
    {
        if self.ptr.is_null() && self.cap > 0 {
            self.ptr = Self::allocate(self.cap);
        } else if self.len == self.cap {
            self.reallocate(max(1, self.cap * 2));
        }
        unsafe { ptr::write(self.ptr.add(self.len), value) };
        self.len += 1;
    }

    /// Removes and returns the last element.
    ///
    /// After removal the capacity is halved once the length drops strictly
    /// below half of it (and the halved capacity is at least 1).
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::EmptyVector` if the vector is empty.
    pub fn pop(&mut self) -> Result<T, DynVecError>
    where
        T: Clone,
    {
        if self.len == 0 {
            return Err(DynVecError::EmptyVector);
        }
        self.len -= 1;
        let value = unsafe { ptr::read(self.ptr.add(self.len)) };
        let half = self.cap / 2;
        if half >= 1 && self.len < half {
            self.reallocate(half);
        }
        Ok(value)
    }

    /// Bounds-checked access.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::IndexOutOfBounds` if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, DynVecError> {
        if index >= self.len {
            return Err(DynVecError::IndexOutOfBounds {
                index,
                length: self.len,
            });
        }
        Ok(unsafe { &*self.ptr.add(index) })
    }

    /// Bounds-checked mutable access.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::IndexOutOfBounds` if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, DynVecError> {
        if index >= self.len {
            return Err(DynVecError::IndexOutOfBounds {
                index,
                length: self.len,
            });
        }
        Ok(unsafe { &mut *self.ptr.add(index) })
    }

    /// Unchecked access.
    ///
    /// # Safety
    ///
    /// The caller must guarantee `index < len()`.
    #[must_use]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        unsafe { &*self.ptr.add(index) }
    }

    /// Unchecked mutable access.
    ///
    /// # Safety
    ///
    /// The caller must guarantee `index < len()`.
    #[must_use]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        unsafe { &mut *self.ptr.add(index) }
    }

    /// Drops all elements and releases the backing buffer. The capacity
    /// becomes 0; this is not a "keep capacity" clear.
    pub fn clear(&mut self) {
        if !self.ptr.is_null() {
            unsafe {
                for i in 0..self.len {
                    ptr::drop_in_place(self.ptr.add(i));
                }
            }
            Self::deallocate(self.ptr, self.cap);
            self.ptr = ptr::null_mut();
        }
        self.len = 0;
        self.cap = 0;
    }

    /// Grows the buffer to hold at least `new_capacity` slots, preserving
    /// the elements in order. No-op when the capacity is already
    /// sufficient. Unlike `with_capacity`, this allocates eagerly.
    pub fn reserve(&mut self, new_capacity: usize)
    where
        T: Clone,
    {
        if new_capacity > self.cap {
            self.reallocate(new_capacity);
        }
    }
}

impl<T> Drop for DynVec<T> {
    fn drop(&mut self) {
        if !self.ptr.is_null() {
            unsafe {
                for i in 0..self.len {
                    ptr::drop_in_place(self.ptr.add(i));
                }
            }
            Self::deallocate(self.ptr, self.cap);
        }
    }
}

impl<T> Default for DynVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynVec<T> {
    /// Deep copy: clones the live elements into a fresh exact-length
    /// buffer. The clone's capacity equals its length.
    fn clone(&self) -> Self {
        let mut out = Self::new();
        if self.len > 0 {
            out.ptr = Self::allocate(self.len);
            out.cap = self.len;
            unsafe {
                for i in 0..self.len {
                    ptr::write(out.ptr.add(i), (*self.ptr.add(i)).clone());
                }
            }
            out.len = self.len;
        }
        out
    }
}

impl<T: fmt::Debug> fmt::Debug for DynVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for i in 0..self.len {
            list.entry(unsafe { &*self.ptr.add(i) });
        }
        list.finish()
    }
}
