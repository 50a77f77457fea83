// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::convert::Infallible;
use core::mem;
use core::ops::{Bound, RangeBounds};
use core::ptr;

use rampart_alloc::{Allocator, Global};

use crate::error::{ConstructError, VectorError};
use crate::lifecycle::{ConstructGuard, GapGuard, TruncateGuard, destroy_range};
use crate::raw::RawBuf;

#[inline]
fn into_ok<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// A contiguous, growable sequence whose storage comes from an [`Allocator`].
///
/// Slots `[0, len)` hold live values, slots `[len, capacity)` are raw. Every
/// allocation, construction, destruction, and relocation is routed through
/// the allocator `A`.
///
/// Operations that can fail return a `Result`. Single-element operations,
/// growth, insertion, and resizing leave the vector exactly as it was when
/// they fail; the `assign_*` family leaves it empty.
///
/// # Example
///
/// ```rust
/// use rampart_vec::{Vector, VectorError};
///
/// fn example() -> Result<(), VectorError> {
///     let mut vector = Vector::new();
///
///     for i in 1..=5 {
///         vector.push(i)?;
///     }
///
///     vector.insert(2, 99)?;
///     vector.erase_range(0..2)?;
///
///     assert_eq!(vector, [99, 3, 4, 5]);
///     assert_eq!(vector.capacity(), 8);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct Vector<T, A: Allocator = Global> {
    pub(crate) buf: RawBuf<T, A>,
    pub(crate) len: usize,
}

impl<T> Vector<T, Global> {
    /// Creates an empty vector. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self::new_in(Global)
    }

    /// Creates an empty vector with room for exactly `n` elements.
    ///
    /// # Errors
    ///
    /// [`VectorError::Length`] if `n` exceeds `max_size`, or
    /// [`VectorError::Alloc`] if the allocation fails.
    pub fn with_capacity(n: usize) -> Result<Self, VectorError> {
        Self::with_capacity_in(n, Global)
    }

    /// Creates a vector of `n` default values.
    pub fn with_default(n: usize) -> Result<Self, VectorError>
    where
        T: Default,
    {
        Self::with_default_in(n, Global)
    }

    /// Creates a vector of `n` clones of `value`.
    pub fn from_elem(value: T, n: usize) -> Result<Self, VectorError>
    where
        T: Clone,
    {
        Self::from_elem_in(value, n, Global)
    }

    /// Creates a vector holding clones of `src`, in order.
    pub fn from_slice(src: &[T]) -> Result<Self, VectorError>
    where
        T: Clone,
    {
        Self::from_slice_in(src, Global)
    }
}

impl<T, A: Allocator> Vector<T, A> {
    /// Creates an empty vector backed by `alloc`. Does not allocate.
    #[inline]
    pub const fn new_in(alloc: A) -> Self {
        Self {
            buf: RawBuf::new_in(alloc),
            len: 0,
        }
    }

    /// Creates an empty vector backed by `alloc` with room for exactly `n`
    /// elements.
    pub fn with_capacity_in(n: usize, alloc: A) -> Result<Self, VectorError> {
        Ok(Self {
            buf: RawBuf::allocate_in(n, alloc)?,
            len: 0,
        })
    }

    /// Creates a vector of `n` default values backed by `alloc`.
    pub fn with_default_in(n: usize, alloc: A) -> Result<Self, VectorError>
    where
        T: Default,
    {
        let mut vector = Self::with_capacity_in(n, alloc)?;
        into_ok(vector.construct_tail(n, |_| Ok(T::default())));

        Ok(vector)
    }

    /// Creates a vector of `n` clones of `value` backed by `alloc`.
    pub fn from_elem_in(value: T, n: usize, alloc: A) -> Result<Self, VectorError>
    where
        T: Clone,
    {
        let mut vector = Self::with_capacity_in(n, alloc)?;
        into_ok(vector.construct_tail(n, |_| Ok(value.clone())));

        Ok(vector)
    }

    /// Creates a vector holding clones of `src` backed by `alloc`.
    pub fn from_slice_in(src: &[T], alloc: A) -> Result<Self, VectorError>
    where
        T: Clone,
    {
        let mut vector = Self::with_capacity_in(src.len(), alloc)?;
        into_ok(vector.construct_tail(src.len(), |index| Ok(src[index].clone())));

        Ok(vector)
    }

    /// Collects `iter` into a vector backed by `alloc`.
    ///
    /// Elements already collected are destroyed if the iterator panics or
    /// an allocation fails.
    pub fn from_iter_in<I>(iter: I, alloc: A) -> Result<Self, VectorError>
    where
        I: IntoIterator<Item = T>,
    {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();

        let mut vector = Self::with_capacity_in(lower, alloc)?;
        for item in iter {
            vector.push(item)?;
        }

        Ok(vector)
    }

    /// Clones every element into a new vector backed by `alloc`.
    pub fn clone_in<B>(&self, alloc: B) -> Result<Vector<T, B>, VectorError>
    where
        T: Clone,
        B: Allocator,
    {
        Vector::from_slice_in(self.as_slice(), alloc)
    }

    /// Moves every element into a new vector backed by `alloc`.
    ///
    /// On success `self` is left empty and owns no storage. On failure
    /// `self` is unchanged.
    pub fn move_in<B>(&mut self, alloc: B) -> Result<Vector<T, B>, VectorError>
    where
        B: Allocator,
    {
        let mut target = Vector::with_capacity_in(self.len, alloc)?;
        let count = mem::replace(&mut self.len, 0);

        for index in 0..count {
            // SAFETY: slot `index` was live in `self` and is read exactly once;
            // `target` has `count` raw slots.
            unsafe {
                let value = ptr::read(self.buf.ptr_at(index).as_ptr());
                target
                    .buf
                    .allocator()
                    .construct(target.buf.ptr_at(index), value);
            }
        }
        target.len = count;

        self.reallocate_exact(0)?;

        Ok(target)
    }

    // =========================================================================
    // Capacity
    // =========================================================================

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of slots in the current block.
    ///
    /// Zero-sized element types never need storage and report `usize::MAX`.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Largest length this vector can ever reach, as reported by the
    /// allocator.
    #[inline]
    pub fn max_size(&self) -> usize {
        self.buf.allocator().max_size::<T>()
    }

    /// Returns `true` if the vector holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The allocator backing this vector.
    #[inline]
    pub fn allocator(&self) -> &A {
        self.buf.allocator()
    }

    /// Ensures room for at least `n` elements in total.
    ///
    /// Growth is geometric: the new capacity is at least twice the old one.
    /// Does nothing when `capacity() >= n`.
    ///
    /// # Errors
    ///
    /// [`VectorError::Length`] if `n > max_size()`, checked before anything
    /// else. [`VectorError::Alloc`] if the new block cannot be obtained; the
    /// vector is unchanged in that case.
    pub fn reserve(&mut self, n: usize) -> Result<(), VectorError> {
        let max = self.max_size();

        if n > max {
            return Err(VectorError::Length { requested: n, max });
        }

        self.ensure_capacity(n)
    }

    /// Like [`reserve`](Self::reserve), but grows to exactly `n` slots.
    pub fn reserve_exact(&mut self, n: usize) -> Result<(), VectorError> {
        let max = self.max_size();

        if n > max {
            return Err(VectorError::Length { requested: n, max });
        }

        if self.capacity() >= n {
            return Ok(());
        }

        self.reallocate_exact(n)
    }

    /// Reallocates to exactly `len()` slots. An empty vector releases its
    /// block entirely.
    pub fn shrink_to_fit(&mut self) -> Result<(), VectorError> {
        if RawBuf::<T, A>::IS_ZST || self.capacity() == self.len {
            return Ok(());
        }

        log::trace!("shrinking capacity {} to {}", self.capacity(), self.len);

        self.reallocate_exact(self.len)
    }

    // =========================================================================
    // Resizing
    // =========================================================================

    /// Resizes to `n` elements, filling new slots with clones of `value`.
    ///
    /// Shrinking destroys trailing elements and never reallocates. On
    /// failure the vector keeps its original elements.
    pub fn resize(&mut self, n: usize, value: T) -> Result<(), VectorError>
    where
        T: Clone,
    {
        self.try_resize_with(n, || Ok::<_, Infallible>(value.clone()))
            .map_err(VectorError::from)
    }

    /// Resizes to `n` elements, filling new slots with `T::default()`.
    pub fn resize_default(&mut self, n: usize) -> Result<(), VectorError>
    where
        T: Default,
    {
        self.try_resize_with(n, || Ok::<_, Infallible>(T::default()))
            .map_err(VectorError::from)
    }

    /// Resizes to `n` elements, filling new slots with values from `f`.
    pub fn resize_with<F>(&mut self, n: usize, mut f: F) -> Result<(), VectorError>
    where
        F: FnMut() -> T,
    {
        self.try_resize_with(n, || Ok::<_, Infallible>(f()))
            .map_err(VectorError::from)
    }

    /// Resizes to `n` elements, filling new slots with values from a
    /// fallible source.
    ///
    /// If `f` fails, the elements built by this call are destroyed and the
    /// vector keeps its original length.
    pub fn try_resize_with<E, F>(&mut self, n: usize, mut f: F) -> Result<(), ConstructError<E>>
    where
        F: FnMut() -> Result<T, E>,
    {
        if n <= self.len {
            self.truncate(n);
            return Ok(());
        }

        self.reserve(n)?;
        self.construct_tail(n - self.len, |_| f())
            .map_err(ConstructError::Element)
    }

    // =========================================================================
    // Assignment
    // =========================================================================

    /// Replaces the contents with `n` clones of `value`.
    ///
    /// Destructive: the old elements are destroyed first, and the vector is
    /// left empty if the new ones cannot be built.
    pub fn assign_fill(&mut self, n: usize, value: T) -> Result<(), VectorError>
    where
        T: Clone,
    {
        self.try_assign_with(n, || Ok::<_, Infallible>(value.clone()))
            .map_err(VectorError::from)
    }

    /// Replaces the contents with clones of `src`.
    pub fn assign_slice(&mut self, src: &[T]) -> Result<(), VectorError>
    where
        T: Clone,
    {
        self.clear();
        self.reserve(src.len())?;

        into_ok(self.construct_tail(src.len(), |index| Ok(src[index].clone())));
        Ok(())
    }

    /// Replaces the contents with the items of `iter`.
    pub fn assign_iter<I>(&mut self, iter: I) -> Result<(), VectorError>
    where
        I: IntoIterator<Item = T>,
    {
        self.clear();

        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0)?;

        let mut guard = TruncateGuard::new(self, 0);
        for item in iter {
            guard.vector().push(item)?;
        }
        guard.disarm();

        Ok(())
    }

    /// Replaces the contents with `n` values from a fallible source.
    pub fn try_assign_with<E, F>(&mut self, n: usize, mut f: F) -> Result<(), ConstructError<E>>
    where
        F: FnMut() -> Result<T, E>,
    {
        self.clear();
        self.reserve(n)?;

        self.construct_tail(n, |_| f())
            .map_err(ConstructError::Element)
    }

    // =========================================================================
    // Back insertion and removal
    // =========================================================================

    /// Appends `value`.
    ///
    /// Grows by [`GROWTH_FACTOR`](crate::GROWTH_FACTOR) when full. On failure
    /// the vector is unchanged and `value` is dropped.
    pub fn push(&mut self, value: T) -> Result<(), VectorError> {
        self.try_push_with(|| Ok::<_, Infallible>(value))
            .map_err(VectorError::from)
    }

    /// Appends the value returned by `f`, built after room has been made.
    pub fn push_with<F>(&mut self, f: F) -> Result<(), VectorError>
    where
        F: FnOnce() -> T,
    {
        self.try_push_with(|| Ok::<_, Infallible>(f()))
            .map_err(VectorError::from)
    }

    /// Appends the value returned by a fallible source.
    ///
    /// If `f` fails, the length is unchanged.
    pub fn try_push_with<E, F>(&mut self, f: F) -> Result<(), ConstructError<E>>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let required = self.required(1)?;
        self.ensure_capacity(required)?;

        let value = f().map_err(ConstructError::Element)?;

        // SAFETY: `len < capacity`, so slot `len` is raw and in bounds.
        unsafe {
            let slot = self.buf.ptr_at(self.len);
            self.buf.allocator().construct(slot, value);
        }
        self.len += 1;

        Ok(())
    }

    /// Moves the last element out, or returns `None` if empty.
    ///
    /// The value leaves the vector's custody, so the allocator does not see
    /// its destruction. Use [`pop_back`](Self::pop_back) to destroy in place.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;

        // SAFETY: slot `len` was live and is no longer counted.
        Some(unsafe { ptr::read(self.buf.ptr_at(self.len).as_ptr()) })
    }

    /// Destroys the last element in place. Returns `false` if empty.
    pub fn pop_back(&mut self) -> bool {
        if self.len == 0 {
            return false;
        }

        self.len -= 1;

        // SAFETY: slot `len` was live and is no longer counted.
        unsafe {
            let slot = self.buf.ptr_at(self.len);
            self.buf.allocator().destroy(slot);
        }

        true
    }

    // =========================================================================
    // Insertion
    // =========================================================================

    /// Shifts `[index, len)` toward the tail by `n` slots and returns a guard
    /// owning the gap.
    fn open_gap(&mut self, index: usize, n: usize) -> Result<GapGuard<'_, T, A>, VectorError> {
        let len = self.len;

        if index > len {
            return Err(VectorError::OutOfRange { index, len });
        }

        let required = self.required(n)?;
        self.ensure_capacity(required)?;

        let tail = len - index;

        // SAFETY: `index <= len <= capacity`, and `len + n <= capacity` keeps
        // the shifted suffix inside the block.
        let hole = unsafe {
            let hole = self.buf.ptr_at(index);
            ptr::copy(hole.as_ptr(), hole.add(n).as_ptr(), tail);
            hole
        };

        self.len = index;

        Ok(GapGuard::new(
            self.buf.allocator(),
            &mut self.len,
            hole,
            n,
            tail,
        ))
    }

    /// Inserts `value` before position `index`.
    ///
    /// # Errors
    ///
    /// [`VectorError::OutOfRange`] if `index > len()`. On any failure the
    /// vector is unchanged.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), VectorError> {
        self.try_insert_with(index, || Ok::<_, Infallible>(value))
            .map_err(VectorError::from)
    }

    /// Inserts the value returned by `f` before position `index`.
    pub fn insert_with<F>(&mut self, index: usize, f: F) -> Result<(), VectorError>
    where
        F: FnOnce() -> T,
    {
        self.try_insert_with(index, || Ok::<_, Infallible>(f()))
            .map_err(VectorError::from)
    }

    /// Inserts the value returned by a fallible source before `index`.
    ///
    /// The source runs after the suffix has been shifted. If it fails, the
    /// suffix is shifted back and the vector is unchanged.
    pub fn try_insert_with<E, F>(&mut self, index: usize, f: F) -> Result<(), ConstructError<E>>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let mut gap = self.open_gap(index, 1)?;
        let value = f().map_err(ConstructError::Element)?;

        // SAFETY: the gap has one raw slot.
        unsafe { gap.construct(value) };
        gap.close();

        Ok(())
    }

    /// Inserts `n` clones of `value` before position `index`.
    pub fn insert_n(&mut self, index: usize, n: usize, value: T) -> Result<(), VectorError>
    where
        T: Clone,
    {
        let mut gap = self.open_gap(index, n)?;

        for _ in 0..n {
            // SAFETY: exactly `n` raw slots are filled.
            unsafe { gap.construct(value.clone()) };
        }
        gap.close();

        Ok(())
    }

    /// Inserts clones of `src` before position `index`.
    pub fn insert_slice(&mut self, index: usize, src: &[T]) -> Result<(), VectorError>
    where
        T: Clone,
    {
        let mut gap = self.open_gap(index, src.len())?;

        for value in src {
            // SAFETY: exactly `src.len()` raw slots are filled.
            unsafe { gap.construct(value.clone()) };
        }
        gap.close();

        Ok(())
    }

    /// Inserts the items of `iter` before position `index`.
    ///
    /// Items are appended first and then rotated into place, so iterators of
    /// unknown length need no up-front count.
    pub fn insert_iter<I>(&mut self, index: usize, iter: I) -> Result<(), VectorError>
    where
        I: IntoIterator<Item = T>,
    {
        let len = self.len;

        if index > len {
            return Err(VectorError::OutOfRange { index, len });
        }

        let mut guard = TruncateGuard::new(self, len);
        for item in iter {
            guard.vector().push(item)?;
        }

        let vector = guard.disarm();
        let inserted = vector.len - len;
        vector.as_mut_slice()[index..].rotate_right(inserted);

        Ok(())
    }

    // =========================================================================
    // Erasure
    // =========================================================================

    /// Destroys the element at `index` and closes the gap.
    ///
    /// # Errors
    ///
    /// [`VectorError::OutOfRange`] if `index >= len()`, before any mutation.
    pub fn erase(&mut self, index: usize) -> Result<(), VectorError> {
        if index >= self.len {
            return Err(VectorError::OutOfRange {
                index,
                len: self.len,
            });
        }

        self.erase_range(index..index + 1)
    }

    /// Destroys the elements in `range` and closes the gap.
    ///
    /// An empty in-bounds range is a no-op rather than an error.
    ///
    /// # Errors
    ///
    /// [`VectorError::OutOfRange`] if the bounds are reversed or run past
    /// `len()`, before any mutation. `index` is the larger bound.
    pub fn erase_range<R>(&mut self, range: R) -> Result<(), VectorError>
    where
        R: RangeBounds<usize>,
    {
        let len = self.len;

        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&end) => end.saturating_add(1),
            Bound::Excluded(&end) => end,
            Bound::Unbounded => len,
        };

        if start > end || end > len {
            return Err(VectorError::OutOfRange {
                index: start.max(end),
                len,
            });
        }

        if start == end {
            return Ok(());
        }

        // A panicking destructor leaks the suffix instead of double-dropping.
        self.len = start;

        // SAFETY: `[start, end)` is live and destroyed once; `[end, len)` is
        // live and moved down to `start`.
        unsafe {
            destroy_range(self.buf.allocator(), self.buf.ptr_at(start), end - start);
            ptr::copy(
                self.buf.ptr_at(end).as_ptr(),
                self.buf.ptr_at(start).as_ptr(),
                len - end,
            );
        }

        self.len = len - (end - start);

        Ok(())
    }

    /// Moves the element at `index` out and closes the gap.
    pub fn remove(&mut self, index: usize) -> Result<T, VectorError> {
        let len = self.len;

        if index >= len {
            return Err(VectorError::OutOfRange { index, len });
        }

        // SAFETY: slot `index` is live and read once; the suffix is moved
        // down over it.
        let value = unsafe {
            let slot = self.buf.ptr_at(index);
            let value = ptr::read(slot.as_ptr());
            ptr::copy(slot.add(1).as_ptr(), slot.as_ptr(), len - index - 1);
            value
        };

        self.len = len - 1;

        Ok(value)
    }

    /// Destroys every element, highest index first. Keeps the capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Destroys the elements past `n`. Does nothing if `n >= len()`.
    pub fn truncate(&mut self, n: usize) {
        if n >= self.len {
            return;
        }

        let count = self.len - n;
        self.len = n;

        // SAFETY: `[n, n + count)` was live and is no longer counted.
        unsafe { destroy_range(self.buf.allocator(), self.buf.ptr_at(n), count) };
    }

    /// Exchanges contents, capacity, and allocator with `other` in constant
    /// time.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Appends clones of `src`.
    pub fn extend_from_slice(&mut self, src: &[T]) -> Result<(), VectorError>
    where
        T: Clone,
    {
        let required = self.required(src.len())?;
        self.ensure_capacity(required)?;

        into_ok(self.construct_tail(src.len(), |index| Ok(src[index].clone())));
        Ok(())
    }

    /// Constructs `n` values past the live prefix. The capacity must already
    /// fit them. On failure the values built here are destroyed and the
    /// length is unchanged.
    pub(crate) fn construct_tail<E, F>(&mut self, n: usize, mut next: F) -> Result<(), E>
    where
        F: FnMut(usize) -> Result<T, E>,
    {
        debug_assert!(n <= self.capacity() - self.len);

        // SAFETY: `len <= capacity`.
        let start = unsafe { self.buf.ptr_at(self.len) };
        let mut guard = ConstructGuard::new(self.buf.allocator(), start);

        for index in 0..n {
            let value = next(index)?;
            // SAFETY: slot `len + index` is raw and within capacity.
            unsafe { guard.construct(value) };
        }

        self.len += guard.disarm();

        Ok(())
    }
}

impl<T, A: Allocator> Drop for Vector<T, A> {
    fn drop(&mut self) {
        let len = mem::replace(&mut self.len, 0);

        // SAFETY: `[0, len)` was live and is no longer counted.
        unsafe { destroy_range(self.buf.allocator(), self.buf.ptr(), len) };
    }
}

/// Exchanges the contents of `a` and `b` in constant time.
#[inline]
pub fn swap<T, A: Allocator>(a: &mut Vector<T, A>, b: &mut Vector<T, A>) {
    a.swap(b);
}
