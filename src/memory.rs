//! Padded, aligned storage addressable as scalars or as whole vectors.
//!
//! A [`PaddedMemory`] of `n` entries owns `padded_count(n, W)` elements,
//! where `W` is the lane count of the backend. The extra pad entries are
//! zero-filled at construction and every chunk `[k * W, (k + 1) * W)` starts
//! on an address aligned for vector loads. Loops can therefore process the
//! array in whole vectors without a scalar remainder loop:
//!
//! ```
//! use simdpad::prelude::*;
//!
//! let mut y = PaddedMemory::<f32>::new(10)?;
//! for i in 0..y.entries_count() {
//!     y[i] = i as f32;
//! }
//! for chunk in 0..y.vectors_count() {
//!     let doubled = y.vector(chunk) * 2.0;
//!     y.set_vector(chunk, doubled);
//! }
//! assert_eq!(y[9], 18.0);
//! # Ok::<(), simdpad::error::SimdpadError>(())
//! ```
//!
//! Safe accessors always check their bounds. Each one has an `unsafe`
//! `*_unchecked` twin whose preconditions are asserted only in debug builds
//! or with the `checked-access` feature.

use std::alloc::{alloc_zeroed, dealloc, handle_alloc_error, Layout};
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};
use std::ptr::NonNull;

use crate::error::{allocation_error, layout_error, validation_error, Result, SimdpadError};
use crate::simd::{Element, LaneWidth, Native, SimdVector, Vector};

// Precondition of an unchecked accessor: asserted in debug builds and with
// the `checked-access` feature, compiled out otherwise.
macro_rules! precondition {
    ($cond:expr, $($arg:tt)+) => {
        if cfg!(any(debug_assertions, feature = "checked-access")) {
            assert!($cond, $($arg)+);
        }
    };
}

/// Smallest multiple of `width` that is `>= entries`.
///
/// # Panics
///
/// Panics if `width` is zero.
#[inline]
pub const fn padded_count(entries: usize, width: usize) -> usize {
    entries + ((width - entries % width) % width)
}

/// Owned buffer of `T` padded to a whole number of backend `B` vectors.
pub struct PaddedMemory<T: Element, B: LaneWidth<T> = Native> {
    ptr: NonNull<T>,
    layout: Layout,
    entries: usize,
    padded: usize,
    _marker: PhantomData<(T, B)>,
}

// SAFETY: the buffer is exclusively owned and `T: Element` is `Send + Sync`.
unsafe impl<T: Element, B: LaneWidth<T>> Send for PaddedMemory<T, B> {}
unsafe impl<T: Element, B: LaneWidth<T>> Sync for PaddedMemory<T, B> {}

impl<T: Element, B: LaneWidth<T>> PaddedMemory<T, B> {
    /// Lanes per vector chunk.
    pub const WIDTH: usize = B::WIDTH;

    /// Allocates a zero-filled container holding `entries` logical entries.
    ///
    /// # Errors
    ///
    /// [`SimdpadError::LayoutError`] if the padded byte size overflows,
    /// [`SimdpadError::AllocationError`] if the allocator fails.
    pub fn new(entries: usize) -> Result<Self> {
        let width = Self::WIDTH;
        let alignment = B::ALIGNMENT.max(std::mem::align_of::<T>());

        let padded = entries
            .checked_add((width - entries % width) % width)
            .ok_or_else(|| layout_error(entries, width, T::NAME, "padded entry count overflows usize"))?;
        let size = padded
            .checked_mul(std::mem::size_of::<T>())
            .ok_or_else(|| layout_error(entries, width, T::NAME, "padded byte size overflows usize"))?;
        let layout = Layout::from_size_align(size, alignment).map_err(|e| {
            layout_error(entries, width, T::NAME, format!("{size} bytes at alignment {alignment}: {e}"))
        })?;

        let ptr = if size == 0 {
            NonNull::dangling()
        } else {
            // SAFETY: the layout has a non-zero size.
            let raw = unsafe { alloc_zeroed(layout) }.cast::<T>();
            match NonNull::new(raw) {
                Some(ptr) => ptr,
                None => {
                    tracing::error!(
                        size,
                        alignment,
                        backend = B::NAME,
                        "padded memory allocation failed"
                    );
                    return Err(allocation_error(size, alignment, B::NAME));
                }
            }
        };

        tracing::trace!(
            entries,
            padded,
            alignment,
            element = T::NAME,
            backend = B::NAME,
            "allocated padded memory"
        );

        Ok(Self {
            ptr,
            layout,
            entries,
            padded,
            _marker: PhantomData,
        })
    }

    /// Allocates a container and copies `src` into its logical entries.
    pub fn from_slice(src: &[T]) -> Result<Self> {
        let mut memory = Self::new(src.len())?;
        memory.entries_mut().copy_from_slice(src);
        Ok(memory)
    }

    /// Number of logical entries.
    #[inline(always)]
    pub fn entries_count(&self) -> usize {
        self.entries
    }

    /// Number of allocated entries, pad included.
    #[inline(always)]
    pub fn padded_count(&self) -> usize {
        self.padded
    }

    /// Number of whole vectors covering the buffer.
    #[inline(always)]
    pub fn vectors_count(&self) -> usize {
        self.padded / Self::WIDTH
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// The logical entries.
    #[inline(always)]
    pub fn entries(&self) -> &[T] {
        &self.padded_entries()[..self.entries]
    }

    #[inline(always)]
    pub fn entries_mut(&mut self) -> &mut [T] {
        let entries = self.entries;
        &mut self.padded_entries_mut()[..entries]
    }

    /// The whole buffer, pad included.
    #[inline(always)]
    pub fn padded_entries(&self) -> &[T] {
        // SAFETY: `ptr` is valid for `padded` initialised elements (or
        // dangling with `padded == 0`).
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.padded) }
    }

    #[inline(always)]
    pub fn padded_entries_mut(&mut self) -> &mut [T] {
        // SAFETY: as above, and `&mut self` guarantees exclusive access.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.padded) }
    }

    /// Entry `index`, pad included. `None` past `padded_count`.
    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.padded_entries().get(index)
    }

    #[inline(always)]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.padded_entries_mut().get_mut(index)
    }

    /// # Safety
    ///
    /// `index < padded_count()`.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        precondition!(
            index < self.padded,
            "index {index} out of range for {} padded entries",
            self.padded
        );
        &*self.ptr.as_ptr().add(index)
    }

    /// # Safety
    ///
    /// `index < padded_count()`.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        precondition!(
            index < self.padded,
            "index {index} out of range for {} padded entries",
            self.padded
        );
        &mut *self.ptr.as_ptr().add(index)
    }

    /// Loads vector chunk `chunk`, entries `[chunk * W, (chunk + 1) * W)`.
    ///
    /// # Panics
    ///
    /// Panics if `chunk >= vectors_count()`.
    #[inline(always)]
    pub fn vector(&self, chunk: usize) -> Vector<T, B> {
        self.assert_chunk(chunk);
        // SAFETY: chunk checked above.
        unsafe { self.vector_unchecked(chunk) }
    }

    /// # Safety
    ///
    /// `chunk < vectors_count()`.
    #[inline(always)]
    pub unsafe fn vector_unchecked(&self, chunk: usize) -> Vector<T, B> {
        precondition!(
            chunk < self.vectors_count(),
            "chunk {chunk} out of range for {} vectors",
            self.vectors_count()
        );
        <Vector<T, B> as SimdVector<T>>::load_aligned(self.ptr.as_ptr().add(chunk * Self::WIDTH))
    }

    /// Stores `value` into vector chunk `chunk`.
    ///
    /// # Panics
    ///
    /// Panics if `chunk >= vectors_count()`.
    #[inline(always)]
    pub fn set_vector(&mut self, chunk: usize, value: Vector<T, B>) {
        self.assert_chunk(chunk);
        // SAFETY: chunk checked above.
        unsafe { self.set_vector_unchecked(chunk, value) }
    }

    /// # Safety
    ///
    /// `chunk < vectors_count()`.
    #[inline(always)]
    pub unsafe fn set_vector_unchecked(&mut self, chunk: usize, value: Vector<T, B>) {
        precondition!(
            chunk < self.vectors_count(),
            "chunk {chunk} out of range for {} vectors",
            self.vectors_count()
        );
        value.store_aligned(self.ptr.as_ptr().add(chunk * Self::WIDTH))
    }

    /// Loads the `W` entries starting `lane_offset` entries after the start of
    /// chunk `chunk`. The offset may be negative.
    ///
    /// # Panics
    ///
    /// Panics if the window leaves `[0, padded_count())`.
    #[inline(always)]
    pub fn vector_shifted(&self, chunk: usize, lane_offset: isize) -> Vector<T, B> {
        let start = self.shifted_start(chunk, lane_offset);
        // SAFETY: the window was checked by `shifted_start`.
        unsafe { self.vector_at_entry_unchecked(start) }
    }

    /// # Safety
    ///
    /// `chunk * W + lane_offset` must be non-negative and the window it
    /// starts must end at or before `padded_count()`.
    #[inline(always)]
    pub unsafe fn vector_shifted_unchecked(&self, chunk: usize, lane_offset: isize) -> Vector<T, B> {
        self.vector_at_entry_unchecked((chunk * Self::WIDTH).wrapping_add_signed(lane_offset))
    }

    /// Stores `value` into the window `vector_shifted(chunk, lane_offset)`
    /// reads.
    ///
    /// # Panics
    ///
    /// Panics if the window leaves `[0, padded_count())`.
    #[inline(always)]
    pub fn set_vector_shifted(&mut self, chunk: usize, lane_offset: isize, value: Vector<T, B>) {
        let start = self.shifted_start(chunk, lane_offset);
        // SAFETY: the window was checked by `shifted_start`.
        unsafe { self.set_vector_at_entry_unchecked(start, value) }
    }

    /// # Safety
    ///
    /// Same window contract as [`vector_shifted_unchecked`](Self::vector_shifted_unchecked).
    #[inline(always)]
    pub unsafe fn set_vector_shifted_unchecked(
        &mut self,
        chunk: usize,
        lane_offset: isize,
        value: Vector<T, B>,
    ) {
        self.set_vector_at_entry_unchecked(
            (chunk * Self::WIDTH).wrapping_add_signed(lane_offset),
            value,
        )
    }

    /// Loads the `W` entries starting at entry `index`, aligned or not.
    ///
    /// # Panics
    ///
    /// Panics if `index + W > padded_count()`.
    #[inline(always)]
    pub fn vector_at_entry(&self, index: usize) -> Vector<T, B> {
        self.assert_window(index);
        // SAFETY: window checked above.
        unsafe { self.vector_at_entry_unchecked(index) }
    }

    /// # Safety
    ///
    /// `index + W <= padded_count()`.
    #[inline(always)]
    pub unsafe fn vector_at_entry_unchecked(&self, index: usize) -> Vector<T, B> {
        precondition!(
            self.window_fits(index),
            "window at entry {index} leaves the {} padded entries",
            self.padded
        );
        <Vector<T, B> as SimdVector<T>>::load_unaligned(self.ptr.as_ptr().add(index))
    }

    /// Stores `value` to the `W` entries starting at entry `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index + W > padded_count()`.
    #[inline(always)]
    pub fn set_vector_at_entry(&mut self, index: usize, value: Vector<T, B>) {
        self.assert_window(index);
        // SAFETY: window checked above.
        unsafe { self.set_vector_at_entry_unchecked(index, value) }
    }

    /// # Safety
    ///
    /// `index + W <= padded_count()`.
    #[inline(always)]
    pub unsafe fn set_vector_at_entry_unchecked(&mut self, index: usize, value: Vector<T, B>) {
        precondition!(
            self.window_fits(index),
            "window at entry {index} leaves the {} padded entries",
            self.padded
        );
        value.store_unaligned(self.ptr.as_ptr().add(index))
    }

    #[inline(always)]
    pub fn first_vector(&self) -> Vector<T, B> {
        self.vector(0)
    }

    /// The final chunk, `[padded_count() - W, padded_count())`. Its lanes past
    /// `entries_count()` are pad.
    ///
    /// # Panics
    ///
    /// Panics on an empty container.
    #[inline(always)]
    pub fn last_vector(&self) -> Vector<T, B> {
        assert!(self.padded > 0, "last_vector of an empty padded memory");
        // SAFETY: at least one chunk exists.
        unsafe { self.vector_unchecked(self.vectors_count() - 1) }
    }

    /// # Panics
    ///
    /// Panics on an empty container.
    #[inline(always)]
    pub fn set_last_vector(&mut self, value: Vector<T, B>) {
        assert!(self.padded > 0, "set_last_vector of an empty padded memory");
        let last = self.vectors_count() - 1;
        // SAFETY: at least one chunk exists.
        unsafe { self.set_vector_unchecked(last, value) }
    }

    /// Iterates the vector chunks in order.
    pub fn vectors(&self) -> impl ExactSizeIterator<Item = Vector<T, B>> + '_ {
        // SAFETY: every chunk in the range exists.
        (0..self.vectors_count()).map(move |chunk| unsafe { self.vector_unchecked(chunk) })
    }

    /// Replaces every chunk `k` with `f(k, chunk)`, pad lanes included.
    pub fn update_vectors<F>(&mut self, mut f: F)
    where
        F: FnMut(usize, Vector<T, B>) -> Vector<T, B>,
    {
        for chunk in 0..self.vectors_count() {
            // SAFETY: every chunk in the range exists.
            unsafe {
                let value = f(chunk, self.vector_unchecked(chunk));
                self.set_vector_unchecked(chunk, value);
            }
        }
    }

    /// Sets every logical entry to `value`. The pad is left untouched.
    pub fn fill(&mut self, value: T) {
        self.entries_mut().fill(value);
    }

    /// Zeroes the whole buffer, restoring the pad to its initial state.
    pub fn set_zero(&mut self) {
        self.padded_entries_mut().fill(T::zero());
    }

    /// Copies `src` into the logical entries.
    ///
    /// # Errors
    ///
    /// [`SimdpadError::ValidationError`] if `src.len() != entries_count()`.
    pub fn copy_from_slice(&mut self, src: &[T]) -> Result<()> {
        if src.len() != self.entries {
            return Err(validation_error(self.entries, src.len()));
        }
        self.entries_mut().copy_from_slice(src);
        Ok(())
    }

    #[inline(always)]
    fn assert_chunk(&self, chunk: usize) {
        assert!(
            chunk < self.vectors_count(),
            "chunk {chunk} out of range for {} vectors",
            self.vectors_count()
        );
    }

    #[inline(always)]
    fn window_fits(&self, index: usize) -> bool {
        index
            .checked_add(Self::WIDTH)
            .is_some_and(|end| end <= self.padded)
    }

    #[inline(always)]
    fn assert_window(&self, index: usize) {
        assert!(
            self.window_fits(index),
            "window at entry {index} leaves the {} padded entries",
            self.padded
        );
    }

    #[inline(always)]
    fn shifted_start(&self, chunk: usize, lane_offset: isize) -> usize {
        let start = chunk
            .checked_mul(Self::WIDTH)
            .and_then(|base| base.checked_add_signed(lane_offset))
            .filter(|&start| self.window_fits(start));
        match start {
            Some(start) => start,
            None => panic!(
                "shifted window (chunk {chunk}, offset {lane_offset}) leaves the {} padded entries",
                self.padded
            ),
        }
    }
}

impl<T: Element, B: LaneWidth<T>> Drop for PaddedMemory<T, B> {
    fn drop(&mut self) {
        if self.layout.size() != 0 {
            // SAFETY: allocated in `new` with this exact layout.
            unsafe { dealloc(self.ptr.as_ptr().cast(), self.layout) }
        }
    }
}

impl<T: Element, B: LaneWidth<T>> Clone for PaddedMemory<T, B> {
    fn clone(&self) -> Self {
        let mut copy = match Self::new(self.entries) {
            Ok(copy) => copy,
            Err(_) => handle_alloc_error(self.layout),
        };
        copy.padded_entries_mut()
            .copy_from_slice(self.padded_entries());
        copy
    }
}

impl<T: Element, B: LaneWidth<T>> Index<usize> for PaddedMemory<T, B> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= padded_count()`.
    #[inline(always)]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(value) => value,
            None => panic!(
                "index {index} out of range for {} padded entries",
                self.padded
            ),
        }
    }
}

impl<T: Element, B: LaneWidth<T>> IndexMut<usize> for PaddedMemory<T, B> {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let padded = self.padded;
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!("index {index} out of range for {padded} padded entries"),
        }
    }
}

impl<T: Element, B: LaneWidth<T>> fmt::Debug for PaddedMemory<T, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaddedMemory")
            .field("backend", &B::NAME)
            .field("width", &Self::WIDTH)
            .field("padded_count", &self.padded)
            .field("entries", &self.entries())
            .finish()
    }
}

impl<T: Element, B: LaneWidth<T>> PartialEq for PaddedMemory<T, B> {
    fn eq(&self, other: &Self) -> bool {
        self.entries() == other.entries()
    }
}

impl<T: Element, B: LaneWidth<T>> AsRef<[T]> for PaddedMemory<T, B> {
    fn as_ref(&self) -> &[T] {
        self.entries()
    }
}

impl<T: Element, B: LaneWidth<T>> AsMut<[T]> for PaddedMemory<T, B> {
    fn as_mut(&mut self) -> &mut [T] {
        self.entries_mut()
    }
}

impl<T: Element, B: LaneWidth<T>> TryFrom<&[T]> for PaddedMemory<T, B> {
    type Error = SimdpadError;

    fn try_from(src: &[T]) -> Result<Self> {
        Self::from_slice(src)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::Fallback;

    #[test]
    fn test_padded_count_properties() {
        for width in [1usize, 2, 4, 8, 16] {
            for entries in 0..64 {
                let padded = padded_count(entries, width);
                assert_eq!(padded % width, 0);
                assert!(padded >= entries);
                assert!(padded - entries < width);
            }
        }
        assert_eq!(padded_count(10, 4), 12);
        assert_eq!(padded_count(8, 8), 8);
        assert_eq!(padded_count(0, 8), 0);
    }

    #[test]
    fn test_new_is_zeroed_and_aligned() {
        let memory = PaddedMemory::<f32>::new(13).unwrap();
        let width = <Native as LaneWidth<f32>>::WIDTH;

        assert_eq!(memory.entries_count(), 13);
        assert_eq!(memory.padded_count(), padded_count(13, width));
        assert_eq!(memory.vectors_count() * width, memory.padded_count());
        assert!(memory.padded_entries().iter().all(|&x| x == 0.0));
        assert_eq!(memory.as_ptr() as usize % <Native as LaneWidth<f32>>::ALIGNMENT, 0);
    }

    #[test]
    fn test_empty_container() {
        let memory = PaddedMemory::<f64>::new(0).unwrap();
        assert!(memory.is_empty());
        assert_eq!(memory.padded_count(), 0);
        assert_eq!(memory.vectors_count(), 0);
        assert_eq!(memory.vectors().count(), 0);
        assert!(memory.get(0).is_none());
    }

    #[test]
    fn test_scalar_view_matches_vector_view() {
        let mut memory = PaddedMemory::<u32>::new(21).unwrap();
        let width = PaddedMemory::<u32>::WIDTH;
        for i in 0..memory.entries_count() {
            memory[i] = i as u32 * 3;
        }

        for (chunk, vector) in memory.vectors().enumerate() {
            for lane in 0..width {
                assert_eq!(vector.extract(lane), memory[chunk * width + lane]);
            }
        }
    }

    #[test]
    fn test_last_vector_covers_pad() {
        let mut memory = PaddedMemory::<i32, Fallback>::new(5).unwrap();
        memory.copy_from_slice(&[1, 2, 3, 4, 5]).unwrap();
        assert_eq!(memory.last_vector().0, 5);

        let mut memory = PaddedMemory::<i32>::new(5).unwrap();
        memory.fill(7);
        let width = PaddedMemory::<i32>::WIDTH;
        let last = memory.last_vector();
        for lane in 0..width {
            let index = memory.padded_count() - width + lane;
            let expected = if index < 5 { 7 } else { 0 };
            assert_eq!(last.extract(lane), expected);
        }
    }

    #[test]
    #[should_panic(expected = "empty padded memory")]
    fn test_last_vector_of_empty_panics() {
        let memory = PaddedMemory::<f32>::new(0).unwrap();
        let _ = memory.last_vector();
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_past_pad_panics() {
        let memory = PaddedMemory::<f32, Fallback>::new(3).unwrap();
        let _ = memory[3];
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_vector_past_end_panics() {
        let memory = PaddedMemory::<f32>::new(3).unwrap();
        let _ = memory.vector(memory.vectors_count());
    }

    #[test]
    #[should_panic(expected = "shifted window")]
    fn test_negative_shift_before_start_panics() {
        let memory = PaddedMemory::<f32>::new(16).unwrap();
        let _ = memory.vector_shifted(0, -1);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    #[cfg(debug_assertions)]
    fn test_unchecked_access_is_checked_in_debug() {
        let memory = PaddedMemory::<f32>::new(3).unwrap();
        let _ = unsafe { memory.vector_unchecked(memory.vectors_count()) };
    }

    #[test]
    fn test_shifted_windows() {
        let mut memory = PaddedMemory::<f64, Fallback>::new(4).unwrap();
        memory.copy_from_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(memory.vector_shifted(1, 1).0, 3.0);
        assert_eq!(memory.vector_shifted(3, -2).0, 2.0);

        memory.set_vector_shifted(2, -2, Vector::<f64, Fallback>::splat(9.0));
        assert_eq!(memory.entries(), &[9.0, 2.0, 3.0, 4.0]);
        assert_eq!(memory.vector_at_entry(3).0, 4.0);
    }

    #[test]
    fn test_update_vectors_and_set_zero() {
        let mut memory = PaddedMemory::<f32>::new(11).unwrap();
        let width = PaddedMemory::<f32>::WIDTH;
        memory.update_vectors(|chunk, _| {
            Vector::<f32>::indexes_from_zero() + (chunk * width) as f32
        });
        for i in 0..memory.padded_count() {
            assert_eq!(memory[i], i as f32);
        }

        memory.set_zero();
        assert!(memory.padded_entries().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_clone_is_independent() {
        let original = PaddedMemory::<i32>::from_slice(&[1, 2, 3]).unwrap();
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy[0] = 10;
        assert_eq!(original[0], 1);
        assert_ne!(copy, original);
        assert_eq!(copy.as_ptr() as usize % <Native as LaneWidth<i32>>::ALIGNMENT, 0);
    }

    #[test]
    fn test_try_from_and_views() {
        let data = [0.5f32, 1.5, 2.5];
        let mut memory = PaddedMemory::<f32>::try_from(&data[..]).unwrap();
        assert_eq!(memory.as_ref(), &data);

        memory.as_mut()[1] = 4.0;
        assert_eq!(memory.get(1), Some(&4.0));
        *memory.get_mut(2).unwrap() = 8.0;
        assert_eq!(memory.entries(), &[0.5, 4.0, 8.0]);

        let debug = format!("{:?}", memory);
        assert!(debug.contains("PaddedMemory"));
        assert!(debug.contains(crate::simd::native_backend()));
    }
}
