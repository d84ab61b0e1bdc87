use std::fmt::Debug;
use std::ops::{
    Add, AddAssign, BitAnd, BitOr, BitXor, Div, DivAssign, Mul, MulAssign, Not, Sub, SubAssign,
};

use crate::simd::element::Element;

/// A lanewise boolean produced by vector comparisons.
pub trait SimdMask:
    Copy
    + Debug
    + PartialEq
    + Send
    + Sync
    + 'static
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
{
    /// Number of lanes, equal to the lane count of the vectors it selects.
    const LANES: usize;

    /// Sets every lane to `value`.
    fn splat(value: bool) -> Self;

    /// Builds a mask lane by lane.
    fn from_fn<F: FnMut(usize) -> bool>(f: F) -> Self;

    /// Packs the lanes into the low bits of an integer, lane 0 in bit 0.
    fn to_bitmask(self) -> u64;

    /// State of a single lane.
    ///
    /// # Panics
    ///
    /// Panics if `lane >= LANES`.
    #[inline(always)]
    fn test(self, lane: usize) -> bool {
        assert!(
            lane < Self::LANES,
            "lane {lane} out of range for a {}-lane mask",
            Self::LANES
        );
        (self.to_bitmask() >> lane) & 1 == 1
    }

    #[inline(always)]
    fn all(self) -> bool {
        self.to_bitmask() == (1u64 << Self::LANES) - 1
    }

    #[inline(always)]
    fn any(self) -> bool {
        self.to_bitmask() != 0
    }

    #[inline(always)]
    fn none(self) -> bool {
        self.to_bitmask() == 0
    }

    /// Number of set lanes.
    #[inline(always)]
    fn count(self) -> u32 {
        self.to_bitmask().count_ones()
    }
}

/// A fixed-width tuple of `LANES` scalars of type `T`.
///
/// All backends expose this exact surface, so code written against
/// `SimdVector<T>` compiles unchanged for the scalar fallback and for every
/// SIMD instruction set. Arithmetic is strictly lanewise.
pub trait SimdVector<T: Element>:
    Copy
    + Debug
    + PartialEq
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Add<T, Output = Self>
    + Sub<T, Output = Self>
    + Mul<T, Output = Self>
    + Div<T, Output = Self>
    + AddAssign<T>
    + SubAssign<T>
    + MulAssign<T>
    + DivAssign<T>
{
    /// Comparison result type.
    type Mask: SimdMask;

    /// Number of lanes.
    const LANES: usize;

    /// Byte alignment required by [`load_aligned`](Self::load_aligned) and
    /// [`store_aligned`](Self::store_aligned).
    const ALIGNMENT: usize;

    /// Broadcasts `value` to every lane.
    fn splat(value: T) -> Self;

    /// Builds a vector lane by lane.
    fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self;

    /// Reads lane `lane`.
    ///
    /// # Panics
    ///
    /// Panics if `lane >= LANES`.
    fn extract(self, lane: usize) -> T;

    /// Loads `LANES` elements from an aligned address.
    ///
    /// # Safety
    ///
    /// `ptr` must be aligned to [`ALIGNMENT`](Self::ALIGNMENT) and valid for
    /// reads of `LANES` elements.
    unsafe fn load_aligned(ptr: *const T) -> Self;

    /// Loads `LANES` elements from any address.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `LANES` elements.
    unsafe fn load_unaligned(ptr: *const T) -> Self;

    /// Stores all lanes to an aligned address.
    ///
    /// # Safety
    ///
    /// `ptr` must be aligned to [`ALIGNMENT`](Self::ALIGNMENT) and valid for
    /// writes of `LANES` elements.
    unsafe fn store_aligned(self, ptr: *mut T);

    /// Stores all lanes to any address.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writes of `LANES` elements.
    unsafe fn store_unaligned(self, ptr: *mut T);

    fn simd_eq(self, rhs: Self) -> Self::Mask;
    fn simd_ne(self, rhs: Self) -> Self::Mask;
    fn simd_lt(self, rhs: Self) -> Self::Mask;
    fn simd_le(self, rhs: Self) -> Self::Mask;
    fn simd_gt(self, rhs: Self) -> Self::Mask;
    fn simd_ge(self, rhs: Self) -> Self::Mask;

    /// Lanes of `if_true` where `mask` is set, lanes of `if_false` elsewhere.
    fn select(mask: Self::Mask, if_true: Self, if_false: Self) -> Self;

    /// Lanewise [`Element::lane_min`].
    fn min(self, rhs: Self) -> Self;

    /// Lanewise [`Element::lane_max`].
    fn max(self, rhs: Self) -> Self;

    #[inline(always)]
    fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// Lane `i` holds `i`. Adding `k * LANES` gives the global indexes of chunk `k`.
    #[inline(always)]
    fn indexes_from_zero() -> Self {
        Self::from_fn(T::from_index)
    }

    /// Overwrites lane `lane` with `value`.
    ///
    /// # Panics
    ///
    /// Panics if `lane >= LANES`.
    #[inline(always)]
    fn replace(&mut self, lane: usize, value: T) {
        assert!(
            lane < Self::LANES,
            "lane {lane} out of range for a {}-lane vector",
            Self::LANES
        );
        let current = *self;
        *self = Self::from_fn(|i| if i == lane { value } else { current.extract(i) });
    }

    /// Assigns `value` to the lanes selected by `mask`.
    #[inline(always)]
    fn masked_assign(&mut self, mask: Self::Mask, value: Self) {
        *self = Self::select(mask, value, *self);
    }

    /// Applies a scalar callable to every lane, e.g. `f32::sin` when no
    /// vectorized version exists.
    #[inline(always)]
    fn map<F: FnMut(T) -> T>(self, mut f: F) -> Self {
        Self::from_fn(|i| f(self.extract(i)))
    }

    /// Applies a binary scalar callable lane by lane.
    #[inline(always)]
    fn zip_map<F: FnMut(T, T) -> T>(self, other: Self, mut f: F) -> Self {
        Self::from_fn(|i| f(self.extract(i), other.extract(i)))
    }

    /// Loads the first `LANES` elements of `slice`.
    ///
    /// # Panics
    ///
    /// Panics if `slice.len() < LANES`.
    #[inline(always)]
    fn from_slice(slice: &[T]) -> Self {
        assert!(
            slice.len() >= Self::LANES,
            "slice of {} elements is shorter than {} lanes",
            slice.len(),
            Self::LANES
        );
        // SAFETY: the slice holds at least LANES readable elements.
        unsafe { Self::load_unaligned(slice.as_ptr()) }
    }

    /// Writes all lanes to the first `LANES` elements of `slice`.
    ///
    /// # Panics
    ///
    /// Panics if `slice.len() < LANES`.
    #[inline(always)]
    fn write_to_slice(self, slice: &mut [T]) {
        assert!(
            slice.len() >= Self::LANES,
            "slice of {} elements is shorter than {} lanes",
            slice.len(),
            Self::LANES
        );
        // SAFETY: the slice holds at least LANES writable elements.
        unsafe { self.store_unaligned(slice.as_mut_ptr()) }
    }

    fn to_vec(self) -> Vec<T> {
        (0..Self::LANES).map(|lane| self.extract(lane)).collect()
    }

    /// Sum of all lanes, folded from lane 0 upwards.
    #[inline(always)]
    fn reduce_sum(self) -> T {
        (1..Self::LANES).fold(self.extract(0), |acc, lane| acc.lane_add(self.extract(lane)))
    }

    #[inline(always)]
    fn reduce_min(self) -> T {
        (1..Self::LANES).fold(self.extract(0), |acc, lane| acc.lane_min(self.extract(lane)))
    }

    #[inline(always)]
    fn reduce_max(self) -> T {
        (1..Self::LANES).fold(self.extract(0), |acc, lane| acc.lane_max(self.extract(lane)))
    }
}
