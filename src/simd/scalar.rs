//! Scalar fallback backend.
//!
//! Every vector has exactly one lane, so it runs anywhere and computes each
//! lane with plain scalar arithmetic. The SIMD backends are validated against
//! it.

use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Not, Sub};

use crate::simd::{Backend, Element, LaneWidth, SimdMask, SimdVector};

/// Marker type of the scalar backend.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fallback;

impl Backend for Fallback {
    const NAME: &'static str = "scalar";

    #[inline(always)]
    fn is_available() -> bool {
        true
    }
}

impl LaneWidth<f32> for Fallback {
    type Vector = Scalar<f32>;
}

impl LaneWidth<f64> for Fallback {
    type Vector = Scalar<f64>;
}

impl LaneWidth<i32> for Fallback {
    type Vector = Scalar<i32>;
}

impl LaneWidth<u32> for Fallback {
    type Vector = Scalar<u32>;
}

/// A single-lane vector.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Scalar<T: Element>(pub T);

/// A single-lane mask.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ScalarMask(pub bool);

impl SimdMask for ScalarMask {
    const LANES: usize = 1;

    #[inline(always)]
    fn splat(value: bool) -> Self {
        Self(value)
    }

    #[inline(always)]
    fn from_fn<F: FnMut(usize) -> bool>(mut f: F) -> Self {
        Self(f(0))
    }

    #[inline(always)]
    fn to_bitmask(self) -> u64 {
        self.0 as u64
    }
}

impl BitAnd for ScalarMask {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitOr for ScalarMask {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitXor for ScalarMask {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl Not for ScalarMask {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        Self(!self.0)
    }
}

macro_rules! impl_scalar_vector {
    ($($elem:ty),*) => {$(
        impl SimdVector<$elem> for Scalar<$elem> {
            type Mask = ScalarMask;

            const LANES: usize = 1;
            const ALIGNMENT: usize = std::mem::align_of::<$elem>();

            #[inline(always)]
            fn splat(value: $elem) -> Self {
                Self(value)
            }

            #[inline(always)]
            fn from_fn<F: FnMut(usize) -> $elem>(mut f: F) -> Self {
                Self(f(0))
            }

            #[inline(always)]
            fn extract(self, lane: usize) -> $elem {
                assert!(lane == 0, "lane {lane} out of range for a 1-lane vector");
                self.0
            }

            #[inline(always)]
            unsafe fn load_aligned(ptr: *const $elem) -> Self {
                Self(ptr.read())
            }

            #[inline(always)]
            unsafe fn load_unaligned(ptr: *const $elem) -> Self {
                Self(ptr.read_unaligned())
            }

            #[inline(always)]
            unsafe fn store_aligned(self, ptr: *mut $elem) {
                ptr.write(self.0)
            }

            #[inline(always)]
            unsafe fn store_unaligned(self, ptr: *mut $elem) {
                ptr.write_unaligned(self.0)
            }

            #[inline(always)]
            fn simd_eq(self, rhs: Self) -> ScalarMask {
                ScalarMask(self.0 == rhs.0)
            }

            #[inline(always)]
            fn simd_ne(self, rhs: Self) -> ScalarMask {
                ScalarMask(self.0 != rhs.0)
            }

            #[inline(always)]
            fn simd_lt(self, rhs: Self) -> ScalarMask {
                ScalarMask(self.0 < rhs.0)
            }

            #[inline(always)]
            fn simd_le(self, rhs: Self) -> ScalarMask {
                ScalarMask(self.0 <= rhs.0)
            }

            #[inline(always)]
            fn simd_gt(self, rhs: Self) -> ScalarMask {
                ScalarMask(self.0 > rhs.0)
            }

            #[inline(always)]
            fn simd_ge(self, rhs: Self) -> ScalarMask {
                ScalarMask(self.0 >= rhs.0)
            }

            #[inline(always)]
            fn select(mask: ScalarMask, if_true: Self, if_false: Self) -> Self {
                if mask.0 {
                    if_true
                } else {
                    if_false
                }
            }

            #[inline(always)]
            fn min(self, rhs: Self) -> Self {
                Self(self.0.lane_min(rhs.0))
            }

            #[inline(always)]
            fn max(self, rhs: Self) -> Self {
                Self(self.0.lane_max(rhs.0))
            }
        }
    )*};
}

impl_scalar_vector!(f32, f64, i32, u32);

impl<T: Element> Add for Scalar<T> {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.lane_add(rhs.0))
    }
}

impl<T: Element> Sub for Scalar<T> {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0.lane_sub(rhs.0))
    }
}

impl<T: Element> Mul for Scalar<T> {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self(self.0.lane_mul(rhs.0))
    }
}

impl<T: Element> Div for Scalar<T> {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        Self(self.0.lane_div(rhs.0))
    }
}

impl_derived_ops!(Scalar<f32>, f32);
impl_derived_ops!(Scalar<f64>, f64);
impl_derived_ops!(Scalar<i32>, i32);
impl_derived_ops!(Scalar<u32>, u32);
