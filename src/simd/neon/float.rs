//! NEON floating-point vectors: `F32x4` (`float32x4_t`) and `F64x2` (`float64x2_t`).
//!
//! `vminq`/`vmaxq` propagate NaN, unlike the x86 instructions and the scalar
//! fallback, so `min` and `max` are a compare followed by a bitwise select.

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use std::ops::{Add, Div, Mul, Sub};

use crate::simd::neon::{Mask32x4, Mask64x2, NEON_ALIGNMENT};
use crate::simd::SimdVector;

macro_rules! impl_neon_float {
    (
        $vector:ident, $elem:ty, $reg:ty, $lanes:expr, $mask:ident,
        dup: $dup:ident, load: $load:ident, store: $store:ident,
        add: $add:ident, sub: $sub:ident, mul: $mul:ident, div: $div:ident,
        eq: $eq:ident, lt: $lt:ident, le: $le:ident, gt: $gt:ident, ge: $ge:ident,
        bsl: $bsl:ident
    ) => {
        #[derive(Copy, Clone)]
        #[repr(transparent)]
        pub struct $vector {
            elements: $reg,
        }

        impl $vector {
            #[inline(always)]
            pub fn from_array(lanes: [$elem; $lanes]) -> Self {
                unsafe { Self::load_unaligned(lanes.as_ptr()) }
            }

            #[inline(always)]
            pub fn to_array(self) -> [$elem; $lanes] {
                let mut lanes = [<$elem>::default(); $lanes];
                unsafe { self.store_unaligned(lanes.as_mut_ptr()) };
                lanes
            }
        }

        impl SimdVector<$elem> for $vector {
            type Mask = $mask;

            const LANES: usize = $lanes;
            const ALIGNMENT: usize = NEON_ALIGNMENT;

            #[inline(always)]
            fn splat(value: $elem) -> Self {
                Self {
                    elements: unsafe { $dup(value) },
                }
            }

            #[inline(always)]
            fn from_fn<F: FnMut(usize) -> $elem>(f: F) -> Self {
                Self::from_array(core::array::from_fn(f))
            }

            #[inline(always)]
            fn extract(self, lane: usize) -> $elem {
                assert!(
                    lane < $lanes,
                    "lane {lane} out of range for a {}-lane vector",
                    $lanes
                );
                self.to_array()[lane]
            }

            #[inline(always)]
            unsafe fn load_aligned(ptr: *const $elem) -> Self {
                Self::load_unaligned(ptr)
            }

            #[inline(always)]
            unsafe fn load_unaligned(ptr: *const $elem) -> Self {
                Self {
                    elements: $load(ptr),
                }
            }

            #[inline(always)]
            unsafe fn store_aligned(self, ptr: *mut $elem) {
                self.store_unaligned(ptr)
            }

            #[inline(always)]
            unsafe fn store_unaligned(self, ptr: *mut $elem) {
                $store(ptr, self.elements)
            }

            #[inline(always)]
            fn simd_eq(self, rhs: Self) -> $mask {
                $mask(unsafe { $eq(self.elements, rhs.elements) })
            }

            #[inline(always)]
            fn simd_ne(self, rhs: Self) -> $mask {
                !self.simd_eq(rhs)
            }

            #[inline(always)]
            fn simd_lt(self, rhs: Self) -> $mask {
                $mask(unsafe { $lt(self.elements, rhs.elements) })
            }

            #[inline(always)]
            fn simd_le(self, rhs: Self) -> $mask {
                $mask(unsafe { $le(self.elements, rhs.elements) })
            }

            #[inline(always)]
            fn simd_gt(self, rhs: Self) -> $mask {
                $mask(unsafe { $gt(self.elements, rhs.elements) })
            }

            #[inline(always)]
            fn simd_ge(self, rhs: Self) -> $mask {
                $mask(unsafe { $ge(self.elements, rhs.elements) })
            }

            #[inline(always)]
            fn select(mask: $mask, if_true: Self, if_false: Self) -> Self {
                Self {
                    elements: unsafe { $bsl(mask.0, if_true.elements, if_false.elements) },
                }
            }

            #[inline(always)]
            fn min(self, rhs: Self) -> Self {
                Self::select(self.simd_lt(rhs), self, rhs)
            }

            #[inline(always)]
            fn max(self, rhs: Self) -> Self {
                Self::select(self.simd_gt(rhs), self, rhs)
            }
        }

        impl Add for $vector {
            type Output = Self;

            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { $add(self.elements, rhs.elements) },
                }
            }
        }

        impl Sub for $vector {
            type Output = Self;

            #[inline(always)]
            fn sub(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { $sub(self.elements, rhs.elements) },
                }
            }
        }

        impl Mul for $vector {
            type Output = Self;

            #[inline(always)]
            fn mul(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { $mul(self.elements, rhs.elements) },
                }
            }
        }

        impl Div for $vector {
            type Output = Self;

            #[inline(always)]
            fn div(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { $div(self.elements, rhs.elements) },
                }
            }
        }

        impl_derived_ops!($vector, $elem);
        impl_lane_fmt!($vector);
    };
}

impl_neon_float!(
    F32x4, f32, float32x4_t, 4, Mask32x4,
    dup: vdupq_n_f32, load: vld1q_f32, store: vst1q_f32,
    add: vaddq_f32, sub: vsubq_f32, mul: vmulq_f32, div: vdivq_f32,
    eq: vceqq_f32, lt: vcltq_f32, le: vcleq_f32, gt: vcgtq_f32, ge: vcgeq_f32,
    bsl: vbslq_f32
);

impl_neon_float!(
    F64x2, f64, float64x2_t, 2, Mask64x2,
    dup: vdupq_n_f64, load: vld1q_f64, store: vst1q_f64,
    add: vaddq_f64, sub: vsubq_f64, mul: vmulq_f64, div: vdivq_f64,
    eq: vceqq_f64, lt: vcltq_f64, le: vcleq_f64, gt: vcgtq_f64, ge: vcgeq_f64,
    bsl: vbslq_f64
);
