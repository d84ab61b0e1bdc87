//! NEON 32-bit integer vectors: `I32x4` (`int32x4_t`) and `U32x4` (`uint32x4_t`).
//!
//! NEON compares signed and unsigned lanes natively. There is no integer
//! divide, so division runs per lane.

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use std::ops::{Add, Div, Mul, Sub};

use crate::simd::neon::{Mask32x4, NEON_ALIGNMENT};
use crate::simd::{Element, SimdVector};

macro_rules! impl_neon_int {
    (
        $vector:ident, $elem:ty, $reg:ty,
        dup: $dup:ident, load: $load:ident, store: $store:ident,
        add: $add:ident, sub: $sub:ident, mul: $mul:ident,
        min: $min:ident, max: $max:ident,
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
            pub fn from_array(lanes: [$elem; 4]) -> Self {
                unsafe { Self::load_unaligned(lanes.as_ptr()) }
            }

            #[inline(always)]
            pub fn to_array(self) -> [$elem; 4] {
                let mut lanes = [0; 4];
                unsafe { self.store_unaligned(lanes.as_mut_ptr()) };
                lanes
            }
        }

        impl SimdVector<$elem> for $vector {
            type Mask = Mask32x4;

            const LANES: usize = 4;
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
                assert!(lane < 4, "lane {lane} out of range for a 4-lane vector");
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
            fn simd_eq(self, rhs: Self) -> Mask32x4 {
                Mask32x4(unsafe { $eq(self.elements, rhs.elements) })
            }

            #[inline(always)]
            fn simd_ne(self, rhs: Self) -> Mask32x4 {
                !self.simd_eq(rhs)
            }

            #[inline(always)]
            fn simd_lt(self, rhs: Self) -> Mask32x4 {
                Mask32x4(unsafe { $lt(self.elements, rhs.elements) })
            }

            #[inline(always)]
            fn simd_le(self, rhs: Self) -> Mask32x4 {
                Mask32x4(unsafe { $le(self.elements, rhs.elements) })
            }

            #[inline(always)]
            fn simd_gt(self, rhs: Self) -> Mask32x4 {
                Mask32x4(unsafe { $gt(self.elements, rhs.elements) })
            }

            #[inline(always)]
            fn simd_ge(self, rhs: Self) -> Mask32x4 {
                Mask32x4(unsafe { $ge(self.elements, rhs.elements) })
            }

            #[inline(always)]
            fn select(mask: Mask32x4, if_true: Self, if_false: Self) -> Self {
                Self {
                    elements: unsafe { $bsl(mask.0, if_true.elements, if_false.elements) },
                }
            }

            #[inline(always)]
            fn min(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { $min(self.elements, rhs.elements) },
                }
            }

            #[inline(always)]
            fn max(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { $max(self.elements, rhs.elements) },
                }
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
                self.zip_map(rhs, <$elem as Element>::lane_div)
            }
        }

        impl_derived_ops!($vector, $elem);
        impl_lane_fmt!($vector);
    };
}

impl_neon_int!(
    I32x4, i32, int32x4_t,
    dup: vdupq_n_s32, load: vld1q_s32, store: vst1q_s32,
    add: vaddq_s32, sub: vsubq_s32, mul: vmulq_s32,
    min: vminq_s32, max: vmaxq_s32,
    eq: vceqq_s32, lt: vcltq_s32, le: vcleq_s32, gt: vcgtq_s32, ge: vcgeq_s32,
    bsl: vbslq_s32
);

impl_neon_int!(
    U32x4, u32, uint32x4_t,
    dup: vdupq_n_u32, load: vld1q_u32, store: vst1q_u32,
    add: vaddq_u32, sub: vsubq_u32, mul: vmulq_u32,
    min: vminq_u32, max: vmaxq_u32,
    eq: vceqq_u32, lt: vcltq_u32, le: vcleq_u32, gt: vcgtq_u32, ge: vcgeq_u32,
    bsl: vbslq_u32
);
