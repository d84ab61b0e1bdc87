//! SSE 32-bit integer vectors: `I32x4` and `U32x4`, both over `__m128i`.
//!
//! SSE only compares signed integers, so unsigned lanes are compared after
//! flipping their sign bit. Division has no instruction and runs per lane.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{Add, Div, Mul, Sub};

use crate::simd::sse::{Mask32x4, SSE_ALIGNMENT};
use crate::simd::{Element, SimdVector};

macro_rules! impl_sse_int {
    ($vector:ident, $elem:ty, $lanes:expr, bias: $bias:expr, min: $min:ident, max: $max:ident) => {
        #[derive(Copy, Clone)]
        #[repr(transparent)]
        pub struct $vector {
            elements: __m128i,
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

            // Order-preserving mapping onto signed lanes
            #[inline(always)]
            fn ordered(self) -> __m128i {
                unsafe { _mm_xor_si128(self.elements, _mm_set1_epi32($bias)) }
            }
        }

        impl SimdVector<$elem> for $vector {
            type Mask = Mask32x4;

            const LANES: usize = $lanes;
            const ALIGNMENT: usize = SSE_ALIGNMENT;

            #[inline(always)]
            fn splat(value: $elem) -> Self {
                Self {
                    elements: unsafe { _mm_set1_epi32(value as i32) },
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
                Self {
                    elements: _mm_load_si128(ptr.cast()),
                }
            }

            #[inline(always)]
            unsafe fn load_unaligned(ptr: *const $elem) -> Self {
                Self {
                    elements: _mm_loadu_si128(ptr.cast()),
                }
            }

            #[inline(always)]
            unsafe fn store_aligned(self, ptr: *mut $elem) {
                _mm_store_si128(ptr.cast(), self.elements)
            }

            #[inline(always)]
            unsafe fn store_unaligned(self, ptr: *mut $elem) {
                _mm_storeu_si128(ptr.cast(), self.elements)
            }

            #[inline(always)]
            fn simd_eq(self, rhs: Self) -> Mask32x4 {
                Mask32x4(unsafe { _mm_cmpeq_epi32(self.elements, rhs.elements) })
            }

            #[inline(always)]
            fn simd_ne(self, rhs: Self) -> Mask32x4 {
                !self.simd_eq(rhs)
            }

            #[inline(always)]
            fn simd_lt(self, rhs: Self) -> Mask32x4 {
                Mask32x4(unsafe { _mm_cmpgt_epi32(rhs.ordered(), self.ordered()) })
            }

            #[inline(always)]
            fn simd_le(self, rhs: Self) -> Mask32x4 {
                !self.simd_gt(rhs)
            }

            #[inline(always)]
            fn simd_gt(self, rhs: Self) -> Mask32x4 {
                Mask32x4(unsafe { _mm_cmpgt_epi32(self.ordered(), rhs.ordered()) })
            }

            #[inline(always)]
            fn simd_ge(self, rhs: Self) -> Mask32x4 {
                !self.simd_lt(rhs)
            }

            #[inline(always)]
            fn select(mask: Mask32x4, if_true: Self, if_false: Self) -> Self {
                Self {
                    elements: unsafe { _mm_blendv_epi8(if_false.elements, if_true.elements, mask.0) },
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
                    elements: unsafe { _mm_add_epi32(self.elements, rhs.elements) },
                }
            }
        }

        impl Sub for $vector {
            type Output = Self;

            #[inline(always)]
            fn sub(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { _mm_sub_epi32(self.elements, rhs.elements) },
                }
            }
        }

        impl Mul for $vector {
            type Output = Self;

            #[inline(always)]
            fn mul(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { _mm_mullo_epi32(self.elements, rhs.elements) },
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

impl_sse_int!(I32x4, i32, 4, bias: 0, min: _mm_min_epi32, max: _mm_max_epi32);
impl_sse_int!(U32x4, u32, 4, bias: i32::MIN, min: _mm_min_epu32, max: _mm_max_epu32);
