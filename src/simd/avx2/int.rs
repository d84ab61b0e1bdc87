//! AVX2 32-bit integer vectors: `I32x8` and `U32x8`, both over `__m256i`.
//!
//! AVX2 only has `cmpeq`/`cmpgt`; the other predicates are built from those,
//! on sign-flipped lanes for `U32x8`. Division runs per lane.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{Add, Div, Mul, Sub};

use crate::simd::avx2::{Mask32x8, AVX_ALIGNMENT};
use crate::simd::{Element, SimdVector};

macro_rules! impl_avx2_int {
    ($vector:ident, $elem:ty, $lanes:expr, bias: $bias:expr, min: $min:ident, max: $max:ident) => {
        #[derive(Copy, Clone)]
        #[repr(transparent)]
        pub struct $vector {
            elements: __m256i,
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

            #[inline(always)]
            fn ordered(self) -> __m256i {
                unsafe { _mm256_xor_si256(self.elements, _mm256_set1_epi32($bias)) }
            }
        }

        impl SimdVector<$elem> for $vector {
            type Mask = Mask32x8;

            const LANES: usize = $lanes;
            const ALIGNMENT: usize = AVX_ALIGNMENT;

            #[inline(always)]
            fn splat(value: $elem) -> Self {
                Self {
                    elements: unsafe { _mm256_set1_epi32(value as i32) },
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
                    elements: _mm256_load_si256(ptr.cast()),
                }
            }

            #[inline(always)]
            unsafe fn load_unaligned(ptr: *const $elem) -> Self {
                Self {
                    elements: _mm256_loadu_si256(ptr.cast()),
                }
            }

            #[inline(always)]
            unsafe fn store_aligned(self, ptr: *mut $elem) {
                _mm256_store_si256(ptr.cast(), self.elements)
            }

            #[inline(always)]
            unsafe fn store_unaligned(self, ptr: *mut $elem) {
                _mm256_storeu_si256(ptr.cast(), self.elements)
            }

            #[inline(always)]
            fn simd_eq(self, rhs: Self) -> Mask32x8 {
                Mask32x8(unsafe { _mm256_cmpeq_epi32(self.elements, rhs.elements) })
            }

            #[inline(always)]
            fn simd_ne(self, rhs: Self) -> Mask32x8 {
                !self.simd_eq(rhs)
            }

            #[inline(always)]
            fn simd_lt(self, rhs: Self) -> Mask32x8 {
                Mask32x8(unsafe { _mm256_cmpgt_epi32(rhs.ordered(), self.ordered()) })
            }

            #[inline(always)]
            fn simd_le(self, rhs: Self) -> Mask32x8 {
                !self.simd_gt(rhs)
            }

            #[inline(always)]
            fn simd_gt(self, rhs: Self) -> Mask32x8 {
                Mask32x8(unsafe { _mm256_cmpgt_epi32(self.ordered(), rhs.ordered()) })
            }

            #[inline(always)]
            fn simd_ge(self, rhs: Self) -> Mask32x8 {
                !self.simd_lt(rhs)
            }

            #[inline(always)]
            fn select(mask: Mask32x8, if_true: Self, if_false: Self) -> Self {
                Self {
                    elements: unsafe {
                        _mm256_blendv_epi8(if_false.elements, if_true.elements, mask.0)
                    },
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
                    elements: unsafe { _mm256_add_epi32(self.elements, rhs.elements) },
                }
            }
        }

        impl Sub for $vector {
            type Output = Self;

            #[inline(always)]
            fn sub(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { _mm256_sub_epi32(self.elements, rhs.elements) },
                }
            }
        }

        impl Mul for $vector {
            type Output = Self;

            #[inline(always)]
            fn mul(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { _mm256_mullo_epi32(self.elements, rhs.elements) },
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

impl_avx2_int!(I32x8, i32, 8, bias: 0, min: _mm256_min_epi32, max: _mm256_max_epi32);
impl_avx2_int!(U32x8, u32, 8, bias: i32::MIN, min: _mm256_min_epu32, max: _mm256_max_epu32);
