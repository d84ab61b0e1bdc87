//! AVX floating-point vectors: `F32x8` (`__m256`) and `F64x4` (`__m256d`).
//!
//! Comparisons use the ordered, quiet predicates (`_CMP_*_OQ`) so a NaN lane
//! compares false, except for `simd_ne` which uses `_CMP_NEQ_UQ` and compares
//! true, matching scalar `!=`.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{Add, Div, Mul, Sub};

use crate::simd::avx2::{Mask32x8, Mask64x4, AVX_ALIGNMENT};
use crate::simd::SimdVector;

macro_rules! impl_avx2_float {
    (
        $vector:ident, $elem:ty, $reg:ty, $lanes:expr, $mask:ident,
        set1: $set1:ident, load: $load:ident, loadu: $loadu:ident,
        store: $store:ident, storeu: $storeu:ident,
        add: $add:ident, sub: $sub:ident, mul: $mul:ident, div: $div:ident,
        min: $min:ident, max: $max:ident, cmp: $cmp:ident,
        to_int: $to_int:ident, from_int: $from_int:ident, blend: $blend:ident
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
            const ALIGNMENT: usize = AVX_ALIGNMENT;

            #[inline(always)]
            fn splat(value: $elem) -> Self {
                Self {
                    elements: unsafe { $set1(value) },
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
                    elements: $load(ptr),
                }
            }

            #[inline(always)]
            unsafe fn load_unaligned(ptr: *const $elem) -> Self {
                Self {
                    elements: $loadu(ptr),
                }
            }

            #[inline(always)]
            unsafe fn store_aligned(self, ptr: *mut $elem) {
                $store(ptr, self.elements)
            }

            #[inline(always)]
            unsafe fn store_unaligned(self, ptr: *mut $elem) {
                $storeu(ptr, self.elements)
            }

            #[inline(always)]
            fn simd_eq(self, rhs: Self) -> $mask {
                $mask(unsafe { $to_int($cmp::<_CMP_EQ_OQ>(self.elements, rhs.elements)) })
            }

            #[inline(always)]
            fn simd_ne(self, rhs: Self) -> $mask {
                $mask(unsafe { $to_int($cmp::<_CMP_NEQ_UQ>(self.elements, rhs.elements)) })
            }

            #[inline(always)]
            fn simd_lt(self, rhs: Self) -> $mask {
                $mask(unsafe { $to_int($cmp::<_CMP_LT_OQ>(self.elements, rhs.elements)) })
            }

            #[inline(always)]
            fn simd_le(self, rhs: Self) -> $mask {
                $mask(unsafe { $to_int($cmp::<_CMP_LE_OQ>(self.elements, rhs.elements)) })
            }

            #[inline(always)]
            fn simd_gt(self, rhs: Self) -> $mask {
                $mask(unsafe { $to_int($cmp::<_CMP_GT_OQ>(self.elements, rhs.elements)) })
            }

            #[inline(always)]
            fn simd_ge(self, rhs: Self) -> $mask {
                $mask(unsafe { $to_int($cmp::<_CMP_GE_OQ>(self.elements, rhs.elements)) })
            }

            #[inline(always)]
            fn select(mask: $mask, if_true: Self, if_false: Self) -> Self {
                Self {
                    elements: unsafe {
                        $blend(if_false.elements, if_true.elements, $from_int(mask.0))
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

impl_avx2_float!(
    F32x8, f32, __m256, 8, Mask32x8,
    set1: _mm256_set1_ps, load: _mm256_load_ps, loadu: _mm256_loadu_ps,
    store: _mm256_store_ps, storeu: _mm256_storeu_ps,
    add: _mm256_add_ps, sub: _mm256_sub_ps, mul: _mm256_mul_ps, div: _mm256_div_ps,
    min: _mm256_min_ps, max: _mm256_max_ps, cmp: _mm256_cmp_ps,
    to_int: _mm256_castps_si256, from_int: _mm256_castsi256_ps, blend: _mm256_blendv_ps
);

impl_avx2_float!(
    F64x4, f64, __m256d, 4, Mask64x4,
    set1: _mm256_set1_pd, load: _mm256_load_pd, loadu: _mm256_loadu_pd,
    store: _mm256_store_pd, storeu: _mm256_storeu_pd,
    add: _mm256_add_pd, sub: _mm256_sub_pd, mul: _mm256_mul_pd, div: _mm256_div_pd,
    min: _mm256_min_pd, max: _mm256_max_pd, cmp: _mm256_cmp_pd,
    to_int: _mm256_castpd_si256, from_int: _mm256_castsi256_pd, blend: _mm256_blendv_pd
);
