//! SSE floating-point vectors: `F32x4` (`__m128`) and `F64x2` (`__m128d`).
//!
//! `min`/`max` map directly onto `MINPS`/`MAXPS` (and the `PD` forms), whose
//! handling of NaN and signed zero is exactly `a < b ? a : b`.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{Add, Div, Mul, Sub};

use crate::simd::sse::{Mask32x4, Mask64x2, SSE_ALIGNMENT};
use crate::simd::SimdVector;

macro_rules! impl_sse_float {
    (
        $vector:ident, $elem:ty, $reg:ty, $lanes:expr, $mask:ident,
        set1: $set1:ident, load: $load:ident, loadu: $loadu:ident,
        store: $store:ident, storeu: $storeu:ident,
        add: $add:ident, sub: $sub:ident, mul: $mul:ident, div: $div:ident,
        min: $min:ident, max: $max:ident,
        eq: $eq:ident, ne: $ne:ident, lt: $lt:ident, le: $le:ident, gt: $gt:ident, ge: $ge:ident,
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
            const ALIGNMENT: usize = SSE_ALIGNMENT;

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
                $mask(unsafe { $to_int($eq(self.elements, rhs.elements)) })
            }

            #[inline(always)]
            fn simd_ne(self, rhs: Self) -> $mask {
                $mask(unsafe { $to_int($ne(self.elements, rhs.elements)) })
            }

            #[inline(always)]
            fn simd_lt(self, rhs: Self) -> $mask {
                $mask(unsafe { $to_int($lt(self.elements, rhs.elements)) })
            }

            #[inline(always)]
            fn simd_le(self, rhs: Self) -> $mask {
                $mask(unsafe { $to_int($le(self.elements, rhs.elements)) })
            }

            #[inline(always)]
            fn simd_gt(self, rhs: Self) -> $mask {
                $mask(unsafe { $to_int($gt(self.elements, rhs.elements)) })
            }

            #[inline(always)]
            fn simd_ge(self, rhs: Self) -> $mask {
                $mask(unsafe { $to_int($ge(self.elements, rhs.elements)) })
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

impl_sse_float!(
    F32x4, f32, __m128, 4, Mask32x4,
    set1: _mm_set1_ps, load: _mm_load_ps, loadu: _mm_loadu_ps,
    store: _mm_store_ps, storeu: _mm_storeu_ps,
    add: _mm_add_ps, sub: _mm_sub_ps, mul: _mm_mul_ps, div: _mm_div_ps,
    min: _mm_min_ps, max: _mm_max_ps,
    eq: _mm_cmpeq_ps, ne: _mm_cmpneq_ps, lt: _mm_cmplt_ps, le: _mm_cmple_ps,
    gt: _mm_cmpgt_ps, ge: _mm_cmpge_ps,
    to_int: _mm_castps_si128, from_int: _mm_castsi128_ps, blend: _mm_blendv_ps
);

impl_sse_float!(
    F64x2, f64, __m128d, 2, Mask64x2,
    set1: _mm_set1_pd, load: _mm_load_pd, loadu: _mm_loadu_pd,
    store: _mm_store_pd, storeu: _mm_storeu_pd,
    add: _mm_add_pd, sub: _mm_sub_pd, mul: _mm_mul_pd, div: _mm_div_pd,
    min: _mm_min_pd, max: _mm_max_pd,
    eq: _mm_cmpeq_pd, ne: _mm_cmpneq_pd, lt: _mm_cmplt_pd, le: _mm_cmple_pd,
    gt: _mm_cmpgt_pd, ge: _mm_cmpge_pd,
    to_int: _mm_castpd_si128, from_int: _mm_castsi128_pd, blend: _mm_blendv_pd
);
