//! SSE comparison masks: every lane is all ones (set) or all zeros (clear).

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{BitAnd, BitOr, BitXor, Not};

use crate::simd::SimdMask;

macro_rules! impl_sse_mask {
    ($mask:ident, $lanes:expr, $lane_int:ty, $set1:ident, $movemask:ident, $cast:ident) => {
        #[derive(Copy, Clone)]
        #[repr(transparent)]
        pub struct $mask(pub(crate) __m128i);

        impl SimdMask for $mask {
            const LANES: usize = $lanes;

            #[inline(always)]
            fn splat(value: bool) -> Self {
                Self(unsafe { $set1(if value { -1 } else { 0 }) })
            }

            #[inline(always)]
            fn from_fn<F: FnMut(usize) -> bool>(mut f: F) -> Self {
                let lanes: [$lane_int; $lanes] =
                    core::array::from_fn(|lane| if f(lane) { -1 } else { 0 });
                Self(unsafe { _mm_loadu_si128(lanes.as_ptr().cast()) })
            }

            #[inline(always)]
            fn to_bitmask(self) -> u64 {
                unsafe { $movemask($cast(self.0)) as u64 }
            }
        }

        impl BitAnd for $mask {
            type Output = Self;

            #[inline(always)]
            fn bitand(self, rhs: Self) -> Self {
                Self(unsafe { _mm_and_si128(self.0, rhs.0) })
            }
        }

        impl BitOr for $mask {
            type Output = Self;

            #[inline(always)]
            fn bitor(self, rhs: Self) -> Self {
                Self(unsafe { _mm_or_si128(self.0, rhs.0) })
            }
        }

        impl BitXor for $mask {
            type Output = Self;

            #[inline(always)]
            fn bitxor(self, rhs: Self) -> Self {
                Self(unsafe { _mm_xor_si128(self.0, rhs.0) })
            }
        }

        impl Not for $mask {
            type Output = Self;

            #[inline(always)]
            fn not(self) -> Self {
                Self(unsafe { _mm_xor_si128(self.0, _mm_set1_epi32(-1)) })
            }
        }

        impl_mask_fmt!($mask);
    };
}

impl_sse_mask!(Mask32x4, 4, i32, _mm_set1_epi32, _mm_movemask_ps, _mm_castsi128_ps);
impl_sse_mask!(Mask64x2, 2, i64, _mm_set1_epi64x, _mm_movemask_pd, _mm_castsi128_pd);
