//! AVX2 comparison masks over `__m256i`.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{BitAnd, BitOr, BitXor, Not};

use crate::simd::SimdMask;

macro_rules! impl_avx2_mask {
    ($mask:ident, $lanes:expr, $lane_int:ty, $set1:ident, $movemask:ident, $cast:ident) => {
        #[derive(Copy, Clone)]
        #[repr(transparent)]
        pub struct $mask(pub(crate) __m256i);

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
                Self(unsafe { _mm256_loadu_si256(lanes.as_ptr().cast()) })
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
                Self(unsafe { _mm256_and_si256(self.0, rhs.0) })
            }
        }

        impl BitOr for $mask {
            type Output = Self;

            #[inline(always)]
            fn bitor(self, rhs: Self) -> Self {
                Self(unsafe { _mm256_or_si256(self.0, rhs.0) })
            }
        }

        impl BitXor for $mask {
            type Output = Self;

            #[inline(always)]
            fn bitxor(self, rhs: Self) -> Self {
                Self(unsafe { _mm256_xor_si256(self.0, rhs.0) })
            }
        }

        impl Not for $mask {
            type Output = Self;

            #[inline(always)]
            fn not(self) -> Self {
                Self(unsafe { _mm256_xor_si256(self.0, _mm256_set1_epi32(-1)) })
            }
        }

        impl_mask_fmt!($mask);
    };
}

impl_avx2_mask!(Mask32x8, 8, i32, _mm256_set1_epi32, _mm256_movemask_ps, _mm256_castsi256_ps);
impl_avx2_mask!(Mask64x4, 4, i64, _mm256_set1_epi64x, _mm256_movemask_pd, _mm256_castsi256_pd);
