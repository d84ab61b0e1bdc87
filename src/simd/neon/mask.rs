//! NEON comparison masks over `uint32x4_t` and `uint64x2_t`.

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use std::ops::{BitAnd, BitOr, BitXor, Not};

use crate::simd::SimdMask;

macro_rules! impl_neon_mask {
    (
        $mask:ident, $reg:ty, $lanes:expr, $lane:ty,
        dup: $dup:ident, load: $load:ident, store: $store:ident,
        and: $and:ident, or: $or:ident, xor: $xor:ident
    ) => {
        #[derive(Copy, Clone)]
        #[repr(transparent)]
        pub struct $mask(pub(crate) $reg);

        impl $mask {
            #[inline(always)]
            fn to_lanes(self) -> [$lane; $lanes] {
                let mut lanes = [0; $lanes];
                unsafe { $store(lanes.as_mut_ptr(), self.0) };
                lanes
            }
        }

        impl SimdMask for $mask {
            const LANES: usize = $lanes;

            #[inline(always)]
            fn splat(value: bool) -> Self {
                Self(unsafe { $dup(if value { <$lane>::MAX } else { 0 }) })
            }

            #[inline(always)]
            fn from_fn<F: FnMut(usize) -> bool>(mut f: F) -> Self {
                let lanes: [$lane; $lanes] =
                    core::array::from_fn(|lane| if f(lane) { <$lane>::MAX } else { 0 });
                Self(unsafe { $load(lanes.as_ptr()) })
            }

            // NEON has no movemask; gather the top bit of each lane.
            #[inline(always)]
            fn to_bitmask(self) -> u64 {
                self.to_lanes()
                    .iter()
                    .enumerate()
                    .fold(0u64, |bits, (lane, &value)| {
                        bits | (((value >> (<$lane>::BITS - 1)) as u64) << lane)
                    })
            }
        }

        impl BitAnd for $mask {
            type Output = Self;

            #[inline(always)]
            fn bitand(self, rhs: Self) -> Self {
                Self(unsafe { $and(self.0, rhs.0) })
            }
        }

        impl BitOr for $mask {
            type Output = Self;

            #[inline(always)]
            fn bitor(self, rhs: Self) -> Self {
                Self(unsafe { $or(self.0, rhs.0) })
            }
        }

        impl BitXor for $mask {
            type Output = Self;

            #[inline(always)]
            fn bitxor(self, rhs: Self) -> Self {
                Self(unsafe { $xor(self.0, rhs.0) })
            }
        }

        impl Not for $mask {
            type Output = Self;

            #[inline(always)]
            fn not(self) -> Self {
                Self(unsafe { $xor(self.0, $dup(<$lane>::MAX)) })
            }
        }

        impl_mask_fmt!($mask);
    };
}

impl_neon_mask!(
    Mask32x4, uint32x4_t, 4, u32,
    dup: vdupq_n_u32, load: vld1q_u32, store: vst1q_u32,
    and: vandq_u32, or: vorrq_u32, xor: veorq_u32
);

impl_neon_mask!(
    Mask64x2, uint64x2_t, 2, u64,
    dup: vdupq_n_u64, load: vld1q_u64, store: vst1q_u64,
    and: vandq_u64, or: vorrq_u64, xor: veorq_u64
);
