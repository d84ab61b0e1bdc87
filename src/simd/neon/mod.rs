//! ARM NEON SIMD backend for 128-bit vector operations.
//!
//! NEON is mandatory on AArch64, so this module is compiled for every 64-bit
//! ARM target: Apple Silicon, AWS Graviton, modern Android and iOS devices.
//!
//! # Available Types
//!
//! | Element | Vector    | Mask         |
//! |---------|-----------|--------------|
//! | `f32`   | [`F32x4`] | [`Mask32x4`] |
//! | `f64`   | [`F64x2`] | [`Mask64x2`] |
//! | `i32`   | [`I32x4`] | [`Mask32x4`] |
//! | `u32`   | [`U32x4`] | [`Mask32x4`] |
//!
//! NEON loads and stores have no alignment requirement; the backend still
//! reports 16 bytes so that padded containers are laid out the same way as
//! on SSE.

pub mod float;
pub mod int;
pub mod mask;

pub use float::{F32x4, F64x2};
pub use int::{I32x4, U32x4};
pub use mask::{Mask32x4, Mask64x2};

use crate::simd::{Backend, LaneWidth};

/// NEON memory alignment in bytes.
pub(crate) const NEON_ALIGNMENT: usize = 16;

/// Marker type of the NEON backend.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Neon;

impl Backend for Neon {
    const NAME: &'static str = "neon";

    #[inline]
    fn is_available() -> bool {
        std::arch::is_aarch64_feature_detected!("neon")
    }
}

impl LaneWidth<f32> for Neon {
    type Vector = F32x4;
}

impl LaneWidth<f64> for Neon {
    type Vector = F64x2;
}

impl LaneWidth<i32> for Neon {
    type Vector = I32x4;
}

impl LaneWidth<u32> for Neon {
    type Vector = U32x4;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::{SimdMask, SimdVector};

    #[test]
    fn test_geometry() {
        assert!(Neon::is_available());
        assert_eq!(<Neon as LaneWidth<f32>>::WIDTH, 4);
        assert_eq!(<Neon as LaneWidth<f64>>::WIDTH, 2);
        assert_eq!(<Neon as LaneWidth<i32>>::ALIGNMENT, 16);
    }

    #[test]
    fn test_f32x4_basics() {
        let idx = F32x4::indexes_from_zero();
        let v = idx * 2.0f32 + 1.0f32;
        assert_eq!(v.to_array(), [1.0, 3.0, 5.0, 7.0]);
        assert_eq!(v.reduce_sum(), 16.0);
        assert_eq!(v.simd_ge(F32x4::splat(5.0)).to_bitmask(), 0b1100);
        assert_eq!((v / idx).extract(0), f32::INFINITY);
    }

    #[test]
    fn test_min_max_match_x86_on_nan() {
        let a = F32x4::from_array([f32::NAN, 1.0, 0.0, 2.0]);
        let b = F32x4::from_array([1.0, f32::NAN, -0.0, 3.0]);

        let min = a.min(b).to_array();
        assert_eq!(min[0], 1.0);
        assert!(min[1].is_nan());
        assert!(min[2].is_sign_negative());
        assert_eq!(min[3], 2.0);

        let max = a.max(b).to_array();
        assert_eq!(max[0], 1.0);
        assert!(max[1].is_nan());
        assert_eq!(max[3], 3.0);
    }

    #[test]
    fn test_f64x2_compare_nan() {
        let a = F64x2::from_array([f64::NAN, 1.0]);
        let b = F64x2::splat(1.0);
        assert_eq!(a.simd_eq(b).to_bitmask(), 0b10);
        assert_eq!(a.simd_ne(b).to_bitmask(), 0b01);
        assert_eq!(F64x2::select(a.simd_eq(b), b, F64x2::zero()).to_array(), [0.0, 1.0]);
    }

    #[test]
    fn test_int_vectors() {
        let a = I32x4::from_array([i32::MAX, -5, 6, 0]);
        assert_eq!((a + 1i32).to_array(), [i32::MIN, -4, 7, 1]);
        assert_eq!(a.simd_lt(I32x4::zero()).to_bitmask(), 0b0010);
        assert_eq!((a / I32x4::from_array([1, 2, 0, 3])).to_array(), [i32::MAX, -2, 0, 0]);

        let u = U32x4::from_array([0, 1, u32::MAX, 7]);
        assert_eq!(u.simd_lt(U32x4::splat(2)).to_bitmask(), 0b0011);
        assert_eq!(u.max(U32x4::splat(2)).to_array(), [2, 2, u32::MAX, 7]);
    }

    #[test]
    fn test_masks() {
        let m = Mask32x4::from_fn(|lane| lane % 2 == 1);
        assert_eq!(m.to_bitmask(), 0b1010);
        assert_eq!((!m).to_bitmask(), 0b0101);
        assert!((m ^ m).none());
        assert!(Mask64x2::splat(true).all());
        assert_eq!((!Mask64x2::splat(true)).to_bitmask(), 0);
    }
}
