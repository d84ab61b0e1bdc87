//! AVX2 SIMD backend for 256-bit vector operations.
//!
//! AVX2 is available on most Intel processors since Haswell (2013) and AMD
//! processors since Excavator (2015).
//!
//! # Architecture Requirements
//!
//! - **CPU Support**: Intel Haswell (2013+) or AMD Excavator (2015+)
//! - **Target Architecture**: x86 or x86_64
//! - **Runtime Detection**: The build script compiles this module only when
//!   AVX2 is detected or statically enabled
//!
//! # Available Types
//!
//! | Element | Vector    | Mask         |
//! |---------|-----------|--------------|
//! | `f32`   | [`F32x8`] | [`Mask32x8`] |
//! | `f64`   | [`F64x4`] | [`Mask64x4`] |
//! | `i32`   | [`I32x8`] | [`Mask32x8`] |
//! | `u32`   | [`U32x8`] | [`Mask32x8`] |
//!
//! # Performance Characteristics
//!
//! - **Vector Width**: 256 bits (8 × f32, 4 × f64, 8 × i32/u32)
//! - **Memory Alignment**: 32-byte aligned data for the aligned loads and
//!   stores [`PaddedMemory`](crate::memory::PaddedMemory) issues
//! - **Division**: native for floats; integer lanes are divided one by one

pub mod float;
pub mod int;
pub mod mask;

pub use float::{F32x8, F64x4};
pub use int::{I32x8, U32x8};
pub use mask::{Mask32x8, Mask64x4};

use crate::simd::{Backend, LaneWidth};

/// AVX memory alignment requirement in bytes.
pub(crate) const AVX_ALIGNMENT: usize = 32;

/// Marker type of the AVX2 backend.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Avx2;

impl Backend for Avx2 {
    const NAME: &'static str = "avx2";

    #[inline]
    fn is_available() -> bool {
        std::arch::is_x86_feature_detected!("avx2")
    }
}

impl LaneWidth<f32> for Avx2 {
    type Vector = F32x8;
}

impl LaneWidth<f64> for Avx2 {
    type Vector = F64x4;
}

impl LaneWidth<i32> for Avx2 {
    type Vector = I32x8;
}

impl LaneWidth<u32> for Avx2 {
    type Vector = U32x8;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::{SimdMask, SimdVector};

    #[test]
    fn test_geometry() {
        assert_eq!(<Avx2 as LaneWidth<f32>>::WIDTH, 8);
        assert_eq!(<Avx2 as LaneWidth<f64>>::WIDTH, 4);
        assert_eq!(<Avx2 as LaneWidth<i32>>::WIDTH, 8);
        assert_eq!(<Avx2 as LaneWidth<f32>>::ALIGNMENT, 32);
    }

    #[test]
    fn test_f32x8_arithmetic() {
        if !Avx2::is_available() {
            return;
        }

        let a = F32x8::indexes_from_zero();
        let b = F32x8::splat(0.5);
        assert_eq!((a + b).to_array(), [0.5, 1.5, 2.5, 3.5, 4.5, 5.5, 6.5, 7.5]);
        assert_eq!((a - b).extract(7), 6.5);
        assert_eq!((a * 4.0f32).to_array(), [0.0, 4.0, 8.0, 12.0, 16.0, 20.0, 24.0, 28.0]);
        assert_eq!((a / b).extract(3), 6.0);
        assert_eq!(a.reduce_sum(), 28.0);
        assert_eq!(a.reduce_max(), 7.0);
    }

    #[test]
    fn test_f32x8_compare_and_select() {
        if !Avx2::is_available() {
            return;
        }

        let a = F32x8::indexes_from_zero();
        let mut b = F32x8::splat(3.0);
        b.replace(0, f32::NAN);

        assert_eq!(a.simd_lt(b).to_bitmask(), 0b0000_0110);
        assert_eq!(a.simd_le(b).to_bitmask(), 0b0000_1110);
        assert_eq!(a.simd_eq(b).to_bitmask(), 0b0000_1000);
        assert_eq!(a.simd_ne(b).to_bitmask(), 0b1111_0111);
        assert_eq!(a.simd_gt(b).to_bitmask(), 0b1111_0000);
        assert_eq!(a.simd_ge(b).to_bitmask(), 0b1111_1000);

        let mut c = a;
        c.masked_assign(a.simd_gt(b), F32x8::zero());
        assert_eq!(c.to_array(), [0.0, 1.0, 2.0, 3.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_f64x4_basics() {
        if !Avx2::is_available() {
            return;
        }

        let a = F64x4::from_array([1.0, -2.0, 3.0, -4.0]);
        let b = F64x4::zero();
        assert_eq!(a.max(b).to_array(), [1.0, 0.0, 3.0, 0.0]);
        assert_eq!(a.min(b).to_array(), [0.0, -2.0, 0.0, -4.0]);
        assert_eq!(a.simd_lt(b).to_bitmask(), 0b1010);
        assert_eq!((1.0f64 - a).to_array(), [0.0, 3.0, -2.0, 5.0]);
    }

    #[test]
    fn test_int_vectors() {
        if !Avx2::is_available() {
            return;
        }

        let a = I32x8::from_fn(|i| i as i32 - 4);
        assert_eq!(a.simd_lt(I32x8::zero()).to_bitmask(), 0b0000_1111);
        assert_eq!((a / I32x8::splat(2)).to_array(), [-2, -1, -1, 0, 0, 0, 1, 1]);
        assert_eq!((a * a).reduce_sum(), 44);

        let u = U32x8::from_array([0, 1, 2, 3, u32::MAX, u32::MAX - 1, 100, 5]);
        let threshold = U32x8::splat(3);
        assert_eq!(u.simd_gt(threshold).to_bitmask(), 0b1111_0000);
        assert_eq!(u.simd_le(threshold).to_bitmask(), 0b0000_1111);
        assert_eq!(u.min(threshold).to_array(), [0, 1, 2, 3, 3, 3, 3, 3]);
        assert_eq!((u + 1u32).extract(4), 0);
        assert_eq!((u / U32x8::zero()).to_array(), [0; 8]);
    }

    #[test]
    fn test_masks() {
        if !Avx2::is_available() {
            return;
        }

        let m = Mask32x8::from_fn(|lane| lane < 3);
        assert_eq!(m.to_bitmask(), 0b0000_0111);
        assert_eq!(m.count(), 3);
        assert!(m.any() && !m.all());
        assert_eq!((m ^ Mask32x8::splat(true)).to_bitmask(), 0b1111_1000);

        let d = Mask64x4::from_fn(|lane| lane == 3);
        assert_eq!(d.to_bitmask(), 0b1000);
        assert!((!d).test(0));
    }
}
