//! SSE4.1 SIMD backend for 128-bit vector operations.
//!
//! # Architecture Requirements
//!
//! - **CPU Support**: Intel Penryn (2007+) or AMD Bulldozer (2011+)
//! - **Target Architecture**: x86 or x86_64
//! - **Runtime Detection**: The build script compiles this module only when
//!   SSE4.1 is detected or statically enabled
//!
//! # Available Types
//!
//! | Element | Vector    | Mask       |
//! |---------|-----------|------------|
//! | `f32`   | [`F32x4`] | [`Mask32x4`] |
//! | `f64`   | [`F64x2`] | [`Mask64x2`] |
//! | `i32`   | [`I32x4`] | [`Mask32x4`] |
//! | `u32`   | [`U32x4`] | [`Mask32x4`] |
//!
//! All vectors are 16 bytes wide and require 16-byte alignment for
//! [`SimdVector::load_aligned`](crate::simd::SimdVector::load_aligned).
//! SSE4.1 (rather than the SSE2 baseline) supplies the blend, 32-bit multiply
//! and 32-bit min/max instructions the vectors are built on.

pub mod float;
pub mod int;
pub mod mask;

pub use float::{F32x4, F64x2};
pub use int::{I32x4, U32x4};
pub use mask::{Mask32x4, Mask64x2};

use crate::simd::{Backend, LaneWidth};

/// SSE memory alignment requirement in bytes.
pub(crate) const SSE_ALIGNMENT: usize = 16;

/// Marker type of the SSE4.1 backend.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Sse41;

impl Backend for Sse41 {
    const NAME: &'static str = "sse";

    #[inline]
    fn is_available() -> bool {
        std::arch::is_x86_feature_detected!("sse4.1")
    }
}

impl LaneWidth<f32> for Sse41 {
    type Vector = F32x4;
}

impl LaneWidth<f64> for Sse41 {
    type Vector = F64x2;
}

impl LaneWidth<i32> for Sse41 {
    type Vector = I32x4;
}

impl LaneWidth<u32> for Sse41 {
    type Vector = U32x4;
}
