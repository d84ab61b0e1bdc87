//! Lane-width polymorphic vectors and their hardware backends.
//!
//! A backend is a zero-sized marker type implementing [`LaneWidth<T>`] for
//! every supported element type. It names the vector type used for that
//! element, and with it the lane count and the alignment vector loads and
//! stores require:
//!
//! | Backend              | f32 | f64 | i32 | u32 | Alignment         |
//! |----------------------|-----|-----|-----|-----|-------------------|
//! | [`scalar::Fallback`] | 1   | 1   | 1   | 1   | `align_of::<T>()` |
//! | `sse::Sse41`         | 4   | 2   | 4   | 4   | 16                |
//! | `avx2::Avx2`         | 8   | 4   | 8   | 8   | 32                |
//! | `neon::Neon`         | 4   | 2   | 4   | 4   | 16                |
//!
//! The build script picks one of them as [`Native`]. Code written against
//! [`Vector<T>`] and [`PaddedMemory<T>`](crate::memory::PaddedMemory) follows
//! that choice without modification; naming a backend explicitly
//! (`PaddedMemory<f32, Fallback>`) pins it instead.
//!
//! # Conditional Compilation
//!
//! The SIMD modules are compiled only when the build script reports the
//! matching capability (`sse`, `avx2`, `neon` cfgs). The scalar backend is
//! always present and doubles as the reference every other backend is tested
//! against.

// Operator boilerplate shared by every concrete vector type: compound
// assignment, and arithmetic with a broadcast scalar on either side.
macro_rules! impl_derived_ops {
    ($vector:ty, $elem:ty) => {
        impl_derived_ops!(@op $vector, $elem, Add, add, AddAssign, add_assign);
        impl_derived_ops!(@op $vector, $elem, Sub, sub, SubAssign, sub_assign);
        impl_derived_ops!(@op $vector, $elem, Mul, mul, MulAssign, mul_assign);
        impl_derived_ops!(@op $vector, $elem, Div, div, DivAssign, div_assign);
    };
    (@op $vector:ty, $elem:ty, $op:ident, $method:ident, $assign:ident, $assign_method:ident) => {
        impl ::core::ops::$op<$elem> for $vector {
            type Output = $vector;

            #[inline(always)]
            fn $method(self, rhs: $elem) -> $vector {
                ::core::ops::$op::$method(
                    self,
                    <$vector as $crate::simd::SimdVector<$elem>>::splat(rhs),
                )
            }
        }

        impl ::core::ops::$op<$vector> for $elem {
            type Output = $vector;

            #[inline(always)]
            fn $method(self, rhs: $vector) -> $vector {
                ::core::ops::$op::$method(
                    <$vector as $crate::simd::SimdVector<$elem>>::splat(self),
                    rhs,
                )
            }
        }

        impl ::core::ops::$assign for $vector {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: $vector) {
                *self = ::core::ops::$op::$method(*self, rhs);
            }
        }

        impl ::core::ops::$assign<$elem> for $vector {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: $elem) {
                *self = ::core::ops::$op::$method(*self, rhs);
            }
        }
    };
}

// Debug and PartialEq through the lane array, for register-backed types.
macro_rules! impl_lane_fmt {
    ($vector:ty) => {
        impl ::core::fmt::Debug for $vector {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.debug_list().entries(self.to_array().iter()).finish()
            }
        }

        impl ::core::cmp::PartialEq for $vector {
            #[inline(always)]
            fn eq(&self, other: &Self) -> bool {
                self.to_array() == other.to_array()
            }
        }
    };
}

// Debug and PartialEq of register-backed masks.
macro_rules! impl_mask_fmt {
    ($mask:ty) => {
        impl ::core::fmt::Debug for $mask {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                let lanes = <$mask as $crate::simd::SimdMask>::LANES;
                f.debug_list()
                    .entries((0..lanes).map(|lane| $crate::simd::SimdMask::test(*self, lane)))
                    .finish()
            }
        }

        impl ::core::cmp::PartialEq for $mask {
            #[inline(always)]
            fn eq(&self, other: &Self) -> bool {
                $crate::simd::SimdMask::to_bitmask(*self)
                    == $crate::simd::SimdMask::to_bitmask(*other)
            }
        }
    };
}

pub mod element;
pub mod scalar;
pub mod traits;

#[cfg(all(avx2, any(target_arch = "x86", target_arch = "x86_64")))]
#[allow(unused_unsafe)]
pub mod avx2;

#[cfg(all(sse, any(target_arch = "x86", target_arch = "x86_64")))]
#[allow(unused_unsafe)]
pub mod sse;

#[cfg(all(neon, target_arch = "aarch64"))]
#[allow(unused_unsafe)]
pub mod neon;

use std::fmt::Debug;

use crate::error::{unsupported_backend, Result};

pub use element::Element;
pub use scalar::Fallback;
pub use traits::{SimdMask, SimdVector};

/// A hardware capability level.
pub trait Backend: Copy + Default + Debug + Send + Sync + 'static {
    /// Backend name as accepted by the `SIMDPAD_BACKEND` build variable.
    const NAME: &'static str;

    /// Whether the running CPU can execute this backend's instructions.
    fn is_available() -> bool;
}

/// Vector geometry of element type `T` on a backend.
pub trait LaneWidth<T: Element>: Backend {
    /// The vector type holding `T` lanes on this backend.
    type Vector: SimdVector<T>;

    /// Lanes per vector.
    const WIDTH: usize = <Self::Vector as SimdVector<T>>::LANES;

    /// Byte alignment of vector loads and stores. Always divides
    /// `WIDTH * size_of::<T>()`, so consecutive chunks stay aligned.
    const ALIGNMENT: usize = <Self::Vector as SimdVector<T>>::ALIGNMENT;
}

/// The backend selected at build time.
///
/// Only a backend whose target feature the compiler was told to use can be
/// selected (`-C target-cpu=native`, `-C target-feature=+avx2`, or the x86
/// default in `.cargo/config.toml`); its intrinsics then inline into the
/// caller. The resulting binary needs a CPU with the same features, see
/// [`check_native_backend`].
#[cfg(all(
    backend = "avx2",
    avx2,
    target_feature = "avx2",
    any(target_arch = "x86", target_arch = "x86_64")
))]
pub type Native = avx2::Avx2;

/// The backend selected at build time.
#[cfg(all(
    backend = "sse",
    sse,
    target_feature = "sse4.1",
    any(target_arch = "x86", target_arch = "x86_64")
))]
pub type Native = sse::Sse41;

/// The backend selected at build time.
#[cfg(all(backend = "neon", neon, target_feature = "neon", target_arch = "aarch64"))]
pub type Native = neon::Neon;

/// The backend selected at build time.
#[cfg(not(any(
    all(backend = "avx2", avx2, target_feature = "avx2", any(target_arch = "x86", target_arch = "x86_64")),
    all(backend = "sse", sse, target_feature = "sse4.1", any(target_arch = "x86", target_arch = "x86_64")),
    all(backend = "neon", neon, target_feature = "neon", target_arch = "aarch64"),
)))]
pub type Native = scalar::Fallback;

/// Vector of `T` on backend `B` (the build-time selection by default).
pub type Vector<T, B = Native> = <B as LaneWidth<T>>::Vector;

pub type F32Vector = Vector<f32>;
pub type F64Vector = Vector<f64>;
pub type I32Vector = Vector<i32>;
pub type U32Vector = Vector<u32>;

/// Name of the backend selected at build time.
pub fn native_backend() -> &'static str {
    <Native as Backend>::NAME
}

/// Fails with [`UnsupportedBackend`] when the running CPU lacks the
/// instructions [`Native`] was compiled for.
///
/// [`UnsupportedBackend`]: crate::error::SimdpadError::UnsupportedBackend
///
/// A binary built with `-C target-cpu=native` embeds the build host's
/// features; entry points should call this before touching vectors.
pub fn check_native_backend() -> Result<()> {
    ensure_available::<Native>()
}

pub(crate) fn ensure_available<B: Backend>() -> Result<()> {
    if B::is_available() {
        Ok(())
    } else {
        tracing::error!(backend = B::NAME, "backend not supported by this CPU");
        Err(unsupported_backend(B::NAME))
    }
}

/// Names of every backend compiled into this build, widest first.
pub fn compiled_backends() -> Vec<&'static str> {
    let mut names = Vec::new();
    #[cfg(all(avx2, any(target_arch = "x86", target_arch = "x86_64")))]
    names.push(<avx2::Avx2 as Backend>::NAME);
    #[cfg(all(sse, any(target_arch = "x86", target_arch = "x86_64")))]
    names.push(<sse::Sse41 as Backend>::NAME);
    #[cfg(all(neon, target_arch = "aarch64"))]
    names.push(<neon::Neon as Backend>::NAME);
    names.push(<scalar::Fallback as Backend>::NAME);
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_geometry<T: Element, B: LaneWidth<T>>() {
        assert!(B::WIDTH.is_power_of_two());
        assert!(B::ALIGNMENT.is_power_of_two());
        assert_eq!((B::WIDTH * std::mem::size_of::<T>()) % B::ALIGNMENT, 0);
    }

    #[test]
    fn test_native_geometry() {
        assert_geometry::<f32, Native>();
        assert_geometry::<f64, Native>();
        assert_geometry::<i32, Native>();
        assert_geometry::<u32, Native>();
    }

    #[test]
    fn test_native_is_available() {
        assert!(Native::is_available());
        assert!(compiled_backends().contains(&native_backend()));
        assert_eq!(compiled_backends().last(), Some(&"scalar"));
    }

    #[test]
    fn test_native_backend_is_a_codegen_target_feature() {
        // A SIMD backend without its target feature would run every
        // intrinsic as a call.
        match native_backend() {
            "avx2" => assert!(cfg!(target_feature = "avx2")),
            "sse" => assert!(cfg!(target_feature = "sse4.1")),
            "neon" => assert!(cfg!(target_feature = "neon")),
            name => assert_eq!(name, "scalar"),
        }
    }

    #[test]
    fn test_check_native_backend() {
        assert_eq!(check_native_backend(), Ok(()));
        assert_eq!(ensure_available::<Fallback>(), Ok(()));
    }

    #[test]
    fn test_native_vector_alias() {
        let v = F32Vector::splat(2.0) * F32Vector::indexes_from_zero();
        for lane in 0..<Native as LaneWidth<f32>>::WIDTH {
            assert_eq!(v.extract(lane), 2.0 * lane as f32);
        }
    }
}
