//! Scalar types that may live in a vector lane.
//!
//! Every backend implements its lane arithmetic in terms of the operations
//! defined here (or instructions with the exact same results), which is what
//! makes the scalar backend usable as a bit-exact oracle for the wide ones.

use std::fmt::{Debug, Display};

use num::traits::AsPrimitive;
use num::{Num, NumCast};

mod sealed {
    pub trait Sealed {}
}

/// A scalar lane type.
///
/// The trait is sealed: pairing an unsupported type with a backend fails to
/// compile instead of failing at runtime. The all-zero bit pattern of every
/// implementor is its zero value, which padded memory relies on when it
/// zero-fills its buffer.
pub trait Element:
    sealed::Sealed
    + Copy
    + Default
    + Debug
    + Display
    + PartialEq
    + PartialOrd
    + Num
    + NumCast
    + Send
    + Sync
    + 'static
{
    /// Short type name used in reports (`"f32"`, `"u32"`, ...).
    const NAME: &'static str;

    /// Converts a lane index into a lane value (`3usize` becomes `3.0f32`).
    fn from_index(index: usize) -> Self;

    fn lane_add(self, rhs: Self) -> Self;
    fn lane_sub(self, rhs: Self) -> Self;
    fn lane_mul(self, rhs: Self) -> Self;

    /// Lane division. Integer division by zero yields zero so that the
    /// zero-filled pad of a container never traps.
    fn lane_div(self, rhs: Self) -> Self;

    /// `self < rhs ? self : rhs`, the operand order SIMD `min` instructions use.
    #[inline(always)]
    fn lane_min(self, rhs: Self) -> Self {
        if self < rhs {
            self
        } else {
            rhs
        }
    }

    /// `self > rhs ? self : rhs`, the operand order SIMD `max` instructions use.
    #[inline(always)]
    fn lane_max(self, rhs: Self) -> Self {
        if self > rhs {
            self
        } else {
            rhs
        }
    }
}

macro_rules! impl_float_element {
    ($($elem:ty),*) => {$(
        impl sealed::Sealed for $elem {}

        impl Element for $elem {
            const NAME: &'static str = stringify!($elem);

            #[inline(always)]
            fn from_index(index: usize) -> Self {
                index.as_()
            }

            #[inline(always)]
            fn lane_add(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline(always)]
            fn lane_sub(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline(always)]
            fn lane_mul(self, rhs: Self) -> Self {
                self * rhs
            }

            #[inline(always)]
            fn lane_div(self, rhs: Self) -> Self {
                self / rhs
            }
        }
    )*};
}

macro_rules! impl_int_element {
    ($($elem:ty),*) => {$(
        impl sealed::Sealed for $elem {}

        impl Element for $elem {
            const NAME: &'static str = stringify!($elem);

            #[inline(always)]
            fn from_index(index: usize) -> Self {
                index.as_()
            }

            #[inline(always)]
            fn lane_add(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            #[inline(always)]
            fn lane_sub(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }

            #[inline(always)]
            fn lane_mul(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }

            #[inline(always)]
            fn lane_div(self, rhs: Self) -> Self {
                if rhs == 0 {
                    0
                } else {
                    self.wrapping_div(rhs)
                }
            }
        }
    )*};
}

impl_float_element!(f32, f64);
impl_int_element!(i32, u32);
