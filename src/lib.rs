//! # simdpad
//!
//! Portable SIMD vectors paired with padded, aligned memory.
//!
//! Algorithms are written once against [`SimdVector<T>`](simd::SimdVector)
//! and [`PaddedMemory<T>`](memory::PaddedMemory); the lane count is fixed at
//! build time by the backend the build script selects (AVX2, SSE4.1, NEON or
//! the scalar fallback). Because containers are padded to whole vectors, loops
//! run over complete chunks and never need a scalar remainder loop.
//!
//! ```
//! use simdpad::prelude::*;
//!
//! let x = PaddedMemory::<f32>::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0])?;
//! let mut y = PaddedMemory::<f32>::new(x.entries_count())?;
//! for chunk in 0..x.vectors_count() {
//!     y.set_vector(chunk, x.vector(chunk) * x.vector(chunk) + 1.0);
//! }
//! assert_eq!(y.entries(), &[2.0, 5.0, 10.0, 17.0, 26.0]);
//! # Ok::<(), simdpad::error::SimdpadError>(())
//! ```
//!
//! Every SIMD backend produces bit-identical results to the scalar backend,
//! so switching the build between them (`--features scalar-backend`, or
//! `SIMDPAD_BACKEND=sse`) changes speed, never output.
//!
//! # Target CPU
//!
//! A SIMD backend is selected only when its target feature is enabled for
//! code generation, so its intrinsics inline into the loops that use them.
//! The x86 default in `.cargo/config.toml` is `-C target-cpu=native`; without
//! it (for instance when `RUSTFLAGS` overrides the config) the build falls
//! back to the scalar backend and `cargo` prints a warning naming the flag to
//! add. Binaries built this way carry the build host's features: run them on
//! another machine only after [`check_native_backend`] succeeds there.

pub mod error;
pub mod memory;
pub mod prefetch;
pub mod simd;

pub use error::{Result, SimdpadError};
pub use memory::{padded_count, PaddedMemory};
pub use simd::{check_native_backend, native_backend, Native, Vector};

/// The types and traits needed to write vectorized loops.
pub mod prelude {
    pub use crate::memory::PaddedMemory;
    pub use crate::prefetch::{
        prefetch_close, prefetch_far, prefetch_for_modify, prefetch_for_one_read, prefetch_mid,
    };
    pub use crate::simd::{
        Backend, Element, F32Vector, F64Vector, Fallback, I32Vector, LaneWidth, Native, SimdMask,
        SimdVector, U32Vector, Vector,
    };
}
