//! Prints the SIMD backend this build selected and the vector geometry of
//! every element type on it.
//!
//! ```text
//! RUST_LOG=simdpad=trace cargo run --release
//! ```

use simdpad::prelude::*;
use simdpad::simd::compiled_backends;
use tracing_subscriber::EnvFilter;

fn geometry_row<T: Element>() -> String
where
    Native: LaneWidth<T>,
{
    format!(
        "  {:<4} {:>5} lanes  {:>3}-byte alignment",
        T::NAME,
        <Native as LaneWidth<T>>::WIDTH,
        <Native as LaneWidth<T>>::ALIGNMENT
    )
}

fn runtime_support(name: &str) -> bool {
    match name {
        #[cfg(all(avx2, any(target_arch = "x86", target_arch = "x86_64")))]
        "avx2" => simdpad::simd::avx2::Avx2::is_available(),
        #[cfg(all(sse, any(target_arch = "x86", target_arch = "x86_64")))]
        "sse" => simdpad::simd::sse::Sse41::is_available(),
        #[cfg(all(neon, target_arch = "aarch64"))]
        "neon" => simdpad::simd::neon::Neon::is_available(),
        _ => Fallback::is_available(),
    }
}

fn main() -> simdpad::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("selected backend: {}", simdpad::native_backend());
    println!("compiled backends: {}", compiled_backends().join(", "));
    for name in compiled_backends() {
        println!("  {name:<6} runtime support: {}", runtime_support(name));
    }
    simdpad::check_native_backend()?;
    println!();
    println!("vector geometry:");
    println!("{}", geometry_row::<f32>());
    println!("{}", geometry_row::<f64>());
    println!("{}", geometry_row::<i32>());
    println!("{}", geometry_row::<u32>());

    let memory = PaddedMemory::<f32>::new(10)?;
    println!();
    println!(
        "PaddedMemory<f32> of {} entries: {} padded entries in {} vectors",
        memory.entries_count(),
        memory.padded_count(),
        memory.vectors_count()
    );

    Ok(())
}
