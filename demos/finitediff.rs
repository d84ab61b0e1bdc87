//! Finite Difference Demonstration
//!
//! Computes central differences of `sin(x)` on a uniform grid and compares
//! them with the analytical derivative `cos(x)`, once with a classical scalar
//! loop and once with padded vector windows. Both loops are timed.
//!
//! ```text
//! cargo run --release --example finitediff
//! RUST_LOG=simdpad=trace cargo run --release --example finitediff
//! ```

use std::time::{Duration, Instant};

use simdpad::prelude::*;
use tracing_subscriber::EnvFilter;

const N: usize = 10_240_000;
const PRINT_STEP: usize = 1_000_000;

const EPSILON: f32 = 1e-7;
const LOWER: f32 = 0.0;
const UPPER: f32 = 40_000.0;
const H: f32 = (UPPER - LOWER) / N as f32;

// The vector loop handles UNROLL vectors per iteration and issues one pair of
// prefetch hints per iteration, PREFETCH_DISTANCE vectors ahead. With four
// 4-lane f32 vectors per 64-byte cache line that is one hint per line, six
// lines ahead.
const UNROLL: usize = 4;
const PREFETCH_DISTANCE: usize = 24;

struct Grid {
    x: PaddedMemory<f32>,
    y: PaddedMemory<f32>,
    dy: PaddedMemory<f32>,
}

impl Grid {
    fn new() -> simdpad::Result<Self> {
        let mut x = PaddedMemory::<f32>::new(N)?;
        let mut y = PaddedMemory::<f32>::new(N)?;
        let dy = PaddedMemory::<f32>::new(N)?;

        let width = PaddedMemory::<f32>::WIDTH;
        let mut x_i = F32Vector::indexes_from_zero();
        for chunk in 0..x.vectors_count() {
            let xs = x_i * H;
            x.set_vector(chunk, xs);
            // No vectorized sine; apply the scalar one lane by lane.
            y.set_vector(chunk, xs.map(f32::sin));
            x_i += width as f32;
        }

        Ok(Self { x, y, dy })
    }

    fn classical(&mut self) {
        let (y, dy) = (&self.y, &mut self.dy);
        let one_over_2h = 0.5 / H;

        dy[0] = (y[1] - y[0]) / H;
        for i in 1..N - 1 {
            dy[i] = (y[i + 1] - y[i - 1]) * one_over_2h;
        }
        dy[N - 1] = (y[N - 1] - y[N - 2]) / H;
    }

    fn vectorized(&mut self) {
        let (y, dy) = (&self.y, &mut self.dy);
        let width = PaddedMemory::<f32>::WIDTH;
        let one_over_2h = F32Vector::splat(0.5 / H);

        dy[0] = (y[1] - y[0]) / H;

        // y  [...................................]
        //     00001111222233334444555566667777
        //       00001111222233334444555566667777
        // dy [...................................]
        //      00001111222233334444555566667777
        let interior = (y.padded_count() - 2) / width;
        let unrolled = interior - interior % UNROLL;
        for i in (0..unrolled).step_by(UNROLL) {
            let ahead = (i + PREFETCH_DISTANCE) * width;
            prefetch_for_one_read(y.as_ptr().wrapping_add(ahead));
            prefetch_for_modify(dy.as_ptr().wrapping_add(ahead));

            let diff0 = y.vector_shifted(i, 2) - y.vector(i);
            let diff1 = y.vector_shifted(i + 1, 2) - y.vector(i + 1);
            let diff2 = y.vector_shifted(i + 2, 2) - y.vector(i + 2);
            let diff3 = y.vector_shifted(i + 3, 2) - y.vector(i + 3);
            dy.set_vector_shifted(i, 1, diff0 * one_over_2h);
            dy.set_vector_shifted(i + 1, 1, diff1 * one_over_2h);
            dy.set_vector_shifted(i + 2, 1, diff2 * one_over_2h);
            dy.set_vector_shifted(i + 3, 1, diff3 * one_over_2h);
        }
        for i in unrolled..interior {
            let diff = y.vector_shifted(i, 2) - y.vector(i);
            dy.set_vector_shifted(i, 1, diff * one_over_2h);
        }

        // The last entry of y sits inside the last vector whatever N is; the
        // lanes past it read zero pad and are overwritten by the border below.
        // y  [...................................]
        //                                  8888
        //                                    8888
        // dy [...................................]
        //                                   8888
        let last = y.vectors_count() - 1;
        let left = y.vector_shifted(last, -2);
        let right = y.last_vector();
        dy.set_vector_shifted(last, -1, (right - left) * one_over_2h);

        dy[N - 1] = (y[N - 1] - y[N - 2]) / H;
    }

    fn print_row(&self, i: usize) {
        let exact = self.x[i].cos();
        let error = ((self.dy[i] - exact) / (self.x[i] + EPSILON).cos() * 100.0).abs();
        println!(
            "{:>15}{:>15}{:>15}{:>15}",
            self.y[i], self.dy[i], exact, error
        );
    }

    fn print_results(&self) {
        println!("------------------------------------------------------------");
        println!(
            "{:>15}{:>15}{:>15}{:>15}",
            "fu(x_i)", "FD fu'(x_i)", "SYM fu'(x)", "error %"
        );
        for i in (0..N).step_by(PRINT_STEP) {
            self.print_row(i);
        }
        self.print_row(N - 1);
    }
}

fn timed(f: impl FnOnce()) -> Duration {
    let start = Instant::now();
    f();
    start.elapsed()
}

fn main() -> simdpad::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    simdpad::check_native_backend()?;
    println!(
        "backend: {} ({} f32 lanes)",
        simdpad::native_backend(),
        PaddedMemory::<f32>::WIDTH
    );

    let mut grid = Grid::new()?;

    // Warm-up run, not timed.
    grid.classical();

    println!("\n{:>60}", "Classical finite difference method");
    let classical = timed(|| grid.classical());
    grid.print_results();
    println!("time: {classical:?}");

    println!("{:>60}", "Vectorized finite difference method");
    let vectorized = timed(|| grid.vectorized());
    grid.print_results();
    println!("time: {vectorized:?}");

    println!(
        "Speedup: {:.3}",
        classical.as_secs_f64() / vectorized.as_secs_f64()
    );

    Ok(())
}
