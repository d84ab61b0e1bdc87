//! Every compiled SIMD backend against the scalar backend.
//!
//! The scalar backend is the reference: a SIMD backend must reproduce its
//! result bit for bit, for every lane, on random data mixed with the special
//! values (signed zeros, NaN, infinities, zero divisors, extreme integers).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simdpad::prelude::*;

const LEN: usize = 1024;

// Same value, including the sign of zero; any NaN matches any NaN.
#[allow(clippy::eq_op)]
fn same_lane<T: Element>(got: T, want: T) -> bool {
    let both_nan = got != got && want != want;
    both_nan || (got == want && format!("{got:?}") == format!("{want:?}"))
}

fn oracle<T: Element>(value: T) -> Vector<T, Fallback>
where
    Fallback: LaneWidth<T>,
{
    Vector::<T, Fallback>::splat(value)
}

fn check_against_scalar<T, B>(a: &[T], b: &[T])
where
    T: Element,
    B: LaneWidth<T>,
    Fallback: LaneWidth<T>,
{
    let width = B::WIDTH;
    let ops = ["add", "sub", "mul", "div", "min", "max", "select"];

    for (ca, cb) in a.chunks_exact(width).zip(b.chunks_exact(width)) {
        let va = Vector::<T, B>::from_slice(ca);
        let vb = Vector::<T, B>::from_slice(cb);
        let results = [
            va + vb,
            va - vb,
            va * vb,
            va / vb,
            va.min(vb),
            va.max(vb),
            Vector::<T, B>::select(va.simd_lt(vb), va, vb),
        ];
        let masks = [
            va.simd_eq(vb),
            va.simd_ne(vb),
            va.simd_lt(vb),
            va.simd_le(vb),
            va.simd_gt(vb),
            va.simd_ge(vb),
        ];

        for lane in 0..width {
            let (sa, sb) = (oracle(ca[lane]), oracle(cb[lane]));
            let expected = [
                sa + sb,
                sa - sb,
                sa * sb,
                sa / sb,
                sa.min(sb),
                sa.max(sb),
                Vector::<T, Fallback>::select(sa.simd_lt(sb), sa, sb),
            ];
            let expected_masks = [
                sa.simd_eq(sb),
                sa.simd_ne(sb),
                sa.simd_lt(sb),
                sa.simd_le(sb),
                sa.simd_gt(sb),
                sa.simd_ge(sb),
            ];

            for ((name, got), want) in ops.iter().zip(results.iter()).zip(expected.iter()) {
                let (got, want) = (got.extract(lane), want.extract(0));
                assert!(
                    same_lane(got, want),
                    "{} {} {name}({:?}, {:?}) lane {lane}: got {got:?}, want {want:?}",
                    B::NAME,
                    T::NAME,
                    ca[lane],
                    cb[lane]
                );
            }
            for (index, (got, want)) in masks.iter().zip(expected_masks.iter()).enumerate() {
                assert_eq!(
                    got.test(lane),
                    want.test(0),
                    "{} {} compare #{index}({:?}, {:?}) lane {lane}",
                    B::NAME,
                    T::NAME,
                    ca[lane],
                    cb[lane]
                );
            }
        }

        let fold = |combine: fn(Vector<T, Fallback>, Vector<T, Fallback>) -> Vector<T, Fallback>| {
            ca[1..]
                .iter()
                .fold(oracle(ca[0]), |acc, &x| combine(acc, oracle(x)))
                .extract(0)
        };
        assert!(same_lane(va.reduce_sum(), fold(|x, y| x + y)));
        assert!(same_lane(va.reduce_min(), fold(|x, y| x.min(y))));
        assert!(same_lane(va.reduce_max(), fold(|x, y| x.max(y))));
    }
}

fn random_lanes<T: Element>(rng: &mut StdRng, specials: &[T], sample: fn(&mut StdRng) -> T) -> Vec<T> {
    (0..LEN)
        .map(|_| {
            if rng.random_bool(0.1) {
                specials[rng.random_range(0..specials.len())]
            } else {
                sample(rng)
            }
        })
        .collect()
}

fn check_backend<B>(seed: u64)
where
    B: LaneWidth<f32> + LaneWidth<f64> + LaneWidth<i32> + LaneWidth<u32>,
{
    let mut rng = StdRng::seed_from_u64(seed);

    let f32_specials = [0.0, -0.0, 1.0, f32::NAN, f32::INFINITY, f32::NEG_INFINITY, f32::MIN_POSITIVE];
    let a = random_lanes(&mut rng, &f32_specials, |rng| rng.random_range(-1000.0f32..1000.0));
    let b = random_lanes(&mut rng, &f32_specials, |rng| rng.random_range(-1000.0f32..1000.0));
    check_against_scalar::<f32, B>(&a, &b);

    let f64_specials = [0.0, -0.0, 1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY, f64::EPSILON];
    let a = random_lanes(&mut rng, &f64_specials, |rng| rng.random_range(-1.0e6f64..1.0e6));
    let b = random_lanes(&mut rng, &f64_specials, |rng| rng.random_range(-1.0e6f64..1.0e6));
    check_against_scalar::<f64, B>(&a, &b);

    let i32_specials = [0, 1, -1, i32::MIN, i32::MAX];
    let a = random_lanes(&mut rng, &i32_specials, |rng| rng.random::<i32>());
    let b = random_lanes(&mut rng, &i32_specials, |rng| rng.random_range(-100..100));
    check_against_scalar::<i32, B>(&a, &b);

    let u32_specials = [0, 1, u32::MAX, 1 << 31];
    let a = random_lanes(&mut rng, &u32_specials, |rng| rng.random::<u32>());
    let b = random_lanes(&mut rng, &u32_specials, |rng| rng.random::<u32>() >> rng.random_range(0..32u32));
    check_against_scalar::<u32, B>(&a, &b);
}

#[test]
fn test_native_matches_scalar() {
    check_backend::<Native>(12345);
}

#[cfg(all(sse, any(target_arch = "x86", target_arch = "x86_64")))]
#[test]
fn test_sse_matches_scalar() {
    use simdpad::simd::sse::Sse41;

    if !Sse41::is_available() {
        return;
    }
    for seed in 0..8 {
        check_backend::<Sse41>(seed);
    }
}

#[cfg(all(avx2, any(target_arch = "x86", target_arch = "x86_64")))]
#[test]
fn test_avx2_matches_scalar() {
    use simdpad::simd::avx2::Avx2;

    if !Avx2::is_available() {
        return;
    }
    for seed in 0..8 {
        check_backend::<Avx2>(seed);
    }
}

#[cfg(all(neon, target_arch = "aarch64"))]
#[test]
fn test_neon_matches_scalar() {
    use simdpad::simd::neon::Neon;

    for seed in 0..8 {
        check_backend::<Neon>(seed);
    }
}

#[test]
fn test_map_applies_callable_per_lane() {
    let mut rng = StdRng::seed_from_u64(7);
    let data: Vec<f32> = (0..LEN).map(|_| rng.random_range(-10.0f32..10.0)).collect();
    let width = <Native as LaneWidth<f32>>::WIDTH;

    for chunk in data.chunks_exact(width) {
        let sines = F32Vector::from_slice(chunk).map(f32::sin).to_vec();
        let expected: Vec<f32> = chunk.iter().map(|x| x.sin()).collect();
        assert_eq!(sines, expected);
    }
}
