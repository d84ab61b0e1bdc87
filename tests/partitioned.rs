//! Multi-threaded use of `PaddedMemory` through caller-side partitioning.
//!
//! The container has no locking of its own; threads work on disjoint,
//! vector-aligned ranges of the padded buffer.

use rayon::prelude::*;
use simdpad::prelude::*;

const VECTORS_PER_BLOCK: usize = 4;

fn ramp(chunk: usize, width: usize) -> F32Vector {
    (F32Vector::indexes_from_zero() + (chunk * width) as f32) * 0.5f32
}

#[test]
fn test_parallel_writes_equal_sequential_writes() {
    let width = PaddedMemory::<f32>::WIDTH;

    for n in [0, 1, 7, 100, 1001, 65_537] {
        let mut parallel = PaddedMemory::<f32>::new(n).unwrap();
        parallel
            .padded_entries_mut()
            .par_chunks_mut(VECTORS_PER_BLOCK * width)
            .enumerate()
            .for_each(|(block, lanes)| {
                for (k, vector_lanes) in lanes.chunks_exact_mut(width).enumerate() {
                    ramp(block * VECTORS_PER_BLOCK + k, width).write_to_slice(vector_lanes);
                }
            });

        let mut sequential = PaddedMemory::<f32>::new(n).unwrap();
        sequential.update_vectors(|chunk, _| ramp(chunk, width));

        assert_eq!(parallel.padded_entries(), sequential.padded_entries(), "n = {n}");
    }
}

#[test]
fn test_shared_reads_across_threads() {
    let data: Vec<u32> = (0..10_000).collect();
    let memory = PaddedMemory::<u32>::from_slice(&data).unwrap();

    let parallel: Vec<u32> = (0..memory.vectors_count())
        .into_par_iter()
        .map(|chunk| memory.vector(chunk).reduce_max())
        .collect();
    let sequential: Vec<u32> = memory.vectors().map(|v| v.reduce_max()).collect();

    assert_eq!(parallel, sequential);
}
