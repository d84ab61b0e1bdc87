//! Advisory cache prefetch hints.
//!
//! The pointer is only handed to the CPU's prefetch instruction, never
//! dereferenced, so any address is accepted (including one past the end of
//! an array) and the functions are safe. On targets without a stable
//! prefetch intrinsic they compile to nothing.
//!
//! | Function                | x86 instruction |
//! |-------------------------|-----------------|
//! | [`prefetch_for_one_read`] | `prefetchnta` |
//! | [`prefetch_for_modify`]   | `prefetcht0`  |
//! | [`prefetch_close`]        | `prefetcht0`  |
//! | [`prefetch_mid`]          | `prefetcht1`  |
//! | [`prefetch_far`]          | `prefetcht2`  |

#[cfg(all(target_arch = "x86", target_feature = "sse"))]
use std::arch::x86::{_mm_prefetch, _MM_HINT_NTA, _MM_HINT_T0, _MM_HINT_T1, _MM_HINT_T2};

#[cfg(all(target_arch = "x86_64", target_feature = "sse"))]
use std::arch::x86_64::{_mm_prefetch, _MM_HINT_NTA, _MM_HINT_T0, _MM_HINT_T1, _MM_HINT_T2};

macro_rules! prefetch_fn {
    ($(#[$doc:meta])* $name:ident, $hint:ident) => {
        $(#[$doc])*
        #[inline(always)]
        pub fn $name<T>(ptr: *const T) {
            #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "sse"))]
            {
                // SAFETY: prefetch does not access memory and cannot fault.
                unsafe { _mm_prefetch::<$hint>(ptr.cast::<i8>()) };
            }

            #[cfg(not(all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "sse")))]
            {
                let _ = ptr;
            }
        }
    };
}

prefetch_fn!(
    /// Fetches the cache line into L1 for data that is read once and need
    /// not be kept in the outer caches.
    prefetch_for_one_read,
    _MM_HINT_NTA
);

prefetch_fn!(
    /// Fetches the cache line into L1 ahead of a write.
    prefetch_for_modify,
    _MM_HINT_T0
);

prefetch_fn!(
    /// Fetches the cache line into every cache level.
    prefetch_close,
    _MM_HINT_T0
);

prefetch_fn!(
    /// Fetches the cache line into L2 and beyond.
    prefetch_mid,
    _MM_HINT_T1
);

prefetch_fn!(
    /// Fetches the cache line into L3 and beyond.
    prefetch_far,
    _MM_HINT_T2
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefetch_accepts_any_address() {
        let data = [1.0f32; 64];
        prefetch_for_one_read(data.as_ptr());
        prefetch_for_modify(data.as_ptr().wrapping_add(64));
        prefetch_close(std::ptr::null::<u8>());
        prefetch_mid(data.as_ptr().wrapping_add(10_000));
        prefetch_far(&data);
        assert_eq!(data[0], 1.0);
    }
}
