//! Runtime failures of simdpad.
//!
//! Mismatched element types and vector widths are compile errors, and a bad
//! chunk or window index is a panic (or an `unsafe` precondition). What is
//! left are the failures a caller can react to: a container too large to lay
//! out or allocate, a bulk copy of the wrong length, and a binary running on
//! a CPU without the instructions it was compiled for.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimdpadError {
    /// The padded buffer of `entries` elements cannot be described by a
    /// `Layout`: the padded count or its byte size overflows, or the size
    /// exceeds `isize::MAX`.
    LayoutError {
        entries: usize,
        width: usize,
        element: &'static str,
        reason: String,
    },
    /// The global allocator returned null for a valid layout.
    AllocationError {
        bytes: usize,
        alignment: usize,
        backend: &'static str,
    },
    /// A slice handed to the container has the wrong number of entries.
    ValidationError { expected: usize, found: usize },
    /// The running CPU cannot execute the backend the crate was built for.
    UnsupportedBackend { backend: &'static str },
}

impl fmt::Display for SimdpadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimdpadError::LayoutError {
                entries,
                width,
                element,
                reason,
            } => write!(
                f,
                "cannot lay out {entries} {element} entries padded to {width}-lane vectors: {reason}"
            ),
            SimdpadError::AllocationError {
                bytes,
                alignment,
                backend,
            } => write!(
                f,
                "allocator returned null for {bytes} bytes aligned to {alignment} ({backend} backend)"
            ),
            SimdpadError::ValidationError { expected, found } => write!(
                f,
                "source slice has {found} entries, padded memory holds {expected}"
            ),
            SimdpadError::UnsupportedBackend { backend } => write!(
                f,
                "built for the {backend} backend, which this CPU does not support; \
                 rebuild on this machine or with a lower target feature"
            ),
        }
    }
}

impl std::error::Error for SimdpadError {}

pub type Result<T> = std::result::Result<T, SimdpadError>;

pub fn layout_error(
    entries: usize,
    width: usize,
    element: &'static str,
    reason: impl Into<String>,
) -> SimdpadError {
    SimdpadError::LayoutError {
        entries,
        width,
        element,
        reason: reason.into(),
    }
}

pub fn allocation_error(bytes: usize, alignment: usize, backend: &'static str) -> SimdpadError {
    SimdpadError::AllocationError {
        bytes,
        alignment,
        backend,
    }
}

/// A length mismatch between a source slice and the logical entries.
pub fn validation_error(expected: usize, found: usize) -> SimdpadError {
    SimdpadError::ValidationError { expected, found }
}

pub fn unsupported_backend(backend: &'static str) -> SimdpadError {
    SimdpadError::UnsupportedBackend { backend }
}
