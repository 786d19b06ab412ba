// Copyright 2023-2024 Irreducible Inc.

/// Error thrown when preparing or combining buffers fails.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	/// The allocator could not provide storage for `len` elements.
	#[error("failed to allocate a buffer of {len} f32 elements")]
	AllocationFailed { len: usize },
	#[error("buffer lengths differ: a has {a}, b has {b}, c has {c} elements")]
	LengthMismatch { a: usize, b: usize, c: usize },
}
