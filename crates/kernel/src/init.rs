// Copyright 2024 Irreducible Inc.

use tracing::trace;

/// Fill the input buffers with `a[i] = i` and `b[i] = n - i`, so that every sum equals `n`.
///
/// # Panics
///
/// If the buffers differ in length.
pub fn initialize_arrays(a: &mut [f32], b: &mut [f32]) {
	assert_eq!(a.len(), b.len(), "input buffers must have the same length");

	let n = a.len();
	for (i, (a, b)) in a.iter_mut().zip(b.iter_mut()).enumerate() {
		*a = i as f32;
		*b = (n - i) as f32;
	}

	trace!(n, "initialized input arrays");
}
