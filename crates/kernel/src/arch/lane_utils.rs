// Copyright 2024 Irreducible Inc.

/// Common length of the three slices.
///
/// # Panics
///
/// If the lengths differ. The block loops rely on this for in-bounds loads and stores.
#[inline]
#[track_caller]
pub(super) fn checked_len(a: &[f32], b: &[f32], c: &[f32]) -> usize {
	assert!(
		a.len() == c.len() && b.len() == c.len(),
		"buffer lengths differ: a has {}, b has {}, c has {} elements",
		a.len(),
		b.len(),
		c.len()
	);

	c.len()
}

/// Start of the tail left over after full `lanes`-sized blocks.
#[inline(always)]
#[allow(dead_code)]
pub(super) const fn block_end(len: usize, lanes: usize) -> usize {
	len - len % lanes
}
