// Copyright 2024 Irreducible Inc.

use super::super::{lane_utils::checked_len, ScalarStrategy};
use crate::AddStrategy;

/// Add element by element. Stops at the shortest slice.
#[inline]
pub(crate) fn add_scalar(a: &[f32], b: &[f32], c: &mut [f32]) {
	for ((c, a), b) in c.iter_mut().zip(a).zip(b) {
		*c = a + b;
	}
}

impl AddStrategy for ScalarStrategy {
	const LANES: usize = 1;
	const BANNER: &'static str = "no SIMD extension is detected.";

	#[inline]
	fn add_blocks(a: &[f32], b: &[f32], c: &mut [f32]) -> usize {
		checked_len(a, b, c);
		0
	}
}
