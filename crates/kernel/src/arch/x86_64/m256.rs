// Copyright 2024 Irreducible Inc.

use std::{arch::x86_64::*, ops::Add};

use super::super::{
	lane_utils::{block_end, checked_len},
	AvxStrategy,
};
use crate::AddStrategy;

/// Eight `f32` lanes held in a 256-bit AVX register.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub(super) struct M256(__m256);

impl M256 {
	/// Unaligned load of eight consecutive values.
	///
	/// # Safety
	///
	/// `src` must be valid for reads of eight `f32` values.
	#[inline(always)]
	pub unsafe fn load(src: *const f32) -> Self {
		Self(_mm256_loadu_ps(src))
	}

	/// Unaligned store of all eight lanes.
	///
	/// # Safety
	///
	/// `dst` must be valid for writes of eight `f32` values.
	#[inline(always)]
	pub unsafe fn store(self, dst: *mut f32) {
		_mm256_storeu_ps(dst, self.0)
	}
}

impl Add for M256 {
	type Output = Self;

	#[allow(unused_unsafe)]
	#[inline(always)]
	fn add(self, rhs: Self) -> Self {
		Self(unsafe { _mm256_add_ps(self.0, rhs.0) })
	}
}

impl AddStrategy for AvxStrategy {
	const LANES: usize = 8;
	const BANNER: &'static str = "AVX is detected.";

	#[inline]
	fn add_blocks(a: &[f32], b: &[f32], c: &mut [f32]) -> usize {
		let end = block_end(checked_len(a, b, c), Self::LANES);

		let mut i = 0;
		while i < end {
			// SAFETY: `i + LANES <= end <= len` for all three slices.
			unsafe {
				let sum = M256::load(a.as_ptr().add(i)) + M256::load(b.as_ptr().add(i));
				sum.store(c.as_mut_ptr().add(i));
			}
			i += Self::LANES;
		}

		end
	}
}
