// Copyright 2024 Irreducible Inc.

use std::{arch::x86_64::*, ops::Add};

use super::super::{
	lane_utils::{block_end, checked_len},
	Sse2Strategy,
};
use crate::AddStrategy;

/// Four `f32` lanes held in a 128-bit SSE register.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub(super) struct M128(__m128);

impl M128 {
	/// Unaligned load of four consecutive values.
	///
	/// # Safety
	///
	/// `src` must be valid for reads of four `f32` values.
	#[inline(always)]
	pub unsafe fn load(src: *const f32) -> Self {
		Self(_mm_loadu_ps(src))
	}

	/// Unaligned store of all four lanes.
	///
	/// # Safety
	///
	/// `dst` must be valid for writes of four `f32` values.
	#[inline(always)]
	pub unsafe fn store(self, dst: *mut f32) {
		_mm_storeu_ps(dst, self.0)
	}
}

impl Add for M128 {
	type Output = Self;

	// Older toolchains still require `unsafe` for the arithmetic intrinsics.
	#[allow(unused_unsafe)]
	#[inline(always)]
	fn add(self, rhs: Self) -> Self {
		Self(unsafe { _mm_add_ps(self.0, rhs.0) })
	}
}

impl AddStrategy for Sse2Strategy {
	const LANES: usize = 4;
	const BANNER: &'static str = "SSE2 is detected.";

	#[inline]
	fn add_blocks(a: &[f32], b: &[f32], c: &mut [f32]) -> usize {
		let end = block_end(checked_len(a, b, c), Self::LANES);

		let mut i = 0;
		while i < end {
			// SAFETY: `i + LANES <= end <= len` for all three slices.
			unsafe {
				let sum = M128::load(a.as_ptr().add(i)) + M128::load(b.as_ptr().add(i));
				sum.store(c.as_mut_ptr().add(i));
			}
			i += Self::LANES;
		}

		end
	}
}
