// Copyright 2024 Irreducible Inc.

use std::{arch::aarch64::*, ops::Add};

use super::super::{
	lane_utils::{block_end, checked_len},
	NeonStrategy,
};
use crate::AddStrategy;

/// Four `f32` lanes held in a 128-bit NEON register.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub(super) struct M128(float32x4_t);

impl M128 {
	/// # Safety
	///
	/// `src` must be valid for reads of four `f32` values.
	#[inline(always)]
	pub unsafe fn load(src: *const f32) -> Self {
		Self(vld1q_f32(src))
	}

	/// # Safety
	///
	/// `dst` must be valid for writes of four `f32` values.
	#[inline(always)]
	pub unsafe fn store(self, dst: *mut f32) {
		vst1q_f32(dst, self.0)
	}
}

impl Add for M128 {
	type Output = Self;

	#[allow(unused_unsafe)]
	#[inline(always)]
	fn add(self, rhs: Self) -> Self {
		Self(unsafe { vaddq_f32(self.0, rhs.0) })
	}
}

impl AddStrategy for NeonStrategy {
	const LANES: usize = 4;
	const BANNER: &'static str = "NEON is detected.";

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
