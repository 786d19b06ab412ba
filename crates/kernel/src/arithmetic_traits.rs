// Copyright 2024 Irreducible Inc.

use std::fmt;

use crate::arch::portable::scalar::add_scalar;

/// Width class of an addition strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
	/// 8 lanes per instruction.
	Wide,
	/// 4 lanes per instruction.
	Narrow,
	/// One element at a time.
	Scalar,
}

impl Variant {
	pub const fn from_lanes(lanes: usize) -> Self {
		match lanes {
			0 | 1 => Self::Scalar,
			2..=4 => Self::Narrow,
			_ => Self::Wide,
		}
	}
}

impl fmt::Display for Variant {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Wide => "wide",
			Self::Narrow => "narrow",
			Self::Scalar => "scalar",
		};
		f.write_str(name)
	}
}

/// Elementwise `c[i] = a[i] + b[i]` over `f32` slices.
pub trait AddStrategy {
	/// Number of `f32` values added per instruction.
	const LANES: usize;
	/// Line reported when the strategy is selected.
	const BANNER: &'static str;
	const VARIANT: Variant = Variant::from_lanes(Self::LANES);

	/// Add all full `LANES`-sized blocks and return the index at which the unprocessed tail
	/// starts.
	///
	/// # Panics
	///
	/// If the three slices differ in length.
	fn add_blocks(a: &[f32], b: &[f32], c: &mut [f32]) -> usize;

	/// Add every element: full blocks first, then the tail one element at a time.
	///
	/// # Panics
	///
	/// If the three slices differ in length.
	#[inline]
	fn add(a: &[f32], b: &[f32], c: &mut [f32]) {
		let tail = Self::add_blocks(a, b, c);
		add_scalar(&a[tail..], &b[tail..], &mut c[tail..]);
	}
}
