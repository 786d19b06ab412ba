// Copyright 2024 Irreducible Inc.

use std::io::{self, Write};

use simdadd_utils::ensure;
use tracing::{debug, debug_span};

use crate::{arch::OptimalStrategy, AddStrategy, Error};

/// Compute `c[i] = a[i] + b[i]` with the strategy selected for this build.
///
/// # Panics
///
/// If the three slices differ in length.
#[inline]
pub fn add_arrays(a: &[f32], b: &[f32], c: &mut [f32]) {
	add_arrays_with::<OptimalStrategy>(a, b, c);
}

/// Compute `c[i] = a[i] + b[i]` with an explicit strategy.
///
/// # Panics
///
/// If the three slices differ in length.
pub fn add_arrays_with<S: AddStrategy>(a: &[f32], b: &[f32], c: &mut [f32]) {
	let _span = debug_span!("add_arrays", n = c.len(), lanes = S::LANES).entered();
	S::add(a, b, c);
}

/// [`add_arrays`] that first writes one line to `report` naming the active strategy, e.g.
/// `AVX is detected.`
///
/// The sum is computed only if the line was written.
///
/// # Panics
///
/// If the three slices differ in length.
pub fn add_arrays_simd(
	report: &mut impl Write,
	a: &[f32],
	b: &[f32],
	c: &mut [f32],
) -> io::Result<()> {
	let variant = OptimalStrategy::VARIANT;
	writeln!(report, "{}", OptimalStrategy::BANNER)?;
	debug!(%variant, lanes = OptimalStrategy::LANES, "selected addition strategy");

	add_arrays(a, b, c);
	Ok(())
}

/// [`add_arrays`] returning [`Error::LengthMismatch`] instead of panicking.
pub fn try_add_arrays(a: &[f32], b: &[f32], c: &mut [f32]) -> Result<(), Error> {
	ensure!(
		a.len() == c.len() && b.len() == c.len(),
		Error::LengthMismatch {
			a: a.len(),
			b: b.len(),
			c: c.len(),
		}
	);

	add_arrays(a, b, c);
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{arch::OPTIMAL_LANES, initialize_arrays};

	#[test]
	fn test_add_1024_scenario() {
		let mut a = vec![0.0; 1024];
		let mut b = vec![0.0; 1024];
		let mut c = vec![0.0; 1024];
		initialize_arrays(&mut a, &mut b);
		let mut report = Vec::new();
		add_arrays_simd(&mut report, &a, &b, &mut c).unwrap();

		assert_eq!(report, format!("{}\n", OptimalStrategy::BANNER).into_bytes());
		assert!(c.iter().all(|&x| x == 1024.0));
		assert_eq!(format!("{:.6}", c[0]), "1024.000000");
	}

	struct ClosedPipe;

	impl Write for ClosedPipe {
		fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
			Err(io::ErrorKind::BrokenPipe.into())
		}

		fn flush(&mut self) -> io::Result<()> {
			Ok(())
		}
	}

	#[test]
	fn test_add_simd_report_error() {
		let mut c = vec![0.0; 4];
		let err = add_arrays_simd(&mut ClosedPipe, &[1.0; 4], &[1.0; 4], &mut c).unwrap_err();
		assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
		assert_eq!(c, vec![0.0; 4]);
	}

	#[test]
	fn test_add_empty() {
		let mut c: Vec<f32> = vec![];
		add_arrays(&[], &[], &mut c);
		assert!(c.is_empty());
	}

	#[test]
	fn test_add_shorter_than_lanes() {
		let n = OPTIMAL_LANES - 1;
		let a = vec![1.5f32; n];
		let b = vec![2.0f32; n];
		let mut c = vec![0.0f32; n];
		add_arrays(&a, &b, &mut c);
		assert_eq!(c, vec![3.5f32; n]);
	}

	#[test]
	fn test_add_every_tail_length() {
		for n in 0..3 * OPTIMAL_LANES + 1 {
			let a: Vec<f32> = (0..n).map(|i| i as f32 * 0.5).collect();
			let b: Vec<f32> = (0..n).map(|i| -(i as f32)).collect();
			let mut c = vec![f32::NAN; n];
			add_arrays(&a, &b, &mut c);

			for i in 0..n {
				assert_eq!(c[i], a[i] + b[i], "n = {n}, i = {i}");
			}
		}
	}

	#[test]
	fn test_try_add_mismatch() {
		let mut c = vec![0.0; 3];
		assert_eq!(
			try_add_arrays(&[1.0; 3], &[1.0; 4], &mut c),
			Err(Error::LengthMismatch { a: 3, b: 4, c: 3 })
		);
		assert_eq!(c, vec![0.0; 3]);
	}

	#[test]
	fn test_try_add_ok() {
		let mut c = vec![0.0; 5];
		try_add_arrays(&[1.0; 5], &[2.0; 5], &mut c).unwrap();
		assert_eq!(c, vec![3.0; 5]);
	}

	#[test]
	#[should_panic(expected = "buffer lengths differ")]
	fn test_add_mismatch_panics() {
		let mut c = vec![0.0; 9];
		add_arrays(&[1.0; 9], &[1.0; 9], &mut c[..8]);
	}
}
