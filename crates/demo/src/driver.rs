// Copyright 2024 Irreducible Inc.

use std::io::{self, Write};

use anyhow::{Context, Result};
use simdadd_kernel::{Buffers, Error};
use tracing::debug;

use crate::config::DriverConfig;

/// Number of leading results printed.
pub const PRINT_COUNT: usize = 10;

/// Exit status when a buffer cannot be allocated.
pub const ALLOC_FAILURE_STATUS: u8 = 1;
/// Exit status for an unusable environment configuration.
pub const CONFIG_ERROR_STATUS: u8 = 2;
/// Exit status when stdout cannot be written.
pub const OUTPUT_ERROR_STATUS: u8 = 3;

/// Allocate, initialize and add the buffers, then print the first results to `out`.
///
/// The buffers are released when this returns, on success and on error alike.
pub fn run(config: &DriverConfig, out: &mut impl Write) -> Result<()> {
	let mut buffers = Buffers::alloc(config.len, config.alloc_policy)?;

	buffers.initialize();
	buffers
		.add_simd(out)
		.context("failed to report the addition strategy")?;

	write_results(&buffers.c, out).context("failed to write results")?;
	debug!(len = buffers.len(), "releasing buffers");

	Ok(())
}

/// Process exit status for an error returned by [`run`].
pub fn exit_status(err: &anyhow::Error) -> u8 {
	match err.downcast_ref::<Error>() {
		Some(Error::AllocationFailed { .. }) => ALLOC_FAILURE_STATUS,
		_ => OUTPUT_ERROR_STATUS,
	}
}

/// Print up to [`PRINT_COUNT`] entries as `c[<index>] = <value>`.
pub fn write_results(c: &[f32], out: &mut impl Write) -> io::Result<()> {
	for (i, value) in c.iter().take(PRINT_COUNT).enumerate() {
		writeln!(out, "c[{i}] = {value:.6}")?;
	}

	out.flush()
}

#[cfg(test)]
mod tests {
	use simdadd_kernel::{arch::OptimalStrategy, AddStrategy, AllocPolicy};

	use super::*;

	fn run_to_string(config: DriverConfig) -> Result<String> {
		let mut out = Vec::new();
		run(&config, &mut out)?;
		Ok(String::from_utf8(out)?)
	}

	fn banner_line() -> String {
		format!("{}\n", OptimalStrategy::BANNER)
	}

	/// Accepts `capacity` bytes, then fails every write like a closed pipe.
	struct ClosedAfter {
		capacity: usize,
	}

	impl Write for ClosedAfter {
		fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
			if self.capacity == 0 {
				return Err(io::ErrorKind::BrokenPipe.into());
			}
			let n = buf.len().min(self.capacity);
			self.capacity -= n;
			Ok(n)
		}

		fn flush(&mut self) -> io::Result<()> {
			Ok(())
		}
	}

	#[test]
	fn test_run_default() {
		let output = run_to_string(DriverConfig::default()).unwrap();
		let results: String = (0..10).map(|i| format!("c[{i}] = 1024.000000\n")).collect();
		assert_eq!(output, banner_line() + &results);
	}

	#[test]
	fn test_run_fewer_than_print_count() {
		let config = DriverConfig {
			len: 3,
			..Default::default()
		};
		assert_eq!(
			run_to_string(config).unwrap(),
			banner_line() + "c[0] = 3.000000\nc[1] = 3.000000\nc[2] = 3.000000\n"
		);
	}

	#[test]
	fn test_run_empty() {
		let config = DriverConfig {
			len: 0,
			..Default::default()
		};
		assert_eq!(run_to_string(config).unwrap(), banner_line());
	}

	#[test]
	fn test_run_forced_allocation_failure() {
		let config = DriverConfig {
			len: 1024,
			alloc_policy: AllocPolicy::FailAfter(2),
		};
		let mut out = Vec::new();
		let err = run(&config, &mut out).unwrap_err();

		assert_eq!(err.downcast_ref::<Error>(), Some(&Error::AllocationFailed { len: 1024 }));
		assert_eq!(exit_status(&err), ALLOC_FAILURE_STATUS);
		assert!(out.is_empty());
	}

	#[test]
	fn test_run_closed_stdout() {
		let err = run(&DriverConfig::default(), &mut ClosedAfter { capacity: 0 }).unwrap_err();

		assert_eq!(
			err.downcast_ref::<io::Error>().map(io::Error::kind),
			Some(io::ErrorKind::BrokenPipe)
		);
		assert!(err.to_string().contains("addition strategy"));
		assert_eq!(exit_status(&err), OUTPUT_ERROR_STATUS);
	}

	#[test]
	fn test_run_stdout_closed_mid_results() {
		let capacity = banner_line().len() + 5;
		let err = run(&DriverConfig::default(), &mut ClosedAfter { capacity }).unwrap_err();

		assert!(err.to_string().contains("failed to write results"));
		assert_eq!(exit_status(&err), OUTPUT_ERROR_STATUS);
	}

	#[test]
	fn test_write_results_format() {
		let mut out = Vec::new();
		write_results(&[0.5, -2.0, 1e-7], &mut out).unwrap();
		assert_eq!(
			String::from_utf8(out).unwrap(),
			"c[0] = 0.500000\nc[1] = -2.000000\nc[2] = 0.000000\n"
		);
	}
}
