// Copyright 2024 Irreducible Inc.

//! Adds two 1024-element arrays with the SIMD width selected at build time and prints the first
//! ten sums.

mod config;
mod driver;

use std::{io, process::ExitCode};

use simdadd_kernel::Error;
use simdadd_utils::tracing::init_tracing;
use tracing::debug;

use crate::config::DriverConfig;

fn main() -> ExitCode {
	init_tracing();

	let config = match DriverConfig::from_env() {
		Ok(config) => config,
		Err(err) => {
			eprintln!("{err}");
			return ExitCode::from(driver::CONFIG_ERROR_STATUS);
		}
	};
	debug!(?config, "starting");

	match driver::run(&config, &mut io::stdout()) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			if let Some(Error::AllocationFailed { len }) = err.downcast_ref::<Error>() {
				debug!(len, "allocation failed");
				eprintln!("Memory allocation failed");
			} else {
				eprintln!("{err:#}");
			}
			ExitCode::from(driver::exit_status(&err))
		}
	}
}
