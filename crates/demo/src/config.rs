// Copyright 2024 Irreducible Inc.

use simdadd_kernel::AllocPolicy;
use simdadd_utils::env::{boolean_env_flag_set, parse_env_var, InvalidEnvVar};

/// Overrides the array length.
pub const ARRAY_LEN_VAR: &str = "SIMDADD_ARRAY_LEN";
/// Boolean flag that makes the output buffer allocation fail.
pub const FAIL_ALLOC_VAR: &str = "SIMDADD_FAIL_ALLOC";

pub const DEFAULT_ARRAY_LEN: usize = 1024;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DriverConfig {
	pub len: usize,
	pub alloc_policy: AllocPolicy,
}

impl Default for DriverConfig {
	fn default() -> Self {
		Self {
			len: DEFAULT_ARRAY_LEN,
			alloc_policy: AllocPolicy::System,
		}
	}
}

impl DriverConfig {
	pub fn from_env() -> Result<Self, InvalidEnvVar> {
		let len = parse_env_var(ARRAY_LEN_VAR)?.unwrap_or(DEFAULT_ARRAY_LEN);
		// Fail on the third buffer so the two inputs are already held when the error hits.
		let alloc_policy = if boolean_env_flag_set(FAIL_ALLOC_VAR) {
			AllocPolicy::FailAfter(2)
		} else {
			AllocPolicy::System
		};

		Ok(Self { len, alloc_policy })
	}
}
