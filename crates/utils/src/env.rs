// Copyright 2024 Irreducible Inc.

use std::{env, str::FromStr};

/// Read boolean flag from the environment variable.
pub fn boolean_env_flag_set(flag: &str) -> bool {
	match env::var(flag) {
		Ok(val) => ["1", "on", "ON", "true", "TRUE", "yes", "YES"].contains(&val.as_str()),
		Err(_) => false,
	}
}

#[derive(Debug, thiserror::Error)]
#[error("environment variable {name} has invalid value {value:?}")]
pub struct InvalidEnvVar {
	pub name: String,
	pub value: String,
}

/// Parse an environment variable into `T`.
///
/// Returns `Ok(None)` when the variable is unset and an error when it is set to something that
/// does not parse.
pub fn parse_env_var<T: FromStr>(name: &str) -> Result<Option<T>, InvalidEnvVar> {
	match env::var(name) {
		Ok(value) => value
			.trim()
			.parse::<T>()
			.map(Some)
			.map_err(|_| InvalidEnvVar {
				name: name.to_string(),
				value,
			}),
		Err(_) => Ok(None),
	}
}
