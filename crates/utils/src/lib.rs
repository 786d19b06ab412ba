// Copyright 2024 Irreducible Inc.

pub mod env;
pub mod error_utils;
pub mod tracing;

#[doc(hidden)]
pub mod __private {
	pub use ::tracing;
}
