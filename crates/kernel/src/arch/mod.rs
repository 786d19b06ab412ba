// Copyright 2023-2024 Irreducible Inc.

use cfg_if::cfg_if;

mod arch_optimal;
mod lane_utils;
pub(crate) mod portable;
mod strategies;

cfg_if! {
	if #[cfg(target_arch = "x86_64")] {
		mod x86_64;
	} else if #[cfg(target_arch = "aarch64")] {
		mod aarch64;
	}
}

pub use arch_optimal::*;
pub use strategies::*;
