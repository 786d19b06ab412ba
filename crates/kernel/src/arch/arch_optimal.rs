// Copyright 2024 Irreducible Inc.

use cfg_if::cfg_if;

use crate::{AddStrategy, Variant};

cfg_if! {
	if #[cfg(all(target_arch = "x86_64", target_feature = "avx"))] {
		pub type OptimalStrategy = super::AvxStrategy;
	} else if #[cfg(all(target_arch = "x86_64", target_feature = "sse2"))] {
		pub type OptimalStrategy = super::Sse2Strategy;
	} else if #[cfg(all(target_arch = "aarch64", target_feature = "neon"))] {
		pub type OptimalStrategy = super::NeonStrategy;
	} else {
		pub type OptimalStrategy = super::ScalarStrategy;
	}
}

/// Lane count of [`OptimalStrategy`].
pub const OPTIMAL_LANES: usize = <OptimalStrategy as AddStrategy>::LANES;

/// Width class of [`OptimalStrategy`].
pub const OPTIMAL_VARIANT: Variant = <OptimalStrategy as AddStrategy>::VARIANT;
