// Copyright 2024 Irreducible Inc.

/// Element-at-a-time addition. Always available, and used for the tail of every other strategy.
pub struct ScalarStrategy;
/// 4 lanes in a 128-bit SSE2 register.
#[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
pub struct Sse2Strategy;
/// 8 lanes in a 256-bit AVX register.
#[cfg(all(target_arch = "x86_64", target_feature = "avx"))]
pub struct AvxStrategy;
/// 4 lanes in a 128-bit NEON register.
#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
pub struct NeonStrategy;
