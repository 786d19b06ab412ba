// Copyright 2023 Irreducible Inc.

#[cfg(target_feature = "sse2")]
mod m128;
#[cfg(target_feature = "avx")]
mod m256;
