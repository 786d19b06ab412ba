// Copyright 2024-2025 Irreducible Inc.

#[cfg(target_feature = "neon")]
mod m128;
