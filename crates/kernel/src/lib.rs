// Copyright 2024 Irreducible Inc.

//! Elementwise `f32` array addition with a SIMD width chosen at build time.
//!
//! Every addition path implements [`AddStrategy`]. A `cfg_if!` table in [`arch`] aliases exactly
//! one of them as [`arch::OptimalStrategy`] for the target being built: AVX with 8 lanes, SSE2 or
//! NEON with 4 lanes, or the scalar loop. There is no runtime CPU detection; build with
//! `RUSTFLAGS="-C target-feature=+avx"` (or `-C target-cpu=native`) to get the wide path on x86_64.
//!
//! Whatever the width, elements past the last full block are added by the scalar loop, so the
//! result is bitwise identical across strategies.

pub mod add;
pub mod arch;
pub mod arithmetic_traits;
pub mod buffer;
pub mod error;
pub mod init;

pub use add::*;
pub use arithmetic_traits::*;
pub use buffer::*;
pub use error::*;
pub use init::*;
