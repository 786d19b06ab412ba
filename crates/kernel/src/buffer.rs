// Copyright 2024 Irreducible Inc.

use std::io::{self, Write};

use tracing::debug;

use crate::{add_arrays_simd, initialize_arrays, Error};

/// How [`Buffers::alloc`] obtains memory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AllocPolicy {
	#[default]
	System,
	/// The first `n` allocations go to the system allocator, every later one fails.
	FailAfter(usize),
}

/// Allocate a zeroed buffer of `len` elements, reporting out-of-memory as an error instead of
/// aborting.
pub fn try_alloc(len: usize) -> Result<Vec<f32>, Error> {
	let mut buf = Vec::new();
	buf.try_reserve_exact(len)
		.map_err(|_| Error::AllocationFailed { len })?;
	buf.resize(len, 0.0);

	Ok(buf)
}

/// The two inputs and the output of one addition, all of the same length.
#[derive(Clone, Debug, PartialEq)]
pub struct Buffers {
	pub a: Vec<f32>,
	pub b: Vec<f32>,
	pub c: Vec<f32>,
}

impl Buffers {
	/// Allocate all three buffers. If any allocation fails, the ones already obtained are
	/// released before the error is returned.
	pub fn alloc(len: usize, policy: AllocPolicy) -> Result<Self, Error> {
		let mut budget = match policy {
			AllocPolicy::System => None,
			AllocPolicy::FailAfter(n) => Some(n),
		};
		let mut next = || match &mut budget {
			Some(0) => {
				debug!(len, "forcing allocation failure");
				Err(Error::AllocationFailed { len })
			}
			Some(n) => {
				*n -= 1;
				try_alloc(len)
			}
			None => try_alloc(len),
		};

		let a = next()?;
		let b = next()?;
		let c = next()?;
		debug!(len, "allocated buffers");

		Ok(Self { a, b, c })
	}

	pub fn len(&self) -> usize {
		self.c.len()
	}

	pub fn is_empty(&self) -> bool {
		self.c.is_empty()
	}

	/// Fill the inputs, see [`initialize_arrays`].
	pub fn initialize(&mut self) {
		initialize_arrays(&mut self.a, &mut self.b);
	}

	/// Write `a + b` into `c`, see [`add_arrays_simd`].
	pub fn add_simd(&mut self, report: &mut impl Write) -> io::Result<()> {
		add_arrays_simd(report, &self.a, &self.b, &mut self.c)
	}
}
