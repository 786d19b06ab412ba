// Copyright 2024-2025 Irreducible Inc.

//! Early-return helpers for functions returning `Result`.
//!
//! The error is recorded as a `debug` event at the call site before it is returned, so
//! `RUST_LOG=debug` shows where a failure originated. With the `bail_panic` feature enabled,
//! [`bail!`] panics at the call site instead, which puts the origin in a backtrace.

/// Log `$err` and return `Err($err.into())` from the enclosing function.
#[cfg(not(feature = "bail_panic"))]
#[macro_export]
macro_rules! bail {
	($err:expr $(,)?) => {{
		let err = $err;
		$crate::__private::tracing::debug!(
			error = %err,
			location = concat!(file!(), ":", line!()),
			"returning error"
		);
		return Err(err.into());
	}};
}

/// Panic with `$err` at the call site.
#[cfg(feature = "bail_panic")]
#[macro_export]
macro_rules! bail {
	($err:expr $(,)?) => {
		panic!("bail at {}:{}: {}", file!(), line!(), $err)
	};
}

/// [`bail!`] with `$err` unless `$cond` holds. `$err` is only evaluated on failure.
#[macro_export]
macro_rules! ensure {
	($cond:expr, $err:expr $(,)?) => {
		if !($cond) {
			$crate::bail!($err);
		}
	};
}
