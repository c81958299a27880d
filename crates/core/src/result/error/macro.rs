// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

/// Wrap a [`Diagnostic`](crate::result::error::diagnostic::Diagnostic) into
/// an [`Error`](crate::result::error::Error).
#[macro_export]
macro_rules! error {
	($diagnostic:expr) => {
		$crate::result::error::Error($diagnostic)
	};
}

/// Return early with the given diagnostic as an `Err`.
#[macro_export]
macro_rules! return_error {
	($diagnostic:expr) => {
		return Err($crate::error!($diagnostic))
	};
}
