// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

use bumpalo::Bump;

/// Working memory of one firing pass. Argument text and marshalled
/// identity strings live here and are released together when the pass
/// ends, whether it proceeded, vetoed or failed. N commands firing M
/// procedures never accumulate N×M argument allocations.
pub(crate) struct FiringScope {
	arena: Bump,
}

impl FiringScope {
	pub(crate) fn new() -> Self {
		Self {
			arena: Bump::new(),
		}
	}

	pub(crate) fn alloc_str<'a>(&'a self, value: &str) -> &'a str {
		self.arena.alloc_str(value)
	}
}
