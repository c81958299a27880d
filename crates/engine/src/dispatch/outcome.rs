// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

/// What the BEFORE / INSTEAD OF pass decided about the real command. A
/// veto is a normal, successful outcome, not an error; procedure failures
/// surface as `Err` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FiringOutcome {
	/// No trigger objected; the pipeline runs the real command.
	Proceed,
	/// A BEFORE trigger returned `false`; the real command is skipped for
	/// this invocation.
	Cancelled {
		trigger: String,
	},
	/// INSTEAD OF triggers ran in place of the command; the pipeline must
	/// skip it.
	Substituted {
		count: usize,
	},
}

impl FiringOutcome {
	pub fn proceed(&self) -> bool {
		matches!(self, Self::Proceed)
	}

	pub fn instead_of_count(&self) -> usize {
		match self {
			Self::Substituted {
				count,
			} => *count,
			_ => 0,
		}
	}
}
