// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

use std::{fmt, ops::Deref};

use serde::{Deserialize, Serialize};

macro_rules! define_id {
	($name:ident) => {
		#[derive(
			Debug,
			Clone,
			Copy,
			PartialEq,
			Eq,
			PartialOrd,
			Ord,
			Hash,
			Serialize,
			Deserialize,
		)]
		pub struct $name(pub u64);

		impl Deref for $name {
			type Target = u64;

			fn deref(&self) -> &Self::Target {
				&self.0
			}
		}

		impl From<u64> for $name {
			fn from(value: u64) -> Self {
				Self(value)
			}
		}

		impl From<$name> for u64 {
			fn from(value: $name) -> u64 {
				value.0
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				write!(f, "{}", self.0)
			}
		}
	};
}

define_id!(TriggerId);
define_id!(ProcedureId);

/// Identifier of the object a command targets, assigned by the host catalog.
define_id!(ObjectId);
