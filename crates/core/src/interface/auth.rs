// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

use std::fmt;

pub type IdentityId = u64;

/// Who is asking. Authorization itself is owned by the host; firegate only
/// distinguishes system identities (allowed to mutate the trigger catalog)
/// from everyone else.
#[derive(Debug, Clone)]
pub enum Identity {
	Anonymous {},
	System {
		id: IdentityId,
		name: String,
	},
	User {
		id: IdentityId,
		name: String,
	},
}

impl Identity {
	pub fn root() -> Self {
		Self::System {
			id: 0,
			name: "root".to_string(),
		}
	}

	pub fn is_system(&self) -> bool {
		matches!(self, Self::System { .. })
	}
}

impl fmt::Display for Identity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Anonymous {} => write!(f, "anonymous"),
			Self::System {
				id,
				..
			} => write!(f, "system:{}", id),
			Self::User {
				id,
				..
			} => write!(f, "user:{}", id),
		}
	}
}
