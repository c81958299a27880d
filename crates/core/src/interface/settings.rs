// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

use std::sync::{
	Arc,
	atomic::{AtomicU8, Ordering},
};

use crate::command::ReplicationRole;

/// Process-wide runtime settings the trigger subsystem reads. Cheap to
/// clone and share; the cache snapshot records the role it was built
/// under and rebuilds when it changed.
#[derive(Debug, Clone)]
pub struct SessionSettings(Arc<SessionSettingsInner>);

#[derive(Debug)]
struct SessionSettingsInner {
	replication_role: AtomicU8,
}

const ROLE_ORIGIN: u8 = 0;
const ROLE_LOCAL: u8 = 1;
const ROLE_REPLICA: u8 = 2;

impl Default for SessionSettings {
	fn default() -> Self {
		Self::new(ReplicationRole::Origin)
	}
}

impl SessionSettings {
	pub fn new(role: ReplicationRole) -> Self {
		Self(Arc::new(SessionSettingsInner {
			replication_role: AtomicU8::new(encode_role(role)),
		}))
	}

	pub fn replication_role(&self) -> ReplicationRole {
		decode_role(self.0.replication_role.load(Ordering::Acquire))
	}

	pub fn set_replication_role(&self, role: ReplicationRole) {
		self.0.replication_role.store(encode_role(role), Ordering::Release);
	}
}

fn encode_role(role: ReplicationRole) -> u8 {
	match role {
		ReplicationRole::Origin => ROLE_ORIGIN,
		ReplicationRole::Local => ROLE_LOCAL,
		ReplicationRole::Replica => ROLE_REPLICA,
	}
}

fn decode_role(code: u8) -> ReplicationRole {
	match code {
		ROLE_LOCAL => ReplicationRole::Local,
		ROLE_REPLICA => ReplicationRole::Replica,
		_ => ReplicationRole::Origin,
	}
}
