// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

use std::fmt;

use serde::{Deserialize, Serialize};

/// Categorical label of a command kind, precomputed by the host pipeline
/// ("CREATE TABLE", "VACUUM", ...). Firegate consumes tags verbatim and
/// never parses command text itself.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CommandTag(String);

impl CommandTag {
	pub fn new(tag: impl Into<String>) -> Self {
		Self(tag.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Commands that commit incrementally as they run. A failure raised
	/// once they finished cannot roll their work back, so AFTER triggers
	/// on them are rejected at registration time.
	pub fn is_self_committing(&self) -> bool {
		matches!(self.0.as_str(), "VACUUM" | "CLUSTER")
	}
}

impl fmt::Display for CommandTag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for CommandTag {
	fn from(tag: &str) -> Self {
		Self::new(tag)
	}
}

/// The command scope a trigger definition is registered against: one
/// specific command tag, or every command.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CommandClass {
	/// Wildcard scope, matched against every command.
	Any,
	Tag(CommandTag),
}

impl CommandClass {
	/// Persisted form of the class. The wildcard shares the keyspace with
	/// regular tags under the reserved tag "ANY".
	pub fn as_str(&self) -> &str {
		match self {
			Self::Any => "ANY",
			Self::Tag(tag) => tag.as_str(),
		}
	}

	pub fn from_tag_str(tag: &str) -> Self {
		if tag == "ANY" {
			Self::Any
		} else {
			Self::Tag(CommandTag::new(tag))
		}
	}
}

impl fmt::Display for CommandClass {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl From<CommandTag> for CommandClass {
	fn from(tag: CommandTag) -> Self {
		Self::Tag(tag)
	}
}

/// Lifecycle category a trigger subscribes to, distinct from the firing
/// phase: which family of pipeline moments the trigger is interested in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FiringEvent {
	/// Schema-changing commands.
	DdlCommand,
	/// Other pipeline-visible utility commands.
	UtilityCommand,
}

impl FiringEvent {
	pub fn code(&self) -> u8 {
		match self {
			Self::DdlCommand => 1,
			Self::UtilityCommand => 2,
		}
	}

	pub fn from_code(code: u8) -> Option<Self> {
		match code {
			1 => Some(Self::DdlCommand),
			2 => Some(Self::UtilityCommand),
			_ => None,
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::DdlCommand => "ddl_command",
			Self::UtilityCommand => "utility_command",
		}
	}
}

/// When a trigger runs relative to the real command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FiringPhase {
	Before,
	After,
	InsteadOf,
}

impl FiringPhase {
	/// Persisted single-byte encoding.
	pub fn code(&self) -> u8 {
		match self {
			Self::Before => b'B',
			Self::After => b'A',
			Self::InsteadOf => b'I',
		}
	}

	pub fn from_code(code: u8) -> Option<Self> {
		match code {
			b'B' => Some(Self::Before),
			b'A' => Some(Self::After),
			b'I' => Some(Self::InsteadOf),
			_ => None,
		}
	}

	/// Spelling passed to trigger procedures as their first argument.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Before => "BEFORE",
			Self::After => "AFTER",
			Self::InsteadOf => "INSTEAD OF",
		}
	}
}

impl fmt::Display for FiringPhase {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Firing configuration of a definition with respect to the session
/// replication role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerEnabled {
	/// Fires regardless of the session role.
	Enabled,
	/// Never fires.
	Disabled,
	/// Fires when the session role is origin or local. Default at
	/// registration time.
	FiresOnOrigin,
	/// Fires when the session role is replica.
	FiresOnReplica,
}

impl TriggerEnabled {
	/// Persisted single-byte encoding.
	pub fn code(&self) -> u8 {
		match self {
			Self::Enabled => b'A',
			Self::Disabled => b'D',
			Self::FiresOnOrigin => b'O',
			Self::FiresOnReplica => b'R',
		}
	}

	pub fn from_code(code: u8) -> Option<Self> {
		match code {
			b'A' => Some(Self::Enabled),
			b'D' => Some(Self::Disabled),
			b'O' => Some(Self::FiresOnOrigin),
			b'R' => Some(Self::FiresOnReplica),
			_ => None,
		}
	}

	/// Whether a definition with this state fires under the given session
	/// role.
	pub fn fires_under(&self, role: ReplicationRole) -> bool {
		match self {
			Self::Enabled => true,
			Self::Disabled => false,
			Self::FiresOnOrigin => role != ReplicationRole::Replica,
			Self::FiresOnReplica => role == ReplicationRole::Replica,
		}
	}
}

/// Session replication role. `Local` behaves as `Origin` for the
/// enabled-state filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReplicationRole {
	Origin,
	Local,
	Replica,
}
