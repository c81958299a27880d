// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

use serde::{Deserialize, Serialize};

use crate::{
	command::{CommandClass, FiringEvent, FiringPhase, TriggerEnabled},
	id::{ProcedureId, TriggerId},
};

/// A persisted trigger definition. The row is the truth; everything the
/// cache holds is derived from rows of this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerDef {
	pub id: TriggerId,
	/// Unique within the command-class scope. Firing order within a phase
	/// bucket is lexicographic by this name.
	pub name: String,
	pub class: CommandClass,
	pub event: FiringEvent,
	pub phase: FiringPhase,
	pub procedure: ProcedureId,
	pub enabled: TriggerEnabled,
}

/// What a procedure declares to return, validated against the phase
/// contract at registration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReturnContract {
	/// A boolean veto signal; required for BEFORE and INSTEAD OF.
	Boolean,
	/// No value; required for AFTER.
	Nothing,
}
