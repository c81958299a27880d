// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

use std::sync::Arc;

use firegate_catalog::CommandTriggers;
use firegate_core::{CommandTag, FiringEvent, interface::command::CommandIntrospection};

/// Dispatch state of one command. The two firing passes drive it forward;
/// calling a pass out of order is an internal error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FiringState {
	NotStarted,
	BeforeOrInsteadRunning,
	Cancelled,
	Substituted,
	Proceed,
	AfterRunning,
	Done,
}

/// Per-command firing context: the command's identity, the procedure
/// lists resolved once from the cache, and the introspection capability
/// the passes consult lazily. Owned by the command's execution frame,
/// never persisted. A context whose pass returned an error is poisoned
/// and must be discarded with the failing command.
pub struct CommandContext {
	pub(crate) tag: Option<CommandTag>,
	pub(crate) event: FiringEvent,
	pub(crate) triggers: CommandTriggers,
	pub(crate) introspection: Arc<dyn CommandIntrospection>,
	pub(crate) state: FiringState,
}

impl CommandContext {
	/// `None` for pure wildcard firings that carry no classified tag.
	pub fn tag(&self) -> Option<&CommandTag> {
		self.tag.as_ref()
	}

	pub fn event(&self) -> FiringEvent {
		self.event
	}

	pub fn state(&self) -> FiringState {
		self.state
	}

	/// Fast check the pipeline uses to skip identity and deparse work for
	/// commands with no registered triggers at all.
	pub fn fires_triggers(&self) -> bool {
		!self.triggers.is_empty()
	}

	pub fn fires_after_triggers(&self) -> bool {
		self.triggers.has_after()
	}
}
