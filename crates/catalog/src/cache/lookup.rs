// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

use firegate_core::{CommandClass, FiringEvent, interface::transaction::CatalogTransaction};

use super::{PhaseProcedures, TriggerCache};

/// Resolved procedure lists for one command. Specific-class and wildcard
/// procedures are reported separately; the dispatch engine decides how to
/// combine them (it runs both, specific first).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandTriggers {
	pub class_procs: PhaseProcedures,
	pub any_procs: PhaseProcedures,
}

impl CommandTriggers {
	pub fn is_empty(&self) -> bool {
		self.class_procs.is_empty() && self.any_procs.is_empty()
	}

	pub fn has_after(&self) -> bool {
		!self.class_procs.after.is_empty() || !self.any_procs.after.is_empty()
	}

	/// INSTEAD OF applies to the specific class only; the wildcard class
	/// cannot register INSTEAD OF.
	pub fn instead_of(&self) -> &[super::CachedProcedure] {
		&self.class_procs.instead_of
	}
}

impl TriggerCache {
	pub fn lookup(
		&self,
		txn: &mut dyn CatalogTransaction,
		class: &CommandClass,
		event: FiringEvent,
	) -> crate::Result<CommandTriggers> {
		let snapshot = self.snapshot(txn)?;

		let class_procs =
			snapshot.entries.get(&(class.clone(), event)).cloned().unwrap_or_default();
		let any_procs = if *class == CommandClass::Any {
			PhaseProcedures::default()
		} else {
			snapshot.entries.get(&(CommandClass::Any, event)).cloned().unwrap_or_default()
		};

		Ok(CommandTriggers {
			class_procs,
			any_procs,
		})
	}
}
