// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

use firegate_core::{
	CommandClass, FiringEvent, FiringPhase, ProcedureId, TriggerEnabled,
	interface::{
		catalog::{ReturnContract, TriggerDef},
		procedure::ProcedureRegistry,
		transaction::CatalogTransaction,
	},
	key::{CommandTriggerKey, ProcedureTriggerKey, TriggerKey},
	return_error,
	result::error::diagnostic::catalog::{
		conflicting_trigger_phase, invalid_return_contract, non_cancellable_command, procedure_not_found,
		trigger_already_exists, wildcard_instead_of_unsupported,
	},
};
use tracing::warn;

use crate::{
	TriggerStore,
	store::{
		sequence::SystemSequence,
		trigger::schema::{command_trigger, trigger},
	},
};

#[derive(Debug, Clone)]
pub struct TriggerToCreate {
	pub name: String,
	pub class: CommandClass,
	pub event: FiringEvent,
	pub phase: FiringPhase,
	pub procedure: ProcedureId,
}

impl TriggerStore {
	/// Validate and persist a trigger definition. Every check runs before
	/// the first write, so a rejected registration leaves no trace.
	pub(crate) fn create_trigger(
		txn: &mut dyn CatalogTransaction,
		registry: &dyn ProcedureRegistry,
		to_create: TriggerToCreate,
	) -> crate::Result<TriggerDef> {
		if let Some(existing) = Self::find_trigger_by_name(txn, &to_create.class, &to_create.name)? {
			return_error!(trigger_already_exists(&to_create.class, &existing.name));
		}

		Self::check_phase_conflicts(txn, &to_create)?;
		Self::check_return_contract(registry, &to_create)?;
		Self::check_command_restrictions(&to_create)?;

		let id = SystemSequence::next_trigger_id(txn)?;

		let mut row = trigger::SCHEMA.allocate();
		trigger::SCHEMA.set_u64(&mut row, trigger::ID, id);
		trigger::SCHEMA.set_utf8(&mut row, trigger::NAME, &to_create.name);
		trigger::SCHEMA.set_utf8(&mut row, trigger::CLASS, to_create.class.as_str());
		trigger::SCHEMA.set_u8(&mut row, trigger::EVENT, to_create.event.code());
		trigger::SCHEMA.set_u8(&mut row, trigger::PHASE, to_create.phase.code());
		trigger::SCHEMA.set_u64(&mut row, trigger::PROCEDURE, to_create.procedure);
		trigger::SCHEMA.set_u8(&mut row, trigger::ENABLED, TriggerEnabled::FiresOnOrigin.code());
		txn.set(&TriggerKey::encoded(id), row)?;

		let mut index = command_trigger::SCHEMA.allocate();
		command_trigger::SCHEMA.set_u64(&mut index, command_trigger::ID, id);
		txn.set(&CommandTriggerKey::encoded(&to_create.class, &to_create.name), index)?;

		// Dependency edge: dropping the procedure cascades to this
		// trigger. The key carries the whole edge; the row is empty.
		txn.set(
			&ProcedureTriggerKey::encoded(to_create.procedure, id),
			firegate_core::value::encoded::EncodedValues(Vec::new()),
		)?;

		Self::get_trigger(txn, id)
	}

	/// INSTEAD OF is mutually exclusive with BEFORE and with AFTER per
	/// command class, in both registration directions.
	fn check_phase_conflicts(txn: &mut dyn CatalogTransaction, to_create: &TriggerToCreate) -> crate::Result<()> {
		let existing = Self::list_class_triggers(txn, &to_create.class)?;
		for def in existing {
			let conflict = match to_create.phase {
				FiringPhase::InsteadOf => true,
				FiringPhase::Before | FiringPhase::After => def.phase == FiringPhase::InsteadOf,
			};
			if conflict && def.phase != to_create.phase {
				return_error!(conflicting_trigger_phase(
					&to_create.class,
					to_create.phase,
					def.phase,
					&def.name
				));
			}
		}
		Ok(())
	}

	fn check_return_contract(registry: &dyn ProcedureRegistry, to_create: &TriggerToCreate) -> crate::Result<()> {
		let Some(procedure) = registry.find_procedure(to_create.procedure) else {
			return_error!(procedure_not_found(to_create.procedure));
		};

		let expected = match to_create.phase {
			FiringPhase::Before | FiringPhase::InsteadOf => ReturnContract::Boolean,
			FiringPhase::After => ReturnContract::Nothing,
		};
		if procedure.returns != expected {
			return_error!(invalid_return_contract(&procedure.name, to_create.phase, procedure.returns));
		}
		Ok(())
	}

	/// Static per-tag restrictions. Self-committing commands reject AFTER
	/// outright; commands whose variants escape the dispatch hook are
	/// accepted with a warning.
	fn check_command_restrictions(to_create: &TriggerToCreate) -> crate::Result<()> {
		match &to_create.class {
			CommandClass::Any => {
				if to_create.phase == FiringPhase::InsteadOf {
					return_error!(wildcard_instead_of_unsupported());
				}
			}
			CommandClass::Tag(tag) => {
				if to_create.phase == FiringPhase::After && tag.is_self_committing() {
					return_error!(non_cancellable_command(tag.as_str()));
				}
				if to_create.phase == FiringPhase::After && tag.as_str() == "CREATE INDEX" {
					warn!(
						trigger = %to_create.name,
						"AFTER CREATE INDEX triggers do not fire on concurrently-built indexes"
					);
				}
				if tag.as_str() == "REINDEX" {
					warn!(
						trigger = %to_create.name,
						"REINDEX triggers do not fire on database-wide reindex"
					);
				}
			}
		}
		Ok(())
	}
}
