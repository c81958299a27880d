// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

use firegate_core::{
	CommandClass, FiringEvent, FiringPhase, ProcedureId, TriggerEnabled, TriggerId, error,
	interface::{catalog::TriggerDef, transaction::CatalogTransaction},
	internal,
	key::{CommandTriggerKey, TriggerKey},
	return_error,
	result::error::diagnostic::catalog::trigger_not_found,
	value::encoded::EncodedValues,
};

use crate::{
	TriggerStore,
	store::trigger::schema::{command_trigger, trigger},
};

impl TriggerStore {
	pub(crate) fn find_trigger(
		txn: &mut dyn CatalogTransaction,
		trigger: TriggerId,
	) -> crate::Result<Option<TriggerDef>> {
		let Some(row) = txn.get(&TriggerKey::encoded(trigger))? else {
			return Ok(None);
		};

		Ok(Some(Self::read_trigger(&row)?))
	}

	pub(crate) fn get_trigger(txn: &mut dyn CatalogTransaction, trigger: TriggerId) -> crate::Result<TriggerDef> {
		Self::find_trigger(txn, trigger)?.ok_or_else(|| {
			error!(internal!(
				"trigger {} not found in catalog, this indicates a catalog inconsistency",
				trigger
			))
		})
	}

	pub(crate) fn find_trigger_by_name(
		txn: &mut dyn CatalogTransaction,
		class: &CommandClass,
		name: &str,
	) -> crate::Result<Option<TriggerDef>> {
		let Some(row) = txn.get(&CommandTriggerKey::encoded(class, name))? else {
			return Ok(None);
		};

		let trigger = TriggerId(command_trigger::SCHEMA.get_u64(&row, command_trigger::ID));
		Ok(Some(Self::get_trigger(txn, trigger)?))
	}

	/// Name lookup with the caller-selected missing-is-OK policy.
	pub(crate) fn get_trigger_id_by_name(
		txn: &mut dyn CatalogTransaction,
		class: &CommandClass,
		name: &str,
		missing_ok: bool,
	) -> crate::Result<Option<TriggerId>> {
		match txn.get(&CommandTriggerKey::encoded(class, name))? {
			Some(row) => Ok(Some(TriggerId(command_trigger::SCHEMA.get_u64(&row, command_trigger::ID)))),
			None if missing_ok => Ok(None),
			None => return_error!(trigger_not_found(class, name)),
		}
	}

	pub(crate) fn read_trigger(row: &EncodedValues) -> crate::Result<TriggerDef> {
		let id = TriggerId(trigger::SCHEMA.get_u64(row, trigger::ID));
		let name = trigger::SCHEMA.get_utf8(row, trigger::NAME).to_string();
		let class = CommandClass::from_tag_str(trigger::SCHEMA.get_utf8(row, trigger::CLASS));

		let event_code = trigger::SCHEMA.get_u8(row, trigger::EVENT);
		let event = FiringEvent::from_code(event_code)
			.ok_or_else(|| error!(internal!("trigger {} row carries unknown event code {}", id, event_code)))?;

		let phase_code = trigger::SCHEMA.get_u8(row, trigger::PHASE);
		let phase = FiringPhase::from_code(phase_code)
			.ok_or_else(|| error!(internal!("trigger {} row carries unknown phase code {}", id, phase_code)))?;

		let procedure = ProcedureId(trigger::SCHEMA.get_u64(row, trigger::PROCEDURE));

		let enabled_code = trigger::SCHEMA.get_u8(row, trigger::ENABLED);
		let enabled = TriggerEnabled::from_code(enabled_code).ok_or_else(|| {
			error!(internal!("trigger {} row carries unknown enabled code {}", id, enabled_code))
		})?;

		Ok(TriggerDef {
			id,
			name,
			class,
			event,
			phase,
			procedure,
			enabled,
		})
	}
}
