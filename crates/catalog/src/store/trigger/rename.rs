// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

use firegate_core::{
	TriggerId,
	interface::{catalog::TriggerDef, transaction::CatalogTransaction},
	key::{CommandTriggerKey, TriggerKey},
	return_error,
	result::error::diagnostic::catalog::{trigger_already_exists, trigger_id_not_found},
};

use crate::{
	TriggerStore,
	store::trigger::schema::{command_trigger, trigger},
};

impl TriggerStore {
	/// Renaming changes the firing position of the trigger within its
	/// class, so both the primary row and the (class, name) index move.
	pub(crate) fn rename_trigger(
		txn: &mut dyn CatalogTransaction,
		id: TriggerId,
		new_name: &str,
		missing_ok: bool,
	) -> crate::Result<Option<TriggerDef>> {
		let Some(def) = Self::find_trigger(txn, id)? else {
			if missing_ok {
				return Ok(None);
			}
			return_error!(trigger_id_not_found(id));
		};

		if Self::find_trigger_by_name(txn, &def.class, new_name)?.is_some() {
			return_error!(trigger_already_exists(&def.class, new_name));
		}

		let mut row = trigger::SCHEMA.allocate();
		trigger::SCHEMA.set_u64(&mut row, trigger::ID, def.id);
		trigger::SCHEMA.set_utf8(&mut row, trigger::NAME, new_name);
		trigger::SCHEMA.set_utf8(&mut row, trigger::CLASS, def.class.as_str());
		trigger::SCHEMA.set_u8(&mut row, trigger::EVENT, def.event.code());
		trigger::SCHEMA.set_u8(&mut row, trigger::PHASE, def.phase.code());
		trigger::SCHEMA.set_u64(&mut row, trigger::PROCEDURE, def.procedure);
		trigger::SCHEMA.set_u8(&mut row, trigger::ENABLED, def.enabled.code());
		txn.set(&TriggerKey::encoded(id), row)?;

		txn.remove(&CommandTriggerKey::encoded(&def.class, &def.name))?;
		let mut index = command_trigger::SCHEMA.allocate();
		command_trigger::SCHEMA.set_u64(&mut index, command_trigger::ID, id);
		txn.set(&CommandTriggerKey::encoded(&def.class, new_name), index)?;

		Ok(Some(TriggerDef {
			name: new_name.to_string(),
			..def
		}))
	}
}
