// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

use firegate_core::{
	TriggerEnabled, TriggerId,
	interface::{catalog::TriggerDef, transaction::CatalogTransaction},
	key::TriggerKey,
	return_error,
	result::error::diagnostic::catalog::trigger_id_not_found,
};

use crate::{TriggerStore, store::trigger::schema::trigger};

impl TriggerStore {
	/// Pure state mutation, no validation beyond existence.
	pub(crate) fn alter_trigger(
		txn: &mut dyn CatalogTransaction,
		id: TriggerId,
		enabled: TriggerEnabled,
	) -> crate::Result<TriggerDef> {
		let key = TriggerKey::encoded(id);
		let Some(mut row) = txn.get(&key)? else {
			return_error!(trigger_id_not_found(id));
		};

		trigger::SCHEMA.set_u8(&mut row, trigger::ENABLED, enabled.code());
		txn.set(&key, row)?;

		Self::get_trigger(txn, id)
	}
}
