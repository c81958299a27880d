// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

use firegate_core::{
	CommandClass, TriggerId,
	interface::{catalog::TriggerDef, transaction::CatalogTransaction},
	key::CommandTriggerKey,
};

use crate::{TriggerStore, store::trigger::schema::command_trigger};

impl TriggerStore {
	/// Every trigger definition, ordered by class and then by name within
	/// the class. This is the scan the cache build consumes: appending in
	/// scan order yields the firing order of each bucket.
	pub(crate) fn list_triggers(txn: &mut dyn CatalogTransaction) -> crate::Result<Vec<TriggerDef>> {
		Self::list_index(txn, CommandTriggerKey::full_scan())
	}

	/// Triggers of one class, in name order.
	pub(crate) fn list_class_triggers(
		txn: &mut dyn CatalogTransaction,
		class: &CommandClass,
	) -> crate::Result<Vec<TriggerDef>> {
		Self::list_index(txn, CommandTriggerKey::class_scan(class))
	}

	fn list_index(
		txn: &mut dyn CatalogTransaction,
		range: firegate_core::key::EncodedKeyRange,
	) -> crate::Result<Vec<TriggerDef>> {
		let mut ids = Vec::new();
		let mut stream = txn.range(range)?;
		while let Some(entry) = stream.next() {
			let entry = entry?;
			ids.push(TriggerId(command_trigger::SCHEMA.get_u64(&entry.values, command_trigger::ID)));
		}
		drop(stream);

		let mut defs = Vec::with_capacity(ids.len());
		for id in ids {
			defs.push(Self::get_trigger(txn, id)?);
		}
		Ok(defs)
	}
}
