// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

use firegate_core::{
	CommandClass, ProcedureId, TriggerId,
	interface::{catalog::TriggerDef, transaction::CatalogTransaction},
	key::{CommandTriggerKey, EncodableKey, ProcedureTriggerKey, TriggerKey},
	return_error,
	result::error::diagnostic::catalog::trigger_id_not_found,
};

use crate::TriggerStore;

impl TriggerStore {
	pub(crate) fn drop_trigger(
		txn: &mut dyn CatalogTransaction,
		trigger: TriggerId,
		missing_ok: bool,
	) -> crate::Result<Option<TriggerDef>> {
		let Some(def) = Self::find_trigger(txn, trigger)? else {
			if missing_ok {
				return Ok(None);
			}
			return_error!(trigger_id_not_found(trigger));
		};

		txn.remove(&TriggerKey::encoded(trigger))?;
		txn.remove(&CommandTriggerKey::encoded(&def.class, &def.name))?;
		txn.remove(&ProcedureTriggerKey::encoded(def.procedure, trigger))?;

		Ok(Some(def))
	}

	pub(crate) fn drop_trigger_by_name(
		txn: &mut dyn CatalogTransaction,
		class: &CommandClass,
		name: &str,
		missing_ok: bool,
	) -> crate::Result<Option<TriggerDef>> {
		match Self::get_trigger_id_by_name(txn, class, name, missing_ok)? {
			Some(id) => Self::drop_trigger(txn, id, false),
			None => Ok(None),
		}
	}

	/// Cascade entry point: the host dropped a procedure, every trigger
	/// depending on it goes with it.
	pub(crate) fn drop_procedure_triggers(
		txn: &mut dyn CatalogTransaction,
		procedure: ProcedureId,
	) -> crate::Result<Vec<TriggerDef>> {
		let mut ids = Vec::new();
		let mut stream = txn.range(ProcedureTriggerKey::full_scan(procedure))?;
		while let Some(entry) = stream.next() {
			let entry = entry?;
			if let Some(key) = ProcedureTriggerKey::decode(&entry.key) {
				ids.push(key.trigger);
			}
		}
		drop(stream);

		let mut dropped = Vec::with_capacity(ids.len());
		for id in ids {
			if let Some(def) = Self::drop_trigger(txn, id, false)? {
				dropped.push(def);
			}
		}
		Ok(dropped)
	}
}

#[cfg(test)]
pub mod tests {
	use firegate_core::{CommandClass, FiringPhase, TriggerId};
	use firegate_testing::{create_trigger, test_catalog, test_procedures, TestTransaction};

	use crate::TriggerStore;

	#[test]
	fn test_drop_removes_all_rows() {
		let (catalog, _bus) = test_catalog();
		let registry = test_procedures();
		let mut txn = TestTransaction::new();

		let def = create_trigger(&catalog, &mut txn, &registry, "audit", "CREATE TABLE", FiringPhase::Before);
		let dropped = TriggerStore::drop_trigger(&mut txn, def.id, false).unwrap().unwrap();
		assert_eq!(dropped.name, "audit");

		assert!(TriggerStore::find_trigger(&mut txn, def.id).unwrap().is_none());
		let class = CommandClass::from_tag_str("CREATE TABLE");
		assert!(TriggerStore::find_trigger_by_name(&mut txn, &class, "audit").unwrap().is_none());
	}

	#[test]
	fn test_drop_missing() {
		let mut txn = TestTransaction::new();

		let err = TriggerStore::drop_trigger(&mut txn, TriggerId(9), false).unwrap_err();
		assert_eq!(err.diagnostic().code, "TG_004");

		let skipped = TriggerStore::drop_trigger(&mut txn, TriggerId(9), true).unwrap();
		assert!(skipped.is_none());
	}

	#[test]
	fn test_drop_by_name_missing_ok() {
		let mut txn = TestTransaction::new();
		let class = CommandClass::from_tag_str("CREATE TABLE");

		let skipped = TriggerStore::drop_trigger_by_name(&mut txn, &class, "ghost", true).unwrap();
		assert!(skipped.is_none());

		let err = TriggerStore::drop_trigger_by_name(&mut txn, &class, "ghost", false).unwrap_err();
		assert_eq!(err.diagnostic().code, "TG_004");
	}

	#[test]
	fn test_procedure_drop_cascades() {
		let (catalog, _bus) = test_catalog();
		let registry = test_procedures();
		let mut txn = TestTransaction::new();

		let a = create_trigger(&catalog, &mut txn, &registry, "a_check", "CREATE TABLE", FiringPhase::Before);
		let b = create_trigger(&catalog, &mut txn, &registry, "b_check", "DROP TABLE", FiringPhase::Before);

		let dropped = TriggerStore::drop_procedure_triggers(&mut txn, a.procedure).unwrap();
		let mut names: Vec<_> = dropped.iter().map(|def| def.name.clone()).collect();
		names.sort();
		assert_eq!(names, vec!["a_check", "b_check"]);

		assert!(TriggerStore::find_trigger(&mut txn, a.id).unwrap().is_none());
		assert!(TriggerStore::find_trigger(&mut txn, b.id).unwrap().is_none());
	}
}
