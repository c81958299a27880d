// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

use std::{
	collections::HashMap,
	sync::{Arc, atomic::Ordering},
};

use firegate_core::{FiringPhase, interface::transaction::CatalogTransaction};
use tracing::debug;

use super::{CacheSnapshot, CachedProcedure, TriggerCache};
use crate::TriggerStore;

impl TriggerCache {
	/// Current snapshot, rebuilding when there is none, the epoch moved,
	/// or the session replication role changed since the last build.
	pub(crate) fn snapshot(&self, txn: &mut dyn CatalogTransaction) -> crate::Result<Arc<CacheSnapshot>> {
		let epoch = self.inner().epoch.load(Ordering::Acquire);
		let role = self.inner().settings.replication_role();

		{
			let guard = self.inner().snapshot.read();
			if let Some(snapshot) = guard.as_ref() {
				if snapshot.epoch == epoch && snapshot.role == role {
					return Ok(snapshot.clone());
				}
			}
		}

		let built = self.build(txn)?;

		// Concurrent sessions may race to publish; each candidate is a
		// complete snapshot, so last-write-wins is safe. A snapshot built
		// against an epoch that moved mid-scan fails the check above on
		// the next lookup and is rebuilt then.
		let mut guard = self.inner().snapshot.write();
		*guard = Some(built.clone());
		Ok(built)
	}

	/// Full scan of the definition rows in (class, name) order. Appending
	/// in scan order is what makes every bucket name-ordered; the firing
	/// order never depends on registration order.
	fn build(&self, txn: &mut dyn CatalogTransaction) -> crate::Result<Arc<CacheSnapshot>> {
		let epoch = self.inner().epoch.load(Ordering::Acquire);
		let role = self.inner().settings.replication_role();

		let mut entries: HashMap<_, super::PhaseProcedures> = HashMap::new();
		let defs = TriggerStore::list_triggers(txn)?;
		let total = defs.len();

		for def in defs {
			if !def.enabled.fires_under(role) {
				continue;
			}

			let buckets = entries.entry((def.class.clone(), def.event)).or_default();
			let cached = CachedProcedure {
				trigger: def.id,
				name: def.name,
				procedure: def.procedure,
			};
			match def.phase {
				FiringPhase::Before => buckets.before.push(cached),
				FiringPhase::After => buckets.after.push(cached),
				FiringPhase::InsteadOf => buckets.instead_of.push(cached),
			}
		}

		debug!(total, entries = entries.len(), ?role, "rebuilt trigger cache");

		Ok(Arc::new(CacheSnapshot {
			epoch,
			role,
			entries,
		}))
	}
}

#[cfg(test)]
pub mod tests {
	use firegate_core::{
		CommandClass, FiringEvent, FiringPhase, ReplicationRole, TriggerEnabled, interface::auth::Identity,
	};
	use firegate_testing::{
		create_trigger, test_catalog, test_catalog_with_role, test_procedures, TestTransaction,
	};

	#[test]
	fn test_firing_order_is_lexicographic() {
		let (catalog, _bus) = test_catalog();
		let registry = test_procedures();
		let mut txn = TestTransaction::new();

		create_trigger(&catalog, &mut txn, &registry, "b_check", "CREATE TABLE", FiringPhase::Before);
		create_trigger(&catalog, &mut txn, &registry, "a_check", "CREATE TABLE", FiringPhase::Before);
		create_trigger(&catalog, &mut txn, &registry, "m_check", "CREATE TABLE", FiringPhase::Before);

		let class = CommandClass::from_tag_str("CREATE TABLE");
		let triggers = catalog.cache().lookup(&mut txn, &class, FiringEvent::DdlCommand).unwrap();
		let names: Vec<_> = triggers.class_procs.before.iter().map(|p| p.name.as_str()).collect();
		assert_eq!(names, vec!["a_check", "b_check", "m_check"]);
	}

	#[test]
	fn test_disabled_triggers_never_listed() {
		let (catalog, _bus) = test_catalog();
		let registry = test_procedures();
		let mut txn = TestTransaction::new();

		let def = create_trigger(&catalog, &mut txn, &registry, "audit", "CREATE TABLE", FiringPhase::Before);
		catalog.set_enabled(&mut txn, &Identity::root(), def.id, TriggerEnabled::Disabled).unwrap();

		let class = CommandClass::from_tag_str("CREATE TABLE");
		let triggers = catalog.cache().lookup(&mut txn, &class, FiringEvent::DdlCommand).unwrap();
		assert!(triggers.class_procs.is_empty());
	}

	#[test]
	fn test_replication_role_filter() {
		let (catalog, settings, _bus) = test_catalog_with_role(ReplicationRole::Origin);
		let registry = test_procedures();
		let mut txn = TestTransaction::new();

		let origin_only =
			create_trigger(&catalog, &mut txn, &registry, "origin_only", "CREATE TABLE", FiringPhase::Before);
		let replica_only =
			create_trigger(&catalog, &mut txn, &registry, "replica_only", "CREATE TABLE", FiringPhase::Before);
		let always = create_trigger(&catalog, &mut txn, &registry, "always", "CREATE TABLE", FiringPhase::Before);

		let root = Identity::root();
		catalog.set_enabled(&mut txn, &root, origin_only.id, TriggerEnabled::FiresOnOrigin).unwrap();
		catalog.set_enabled(&mut txn, &root, replica_only.id, TriggerEnabled::FiresOnReplica).unwrap();
		catalog.set_enabled(&mut txn, &root, always.id, TriggerEnabled::Enabled).unwrap();

		let class = CommandClass::from_tag_str("CREATE TABLE");

		let on_origin = catalog.cache().lookup(&mut txn, &class, FiringEvent::DdlCommand).unwrap();
		let names: Vec<_> = on_origin.class_procs.before.iter().map(|p| p.name.as_str()).collect();
		assert_eq!(names, vec!["always", "origin_only"]);

		// A role change alone must force a rebuild with the new filter.
		settings.set_replication_role(ReplicationRole::Replica);
		let on_replica = catalog.cache().lookup(&mut txn, &class, FiringEvent::DdlCommand).unwrap();
		let names: Vec<_> = on_replica.class_procs.before.iter().map(|p| p.name.as_str()).collect();
		assert_eq!(names, vec!["always", "replica_only"]);
	}

	#[test]
	fn test_lookup_reflects_every_mutation() {
		let (catalog, _bus) = test_catalog();
		let registry = test_procedures();
		let mut txn = TestTransaction::new();
		let class = CommandClass::from_tag_str("CREATE TABLE");
		let root = Identity::root();

		let def = create_trigger(&catalog, &mut txn, &registry, "audit", "CREATE TABLE", FiringPhase::Before);
		let listed = catalog.cache().lookup(&mut txn, &class, FiringEvent::DdlCommand).unwrap();
		assert_eq!(listed.class_procs.before.len(), 1);

		catalog.rename(&mut txn, &root, def.id, "zz_audit", false).unwrap();
		let listed = catalog.cache().lookup(&mut txn, &class, FiringEvent::DdlCommand).unwrap();
		assert_eq!(listed.class_procs.before[0].name, "zz_audit");

		catalog.set_enabled(&mut txn, &root, def.id, TriggerEnabled::Disabled).unwrap();
		let listed = catalog.cache().lookup(&mut txn, &class, FiringEvent::DdlCommand).unwrap();
		assert!(listed.class_procs.is_empty());

		catalog.set_enabled(&mut txn, &root, def.id, TriggerEnabled::Enabled).unwrap();
		catalog.drop_trigger(&mut txn, &root, def.id, false).unwrap();
		let listed = catalog.cache().lookup(&mut txn, &class, FiringEvent::DdlCommand).unwrap();
		assert!(listed.class_procs.is_empty());
	}

	#[test]
	fn test_lookup_idempotent_without_mutation() {
		let (catalog, _bus) = test_catalog();
		let registry = test_procedures();
		let mut txn = TestTransaction::new();
		let class = CommandClass::from_tag_str("CREATE TABLE");

		create_trigger(&catalog, &mut txn, &registry, "b_check", "CREATE TABLE", FiringPhase::Before);
		create_trigger(&catalog, &mut txn, &registry, "a_check", "CREATE TABLE", FiringPhase::Before);

		let first = catalog.cache().lookup(&mut txn, &class, FiringEvent::DdlCommand).unwrap();
		let second = catalog.cache().lookup(&mut txn, &class, FiringEvent::DdlCommand).unwrap();
		assert_eq!(first.class_procs, second.class_procs);
		assert_eq!(first.any_procs, second.any_procs);
	}
}
