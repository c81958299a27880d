// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

use firegate_core::{
	CommandClass, ProcedureId, TriggerEnabled, TriggerId,
	event::{
		EventBus,
		catalog::{TriggerCatalogChanged, TriggerCatalogOp},
	},
	interface::{
		auth::Identity, catalog::TriggerDef, procedure::ProcedureRegistry, settings::SessionSettings,
		transaction::CatalogTransaction,
	},
	return_error,
	result::error::diagnostic::auth::insufficient_privilege,
};
use tracing::instrument;

use crate::{
	TriggerStore, TriggerToCreate,
	cache::{CacheInvalidationListener, TriggerCache},
};

/// Service facade over the trigger definition store and the trigger
/// cache. Owns the invalidation wiring: every committed mutation emits
/// [`TriggerCatalogChanged`] on the bus, and the cache listens there.
/// Hosts with deferred commits emit the same event from their own
/// post-commit hook instead of calling through this facade's emit path.
pub struct TriggerCatalog {
	bus: EventBus,
	cache: TriggerCache,
}

impl TriggerCatalog {
	pub fn new(bus: EventBus, settings: SessionSettings) -> Self {
		let cache = TriggerCache::new(settings);
		bus.register::<TriggerCatalogChanged, _>(CacheInvalidationListener::new(cache.clone()));
		Self {
			bus,
			cache,
		}
	}

	pub fn cache(&self) -> &TriggerCache {
		&self.cache
	}

	pub fn event_bus(&self) -> &EventBus {
		&self.bus
	}

	/// Registered procedures run with elevated rights later on, so only
	/// system identities may touch the trigger catalog.
	fn check_privileges(identity: &Identity) -> crate::Result<()> {
		if !identity.is_system() {
			return_error!(insufficient_privilege(identity));
		}
		Ok(())
	}

	#[instrument(name = "catalog::trigger::register", level = "trace", skip(self, txn, registry, to_create))]
	pub fn register(
		&self,
		txn: &mut dyn CatalogTransaction,
		identity: &Identity,
		registry: &dyn ProcedureRegistry,
		to_create: TriggerToCreate,
	) -> crate::Result<TriggerDef> {
		Self::check_privileges(identity)?;
		let def = TriggerStore::create_trigger(txn, registry, to_create)?;
		self.bus.emit(TriggerCatalogChanged {
			trigger: def.id,
			op: TriggerCatalogOp::Created,
		});
		Ok(def)
	}

	#[instrument(name = "catalog::trigger::drop", level = "trace", skip(self, txn))]
	pub fn drop_trigger(
		&self,
		txn: &mut dyn CatalogTransaction,
		identity: &Identity,
		trigger: TriggerId,
		missing_ok: bool,
	) -> crate::Result<Option<TriggerDef>> {
		Self::check_privileges(identity)?;
		let dropped = TriggerStore::drop_trigger(txn, trigger, missing_ok)?;
		if let Some(def) = &dropped {
			self.bus.emit(TriggerCatalogChanged {
				trigger: def.id,
				op: TriggerCatalogOp::Dropped,
			});
		}
		Ok(dropped)
	}

	#[instrument(name = "catalog::trigger::drop_by_name", level = "trace", skip(self, txn, name))]
	pub fn drop_trigger_by_name(
		&self,
		txn: &mut dyn CatalogTransaction,
		identity: &Identity,
		class: &CommandClass,
		name: &str,
		missing_ok: bool,
	) -> crate::Result<Option<TriggerDef>> {
		Self::check_privileges(identity)?;
		let dropped = TriggerStore::drop_trigger_by_name(txn, class, name, missing_ok)?;
		if let Some(def) = &dropped {
			self.bus.emit(TriggerCatalogChanged {
				trigger: def.id,
				op: TriggerCatalogOp::Dropped,
			});
		}
		Ok(dropped)
	}

	#[instrument(name = "catalog::trigger::rename", level = "trace", skip(self, txn, new_name))]
	pub fn rename(
		&self,
		txn: &mut dyn CatalogTransaction,
		identity: &Identity,
		trigger: TriggerId,
		new_name: &str,
		missing_ok: bool,
	) -> crate::Result<Option<TriggerDef>> {
		Self::check_privileges(identity)?;
		let renamed = TriggerStore::rename_trigger(txn, trigger, new_name, missing_ok)?;
		if let Some(def) = &renamed {
			self.bus.emit(TriggerCatalogChanged {
				trigger: def.id,
				op: TriggerCatalogOp::Renamed,
			});
		}
		Ok(renamed)
	}

	#[instrument(name = "catalog::trigger::set_enabled", level = "trace", skip(self, txn))]
	pub fn set_enabled(
		&self,
		txn: &mut dyn CatalogTransaction,
		identity: &Identity,
		trigger: TriggerId,
		enabled: TriggerEnabled,
	) -> crate::Result<TriggerDef> {
		Self::check_privileges(identity)?;
		let def = TriggerStore::alter_trigger(txn, trigger, enabled)?;
		self.bus.emit(TriggerCatalogChanged {
			trigger: def.id,
			op: TriggerCatalogOp::Altered,
		});
		Ok(def)
	}

	/// Cascade from a host-side procedure drop; the host already
	/// authorized the drop of the procedure itself.
	#[instrument(name = "catalog::trigger::drop_procedure_triggers", level = "trace", skip(self, txn))]
	pub fn drop_procedure_triggers(
		&self,
		txn: &mut dyn CatalogTransaction,
		procedure: ProcedureId,
	) -> crate::Result<Vec<TriggerDef>> {
		let dropped = TriggerStore::drop_procedure_triggers(txn, procedure)?;
		for def in &dropped {
			self.bus.emit(TriggerCatalogChanged {
				trigger: def.id,
				op: TriggerCatalogOp::Dropped,
			});
		}
		Ok(dropped)
	}

	pub fn find_trigger(
		&self,
		txn: &mut dyn CatalogTransaction,
		trigger: TriggerId,
	) -> crate::Result<Option<TriggerDef>> {
		TriggerStore::find_trigger(txn, trigger)
	}

	pub fn find_trigger_by_name(
		&self,
		txn: &mut dyn CatalogTransaction,
		class: &CommandClass,
		name: &str,
	) -> crate::Result<Option<TriggerDef>> {
		TriggerStore::find_trigger_by_name(txn, class, name)
	}

	pub fn list_triggers(&self, txn: &mut dyn CatalogTransaction) -> crate::Result<Vec<TriggerDef>> {
		TriggerStore::list_triggers(txn)
	}
}
