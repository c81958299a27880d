// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

//! Derived, disposable index over the trigger definition rows, keyed by
//! (command class, firing event) and partitioned by phase. Shared
//! read-mostly across sessions; any catalog mutation discards it wholesale
//! and the next lookup rebuilds it from a full scan (build-then-swap, so
//! concurrent readers see either the old or the new snapshot, never a
//! partially-built one).

use std::{
	collections::HashMap,
	sync::{
		Arc,
		atomic::{AtomicU64, Ordering},
	},
};

use firegate_core::{
	CommandClass, FiringEvent, ProcedureId, ReplicationRole, TriggerId,
	event::{EventListener, catalog::TriggerCatalogChanged},
	interface::settings::SessionSettings,
};
use parking_lot::RwLock;

mod build;
mod lookup;

pub use lookup::CommandTriggers;

/// One cached procedure reference; the name is kept for veto reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedProcedure {
	pub trigger: TriggerId,
	pub name: String,
	pub procedure: ProcedureId,
}

/// Per-phase, name-ordered procedure lists of one (class, event) entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhaseProcedures {
	pub before: Vec<CachedProcedure>,
	pub after: Vec<CachedProcedure>,
	pub instead_of: Vec<CachedProcedure>,
}

impl PhaseProcedures {
	pub fn is_empty(&self) -> bool {
		self.before.is_empty() && self.after.is_empty() && self.instead_of.is_empty()
	}
}

pub(crate) struct CacheSnapshot {
	/// Invalidation epoch observed before the build scan started.
	pub(crate) epoch: u64,
	/// Replication role the build filtered under.
	pub(crate) role: ReplicationRole,
	pub(crate) entries: HashMap<(CommandClass, FiringEvent), PhaseProcedures>,
}

#[derive(Clone)]
pub struct TriggerCache(Arc<TriggerCacheInner>);

pub(crate) struct TriggerCacheInner {
	pub(crate) settings: SessionSettings,
	pub(crate) epoch: AtomicU64,
	pub(crate) snapshot: RwLock<Option<Arc<CacheSnapshot>>>,
}

impl TriggerCache {
	pub fn new(settings: SessionSettings) -> Self {
		Self(Arc::new(TriggerCacheInner {
			settings,
			epoch: AtomicU64::new(0),
			snapshot: RwLock::new(None),
		}))
	}

	/// Discard the cache. Cheap; the next lookup pays for the rebuild.
	pub fn invalidate(&self) {
		self.0.epoch.fetch_add(1, Ordering::AcqRel);
		*self.0.snapshot.write() = None;
	}

	pub(crate) fn inner(&self) -> &TriggerCacheInner {
		&self.0
	}
}

/// Bridges the catalog-change event to cache invalidation.
pub(crate) struct CacheInvalidationListener {
	cache: TriggerCache,
}

impl CacheInvalidationListener {
	pub(crate) fn new(cache: TriggerCache) -> Self {
		Self {
			cache,
		}
	}
}

impl EventListener<TriggerCatalogChanged> for CacheInvalidationListener {
	fn on(&self, _event: &TriggerCatalogChanged) {
		self.cache.invalidate();
	}
}
