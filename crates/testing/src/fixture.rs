// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

use firegate_catalog::{TriggerCatalog, TriggerToCreate};
use firegate_core::{
	CommandClass, FiringEvent, FiringPhase, ProcedureId, ReplicationRole,
	event::EventBus,
	interface::{auth::Identity, catalog::TriggerDef, settings::SessionSettings},
};

use crate::{TestProcedures, TestTransaction};

/// Boolean-contract procedure preloaded by [`test_procedures`]; always
/// returns `true`.
pub const BOOLEAN_PROCEDURE: ProcedureId = ProcedureId(1);
/// Void-contract procedure preloaded by [`test_procedures`].
pub const VOID_PROCEDURE: ProcedureId = ProcedureId(2);

pub fn test_procedures() -> TestProcedures {
	let procedures = TestProcedures::new();
	procedures.define_boolean(BOOLEAN_PROCEDURE, "check_ok", true, None);
	procedures.define_void(VOID_PROCEDURE, "log_only", None);
	procedures
}

/// Isolated catalog on an origin-role session.
pub fn test_catalog() -> (TriggerCatalog, EventBus) {
	let bus = EventBus::new();
	let catalog = TriggerCatalog::new(bus.clone(), SessionSettings::default());
	(catalog, bus)
}

/// Isolated catalog with a controllable replication role.
pub fn test_catalog_with_role(role: ReplicationRole) -> (TriggerCatalog, SessionSettings, EventBus) {
	let bus = EventBus::new();
	let settings = SessionSettings::new(role);
	let catalog = TriggerCatalog::new(bus.clone(), settings.clone());
	(catalog, settings, bus)
}

/// Register a trigger on the DDL event, picking the preloaded procedure
/// that satisfies the phase's return contract.
pub fn create_trigger(
	catalog: &TriggerCatalog,
	txn: &mut TestTransaction,
	registry: &TestProcedures,
	name: &str,
	tag: &str,
	phase: FiringPhase,
) -> TriggerDef {
	create_trigger_for_event(catalog, txn, registry, name, tag, FiringEvent::DdlCommand, phase)
}

pub fn create_trigger_for_event(
	catalog: &TriggerCatalog,
	txn: &mut TestTransaction,
	registry: &TestProcedures,
	name: &str,
	tag: &str,
	event: FiringEvent,
	phase: FiringPhase,
) -> TriggerDef {
	let procedure = match phase {
		FiringPhase::Before | FiringPhase::InsteadOf => BOOLEAN_PROCEDURE,
		FiringPhase::After => VOID_PROCEDURE,
	};
	catalog.register(
		txn,
		&Identity::root(),
		registry,
		TriggerToCreate {
			name: name.to_string(),
			class: CommandClass::from_tag_str(tag),
			event,
			phase,
			procedure,
		},
	)
	.expect("fixture trigger registration failed")
}
