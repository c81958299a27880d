// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

//! Test fixtures shared across the firegate crates: an in-memory catalog
//! transaction, scripted procedures, and helpers that wire a trigger
//! catalog the way the host would.

mod fixture;
mod introspection;
mod procedure;
mod transaction;

// Re-export the catalog's registration input so in-crate tests construct it
// from the same `firegate-catalog` instance the fixtures link against. Without
// this, a test building `firegate_catalog::TriggerToCreate` directly while
// calling a fixture-built catalog would hit two copies of the type (the
// lib-under-test copy and the dependency copy pulled in through this crate).
pub use firegate_catalog::TriggerToCreate;

pub use fixture::{
	BOOLEAN_PROCEDURE, VOID_PROCEDURE, create_trigger, create_trigger_for_event, test_catalog,
	test_catalog_with_role, test_procedures,
};
pub use introspection::TestIntrospection;
pub use procedure::{CallLog, CapturedArgs, LastArgs, TestProcedures, new_call_log};
pub use transaction::TestTransaction;
