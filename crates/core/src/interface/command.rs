// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

use std::{any::Any, sync::Arc};

use crate::id::ObjectId;

/// Identity of the object a command targets, resolved by the host pipeline.
/// All fields are optional: some commands have no single target object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectIdentity {
	pub object_id: Option<ObjectId>,
	pub schema_name: Option<String>,
	pub object_name: Option<String>,
}

/// Opaque handle to the pipeline's internal structured representation of
/// the command. Passed through to extended-convention procedures, never
/// interpreted by firegate and not meaningful across processes.
#[derive(Clone)]
pub struct OpaqueCommand(Arc<dyn Any + Send + Sync>);

impl OpaqueCommand {
	pub fn new(command: impl Any + Send + Sync) -> Self {
		Self(Arc::new(command))
	}

	pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
		self.0.downcast_ref::<T>()
	}
}

impl std::fmt::Debug for OpaqueCommand {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str("OpaqueCommand")
	}
}

/// What the dispatch engine can ask the pipeline about the in-flight
/// command. Every method may be expensive; the engine calls each at most
/// once per firing pass, and not at all when no procedure needs it.
pub trait CommandIntrospection {
	/// Resolve the target object's identity.
	fn object_identity(&self) -> Option<ObjectIdentity>;

	/// Reconstruct a textual form of the command, when the pipeline can.
	fn deparse(&self) -> Option<String>;

	/// The command's structured representation, for extended-convention
	/// procedures.
	fn command(&self) -> Option<&OpaqueCommand>;
}

/// Introspection for firings that have nothing to report: no target
/// object, no deparsed text, no parse tree.
pub struct NoIntrospection;

impl CommandIntrospection for NoIntrospection {
	fn object_identity(&self) -> Option<ObjectIdentity> {
		None
	}

	fn deparse(&self) -> Option<String> {
		None
	}

	fn command(&self) -> Option<&OpaqueCommand> {
		None
	}
}
