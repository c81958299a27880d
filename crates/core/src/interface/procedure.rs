// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

use std::{fmt, sync::Arc};

use crate::{
	id::{ObjectId, ProcedureId},
	interface::{catalog::ReturnContract, command::OpaqueCommand},
};

/// How a procedure expects to be called. Resolved once per procedure at
/// registration/lookup time, never re-detected per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallingConvention {
	/// Positional payload: phase, command tag, object id, schema name,
	/// object name.
	Basic,
	/// Basic plus the command's structured representation and deparsed
	/// text.
	Extended,
}

/// Positional arguments handed to an invoked procedure. String fields
/// borrow from the firing pass's working-memory scope. The tag and
/// identity fields are nullable: wildcard firings may carry no tag, and
/// many commands have no single target object.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcedureArgs<'a> {
	pub phase: &'a str,
	pub tag: Option<&'a str>,
	pub object_id: Option<ObjectId>,
	pub schema_name: Option<&'a str>,
	pub object_name: Option<&'a str>,
	/// Extended convention only.
	pub command: Option<&'a OpaqueCommand>,
	/// Extended convention only.
	pub command_text: Option<&'a str>,
}

/// Result of a procedure invocation: a boolean, or null/void for
/// procedures outside the boolean contract. A null result never vetoes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcedureOutput {
	pub value: Option<bool>,
}

impl ProcedureOutput {
	pub fn null() -> Self {
		Self {
			value: None,
		}
	}

	pub fn boolean(value: bool) -> Self {
		Self {
			value: Some(value),
		}
	}

	/// A BEFORE-phase veto is exactly a non-null `false`.
	pub fn vetoed(&self) -> bool {
		self.value == Some(false)
	}
}

/// The host's callable procedure. Invocation may block arbitrarily long
/// and may itself run further commands; firegate imposes no timeout.
pub trait Procedure: Send + Sync {
	fn invoke(&self, args: &ProcedureArgs<'_>) -> crate::Result<ProcedureOutput>;
}

/// A resolved procedure: declared contract plus the callable handle.
#[derive(Clone)]
pub struct ProcedureDef {
	pub id: ProcedureId,
	pub name: String,
	pub returns: ReturnContract,
	pub convention: CallingConvention,
	pub handler: Arc<dyn Procedure>,
}

impl fmt::Debug for ProcedureDef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ProcedureDef")
			.field("id", &self.id)
			.field("name", &self.name)
			.field("returns", &self.returns)
			.field("convention", &self.convention)
			.finish()
	}
}

/// Lookup into the host's procedure catalog.
pub trait ProcedureRegistry: Send + Sync {
	fn find_procedure(&self, id: ProcedureId) -> Option<ProcedureDef>;
}
