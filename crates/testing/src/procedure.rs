// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

use std::{
	collections::HashMap,
	sync::{Arc, Mutex},
};

use firegate_core::{
	ProcedureId, error,
	interface::{
		catalog::ReturnContract,
		procedure::{
			CallingConvention, Procedure, ProcedureArgs, ProcedureDef, ProcedureOutput,
			ProcedureRegistry,
		},
	},
	internal,
};

/// Shared invocation log: one `phase:name` entry per call, in call order.
pub type CallLog = Arc<Mutex<Vec<String>>>;

pub fn new_call_log() -> CallLog {
	Arc::new(Mutex::new(Vec::new()))
}

/// Owned snapshot of the last `ProcedureArgs` a capturing procedure saw.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CapturedArgs {
	pub phase: String,
	pub tag: Option<String>,
	pub schema_name: Option<String>,
	pub object_name: Option<String>,
	pub has_command: bool,
	pub command_text: Option<String>,
}

pub type LastArgs = Arc<Mutex<Option<CapturedArgs>>>;

struct ScriptedProcedure {
	name: String,
	output: Option<bool>,
	fail: bool,
	log: Option<CallLog>,
	captured: Option<LastArgs>,
}

impl Procedure for ScriptedProcedure {
	fn invoke(&self, args: &ProcedureArgs<'_>) -> firegate_core::Result<ProcedureOutput> {
		if let Some(log) = &self.log {
			log.lock().unwrap().push(format!("{}:{}", args.phase, self.name));
		}
		if let Some(captured) = &self.captured {
			*captured.lock().unwrap() = Some(CapturedArgs {
				phase: args.phase.to_string(),
				tag: args.tag.map(str::to_string),
				schema_name: args.schema_name.map(str::to_string),
				object_name: args.object_name.map(str::to_string),
				has_command: args.command.is_some(),
				command_text: args.command_text.map(str::to_string),
			});
		}
		if self.fail {
			return Err(error!(internal!("procedure {} was scripted to fail", self.name)));
		}
		Ok(ProcedureOutput {
			value: self.output,
		})
	}
}

/// Scriptable stand-in for the host procedure catalog.
#[derive(Default, Clone)]
pub struct TestProcedures {
	procedures: Arc<Mutex<HashMap<ProcedureId, ProcedureDef>>>,
}

impl TestProcedures {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&self, def: ProcedureDef) {
		self.procedures.lock().unwrap().insert(def.id, def);
	}

	fn define(
		&self,
		id: ProcedureId,
		name: &str,
		returns: ReturnContract,
		convention: CallingConvention,
		procedure: ScriptedProcedure,
	) {
		self.insert(ProcedureDef {
			id,
			name: name.to_string(),
			returns,
			convention,
			handler: Arc::new(procedure),
		});
	}

	/// Boolean-contract procedure returning a fixed veto signal.
	pub fn define_boolean(&self, id: ProcedureId, name: &str, result: bool, log: Option<&CallLog>) {
		self.define(
			id,
			name,
			ReturnContract::Boolean,
			CallingConvention::Basic,
			ScriptedProcedure {
				name: name.to_string(),
				output: Some(result),
				fail: false,
				log: log.cloned(),
				captured: None,
			},
		);
	}

	/// Void-contract procedure for AFTER triggers.
	pub fn define_void(&self, id: ProcedureId, name: &str, log: Option<&CallLog>) {
		self.define(
			id,
			name,
			ReturnContract::Nothing,
			CallingConvention::Basic,
			ScriptedProcedure {
				name: name.to_string(),
				output: None,
				fail: false,
				log: log.cloned(),
				captured: None,
			},
		);
	}

	/// Boolean-contract procedure that returns null. A null result must
	/// never count as a veto.
	pub fn define_null_boolean(&self, id: ProcedureId, name: &str, log: Option<&CallLog>) {
		self.define(
			id,
			name,
			ReturnContract::Boolean,
			CallingConvention::Basic,
			ScriptedProcedure {
				name: name.to_string(),
				output: None,
				fail: false,
				log: log.cloned(),
				captured: None,
			},
		);
	}

	/// Procedure that raises on every invocation.
	pub fn define_failing(&self, id: ProcedureId, name: &str, returns: ReturnContract, log: Option<&CallLog>) {
		self.define(
			id,
			name,
			returns,
			CallingConvention::Basic,
			ScriptedProcedure {
				name: name.to_string(),
				output: None,
				fail: true,
				log: log.cloned(),
				captured: None,
			},
		);
	}

	/// Procedure that snapshots the arguments it was called with.
	pub fn define_capturing(
		&self,
		id: ProcedureId,
		name: &str,
		returns: ReturnContract,
		convention: CallingConvention,
		captured: &LastArgs,
	) {
		let output = match returns {
			ReturnContract::Boolean => Some(true),
			ReturnContract::Nothing => None,
		};
		self.define(
			id,
			name,
			returns,
			convention,
			ScriptedProcedure {
				name: name.to_string(),
				output,
				fail: false,
				log: None,
				captured: Some(captured.clone()),
			},
		);
	}
}

impl ProcedureRegistry for TestProcedures {
	fn find_procedure(&self, id: ProcedureId) -> Option<ProcedureDef> {
		self.procedures.lock().unwrap().get(&id).cloned()
	}
}
