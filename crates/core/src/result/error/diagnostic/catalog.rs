// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

use super::Diagnostic;
use crate::{
	command::{CommandClass, FiringPhase},
	id::{ProcedureId, TriggerId},
	interface::catalog::ReturnContract,
};

/// A trigger with the same name already exists in the command-class scope.
pub fn trigger_already_exists(class: &CommandClass, name: &str) -> Diagnostic {
	Diagnostic {
		code: "TG_001".to_string(),
		message: format!("command trigger \"{}\" already exists", name),
		label: Some(format!("registered on {}", class)),
		help: Some("drop the existing trigger or pick another name".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// INSTEAD OF excludes BEFORE and AFTER for the same command class, in
/// both directions.
pub fn conflicting_trigger_phase(
	class: &CommandClass,
	requested: FiringPhase,
	existing: FiringPhase,
	existing_name: &str,
) -> Diagnostic {
	Diagnostic {
		code: "TG_002".to_string(),
		message: format!(
			"cannot register {} trigger on {}: {} trigger \"{}\" already exists",
			requested, class, existing, existing_name
		),
		label: None,
		help: Some("INSTEAD OF triggers cannot coexist with BEFORE or AFTER triggers on the same command class"
			.to_string()),
		notes: vec![],
		cause: None,
	}
}

/// The procedure's declared return type does not match the phase contract.
pub fn invalid_return_contract(procedure: &str, phase: FiringPhase, declared: ReturnContract) -> Diagnostic {
	let expectation = match phase {
		FiringPhase::Before | FiringPhase::InsteadOf => "must return a boolean",
		FiringPhase::After => "must not return a value",
	};
	Diagnostic {
		code: "TG_003".to_string(),
		message: format!("procedure \"{}\" {} to fire {}", procedure, expectation, phase),
		label: Some(format!("declared return: {:?}", declared)),
		help: None,
		notes: vec![],
		cause: None,
	}
}

pub fn trigger_not_found(class: &CommandClass, name: &str) -> Diagnostic {
	Diagnostic {
		code: "TG_004".to_string(),
		message: format!("command trigger \"{}\" does not exist", name),
		label: Some(format!("looked up on {}", class)),
		help: Some("pass missing_ok to turn this into a no-op".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn trigger_id_not_found(trigger: TriggerId) -> Diagnostic {
	Diagnostic {
		code: "TG_004".to_string(),
		message: format!("command trigger {} does not exist", trigger),
		label: None,
		help: Some("pass missing_ok to turn this into a no-op".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn procedure_not_found(procedure: ProcedureId) -> Diagnostic {
	Diagnostic {
		code: "TG_005".to_string(),
		message: format!("procedure {} does not exist", procedure),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}

/// The command commits its work incrementally; a failure raised once it
/// finished cannot roll anything back, so an AFTER trigger is meaningless.
pub fn non_cancellable_command(tag: &str) -> Diagnostic {
	Diagnostic {
		code: "TG_006".to_string(),
		message: format!("AFTER {} command triggers are not supported", tag),
		label: None,
		help: Some(format!("{} commits incrementally and cannot be affected once it completed", tag)),
		notes: vec![],
		cause: None,
	}
}

pub fn wildcard_instead_of_unsupported() -> Diagnostic {
	Diagnostic {
		code: "TG_007".to_string(),
		message: "INSTEAD OF triggers on ANY command are not supported".to_string(),
		label: None,
		help: Some("register the trigger on a specific command class instead".to_string()),
		notes: vec![],
		cause: None,
	}
}
