// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

use super::Diagnostic;
use crate::command::FiringPhase;

/// A trigger procedure raised an error mid-pass. The failure aborts the
/// remainder of the firing pass and becomes the command's own failure.
pub fn procedure_invocation_failed(trigger: &str, phase: FiringPhase, cause: Diagnostic) -> Diagnostic {
	Diagnostic {
		code: "PR_001".to_string(),
		message: format!("{} trigger \"{}\" failed", phase, trigger),
		label: None,
		help: None,
		notes: vec![],
		cause: Some(Box::new(cause)),
	}
}
