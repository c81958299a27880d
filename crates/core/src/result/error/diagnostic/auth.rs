// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

use super::Diagnostic;
use crate::interface::auth::Identity;

/// Trigger registration runs the registered procedure with elevated
/// rights later on, so mutating the trigger catalog is restricted to
/// system identities.
pub fn insufficient_privilege(identity: &Identity) -> Diagnostic {
	Diagnostic {
		code: "AU_001".to_string(),
		message: "must be a system identity to use command triggers".to_string(),
		label: Some(format!("current identity: {}", identity)),
		help: None,
		notes: vec![],
		cause: None,
	}
}
