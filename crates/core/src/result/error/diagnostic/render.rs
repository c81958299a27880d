// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

use std::fmt::Write;

use super::Diagnostic;

pub struct DefaultRenderer;

impl DefaultRenderer {
	pub fn render_string(diagnostic: &Diagnostic) -> String {
		let mut out = String::new();
		let _ = write!(out, "[{}] {}", diagnostic.code, diagnostic.message);
		if let Some(label) = &diagnostic.label {
			let _ = write!(out, "\n  {}", label);
		}
		if let Some(help) = &diagnostic.help {
			let _ = write!(out, "\n  help: {}", help);
		}
		for note in &diagnostic.notes {
			let _ = write!(out, "\n  note: {}", note);
		}
		if let Some(cause) = &diagnostic.cause {
			let _ = write!(out, "\n  caused by: {}", Self::render_string(cause));
		}
		out
	}
}
