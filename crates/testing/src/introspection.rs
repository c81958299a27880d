// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

use std::sync::atomic::{AtomicUsize, Ordering};

use firegate_core::interface::command::{CommandIntrospection, ObjectIdentity, OpaqueCommand};

/// Introspection stub that counts how often the engine actually asked,
/// so tests can pin the at-most-once-per-pass behavior.
#[derive(Default)]
pub struct TestIntrospection {
	identity: Option<ObjectIdentity>,
	text: Option<String>,
	command: Option<OpaqueCommand>,
	identity_calls: AtomicUsize,
	deparse_calls: AtomicUsize,
}

impl TestIntrospection {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_identity(mut self, identity: ObjectIdentity) -> Self {
		self.identity = Some(identity);
		self
	}

	pub fn with_text(mut self, text: impl Into<String>) -> Self {
		self.text = Some(text.into());
		self
	}

	pub fn with_command(mut self, command: OpaqueCommand) -> Self {
		self.command = Some(command);
		self
	}

	pub fn identity_calls(&self) -> usize {
		self.identity_calls.load(Ordering::Relaxed)
	}

	pub fn deparse_calls(&self) -> usize {
		self.deparse_calls.load(Ordering::Relaxed)
	}
}

impl CommandIntrospection for TestIntrospection {
	fn object_identity(&self) -> Option<ObjectIdentity> {
		self.identity_calls.fetch_add(1, Ordering::Relaxed);
		self.identity.clone()
	}

	fn deparse(&self) -> Option<String> {
		self.deparse_calls.fetch_add(1, Ordering::Relaxed);
		self.text.clone()
	}

	fn command(&self) -> Option<&OpaqueCommand> {
		self.command.as_ref()
	}
}
