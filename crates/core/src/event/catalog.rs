// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

use crate::{define_event, id::TriggerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerCatalogOp {
	Created,
	Dropped,
	Renamed,
	Altered,
}

define_event! {
	/// Emitted after any committed mutation of the trigger catalog. The
	/// trigger cache listens to this and discards itself wholesale.
	pub struct TriggerCatalogChanged {
		pub trigger: TriggerId,
		pub op: TriggerCatalogOp,
	}
}
