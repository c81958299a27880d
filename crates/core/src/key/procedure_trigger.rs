// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

use super::{EncodableKey, EncodedKey, EncodedKeyRange, KeyKind};
use crate::{
	id::{ProcedureId, TriggerId},
	util::encoding::keycode::{KeyDeserializer, KeySerializer},
};

/// Dependency edge from a procedure to a trigger definition that calls it.
/// Dropping the procedure cascades over a prefix scan of this keyspace.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcedureTriggerKey {
	pub procedure: ProcedureId,
	pub trigger: TriggerId,
}

const VERSION: u8 = 1;

impl EncodableKey for ProcedureTriggerKey {
	const KIND: KeyKind = KeyKind::ProcedureTrigger;

	fn encode(&self) -> EncodedKey {
		let mut serializer = KeySerializer::with_capacity(18);
		serializer
			.extend_u8(VERSION)
			.extend_u8(Self::KIND as u8)
			.extend_u64(self.procedure)
			.extend_u64(self.trigger);
		serializer.to_encoded_key()
	}

	fn decode(key: &EncodedKey) -> Option<Self> {
		let mut de = KeyDeserializer::from_bytes(key);

		let version = de.read_u8()?;
		if version != VERSION {
			return None;
		}

		let kind: KeyKind = de.read_u8()?.try_into().ok()?;
		if kind != Self::KIND {
			return None;
		}

		let procedure = de.read_u64()?;
		let trigger = de.read_u64()?;

		Some(Self {
			procedure: ProcedureId(procedure),
			trigger: TriggerId(trigger),
		})
	}
}

impl ProcedureTriggerKey {
	pub fn encoded(procedure: impl Into<ProcedureId>, trigger: impl Into<TriggerId>) -> EncodedKey {
		Self {
			procedure: procedure.into(),
			trigger: trigger.into(),
		}
		.encode()
	}

	/// Every trigger depending on the given procedure.
	pub fn full_scan(procedure: ProcedureId) -> EncodedKeyRange {
		let mut serializer = KeySerializer::with_capacity(10);
		serializer.extend_u8(VERSION).extend_u8(Self::KIND as u8).extend_u64(procedure);
		EncodedKeyRange::prefix(serializer.to_encoded_key())
	}
}
