// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

use super::{EncodableKey, EncodedKey, KeyKind};
use crate::{
	id::TriggerId,
	util::encoding::keycode::{KeyDeserializer, KeySerializer},
};

/// Primary key of a trigger definition row.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerKey {
	pub trigger: TriggerId,
}

const VERSION: u8 = 1;

impl EncodableKey for TriggerKey {
	const KIND: KeyKind = KeyKind::Trigger;

	fn encode(&self) -> EncodedKey {
		let mut serializer = KeySerializer::with_capacity(10);
		serializer.extend_u8(VERSION).extend_u8(Self::KIND as u8).extend_u64(self.trigger);
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

		let trigger = de.read_u64()?;

		Some(Self {
			trigger: TriggerId(trigger),
		})
	}
}

impl TriggerKey {
	pub fn encoded(trigger: impl Into<TriggerId>) -> EncodedKey {
		Self {
			trigger: trigger.into(),
		}
		.encode()
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_encode_decode() {
		let key = TriggerKey {
			trigger: TriggerId(0x123456789ABCDEF0),
		};
		let encoded = key.encode();
		let decoded = TriggerKey::decode(&encoded).unwrap();
		assert_eq!(decoded, key);
	}

	#[test]
	fn test_order_preserving() {
		let one = TriggerKey::encoded(1u64);
		let two = TriggerKey::encoded(2u64);
		let big = TriggerKey::encoded(0x100u64);
		assert!(one < two, "ordering not preserved");
		assert!(two < big, "ordering not preserved");
	}

	#[test]
	fn test_rejects_foreign_kind() {
		let key = crate::key::SystemSequenceKey::encoded();
		assert!(TriggerKey::decode(&key).is_none());
	}
}
