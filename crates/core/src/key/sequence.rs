// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

use super::{EncodableKey, EncodedKey, KeyKind};
use crate::util::encoding::keycode::{KeyDeserializer, KeySerializer};

/// Key of the single row backing the trigger id sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemSequenceKey;

const VERSION: u8 = 1;

impl EncodableKey for SystemSequenceKey {
	const KIND: KeyKind = KeyKind::SystemSequence;

	fn encode(&self) -> EncodedKey {
		let mut serializer = KeySerializer::with_capacity(2);
		serializer.extend_u8(VERSION).extend_u8(Self::KIND as u8);
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

		Some(Self)
	}
}

impl SystemSequenceKey {
	pub fn encoded() -> EncodedKey {
		Self.encode()
	}
}
