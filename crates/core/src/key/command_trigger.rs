// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

use super::{EncodableKey, EncodedKey, EncodedKeyRange, KeyKind};
use crate::{
	command::CommandClass,
	util::encoding::keycode::{KeyDeserializer, KeySerializer},
};

/// Secondary key on (command class, trigger name). Enforces name
/// uniqueness within a class and gives the ordered scan the cache build
/// relies on: byte order of these keys is class order, then name order
/// within the class, which is the firing order.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandTriggerKey {
	pub class: CommandClass,
	pub name: String,
}

const VERSION: u8 = 1;

impl EncodableKey for CommandTriggerKey {
	const KIND: KeyKind = KeyKind::CommandTrigger;

	fn encode(&self) -> EncodedKey {
		let mut serializer = KeySerializer::with_capacity(2 + self.class.as_str().len() + self.name.len() + 2);
		serializer
			.extend_u8(VERSION)
			.extend_u8(Self::KIND as u8)
			.extend_utf8(self.class.as_str())
			.extend_utf8(&self.name);
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

		let class = CommandClass::from_tag_str(de.read_utf8()?);
		let name = de.read_utf8()?.to_string();

		Some(Self {
			class,
			name,
		})
	}
}

impl CommandTriggerKey {
	pub fn encoded(class: &CommandClass, name: &str) -> EncodedKey {
		Self {
			class: class.clone(),
			name: name.to_string(),
		}
		.encode()
	}

	/// All (class, name) index entries, across every class.
	pub fn full_scan() -> EncodedKeyRange {
		let mut serializer = KeySerializer::with_capacity(2);
		serializer.extend_u8(VERSION).extend_u8(Self::KIND as u8);
		EncodedKeyRange::prefix(serializer.to_encoded_key())
	}

	/// Index entries of one class, in name order.
	pub fn class_scan(class: &CommandClass) -> EncodedKeyRange {
		let mut serializer = KeySerializer::with_capacity(2 + class.as_str().len() + 1);
		serializer.extend_u8(VERSION).extend_u8(Self::KIND as u8).extend_utf8(class.as_str());
		EncodedKeyRange::prefix(serializer.to_encoded_key())
	}
}
