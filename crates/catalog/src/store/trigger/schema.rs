// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

pub(crate) mod trigger {
	use firegate_core::value::encoded::{EncodedValuesLayout, Type};
	use once_cell::sync::Lazy;

	pub(crate) const ID: usize = 0;
	pub(crate) const NAME: usize = 1;
	pub(crate) const CLASS: usize = 2;
	pub(crate) const EVENT: usize = 3;
	pub(crate) const PHASE: usize = 4;
	pub(crate) const PROCEDURE: usize = 5;
	pub(crate) const ENABLED: usize = 6;

	pub(crate) static SCHEMA: Lazy<EncodedValuesLayout> = Lazy::new(|| {
		EncodedValuesLayout::new(&[
			Type::Uint8, // id
			Type::Utf8,  // name
			Type::Utf8,  // class
			Type::Uint1, // event
			Type::Uint1, // phase
			Type::Uint8, // procedure
			Type::Uint1, // enabled
		])
	});
}

pub(crate) mod command_trigger {
	use firegate_core::value::encoded::{EncodedValuesLayout, Type};
	use once_cell::sync::Lazy;

	pub(crate) const ID: usize = 0;

	pub(crate) static SCHEMA: Lazy<EncodedValuesLayout> = Lazy::new(|| {
		EncodedValuesLayout::new(&[
			Type::Uint8, // id
		])
	});
}

pub(crate) mod sequence {
	use firegate_core::value::encoded::{EncodedValuesLayout, Type};
	use once_cell::sync::Lazy;

	pub(crate) const NEXT: usize = 0;

	pub(crate) static SCHEMA: Lazy<EncodedValuesLayout> = Lazy::new(|| {
		EncodedValuesLayout::new(&[
			Type::Uint8, // next
		])
	});
}
