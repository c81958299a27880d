// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

use crate::{
	key::{EncodedKey, EncodedKeyRange},
	value::encoded::EncodedValues,
};

/// One row yielded by a range scan.
#[derive(Debug, Clone)]
pub struct TransactionEntry {
	pub key: EncodedKey,
	pub values: EncodedValues,
}

/// The slice of the host storage engine the trigger catalog needs: point
/// reads and writes plus ordered range scans. Visibility, durability and
/// commit boundaries are owned by the host; a mutation must be committed
/// before the corresponding catalog-change event is emitted.
pub trait CatalogTransaction {
	fn get(&mut self, key: &EncodedKey) -> crate::Result<Option<EncodedValues>>;

	fn set(&mut self, key: &EncodedKey, values: EncodedValues) -> crate::Result<()>;

	fn remove(&mut self, key: &EncodedKey) -> crate::Result<()>;

	/// Rows in `range`, in ascending key order.
	fn range<'a>(
		&'a mut self,
		range: EncodedKeyRange,
	) -> crate::Result<Box<dyn Iterator<Item = crate::Result<TransactionEntry>> + 'a>>;
}
