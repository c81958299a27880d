// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

use std::collections::BTreeMap;

use firegate_core::{
	interface::transaction::{CatalogTransaction, TransactionEntry},
	key::{EncodedKey, EncodedKeyRange},
	value::encoded::EncodedValues,
};

/// In-memory, auto-committing stand-in for the host storage engine. Every
/// write is immediately visible; ordered scans come straight from the
/// underlying BTreeMap.
#[derive(Debug, Default)]
pub struct TestTransaction {
	rows: BTreeMap<EncodedKey, EncodedValues>,
}

impl TestTransaction {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.rows.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}
}

impl CatalogTransaction for TestTransaction {
	fn get(&mut self, key: &EncodedKey) -> firegate_core::Result<Option<EncodedValues>> {
		Ok(self.rows.get(key).cloned())
	}

	fn set(&mut self, key: &EncodedKey, values: EncodedValues) -> firegate_core::Result<()> {
		self.rows.insert(key.clone(), values);
		Ok(())
	}

	fn remove(&mut self, key: &EncodedKey) -> firegate_core::Result<()> {
		self.rows.remove(key);
		Ok(())
	}

	fn range<'a>(
		&'a mut self,
		range: EncodedKeyRange,
	) -> firegate_core::Result<Box<dyn Iterator<Item = firegate_core::Result<TransactionEntry>> + 'a>> {
		let bounds = (range.start_bound().cloned(), range.end_bound().cloned());
		Ok(Box::new(self.rows.range(bounds).map(|(key, values)| {
			Ok(TransactionEntry {
				key: key.clone(),
				values: values.clone(),
			})
		})))
	}
}
