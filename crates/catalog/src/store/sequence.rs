// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

use firegate_core::{TriggerId, interface::transaction::CatalogTransaction, key::SystemSequenceKey};

use crate::store::trigger::schema::sequence;

pub(crate) struct SystemSequence;

impl SystemSequence {
	pub(crate) fn next_trigger_id(txn: &mut dyn CatalogTransaction) -> crate::Result<TriggerId> {
		let key = SystemSequenceKey::encoded();

		let next = match txn.get(&key)? {
			Some(row) => sequence::SCHEMA.get_u64(&row, sequence::NEXT) + 1,
			None => 1,
		};

		let mut row = sequence::SCHEMA.allocate();
		sequence::SCHEMA.set_u64(&mut row, sequence::NEXT, next);
		txn.set(&key, row)?;

		Ok(TriggerId(next))
	}
}
