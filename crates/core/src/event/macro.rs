// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

/// Declare an event struct and wire it into the [`Event`](crate::event::Event) trait.
#[macro_export]
macro_rules! define_event {
	(
		$(#[$meta:meta])*
		pub struct $name:ident {
			$($(#[$field_meta:meta])* pub $field:ident: $ty:ty),* $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone)]
		pub struct $name {
			$($(#[$field_meta])* pub $field: $ty),*
		}

		impl $crate::event::Event for $name {
			fn as_any(&self) -> &dyn std::any::Any {
				self
			}
		}
	};
}
