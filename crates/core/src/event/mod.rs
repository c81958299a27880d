// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

//! Synchronous typed event bus. Catalog mutations publish change events
//! here after they commit; the trigger cache subscribes for invalidation.
//! Delivery is in-process and synchronous: `emit` returns once every
//! registered listener ran.

use std::{
	any::{Any, TypeId},
	collections::HashMap,
	sync::Arc,
};

use parking_lot::RwLock;

pub mod catalog;
#[macro_use]
mod r#macro;

pub trait Event: Any + Send + Sync + Clone + 'static {
	fn as_any(&self) -> &dyn Any;
}

pub trait EventListener<E>: Send + Sync + 'static
where
	E: Event,
{
	fn on(&self, event: &E);
}

trait ListenerList: Any + Send + Sync {
	fn on_any(&self, event: &dyn Any);
	fn as_any_mut(&mut self) -> &mut dyn Any;
}

struct ListenerListImpl<E> {
	listeners: RwLock<Vec<Box<dyn EventListener<E>>>>,
}

impl<E> ListenerListImpl<E>
where
	E: Event,
{
	fn new() -> Self {
		Self {
			listeners: RwLock::new(Vec::new()),
		}
	}

	fn add(&mut self, listener: Box<dyn EventListener<E>>) {
		self.listeners.write().push(listener);
	}
}

impl<E> ListenerList for ListenerListImpl<E>
where
	E: Event,
{
	fn on_any(&self, event: &dyn Any) {
		if let Some(event) = event.downcast_ref::<E>() {
			for listener in self.listeners.read().iter() {
				listener.on(event);
			}
		}
	}

	fn as_any_mut(&mut self) -> &mut dyn Any {
		self
	}
}

#[derive(Default, Clone)]
pub struct EventBus {
	listeners: Arc<RwLock<HashMap<TypeId, Box<dyn ListenerList>>>>,
}

impl EventBus {
	pub fn new() -> Self {
		Self {
			listeners: Arc::new(RwLock::new(HashMap::new())),
		}
	}

	pub fn register<E, L>(&self, listener: L)
	where
		E: Event,
		L: EventListener<E>,
	{
		let type_id = TypeId::of::<E>();

		let mut listeners = self.listeners.write();
		let list = listeners.entry(type_id).or_insert_with(|| Box::new(ListenerListImpl::<E>::new()));
		if let Some(list) = list.as_any_mut().downcast_mut::<ListenerListImpl<E>>() {
			list.add(Box::new(listener));
		}
	}

	pub fn emit<E>(&self, event: E)
	where
		E: Event,
	{
		let listeners = self.listeners.read();
		if let Some(list) = listeners.get(&TypeId::of::<E>()) {
			list.on_any(event.as_any());
		}
	}
}
