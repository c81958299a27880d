// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod event;
pub mod interface;
pub mod key;
pub mod result;
pub mod util;
pub mod value;

mod command;
mod id;

pub use command::{CommandClass, CommandTag, FiringEvent, FiringPhase, ReplicationRole, TriggerEnabled};
pub use id::{ObjectId, ProcedureId, TriggerId};
pub use result::error::Error;

pub type Result<T> = std::result::Result<T, Error>;
