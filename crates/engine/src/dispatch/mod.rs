// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

mod context;
mod fire;
mod outcome;
mod scope;

pub use context::{CommandContext, FiringState};
pub use fire::DispatchEngine;
pub use outcome::FiringOutcome;
