// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod dispatch;

pub use dispatch::{CommandContext, DispatchEngine, FiringOutcome, FiringState};

pub type Result<T> = firegate_core::Result<T>;
