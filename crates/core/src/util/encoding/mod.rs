// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Firegate

pub mod keycode;
