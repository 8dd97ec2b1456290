// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 pdflatch contributors

//! Domain layer: pure data types and validation helpers shared between UI and transform logic.

pub mod status;
pub mod submission;
