// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 pdflatch contributors

//! Reusable egui components structured for MVU-style updates.

pub mod dropzone;
