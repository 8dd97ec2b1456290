// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 pdflatch contributors

//! Business logic for talking to the PDF transform service.

pub mod transform;
