// SPDX-FileCopyrightText: 2026 Cardwall contributors
// SPDX-License-Identifier: MIT

//! Card payload model and the layout-engine output records.

pub mod card;
pub mod importance;
pub mod layout_card;
pub mod wire;

pub use card::{Card, MediaItem, MediaKind};
pub use importance::{Footprint, Importance, ImportanceError};
pub use layout_card::{CardRole, LayoutCard};
pub use wire::LayoutCardWire;
