// SPDX-FileCopyrightText: 2026 Cardwall contributors
// SPDX-License-Identifier: MIT

//! Read-only queries over the card set and the per-filter layout cache.

pub mod cache;
pub mod search;

pub use cache::LayoutCache;
pub use search::{cards_by_author, cards_since, pinned_cards, search_cards, CardSearchMode};
