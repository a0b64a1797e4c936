// SPDX-FileCopyrightText: 2026 Cardwall contributors
// SPDX-License-Identifier: MIT

//! The layout pipeline.
//!
//! Ordering → fixed-card insertion → row packing → grid simulation and
//! closure. Each stage consumes the previous stage's output; the whole
//! sequence is recomputed from scratch on every call.

mod ordering;
mod rows;

pub mod grid;

pub use grid::{simulate_sequence, GridCell, GridSimulator, Placement, GRID_COLUMNS};

use crate::model::{Card, LayoutCard};

/// Arranges cards into a renderable sequence for the 4-column grid.
///
/// The output preserves every input card exactly once, adds the
/// welcome/navigation pair, and ends with a site-info card placed flush
/// against the bottom-right corner (padding with 1×1 fillers when needed).
/// Empty input yields an empty sequence with no generated cards.
pub fn compose_layout(cards: Vec<Card>) -> Vec<LayoutCard> {
    if cards.is_empty() {
        return Vec::new();
    }

    let mut cards = cards.into_iter().map(LayoutCard::content).collect::<Vec<_>>();
    let pinned = ordering::order_cards(&mut cards);
    ordering::insert_fixed_cards(&mut cards, pinned);

    let mut sequence = rows::pack_rows(cards);

    let mut simulator = GridSimulator::new();
    for card in &sequence {
        simulator.place(card.footprint());
    }
    grid::close_sequence(&mut simulator, &mut sequence);
    sequence
}
