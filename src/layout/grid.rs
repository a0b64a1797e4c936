// SPDX-FileCopyrightText: 2026 Cardwall contributors
// SPDX-License-Identifier: MIT

use std::collections::BTreeSet;

use crate::model::{Footprint, Importance, LayoutCard};

/// Column count of the target grid. The closure guarantees hold only for
/// this width.
pub const GRID_COLUMNS: u32 = 4;

/// Upper bound on probe/fill cycles while closing a layout. No footprint
/// spans more than 2 rows, so the occupied frontier stays within 2 rows of
/// the cursor and a fully free row is reached after at most 10 fillers; the
/// cap leaves headroom beyond that.
const CLOSURE_ATTEMPTS: usize = 20;

/// A `(row, col)` cell on the unbounded-height grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct GridCell {
    row: u32,
    col: u32,
}

impl GridCell {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    pub fn row(self) -> u32 {
        self.row
    }

    pub fn col(self) -> u32 {
        self.col
    }

    /// The next cell in row-major scan order, wrapping at the column count.
    fn next(self) -> Self {
        if self.col + 1 < GRID_COLUMNS {
            Self { row: self.row, col: self.col + 1 }
        } else {
            Self { row: self.row + 1, col: 0 }
        }
    }
}

/// Where the simulator put one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub cell: GridCell,
    pub footprint: Footprint,
}

/// Replays row-major, column-wrapping auto-placement over a 4-column grid.
///
/// The cursor and occupancy set live only as long as one layout computation;
/// nothing here is persisted. `probe` answers "where would this footprint
/// land" without mutating, `place` commits the same answer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GridSimulator {
    cursor: GridCell,
    occupied: BTreeSet<(u32, u32)>,
}

impl GridSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> GridCell {
        self.cursor
    }

    pub fn occupied_cells(&self) -> &BTreeSet<(u32, u32)> {
        &self.occupied
    }

    /// First cell at or after the cursor where the footprint's full
    /// rectangle fits inside the grid width over unoccupied cells.
    pub fn probe(&self, footprint: Footprint) -> GridCell {
        let mut cell = self.cursor;
        loop {
            if self.fits_at(cell, footprint) {
                return cell;
            }
            cell = cell.next();
        }
    }

    /// Places the footprint at its probe position, marks its cells occupied,
    /// and advances the cursor to the cell right of the span on its top row
    /// (wrapping past the last column). The cursor deliberately does not
    /// skip the card's lower rows: later cards may fill cells beside a
    /// multi-row card.
    pub fn place(&mut self, footprint: Footprint) -> GridCell {
        let cell = self.probe(footprint);
        for row in cell.row..cell.row + footprint.row_span() {
            for col in cell.col..cell.col + footprint.col_span() {
                self.occupied.insert((row, col));
            }
        }

        let col_after = cell.col + footprint.col_span();
        self.cursor = if col_after < GRID_COLUMNS {
            GridCell::new(cell.row, col_after)
        } else {
            GridCell::new(cell.row + 1, 0)
        };
        cell
    }

    fn fits_at(&self, cell: GridCell, footprint: Footprint) -> bool {
        if cell.col + footprint.col_span() > GRID_COLUMNS {
            return false;
        }
        for row in cell.row..cell.row + footprint.row_span() {
            for col in cell.col..cell.col + footprint.col_span() {
                if self.occupied.contains(&(row, col)) {
                    return false;
                }
            }
        }
        true
    }
}

/// Replays a full sequence and returns each card's placement, in order.
pub fn simulate_sequence(cards: &[LayoutCard]) -> Vec<Placement> {
    let mut simulator = GridSimulator::new();
    cards
        .iter()
        .map(|card| {
            let footprint = card.footprint();
            Placement { cell: simulator.place(footprint), footprint }
        })
        .collect()
}

/// Appends trailing cards so a site-info card ends flush with the grid's
/// bottom-right corner.
///
/// If the next free cell starts a fresh row, a single full-width info card
/// closes the layout. Otherwise the loop probes for a corner fit (a 2-wide
/// card at column 2, then a 1-wide card at column 3) and pads with one 1×1
/// filler per miss. Exhausting the attempt cap degrades to an unaligned
/// info card rather than failing.
pub(crate) fn close_sequence(simulator: &mut GridSimulator, sequence: &mut Vec<LayoutCard>) {
    let mini = Importance::Mini.footprint();
    let wide = Importance::Wide.footprint();

    if simulator.probe(mini).col() == 0 {
        simulator.place(Importance::Banner.footprint());
        sequence.push(LayoutCard::site_info(Importance::Banner));
        return;
    }

    let mut fillers = 0;
    for _ in 0..CLOSURE_ATTEMPTS {
        if simulator.probe(wide).col() == 2 {
            simulator.place(wide);
            sequence.push(LayoutCard::site_info(Importance::Wide));
            return;
        }
        if simulator.probe(mini).col() == 3 {
            simulator.place(mini);
            sequence.push(LayoutCard::site_info(Importance::Mini));
            return;
        }
        simulator.place(mini);
        sequence.push(LayoutCard::filler(fillers));
        fillers += 1;
    }

    let cell = simulator.place(wide);
    tracing::warn!(
        row = cell.row(),
        col = cell.col(),
        attempts = CLOSURE_ATTEMPTS,
        "closure attempts exhausted; site-info card is not flush with the grid corner"
    );
    sequence.push(LayoutCard::site_info(Importance::Wide));
}
