// SPDX-FileCopyrightText: 2026 Cardwall contributors
// SPDX-License-Identifier: MIT

use smallvec::SmallVec;

use crate::model::{Importance, LayoutCard};

use super::grid::GRID_COLUMNS;

/// One packed row; column spans of the members sum to exactly 4.
type Row = SmallVec<[LayoutCard; 4]>;

/// Greedily extracts complete rows (column spans summing to exactly 4) from
/// the front of the sequence. The first extraction failure stops the stage
/// and the remainder is appended verbatim, in its current order.
pub(crate) fn pack_rows(mut cards: Vec<LayoutCard>) -> Vec<LayoutCard> {
    let mut packed = Vec::with_capacity(cards.len());
    while !cards.is_empty() {
        match build_row(&mut cards) {
            Some(row) => packed.extend(row),
            None => {
                packed.append(&mut cards);
                break;
            }
        }
    }
    packed
}

/// Builds one row from the front of the pool, or requeues its members and
/// returns `None` when no complete row can be formed.
///
/// When row construction stalls and the anchor is not a feature card but a
/// feature card is still waiting in the pool, that card is moved to the pool
/// front and construction restarts once. The restarted row is anchored by
/// the feature card itself, so the rescue cannot fire a second time.
fn build_row(pool: &mut Vec<LayoutCard>) -> Option<Row> {
    loop {
        let mut row = Row::new();
        row.push(pool.remove(0));
        let mut cols_used = row[0].footprint().col_span();
        let mut stalled = false;

        while cols_used < GRID_COLUMNS && !pool.is_empty() {
            let prev = row.last().expect("row has an anchor").importance();
            match match_candidate(GRID_COLUMNS - cols_used, prev, pool) {
                Some(index) => {
                    let card = pool.remove(index);
                    cols_used += card.footprint().col_span();
                    row.push(card);
                }
                None => {
                    stalled = true;
                    break;
                }
            }
        }

        if cols_used == GRID_COLUMNS {
            return Some(row);
        }

        let rescue_index = if stalled && row[0].importance() != Importance::Feature {
            pool.iter().position(|card| card.importance() == Importance::Feature)
        } else {
            None
        };

        match rescue_index {
            Some(index) => {
                let feature = pool.remove(index);
                for card in row.into_iter().rev() {
                    pool.insert(0, card);
                }
                pool.insert(0, feature);
            }
            None => {
                for card in row.into_iter().rev() {
                    pool.insert(0, card);
                }
                return None;
            }
        }
    }
}

/// The priority-ranked matching table: given the columns still needed and
/// the previous row member's importance, returns the index of the next card
/// to pull from `remaining` (scanned in its current order), or `None`.
pub(crate) fn match_candidate(
    needed: u32,
    prev: Importance,
    remaining: &[LayoutCard],
) -> Option<usize> {
    let first_with = |pred: &dyn Fn(&LayoutCard) -> bool| remaining.iter().position(pred);
    let first_of = |importance: Importance| {
        remaining.iter().position(|card| card.importance() == importance)
    };

    match needed {
        2 => first_with(&|card| card.footprint().col_span() == 2)
            .or_else(|| first_of(Importance::Tall))
            .or_else(|| first_of(Importance::Mini)),
        1 => match prev {
            Importance::Tall => first_of(Importance::Tall),
            Importance::Mini => first_of(Importance::Mini),
            _ => first_with(&|card| card.footprint().col_span() == 1),
        },
        3 => {
            if prev == Importance::Tall {
                if let Some(index) = first_of(Importance::Tall) {
                    return Some(index);
                }
            }
            let minis = remaining
                .iter()
                .filter(|card| card.importance() == Importance::Mini)
                .count();
            if minis >= 2 {
                return first_of(Importance::Mini);
            }
            if prev == Importance::Mini {
                if let Some(index) = first_of(Importance::Mini) {
                    return Some(index);
                }
            }
            first_with(&|card| card.footprint().col_span() == 1)
        }
        _ => None,
    }
}
