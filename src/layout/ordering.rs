// SPDX-FileCopyrightText: 2026 Cardwall contributors
// SPDX-License-Identifier: MIT

use std::cmp::Ordering;

use crate::model::{Importance, LayoutCard};

/// Orders the raw sequence: pinned cards first, each partition sorted by
/// timestamp descending (untimestamped cards after all timestamped ones, in
/// input order), ties stable. Within each partition the first feature-level
/// card is then promoted to the front. Returns the pinned count.
pub(crate) fn order_cards(cards: &mut Vec<LayoutCard>) -> usize {
    let unpinned_tail = cards
        .iter()
        .filter(|card| !card.card().is_top)
        .cloned()
        .collect::<Vec<_>>();
    cards.retain(|card| card.card().is_top);
    let pinned = cards.len();

    sort_partition(&mut cards[..]);
    cards.extend(unpinned_tail);
    sort_partition(&mut cards[pinned..]);

    promote_first_feature(&mut cards[..pinned]);
    promote_first_feature(&mut cards[pinned..]);
    pinned
}

fn sort_partition(cards: &mut [LayoutCard]) {
    cards.sort_by(|a, b| match (a.card().timestamp, b.card().timestamp) {
        (Some(a_ts), Some(b_ts)) => b_ts.cmp(&a_ts),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

fn promote_first_feature(cards: &mut [LayoutCard]) {
    if let Some(index) = cards.iter().position(|card| card.importance() == Importance::Feature) {
        cards[..=index].rotate_right(1);
    }
}

/// Splices the welcome/navigation pair into the ordered sequence: welcome at
/// `max(1, pinned)`, navigation immediately after it. The pair therefore
/// lands right behind any pinned run, or at position 1 when nothing is
/// pinned.
pub(crate) fn insert_fixed_cards(cards: &mut Vec<LayoutCard>, pinned: usize) {
    let welcome_index = pinned.max(1).min(cards.len());
    cards.insert(welcome_index, LayoutCard::welcome());
    let navigation_index = (welcome_index + 1).min(cards.len());
    cards.insert(navigation_index, LayoutCard::navigation());
}
