// SPDX-FileCopyrightText: 2026 Cardwall contributors
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;

use rayon::prelude::*;
use smol_str::SmolStr;

use crate::layout::compose_layout;
use crate::model::{Card, LayoutCard};

use super::search::substring_search;

/// Memoizes computed layouts by filter key.
///
/// A layout is a pure function of the card set and the filter string, so the
/// cache is a plain value owned by the caller: no interior mutability, no
/// global state. When the card set changes, drop everything with
/// [`LayoutCache::invalidate_all`] — layouts are whole-input functions, so
/// there is no partial invalidation.
#[derive(Debug, Clone, Default)]
pub struct LayoutCache {
    entries: BTreeMap<SmolStr, Vec<LayoutCard>>,
}

impl LayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The layout for `filter` over `cards`, computing and storing it on a
    /// miss. An empty filter selects the whole card set; any other filter is
    /// a case-insensitive substring match.
    pub fn layout_for(&mut self, cards: &[Card], filter: &str) -> &[LayoutCard] {
        if !self.entries.contains_key(filter) {
            tracing::debug!(filter, "layout cache miss; recomputing");
            let layout = compute_filtered(cards, filter);
            self.entries.insert(SmolStr::new(filter), layout);
        }
        self.entries.get(filter).expect("entry inserted on miss")
    }

    /// Computes the layouts for every missing filter key in parallel, then
    /// stores them. Each computation is independent, so the parallel map
    /// changes nothing about the results.
    pub fn warm(&mut self, cards: &[Card], filters: &[&str]) {
        let computed = filters
            .par_iter()
            .filter(|filter| !self.entries.contains_key(**filter))
            .map(|filter| (SmolStr::new(*filter), compute_filtered(cards, filter)))
            .collect::<Vec<_>>();

        for (key, layout) in computed {
            self.entries.entry(key).or_insert(layout);
        }
    }

    pub fn invalidate_all(&mut self) {
        self.entries.clear();
    }

    pub fn contains(&self, filter: &str) -> bool {
        self.entries.contains_key(filter)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn compute_filtered(cards: &[Card], filter: &str) -> Vec<LayoutCard> {
    let selected = if filter.is_empty() {
        cards.to_vec()
    } else {
        substring_search(cards, filter, true).into_iter().cloned().collect()
    };
    compose_layout(selected)
}
