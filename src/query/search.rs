// SPDX-FileCopyrightText: 2026 Cardwall contributors
// SPDX-License-Identifier: MIT

use regex::RegexBuilder;

use crate::model::Card;

/// Fuzzy hits below this similarity ratio are dropped.
const FUZZY_MIN_RATIO: f64 = 55.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSearchMode {
    Substring,
    Regex,
    Fuzzy,
}

/// Searches the card set, preserving input order for substring and regex
/// hits; fuzzy hits are ordered by similarity descending with ties keeping
/// input order. Title, description, author, and content are searchable.
pub fn search_cards<'a>(
    cards: &'a [Card],
    needle: &str,
    mode: CardSearchMode,
    case_insensitive: bool,
) -> Result<Vec<&'a Card>, regex::Error> {
    match mode {
        CardSearchMode::Substring => Ok(substring_search(cards, needle, case_insensitive)),
        CardSearchMode::Regex => {
            let regex = RegexBuilder::new(needle).case_insensitive(case_insensitive).build()?;
            Ok(cards
                .iter()
                .filter(|card| searchable_fields(card).any(|field| regex.is_match(field)))
                .collect())
        }
        CardSearchMode::Fuzzy => Ok(fuzzy_search(cards, needle)),
    }
}

/// Cards pinned to the top of the wall, in input order.
pub fn pinned_cards(cards: &[Card]) -> Vec<&Card> {
    cards.iter().filter(|card| card.is_top).collect()
}

/// Cards attributed to `author` (exact match), in input order.
pub fn cards_by_author<'a>(cards: &'a [Card], author: &str) -> Vec<&'a Card> {
    cards.iter().filter(|card| card.author.as_deref() == Some(author)).collect()
}

/// Cards with a timestamp at or after `since` (ms since epoch), in input
/// order. Untimestamped cards never match.
pub fn cards_since(cards: &[Card], since: i64) -> Vec<&Card> {
    cards.iter().filter(|card| card.timestamp.is_some_and(|ts| ts >= since)).collect()
}

pub(crate) fn substring_search<'a>(
    cards: &'a [Card],
    needle: &str,
    case_insensitive: bool,
) -> Vec<&'a Card> {
    if case_insensitive {
        let needle_lower = needle.to_lowercase();
        cards
            .iter()
            .filter(|card| {
                searchable_fields(card).any(|field| field.to_lowercase().contains(&needle_lower))
            })
            .collect()
    } else {
        cards
            .iter()
            .filter(|card| searchable_fields(card).any(|field| field.contains(needle)))
            .collect()
    }
}

fn fuzzy_search<'a>(cards: &'a [Card], needle: &str) -> Vec<&'a Card> {
    let needle = needle.trim();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut scored = cards
        .iter()
        .enumerate()
        .filter_map(|(index, card)| {
            let ratio = searchable_fields(card)
                .map(|field| rapidfuzz::fuzz::ratio(needle.chars(), field.chars()))
                .fold(0.0_f64, f64::max);
            (ratio >= FUZZY_MIN_RATIO).then_some((index, ratio, card))
        })
        .collect::<Vec<_>>();

    // Score descending; equal scores keep input order via the index.
    scored.sort_by(|(a_index, a_ratio, _), (b_index, b_ratio, _)| {
        b_ratio.total_cmp(a_ratio).then(a_index.cmp(b_index))
    });
    scored.into_iter().map(|(_, _, card)| card).collect()
}

fn searchable_fields(card: &Card) -> impl Iterator<Item = &str> {
    [
        Some(card.title.as_str()),
        card.description.as_deref(),
        card.author.as_deref(),
        Some(card.content.as_str()),
    ]
    .into_iter()
    .flatten()
}
