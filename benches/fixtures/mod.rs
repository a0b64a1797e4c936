// SPDX-FileCopyrightText: 2026 Cardwall contributors
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use cardwall::model::{Card, Importance};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Small,
    Medium,
    LargePinnedMix,
}

pub fn cards(case: Case) -> Vec<Card> {
    match case {
        Case::Small => wall(8, 0),
        Case::Medium => wall(48, 0),
        Case::LargePinnedMix => wall(192, 7),
    }
}

/// Builds `count` cards cycling through the importance levels, pinning every
/// `pin_stride`-th card (0 disables pinning). Timestamps descend from a
/// fixed epoch so the input is already "newest first".
pub fn wall(count: usize, pin_stride: usize) -> Vec<Card> {
    (0..count)
        .map(|index| {
            let importance = match index % 5 {
                0 => Importance::Feature,
                1 => Importance::Mini,
                2 => Importance::Wide,
                3 => Importance::Tall,
                _ => Importance::Mini,
            };
            let json = serde_json::json!({
                "id": format!("a-{index:04}"),
                "title": format!("Article {index} on the wall"),
                "importance": importance.level(),
                "timestamp": 1_700_000_000_000_i64 - index as i64 * 60_000,
                "isTop": pin_stride != 0 && index % pin_stride == 0,
                "author": if index % 3 == 0 { "newsroom" } else { "editors" },
            });
            serde_json::from_value(json).expect("fixture card")
        })
        .collect()
}
