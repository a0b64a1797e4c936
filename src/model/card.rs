// SPDX-FileCopyrightText: 2026 Cardwall contributors
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::importance::Importance;

/// An article card as submitted by the content pipeline.
///
/// The engine interprets only `importance`, `timestamp`, and `is_top`; every
/// other field is carried through untouched, and unknown JSON fields
/// round-trip through `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub importance: Importance,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_top: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gallery: Vec<MediaItem>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Card {
    /// A payload-free card used for the engine's generated fixed cards.
    pub(crate) fn placeholder(id: &str, importance: Importance) -> Self {
        Self {
            id: id.to_owned(),
            title: String::new(),
            importance,
            timestamp: None,
            is_top: false,
            color: None,
            description: None,
            background_image: None,
            author: None,
            content: String::new(),
            gallery: Vec::new(),
            extra: BTreeMap::new(),
        }
    }
}

/// A gallery entry attached to a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}
