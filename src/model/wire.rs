// SPDX-FileCopyrightText: 2026 Cardwall contributors
// SPDX-License-Identifier: MIT

//! Renderer-facing records.
//!
//! The consuming renderer lays these out with native row-major,
//! column-wrapping auto-placement over exactly 4 columns; the spans and role
//! flags here are everything it needs.

use schemars::JsonSchema;
use serde::Serialize;

use super::card::{is_false, Card};
use super::layout_card::{CardRole, LayoutCard};

/// One entry of the serialized layout sequence.
///
/// The original card payload is flattened in; the role is expanded into
/// mutually-exclusive boolean flags, each omitted when false. Only the engine
/// produces these, so there is no deserialization path.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LayoutCardWire {
    #[serde(flatten)]
    pub card: Card,
    pub col_span: u32,
    pub row_span: u32,
    #[serde(skip_serializing_if = "is_false")]
    pub is_welcome: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub is_navigation: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub is_website_info: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub is_empty: bool,
}

impl From<LayoutCard> for LayoutCardWire {
    fn from(card: LayoutCard) -> Self {
        let footprint = card.footprint();
        let role = card.role();
        Self {
            card: card.into_card(),
            col_span: footprint.col_span(),
            row_span: footprint.row_span(),
            is_welcome: role == CardRole::Welcome,
            is_navigation: role == CardRole::Navigation,
            is_website_info: role == CardRole::SiteInfo,
            is_empty: role == CardRole::Filler,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LayoutCardWire;
    use crate::model::card::Card;
    use crate::model::importance::Importance;
    use crate::model::layout_card::LayoutCard;

    #[test]
    fn content_cards_carry_no_role_flags() {
        let card = LayoutCard::content(Card::placeholder("a-1", Importance::Feature));
        let wire = LayoutCardWire::from(card);
        assert_eq!(wire.col_span, 2);
        assert_eq!(wire.row_span, 2);

        let json = serde_json::to_value(&wire).expect("serialize");
        assert_eq!(json["colSpan"], serde_json::json!(2));
        assert!(json.get("isWelcome").is_none());
        assert!(json.get("isNavigation").is_none());
        assert!(json.get("isWebsiteInfo").is_none());
        assert!(json.get("isEmpty").is_none());
    }

    #[test]
    fn roles_flatten_to_exactly_one_flag() {
        let cases = [
            (LayoutCard::welcome(), "isWelcome"),
            (LayoutCard::navigation(), "isNavigation"),
            (LayoutCard::site_info(Importance::Wide), "isWebsiteInfo"),
            (LayoutCard::filler(0), "isEmpty"),
        ];
        let all_flags = ["isWelcome", "isNavigation", "isWebsiteInfo", "isEmpty"];

        for (card, expected_flag) in cases {
            let json = serde_json::to_value(LayoutCardWire::from(card)).expect("serialize");
            for flag in all_flags {
                if flag == expected_flag {
                    assert_eq!(json[flag], serde_json::json!(true), "missing {flag}");
                } else {
                    assert!(json.get(flag).is_none(), "unexpected {flag}");
                }
            }
        }
    }

    #[test]
    fn fixed_pair_wire_spans_cover_two_rows() {
        let json = serde_json::to_value(LayoutCardWire::from(LayoutCard::welcome()))
            .expect("serialize");
        assert_eq!(json["colSpan"], serde_json::json!(2));
        assert_eq!(json["rowSpan"], serde_json::json!(2));
        assert_eq!(json["importance"], serde_json::json!(2));
    }

    #[test]
    fn payload_fields_pass_through_verbatim() {
        let mut card = Card::placeholder("a-9", Importance::Mini);
        card.title = "pass through".to_owned();
        card.author = Some("newsroom".to_owned());
        card.extra.insert("readingTime".to_owned(), serde_json::json!(3));

        let json = serde_json::to_value(LayoutCardWire::from(LayoutCard::content(card)))
            .expect("serialize");
        assert_eq!(json["title"], serde_json::json!("pass through"));
        assert_eq!(json["author"], serde_json::json!("newsroom"));
        assert_eq!(json["readingTime"], serde_json::json!(3));
    }
}
