// SPDX-FileCopyrightText: 2026 Cardwall contributors
// SPDX-License-Identifier: MIT

use super::card::Card;
use super::importance::{Footprint, Importance};

/// What a record in the layout output sequence is. Roles are mutually
/// exclusive; ordinary article cards are `Content`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CardRole {
    Content,
    Welcome,
    Navigation,
    SiteInfo,
    Filler,
}

impl CardRole {
    /// The welcome/navigation pair generated once per layout.
    pub fn is_fixed(self) -> bool {
        matches!(self, Self::Welcome | Self::Navigation)
    }

    /// Any card the engine generated rather than received as input.
    pub fn is_generated(self) -> bool {
        self != Self::Content
    }
}

/// A card in the layout output: the original payload plus its role.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutCard {
    card: Card,
    role: CardRole,
}

impl LayoutCard {
    pub fn content(card: Card) -> Self {
        Self { card, role: CardRole::Content }
    }

    pub fn welcome() -> Self {
        Self { card: Card::placeholder("welcome", Importance::Wide), role: CardRole::Welcome }
    }

    pub fn navigation() -> Self {
        Self { card: Card::placeholder("navigation", Importance::Wide), role: CardRole::Navigation }
    }

    pub fn site_info(importance: Importance) -> Self {
        Self { card: Card::placeholder("site-info", importance), role: CardRole::SiteInfo }
    }

    /// A 1×1 spacer card; `index` keeps generated ids unique within one layout.
    pub fn filler(index: usize) -> Self {
        let card = Card::placeholder(&format!("empty-{index}"), Importance::Mini);
        Self { card, role: CardRole::Filler }
    }

    pub fn card(&self) -> &Card {
        &self.card
    }

    pub fn into_card(self) -> Card {
        self.card
    }

    pub fn role(&self) -> CardRole {
        self.role
    }

    pub fn importance(&self) -> Importance {
        self.card.importance
    }

    /// The cell rectangle this card occupies under auto-placement.
    ///
    /// The welcome/navigation pair always renders as a 2×2 block; its
    /// importance level only selects styling. Every other role derives its
    /// footprint from the importance table.
    pub fn footprint(&self) -> Footprint {
        match self.role {
            CardRole::Welcome | CardRole::Navigation => Footprint::new(2, 2),
            _ => self.card.importance.footprint(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CardRole, LayoutCard};
    use crate::model::card::Card;
    use crate::model::importance::{Footprint, Importance};

    #[test]
    fn content_cards_derive_footprint_from_importance() {
        let card = LayoutCard::content(Card::placeholder("a-1", Importance::Tall));
        assert_eq!(card.role(), CardRole::Content);
        assert_eq!(card.footprint(), Footprint::new(1, 2));
    }

    #[test]
    fn fixed_pair_occupies_a_two_by_two_block() {
        let welcome = LayoutCard::welcome();
        let navigation = LayoutCard::navigation();

        assert_eq!(welcome.importance(), Importance::Wide);
        assert_eq!(navigation.importance(), Importance::Wide);
        assert_eq!(welcome.footprint(), Footprint::new(2, 2));
        assert_eq!(navigation.footprint(), Footprint::new(2, 2));
        assert!(welcome.role().is_fixed());
        assert!(navigation.role().is_fixed());
    }

    #[test]
    fn site_info_footprint_follows_its_importance() {
        assert_eq!(
            LayoutCard::site_info(Importance::Banner).footprint(),
            Footprint::new(4, 2)
        );
        assert_eq!(LayoutCard::site_info(Importance::Wide).footprint(), Footprint::new(2, 1));
        assert_eq!(LayoutCard::site_info(Importance::Mini).footprint(), Footprint::new(1, 1));
    }

    #[test]
    fn fillers_are_single_cell_and_uniquely_numbered() {
        let first = LayoutCard::filler(0);
        let second = LayoutCard::filler(1);
        assert_eq!(first.footprint(), Footprint::new(1, 1));
        assert_eq!(first.card().id, "empty-0");
        assert_eq!(second.card().id, "empty-1");
        assert_eq!(first.role(), CardRole::Filler);
    }

    #[test]
    fn generated_roles_exclude_content() {
        assert!(!CardRole::Content.is_generated());
        for role in [CardRole::Welcome, CardRole::Navigation, CardRole::SiteInfo, CardRole::Filler]
        {
            assert!(role.is_generated());
        }
    }
}
