//! Deck statistics for the deck detail view.
//!
//! Each histogram counts cards weighted by copy count, leader included.
//! Cards missing from the catalogue are listed in `missing` and left out
//! of every histogram.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::cards::{Card, CardCatalogue, CardId};
use crate::deck::Deck;

/// Histograms over a deck's cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DeckStats {
    /// Life/cost value as printed, `-` when empty.
    pub life: BTreeMap<String, u32>,
    pub power: BTreeMap<i64, u32>,
    pub counter: BTreeMap<i64, u32>,
    /// Attribute, `None` when empty.
    pub attribute: BTreeMap<String, u32>,
    /// Feature line as printed, `None` when empty.
    pub feature: BTreeMap<String, u32>,
    pub with_trigger: u32,
    pub without_trigger: u32,
    /// Ids not found in the catalogue.
    pub missing: Vec<CardId>,
}

impl DeckStats {
    /// Compute statistics for `deck`.
    #[must_use]
    pub fn compute(deck: &Deck, catalogue: &CardCatalogue) -> Self {
        let mut stats = Self::default();

        let leader = deck.leader_id().map(|id| (id, 1u32));
        let members = deck
            .members()
            .iter()
            .map(|m| (&m.member_id, u32::from(m.member_count)));

        for (id, copies) in leader.into_iter().chain(members) {
            match catalogue.get(id.as_str()) {
                Some(card) => stats.record(card, copies),
                None => stats.missing.push(id.clone()),
            }
        }
        stats
    }

    fn record(&mut self, card: &Card, copies: u32) {
        *self.life.entry(or_placeholder(&card.life, "-")).or_default() += copies;
        *self.power.entry(card.power_value()).or_default() += copies;
        *self.counter.entry(card.counter_value()).or_default() += copies;
        *self
            .attribute
            .entry(or_placeholder(&card.attribute, "None"))
            .or_default() += copies;
        *self
            .feature
            .entry(or_placeholder(&card.feature, "None"))
            .or_default() += copies;

        if card.has_trigger() {
            self.with_trigger += copies;
        } else {
            self.without_trigger += copies;
        }
    }

    /// Cards counted (excludes missing ids).
    #[must_use]
    pub fn counted(&self) -> u32 {
        self.with_trigger + self.without_trigger
    }

    /// Life/cost histogram with numeric values in numeric order.
    ///
    /// Non-numeric values (such as `-`) are dropped.
    #[must_use]
    pub fn cost_curve(&self) -> Vec<(i64, u32)> {
        let mut curve: BTreeMap<i64, u32> = BTreeMap::new();
        for (value, count) in &self.life {
            if let Ok(cost) = value.parse::<i64>() {
                *curve.entry(cost).or_default() += count;
            }
        }
        curve.into_iter().collect()
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DeckRules;
    use crate::deck::{add_member, set_leader};

    fn catalogue() -> CardCatalogue {
        [
            Card::new("OP01-001", "Zoro", "Leader")
                .with_life(5)
                .with_power(5000)
                .with_counter("-")
                .with_attribute("Slash"),
            Card::new("OP01-016", "Nami", "Character")
                .with_life(1)
                .with_power(2000)
                .with_counter(1000)
                .with_attribute("Special")
                .with_feature("Straw Hat Crew")
                .with_trigger("[Trigger] Draw 1 card."),
            Card::new("OP01-025", "Zoro", "Character")
                .with_life(3)
                .with_power(5000)
                .with_attribute("Slash")
                .with_feature("Straw Hat Crew"),
        ]
        .into_iter()
        .collect()
    }

    fn deck() -> Deck {
        let rules = DeckRules::standard();
        let cards = catalogue();
        let mut deck = set_leader(&rules, &Deck::empty(), cards.get("OP01-001").unwrap()).unwrap();
        for _ in 0..4 {
            deck = add_member(&rules, &deck, cards.get("OP01-016").unwrap()).unwrap();
        }
        for _ in 0..2 {
            deck = add_member(&rules, &deck, cards.get("OP01-025").unwrap()).unwrap();
        }
        deck
    }

    #[test]
    fn test_histograms() {
        let stats = DeckStats::compute(&deck(), &catalogue());

        assert_eq!(stats.counted(), 7);
        assert_eq!(stats.power.get(&5000), Some(&3));
        assert_eq!(stats.power.get(&2000), Some(&4));
        assert_eq!(stats.counter.get(&0), Some(&3));
        assert_eq!(stats.counter.get(&1000), Some(&4));
        assert_eq!(stats.attribute.get("Slash"), Some(&3));
        assert_eq!(stats.feature.get("None"), Some(&1));
        assert_eq!(stats.feature.get("Straw Hat Crew"), Some(&6));
        assert_eq!(stats.with_trigger, 4);
        assert_eq!(stats.without_trigger, 3);
        assert!(stats.missing.is_empty());
    }

    #[test]
    fn test_cost_curve() {
        let stats = DeckStats::compute(&deck(), &catalogue());
        assert_eq!(stats.cost_curve(), vec![(1, 4), (3, 2), (5, 1)]);
    }

    #[test]
    fn test_missing_cards() {
        let stats = DeckStats::compute(&deck(), &CardCatalogue::new());
        assert_eq!(stats.counted(), 0);
        assert_eq!(stats.missing.len(), 3);
    }
}
