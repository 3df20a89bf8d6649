//! Deck construction rules.
//!
//! Hosts configure deck legality at startup by providing a `DeckRules`.
//! The standard rules are one leader, up to 4 copies of any card and
//! at most 51 cards in total (leader included).
//!
//! Nothing in the deck operations hardcodes these numbers - every
//! validator and mutation takes the rules as context.

use serde::{Deserialize, Serialize};

/// Catalog kind that marks a card as a leader in the standard rules.
pub const LEADER_KIND: &str = "Leader";

/// Copies of a single card allowed in a standard deck.
pub const MAX_COPIES: u8 = 4;

/// Cards allowed in a standard deck, leader included.
pub const MAX_CARDS: usize = 51;

/// Deck legality configuration.
///
/// ## Example
///
/// ```
/// use tcg_deck::core::DeckRules;
///
/// let rules = DeckRules::standard().with_max_cards(41);
/// assert_eq!(rules.max_cards, 41);
/// assert_eq!(rules.max_copies, 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckRules {
    /// Catalog kind identifying leader cards.
    pub leader_kind: String,

    /// Maximum copies of one card (printings of the same base id share the limit).
    pub max_copies: u8,

    /// Maximum total cards, leader included.
    pub max_cards: usize,
}

impl Default for DeckRules {
    fn default() -> Self {
        Self {
            leader_kind: LEADER_KIND.to_string(),
            max_copies: MAX_COPIES,
            max_cards: MAX_CARDS,
        }
    }
}

impl DeckRules {
    /// The standard rules: "Leader" kind, 4 copies, 51 cards.
    #[must_use]
    pub fn standard() -> Self {
        Self::default()
    }

    /// Load rules from JSON. Missing fields fall back to the standard values.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Set the leader catalog kind.
    #[must_use]
    pub fn with_leader_kind(mut self, kind: impl Into<String>) -> Self {
        self.leader_kind = kind.into();
        self
    }

    /// Set the per-card copy limit.
    #[must_use]
    pub fn with_max_copies(mut self, max: u8) -> Self {
        self.max_copies = max;
        self
    }

    /// Set the total deck size limit.
    #[must_use]
    pub fn with_max_cards(mut self, max: usize) -> Self {
        self.max_cards = max;
        self
    }

    /// Is this catalog kind the leader kind?
    #[must_use]
    pub fn is_leader_kind(&self, kind: &str) -> bool {
        kind == self.leader_kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_rules() {
        let rules = DeckRules::standard();
        assert_eq!(rules.leader_kind, "Leader");
        assert_eq!(rules.max_copies, 4);
        assert_eq!(rules.max_cards, 51);
        assert!(rules.is_leader_kind("Leader"));
        assert!(!rules.is_leader_kind("Character"));
    }

    #[test]
    fn test_rules_builder() {
        let rules = DeckRules::standard()
            .with_leader_kind("Legend")
            .with_max_copies(3)
            .with_max_cards(40);

        assert!(rules.is_leader_kind("Legend"));
        assert_eq!(rules.max_copies, 3);
        assert_eq!(rules.max_cards, 40);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let rules = DeckRules::from_json(r#"{ "max_cards": 41 }"#).unwrap();
        assert_eq!(rules.max_cards, 41);
        assert_eq!(rules.max_copies, 4);
        assert_eq!(rules.leader_kind, "Leader");
    }

    #[test]
    fn test_rules_serialization() {
        let rules = DeckRules::standard().with_max_copies(2);
        let json = serde_json::to_string(&rules).unwrap();
        let back = DeckRules::from_json(&json).unwrap();
        assert_eq!(rules, back);
    }
}
