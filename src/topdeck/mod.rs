//! Tournament top decks.
//!
//! Top deck records come from a published dataset and reference the
//! leader and members by id, in the same member shape as saved decks.
//! `enrich` fills in leader details from the catalogue for display and
//! search.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::cards::CardCatalogue;
use crate::code;
use crate::collection::{DeckRecord, MemberRecord};
use crate::core::{DeckRules, Result};
use crate::deck::Deck;

/// A tournament-placing deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopDeck {
    #[serde(rename = "leaderID")]
    pub leader_id: String,

    #[serde(rename = "deckOwner", default)]
    pub deck_owner: String,

    /// Event date as published (usually `YYYY-MM-DD`).
    #[serde(rename = "deckDate", default)]
    pub deck_date: String,

    #[serde(default)]
    pub placement: String,

    #[serde(rename = "deckColor", default)]
    pub deck_color: String,

    #[serde(default)]
    pub members: Vec<MemberRecord>,

    /// Filled by `enrich`.
    #[serde(rename = "leaderName", default)]
    pub leader_name: String,

    /// Filled by `enrich`.
    #[serde(rename = "leaderColor", default)]
    pub leader_color: String,
}

impl TopDeck {
    /// Load the dataset, a JSON array of top decks.
    pub fn list_from_json(text: &str) -> std::result::Result<Vec<Self>, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Fill leader name and color from the catalogue.
    pub fn enrich(&mut self, catalogue: &CardCatalogue) {
        if let Some(leader) = catalogue.get(&self.leader_id) {
            self.leader_name = leader.name.clone();
            self.leader_color = leader.color.clone();
        }
    }

    /// Case-insensitive match on leader, owner, date, placement and color.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        [
            &self.leader_id,
            &self.leader_name,
            &self.deck_owner,
            &self.deck_date,
            &self.placement,
            &self.deck_color,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&query))
    }

    /// Copy into an editable deck named after the leader and owner.
    ///
    /// Member data is sanitized the same way as a JSON import.
    pub fn to_deck(&self, rules: &DeckRules, today: NaiveDate) -> Result<Deck> {
        let leader = if self.leader_name.is_empty() {
            &self.leader_id
        } else {
            &self.leader_name
        };
        let deck_name = if self.deck_owner.is_empty() {
            leader.clone()
        } else {
            format!("{} - {}", leader, self.deck_owner)
        };

        DeckRecord {
            leader_id: self.leader_id.clone(),
            members: self.members.clone(),
            deck_date: NaiveDate::parse_from_str(&self.deck_date, "%Y-%m-%d").ok(),
            deck_updated: None,
            deck_name,
            deck_color: self.deck_color.clone(),
        }
        .into_deck(rules, today)
    }

    /// Deck code for this top deck, empty if it cannot form a deck.
    #[must_use]
    pub fn deck_code(&self, rules: &DeckRules, today: NaiveDate) -> String {
        self.to_deck(rules, today)
            .map(|deck| code::encode(&deck))
            .unwrap_or_default()
    }
}

/// Enrich every deck with leader details.
pub fn enrich_all(decks: &mut [TopDeck], catalogue: &CardCatalogue) {
    for deck in decks {
        deck.enrich(catalogue);
    }
}

/// Top decks matching `query`; an empty query matches all.
#[must_use]
pub fn search_top_decks<'a>(decks: &'a [TopDeck], query: &str) -> Vec<&'a TopDeck> {
    decks.iter().filter(|d| d.matches(query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    const DATA: &str = r#"[
        {
            "leaderID": "OP05-060",
            "deckOwner": "Alice",
            "deckDate": "2025-02-10",
            "placement": "1st",
            "deckColor": "Purple",
            "members": [
                { "memberID": "OP05-067_p1", "memberCount": 4 },
                { "memberID": "OP05-067", "memberCount": 1 },
                { "memberID": "OP01-016", "memberCount": 2 }
            ]
        },
        {
            "leaderID": "OP01-001",
            "deckOwner": "Bob",
            "deckDate": "2025-02-11",
            "placement": "Top 8",
            "deckColor": "Red",
            "members": []
        }
    ]"#;

    fn catalogue() -> CardCatalogue {
        [
            Card::new("OP05-060", "Monkey.D.Luffy", "Leader").with_color("Purple"),
            Card::new("OP01-001", "Roronoa Zoro", "Leader").with_color("Red"),
        ]
        .into_iter()
        .collect()
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    #[test]
    fn test_enrich_and_search() {
        let mut decks = TopDeck::list_from_json(DATA).unwrap();
        enrich_all(&mut decks, &catalogue());

        assert_eq!(decks[0].leader_name, "Monkey.D.Luffy");
        assert_eq!(decks[1].leader_color, "Red");

        assert_eq!(search_top_decks(&decks, "luffy").len(), 1);
        assert_eq!(search_top_decks(&decks, "TOP 8")[0].deck_owner, "Bob");
        assert_eq!(search_top_decks(&decks, "2025-02").len(), 2);
        assert_eq!(search_top_decks(&decks, "").len(), 2);
        assert!(search_top_decks(&decks, "nobody").is_empty());
    }

    #[test]
    fn test_to_deck() {
        let mut decks = TopDeck::list_from_json(DATA).unwrap();
        enrich_all(&mut decks, &catalogue());

        let deck = decks[0].to_deck(&DeckRules::standard(), day()).unwrap();
        assert_eq!(deck.name, "Monkey.D.Luffy - Alice");
        assert_eq!(deck.created_date, NaiveDate::from_ymd_opt(2025, 2, 10).unwrap());
        // Five copies across printings are capped at four.
        assert_eq!(deck.copies_of_base("OP05-067"), 4);
    }

    #[test]
    fn test_deck_code() {
        let decks = TopDeck::list_from_json(DATA).unwrap();
        let code = decks[0].deck_code(&DeckRules::standard(), day());
        assert_eq!(code, "1xOP05-060\n4xOP05-067\n2xOP01-016");
    }
}
