//! Card catalogue for card lookup and listing.
//!
//! The `CardCatalogue` holds the read-only card dataset supplied by the
//! host. It provides lookup by id, filtering and listing in collation
//! order.

use std::cmp::Reverse;
use std::sync::LazyLock;

use regex::Regex;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, warn};

use super::definition::{Card, CardId};
use super::filter::CardFilter;
use crate::collate;

static SERIES_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z]+)([0-9]+)").expect("series code pattern")
});

/// Catalogue of card records.
///
/// ## Example
///
/// ```
/// use tcg_deck::cards::{Card, CardCatalogue};
///
/// let mut catalogue = CardCatalogue::new();
/// catalogue.register(Card::new("OP01-016", "Nami", "Character"));
///
/// let found = catalogue.get("OP01-016").unwrap();
/// assert_eq!(found.name, "Nami");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalogue {
    cards: FxHashMap<CardId, Card>,
}

impl CardCatalogue {
    /// Create a new empty catalogue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the dataset, a JSON array of card records.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let cards: Vec<Card> = serde_json::from_str(text)?;
        let catalogue: Self = cards.into_iter().collect();
        debug!(cards = catalogue.len(), "loaded card catalogue");
        Ok(catalogue)
    }

    /// Register a card record.
    ///
    /// A record with an id already present replaces it; the old record is
    /// returned.
    pub fn register(&mut self, card: Card) -> Option<Card> {
        let replaced = self.cards.insert(card.id.clone(), card);
        if let Some(old) = &replaced {
            warn!(id = %old.id, "duplicate card id in catalogue, keeping the last record");
        }
        replaced
    }

    /// Get a card by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Card> {
        self.cards.get(id)
    }

    /// Check if a card id is present.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.cards.contains_key(id)
    }

    /// Get the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalogue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// Name of the card with this id, if known.
    #[must_use]
    pub fn name_of(&self, id: &str) -> Option<&str> {
        self.get(id).map(|c| c.name.as_str())
    }

    /// Find cards of a catalog kind.
    pub fn find_by_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Card> + 'a {
        self.cards.values().filter(move |c| c.catalog_kind == kind)
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Card>
    where
        F: Fn(&Card) -> bool,
    {
        self.cards.values().filter(move |c| predicate(c))
    }

    /// All cards in collation order.
    #[must_use]
    pub fn sorted(&self) -> Vec<&Card> {
        let mut cards: Vec<&Card> = self.cards.values().collect();
        sort_cards(&mut cards);
        cards
    }

    /// Cards passing the filter, in collation order.
    #[must_use]
    pub fn filter(&self, filter: &CardFilter) -> Vec<&Card> {
        let mut cards: Vec<&Card> = self.find(|c| filter.matches(c)).collect();
        sort_cards(&mut cards);
        cards
    }

    /// Distinct non-empty series values for a series picker.
    ///
    /// Families are ordered OP, EB, ST, P, then anything else; within a
    /// family the bigger number comes first.
    #[must_use]
    pub fn series_options(&self) -> Vec<String> {
        let distinct: FxHashSet<&str> = self
            .cards
            .values()
            .map(|c| c.series.as_str())
            .filter(|s| !s.is_empty())
            .collect();

        let mut options: Vec<String> = distinct.into_iter().map(str::to_string).collect();
        options.sort();
        options.sort_by_key(|s| series_key(s));
        options
    }
}

impl FromIterator<Card> for CardCatalogue {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut catalogue = Self::new();
        for card in iter {
            catalogue.register(card);
        }
        catalogue
    }
}

/// Sort by collation order. Ids that tie (unknown ids) fall back to
/// plain string order so listings stay deterministic across hash orders.
fn sort_cards(cards: &mut [&Card]) {
    cards.sort_by(|a, b| a.id.cmp(&b.id));
    collate::sort_by_id(cards, |c| c.id.as_str());
}

fn series_key(series: &str) -> (u8, Reverse<u32>) {
    let Some(caps) = SERIES_CODE.captures(series) else {
        return (u8::MAX, Reverse(0));
    };
    let family = match caps.get(1).map(|m| m.as_str()) {
        Some("OP") => 1,
        Some("EB") => 2,
        Some("ST") => 3,
        Some("P") => 4,
        _ => 99,
    };
    let number = caps
        .get(2)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0);
    (family, Reverse(number))
}
