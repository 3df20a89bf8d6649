//! Saved decks: a collection of named decks with JSON import/export.
//!
//! ## Duplicate names
//!
//! - `save` with an existing name overwrites that deck (an explicit
//!   user save of the deck being edited).
//! - `merge` (bulk import) never overwrites: decks whose name already
//!   exists, or that have no name, are skipped and reported.

pub mod record;
pub mod store;

use chrono::NaiveDate;
use im::Vector;
use tracing::{debug, warn};

use crate::core::{CollectionError, DeckRules, ImportError};
use crate::deck::{self, Deck};

pub use record::{export_decks, import_deck, import_decks, DeckRecord, ImportReport, MemberRecord};
pub use store::{DeckStore, MemoryStore};

/// Whether `save` created a new entry or replaced one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    Created,
    Updated,
}

/// Result of merging imported decks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Names of decks added.
    pub added: Vec<String>,
    /// Names of decks skipped because the name was taken or empty.
    pub skipped: Vec<String>,
    /// Entries dropped as malformed before merging.
    pub malformed: usize,
}

/// Named decks in insertion order. Names are unique.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeckCollection {
    decks: Vector<Deck>,
}

impl DeckCollection {
    /// Create a new empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of saved decks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.decks.len()
    }

    /// Check if no decks are saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    /// Look up a deck by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Deck> {
        self.decks.iter().find(|d| d.name == name)
    }

    /// Check if a deck with this name is saved.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Deck names in order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.decks.iter().map(|d| d.name.as_str()).collect()
    }

    /// Iterate over saved decks in order.
    pub fn iter(&self) -> impl Iterator<Item = &Deck> {
        self.decks.iter()
    }

    /// Save `deck` under `name`.
    ///
    /// A new name stores the deck created `today`. An existing name
    /// replaces that deck, keeping its creation date and marking it
    /// updated `today`.
    pub fn save(
        &mut self,
        rules: &DeckRules,
        deck: &Deck,
        name: &str,
        today: NaiveDate,
    ) -> Result<SaveOutcome, CollectionError> {
        deck::can_save(rules, deck, name)?;
        let named = deck::rename(deck, name)?;

        match self.position(&named.name) {
            Some(index) => {
                let mut updated = deck::touch(&named, today);
                updated.created_date = self.decks[index].created_date;
                debug!(name = %updated.name, "updated saved deck");
                self.decks.set(index, updated);
                Ok(SaveOutcome::Updated)
            }
            None => {
                let mut created = named;
                created.created_date = today;
                created.updated_date = None;
                debug!(name = %created.name, "saved new deck");
                self.decks.push_back(created);
                Ok(SaveOutcome::Created)
            }
        }
    }

    /// Rename a saved deck.
    pub fn rename(&mut self, old: &str, new: &str) -> Result<(), CollectionError> {
        deck::validate_name(new)?;
        let new = new.trim();
        let index = self
            .position(old)
            .ok_or_else(|| CollectionError::DeckNotFound(old.to_string()))?;
        if new == old {
            return Err(CollectionError::SameName);
        }
        if self.contains(new) {
            return Err(CollectionError::DuplicateName(new.to_string()));
        }

        let renamed = deck::rename(&self.decks[index], new)?;
        self.decks.set(index, renamed);
        Ok(())
    }

    /// Delete a saved deck, returning it.
    pub fn remove(&mut self, name: &str) -> Result<Deck, CollectionError> {
        let index = self
            .position(name)
            .ok_or_else(|| CollectionError::DeckNotFound(name.to_string()))?;
        Ok(self.decks.remove(index))
    }

    /// Add imported decks, skipping empty or already-used names.
    pub fn merge(&mut self, decks: impl IntoIterator<Item = Deck>) -> MergeReport {
        let mut report = MergeReport::default();
        for deck in decks {
            if deck.name.trim().is_empty() || self.contains(&deck.name) {
                warn!(name = %deck.name, "skipping imported deck, name empty or taken");
                report.skipped.push(deck.name);
                continue;
            }
            report.added.push(deck.name.clone());
            self.decks.push_back(deck);
        }
        report
    }

    /// Import a JSON array of decks and merge them.
    pub fn import_json(
        &mut self,
        rules: &DeckRules,
        json: &str,
        today: NaiveDate,
    ) -> Result<MergeReport, ImportError> {
        let imported = import_decks(rules, json, today)?;
        let mut report = self.merge(imported.decks);
        report.malformed = imported.skipped;
        Ok(report)
    }

    /// Persisted records for every deck.
    #[must_use]
    pub fn to_records(&self) -> Vec<DeckRecord> {
        self.decks.iter().map(DeckRecord::from_deck).collect()
    }

    /// Export every deck as a JSON array.
    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        export_decks(self.decks.iter())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.decks.iter().position(|d| d.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardId};
    use crate::core::Rejection;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, d).unwrap()
    }

    fn legal_deck() -> Deck {
        let rules = DeckRules::standard();
        deck::set_leader(&rules, &Deck::new(day(1)), &Card::new("OP01-001", "Zoro", "Leader")).unwrap()
    }

    #[test]
    fn test_save_new_and_update() {
        let rules = DeckRules::standard();
        let mut collection = DeckCollection::new();

        let outcome = collection.save(&rules, &legal_deck(), " Red Zoro ", day(2)).unwrap();
        assert_eq!(outcome, SaveOutcome::Created);
        let saved = collection.get("Red Zoro").unwrap();
        assert_eq!(saved.created_date, day(2));
        assert_eq!(saved.updated_date, None);

        let edited = deck::add_member(&rules, saved, &Card::new("OP01-016", "Nami", "Character")).unwrap();
        let outcome = collection.save(&rules, &edited, "Red Zoro", day(9)).unwrap();
        assert_eq!(outcome, SaveOutcome::Updated);
        assert_eq!(collection.len(), 1);

        let saved = collection.get("Red Zoro").unwrap();
        assert_eq!(saved.created_date, day(2));
        assert_eq!(saved.updated_date, Some(day(9)));
        assert_eq!(saved.member_count("OP01-016"), 1);
    }

    #[test]
    fn test_save_rejections() {
        let rules = DeckRules::standard();
        let mut collection = DeckCollection::new();

        assert_eq!(
            collection.save(&rules, &legal_deck(), "  ", day(1)),
            Err(CollectionError::Rejected(Rejection::EmptyName))
        );
        assert_eq!(
            collection.save(&rules, &Deck::new(day(1)), "No Leader", day(1)),
            Err(CollectionError::Rejected(Rejection::MissingLeader))
        );
        assert!(collection.is_empty());
    }

    #[test]
    fn test_rename() {
        let rules = DeckRules::standard();
        let mut collection = DeckCollection::new();
        collection.save(&rules, &legal_deck(), "A", day(1)).unwrap();
        collection.save(&rules, &legal_deck(), "B", day(1)).unwrap();

        assert_eq!(collection.rename("A", "A"), Err(CollectionError::SameName));
        assert_eq!(
            collection.rename("A", "B"),
            Err(CollectionError::DuplicateName("B".to_string()))
        );
        assert_eq!(
            collection.rename("Z", "C"),
            Err(CollectionError::DeckNotFound("Z".to_string()))
        );
        assert_eq!(
            collection.rename("Z", "Z"),
            Err(CollectionError::DeckNotFound("Z".to_string()))
        );
        assert_eq!(
            collection.rename("A", " "),
            Err(CollectionError::Rejected(Rejection::EmptyName))
        );

        collection.rename("A", " C ").unwrap();
        assert_eq!(collection.names(), vec!["C", "B"]);
    }

    #[test]
    fn test_remove() {
        let rules = DeckRules::standard();
        let mut collection = DeckCollection::new();
        collection.save(&rules, &legal_deck(), "A", day(1)).unwrap();

        let removed = collection.remove("A").unwrap();
        assert_eq!(removed.name, "A");
        assert_eq!(removed.leader_id(), Some(&CardId::new("OP01-001")));
        assert!(collection.is_empty());
        assert_eq!(
            collection.remove("A"),
            Err(CollectionError::DeckNotFound("A".to_string()))
        );
    }

    #[test]
    fn test_merge_skips_existing() {
        let rules = DeckRules::standard();
        let mut collection = DeckCollection::new();
        collection.save(&rules, &legal_deck(), "A", day(1)).unwrap();

        let report = collection.merge(vec![
            legal_deck().with_name("A"),
            legal_deck().with_name("B"),
            legal_deck().with_name("B"),
            legal_deck(),
        ]);

        assert_eq!(report.added, vec!["B"]);
        assert_eq!(report.skipped, vec!["A", "B", ""]);
        assert_eq!(collection.names(), vec!["A", "B"]);
    }

    #[test]
    fn test_import_json_reports_malformed() {
        let mut collection = DeckCollection::new();
        let json = r#"[
            { "leaderID": "OP01-001", "members": [], "deckName": "A" },
            { "members": [], "deckName": "Broken" }
        ]"#;

        let report = collection.import_json(&DeckRules::standard(), json, day(3)).unwrap();
        assert_eq!(report.added, vec!["A"]);
        assert_eq!(report.malformed, 1);
    }

    #[test]
    fn test_export_round_trip() {
        let rules = DeckRules::standard();
        let mut collection = DeckCollection::new();
        collection.save(&rules, &legal_deck(), "A", day(1)).unwrap();
        collection.save(&rules, &legal_deck(), "B", day(2)).unwrap();

        let json = collection.export_json().unwrap();
        let mut restored = DeckCollection::new();
        let report = restored.import_json(&rules, &json, day(20)).unwrap();

        assert_eq!(report.added, vec!["A", "B"]);
        assert_eq!(restored.get("B").unwrap().created_date, day(2));
        assert_eq!(collection.to_records().len(), 2);
    }
}
