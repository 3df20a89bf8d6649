//! Persistence seam for saved decks.
//!
//! The host decides where decks live (key-value app storage, a file,
//! a browser store). The library only needs to load and persist a
//! whole collection.

use tracing::{debug, instrument};

use crate::core::{DeckRules, StoreError};
use crate::deck::today;

use super::record::import_decks;
use super::DeckCollection;

/// Load and persist a named deck collection.
pub trait DeckStore {
    /// Load the saved collection. An empty store yields an empty collection.
    fn load(&self, rules: &DeckRules) -> Result<DeckCollection, StoreError>;

    /// Replace the saved collection.
    fn persist(&mut self, collection: &DeckCollection) -> Result<(), StoreError>;
}

/// In-memory store holding the serialized JSON, like a key-value slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    saved: Option<String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from previously saved JSON.
    #[must_use]
    pub fn with_json(json: impl Into<String>) -> Self {
        Self {
            saved: Some(json.into()),
        }
    }

    /// The raw saved JSON, if anything was persisted.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.saved.as_deref()
    }
}

impl DeckStore for MemoryStore {
    #[instrument(skip_all)]
    fn load(&self, rules: &DeckRules) -> Result<DeckCollection, StoreError> {
        let Some(json) = &self.saved else {
            return Ok(DeckCollection::new());
        };

        let report = import_decks(rules, json, today())?;
        let mut collection = DeckCollection::new();
        let merged = collection.merge(report.decks);
        debug!(
            loaded = merged.added.len(),
            skipped = report.skipped + merged.skipped.len(),
            "loaded deck collection"
        );
        Ok(collection)
    }

    #[instrument(skip_all, fields(decks = collection.len()))]
    fn persist(&mut self, collection: &DeckCollection) -> Result<(), StoreError> {
        self.saved = Some(collection.export_json()?);
        Ok(())
    }
}
