//! The persisted deck shape and JSON import/export.
//!
//! ```json
//! {
//!   "leaderID": "OP01-001",
//!   "members": [ { "memberID": "OP01-016", "memberCount": 4 } ],
//!   "deckDate": "2025-03-01",
//!   "deckUpdated": "2025-03-09",
//!   "deckName": "Red Zoro"
//! }
//! ```
//!
//! `deckDate` is the creation day. `deckUpdated` is only written for decks
//! saved again after creation.
//!
//! Import sanitizes rather than rejects member data: counts are clamped
//! to the copy limit and non-positive counts are dropped. A record that
//! is missing its name, leader or member list is malformed; in a batch
//! it is skipped and counted.

use chrono::NaiveDate;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{instrument, warn};

use crate::cards::CardId;
use crate::core::{DeckRules, ImportError, Rejection, Result};
use crate::deck::{check_invariants, Deck, MemberEntry};

/// One member line of a persisted deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRecord {
    #[serde(rename = "memberID")]
    pub member_id: String,

    #[serde(rename = "memberCount")]
    pub member_count: i64,
}

/// A persisted deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckRecord {
    #[serde(rename = "leaderID")]
    pub leader_id: String,

    pub members: Vec<MemberRecord>,

    /// Missing in older exports.
    #[serde(rename = "deckDate", default)]
    pub deck_date: Option<NaiveDate>,

    #[serde(rename = "deckUpdated", default, skip_serializing_if = "Option::is_none")]
    pub deck_updated: Option<NaiveDate>,

    #[serde(rename = "deckName")]
    pub deck_name: String,

    #[serde(rename = "deckColor", default, skip_serializing_if = "String::is_empty")]
    pub deck_color: String,
}

impl DeckRecord {
    /// Persisted form of a deck.
    #[must_use]
    pub fn from_deck(deck: &Deck) -> Self {
        Self {
            leader_id: deck.leader_id().map(|id| id.to_string()).unwrap_or_default(),
            members: deck
                .members()
                .iter()
                .map(|m| MemberRecord {
                    member_id: m.member_id.to_string(),
                    member_count: i64::from(m.member_count),
                })
                .collect(),
            deck_date: Some(deck.created_date),
            deck_updated: deck.updated_date,
            deck_name: deck.name.clone(),
            deck_color: String::new(),
        }
    }

    /// Build a deck from this record.
    ///
    /// `today` dates records that carry no date.
    pub fn into_deck(self, rules: &DeckRules, today: NaiveDate) -> Result<Deck> {
        let name = self.deck_name.trim();
        let leader = self.leader_id.trim();
        if name.is_empty() || leader.is_empty() {
            return Err(Rejection::MalformedImportEntry);
        }

        let mut deck = Deck::new(self.deck_date.unwrap_or(today)).with_name(name);
        deck.updated_date = self.deck_updated;
        deck.leader_id = Some(CardId::new(leader));

        let max = u32::from(rules.max_copies);
        let mut per_base: FxHashMap<String, u32> = FxHashMap::default();

        for member in &self.members {
            let id = CardId::new(member.member_id.trim());
            if id.as_str().is_empty() || member.member_count <= 0 {
                warn!(member = %id, count = member.member_count, "dropping empty member entry");
                continue;
            }

            let used = per_base.entry(id.base().to_string()).or_insert(0);
            let wanted = u32::try_from(member.member_count).unwrap_or(u32::MAX);
            let take = wanted.min(max.saturating_sub(*used));
            if take == 0 {
                continue;
            }
            *used += take;

            match deck.position_of(id.as_str()) {
                Some(index) => {
                    if let Some(entry) = deck.members.get_mut(index) {
                        // Bounded by `max_copies` through `per_base`.
                        entry.member_count += take as u8;
                    }
                }
                None => deck.members.push_back(MemberEntry::new(id, take as u8)),
            }
        }

        check_invariants(rules, &deck)?;
        Ok(deck)
    }
}

/// Decks parsed from a bulk import and how many entries were skipped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub decks: Vec<Deck>,
    pub skipped: usize,
}

/// Import a single deck object.
pub fn import_deck(
    rules: &DeckRules,
    json: &str,
    today: NaiveDate,
) -> std::result::Result<Deck, ImportError> {
    let value: Value = serde_json::from_str(json)?;
    let record: DeckRecord =
        serde_json::from_value(value).map_err(|_| Rejection::MalformedImportEntry)?;
    Ok(record.into_deck(rules, today)?)
}

/// Import a JSON array of decks, skipping malformed entries.
#[instrument(skip(rules, json), fields(bytes = json.len()))]
pub fn import_decks(
    rules: &DeckRules,
    json: &str,
    today: NaiveDate,
) -> std::result::Result<ImportReport, ImportError> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Array(entries) = value else {
        return Err(ImportError::NotAnArray);
    };

    let mut report = ImportReport::default();
    for (index, entry) in entries.into_iter().enumerate() {
        let deck = serde_json::from_value::<DeckRecord>(entry)
            .map_err(|_| Rejection::MalformedImportEntry)
            .and_then(|record| record.into_deck(rules, today));

        match deck {
            Ok(deck) => report.decks.push(deck),
            Err(reason) => {
                warn!(index, %reason, "skipping import entry");
                report.skipped += 1;
            }
        }
    }
    Ok(report)
}

/// Export decks as a pretty-printed JSON array.
pub fn export_decks<'a>(
    decks: impl IntoIterator<Item = &'a Deck>,
) -> std::result::Result<String, serde_json::Error> {
    let records: Vec<DeckRecord> = decks.into_iter().map(DeckRecord::from_deck).collect();
    serde_json::to_string_pretty(&records)
}
