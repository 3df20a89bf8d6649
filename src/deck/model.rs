//! Deck values.
//!
//! A `Deck` is a plain value owned by the host. Operations in
//! `deck::ops` never modify a deck in place; they return the next deck.
//!
//! ## Invariants
//!
//! - At most one leader.
//! - Each member id appears once; counts are consolidated.
//! - Every member count is between 1 and the copy limit.
//! - Leader plus member counts never exceed the deck size limit.

use chrono::NaiveDate;
use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::collate;
use crate::core::{DeckRules, Rejection};

use super::validate::check_invariants;

/// A non-leader card in a deck and how many copies it has.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberEntry {
    pub member_id: CardId,
    pub member_count: u8,
}

impl MemberEntry {
    /// Create a member entry.
    #[must_use]
    pub fn new(member_id: impl Into<CardId>, member_count: u8) -> Self {
        Self {
            member_id: member_id.into(),
            member_count,
        }
    }
}

/// A deck: one optional leader and up to 4 copies of each member card.
///
/// Uses an `im` vector for members so each operation's returned deck
/// shares structure with its input. Deserializing checks the invariants
/// against the standard rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedDeck")]
pub struct Deck {
    pub(crate) leader_id: Option<CardId>,
    pub(crate) members: Vector<MemberEntry>,

    /// Deck name, empty until the host assigns one.
    pub name: String,

    /// Day the deck was created.
    pub created_date: NaiveDate,

    /// Day of the last explicit save of an existing deck.
    pub updated_date: Option<NaiveDate>,
}

impl Deck {
    /// Create an empty, unnamed deck.
    #[must_use]
    pub fn new(created_date: NaiveDate) -> Self {
        Self {
            leader_id: None,
            members: Vector::new(),
            name: String::new(),
            created_date,
            updated_date: None,
        }
    }

    /// Create an empty deck dated today.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(today())
    }

    /// Set the name (builder pattern). Does not validate.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// The leader id, if set.
    #[must_use]
    pub fn leader_id(&self) -> Option<&CardId> {
        self.leader_id.as_ref()
    }

    /// Does this deck have a leader?
    #[must_use]
    pub fn has_leader(&self) -> bool {
        self.leader_id.is_some()
    }

    /// Member entries in insertion order.
    #[must_use]
    pub fn members(&self) -> &Vector<MemberEntry> {
        &self.members
    }

    /// Member entries in collation order.
    #[must_use]
    pub fn members_sorted(&self) -> Vec<&MemberEntry> {
        let mut members: Vec<&MemberEntry> = self.members.iter().collect();
        collate::sort_by_id(&mut members, |m| m.member_id.as_str());
        members
    }

    /// Copies of this exact id.
    #[must_use]
    pub fn member_count(&self, id: &str) -> u8 {
        self.members
            .iter()
            .find(|m| m.member_id.as_str() == id)
            .map_or(0, |m| m.member_count)
    }

    /// Copies across every printing of a base id.
    #[must_use]
    pub fn copies_of_base(&self, base: &str) -> u32 {
        self.members
            .iter()
            .filter(|m| m.member_id.base() == base)
            .map(|m| u32::from(m.member_count))
            .sum()
    }

    /// Total cards, leader included.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        let members: usize = self.members.iter().map(|m| usize::from(m.member_count)).sum();
        members + usize::from(self.has_leader())
    }

    /// No leader and no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.leader_id.is_none() && self.members.is_empty()
    }

    /// Same leader and the same member counts, ignoring order, name and dates.
    #[must_use]
    pub fn same_contents(&self, other: &Deck) -> bool {
        if self.leader_id != other.leader_id || self.members.len() != other.members.len() {
            return false;
        }
        self.members
            .iter()
            .all(|m| other.member_count(m.member_id.as_str()) == m.member_count)
    }

    pub(crate) fn position_of(&self, id: &str) -> Option<usize> {
        self.members.iter().position(|m| m.member_id.as_str() == id)
    }
}

#[derive(Deserialize)]
struct UncheckedDeck {
    leader_id: Option<CardId>,
    members: Vector<MemberEntry>,
    name: String,
    created_date: NaiveDate,
    updated_date: Option<NaiveDate>,
}

impl TryFrom<UncheckedDeck> for Deck {
    type Error = Rejection;

    fn try_from(raw: UncheckedDeck) -> Result<Self, Rejection> {
        let deck = Deck {
            leader_id: raw.leader_id,
            members: raw.members,
            name: raw.name,
            created_date: raw.created_date,
            updated_date: raw.updated_date,
        };
        check_invariants(&DeckRules::standard(), &deck)?;
        Ok(deck)
    }
}

/// Today's local date.
#[must_use]
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
