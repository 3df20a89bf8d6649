//! Deck mutation operations.
//!
//! Every operation takes the current deck by reference and returns the
//! next deck; the input is never modified. Operations that can break a
//! rule consult `deck::validate` first and return the `Rejection`
//! instead of clamping.

use chrono::NaiveDate;
use tracing::debug;

use crate::cards::{CardId, CardView};
use crate::core::{DeckRules, Result};

use super::model::{Deck, MemberEntry};
use super::validate;

/// Make `card` the leader.
pub fn set_leader(rules: &DeckRules, deck: &Deck, card: &impl CardView) -> Result<Deck> {
    validate::can_set_leader(rules, deck, card)?;

    let mut next = deck.clone();
    next.leader_id = Some(CardId::new(card.card_id()));
    debug!(leader = card.card_id(), "set leader");
    Ok(next)
}

/// Remove the leader. Members are kept.
#[must_use]
pub fn clear_leader(deck: &Deck) -> Deck {
    let mut next = deck.clone();
    next.leader_id = None;
    next
}

/// Add one copy of `card`.
///
/// Increments an existing entry for the same id, otherwise appends a
/// new entry with count 1.
pub fn add_member(rules: &DeckRules, deck: &Deck, card: &impl CardView) -> Result<Deck> {
    validate::can_add_member(rules, deck, card)?;

    let mut next = deck.clone();
    match next.position_of(card.card_id()) {
        Some(index) => {
            if let Some(entry) = next.members.get_mut(index) {
                entry.member_count += 1;
            }
        }
        None => next.members.push_back(MemberEntry::new(card.card_id(), 1)),
    }
    debug!(
        member = card.card_id(),
        count = next.member_count(card.card_id()),
        total = next.total_cards(),
        "added member"
    );
    Ok(next)
}

/// Remove one copy of `member_id`.
///
/// The entry is dropped when its last copy goes. An absent id leaves
/// the deck unchanged.
#[must_use]
pub fn decrement_member(deck: &Deck, member_id: &str) -> Deck {
    let mut next = deck.clone();
    let Some(index) = next.position_of(member_id) else {
        return next;
    };

    if next.members[index].member_count <= 1 {
        next.members.remove(index);
    } else if let Some(entry) = next.members.get_mut(index) {
        entry.member_count -= 1;
    }
    next
}

/// Rename the deck. The stored name is trimmed.
pub fn rename(deck: &Deck, new_name: &str) -> Result<Deck> {
    validate::validate_name(new_name)?;

    let mut next = deck.clone();
    next.name = new_name.trim().to_string();
    Ok(next)
}

/// Mark the deck as updated on `today`.
#[must_use]
pub fn touch(deck: &Deck, today: NaiveDate) -> Deck {
    let mut next = deck.clone();
    next.updated_date = Some(today);
    next
}
