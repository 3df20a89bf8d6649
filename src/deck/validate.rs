//! Deck legality checks.
//!
//! Pure predicates consulted before every mutation commits. Every deck
//! screen goes through these, so the limits are enforced in one place.

use rustc_hash::FxHashSet;

use crate::cards::CardView;
use crate::core::{DeckRules, Rejection, Result};

use super::model::Deck;

/// Can `card` become the deck's leader?
pub fn can_set_leader(rules: &DeckRules, deck: &Deck, card: &impl CardView) -> Result<()> {
    if !rules.is_leader_kind(card.catalog_kind()) {
        return Err(Rejection::NotALeaderCard);
    }
    if deck.has_leader() {
        return Err(Rejection::LeaderAlreadySet);
    }
    if deck.total_cards() + 1 > rules.max_cards {
        return Err(Rejection::DeckFull);
    }
    Ok(())
}

/// Can one more copy of `card` be added as a member?
///
/// Printings of the same base id share the copy limit.
pub fn can_add_member(rules: &DeckRules, deck: &Deck, card: &impl CardView) -> Result<()> {
    if rules.is_leader_kind(card.catalog_kind()) {
        return Err(Rejection::LeaderAsMember);
    }
    if deck.total_cards() + 1 > rules.max_cards {
        return Err(Rejection::DeckFull);
    }
    let base = crate::collate::strip_printing_suffix(card.card_id());
    if deck.copies_of_base(base) >= u32::from(rules.max_copies) {
        return Err(Rejection::CopyLimitReached);
    }
    Ok(())
}

/// Can the deck be saved under `proposed_name`?
pub fn can_save(rules: &DeckRules, deck: &Deck, proposed_name: &str) -> Result<()> {
    validate_name(proposed_name)?;
    if !deck.has_leader() {
        return Err(Rejection::MissingLeader);
    }
    if deck.total_cards() > rules.max_cards {
        return Err(Rejection::DeckFull);
    }
    Ok(())
}

/// Check a deck built outside the mutation operations.
///
/// Member ids must be unique with non-zero counts. Printings of a base id
/// share the copy limit, and the whole deck must fit the size limit.
pub fn check_invariants(rules: &DeckRules, deck: &Deck) -> Result<()> {
    let mut seen = FxHashSet::default();
    for entry in deck.members() {
        if entry.member_count == 0 || !seen.insert(entry.member_id.as_str()) {
            return Err(Rejection::MalformedImportEntry);
        }
        if deck.copies_of_base(entry.member_id.base()) > u32::from(rules.max_copies) {
            return Err(Rejection::CopyLimitReached);
        }
    }
    if deck.total_cards() > rules.max_cards {
        return Err(Rejection::DeckFull);
    }
    Ok(())
}

/// Reject blank or whitespace-only names.
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        Err(Rejection::EmptyName)
    } else {
        Ok(())
    }
}
