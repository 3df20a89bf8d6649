//! Deck to deck code.

use rustc_hash::FxHashMap;

use crate::collate;
use crate::deck::Deck;

/// Encode a deck as its deck code.
///
/// Returns an empty string for a deck without a leader; there is nothing
/// meaningful to share.
///
/// ## Example
///
/// ```
/// use tcg_deck::cards::Card;
/// use tcg_deck::code::encode;
/// use tcg_deck::core::DeckRules;
/// use tcg_deck::deck::{add_member, set_leader, Deck};
///
/// let rules = DeckRules::standard();
/// let deck = set_leader(&rules, &Deck::empty(), &Card::new("OP01-001", "Zoro", "Leader")).unwrap();
/// let deck = add_member(&rules, &deck, &Card::new("ST01-002_p1", "Usopp", "Character")).unwrap();
///
/// assert_eq!(encode(&deck), "1xOP01-001\n1xST01-002");
/// ```
#[must_use]
pub fn encode(deck: &Deck) -> String {
    let Some(leader) = deck.leader_id() else {
        return String::new();
    };

    let mut counts: FxHashMap<&str, u32> = FxHashMap::default();
    for member in deck.members() {
        *counts.entry(member.member_id.base()).or_insert(0) += u32::from(member.member_count);
    }

    let mut ids: Vec<&str> = counts.keys().copied().collect();
    // Plain order first so ids the collator cannot rank still come out
    // in a fixed order.
    ids.sort_unstable();
    collate::sort_ids(&mut ids);

    let mut lines = Vec::with_capacity(ids.len() + 1);
    lines.push(format!("1x{}", leader.base()));
    lines.extend(ids.iter().map(|id| format!("{}x{}", counts[id], id)));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;
    use crate::deck::MemberEntry;

    fn deck(leader: Option<&str>, members: &[(&str, u8)]) -> Deck {
        let mut deck = Deck::empty();
        deck.leader_id = leader.map(CardId::new);
        for &(id, count) in members {
            deck.members.push_back(MemberEntry::new(id, count));
        }
        deck
    }

    #[test]
    fn test_no_leader_encodes_empty() {
        assert_eq!(encode(&deck(None, &[("OP01-016", 4)])), "");
    }

    #[test]
    fn test_leader_only() {
        assert_eq!(encode(&deck(Some("OP01-001"), &[])), "1xOP01-001");
    }

    #[test]
    fn test_strips_suffix_and_orders() {
        let d = deck(
            Some("OP01-001"),
            &[("ST01-002_p1", 2), ("OP01-016", 4)],
        );
        assert_eq!(encode(&d), "1xOP01-001\n4xOP01-016\n2xST01-002");
    }

    #[test]
    fn test_consolidates_printings() {
        let d = deck(
            Some("OP01-001_p1"),
            &[("OP01-016", 2), ("OP01-016_p1", 1), ("OP01-016_p2", 1)],
        );
        assert_eq!(encode(&d), "1xOP01-001\n4xOP01-016");
    }

    #[test]
    fn test_member_order_does_not_matter() {
        let a = deck(Some("OP01-001"), &[("OP01-016", 4), ("ST01-002", 2), ("weird", 1)]);
        let b = deck(Some("OP01-001"), &[("weird", 1), ("ST01-002", 2), ("OP01-016", 4)]);
        assert_eq!(encode(&a), encode(&b));
        assert!(!encode(&a).ends_with('\n'));
    }
}
