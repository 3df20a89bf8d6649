//! Deck code to deck.
//!
//! Decoding is permissive: the input is text a user pasted, so lines
//! that do not look like `<count>x<id>` are skipped and member counts
//! are clamped rather than rejected. Lines are read in their original
//! order because the first `1x` line names the leader.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::{debug, trace};

use crate::cards::CardId;
use crate::core::{DeckRules, Rejection, Result};
use crate::deck::{today, Deck, MemberEntry};

static CODE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+)x([A-Za-z0-9-]+)").expect("deck code line pattern")
});

/// Decode a deck code under the standard rules, dated today.
///
/// ## Example
///
/// ```
/// use tcg_deck::code::decode;
///
/// let deck = decode("My deck:\n1xOP01-001\n9xOP01-016").unwrap();
/// assert_eq!(deck.leader_id().unwrap().as_str(), "OP01-001");
/// assert_eq!(deck.member_count("OP01-016"), 4);
/// ```
pub fn decode(text: &str) -> Result<Deck> {
    decode_with(&DeckRules::standard(), text, today())
}

/// Decode a deck code under `rules`, with `created_date` set to `today`.
///
/// Fails with `MissingLeader` when no `1x` line is found and with
/// `DeckFull` when the decoded cards exceed the deck size limit.
pub fn decode_with(rules: &DeckRules, text: &str, today: NaiveDate) -> Result<Deck> {
    let mut leader: Option<CardId> = None;
    let mut members: Vec<(CardId, u32)> = Vec::new();
    let mut skipped = 0usize;

    for line in text.lines() {
        let Some((count, id)) = parse_line(line) else {
            if !line.trim().is_empty() {
                trace!(line, "skipping non-code line");
            }
            skipped += 1;
            continue;
        };

        if count == 1 && leader.is_none() {
            leader = Some(CardId::new(id));
            continue;
        }

        match members.iter_mut().find(|(member, _)| member.as_str() == id) {
            Some((_, total)) => *total = total.saturating_add(count),
            None => members.push((CardId::new(id), count)),
        }
    }

    let Some(leader) = leader else {
        return Err(Rejection::MissingLeader);
    };

    let mut deck = Deck::new(today);
    deck.leader_id = Some(leader);
    for (id, count) in members {
        let clamped = count.clamp(1, u32::from(rules.max_copies));
        // Clamped to `max_copies`, which is a u8.
        deck.members.push_back(MemberEntry::new(id, clamped as u8));
    }

    if deck.total_cards() > rules.max_cards {
        return Err(Rejection::DeckFull);
    }

    debug!(
        members = deck.members.len(),
        total = deck.total_cards(),
        skipped,
        "decoded deck code"
    );
    Ok(deck)
}

/// Find `<count>x<id>` in a line. Counts too large for `u32` saturate.
fn parse_line(line: &str) -> Option<(u32, &str)> {
    let caps = CODE_LINE.captures(line.trim())?;
    let count = caps.get(1)?.as_str().parse::<u32>().unwrap_or(u32::MAX);
    let id = caps.get(2)?.as_str();
    Some((count, id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    fn decode_std(text: &str) -> Result<Deck> {
        decode_with(&DeckRules::standard(), text, day())
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("4xOP01-016"), Some((4, "OP01-016")));
        assert_eq!(parse_line("  2xST01-002  "), Some((2, "ST01-002")));
        assert_eq!(parse_line("- 3xEB01-003 (tech)"), Some((3, "EB01-003")));
        assert_eq!(parse_line("garbage"), None);
        assert_eq!(parse_line(""), None);
    }

    #[test]
    fn test_counts_are_ascii_digits() {
        assert_eq!(parse_line("\u{664}xOP01-016"), None);
        assert_eq!(
            decode_std("1xOP01-001\n\u{664}xOP01-016").unwrap().members().len(),
            0
        );
    }

    #[test]
    fn test_ignores_noise() {
        let deck = decode_std("garbage line\n1xOP01-001\n4xOP01-016\nmore garbage").unwrap();
        assert_eq!(deck.leader_id(), Some(&CardId::new("OP01-001")));
        assert_eq!(deck.members().len(), 1);
        assert_eq!(deck.members()[0], MemberEntry::new("OP01-016", 4));
    }

    #[test]
    fn test_clamps_counts() {
        let deck = decode_std("1xOP01-001\n9xOP01-016\n0xST01-002").unwrap();
        assert_eq!(deck.member_count("OP01-016"), 4);
        assert_eq!(deck.member_count("ST01-002"), 1);
    }

    #[test]
    fn test_first_single_line_is_leader() {
        let deck = decode_std("4xOP01-016\n1xOP05-060\n1xOP01-025").unwrap();
        assert_eq!(deck.leader_id(), Some(&CardId::new("OP05-060")));
        assert_eq!(deck.member_count("OP01-025"), 1);
        assert_eq!(deck.member_count("OP01-016"), 4);
    }

    #[test]
    fn test_duplicate_lines_consolidate() {
        let deck = decode_std("1xOP01-001\n2xOP01-016\n1xOP01-016\n3xOP01-016").unwrap();
        assert_eq!(deck.members().len(), 1);
        assert_eq!(deck.member_count("OP01-016"), 4);
    }

    #[test]
    fn test_missing_leader() {
        assert_eq!(decode_std("4xOP01-016\n2xST01-002"), Err(Rejection::MissingLeader));
        assert_eq!(decode_std(""), Err(Rejection::MissingLeader));
    }

    #[test]
    fn test_over_size_limit() {
        let rules = DeckRules::standard().with_max_cards(5);
        let result = decode_with(&rules, "1xOP01-001\n4xOP01-016\n2xOP01-017", day());
        assert_eq!(result, Err(Rejection::DeckFull));
    }

    #[test]
    fn test_metadata() {
        let deck = decode_std("1xOP01-001").unwrap();
        assert_eq!(deck.name, "");
        assert_eq!(deck.created_date, day());
        assert_eq!(deck.updated_date, None);
    }

    #[test]
    fn test_windows_line_endings() {
        let deck = decode_std("1xOP01-001\r\n4xOP01-016\r\n").unwrap();
        assert_eq!(deck.member_count("OP01-016"), 4);
    }
}
