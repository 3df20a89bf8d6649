//! Card id parsing: set prefix, card number and printing suffix.
//!
//! A well-formed id looks like `OP10-005`, `ST01-002_p1` or `P-031`:
//! a set code, a dash, a card number and an optional `_p<n>` printing
//! suffix marking alternate art.

use std::cmp::Reverse;
use std::sync::LazyLock;

use regex::Regex;

static PRINTING_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    // Literal pattern, always compiles.
    Regex::new(r"(?i)_p([0-9]+)$").expect("printing suffix pattern")
});

static ID_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:(OP|EB|PRB|ST)([0-9]{2})|(P))-([0-9]+)$").expect("card id pattern")
});

/// Set families in display priority order.
///
/// Numbered main sets come first, then the special families in this
/// declared order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SetFamily {
    /// Main booster sets (`OP01`, `OP02`, ...).
    Main,
    /// Extra boosters (`EB01`, ...).
    Extra,
    /// Premium boosters (`PRB01`, ...).
    PremiumBooster,
    /// Starter decks (`ST01`, ...).
    Starter,
    /// Promotional cards (`P`).
    Promo,
}

impl SetFamily {
    fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_uppercase().as_str() {
            "OP" => Some(Self::Main),
            "EB" => Some(Self::Extra),
            "PRB" => Some(Self::PremiumBooster),
            "ST" => Some(Self::Starter),
            "P" => Some(Self::Promo),
            _ => None,
        }
    }
}

/// Primary sort key: family, then newest set first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SetRank {
    pub family: SetFamily,
    pub set_number: Reverse<u8>,
}

/// Full collation key for a card id.
///
/// Variant order matters: every `Known` key sorts before `Unknown`,
/// and all `Unknown` keys are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SortKey {
    Known {
        set: SetRank,
        card_number: u32,
        /// `None` (base printing) sorts before any alternate printing.
        printing: Option<u32>,
    },
    Unknown,
}

impl SortKey {
    /// Compute the key for an id.
    #[must_use]
    pub fn of(id: &str) -> Self {
        let (base, printing) = split_printing(id);

        let Some(caps) = ID_SHAPE.captures(base) else {
            return Self::Unknown;
        };

        let (family, set_number) = match (caps.get(1), caps.get(2), caps.get(3)) {
            (Some(code), Some(number), _) => (
                SetFamily::from_code(code.as_str()),
                number.as_str().parse::<u8>().unwrap_or(0),
            ),
            (_, _, Some(promo)) => (SetFamily::from_code(promo.as_str()), 0),
            _ => (None, 0),
        };

        let (Some(family), Some(card_number)) = (family, caps.get(4)) else {
            return Self::Unknown;
        };

        Self::Known {
            set: SetRank {
                family,
                set_number: Reverse(set_number),
            },
            card_number: parse_saturating(card_number.as_str()),
            printing,
        }
    }

    /// Does this key come from a well-formed id?
    #[must_use]
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known { .. })
    }
}

/// Split an id into its base and optional printing number.
///
/// ```
/// use tcg_deck::collate::split_printing;
///
/// assert_eq!(split_printing("OP01-016_p2"), ("OP01-016", Some(2)));
/// assert_eq!(split_printing("OP01-016"), ("OP01-016", None));
/// ```
#[must_use]
pub fn split_printing(id: &str) -> (&str, Option<u32>) {
    match PRINTING_SUFFIX.captures(id) {
        Some(caps) => {
            let whole = caps.get(0).map_or(id.len(), |m| m.start());
            let number = caps.get(1).map_or(0, |m| parse_saturating(m.as_str()));
            (&id[..whole], Some(number))
        }
        None => (id, None),
    }
}

/// Remove a trailing `_p<digits>` printing suffix (case-insensitive).
#[must_use]
pub fn strip_printing_suffix(id: &str) -> &str {
    split_printing(id).0
}

fn parse_saturating(digits: &str) -> u32 {
    digits.parse::<u32>().unwrap_or(u32::MAX)
}
