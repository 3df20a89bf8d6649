//! Card records - static card data from the catalogue dataset.
//!
//! A `Card` holds the descriptive fields of one printing of a card.
//! The deck logic only needs two of them (`id` and `catalog_kind`), which
//! it reads through the `CardView` capability so hosts can pass their own
//! richer card types.

use std::borrow::Borrow;

use serde::{Deserialize, Deserializer, Serialize};
use smallvec::SmallVec;

use crate::collate::{split_printing, strip_printing_suffix};

/// Card identifier, e.g. `OP01-016` or `OP01-016_p1`.
///
/// The id of an alternate printing carries a `_p<n>` suffix; `base()`
/// strips it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The id without its printing suffix.
    #[must_use]
    pub fn base(&self) -> &str {
        strip_printing_suffix(&self.0)
    }

    /// The printing number, if this is an alternate printing.
    #[must_use]
    pub fn printing(&self) -> Option<u32> {
        split_printing(&self.0).1
    }

    /// Owned id of the base printing.
    #[must_use]
    pub fn to_base(&self) -> CardId {
        CardId::new(self.base())
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for CardId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CardId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// The minimal card capability the deck rules depend on.
pub trait CardView {
    /// Card id.
    fn card_id(&self) -> &str;

    /// Catalog kind ("Leader", "Character", "Event", ...).
    fn catalog_kind(&self) -> &str;
}

impl<T: CardView + ?Sized> CardView for &T {
    fn card_id(&self) -> &str {
        (**self).card_id()
    }

    fn catalog_kind(&self) -> &str {
        (**self).catalog_kind()
    }
}

/// A catalogue card record.
///
/// Field names follow the dataset JSON (`card_name`, `card_catalog`, ...).
/// Numeric fields such as `power` arrive as strings or numbers and are
/// kept as text.
///
/// ## Example
///
/// ```
/// use tcg_deck::cards::Card;
///
/// let luffy = Card::new("ST01-001", "Monkey.D.Luffy", "Leader")
///     .with_color("Red")
///     .with_power(5000);
///
/// assert_eq!(luffy.power_value(), 5000);
/// assert_eq!(luffy.colors().as_slice(), &["Red"]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,

    #[serde(rename = "card_name", default, deserialize_with = "text_or_number")]
    pub name: String,

    #[serde(rename = "card_catalog", default, deserialize_with = "text_or_number")]
    pub catalog_kind: String,

    /// Colors, "/"-separated for multicolor cards.
    #[serde(default, deserialize_with = "text_or_number")]
    pub color: String,

    /// Life for leaders, cost for everything else.
    #[serde(default, deserialize_with = "text_or_number")]
    pub life: String,

    #[serde(default, deserialize_with = "text_or_number")]
    pub cost: String,

    #[serde(default, deserialize_with = "text_or_number")]
    pub power: String,

    #[serde(default, deserialize_with = "text_or_number")]
    pub counter: String,

    #[serde(default, deserialize_with = "text_or_number")]
    pub attribute: String,

    /// Types/affiliations, "/"-separated.
    #[serde(default, deserialize_with = "text_or_number")]
    pub feature: String,

    #[serde(default, deserialize_with = "text_or_number")]
    pub trigger: String,

    /// Effect text.
    #[serde(default, deserialize_with = "text_or_number")]
    pub text: String,

    #[serde(default, deserialize_with = "text_or_number")]
    pub series: String,

    /// Where the card was released.
    #[serde(default, deserialize_with = "text_or_number")]
    pub get_info: String,
}

impl Card {
    /// Create a card with the fields the deck rules need.
    #[must_use]
    pub fn new(id: impl Into<CardId>, name: impl Into<String>, catalog_kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            catalog_kind: catalog_kind.into(),
            color: String::new(),
            life: String::new(),
            cost: String::new(),
            power: String::new(),
            counter: String::new(),
            attribute: String::new(),
            feature: String::new(),
            trigger: String::new(),
            text: String::new(),
            series: String::new(),
            get_info: String::new(),
        }
    }

    /// Set the color (builder pattern).
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the life or cost (builder pattern).
    #[must_use]
    pub fn with_life(mut self, life: impl ToString) -> Self {
        self.life = life.to_string();
        self
    }

    /// Set the cost (builder pattern).
    #[must_use]
    pub fn with_cost(mut self, cost: impl ToString) -> Self {
        self.cost = cost.to_string();
        self
    }

    /// Set the power (builder pattern).
    #[must_use]
    pub fn with_power(mut self, power: impl ToString) -> Self {
        self.power = power.to_string();
        self
    }

    /// Set the counter (builder pattern).
    #[must_use]
    pub fn with_counter(mut self, counter: impl ToString) -> Self {
        self.counter = counter.to_string();
        self
    }

    /// Set the attribute (builder pattern).
    #[must_use]
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = attribute.into();
        self
    }

    /// Set the features (builder pattern).
    #[must_use]
    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.feature = feature.into();
        self
    }

    /// Set the trigger text (builder pattern).
    #[must_use]
    pub fn with_trigger(mut self, trigger: impl Into<String>) -> Self {
        self.trigger = trigger.into();
        self
    }

    /// Set the effect text (builder pattern).
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the series (builder pattern).
    #[must_use]
    pub fn with_series(mut self, series: impl Into<String>) -> Self {
        self.series = series.into();
        self
    }

    /// Set the get-info text (builder pattern).
    #[must_use]
    pub fn with_get_info(mut self, get_info: impl Into<String>) -> Self {
        self.get_info = get_info.into();
        self
    }

    /// Individual colors of a possibly multicolor card.
    #[must_use]
    pub fn colors(&self) -> SmallVec<[&str; 2]> {
        split_list(&self.color)
    }

    /// Individual features.
    #[must_use]
    pub fn features(&self) -> SmallVec<[&str; 2]> {
        split_list(&self.feature)
    }

    /// Power as an integer, 0 when not numeric.
    #[must_use]
    pub fn power_value(&self) -> i64 {
        leading_int(&self.power)
    }

    /// Counter as an integer, 0 when not numeric.
    #[must_use]
    pub fn counter_value(&self) -> i64 {
        leading_int(&self.counter)
    }

    /// Does this card have a trigger effect?
    #[must_use]
    pub fn has_trigger(&self) -> bool {
        let trigger = self.trigger.trim();
        !trigger.is_empty() && trigger != "-"
    }
}

impl CardView for Card {
    fn card_id(&self) -> &str {
        self.id.as_str()
    }

    fn catalog_kind(&self) -> &str {
        &self.catalog_kind
    }
}

fn split_list(value: &str) -> SmallVec<[&str; 2]> {
    value
        .split('/')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Parse the leading integer of a field like `"5000"` or `"+1000"`.
fn leading_int(value: &str) -> i64 {
    let value = value.trim();
    let end = value
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map_or(value.len(), |(i, _)| i);
    value[..end].parse().unwrap_or(0)
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
        Bool(bool),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(s)) => s,
        Some(Raw::Int(n)) => n.to_string(),
        Some(Raw::Float(n)) => n.to_string(),
        Some(Raw::Bool(b)) => b.to_string(),
        None => String::new(),
    })
}
