//! Catalogue filtering.
//!
//! `CardFilter` combines the builder screen's search box with its
//! filter panels. Empty criteria match everything.

use super::definition::Card;

/// Filter criteria over catalogue cards.
///
/// ## Example
///
/// ```
/// use tcg_deck::cards::{Card, CardFilter};
///
/// let filter = CardFilter::new().with_search("nami").with_color("Red");
/// let nami = Card::new("OP01-016", "Nami", "Character").with_color("Red/Green");
///
/// assert!(filter.matches(&nami));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardFilter {
    /// Case-insensitive substring over most text fields.
    pub search: String,

    /// Match if the card has any of these colors.
    pub colors: Vec<String>,

    /// Match if the card's catalog kind is one of these.
    pub catalog_kinds: Vec<String>,

    /// Match if the card's life/cost field is one of these.
    pub costs: Vec<String>,

    /// Exact series.
    pub series: Option<String>,

    /// Exact release info.
    pub get_info: Option<String>,

    /// One of the card's "/"-separated features.
    pub feature: Option<String>,

    /// Every keyword must appear in the effect text.
    pub keywords: Vec<String>,

    /// Match if the attribute contains any of these.
    pub attributes: Vec<String>,
}

impl CardFilter {
    /// Create a filter that matches every card.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text (builder pattern).
    #[must_use]
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    /// Add a color (builder pattern).
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.colors.push(color.into());
        self
    }

    /// Add a catalog kind (builder pattern).
    #[must_use]
    pub fn with_catalog_kind(mut self, kind: impl Into<String>) -> Self {
        self.catalog_kinds.push(kind.into());
        self
    }

    /// Add a cost value, matched against life (builder pattern).
    #[must_use]
    pub fn with_cost(mut self, cost: impl ToString) -> Self {
        self.costs.push(cost.to_string());
        self
    }

    /// Set the series (builder pattern).
    #[must_use]
    pub fn with_series(mut self, series: impl Into<String>) -> Self {
        self.series = Some(series.into());
        self
    }

    /// Set the get-info text (builder pattern).
    #[must_use]
    pub fn with_get_info(mut self, get_info: impl Into<String>) -> Self {
        self.get_info = Some(get_info.into());
        self
    }

    /// Set the feature (builder pattern).
    #[must_use]
    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.feature = Some(feature.into());
        self
    }

    /// Add a keyword every match must contain (builder pattern).
    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.push(keyword.into());
        self
    }

    /// Add an attribute (builder pattern).
    #[must_use]
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attributes.push(attribute.into());
        self
    }

    /// Does the card pass every criterion?
    #[must_use]
    pub fn matches(&self, card: &Card) -> bool {
        self.matches_search(card)
            && self.matches_colors(card)
            && self.matches_catalog(card)
            && self.matches_cost(card)
            && self.matches_series(card)
            && self.matches_get_info(card)
            && self.matches_feature(card)
            && self.matches_keywords(card)
            && self.matches_attributes(card)
    }

    fn matches_search(&self, card: &Card) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        let fields: [&str; 12] = [
            card.id.as_str(),
            &card.name,
            &card.life,
            &card.counter,
            &card.trigger,
            &card.power,
            &card.text,
            &card.attribute,
            &card.feature,
            &card.series,
            &card.get_info,
            &card.cost,
        ];
        fields
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    fn matches_colors(&self, card: &Card) -> bool {
        if self.colors.is_empty() {
            return true;
        }
        let colors = card.colors();
        self.colors.iter().any(|c| colors.contains(&c.as_str()))
    }

    fn matches_catalog(&self, card: &Card) -> bool {
        self.catalog_kinds.is_empty() || self.catalog_kinds.contains(&card.catalog_kind)
    }

    fn matches_cost(&self, card: &Card) -> bool {
        self.costs.is_empty() || self.costs.iter().any(|c| c == card.life.trim())
    }

    fn matches_series(&self, card: &Card) -> bool {
        self.series.as_ref().map_or(true, |s| *s == card.series)
    }

    fn matches_get_info(&self, card: &Card) -> bool {
        self.get_info.as_ref().map_or(true, |g| *g == card.get_info)
    }

    fn matches_feature(&self, card: &Card) -> bool {
        self.feature
            .as_ref()
            .map_or(true, |f| card.features().contains(&f.as_str()))
    }

    fn matches_keywords(&self, card: &Card) -> bool {
        if self.keywords.is_empty() {
            return true;
        }
        let text = normalize(&card.text);
        let counter = normalize(&card.counter);

        self.keywords.iter().all(|keyword| {
            let keyword = normalize(keyword);
            match keyword.as_str() {
                "counter 1k" => counter.contains("1000"),
                "counter 2k" => counter.contains("2000"),
                _ => text.contains(&keyword) || text.contains(&format!("[{keyword}]")),
            }
        })
    }

    fn matches_attributes(&self, card: &Card) -> bool {
        if self.attributes.is_empty() {
            return true;
        }
        let attribute = card.attribute.to_lowercase();
        self.attributes
            .iter()
            .any(|a| attribute.contains(&a.to_lowercase()))
    }
}

/// Lowercase and fold dash variants (en dash, minus sign, em dash) to `-`.
fn normalize(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{2013}' | '\u{2212}' | '\u{2014}' => '-',
            other => other,
        })
        .collect::<String>()
        .to_lowercase()
}
