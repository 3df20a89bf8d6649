//! Card system: records, the deck-facing card capability, and the catalogue.
//!
//! ## Key Types
//!
//! - `CardId`: Card identifier, possibly carrying a printing suffix
//! - `CardView`: The two fields deck rules read (`id`, `catalog_kind`)
//! - `Card`: Full dataset record
//! - `CardCatalogue`: Lookup, filtering and sorted listing
//! - `CardFilter`: Search box and filter panel criteria

pub mod definition;
pub mod filter;
pub mod registry;

pub use definition::{Card, CardId, CardView};
pub use filter::CardFilter;
pub use registry::CardCatalogue;
