//! # tcg-deck
//!
//! Deck-building rules for a trading card game companion app.
//!
//! ## Design Principles
//!
//! 1. **Pure Operations**: The host owns every `Deck` value. Operations
//!    take a deck and return the next one; nothing is mutated in place.
//!
//! 2. **One Validator**: Every legality check lives in `deck::validate`.
//!    Screens call through it instead of re-implementing limits.
//!
//! 3. **Narrow Card Capability**: Deck rules read only `id` and
//!    `catalog_kind` through `CardView`.
//!
//! 4. **Rules as Context**: Limits come from `DeckRules`, never literals.
//!
//! ## Modules
//!
//! - `core`: Deck rules configuration and the error taxonomy
//! - `cards`: Card records, catalogue, filtering
//! - `collate`: Card id ordering shared by listings and deck codes
//! - `deck`: Deck model, validator and mutation operations
//! - `code`: Deck code encoding and decoding
//! - `stats`: Deck statistics
//! - `collection`: Saved decks, JSON import/export, persistence seam
//! - `topdeck`: Tournament deck browser model

pub mod core;
pub mod cards;
pub mod collate;
pub mod deck;
pub mod code;
pub mod stats;
pub mod collection;
pub mod topdeck;

// Re-export commonly used types
pub use crate::core::{
    CollectionError, DeckRules, ImportError, Rejection, StoreError,
};

pub use crate::cards::{Card, CardCatalogue, CardFilter, CardId, CardView};

pub use crate::collate::compare;

pub use crate::deck::{
    add_member, can_add_member, can_save, can_set_leader, clear_leader,
    decrement_member, rename, set_leader, touch, Deck, MemberEntry,
};

pub use crate::code::{decode, decode_with, encode};

pub use crate::stats::DeckStats;

pub use crate::collection::{
    DeckCollection, DeckRecord, DeckStore, ImportReport, MemoryStore,
    MergeReport, SaveOutcome,
};

pub use crate::topdeck::{search_top_decks, TopDeck};
