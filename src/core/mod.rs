//! Core types shared by every module: deck rules and the error taxonomy.
//!
//! Rules are configuration, not constants - hosts can run non-standard
//! formats by passing a different `DeckRules`.

pub mod config;
pub mod error;

pub use config::{DeckRules, LEADER_KIND, MAX_CARDS, MAX_COPIES};
pub use error::{CollectionError, ImportError, Rejection, Result, StoreError};
