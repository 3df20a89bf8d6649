//! Deck codes: the plain-text format decks are shared in.
//!
//! ```text
//! 1xOP01-001
//! 4xOP01-016
//! 2xST01-002
//! ```
//!
//! One `<count>x<id>` line per distinct card, leader first, members in
//! collation order, printing suffixes stripped, no trailing newline.
//! A code is never authoritative: it can always be regenerated from
//! the deck it came from.

pub mod decode;
pub mod encode;

pub use decode::{decode, decode_with};
pub use encode::encode;
