//! Error taxonomy.
//!
//! Rule violations are returned as `Rejection` values, never panics.
//! Hosts map each kind to a user-facing message. `ImportError` and
//! `StoreError` additionally carry JSON failures, which are not rule
//! violations but corrupt input.

use thiserror::Error;

/// Why a deck operation was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum Rejection {
    #[error("deck already has a leader")]
    LeaderAlreadySet,

    #[error("card is not a leader")]
    NotALeaderCard,

    #[error("leader cards cannot be added as members")]
    LeaderAsMember,

    #[error("deck is full")]
    DeckFull,

    #[error("copy limit reached")]
    CopyLimitReached,

    #[error("deck name is empty")]
    EmptyName,

    #[error("deck has no leader")]
    MissingLeader,

    #[error("malformed import entry")]
    MalformedImportEntry,
}

/// Result alias for deck operations.
pub type Result<T, E = Rejection> = std::result::Result<T, E>;

/// Errors from the named deck collection.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum CollectionError {
    #[error(transparent)]
    Rejected(#[from] Rejection),

    #[error("new name is the same as the old name")]
    SameName,

    #[error("a deck named {0:?} already exists")]
    DuplicateName(String),

    #[error("no deck named {0:?}")]
    DeckNotFound(String),
}

/// Errors from JSON deck import.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("expected a JSON array of decks")]
    NotAnArray,

    #[error(transparent)]
    Rejected(#[from] Rejection),
}

/// Errors from a `DeckStore` backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Import(#[from] ImportError),
}
