//! Deck model, validation and mutation operations.
//!
//! The host owns a `Deck` value and calls the pure operations here to get
//! the next value. Validators run before every mutation commits.

pub mod model;
pub mod ops;
pub mod validate;

pub use model::{today, Deck, MemberEntry};
pub use ops::{add_member, clear_leader, decrement_member, rename, set_leader, touch};
pub use validate::{can_add_member, can_save, can_set_leader, check_invariants, validate_name};
