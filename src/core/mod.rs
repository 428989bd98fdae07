//! Core types: identifier codes, rules configuration, errors.
//!
//! Everything here is independent of any particular card pool or deck.

pub mod codes;
pub mod config;
pub mod error;

pub use codes::{CardCode, CardType, FactionCode, PackCode};
pub use config::DeckRules;
pub use error::DeckError;
