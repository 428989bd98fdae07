//! Error types.
//!
//! Legality problems are not errors: a deck with a problem is a normal,
//! representable state (see `deck::Problem`). `DeckError` only covers the
//! fallible edges: parsing input, building stores, and strict mutation.

use thiserror::Error;

use super::codes::{CardCode, PackCode};

/// Errors raised at the crate's fallible edges.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("Card not found: {0}")]
    UnknownCard(CardCode),

    #[error("Card {0} is already in the store")]
    DuplicateCard(CardCode),

    #[error("Pack {0} is already in the catalog")]
    DuplicatePack(PackCode),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export format '{0}' is not supported")]
    UnsupportedExport(String),
}
