//! # agot-deck
//!
//! Deck composition and legality engine for the A Game of Thrones LCG
//! deckbuilder.
//!
//! ## Design Principles
//!
//! 1. **Single Source of Truth**: The card store's `in_deck` quantities are
//!    the deck. Snapshots seed them once; every view is derived from them.
//!
//! 2. **Injected Store**: Decks never reach for a global store. Sessions
//!    own a store or borrow a shared one.
//!
//! 3. **Problems Are Not Errors**: An illegal deck is a normal state.
//!    `Deck::problem` classifies it; nothing fails.
//!
//! ## Modules
//!
//! - `core`: Card/faction/pack codes, card types, rules configuration, errors
//! - `cards`: Card records, store queries, the record store, pack catalog
//! - `deck`: Deck state, derivations, legality, mutation, output

pub mod core;
pub mod cards;
pub mod deck;

// Re-export commonly used types
pub use crate::core::{CardCode, CardType, DeckError, DeckRules, FactionCode, PackCode};

pub use crate::cards::{
    CardFilter, CardPatch, CardRecord, CardStore, MemoryCardStore,
    MemoryPackCatalog, Pack, PackCatalog, SortField, SortKey, SortOrder, SortSpec,
};

pub use crate::deck::{
    AgendaRule, BannerTable, ChangeListener, Deck, DeckSection, DeckSnapshot,
    DeckState, DeckSummary, DeckView, Problem, SectionCard,
};
