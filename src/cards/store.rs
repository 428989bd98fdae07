//! Card record store.
//!
//! `CardStore` is the query/update contract the deck engines consume.
//! `MemoryCardStore` is the in-process implementation, backed by an `im`
//! ordered map so cloning a store (for legality previews) is O(1).

use im::OrdMap;

use super::query::{CardFilter, SortSpec};
use super::record::CardRecord;
use crate::core::{CardCode, DeckError};

/// Field assignments applied by `update` / `update_by_id`.
///
/// `in_deck` is the only mutable field of a record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CardPatch {
    pub in_deck: Option<u32>,
}

impl CardPatch {
    /// Patch setting the in-deck quantity.
    #[must_use]
    pub const fn in_deck(quantity: u32) -> Self {
        Self { in_deck: Some(quantity) }
    }

    /// Apply the patch to a record.
    pub fn apply(&self, card: &mut CardRecord) {
        if let Some(quantity) = self.in_deck {
            card.in_deck = quantity;
        }
    }
}

/// Query and update contract over card records.
///
/// Implementations must return `find` results in `sort` order; with an
/// empty sort any deterministic order is acceptable.
pub trait CardStore {
    /// Records matching `filter`, ordered by `sort`.
    fn find(&self, filter: &CardFilter, sort: &SortSpec) -> Vec<&CardRecord>;

    /// Look up a record by code.
    fn find_by_id(&self, code: &CardCode) -> Option<&CardRecord>;

    /// Apply `patch` to every record matching `filter`.
    ///
    /// Returns the number of records updated.
    fn update(&mut self, filter: &CardFilter, patch: &CardPatch) -> usize;

    /// Apply `patch` to one record.
    ///
    /// Returns false if no record has this code.
    fn update_by_id(&mut self, code: &CardCode, patch: &CardPatch) -> bool;

    /// Number of records.
    fn len(&self) -> usize;

    /// Check if the store is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: CardStore + ?Sized> CardStore for &mut S {
    fn find(&self, filter: &CardFilter, sort: &SortSpec) -> Vec<&CardRecord> {
        (**self).find(filter, sort)
    }

    fn find_by_id(&self, code: &CardCode) -> Option<&CardRecord> {
        (**self).find_by_id(code)
    }

    fn update(&mut self, filter: &CardFilter, patch: &CardPatch) -> usize {
        (**self).update(filter, patch)
    }

    fn update_by_id(&mut self, code: &CardCode, patch: &CardPatch) -> bool {
        (**self).update_by_id(code, patch)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// In-memory card store.
///
/// ## Example
///
/// ```
/// use agot_deck::cards::{CardFilter, CardPatch, CardRecord, CardStore, MemoryCardStore, SortSpec};
/// use agot_deck::core::{CardCode, CardType};
///
/// let mut store = MemoryCardStore::new();
/// store.insert(CardRecord::new("01027", "Fealty", "neutral", CardType::Agenda)).unwrap();
///
/// store.update_by_id(&CardCode::new("01027"), &CardPatch::in_deck(1));
///
/// let in_deck = store.find(&CardFilter::in_deck(), &SortSpec::new());
/// assert_eq!(in_deck.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryCardStore {
    cards: OrdMap<CardCode, CardRecord>,
}

impl MemoryCardStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from records.
    pub fn from_cards(cards: impl IntoIterator<Item = CardRecord>) -> Result<Self, DeckError> {
        let mut store = Self::new();
        for card in cards {
            store.insert(card)?;
        }
        Ok(store)
    }

    /// Build a store from a JSON array of card records.
    pub fn from_json(json: &str) -> Result<Self, DeckError> {
        let cards: Vec<CardRecord> = serde_json::from_str(json)?;
        let store = Self::from_cards(cards)?;
        tracing::debug!(cards = store.len(), "loaded card store");
        Ok(store)
    }

    /// Add a record.
    ///
    /// Fails if a record with the same code exists.
    pub fn insert(&mut self, card: CardRecord) -> Result<(), DeckError> {
        if self.cards.contains_key(&card.code) {
            return Err(DeckError::DuplicateCard(card.code));
        }
        self.cards.insert(card.code.clone(), card);
        Ok(())
    }

    /// Iterate over all records in code order.
    pub fn iter(&self) -> impl Iterator<Item = &CardRecord> {
        self.cards.values()
    }
}

impl CardStore for MemoryCardStore {
    fn find(&self, filter: &CardFilter, sort: &SortSpec) -> Vec<&CardRecord> {
        let mut found: Vec<_> = self.cards.values().filter(|c| filter.matches(c)).collect();
        if !sort.is_empty() {
            found.sort_by(|a, b| sort.compare(a, b));
        }
        found
    }

    fn find_by_id(&self, code: &CardCode) -> Option<&CardRecord> {
        self.cards.get(code)
    }

    fn update(&mut self, filter: &CardFilter, patch: &CardPatch) -> usize {
        let matching: Vec<CardCode> = self
            .cards
            .values()
            .filter(|c| filter.matches(c))
            .map(|c| c.code.clone())
            .collect();

        for code in &matching {
            if let Some(card) = self.cards.get_mut(code) {
                patch.apply(card);
            }
        }
        matching.len()
    }

    fn update_by_id(&mut self, code: &CardCode, patch: &CardPatch) -> bool {
        match self.cards.get_mut(code) {
            Some(card) => {
                patch.apply(card);
                true
            }
            None => false,
        }
    }

    fn len(&self) -> usize {
        self.cards.len()
    }
}
