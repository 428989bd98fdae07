//! Deck views derived from the card store.
//!
//! Every view is recomputed from the store on demand; nothing is cached.
//! `DeckView` borrows the store, deck state and rules together so that
//! derivations and legality checks are plain functions of the three.

use super::legality::BannerTable;
use super::state::DeckState;
use crate::cards::{CardFilter, CardRecord, CardStore, Pack, PackCatalog, SortSpec};
use crate::core::{CardType, DeckRules, FactionCode, PackCode};

/// Read-only view over a deck's cards.
///
/// ## Example
///
/// ```
/// use agot_deck::cards::{CardRecord, MemoryCardStore};
/// use agot_deck::core::CardType;
/// use agot_deck::deck::{Deck, DeckSnapshot};
///
/// let store = MemoryCardStore::from_cards([
///     CardRecord::new("01001", "A Clash of Kings", "neutral", CardType::Plot),
///     CardRecord::new("01144", "Eddard Stark", "stark", CardType::Character),
/// ]).unwrap();
///
/// let mut snapshot = DeckSnapshot::default();
/// snapshot.faction_code = "stark".into();
/// snapshot.slots.insert("01001".into(), 2);
/// snapshot.slots.insert("01144".into(), 3);
///
/// let deck = Deck::from_snapshot(store, snapshot);
/// let view = deck.view();
/// assert_eq!(view.plot_deck_size(), 2);
/// assert_eq!(view.plot_deck_variety(), 1);
/// assert_eq!(view.draw_deck_size(), 3);
/// ```
pub struct DeckView<'a, S: CardStore + ?Sized> {
    store: &'a S,
    state: &'a DeckState,
    rules: &'a DeckRules,
}

impl<S: CardStore + ?Sized> Clone for DeckView<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: CardStore + ?Sized> Copy for DeckView<'_, S> {}

impl<'a, S: CardStore + ?Sized> DeckView<'a, S> {
    /// Create a view.
    #[must_use]
    pub fn new(store: &'a S, state: &'a DeckState, rules: &'a DeckRules) -> Self {
        Self { store, state, rules }
    }

    /// The deck state behind this view.
    #[must_use]
    pub fn state(&self) -> &'a DeckState {
        self.state
    }

    /// The rules this view is judged against.
    #[must_use]
    pub fn rules(&self) -> &'a DeckRules {
        self.rules
    }

    /// The deck's own faction.
    #[must_use]
    pub fn faction_code(&self) -> &'a FactionCode {
        self.state.faction_code()
    }

    // === Card queries ===

    /// In-deck cards matching `filter`, ordered by `sort` then by code.
    #[must_use]
    pub fn cards_in_deck(&self, filter: CardFilter, sort: SortSpec) -> Vec<&'a CardRecord> {
        let filter = CardFilter::in_deck().and(filter);
        self.store.find(&filter, &sort.with_code_tiebreak())
    }

    /// Every in-deck card, ordered by code.
    #[must_use]
    pub fn cards(&self) -> Vec<&'a CardRecord> {
        self.cards_in_deck(CardFilter::everything(), SortSpec::new())
    }

    /// Number of distinct in-deck cards matching `filter`.
    #[must_use]
    pub fn count_in_deck(&self, filter: CardFilter) -> usize {
        self.cards_in_deck(filter, SortSpec::new()).len()
    }

    // === Draw deck ===

    /// In-deck cards that are neither agendas nor plots.
    #[must_use]
    pub fn draw_deck(&self) -> Vec<&'a CardRecord> {
        self.draw_deck_sorted(SortSpec::new())
    }

    /// Draw deck in a custom order.
    #[must_use]
    pub fn draw_deck_sorted(&self, sort: SortSpec) -> Vec<&'a CardRecord> {
        self.cards_in_deck(CardFilter::TypeNotIn(CardType::OUTSIDE_DRAW_DECK.to_vec()), sort)
    }

    /// Copies in the draw deck.
    #[must_use]
    pub fn draw_deck_size(&self) -> u32 {
        total_copies(&self.draw_deck())
    }

    // === Plot deck ===

    /// In-deck plot cards.
    #[must_use]
    pub fn plot_deck(&self) -> Vec<&'a CardRecord> {
        self.plot_deck_sorted(SortSpec::new())
    }

    /// Plot deck in a custom order.
    #[must_use]
    pub fn plot_deck_sorted(&self, sort: SortSpec) -> Vec<&'a CardRecord> {
        self.cards_in_deck(CardFilter::Type(CardType::Plot), sort)
    }

    /// Copies in the plot deck.
    #[must_use]
    pub fn plot_deck_size(&self) -> u32 {
        total_copies(&self.plot_deck())
    }

    /// Distinct plot cards, ignoring copies.
    #[must_use]
    pub fn plot_deck_variety(&self) -> usize {
        self.plot_deck().len()
    }

    // === Agenda ===

    /// Every in-deck agenda. Normally zero or one.
    #[must_use]
    pub fn agendas(&self) -> Vec<&'a CardRecord> {
        self.cards_in_deck(CardFilter::Type(CardType::Agenda), SortSpec::new())
    }

    /// The first in-deck agenda, by code.
    #[must_use]
    pub fn agenda(&self) -> Option<&'a CardRecord> {
        self.agendas().into_iter().next()
    }

    /// Faction granted by the current agenda, if it is a banner.
    #[must_use]
    pub fn minor_faction_code(&self) -> Option<FactionCode> {
        self.agenda()
            .and_then(|agenda| BannerTable::CORE_SET.minor_faction(&agenda.code))
    }

    // === Packs ===

    /// Distinct pack codes among in-deck cards, in code order.
    #[must_use]
    pub fn included_pack_codes(&self) -> Vec<PackCode> {
        let mut codes: Vec<PackCode> = self.cards().into_iter().map(|c| c.pack.clone()).collect();
        codes.sort();
        codes.dedup();
        codes
    }

    /// Packs the deck draws from, in release order.
    ///
    /// Packs missing from the catalog are skipped.
    #[must_use]
    pub fn included_packs<'c, P: PackCatalog + ?Sized>(&self, catalog: &'c P) -> Vec<&'c Pack> {
        catalog.find_by_codes(&self.included_pack_codes())
    }
}

/// Sum of copies, saturating at `u32::MAX`.
fn total_copies(cards: &[&CardRecord]) -> u32 {
    cards.iter().fold(0u32, |total, c| total.saturating_add(c.in_deck))
}
