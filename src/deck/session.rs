//! Deck editing session.
//!
//! `Deck` ties one deck's state to an injected card store. The store can
//! be owned (`Deck<MemoryCardStore>`) or borrowed from a store shared with
//! other sessions (`Deck<&mut MemoryCardStore>`).

use super::derivation::DeckView;
use super::legality::Problem;
use super::mutation::ChangeListener;
use super::snapshot::DeckSnapshot;
use super::state::DeckState;
use crate::cards::{CardFilter, CardPatch, CardRecord, CardStore, Pack, PackCatalog};
use crate::core::{DeckRules, FactionCode};

/// A deck being edited.
///
/// ## Example
///
/// ```
/// use agot_deck::cards::{CardRecord, MemoryCardStore};
/// use agot_deck::core::CardType;
/// use agot_deck::deck::{Deck, DeckSnapshot, Problem};
///
/// let store = MemoryCardStore::from_cards([
///     CardRecord::new("01027", "Fealty", "neutral", CardType::Agenda),
///     CardRecord::new("01203", "Banner of the Wolf", "neutral", CardType::Agenda),
/// ]).unwrap();
///
/// let mut deck = Deck::new(store);
/// deck.set_card_quantity(&"01027".into(), 1);
///
/// // Selecting another agenda replaces the first one.
/// let replaced = deck.set_card_quantity(&"01203".into(), 1);
/// assert!(replaced);
/// assert_eq!(deck.agenda().unwrap().name, "Banner of the Wolf");
/// assert_eq!(deck.problem(), Some(Problem::TooFewPlots));
/// ```
pub struct Deck<S> {
    pub(super) store: S,
    pub(super) state: DeckState,
    pub(super) rules: DeckRules,
    pub(super) listener: Option<Box<dyn ChangeListener>>,
}

impl<S: std::fmt::Debug> std::fmt::Debug for Deck<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Deck")
            .field("store", &self.store)
            .field("state", &self.state)
            .field("rules", &self.rules)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

impl<S: CardStore> Deck<S> {
    /// Create an empty deck over `store`.
    ///
    /// The store is not touched until `initialize`.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: DeckState::default(),
            rules: DeckRules::default(),
            listener: None,
        }
    }

    /// Create a deck and initialize it from `snapshot`.
    #[must_use]
    pub fn from_snapshot(store: S, snapshot: DeckSnapshot) -> Self {
        let mut deck = Self::new(store);
        deck.initialize(snapshot);
        deck
    }

    /// Judge the deck against custom rules (builder pattern).
    #[must_use]
    pub fn with_rules(mut self, rules: DeckRules) -> Self {
        self.rules = rules;
        self
    }

    /// Register a change-history hook (builder pattern).
    #[must_use]
    pub fn with_listener(mut self, listener: impl ChangeListener + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Replace the deck state and re-tag the store from `snapshot`.
    ///
    /// Every record's `in_deck` is reset to zero, then set from the
    /// snapshot's slots. Slots naming unknown cards are skipped.
    /// Calling this twice with the same snapshot leaves the same store.
    pub fn initialize(&mut self, snapshot: DeckSnapshot) {
        let (state, slots) = DeckState::from_snapshot(snapshot);
        self.state = state;

        self.store.update(&CardFilter::everything(), &CardPatch::in_deck(0));
        let mut unknown = 0usize;
        for (code, quantity) in &slots {
            if !self.store.update_by_id(code, &CardPatch::in_deck(*quantity)) {
                tracing::warn!(card = %code, "deck slot names an unknown card, skipping");
                unknown += 1;
            }
        }

        tracing::debug!(
            deck = ?self.state.id(),
            faction = %self.state.faction_code(),
            slots = slots.len(),
            unknown,
            "initialized deck"
        );
    }

    // === Accessors ===

    /// The deck state.
    #[must_use]
    pub fn state(&self) -> &DeckState {
        &self.state
    }

    /// The card store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give the store back, ending the session.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    /// The rules the deck is judged against.
    #[must_use]
    pub fn rules(&self) -> &DeckRules {
        &self.rules
    }

    #[must_use]
    pub fn id(&self) -> Option<u64> {
        self.state.id()
    }

    #[must_use]
    pub fn faction_code(&self) -> &FactionCode {
        self.state.faction_code()
    }

    #[must_use]
    pub fn description_md(&self) -> &str {
        self.state.description_md()
    }

    #[must_use]
    pub fn history(&self) -> &serde_json::Value {
        self.state.history()
    }

    // === Views ===

    /// Read-only view for derivations and legality checks.
    #[must_use]
    pub fn view(&self) -> DeckView<'_, S> {
        DeckView::new(&self.store, &self.state, &self.rules)
    }

    #[must_use]
    pub fn cards(&self) -> Vec<&CardRecord> {
        self.view().cards()
    }

    #[must_use]
    pub fn draw_deck(&self) -> Vec<&CardRecord> {
        self.view().draw_deck()
    }

    #[must_use]
    pub fn draw_deck_size(&self) -> u32 {
        self.view().draw_deck_size()
    }

    #[must_use]
    pub fn plot_deck(&self) -> Vec<&CardRecord> {
        self.view().plot_deck()
    }

    #[must_use]
    pub fn plot_deck_size(&self) -> u32 {
        self.view().plot_deck_size()
    }

    #[must_use]
    pub fn plot_deck_variety(&self) -> usize {
        self.view().plot_deck_variety()
    }

    #[must_use]
    pub fn agendas(&self) -> Vec<&CardRecord> {
        self.view().agendas()
    }

    #[must_use]
    pub fn agenda(&self) -> Option<&CardRecord> {
        self.view().agenda()
    }

    #[must_use]
    pub fn minor_faction_code(&self) -> Option<FactionCode> {
        self.view().minor_faction_code()
    }

    #[must_use]
    pub fn included_packs<'c, P: PackCatalog + ?Sized>(&self, catalog: &'c P) -> Vec<&'c Pack> {
        self.view().included_packs(catalog)
    }

    #[must_use]
    pub fn invalid_cards(&self) -> Vec<&CardRecord> {
        self.view().invalid_cards()
    }

    #[must_use]
    pub fn can_include_card(&self, card: &CardRecord) -> bool {
        self.view().can_include_card(card)
    }

    /// The deck's legality problem, or `None` if legal.
    #[must_use]
    pub fn problem(&self) -> Option<Problem> {
        self.view().problem()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::MemoryCardStore;
    use crate::core::{CardCode, CardType};

    fn store() -> MemoryCardStore {
        MemoryCardStore::from_cards([
            CardRecord::new("01001", "A Clash of Kings", "neutral", CardType::Plot),
            CardRecord::new("01144", "Eddard Stark", "stark", CardType::Character),
            CardRecord::new("01153", "Ice", "stark", CardType::Attachment),
        ])
        .unwrap()
    }

    fn snapshot(slots: &[(&str, u32)]) -> DeckSnapshot {
        let mut snapshot = DeckSnapshot {
            id: Some(1),
            faction_code: FactionCode::new("stark"),
            description_md: Some("Winter is coming.".to_string()),
            ..DeckSnapshot::default()
        };
        for (code, quantity) in slots {
            snapshot.slots.insert(CardCode::new(*code), *quantity);
        }
        snapshot
    }

    fn in_deck(deck: &Deck<MemoryCardStore>, code: &str) -> u32 {
        deck.store().find_by_id(&CardCode::new(code)).unwrap().in_deck
    }

    #[test]
    fn test_initialize_sets_quantities() {
        let deck = Deck::from_snapshot(store(), snapshot(&[("01001", 2), ("01144", 3)]));

        assert_eq!(in_deck(&deck, "01001"), 2);
        assert_eq!(in_deck(&deck, "01144"), 3);
        assert_eq!(in_deck(&deck, "01153"), 0);
        assert_eq!(deck.id(), Some(1));
        assert_eq!(deck.faction_code(), &FactionCode::new("stark"));
        assert_eq!(deck.description_md(), "Winter is coming.");
        assert!(deck.history().is_null());
    }

    #[test]
    fn test_initialize_resets_previous_deck() {
        let mut deck = Deck::from_snapshot(store(), snapshot(&[("01153", 1)]));
        deck.initialize(snapshot(&[("01144", 1)]));

        assert_eq!(in_deck(&deck, "01153"), 0);
        assert_eq!(in_deck(&deck, "01144"), 1);
    }

    #[test]
    fn test_initialize_idempotent() {
        let mut deck = Deck::from_snapshot(store(), snapshot(&[("01001", 2), ("01144", 3)]));
        let first: Vec<_> = deck.store().iter().cloned().collect();

        deck.initialize(snapshot(&[("01001", 2), ("01144", 3)]));
        let second: Vec<_> = deck.store().iter().cloned().collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_initialize_skips_unknown_cards() {
        let deck = Deck::from_snapshot(store(), snapshot(&[("99999", 3), ("01144", 1)]));

        assert_eq!(deck.cards().len(), 1);
        assert_eq!(in_deck(&deck, "01144"), 1);
    }

    #[test]
    fn test_shared_store() {
        let mut shared = store();
        {
            let deck = Deck::from_snapshot(&mut shared, snapshot(&[("01144", 2)]));
            assert_eq!(deck.draw_deck_size(), 2);
        }
        assert_eq!(shared.find_by_id(&CardCode::new("01144")).unwrap().in_deck, 2);
    }

    #[test]
    fn test_custom_rules() {
        let rules = DeckRules::default()
            .with_plot_deck_size(1)
            .with_min_plot_variety(1)
            .with_min_draw_deck_size(3);
        let deck = Deck::from_snapshot(store(), snapshot(&[("01001", 1), ("01144", 3)]))
            .with_rules(rules);

        assert_eq!(deck.problem(), None);
        assert_eq!(deck.rules().min_draw_deck_size, 3);
    }
}
