//! Card quantity changes.
//!
//! All writes to a deck go through `Deck::set_card_quantity`, which keeps
//! the cross-card invariant that at most one agenda is selected: setting
//! any agenda first clears every agenda, then applies the new quantity.

use super::legality::Problem;
use super::session::Deck;
use crate::cards::{CardFilter, CardPatch, CardStore};
use crate::core::{CardCode, CardType, DeckError};

/// Hook notified after every quantity change.
///
/// Any `FnMut()` closure is a listener.
pub trait ChangeListener {
    /// Called once per applied quantity change.
    fn notify_change(&mut self);
}

impl<F: FnMut()> ChangeListener for F {
    fn notify_change(&mut self) {
        self()
    }
}

/// Apply a quantity change to `store`.
///
/// Returns true if the agenda reset ran, i.e. other cards may have changed.
fn apply_quantity<S: CardStore + ?Sized>(
    store: &mut S,
    code: &CardCode,
    card_type: CardType,
    quantity: u32,
) -> bool {
    let mut updated_other_cards = false;

    if card_type == CardType::Agenda {
        let reset = store.update(&CardFilter::Type(CardType::Agenda), &CardPatch::in_deck(0));
        tracing::debug!(agendas = reset, "cleared agendas before selecting a new one");
        updated_other_cards = true;
    }

    store.update_by_id(code, &CardPatch::in_deck(quantity));
    updated_other_cards
}

impl<S: CardStore> Deck<S> {
    /// Set the number of copies of a card.
    ///
    /// Returns true if other cards' quantities were changed as a side
    /// effect (the card is an agenda). Returns false, without touching
    /// anything, if no card has this code.
    pub fn set_card_quantity(&mut self, code: &CardCode, quantity: u32) -> bool {
        self.try_set_card_quantity(code, quantity).unwrap_or(false)
    }

    /// Like `set_card_quantity`, but reports an unknown card as an error.
    pub fn try_set_card_quantity(
        &mut self,
        code: &CardCode,
        quantity: u32,
    ) -> Result<bool, DeckError> {
        let Some(card_type) = self.store.find_by_id(code).map(|c| c.card_type) else {
            tracing::warn!(card = %code, "cannot set quantity of unknown card");
            return Err(DeckError::UnknownCard(code.clone()));
        };

        let updated_other_cards = apply_quantity(&mut self.store, code, card_type, quantity);
        tracing::debug!(card = %code, quantity, updated_other_cards, "set card quantity");

        if let Some(listener) = self.listener.as_mut() {
            listener.notify_change();
        }
        Ok(updated_other_cards)
    }

    /// The problem the deck would have after setting `code` to `quantity`.
    ///
    /// Runs against a clone of the store; the deck is not changed and the
    /// change listener is not notified.
    pub fn preview_quantity(
        &self,
        code: &CardCode,
        quantity: u32,
    ) -> Result<Option<Problem>, DeckError>
    where
        S: Clone,
    {
        let card_type = self
            .store
            .find_by_id(code)
            .map(|c| c.card_type)
            .ok_or_else(|| DeckError::UnknownCard(code.clone()))?;

        let mut store = self.store.clone();
        apply_quantity(&mut store, code, card_type, quantity);
        Ok(super::DeckView::new(&store, &self.state, &self.rules).problem())
    }
}
