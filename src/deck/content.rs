//! Deck output: saved content, type sections, and the deck summary.

use std::collections::BTreeMap;

use serde::Serialize;

use super::derivation::DeckView;
use super::legality::Problem;
use super::session::Deck;
use crate::cards::{CardFilter, CardRecord, CardStore, PackCatalog, SortField, SortKey, SortSpec};
use crate::core::{CardCode, CardType, DeckError};

/// A card listed in a section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SectionCard<'a> {
    pub card: &'a CardRecord,

    /// False if the deck may not include this card.
    pub includable: bool,
}

/// In-deck cards of one type, sorted by name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DeckSection<'a> {
    pub card_type: CardType,
    pub cards: Vec<SectionCard<'a>>,
}

impl DeckSection<'_> {
    /// Section heading.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.card_type.display_name()
    }

    /// Distinct cards in the section.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Deck overview: sizes, packs and legality.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DeckSummary {
    pub faction_name: String,
    pub draw_deck_size: u32,
    pub plot_deck_size: u32,
    pub included_packs: Vec<String>,
    pub problem: Option<Problem>,
}

impl std::fmt::Display for DeckSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.faction_name)?;
        writeln!(f, "Draw deck: {} cards.", self.draw_deck_size)?;
        writeln!(f, "Plot deck: {} cards.", self.plot_deck_size)?;
        write!(f, "Included packs: {}.", self.included_packs.join(", "))?;
        if let Some(problem) = self.problem {
            write!(f, "\nProblem: {}.", problem)?;
        }
        Ok(())
    }
}

impl<'a, S: CardStore + ?Sized> DeckView<'a, S> {
    /// Card code -> copies, for every in-deck card.
    #[must_use]
    pub fn content(&self) -> BTreeMap<CardCode, u32> {
        self.cards()
            .into_iter()
            .map(|card| (card.code.clone(), card.in_deck))
            .collect()
    }

    /// In-deck cards grouped by type, in presentation order.
    ///
    /// Types with no cards are omitted.
    #[must_use]
    pub fn sections(&self) -> Vec<DeckSection<'a>> {
        CardType::PRESENTATION_ORDER
            .into_iter()
            .filter_map(|card_type| {
                let cards: Vec<_> = self
                    .cards_in_deck(
                        CardFilter::Type(card_type),
                        SortSpec::by(SortKey::asc(SortField::Name)),
                    )
                    .into_iter()
                    .map(|card| SectionCard {
                        card,
                        includable: self.can_include_card(card),
                    })
                    .collect();
                (!cards.is_empty()).then_some(DeckSection { card_type, cards })
            })
            .collect()
    }

    /// Summarize the deck.
    #[must_use]
    pub fn summary<P: PackCatalog + ?Sized>(&self, catalog: &P) -> DeckSummary {
        DeckSummary {
            faction_name: self.state().faction_name().to_string(),
            draw_deck_size: self.draw_deck_size(),
            plot_deck_size: self.plot_deck_size(),
            included_packs: self
                .included_packs(catalog)
                .into_iter()
                .map(|pack| pack.name.clone())
                .collect(),
            problem: self.problem(),
        }
    }
}

impl<S: CardStore> Deck<S> {
    /// Card code -> copies, for saving the deck.
    #[must_use]
    pub fn content(&self) -> BTreeMap<CardCode, u32> {
        self.view().content()
    }

    /// `content` as a JSON object.
    pub fn content_json(&self) -> Result<String, DeckError> {
        Ok(serde_json::to_string(&self.content())?)
    }

    /// Export the deck in a third-party format.
    ///
    /// No formats are supported yet; every call fails with
    /// `DeckError::UnsupportedExport`.
    pub fn export(&self, format: &str) -> Result<String, DeckError> {
        Err(DeckError::UnsupportedExport(format.to_string()))
    }

    #[must_use]
    pub fn sections(&self) -> Vec<DeckSection<'_>> {
        self.view().sections()
    }

    #[must_use]
    pub fn summary<P: PackCatalog + ?Sized>(&self, catalog: &P) -> DeckSummary {
        self.view().summary(catalog)
    }
}
