//! Deckbuilding rules configuration.
//!
//! `DeckRules` holds every numeric threshold the legality checks use.
//! The defaults are the tournament construction rules; hosts can override
//! individual limits with the builder methods or load them from JSON.

use serde::{Deserialize, Serialize};

/// Numeric deckbuilding limits.
///
/// ## Example
///
/// ```
/// use agot_deck::core::DeckRules;
///
/// let rules = DeckRules::default();
/// assert_eq!(rules.plot_deck_size, 7);
/// assert_eq!(rules.min_draw_deck_size, 60);
///
/// let casual = DeckRules::default().with_min_draw_deck_size(40);
/// assert_eq!(casual.min_draw_deck_size, 40);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckRules {
    /// Exact number of plot cards (copies) a deck must hold.
    pub plot_deck_size: u32,

    /// Minimum number of distinct plot cards.
    pub min_plot_variety: usize,

    /// Maximum number of agendas.
    pub max_agendas: usize,

    /// Minimum number of draw deck cards (copies).
    pub min_draw_deck_size: u32,

    /// Fealty: maximum number of distinct neutral cards.
    pub fealty_max_neutral_cards: usize,

    /// Banners: minimum number of distinct cards from the banner's faction.
    pub banner_min_minor_faction_cards: usize,
}

impl Default for DeckRules {
    fn default() -> Self {
        Self {
            plot_deck_size: 7,
            min_plot_variety: 6,
            max_agendas: 1,
            min_draw_deck_size: 60,
            fealty_max_neutral_cards: 15,
            banner_min_minor_faction_cards: 12,
        }
    }
}

impl DeckRules {
    /// Parse rules from JSON. Missing fields keep their default.
    pub fn from_json(json: &str) -> Result<Self, crate::core::DeckError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the required plot deck size.
    #[must_use]
    pub fn with_plot_deck_size(mut self, size: u32) -> Self {
        self.plot_deck_size = size;
        self
    }

    /// Set the minimum number of distinct plots.
    #[must_use]
    pub fn with_min_plot_variety(mut self, variety: usize) -> Self {
        self.min_plot_variety = variety;
        self
    }

    /// Set the maximum number of agendas.
    #[must_use]
    pub fn with_max_agendas(mut self, max: usize) -> Self {
        self.max_agendas = max;
        self
    }

    /// Set the minimum draw deck size.
    #[must_use]
    pub fn with_min_draw_deck_size(mut self, size: u32) -> Self {
        self.min_draw_deck_size = size;
        self
    }

    /// Set the Fealty neutral card limit.
    #[must_use]
    pub fn with_fealty_max_neutral_cards(mut self, max: usize) -> Self {
        self.fealty_max_neutral_cards = max;
        self
    }

    /// Set the banner minor-faction minimum.
    #[must_use]
    pub fn with_banner_min_minor_faction_cards(mut self, min: usize) -> Self {
        self.banner_min_minor_faction_cards = min;
        self
    }
}
