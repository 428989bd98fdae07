//! Card records - card data plus the live in-deck quantity.
//!
//! A `CardRecord` holds the printed properties of a card (name, faction,
//! type, loyalty, pack) and one mutable field: how many copies the deck
//! currently being edited holds. Records live in a `CardStore` shared by
//! the whole application; decks never create or delete them, they only
//! re-tag `in_deck`.

use serde::{Deserialize, Serialize};

use crate::core::{CardCode, CardType, FactionCode, PackCode};

/// A card record.
///
/// Field names follow the card data files (`faction_code`, `type_code`,
/// `isLoyal`, `pack_code`, `indeck`).
///
/// ## Example
///
/// ```
/// use agot_deck::cards::CardRecord;
/// use agot_deck::core::CardType;
///
/// let ned = CardRecord::new("01144", "Eddard Stark", "stark", CardType::Character)
///     .loyal()
///     .in_pack("Core");
///
/// assert!(ned.is_loyal);
/// assert_eq!(ned.in_deck, 0);
/// assert!(!ned.is_in_deck());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    /// Unique card code.
    pub code: CardCode,

    /// Display name.
    pub name: String,

    /// Faction the card belongs to.
    #[serde(rename = "faction_code")]
    pub faction: FactionCode,

    /// Card type.
    #[serde(rename = "type_code")]
    pub card_type: CardType,

    /// Loyal cards may only be played in their own faction's decks.
    #[serde(rename = "isLoyal", default)]
    pub is_loyal: bool,

    /// Pack the card was released in.
    #[serde(rename = "pack_code")]
    pub pack: PackCode,

    /// Copies in the deck being edited. Zero when not in the deck.
    #[serde(rename = "indeck", default)]
    pub in_deck: u32,
}

impl CardRecord {
    /// Pack assigned by `new` until `in_pack` is called.
    pub const CORE_PACK: &'static str = "Core";

    /// Create a new, non-loyal card record from the core pack.
    pub fn new(
        code: impl Into<CardCode>,
        name: impl Into<String>,
        faction: impl Into<FactionCode>,
        card_type: CardType,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            faction: faction.into(),
            card_type,
            is_loyal: false,
            pack: PackCode::new(Self::CORE_PACK),
            in_deck: 0,
        }
    }

    /// Mark the card as loyal (builder pattern).
    #[must_use]
    pub fn loyal(mut self) -> Self {
        self.is_loyal = true;
        self
    }

    /// Set the origin pack (builder pattern).
    #[must_use]
    pub fn in_pack(mut self, pack: impl Into<PackCode>) -> Self {
        self.pack = pack.into();
        self
    }

    /// Set the in-deck quantity (builder pattern).
    #[must_use]
    pub fn with_in_deck(mut self, quantity: u32) -> Self {
        self.in_deck = quantity;
        self
    }

    /// Check if at least one copy is in the deck.
    #[must_use]
    pub fn is_in_deck(&self) -> bool {
        self.in_deck > 0
    }

    /// Check if the card belongs to the neutral faction.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        self.faction.is_neutral()
    }
}
