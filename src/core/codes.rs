//! Identifier codes used throughout the deckbuilder.
//!
//! Card data identifies everything by short string codes:
//! - `CardCode`: a specific card printing (`"01027"`)
//! - `FactionCode`: a house or the neutral faction (`"stark"`, `"neutral"`)
//! - `PackCode`: the pack a card was released in (`"Core"`)
//!
//! ## Usage
//!
//! ```
//! use agot_deck::core::{CardCode, FactionCode};
//!
//! let fealty = CardCode::new("01027");
//! assert_eq!(fealty.as_str(), "01027");
//!
//! assert!(FactionCode::neutral().is_neutral());
//! assert!(!FactionCode::new("stark").is_neutral());
//! ```

use serde::{Deserialize, Serialize};

macro_rules! string_code {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Create a new code.
            pub fn new(code: impl Into<String>) -> Self {
                Self(code.into())
            }

            /// Get the raw code.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_code!(
    /// Unique identifier of a card record.
    CardCode
);

string_code!(
    /// Faction identifier. `"neutral"` is the faction of unaffiliated cards.
    FactionCode
);

string_code!(
    /// Identifier of the pack a card was released in.
    PackCode
);

impl FactionCode {
    /// Code of the neutral faction.
    pub const NEUTRAL: &'static str = "neutral";

    /// The neutral faction.
    #[must_use]
    pub fn neutral() -> Self {
        Self::new(Self::NEUTRAL)
    }

    /// Check if this is the neutral faction.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        self.0 == Self::NEUTRAL
    }
}

/// Card type. The set of types is closed.
///
/// Serialized as the lowercase type code used by the card data
/// (`"agenda"`, `"plot"`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Agenda,
    Plot,
    Character,
    Attachment,
    Location,
    Event,
}

impl CardType {
    /// Every card type, in the order a deck list presents them.
    pub const PRESENTATION_ORDER: [CardType; 6] = [
        CardType::Agenda,
        CardType::Plot,
        CardType::Character,
        CardType::Attachment,
        CardType::Location,
        CardType::Event,
    ];

    /// Types that never count towards the draw deck.
    pub const OUTSIDE_DRAW_DECK: [CardType; 2] = [CardType::Agenda, CardType::Plot];

    /// The type code as it appears in card data.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            CardType::Agenda => "agenda",
            CardType::Plot => "plot",
            CardType::Character => "character",
            CardType::Attachment => "attachment",
            CardType::Location => "location",
            CardType::Event => "event",
        }
    }

    /// Human-readable type name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            CardType::Agenda => "Agenda",
            CardType::Plot => "Plot",
            CardType::Character => "Character",
            CardType::Attachment => "Attachment",
            CardType::Location => "Location",
            CardType::Event => "Event",
        }
    }

    /// Check if cards of this type belong to the draw deck.
    #[must_use]
    pub fn in_draw_deck(self) -> bool {
        !Self::OUTSIDE_DRAW_DECK.contains(&self)
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
