//! Store queries: filters and sort orders.
//!
//! Filters compose like trigger conditions: leaf predicates on a single
//! record field, combined with `All`, `Any` and `Not`.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::record::CardRecord;
use crate::core::{CardCode, CardType, FactionCode, PackCode};

/// A predicate over card records.
///
/// ## Example
///
/// ```
/// use agot_deck::cards::{CardFilter, CardRecord};
/// use agot_deck::core::CardType;
///
/// let draw_deck = CardFilter::in_deck()
///     .and(CardFilter::TypeNotIn(vec![CardType::Agenda, CardType::Plot]));
///
/// let card = CardRecord::new("01144", "Eddard Stark", "stark", CardType::Character)
///     .with_in_deck(1);
/// assert!(draw_deck.matches(&card));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardFilter {
    // === Field equality ===

    /// Card code equals.
    Code(CardCode),

    /// Faction equals.
    Faction(FactionCode),

    /// Type equals.
    Type(CardType),

    /// Loyalty flag equals.
    Loyal(bool),

    // === Set membership ===

    /// Type is one of.
    TypeIn(Vec<CardType>),

    /// Type is none of.
    TypeNotIn(Vec<CardType>),

    /// Pack is one of.
    PackIn(Vec<PackCode>),

    // === Numeric ===

    /// In-deck quantity is strictly greater than.
    InDeckGreaterThan(u32),

    // === Combinators ===

    /// All filters must match. Empty matches everything.
    All(Vec<CardFilter>),

    /// At least one filter must match. Empty matches nothing.
    Any(Vec<CardFilter>),

    /// Filter must not match.
    Not(Box<CardFilter>),
}

impl CardFilter {
    /// Filter matching every record.
    #[must_use]
    pub fn everything() -> Self {
        CardFilter::All(Vec::new())
    }

    /// Filter matching records with at least one copy in the deck.
    #[must_use]
    pub fn in_deck() -> Self {
        CardFilter::InDeckGreaterThan(0)
    }

    /// Combine with another filter; both must match.
    #[must_use]
    pub fn and(self, other: CardFilter) -> Self {
        match self {
            CardFilter::All(mut filters) => {
                filters.push(other);
                CardFilter::All(filters)
            }
            first => CardFilter::All(vec![first, other]),
        }
    }

    /// Negate this filter.
    #[must_use]
    pub fn negate(self) -> Self {
        CardFilter::Not(Box::new(self))
    }

    /// Check if a record matches.
    #[must_use]
    pub fn matches(&self, card: &CardRecord) -> bool {
        match self {
            CardFilter::Code(code) => card.code == *code,
            CardFilter::Faction(faction) => card.faction == *faction,
            CardFilter::Type(card_type) => card.card_type == *card_type,
            CardFilter::Loyal(loyal) => card.is_loyal == *loyal,
            CardFilter::TypeIn(types) => types.contains(&card.card_type),
            CardFilter::TypeNotIn(types) => !types.contains(&card.card_type),
            CardFilter::PackIn(packs) => packs.contains(&card.pack),
            CardFilter::InDeckGreaterThan(n) => card.in_deck > *n,
            CardFilter::All(filters) => filters.iter().all(|f| f.matches(card)),
            CardFilter::Any(filters) => filters.iter().any(|f| f.matches(card)),
            CardFilter::Not(filter) => !filter.matches(card),
        }
    }
}

/// Record field a sort key reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    Code,
    Name,
    Faction,
    Type,
    Pack,
    InDeck,
}

/// Sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// One sort key: a field and a direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortKey {
    /// Ascending key.
    #[must_use]
    pub const fn asc(field: SortField) -> Self {
        Self { field, order: SortOrder::Ascending }
    }

    /// Descending key.
    #[must_use]
    pub const fn desc(field: SortField) -> Self {
        Self { field, order: SortOrder::Descending }
    }

    fn compare(&self, a: &CardRecord, b: &CardRecord) -> Ordering {
        let ordering = match self.field {
            SortField::Code => a.code.cmp(&b.code),
            SortField::Name => a.name.cmp(&b.name),
            SortField::Faction => a.faction.cmp(&b.faction),
            SortField::Type => a.card_type.cmp(&b.card_type),
            SortField::Pack => a.pack.cmp(&b.pack),
            SortField::InDeck => a.in_deck.cmp(&b.in_deck),
        };
        match self.order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

/// Multi-key sort order, compared key by key.
///
/// SmallVec keeps the common 1-3 key case off the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub keys: SmallVec<[SortKey; 4]>,
}

impl SortSpec {
    /// Empty sort (store order).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sort by a single key.
    #[must_use]
    pub fn by(key: SortKey) -> Self {
        Self::new().then(key)
    }

    /// Append a key (builder pattern).
    #[must_use]
    pub fn then(mut self, key: SortKey) -> Self {
        self.keys.push(key);
        self
    }

    /// Append an ascending code key unless the last key already is one.
    ///
    /// Codes are unique, so this makes any sort total.
    #[must_use]
    pub fn with_code_tiebreak(self) -> Self {
        if self.keys.last() == Some(&SortKey::asc(SortField::Code)) {
            self
        } else {
            self.then(SortKey::asc(SortField::Code))
        }
    }

    /// Check if no keys are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Compare two records.
    #[must_use]
    pub fn compare(&self, a: &CardRecord, b: &CardRecord) -> Ordering {
        self.keys
            .iter()
            .map(|key| key.compare(a, b))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}
