//! Deck state: the scalar metadata of the deck being edited.
//!
//! The card list is deliberately absent. After initialization the card
//! store's `in_deck` quantities are the only record of the deck's cards;
//! the snapshot's slots are consumed as a seed and never kept.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};

use super::snapshot::DeckSnapshot;
use crate::core::{CardCode, FactionCode};

/// Scalar deck metadata.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeckState {
    id: Option<u64>,
    name: String,
    faction_code: FactionCode,
    faction_name: String,
    date_creation: Option<DateTime<Utc>>,
    date_update: Option<DateTime<Utc>>,
    description_md: Option<String>,
    history: serde_json::Value,
    tags: BTreeSet<String>,
    unsaved: bool,
    user_id: Option<u64>,
}

impl DeckState {
    /// Split a snapshot into deck state and its slots.
    #[must_use]
    pub fn from_snapshot(snapshot: DeckSnapshot) -> (Self, BTreeMap<CardCode, u32>) {
        let DeckSnapshot {
            id,
            name,
            faction_code,
            faction_name,
            date_creation,
            date_update,
            description_md,
            history,
            tags,
            unsaved,
            user_id,
            slots,
        } = snapshot;

        let state = Self {
            id,
            name,
            faction_code,
            faction_name,
            date_creation,
            date_update,
            description_md,
            history,
            tags,
            unsaved,
            user_id,
        };
        (state, slots)
    }

    #[must_use]
    pub fn id(&self) -> Option<u64> {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn faction_code(&self) -> &FactionCode {
        &self.faction_code
    }

    #[must_use]
    pub fn faction_name(&self) -> &str {
        &self.faction_name
    }

    #[must_use]
    pub fn date_creation(&self) -> Option<DateTime<Utc>> {
        self.date_creation
    }

    #[must_use]
    pub fn date_update(&self) -> Option<DateTime<Utc>> {
        self.date_update
    }

    /// Markdown description. Empty when the deck has none.
    #[must_use]
    pub fn description_md(&self) -> &str {
        self.description_md.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn history(&self) -> &serde_json::Value {
        &self.history
    }

    #[must_use]
    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Check if the deck has changes not yet saved by the backend.
    #[must_use]
    pub fn is_unsaved(&self) -> bool {
        self.unsaved
    }

    #[must_use]
    pub fn user_id(&self) -> Option<u64> {
        self.user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keeps_scalars_and_returns_slots() {
        let mut snapshot = DeckSnapshot {
            id: Some(12),
            name: "Night Gathers".to_string(),
            faction_code: FactionCode::new("nightswatch"),
            faction_name: "The Night's Watch".to_string(),
            description_md: Some("Defend the Wall.".to_string()),
            user_id: Some(5),
            ..DeckSnapshot::default()
        };
        snapshot.slots.insert(CardCode::new("01125"), 3);

        let (state, slots) = DeckState::from_snapshot(snapshot);

        assert_eq!(state.id(), Some(12));
        assert_eq!(state.name(), "Night Gathers");
        assert_eq!(state.faction_code(), &FactionCode::new("nightswatch"));
        assert_eq!(state.faction_name(), "The Night's Watch");
        assert_eq!(state.description_md(), "Defend the Wall.");
        assert_eq!(state.user_id(), Some(5));
        assert!(!state.is_unsaved());
        assert_eq!(slots.get(&CardCode::new("01125")), Some(&3));
    }

    #[test]
    fn test_missing_description_is_empty() {
        let state = DeckState::default();
        assert_eq!(state.description_md(), "");
        assert!(state.history().is_null());
        assert!(state.tags().is_empty());
    }
}
