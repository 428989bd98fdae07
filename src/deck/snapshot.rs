//! Deck snapshots as served by the deckbuilder backend.
//!
//! A snapshot seeds one editing session. Fields missing from the payload
//! take their default; `null` is accepted wherever the backend sends it
//! for a deck that was never saved.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::core::{CardCode, DeckError, FactionCode};

/// Initialization payload for a deck.
///
/// ## Example
///
/// ```
/// use agot_deck::deck::DeckSnapshot;
///
/// let snapshot = DeckSnapshot::from_json(r#"{
///     "id": 42,
///     "name": "Winter is Coming",
///     "faction_code": "stark",
///     "faction_name": "House Stark",
///     "tags": "rush competitive",
///     "slots": {"01144": 1, "01027": 1}
/// }"#).unwrap();
///
/// assert_eq!(snapshot.id, Some(42));
/// assert_eq!(snapshot.tags.len(), 2);
/// assert_eq!(snapshot.slots.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckSnapshot {
    pub id: Option<u64>,

    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    pub faction_code: FactionCode,

    #[serde(deserialize_with = "null_as_default")]
    pub faction_name: String,

    pub date_creation: Option<DateTime<Utc>>,

    pub date_update: Option<DateTime<Utc>>,

    pub description_md: Option<String>,

    /// Change history. Opaque to the deck engines.
    pub history: serde_json::Value,

    /// Tags. Accepts a whitespace-separated string or a list.
    #[serde(deserialize_with = "deserialize_tags")]
    pub tags: BTreeSet<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub unsaved: bool,

    pub user_id: Option<u64>,

    /// Card code -> requested quantity.
    #[serde(deserialize_with = "null_as_default")]
    pub slots: BTreeMap<CardCode, u32>,
}

impl DeckSnapshot {
    /// Parse a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, DeckError> {
        Ok(serde_json::from_str(json)?)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TagsRepr {
    Text(String),
    List(Vec<String>),
}

fn deserialize_tags<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags = match Option::<TagsRepr>::deserialize(deserializer)? {
        None => BTreeSet::new(),
        Some(TagsRepr::Text(text)) => text.split_whitespace().map(str::to_string).collect(),
        Some(TagsRepr::List(list)) => list
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect(),
    };
    Ok(tags)
}
