//! Pack catalog.
//!
//! Packs are ordered by release date (`available`). Packs without a
//! release date (announced, not yet out) sort after every released pack.

use std::cmp::Ordering;

use chrono::NaiveDate;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::core::{DeckError, PackCode};

/// A card pack.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pack {
    pub code: PackCode,
    pub name: String,

    /// Release date. `None` for unreleased packs.
    #[serde(default, deserialize_with = "deserialize_available")]
    pub available: Option<NaiveDate>,
}

// Pack data uses an empty string for unreleased packs.
fn deserialize_available<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(date) => NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

impl Pack {
    /// Create a released pack.
    pub fn new(code: impl Into<PackCode>, name: impl Into<String>, available: NaiveDate) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            available: Some(available),
        }
    }

    /// Create a pack with no release date.
    pub fn unreleased(code: impl Into<PackCode>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            available: None,
        }
    }

    /// Release order: by date ascending, unreleased last, then by code.
    ///
    /// Pack data marks unreleased packs with an empty date, which would sort
    /// them first; here they deliberately come after every released pack.
    #[must_use]
    pub fn release_order(&self, other: &Pack) -> Ordering {
        match (self.available, other.available) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
        .then_with(|| self.code.cmp(&other.code))
    }
}

/// Pack lookup contract.
pub trait PackCatalog {
    /// Packs whose code is in `codes`, in release order.
    ///
    /// Unknown codes are skipped.
    fn find_by_codes(&self, codes: &[PackCode]) -> Vec<&Pack>;
}

/// In-memory pack catalog.
#[derive(Clone, Debug, Default)]
pub struct MemoryPackCatalog {
    packs: FxHashMap<PackCode, Pack>,
}

impl MemoryPackCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from packs.
    pub fn from_packs(packs: impl IntoIterator<Item = Pack>) -> Result<Self, DeckError> {
        let mut catalog = Self::new();
        for pack in packs {
            catalog.insert(pack)?;
        }
        Ok(catalog)
    }

    /// Build a catalog from a JSON array of packs.
    pub fn from_json(json: &str) -> Result<Self, DeckError> {
        let packs: Vec<Pack> = serde_json::from_str(json)?;
        Self::from_packs(packs)
    }

    /// Add a pack. Fails if the code is taken.
    pub fn insert(&mut self, pack: Pack) -> Result<(), DeckError> {
        if self.packs.contains_key(&pack.code) {
            return Err(DeckError::DuplicatePack(pack.code));
        }
        self.packs.insert(pack.code.clone(), pack);
        Ok(())
    }

    /// Get a pack by code.
    #[must_use]
    pub fn get(&self, code: &PackCode) -> Option<&Pack> {
        self.packs.get(code)
    }

    /// Number of packs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.packs.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }
}

impl PackCatalog for MemoryPackCatalog {
    fn find_by_codes(&self, codes: &[PackCode]) -> Vec<&Pack> {
        let mut found: Vec<_> = self
            .packs
            .values()
            .filter(|p| codes.contains(&p.code))
            .collect();
        found.sort_by(|a, b| a.release_order(b));
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn catalog() -> MemoryPackCatalog {
        MemoryPackCatalog::from_packs([
            Pack::new("TtB", "Taking the Black", date(2016, 1, 14)),
            Pack::new("Core", "Core Set", date(2015, 10, 1)),
            Pack::unreleased("TKP", "The King's Peace"),
            Pack::new("TRtW", "The Road to Winterfell", date(2016, 2, 4)),
        ])
        .unwrap()
    }

    #[test]
    fn test_find_in_release_order() {
        let catalog = catalog();
        let codes = vec![PackCode::new("TKP"), PackCode::new("TtB"), PackCode::new("Core")];

        let names: Vec<_> = catalog
            .find_by_codes(&codes)
            .into_iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Core Set", "Taking the Black", "The King's Peace"]);
    }

    #[test]
    fn test_unknown_codes_skipped() {
        let catalog = catalog();
        let found = catalog.find_by_codes(&[PackCode::new("Nope")]);
        assert!(found.is_empty());
    }

    #[test]
    fn test_duplicate_pack() {
        let mut catalog = catalog();
        let result = catalog.insert(Pack::unreleased("Core", "Again"));
        assert!(matches!(result, Err(DeckError::DuplicatePack(_))));
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_from_json_empty_date() {
        let json = r#"[
            {"code": "Core", "name": "Core Set", "available": "2015-10-01"},
            {"code": "TKP", "name": "The King's Peace", "available": ""},
            {"code": "WotN", "name": "Wolves of the North"}
        ]"#;
        let catalog = MemoryPackCatalog::from_json(json).unwrap();

        assert_eq!(
            catalog.get(&PackCode::new("Core")).unwrap().available,
            Some(date(2015, 10, 1))
        );
        assert_eq!(catalog.get(&PackCode::new("TKP")).unwrap().available, None);
        assert_eq!(catalog.get(&PackCode::new("WotN")).unwrap().available, None);
    }

    #[test]
    fn test_bad_date_rejected() {
        let json = r#"[{"code": "Core", "name": "Core Set", "available": "October"}]"#;
        assert!(MemoryPackCatalog::from_json(json).is_err());
    }
}
