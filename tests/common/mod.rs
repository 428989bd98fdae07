//! Shared card pool and deck fixtures for integration tests.

#![allow(dead_code)]

use agot_deck::cards::{CardRecord, MemoryCardStore, MemoryPackCatalog, Pack};
use agot_deck::core::{CardCode, CardType, FactionCode};
use agot_deck::deck::DeckSnapshot;
use chrono::NaiveDate;

pub const FEALTY: &str = "01027";
pub const BANNER_OF_THE_STAG: &str = "01198";
pub const BANNER_OF_THE_WOLF: &str = "01203";

/// Number of plots in the pool.
pub const PLOTS: usize = 10;

/// Install a test subscriber. Honors `RUST_LOG`; safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn plot(i: usize) -> String {
    format!("01{:03}", i + 1)
}

pub fn stark(i: usize) -> String {
    format!("02{:03}", i + 1)
}

pub fn baratheon(i: usize) -> String {
    format!("03{:03}", i + 1)
}

pub fn neutral(i: usize) -> String {
    format!("05{:03}", i + 1)
}

/// Loyal baratheon character.
pub const STANNIS: &str = "03100";
/// Loyal lannister character.
pub const TYWIN: &str = "04001";
/// Non-loyal lannister character.
pub const HOUND: &str = "04002";

/// Card pool:
/// - Fealty and the eight core set banners
/// - 10 neutral plots
/// - 30 stark characters (every fifth one loyal)
/// - 20 non-loyal baratheon characters, plus loyal Stannis
/// - loyal Tywin and non-loyal Hound (lannister)
/// - 20 neutral locations from the second pack
pub fn card_pool() -> Vec<CardRecord> {
    let mut cards = vec![CardRecord::new(FEALTY, "Fealty", "neutral", CardType::Agenda)];

    let banners = [
        ("01198", "Banner of the Stag"),
        ("01199", "Banner of the Kraken"),
        ("01200", "Banner of the Lion"),
        ("01201", "Banner of the Sun"),
        ("01202", "Banner of the Watch"),
        ("01203", "Banner of the Wolf"),
        ("01204", "Banner of the Dragon"),
        ("01205", "Banner of the Rose"),
    ];
    for (code, name) in banners {
        cards.push(CardRecord::new(code, name, "neutral", CardType::Agenda));
    }

    for i in 0..PLOTS {
        cards.push(CardRecord::new(plot(i), format!("Plot {i}"), "neutral", CardType::Plot));
    }

    for i in 0..30 {
        let card = CardRecord::new(stark(i), format!("Stark {i}"), "stark", CardType::Character);
        cards.push(if i % 5 == 0 { card.loyal() } else { card });
    }

    for i in 0..20 {
        cards.push(CardRecord::new(
            baratheon(i),
            format!("Baratheon {i}"),
            "baratheon",
            CardType::Character,
        ));
    }
    cards.push(
        CardRecord::new(STANNIS, "Stannis Baratheon", "baratheon", CardType::Character).loyal(),
    );

    cards.push(CardRecord::new(TYWIN, "Tywin Lannister", "lannister", CardType::Character).loyal());
    cards.push(CardRecord::new(HOUND, "The Hound", "lannister", CardType::Character));

    for i in 0..20 {
        cards.push(
            CardRecord::new(neutral(i), format!("Neutral {i}"), "neutral", CardType::Location)
                .in_pack("TtB"),
        );
    }

    cards
}

pub fn store() -> MemoryCardStore {
    MemoryCardStore::from_cards(card_pool()).expect("card pool has unique codes")
}

pub fn catalog() -> MemoryPackCatalog {
    MemoryPackCatalog::from_packs([
        Pack::new("Core", "Core Set", NaiveDate::from_ymd_opt(2015, 10, 1).unwrap()),
        Pack::new("TtB", "Taking the Black", NaiveDate::from_ymd_opt(2016, 1, 14).unwrap()),
    ])
    .expect("catalog has unique codes")
}

/// Empty snapshot for a faction.
pub fn snapshot(faction: &str) -> DeckSnapshot {
    DeckSnapshot {
        id: Some(1),
        name: "Test Deck".to_string(),
        faction_code: FactionCode::new(faction),
        faction_name: format!("House {faction}"),
        ..DeckSnapshot::default()
    }
}

/// A legal stark deck: 7 plots (6 distinct), 60 stark draw cards, no agenda.
pub fn legal_stark_deck() -> DeckSnapshot {
    let mut snapshot = snapshot("stark");
    snapshot.slots.insert(CardCode::new(plot(0)), 2);
    for i in 1..6 {
        snapshot.slots.insert(CardCode::new(plot(i)), 1);
    }
    for i in 0..20 {
        snapshot.slots.insert(CardCode::new(stark(i)), 3);
    }
    snapshot
}
