//! Deck legality: card inclusion policy and the problem rule chain.
//!
//! ## Inclusion
//!
//! A card can be included if it is neutral, belongs to the deck's faction,
//! or, when not loyal, belongs to the minor faction granted by a banner
//! agenda.
//!
//! ## Problems
//!
//! `Problem::RULE_CHAIN` lists every construction rule in evaluation order.
//! The first rule a deck breaks is its problem; a deck breaking none is
//! legal. Problem codes are an external contract (message lookups key on
//! them) and are kept verbatim, including `too_many_different_plots` for
//! the minimum-variety rule.

use serde::{Deserialize, Serialize};

use super::derivation::DeckView;
use crate::cards::{CardFilter, CardRecord, CardStore};
use crate::core::{CardCode, FactionCode};

/// Code of the Fealty agenda.
pub const FEALTY: &str = "01027";

/// Mapping from banner agendas to the minor faction they grant.
///
/// ## Example
///
/// ```
/// use agot_deck::core::{CardCode, FactionCode};
/// use agot_deck::deck::BannerTable;
///
/// let stag = CardCode::new("01198");
/// assert_eq!(BannerTable::CORE_SET.minor_faction(&stag), Some(FactionCode::new("baratheon")));
/// assert!(!BannerTable::CORE_SET.contains(&CardCode::new("01027")));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BannerTable {
    entries: &'static [(&'static str, &'static str)],
}

impl BannerTable {
    /// The eight core set banners.
    pub const CORE_SET: BannerTable = BannerTable::new(&[
        ("01198", "baratheon"),
        ("01199", "greyjoy"),
        ("01200", "lannister"),
        ("01201", "martell"),
        ("01202", "nightswatch"),
        ("01203", "stark"),
        ("01204", "targaryen"),
        ("01205", "tyrell"),
    ]);

    /// Create a table from (agenda code, faction code) pairs.
    #[must_use]
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Faction granted by `agenda`, if it is a banner.
    #[must_use]
    pub fn minor_faction(&self, agenda: &CardCode) -> Option<FactionCode> {
        self.entries
            .iter()
            .find(|(code, _)| *code == agenda.as_str())
            .map(|(_, faction)| FactionCode::new(*faction))
    }

    /// Check if `agenda` is a banner.
    #[must_use]
    pub fn contains(&self, agenda: &CardCode) -> bool {
        self.entries.iter().any(|(code, _)| *code == agenda.as_str())
    }

    /// Iterate over (agenda, faction) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (CardCode, FactionCode)> + '_ {
        self.entries
            .iter()
            .map(|(agenda, faction)| (CardCode::new(*agenda), FactionCode::new(*faction)))
    }

    /// Number of banners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Extra construction constraint imposed by a specific agenda.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AgendaRule {
    /// Fealty: at most `DeckRules::fealty_max_neutral_cards` distinct neutral cards.
    NeutralCardLimit,

    /// Banners: at least `DeckRules::banner_min_minor_faction_cards` distinct
    /// cards from the banner's faction.
    MinorFactionMinimum(FactionCode),
}

impl AgendaRule {
    /// The rule attached to an agenda, if any.
    #[must_use]
    pub fn for_agenda(agenda: &CardCode) -> Option<Self> {
        if agenda.as_str() == FEALTY {
            return Some(AgendaRule::NeutralCardLimit);
        }
        BannerTable::CORE_SET
            .minor_faction(agenda)
            .map(AgendaRule::MinorFactionMinimum)
    }

    /// Check if the deck breaks this rule.
    #[must_use]
    pub fn is_broken_by<S: CardStore + ?Sized>(&self, view: &DeckView<'_, S>) -> bool {
        let rules = view.rules();
        match self {
            AgendaRule::NeutralCardLimit => {
                view.count_in_deck(CardFilter::Faction(FactionCode::neutral()))
                    > rules.fealty_max_neutral_cards
            }
            AgendaRule::MinorFactionMinimum(faction) => {
                view.count_in_deck(CardFilter::Faction(faction.clone()))
                    < rules.banner_min_minor_faction_cards
            }
        }
    }
}

/// Deck legality problem.
///
/// Serialized as the problem code (`"too_many_plots"`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Problem {
    /// More plot copies than the plot deck size.
    TooManyPlots,
    /// Fewer plot copies than the plot deck size.
    TooFewPlots,
    /// Fewer distinct plots than the minimum variety.
    TooManyDifferentPlots,
    /// More agendas than allowed.
    TooManyAgendas,
    /// Draw deck below the minimum size.
    TooFewCards,
    /// At least one card the deck cannot include.
    InvalidCards,
    /// The agenda's own constraint is not met.
    Agenda,
}

impl Problem {
    /// Every rule, in evaluation order.
    pub const RULE_CHAIN: [Problem; 7] = [
        Problem::TooManyPlots,
        Problem::TooFewPlots,
        Problem::TooManyDifferentPlots,
        Problem::TooManyAgendas,
        Problem::TooFewCards,
        Problem::InvalidCards,
        Problem::Agenda,
    ];

    /// The problem code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Problem::TooManyPlots => "too_many_plots",
            Problem::TooFewPlots => "too_few_plots",
            Problem::TooManyDifferentPlots => "too_many_different_plots",
            Problem::TooManyAgendas => "too_many_agendas",
            Problem::TooFewCards => "too_few_cards",
            Problem::InvalidCards => "invalid_cards",
            Problem::Agenda => "agenda",
        }
    }

    /// Check if the deck has this problem, regardless of earlier rules.
    #[must_use]
    pub fn is_present_in<S: CardStore + ?Sized>(self, view: &DeckView<'_, S>) -> bool {
        let rules = view.rules();
        match self {
            Problem::TooManyPlots => view.plot_deck_size() > rules.plot_deck_size,
            Problem::TooFewPlots => view.plot_deck_size() < rules.plot_deck_size,
            Problem::TooManyDifferentPlots => view.plot_deck_variety() < rules.min_plot_variety,
            Problem::TooManyAgendas => view.agendas().len() > rules.max_agendas,
            Problem::TooFewCards => view.draw_deck_size() < rules.min_draw_deck_size,
            Problem::InvalidCards => !view.invalid_cards().is_empty(),
            Problem::Agenda => view
                .agenda()
                .and_then(|agenda| AgendaRule::for_agenda(&agenda.code))
                .is_some_and(|rule| rule.is_broken_by(view)),
        }
    }
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl<'a, S: CardStore + ?Sized> DeckView<'a, S> {
    /// Check if the deck may include `card`.
    ///
    /// Checked in order, first match wins:
    /// 1. neutral card: yes
    /// 2. card of the deck's faction: yes
    /// 3. loyal card of another faction: no
    /// 4. card of the banner's minor faction: yes, otherwise no
    #[must_use]
    pub fn can_include_card(&self, card: &CardRecord) -> bool {
        if card.is_neutral() {
            return true;
        }
        if card.faction == *self.faction_code() {
            return true;
        }
        if card.is_loyal {
            return false;
        }
        self.minor_faction_code()
            .is_some_and(|minor| minor == card.faction)
    }

    /// In-deck cards the deck may not include.
    #[must_use]
    pub fn invalid_cards(&self) -> Vec<&'a CardRecord> {
        self.cards()
            .into_iter()
            .filter(|card| !self.can_include_card(card))
            .collect()
    }

    /// Every problem the deck has, in rule chain order.
    #[must_use]
    pub fn problems(&self) -> Vec<Problem> {
        Problem::RULE_CHAIN
            .into_iter()
            .filter(|problem| problem.is_present_in(self))
            .collect()
    }

    /// The deck's problem: the first rule it breaks, or `None` if legal.
    #[must_use]
    pub fn problem(&self) -> Option<Problem> {
        let problem = Problem::RULE_CHAIN
            .into_iter()
            .find(|problem| problem.is_present_in(self));
        tracing::trace!(problem = ?problem, "evaluated deck legality");
        problem
    }

    /// Check if the deck has no problem.
    #[must_use]
    pub fn is_legal(&self) -> bool {
        self.problem().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardPatch, MemoryCardStore};
    use crate::core::{CardType, DeckRules};
    use crate::deck::{DeckSnapshot, DeckState};

    fn state(faction: &str) -> DeckState {
        let snapshot = DeckSnapshot {
            faction_code: FactionCode::new(faction),
            ..DeckSnapshot::default()
        };
        DeckState::from_snapshot(snapshot).0
    }

    fn store() -> MemoryCardStore {
        MemoryCardStore::from_cards([
            CardRecord::new("01027", "Fealty", "neutral", CardType::Agenda),
            CardRecord::new("01198", "Banner of the Stag", "neutral", CardType::Agenda),
            CardRecord::new("01203", "Banner of the Wolf", "neutral", CardType::Agenda),
            CardRecord::new("01048", "Stannis Baratheon", "baratheon", CardType::Character).loyal(),
            CardRecord::new("01052", "Shireen Baratheon", "baratheon", CardType::Character),
            CardRecord::new("01087", "Tywin Lannister", "lannister", CardType::Character).loyal(),
            CardRecord::new("01144", "Eddard Stark", "stark", CardType::Character).loyal(),
            CardRecord::new("01172", "Viserys Targaryen", "targaryen", CardType::Character),
            CardRecord::new("01039", "The Kingsroad", "neutral", CardType::Location),
        ])
        .unwrap()
    }

    fn card<'s>(store: &'s MemoryCardStore, code: &str) -> &'s CardRecord {
        store.find_by_id(&CardCode::new(code)).unwrap()
    }

    #[test]
    fn test_problem_codes() {
        let codes: Vec<_> = Problem::RULE_CHAIN.iter().map(|p| p.code()).collect();
        assert_eq!(
            codes,
            vec![
                "too_many_plots",
                "too_few_plots",
                "too_many_different_plots",
                "too_many_agendas",
                "too_few_cards",
                "invalid_cards",
                "agenda",
            ]
        );
        for problem in Problem::RULE_CHAIN {
            let json = serde_json::to_string(&problem).unwrap();
            assert_eq!(json, format!("\"{}\"", problem.code()));
            assert_eq!(problem.to_string(), problem.code());
        }
    }

    #[test]
    fn test_banner_table() {
        let table = BannerTable::CORE_SET;
        assert_eq!(table.len(), 8);
        assert!(!table.is_empty());
        assert_eq!(
            table.minor_faction(&CardCode::new("01205")),
            Some(FactionCode::new("tyrell"))
        );
        assert_eq!(table.minor_faction(&CardCode::new("01206")), None);

        let factions: Vec<_> = table.iter().map(|(_, f)| f).collect();
        assert!(factions.contains(&FactionCode::new("nightswatch")));
    }

    #[test]
    fn test_custom_banner_table() {
        const TABLE: BannerTable = BannerTable::new(&[("99001", "stark")]);
        assert!(TABLE.contains(&CardCode::new("99001")));
        assert_eq!(TABLE.len(), 1);
    }

    #[test]
    fn test_agenda_rule_lookup() {
        assert_eq!(
            AgendaRule::for_agenda(&CardCode::new(FEALTY)),
            Some(AgendaRule::NeutralCardLimit)
        );
        assert_eq!(
            AgendaRule::for_agenda(&CardCode::new("01198")),
            Some(AgendaRule::MinorFactionMinimum(FactionCode::new("baratheon")))
        );
        assert_eq!(AgendaRule::for_agenda(&CardCode::new("01144")), None);
    }

    #[test]
    fn test_neutral_and_own_faction_always_included() {
        let store = store();
        let state = state("stark");
        let rules = DeckRules::default();
        let view = DeckView::new(&store, &state, &rules);

        assert!(view.can_include_card(card(&store, "01039")));
        assert!(view.can_include_card(card(&store, "01144")));
    }

    #[test]
    fn test_loyal_out_of_faction_excluded() {
        let store = store();
        let state = state("stark");
        let rules = DeckRules::default();
        let view = DeckView::new(&store, &state, &rules);

        assert!(!view.can_include_card(card(&store, "01087")));
    }

    #[test]
    fn test_non_loyal_out_of_faction_needs_banner() {
        let mut store = store();
        let state = state("stark");
        let rules = DeckRules::default();

        {
            let view = DeckView::new(&store, &state, &rules);
            assert!(!view.can_include_card(card(&store, "01052")));
        }

        store.update_by_id(&CardCode::new("01198"), &CardPatch::in_deck(1));
        let view = DeckView::new(&store, &state, &rules);

        // Shireen is a non-loyal baratheon card, Stannis is loyal.
        assert!(view.can_include_card(card(&store, "01052")));
        assert!(!view.can_include_card(card(&store, "01048")));
        // Wrong minor faction.
        assert!(!view.can_include_card(card(&store, "01172")));
    }

    #[test]
    fn test_invalid_cards() {
        let mut store = store();
        store.update_by_id(&CardCode::new("01144"), &CardPatch::in_deck(1));
        store.update_by_id(&CardCode::new("01087"), &CardPatch::in_deck(2));
        store.update_by_id(&CardCode::new("01172"), &CardPatch::in_deck(1));

        let state = state("stark");
        let rules = DeckRules::default();
        let view = DeckView::new(&store, &state, &rules);

        let invalid: Vec<_> = view.invalid_cards().into_iter().map(|c| c.code.as_str()).collect();
        assert_eq!(invalid, vec!["01087", "01172"]);
    }

    #[test]
    fn test_empty_deck_problems() {
        let store = store();
        let state = state("stark");
        let rules = DeckRules::default();
        let view = DeckView::new(&store, &state, &rules);

        assert_eq!(view.problem(), Some(Problem::TooFewPlots));
        assert!(!view.is_legal());
        assert_eq!(
            view.problems(),
            vec![Problem::TooFewPlots, Problem::TooManyDifferentPlots, Problem::TooFewCards]
        );
    }
}
