//! Outcome decks: construction, shuffling, and drawing.
//!
//! Every attribute deck holds a variable number of common successes plus a
//! fixed tail of one critical success, eleven failures and one critical
//! failure. All randomness is spent when the deck is built; drawing just
//! walks the deck from its end.

use serde::{Deserialize, Serialize};

use crate::attribute::{Attribute, AttributeMap};
use crate::card::{Card, CardKind};
use crate::random::RandomSource;

/// Critical success cards in every deck.
pub const CRITICAL_SUCCESSES: u32 = 1;
/// Common failure cards in every deck.
pub const COMMON_FAILURES: u32 = 11;
/// Critical failure cards in every deck.
pub const CRITICAL_FAILURES: u32 = 1;
/// Cards present regardless of the success count.
pub const FIXED_CARDS: u32 = CRITICAL_SUCCESSES + COMMON_FAILURES + CRITICAL_FAILURES;
/// Common successes each attribute starts with.
pub const STARTING_SUCCESSES: u32 = 8;

/// The card counts a deck is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckComposition {
    /// Common success cards.
    pub successes: u32,
    /// Critical success cards.
    pub critical_successes: u32,
    /// Common failure cards.
    pub failures: u32,
    /// Critical failure cards.
    pub critical_failures: u32,
}

impl DeckComposition {
    /// The composition of a freshly built deck with `success_count` common successes.
    pub fn for_successes(success_count: u32) -> Self {
        Self {
            successes: success_count,
            critical_successes: CRITICAL_SUCCESSES,
            failures: COMMON_FAILURES,
            critical_failures: CRITICAL_FAILURES,
        }
    }

    /// Number of cards of the given kind.
    pub fn count(&self, kind: CardKind) -> u32 {
        match kind {
            CardKind::Success => self.successes,
            CardKind::CriticalSuccess => self.critical_successes,
            CardKind::Failure => self.failures,
            CardKind::CriticalFailure => self.critical_failures,
        }
    }

    /// Success cards of either kind.
    pub fn success_total(&self) -> u32 {
        self.successes.saturating_add(self.critical_successes)
    }

    /// Failure cards of either kind.
    pub fn failure_total(&self) -> u32 {
        self.failures + self.critical_failures
    }

    /// Total number of cards.
    pub fn total(&self) -> u32 {
        self.success_total().saturating_add(self.failure_total())
    }
}

impl std::fmt::Display for DeckComposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} successes · {} failures",
            self.success_total(),
            self.failure_total()
        )
    }
}

/// What is left in a deck, grouped the way the table reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeckStats {
    /// Remaining success cards of either kind.
    pub successes_left: usize,
    /// Remaining failure cards of either kind.
    pub failures_left: usize,
    /// Remaining cards.
    pub total: usize,
}

/// An ordered pile of outcome cards. The top of the deck is the end of the list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Create a deck with the cards in the given order (last card drawn first).
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns how many cards remain.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns true if no cards remain.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The remaining cards, bottom first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Remove and return the top card, or `None` if the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Count remaining cards of one kind.
    pub fn count(&self, kind: CardKind) -> usize {
        self.cards.iter().filter(|c| c.kind == kind).count()
    }

    /// Summarize the remaining cards.
    pub fn stats(&self) -> DeckStats {
        let successes_left = self.cards.iter().filter(|c| c.kind.is_success()).count();
        DeckStats {
            successes_left,
            failures_left: self.cards.len() - successes_left,
            total: self.cards.len(),
        }
    }

    /// Shuffle in place with Fisher-Yates, walking from the last index down.
    pub fn shuffle<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.index_up_to(i);
            self.cards.swap(i, j);
        }
    }
}

/// Build a shuffled deck with `success_count` common successes plus the fixed cards.
pub fn build_deck<R: RandomSource + ?Sized>(success_count: u32, rng: &mut R) -> Deck {
    let composition = DeckComposition::for_successes(success_count);
    let mut cards = Vec::with_capacity(composition.total() as usize);
    for kind in [
        CardKind::Success,
        CardKind::CriticalSuccess,
        CardKind::Failure,
        CardKind::CriticalFailure,
    ] {
        let count = composition.count(kind) as usize;
        cards.extend(std::iter::repeat_n(Card::new(kind), count));
    }

    let mut deck = Deck::from_cards(cards);
    deck.shuffle(rng);
    deck
}

/// Build one deck per attribute, in attribute order.
pub fn build_all_decks<R: RandomSource + ?Sized>(
    success_counts: &AttributeMap<u32>,
    rng: &mut R,
) -> AttributeMap<Deck> {
    AttributeMap::from_fn(|attr: Attribute| build_deck(success_counts[attr], &mut *rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SequenceSource;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn assert_composition(deck: &Deck, successes: usize) {
        assert_eq!(deck.len(), successes + 13);
        assert_eq!(deck.count(CardKind::Success), successes);
        assert_eq!(deck.count(CardKind::CriticalSuccess), 1);
        assert_eq!(deck.count(CardKind::Failure), 11);
        assert_eq!(deck.count(CardKind::CriticalFailure), 1);
    }

    #[test]
    fn fixed_card_count() {
        assert_eq!(FIXED_CARDS, 13);
    }

    #[test]
    fn starting_deck_has_twenty_one_cards() {
        let mut rng = StdRng::seed_from_u64(42);
        let deck = build_deck(STARTING_SUCCESSES, &mut rng);
        assert_eq!(deck.len(), 21);
        assert_composition(&deck, 8);
    }

    #[test]
    fn zero_successes_still_has_fixed_cards() {
        let mut rng = StdRng::seed_from_u64(1);
        let deck = build_deck(0, &mut rng);
        assert_composition(&deck, 0);
    }

    #[test]
    fn top_sample_keeps_build_order() {
        // j == i at every step, so every swap is a no-op.
        let mut rng = SequenceSource::constant(0.999_999);
        let mut deck = build_deck(2, &mut rng);
        assert_eq!(deck.draw().unwrap().kind, CardKind::CriticalFailure);
        for _ in 0..11 {
            assert_eq!(deck.draw().unwrap().kind, CardKind::Failure);
        }
        assert_eq!(deck.draw().unwrap().kind, CardKind::CriticalSuccess);
        assert_eq!(deck.draw().unwrap().kind, CardKind::Success);
        assert_eq!(deck.draw().unwrap().kind, CardKind::Success);
        assert!(deck.draw().is_none());
    }

    #[test]
    fn zero_sample_rotates_first_card_to_top() {
        // Swapping each index with 0 walking down moves the original first
        // card to the end, then shifts the rest.
        let mut deck = Deck::from_cards(vec![
            Card::new(CardKind::Success),
            Card::new(CardKind::Failure),
            Card::new(CardKind::CriticalFailure),
        ]);
        deck.shuffle(&mut SequenceSource::constant(0.0));
        let kinds: Vec<CardKind> = deck.cards().iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![CardKind::Failure, CardKind::CriticalFailure, CardKind::Success]
        );
    }

    #[test]
    fn shuffle_deterministic_with_seed() {
        let a = build_deck(8, &mut StdRng::seed_from_u64(99));
        let b = build_deck(8, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_reaches_every_position() {
        // The lone critical success must be able to land anywhere.
        let mut rng = StdRng::seed_from_u64(5);
        let mut seen = [false; 14];
        for _ in 0..2000 {
            let deck = build_deck(1, &mut rng);
            let pos = deck
                .cards()
                .iter()
                .position(|c| c.kind == CardKind::CriticalSuccess)
                .unwrap();
            seen[pos] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn draw_takes_from_end() {
        let mut deck = Deck::from_cards(vec![
            Card::new(CardKind::Failure),
            Card::new(CardKind::Success),
        ]);
        assert_eq!(deck.draw(), Some(Card::new(CardKind::Success)));
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.draw(), Some(Card::new(CardKind::Failure)));
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), None);
    }

    #[test]
    fn stats_group_by_outcome() {
        let mut rng = StdRng::seed_from_u64(3);
        let deck = build_deck(8, &mut rng);
        assert_eq!(
            deck.stats(),
            DeckStats {
                successes_left: 9,
                failures_left: 12,
                total: 21,
            }
        );
    }

    #[test]
    fn composition_summary() {
        let c = DeckComposition::for_successes(8);
        assert_eq!(c.total(), 21);
        assert_eq!(c.to_string(), "9 successes · 12 failures");
    }

    #[test]
    fn build_all_decks_uses_each_count() {
        let mut counts = AttributeMap::splat(8u32);
        counts[Attribute::Charisma] = 20;
        counts[Attribute::Strength] = 0;
        let decks = build_all_decks(&counts, &mut StdRng::seed_from_u64(11));
        assert_eq!(decks[Attribute::Charisma].len(), 33);
        assert_eq!(decks[Attribute::Strength].len(), 13);
        assert_eq!(decks[Attribute::Wisdom].len(), 21);
    }

    proptest! {
        #[test]
        fn built_deck_has_exact_multiset(successes in 0u32..200, seed in any::<u64>()) {
            let deck = build_deck(successes, &mut StdRng::seed_from_u64(seed));
            prop_assert_eq!(deck.len(), successes as usize + 13);
            prop_assert_eq!(deck.count(CardKind::Success), successes as usize);
            prop_assert_eq!(deck.count(CardKind::CriticalSuccess), 1);
            prop_assert_eq!(deck.count(CardKind::Failure), 11);
            prop_assert_eq!(deck.count(CardKind::CriticalFailure), 1);
        }

        #[test]
        fn shuffle_is_a_permutation(successes in 0u32..60, samples in proptest::collection::vec(0.0f64..1.0, 1..32)) {
            let mut deck = build_deck(successes, &mut SequenceSource::constant(0.999_999));
            let before = deck.stats();
            deck.shuffle(&mut SequenceSource::new(samples));
            prop_assert_eq!(deck.stats(), before);
            prop_assert_eq!(deck.count(CardKind::CriticalSuccess), 1);
            prop_assert_eq!(deck.count(CardKind::CriticalFailure), 1);
        }
    }
}
